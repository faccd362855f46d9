//! Route registration and lookup facade.
//!
//! # Responsibilities
//! - Own the route trie during the registration phase
//! - Validate paths and register handlers per method
//! - Strip the configured root path before matching
//! - Look up the handler and parameters for a request
//!
//! # Design Decisions
//! - Mutation needs `&mut self`; once shared behind `Arc` the trie is read-only
//! - Re-registering a (method, path) pair replaces the handler (last write wins)
//! - Conflicting parameter names fail at registration, never at request time

use axum::http::Method;

use crate::routing::error::{RouteError, RouteResult};
use crate::routing::matcher::{self, Match};
use crate::routing::node::Node;
use crate::routing::params::Params;
use crate::routing::segment;

/// HTTP request router backed by a segment trie.
#[derive(Debug)]
pub struct Router<H> {
    root: Node<H>,
    root_path: String,
    prefix: Vec<String>,
    len: usize,
}

impl<H> Router<H> {
    /// Create a router mounted at `/`.
    pub fn new() -> Self {
        Self {
            root: Node::root("/"),
            root_path: "/".to_string(),
            prefix: Vec::new(),
            len: 0,
        }
    }

    /// Create a router mounted at `root`.
    ///
    /// Registered paths are relative to the root; requests outside it never
    /// match.
    pub fn with_root(root: &str) -> RouteResult<Self> {
        let prefix: Vec<String> = segment::segments(root)?
            .into_iter()
            .filter(|t| *t != segment::TRAILING_SLASH)
            .map(str::to_string)
            .collect();

        Ok(Self {
            root: Node::root(root),
            root_path: segment::join(prefix.as_slice()),
            prefix,
            len: 0,
        })
    }

    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// Number of distinct (method, path) registrations.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Register `handler` for `method` requests to `path`.
    pub fn route(&mut self, method: Method, path: &str, handler: H) -> RouteResult<()> {
        let tokens = segment::segments(path)?;

        match self.root.insert(method.clone(), &tokens, handler)? {
            Some(_) => {
                tracing::warn!(method = %method, path = %path, "Route re-registered, previous handler replaced");
            }
            None => {
                self.len += 1;
                tracing::debug!(method = %method, path = %path, "Route registered");
            }
        }

        Ok(())
    }

    pub fn get(&mut self, path: &str, handler: H) -> RouteResult<()> {
        self.route(Method::GET, path, handler)
    }

    pub fn post(&mut self, path: &str, handler: H) -> RouteResult<()> {
        self.route(Method::POST, path, handler)
    }

    pub fn put(&mut self, path: &str, handler: H) -> RouteResult<()> {
        self.route(Method::PUT, path, handler)
    }

    pub fn delete(&mut self, path: &str, handler: H) -> RouteResult<()> {
        self.route(Method::DELETE, path, handler)
    }

    pub fn patch(&mut self, path: &str, handler: H) -> RouteResult<()> {
        self.route(Method::PATCH, path, handler)
    }

    pub fn head(&mut self, path: &str, handler: H) -> RouteResult<()> {
        self.route(Method::HEAD, path, handler)
    }

    pub fn options(&mut self, path: &str, handler: H) -> RouteResult<()> {
        self.route(Method::OPTIONS, path, handler)
    }

    /// Look up the handler bound for `method` at `path`.
    ///
    /// ```
    /// use segment_router::routing::Router;
    /// use axum::http::Method;
    ///
    /// let mut router = Router::new();
    /// router.get("/users/:id", "user").unwrap();
    ///
    /// let m = router.at(&Method::GET, "/users/42").unwrap();
    /// assert_eq!(*m.handler, "user");
    /// assert_eq!(m.params.get("id"), Some("42"));
    /// ```
    pub fn at(&self, method: &Method, path: &str) -> RouteResult<Match<'_, H>> {
        let tokens = segment::segments(path)?;
        let tokens = self.strip_root(path, &tokens)?;
        matcher::find(&self.root, method, tokens)
    }

    /// Methods with a handler at the node `path` resolves to.
    pub fn allowed(&self, path: &str) -> Vec<Method> {
        let Ok(tokens) = segment::segments(path) else {
            return Vec::new();
        };
        let Ok(tokens) = self.strip_root(path, &tokens) else {
            return Vec::new();
        };

        matcher::resolve(&self.root, tokens, &mut Params::new())
            .map(Node::methods)
            .unwrap_or_default()
    }

    /// Every registered (method, path) pair, ordered by path.
    pub fn routes(&self) -> Vec<(Method, String)> {
        let mut routes = Vec::with_capacity(self.len);
        let mut path = self.prefix.clone();
        self.root.collect_routes(&mut path, &mut routes);
        routes
    }

    fn strip_root<'t, 'p>(&self, path: &str, tokens: &'t [&'p str]) -> RouteResult<&'t [&'p str]> {
        for (i, expected) in self.prefix.iter().enumerate() {
            match tokens.get(i) {
                Some(token) if token == expected => {}
                other => {
                    return Err(RouteError::NoRoute {
                        path: path.to_string(),
                        segment: other.map(|t| t.to_string()).unwrap_or_default(),
                    })
                }
            }
        }
        Ok(&tokens[self.prefix.len()..])
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}
