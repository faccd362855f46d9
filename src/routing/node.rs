//! Route trie nodes and route registration.
//!
//! Each node stands for one segment position. Literal children are keyed by
//! their token; the (single) parameter child lives in its own slot, so two
//! parameter names can never coexist at one depth.

use std::collections::HashMap;

use axum::http::Method;

use crate::routing::error::{RouteError, RouteResult};
use crate::routing::segment::{self, TRAILING_SLASH};

/// One segment position in the route trie.
#[derive(Debug)]
pub struct Node<H> {
    segment: String,
    is_param: bool,
    handlers: HashMap<Method, H>,
    children: HashMap<String, Node<H>>,
    param_child: Option<Box<Node<H>>>,
}

impl<H> Node<H> {
    /// Create the trie root for the given root path.
    pub fn root(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            is_param: false,
            handlers: HashMap::new(),
            children: HashMap::new(),
            param_child: None,
        }
    }

    fn new(token: &str) -> Self {
        Self {
            is_param: segment::param_name(token).is_some(),
            ..Self::root(token)
        }
    }

    /// The token this node was created from (`:name` for parameters).
    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn is_param(&self) -> bool {
        self.is_param
    }

    /// Parameter name without the leading `:`.
    pub fn param_name(&self) -> Option<&str> {
        if self.is_param {
            segment::param_name(&self.segment)
        } else {
            None
        }
    }

    pub fn handler(&self, method: &Method) -> Option<&H> {
        self.handlers.get(method)
    }

    /// Methods bound at this node, sorted by name.
    pub fn methods(&self) -> Vec<Method> {
        let mut methods: Vec<Method> = self.handlers.keys().cloned().collect();
        methods.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        methods
    }

    /// Literal child keyed by `token`.
    pub fn child(&self, token: &str) -> Option<&Node<H>> {
        self.children.get(token)
    }

    pub fn param_child(&self) -> Option<&Node<H>> {
        self.param_child.as_deref()
    }

    /// Bind `handler` for `method` at the node reached by `tokens`, creating
    /// missing nodes on the way. Returns the handler it replaced, if any.
    pub fn insert(&mut self, method: Method, tokens: &[&str], handler: H) -> RouteResult<Option<H>> {
        if tokens.iter().any(|t| segment::param_name(t) == Some("")) {
            return Err(RouteError::UnnamedParam {
                path: segment::join(tokens),
            });
        }

        let mut node = self;
        for token in tokens {
            node = match segment::param_name(token) {
                Some(name) => {
                    let slot = node
                        .param_child
                        .get_or_insert_with(|| Box::new(Node::new(token)));

                    if slot.segment != *token {
                        return Err(RouteError::RouteConflict {
                            path: segment::join(tokens),
                            param: name.to_string(),
                            existing: slot.param_name().unwrap_or_default().to_string(),
                        });
                    }
                    &mut **slot
                }
                None => node
                    .children
                    .entry(token.to_string())
                    .or_insert_with(|| Node::new(token)),
            };
        }

        Ok(node.handlers.insert(method, handler))
    }

    /// Collect every `(method, path)` bound below this node.
    pub(crate) fn collect_routes(&self, path: &mut Vec<String>, out: &mut Vec<(Method, String)>) {
        for method in self.methods() {
            out.push((method, segment::join(path.as_slice())));
        }

        let mut literals: Vec<&Node<H>> = self.children.values().collect();
        literals.sort_by(|a, b| {
            // trailing-slash variant sorts last
            (a.segment == TRAILING_SLASH, &a.segment).cmp(&(b.segment == TRAILING_SLASH, &b.segment))
        });

        for child in literals.into_iter().chain(self.param_child()) {
            path.push(child.segment.clone());
            child.collect_routes(path, out);
            path.pop();
        }
    }
}
