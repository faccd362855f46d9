//! Request-time trie walk.
//!
//! # Precedence
//! - A literal child always wins over the parameter child at the same depth
//! - Once a branch is chosen there is no backtracking into siblings
//! - A parameter never captures the trailing-slash marker
//!
//! The walk is a loop over the segment index, so it runs in exactly
//! `tokens.len()` steps and never recurses.

use axum::http::Method;

use crate::routing::error::{RouteError, RouteResult};
use crate::routing::node::Node;
use crate::routing::params::Params;
use crate::routing::segment::{self, TRAILING_SLASH};

/// A successful lookup: the bound handler and the captured parameters.
#[derive(Debug)]
pub struct Match<'a, H> {
    pub handler: &'a H,
    pub params: Params,
}

/// Walk `tokens` from `root`, recording parameter captures into `params`.
pub fn resolve<'a, H>(
    root: &'a Node<H>,
    tokens: &[&str],
    params: &mut Params,
) -> RouteResult<&'a Node<H>> {
    let mut node = root;

    for &token in tokens {
        node = match node.child(token) {
            Some(child) => child,
            None => match node.param_child() {
                Some(child) if token != TRAILING_SLASH => {
                    if let Some(name) = child.param_name() {
                        params.push(name, token);
                    }
                    child
                }
                _ => {
                    return Err(RouteError::NoRoute {
                        path: segment::join(tokens),
                        segment: token.to_string(),
                    })
                }
            },
        };
    }

    Ok(node)
}

/// Find the handler bound for `method` at the path described by `tokens`.
pub fn find<'a, H>(root: &'a Node<H>, method: &Method, tokens: &[&str]) -> RouteResult<Match<'a, H>> {
    let mut params = Params::new();
    let node = resolve(root, tokens, &mut params)?;

    match node.handler(method) {
        Some(handler) => Ok(Match { handler, params }),
        None => Err(RouteError::NoHandler {
            path: segment::join(tokens),
            method: method.clone(),
            allowed: node.methods(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Node<&'static str> {
        let mut root = Node::root("/");
        root.insert(Method::GET, &[], "root").unwrap();
        root.insert(Method::GET, &["test"], "test").unwrap();
        root.insert(Method::GET, &["test", "/"], "test/").unwrap();
        root.insert(Method::GET, &["aaa", "bbb", "ccc"], "ccc").unwrap();
        root.insert(Method::GET, &["users", ":id"], "user").unwrap();
        root.insert(Method::GET, &["users", "new"], "new").unwrap();
        root.insert(Method::GET, &["users", ":id", "posts", ":post"], "post").unwrap();
        root
    }

    #[test]
    fn test_root() {
        let root = tree();
        let m = find(&root, &Method::GET, &[]).unwrap();
        assert_eq!(*m.handler, "root");
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_literal_over_param() {
        let root = tree();
        let m = find(&root, &Method::GET, &["users", "new"]).unwrap();
        assert_eq!(*m.handler, "new");
        assert!(m.params.is_empty());

        let m = find(&root, &Method::GET, &["users", "42"]).unwrap();
        assert_eq!(*m.handler, "user");
        assert_eq!(m.params.get("id"), Some("42"));
    }

    #[test]
    fn test_interior_params() {
        let root = tree();
        let m = find(&root, &Method::GET, &["users", "7", "posts", "hello"]).unwrap();
        assert_eq!(*m.handler, "post");
        assert_eq!(
            m.params.iter().collect::<Vec<_>>(),
            vec![("id", "7"), ("post", "hello")]
        );
    }

    #[test]
    fn test_no_backtracking() {
        let root = tree();
        // `new` is taken literally, so the `:id/posts/:post` branch is never tried
        let err = find(&root, &Method::GET, &["users", "new", "posts", "x"]).unwrap_err();
        assert_eq!(
            err,
            RouteError::NoRoute {
                path: "/users/new/posts/x".into(),
                segment: "posts".into(),
            }
        );
    }

    #[test]
    fn test_trailing_slash_distinct() {
        let root = tree();
        assert_eq!(*find(&root, &Method::GET, &["test"]).unwrap().handler, "test");
        assert_eq!(*find(&root, &Method::GET, &["test", "/"]).unwrap().handler, "test/");
    }

    #[test]
    fn test_param_skips_trailing_marker() {
        let root = tree();
        let err = find(&root, &Method::GET, &["users", "/"]).unwrap_err();
        assert!(matches!(err, RouteError::NoRoute { .. }));
    }

    #[test]
    fn test_prefix_has_no_handler() {
        let root = tree();
        let err = find(&root, &Method::GET, &["aaa", "bbb"]).unwrap_err();
        assert_eq!(
            err,
            RouteError::NoHandler {
                path: "/aaa/bbb".into(),
                method: Method::GET,
                allowed: vec![],
            }
        );
    }

    #[test]
    fn test_method_isolation() {
        let root = tree();
        let err = find(&root, &Method::POST, &["test"]).unwrap_err();
        match err {
            RouteError::NoHandler { allowed, method, .. } => {
                assert_eq!(method, Method::POST);
                assert_eq!(allowed, vec![Method::GET]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_collects_params_without_handler() {
        let root = tree();
        let mut params = Params::new();
        let node = resolve(&root, &["users", "9", "posts"], &mut params).unwrap();
        assert_eq!(node.segment(), "posts");
        assert_eq!(params.get("id"), Some("9"));
    }
}
