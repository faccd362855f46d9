//! Path segmentation.
//!
//! Splits an absolute path into the tokens the trie is keyed by:
//!
//! ```text
//!   /                 → []
//!   /aaa/bbb          → ["aaa", "bbb"]
//!   /test/            → ["test", "/"]
//!   /users/:id        → ["users", ":id"]
//! ```
//!
//! A trailing `/` becomes a final [`TRAILING_SLASH`] token so that `/test`
//! and `/test/` stay distinct routes. Empty interior segments (`//`) are
//! skipped.

use crate::routing::error::{RouteError, RouteResult};

/// Token marking a path that ends with `/`.
pub const TRAILING_SLASH: &str = "/";

/// Prefix marking a named parameter token.
pub const PARAM_PREFIX: char = ':';

/// Split `path` into its ordered segment tokens.
pub fn segments(path: &str) -> RouteResult<Vec<&str>> {
    let rest = path
        .strip_prefix('/')
        .ok_or_else(|| RouteError::invalid_path(path))?;

    let mut tokens: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

    if !tokens.is_empty() && rest.ends_with('/') {
        tokens.push(TRAILING_SLASH);
    }

    Ok(tokens)
}

/// Rebuild a path string from segment tokens, for diagnostics.
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut path = String::new();
    for token in tokens {
        let token = token.as_ref();
        path.push('/');
        if token != TRAILING_SLASH {
            path.push_str(token);
        }
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}

/// Returns the parameter name if `token` is a parameter token.
pub fn param_name(token: &str) -> Option<&str> {
    token.strip_prefix(PARAM_PREFIX)
}
