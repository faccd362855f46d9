//! Routing error taxonomy.

use axum::http::Method;
use thiserror::Error;

/// Errors raised while registering or matching routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The path does not start with `/`.
    #[error("path must begin with '/': {path:?}")]
    InvalidPath { path: String },

    /// A parameter token without a name (`:`).
    #[error("parameter in {path:?} must be registered with a name")]
    UnnamedParam { path: String },

    /// Two different parameter names registered at the same depth.
    #[error("parameter :{param} in {path:?} conflicts with existing parameter :{existing}")]
    RouteConflict {
        path: String,
        param: String,
        existing: String,
    },

    /// No literal or parameter child matches a segment.
    #[error("no route for segment {segment:?} in {path:?}")]
    NoRoute { path: String, segment: String },

    /// The path resolves to a node without a handler for the method.
    #[error("no {method} handler for {path:?}")]
    NoHandler {
        path: String,
        method: Method,
        /// Methods that do have a handler at the resolved node.
        allowed: Vec<Method>,
    },
}

impl RouteError {
    /// Returns true for the errors that surface as "not found" to clients.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoRoute { .. } | Self::NoHandler { .. })
    }

    pub(crate) fn invalid_path(path: &str) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
        }
    }
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;
