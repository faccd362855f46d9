//! Request-scoped accessors.
//!
//! # Responsibilities
//! - Expose captured path parameters to handlers by name
//! - Expose the request ID assigned by the request-id layer
//!
//! # Design Decisions
//! - Parameters travel in the request extensions, never in shared state
//! - A missing request ID reads as "unknown" rather than failing

use axum::http::Request;

use crate::routing::Params;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Access to the parameters captured by the router.
pub trait ParamsExt {
    /// All captured parameters, if the request went through the dispatcher.
    fn params(&self) -> Option<&Params>;

    /// Value captured for `:name` at registration time.
    fn param(&self, name: &str) -> Option<&str> {
        self.params().and_then(|params| params.get(name))
    }
}

impl<B> ParamsExt for Request<B> {
    fn params(&self) -> Option<&Params> {
        self.extensions().get::<Params>()
    }
}

/// Access to the request ID header.
pub trait RequestIdExt {
    fn request_id(&self) -> &str;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> &str {
        self.headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_lookup() {
        let mut req = Request::builder().uri("/users/42").body(()).unwrap();
        assert!(req.params().is_none());
        assert_eq!(req.param("id"), None);

        req.extensions_mut()
            .insert([("id", "42")].into_iter().collect::<Params>());
        assert_eq!(req.param("id"), Some("42"));
        assert_eq!(req.param("name"), None);
    }

    #[test]
    fn test_request_id() {
        let req = Request::builder()
            .header(X_REQUEST_ID, "abc-123")
            .body(())
            .unwrap();
        assert_eq!(req.request_id(), "abc-123");

        let req = Request::builder().body(()).unwrap();
        assert_eq!(req.request_id(), "unknown");
    }
}
