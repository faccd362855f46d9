//! Async request handlers stored in the routing table.

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// A request handler the dispatcher can invoke.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, request: Request<Body>) -> BoxFuture<'static, Response>;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + 'static,
{
    fn call(&self, request: Request<Body>) -> BoxFuture<'static, Response> {
        let fut = self(request);
        async move { fut.await.into_response() }.boxed()
    }
}

/// Type-erased handler, cheap to clone out of a routing table snapshot.
pub type BoxedHandler = Arc<dyn Handler>;

/// Box an async closure as a [`BoxedHandler`].
///
/// ```
/// use segment_router::http::handler;
///
/// let hello = handler(|_req| async { "Hello World" });
/// ```
pub fn handler<F, Fut, R>(f: F) -> BoxedHandler
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + 'static,
{
    Arc::new(f)
}
