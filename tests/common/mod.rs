//! Shared utilities for integration tests.

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router as AxumRouter;
use tower::ServiceExt;

use segment_router::http::{handler, BoxedHandler, ParamsExt, RequestIdExt};
use segment_router::Router;

/// Router with the routes the demo binary registers, plus a few extras.
#[allow(dead_code)]
pub fn demo_router() -> Router<BoxedHandler> {
    let mut router = Router::new();
    router.get("/", handler(|_req| async { "Hello World" })).unwrap();
    router.get("/test", handler(|_req| async { "without slash" })).unwrap();
    router.get("/test/", handler(|_req| async { "with slash" })).unwrap();
    router.get("/aaa/bbb/ccc", handler(|_req| async { "ccc" })).unwrap();
    router
        .get(
            "/users/:id",
            handler(|req: Request<Body>| async move {
                format!("user {}", req.param("id").unwrap_or("?"))
            }),
        )
        .unwrap();
    router
        .delete("/users/:id", handler(|_req| async { StatusCode::NO_CONTENT }))
        .unwrap();
    router
        .get(
            "/users/:id/posts/:post",
            handler(|req: Request<Body>| async move {
                format!("{}/{}", req.param("id").unwrap_or("?"), req.param("post").unwrap_or("?"))
            }),
        )
        .unwrap();
    router
        .get(
            "/whoami",
            handler(|req: Request<Body>| async move { req.request_id().to_string() }),
        )
        .unwrap();
    router
}

/// Drive one request through the app without a listener.
#[allow(dead_code)]
pub async fn send(app: AxumRouter, method: Method, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();

    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}
