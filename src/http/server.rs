//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the axum app that funnels every request into the dispatcher
//! - Wire up middleware (request id, tracing, timeout)
//! - Match method + path against the routing table snapshot
//! - Hand captured parameters to the handler via request extensions
//! - Translate routing errors into client responses

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    Router as AxumRouter,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::handler::BoxedHandler;
use crate::http::request::{RequestIdExt, X_REQUEST_ID};
use crate::observability::metrics;
use crate::routing::{RouteError, Router, SharedRouter};

/// Application state injected into the dispatcher.
#[derive(Clone)]
pub struct AppState {
    pub routes: SharedRouter<BoxedHandler>,
    pub method_not_allowed: bool,
}

/// HTTP server serving a routing table.
pub struct HttpServer {
    app: AxumRouter,
    config: ServerConfig,
    routes: SharedRouter<BoxedHandler>,
}

impl HttpServer {
    /// Create a new HTTP server from a fully registered router.
    pub fn new(config: ServerConfig, router: Router<BoxedHandler>) -> Self {
        metrics::record_routes_registered(router.len());

        let routes = SharedRouter::new(router);
        let state = AppState {
            routes: routes.clone(),
            method_not_allowed: config.routing.method_not_allowed,
        };

        let app = Self::build_app(&config, state);
        Self {
            app,
            config,
            routes,
        }
    }

    /// Build the axum app with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &ServerConfig, state: AppState) -> AxumRouter {
        let request_id = HeaderName::from_static(X_REQUEST_ID);

        AxumRouter::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(request_id.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
    }

    /// Handle for publishing a replacement routing table while serving.
    pub fn routes(&self) -> SharedRouter<BoxedHandler> {
        self.routes.clone()
    }

    /// The axum app, for driving requests without a listener.
    pub fn app(&self) -> AxumRouter {
        self.app.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serve on `listener` until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            root_path = %self.routes.load().root_path(),
            routes = self.routes.load().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.app.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Dispatcher: every request lands here.
async fn dispatch(State(state): State<AppState>, mut request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request.request_id().to_string();

    let lookup = state
        .routes
        .load()
        .at(&method, &path)
        .map(|m| (Arc::clone(m.handler), m.params));

    match lookup {
        Ok((handler, params)) => {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                path = %path,
                params = params.len(),
                "Route matched"
            );
            request.extensions_mut().insert(params);

            let response = handler.call(request).await;
            metrics::record_request(method.as_str(), response.status().as_u16(), "matched", start_time);
            response
        }
        Err(err) => {
            let response = error_response(&err, state.method_not_allowed);
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = response.status().as_u16(),
                error = %err,
                "Request not routed"
            );
            metrics::record_request(method.as_str(), response.status().as_u16(), outcome(&err), start_time);
            response
        }
    }
}

/// Map a routing failure to the response the client sees.
fn error_response(err: &RouteError, method_not_allowed: bool) -> Response {
    match err {
        RouteError::NoHandler { allowed, .. } if method_not_allowed && !allowed.is_empty() => {
            let allow = allowed
                .iter()
                .map(Method::as_str)
                .collect::<Vec<_>>()
                .join(", ");

            match HeaderValue::from_str(&allow) {
                Ok(value) => (
                    StatusCode::METHOD_NOT_ALLOWED,
                    [(header::ALLOW, value)],
                    "Method not allowed",
                )
                    .into_response(),
                Err(_) => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response(),
            }
        }
        RouteError::InvalidPath { .. } => (StatusCode::BAD_REQUEST, "Malformed request path").into_response(),
        _ => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

fn outcome(err: &RouteError) -> &'static str {
    match err {
        RouteError::InvalidPath { .. } => "invalid_path",
        RouteError::NoRoute { .. } => "no_route",
        RouteError::NoHandler { .. } => "no_handler",
        RouteError::UnnamedParam { .. } | RouteError::RouteConflict { .. } => "config",
    }
}
