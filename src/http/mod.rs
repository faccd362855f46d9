//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, request id, trace, timeout layers)
//!     → dispatch (routing table snapshot → Router::at)
//!     → Params inserted into request extensions
//!     → handler.rs (boxed async handler) → Response
//!
//! Routing failure:
//!     InvalidPath → 400
//!     NoRoute     → 404
//!     NoHandler   → 405 + Allow (when enabled and other methods exist), else 404
//! ```

pub mod handler;
pub mod request;
pub mod server;

pub use handler::{handler, BoxedHandler, Handler};
pub use request::{ParamsExt, RequestIdExt, X_REQUEST_ID};
pub use server::HttpServer;
