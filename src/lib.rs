//! HTTP request router backed by a segment trie.
//!
//! Routes are registered per method on static segments and single named
//! parameters (`/users/:id`); requests are matched literal-first and the
//! captured parameters are handed to the handler through the request
//! extensions.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Params, RouteError, Router};
