//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     method + path + handler
//!     → segment.rs (validate, split into tokens)
//!     → node.rs (walk/extend the trie, bind handler)
//!     → Router frozen behind Arc / SharedRouter
//!
//! Incoming Request (method, path)
//!     → segment.rs (split into tokens)
//!     → router.rs (strip root path)
//!     → matcher.rs (literal first, then parameter child)
//!     → Return: handler + Params, or RouteError
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, immutable while serving
//! - One trie for all methods; handlers are keyed by method per node
//! - Matching is O(depth), allocation only for captured parameters
//! - Deterministic: same trie and input always give the same result

pub mod error;
pub mod matcher;
pub mod node;
pub mod params;
pub mod router;
pub mod segment;
pub mod shared;

pub use error::{RouteError, RouteResult};
pub use matcher::Match;
pub use params::{Param, Params};
pub use router::Router;
pub use shared::SharedRouter;
