//! Custom route subsystem.
//!
//! # Data Flow
//! ```text
//! RouteSpec[] (configuration, ordered)
//!     → pattern.rs (compile: variables + anchored regex)
//!     → matcher.rs (RouteTable, applied per request)
//!
//! registry.rs (add/remove)
//!     → ConfigStore update → recompile → snapshot swap
//! ```
//!
//! # Design Decisions
//! - Patterns compile at load/registration time, never per request
//! - Later registrations override earlier ones (last match wins)
//! - The literal "/" path matches only the empty request

pub mod matcher;
pub mod pattern;
pub mod registry;

pub use matcher::RouteTable;
pub use pattern::{ActionSpec, PatternError, RoutePattern};
pub use registry::RouteRegistry;
