//! Action dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! request URI
//!     → route.rs (Route::new: parse, custom routes, controller parse)
//!     → dispatcher.rs (try-list: hooks, gate, protected, respond)
//!     → success flag | RouteError (400/403/404)
//! ```
//!
//! # Design Decisions
//! - One Route per request; no process-wide accessor
//! - Hook responders are discovered before native ones
//! - A failing candidate is a "try next" signal, not an error

pub mod dispatcher;
pub mod route;

pub use dispatcher::Dispatcher;
pub use route::{Route, TryEntry};
