//! Request-routing core for the Chapbook publishing engine.
//!
//! Maps incoming request paths to controller actions, resolves custom
//! user-defined route patterns, and reconstructs canonical URLs from
//! action names. The crate is a library: the embedding application owns
//! the HTTP front end and supplies the controllers, the hook registry,
//! the visitor model and the session store.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!  request URI         │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!  ────────────────────┼─▶│ request │──▶│ routing  │──▶│ dispatch  │  │
//!                      │  │ parser  │   │ matcher  │   │ try-list  │  │
//!                      │  └─────────┘   └──────────┘   └─────┬─────┘  │
//!                      │                                     │        │
//!  success | 40x  ◀────┼─────────────────────────────────────┘        │
//!                      │                                              │
//!  action path         │  ┌──────────────────────────────┐            │
//!  ────────────────────┼─▶│ urls: clean ⇄ dirty builder  │            │
//!  absolute URL  ◀─────┼──└──────────────────────────────┘            │
//!                      │                                              │
//!                      │  ┌────────────────────────────────────────┐  │
//!                      │  │          Cross-Cutting Concerns        │  │
//!                      │  │  ┌────────┐ ┌───────┐ ┌─────────────┐  │  │
//!                      │  │  │ config │ │ hooks │ │ controller/ │  │  │
//!                      │  │  │ +store │ │       │ │ access      │  │  │
//!                      │  │  └────────┘ └───────┘ └─────────────┘  │  │
//!                      │  └────────────────────────────────────────┘  │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use chapbook_router::{
//!     ConfigStore, Controller, Dispatcher, Everyone, MemorySession, NoHooks,
//!     Outcome, Route, RouteRegistry, RoutingConfig,
//! };
//!
//! struct Blog;
//!
//! impl Controller for Blog {
//!     fn name(&self) -> &str {
//!         "blog"
//!     }
//!
//!     fn respond(&self, action: &str, route: &mut Route<'_>) -> Outcome {
//!         match action {
//!             "tag" => {
//!                 assert_eq!(route.param("name"), Some("rust"));
//!                 Outcome::Handled
//!             }
//!             _ => Outcome::Pass,
//!         }
//!     }
//!
//!     fn displayed(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let store = ConfigStore::new(RoutingConfig {
//!     url: "http://example.com".into(),
//!     ..RoutingConfig::default()
//! })
//! .unwrap();
//!
//! RouteRegistry::new(&store).add("tag/(name)/", "tag").unwrap();
//!
//! let blog = Blog;
//! let snapshot = store.snapshot();
//! let mut route = Route::new("/tag/rust/", &blog, &snapshot, &NoHooks).unwrap();
//! let mut session = MemorySession::new();
//!
//! let served = Dispatcher::new(&NoHooks, &Everyone, &mut session)
//!     .run(&mut route)
//!     .unwrap();
//! assert!(served);
//! assert_eq!(route.action(), "tag");
//! ```

// Core subsystems
pub mod config;
pub mod dispatch;
pub mod request;
pub mod routing;
pub mod urls;

// Cross-cutting concerns
pub mod access;
pub mod controller;
pub mod error;
pub mod hooks;

pub use access::{Everyone, MemorySession, Session, Visitor, VIEW_SITE};
pub use config::{ConfigStore, RouteSpec, RoutingConfig, Snapshot};
pub use controller::{Controller, Outcome};
pub use dispatch::{Dispatcher, Route, TryEntry};
pub use error::{RouteError, RouteResult};
pub use hooks::{HookOutcome, Hooks, NoHooks};
pub use request::Params;
pub use routing::{RouteRegistry, RouteTable};
pub use urls::{UrlBuilder, UrlRule};
