//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RoutingConfig (validated)
//!     → store.rs (compiled snapshot behind ArcSwap)
//!
//! On route add/remove:
//!     registry mutates a copy
//!     → route table recompiled & revalidated
//!     → persisted to the source file
//!     → atomic swap of Arc<Snapshot>
//! ```
//!
//! # Design Decisions
//! - Snapshots are immutable once published; readers never lock
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod store;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{RouteSpec, RoutingConfig};
pub use store::{ConfigStore, Snapshot};
pub use validation::{validate_config, ValidationError};
