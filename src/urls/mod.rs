//! URL construction subsystem.
//!
//! # Data Flow
//! ```text
//! action path ("tag/rust")
//!     → builder.rs
//!         clean mode: base + path, untranslated
//!         dirty mode: translation rules + feed variants + catch-all
//!     → normalize.rs (collapse slashes, resolve dots, prefix origin)
//!     → absolute URL
//! ```
//!
//! # Design Decisions
//! - One rule applies per URL, first match wins
//! - Feed variants are synthesized only for plugin-contributed rules
//! - Round trips through the matcher are best effort, not guaranteed

pub mod builder;
pub mod normalize;

pub use builder::{UrlBuilder, UrlRule};
pub use normalize::canonicalize;
