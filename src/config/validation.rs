//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that site and engine URLs are absolute URLs
//! - Compile every registered route pattern
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the configuration
//! - Runs before a configuration is accepted into the store

use thiserror::Error;
use url::Url;

use crate::config::schema::RoutingConfig;
use crate::routing::pattern::{PatternError, RoutePattern};

/// A single semantic validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The `url` key is not an absolute URL.
    #[error("site url {0:?} is not a valid URL")]
    InvalidSiteUrl(String),

    /// The `base_url` key is set but not an absolute URL.
    #[error("base url {0:?} is not a valid URL")]
    InvalidBaseUrl(String),

    /// A registered route failed to compile.
    #[error(transparent)]
    Route(#[from] PatternError),
}

/// Validate a deserialized configuration, collecting every failure.
pub fn validate_config(config: &RoutingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if Url::parse(&config.url).is_err() {
        errors.push(ValidationError::InvalidSiteUrl(config.url.clone()));
    }

    if !config.base_url.is_empty() && Url::parse(&config.base_url).is_err() {
        errors.push(ValidationError::InvalidBaseUrl(config.base_url.clone()));
    }

    for spec in &config.routes {
        if let Err(err) = RoutePattern::compile(&spec.path, &spec.action) {
            errors.push(err.into());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
