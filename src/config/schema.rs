//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the routing
//! subsystem. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the routing subsystem.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Public site URL (e.g., "http://example.com/blog").
    pub url: String,

    /// Engine install URL. Controllers that declare their own base path
    /// are mounted under this URL; falls back to `url` when empty.
    pub base_url: String,

    /// Whether the site serves clean (path-based) URLs.
    pub clean_urls: bool,

    /// Custom route definitions. Position is match priority.
    pub routes: Vec<RouteSpec>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost".to_string(),
            base_url: String::new(),
            clean_urls: false,
            routes: Vec::new(),
        }
    }
}

impl RoutingConfig {
    /// The URL controller base paths hang off; the site URL when unset.
    pub fn engine_url(&self) -> &str {
        if self.base_url.is_empty() {
            &self.url
        } else {
            &self.base_url
        }
    }
}

/// A custom route: a path pattern mapped to an action spec.
///
/// Wrap path variables in parentheses (e.g., "tag/(name)/"). Append
/// action parameters with semicolons (e.g., "tag;sort=new").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteSpec {
    /// Path pattern, matched against the normalized request.
    pub path: String,

    /// Action spec: action name plus optional fixed parameters.
    pub action: String,
}
