//! Custom route matching.
//!
//! # Responsibilities
//! - Hold the ordered, compiled custom route table
//! - Resolve a normalized request to an action
//! - Bind captured variables and fixed parameters
//!
//! # Design Decisions
//! - Patterns are compiled at load/registration time, never per request
//! - Every pattern is applied without early exit: later registrations
//!   override earlier ones, so the most recently added route wins
//! - Parameter bindings accumulate across matches

use crate::config::schema::RouteSpec;
use crate::request::Params;
use crate::routing::pattern::{PatternError, RoutePattern};

/// The compiled custom route table.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    patterns: Vec<RoutePattern>,
}

impl RouteTable {
    /// Compile every spec, in order, failing on the first invalid one.
    pub fn compile(specs: &[RouteSpec]) -> Result<Self, PatternError> {
        let patterns = specs
            .iter()
            .map(|spec| RoutePattern::compile(&spec.path, &spec.action))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Resolve the action for a normalized request.
    ///
    /// Applies every registered pattern in order; the action of the last
    /// full match wins. Captures and action parameters of each matching
    /// pattern bind into `params`.
    pub fn resolve(&self, request: &str, params: &mut Params) -> Option<String> {
        let mut action = None;

        for pattern in &self.patterns {
            if let Some(name) = pattern.apply(request, params) {
                tracing::debug!(path = pattern.path(), action = name, "custom route matched");
                action = Some(name.to_string());
            }
        }

        action
    }
}
