//! The hook registry seam.
//!
//! Plugins register named handlers with the embedding application; the
//! router only calls into them. Action responders are discovered under
//! `{controller}_{action}` and `route_{action}`.

use crate::dispatch::route::Route;
use crate::urls::builder::UrlRule;

/// Hook names fired by the routing core.
pub mod event {
    /// Fired once the route is parsed, before dispatch.
    pub const PARSE_ROUTE: &str = "parse_route";

    /// Fired when dispatch begins.
    pub const ROUTE_INIT: &str = "route_init";

    /// Fired when the visibility gate denies an action. A handled result
    /// overrides the gate.
    pub const CAN_NOT_VIEW_SITE: &str = "can_not_view_site";

    /// Fired when dispatch ends, on every exit path.
    pub const ROUTE_DONE: &str = "route_done";

    /// Filter over the URL translation table.
    pub const PARSE_URLS: &str = "parse_urls";
}

/// Result of offering an event to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// A handler produced a result.
    Handled,

    /// No handler produced a result.
    Pass,
}

impl HookOutcome {
    pub fn is_handled(self) -> bool {
        matches!(self, HookOutcome::Handled)
    }
}

/// A pluggable hook registry.
pub trait Hooks {
    /// Whether any handler is registered under `name`.
    fn exists(&self, name: &str) -> bool;

    /// Offer the route to each named hook in order; the first handler
    /// that produces a result wins.
    fn call(&self, names: &[&str], route: &mut Route<'_>) -> HookOutcome;

    /// Let plugins extend or rewrite the URL translation table (the
    /// `parse_urls` filter).
    fn filter_urls(&self, rules: &mut Vec<UrlRule>);
}

/// A registry with no handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl Hooks for NoHooks {
    fn exists(&self, _name: &str) -> bool {
        false
    }

    fn call(&self, _names: &[&str], _route: &mut Route<'_>) -> HookOutcome {
        HookOutcome::Pass
    }

    fn filter_urls(&self, _rules: &mut Vec<UrlRule>) {}
}
