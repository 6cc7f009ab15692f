//! The controller seam.
//!
//! Controllers are supplied by the embedding application. `respond` is an
//! explicit dispatch table: the router never reflects over methods, so a
//! controller exposes exactly the actions it chooses to route.

use crate::dispatch::route::Route;
use crate::urls::builder::UrlRule;

/// Outcome of a responder attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The responder served the action.
    Handled,

    /// No such responder, or the responder declined; the dispatcher
    /// tries the next candidate.
    Pass,
}

/// A family of actions and the base path they are mounted under.
pub trait Controller {
    /// Short name used to compose hook names, e.g. "main" for `main_tag`.
    /// Must consist of word characters only.
    fn name(&self) -> &str;

    /// Path under the engine URL this controller is mounted at.
    /// Empty means the site root.
    fn base(&self) -> &str {
        ""
    }

    /// Whether this controller can serve clean URLs.
    fn clean_urls_supported(&self) -> bool {
        false
    }

    /// Action names that must never reach `respond` through the
    /// dispatcher. Matched case-insensitively.
    fn protected(&self) -> &[&str] {
        &["parse", "display"]
    }

    /// Actions visitors may reach without the `view_site` capability.
    fn permitted(&self) -> &[&str] {
        &["login", "logout"]
    }

    /// Ordered clean-to-dirty URL translations native to this controller.
    fn url_rules(&self) -> Vec<UrlRule> {
        Vec::new()
    }

    /// Opportunity to inspect the parsed route and set the action or
    /// extend the try-list before dispatch.
    fn parse(&self, _route: &mut Route<'_>) {}

    /// Serve `action`. Bound parameters are in `route.params()`.
    fn respond(&self, _action: &str, _route: &mut Route<'_>) -> Outcome {
        Outcome::Pass
    }

    /// Called when every candidate passed. A typical implementation
    /// displays an error page and reports it through `displayed`.
    fn failed(&self, _route: &mut Route<'_>) {}

    /// Whether this controller has rendered a response for the request.
    fn displayed(&self) -> bool {
        false
    }
}
