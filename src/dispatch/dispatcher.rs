//! Action dispatch.
//!
//! # Data Flow
//! ```text
//! route_init hook
//!     → constructed action joins the front of the try-list
//!     → for each candidate:
//!         word-character guard        (400 on failure)
//!         visibility gate             (403 unless a hook overrides)
//!         {controller}_{action} / route_{action} hooks
//!         protected blocklist         (skip candidate)
//!         Controller::respond
//!     → exhausted: Controller::failed, then 404 if nothing displayed
//! route_done hook (every exit path)
//! ```
//!
//! # Design Decisions
//! - A candidate that passes is a "try next" signal, not an error
//! - Hook responders are discovered before native ones
//! - Protected names are matched case-insensitively

use crate::access::{Session, Visitor, VIEW_SITE};
use crate::controller::Outcome;
use crate::dispatch::route::{has_non_word, Route, TryEntry};
use crate::error::RouteError;
use crate::hooks::{event, HookOutcome, Hooks};

/// Drives a route through its try-list.
pub struct Dispatcher<'e> {
    hooks: &'e dyn Hooks,
    visitor: &'e dyn Visitor,
    session: &'e mut dyn Session,
}

impl<'e> Dispatcher<'e> {
    pub fn new(
        hooks: &'e dyn Hooks,
        visitor: &'e dyn Visitor,
        session: &'e mut dyn Session,
    ) -> Self {
        Self {
            hooks,
            visitor,
            session,
        }
    }

    /// Attempt each candidate action until one responds.
    ///
    /// Fires `route_init` first and `route_done` on every exit path.
    /// Returns whether a responder served the route.
    pub fn run(&mut self, route: &mut Route<'_>) -> Result<bool, RouteError> {
        self.hooks.call(&[event::ROUTE_INIT], route);

        // The constructed action is always the first candidate.
        let action = route.action().to_string();
        if !action.is_empty() {
            route.try_front(TryEntry::bare(action));
        }

        let result = self.attempt(route);

        if result.is_ok() {
            // Bring the visitor back here after login when the final
            // action needs more than the login/logout exemptions.
            let permitted = route.controller().permitted().contains(&route.action());
            if !permitted {
                self.session.set_redirect(route.self_url());
            }
        }

        self.hooks.call(&[event::ROUTE_DONE], route);

        result.map(|()| route.success())
    }

    fn attempt(&mut self, route: &mut Route<'_>) -> Result<(), RouteError> {
        let controller = route.controller();

        for entry in route.take_try_list() {
            route.set_action(entry.action.clone());
            tracing::debug!(action = %entry.action, "trying action");

            // Nothing but word characters may name a responder.
            if has_non_word(&entry.action) {
                tracing::warn!(action = %entry.action, "malformed action rejected");
                return Err(RouteError::MalformedAction(entry.action));
            }

            // Visibility gate, overridable by the can_not_view_site hook.
            if !self.visitor.can(VIEW_SITE)
                && !controller.permitted().contains(&entry.action.as_str())
            {
                let outcome = self.hooks.call(&[event::CAN_NOT_VIEW_SITE], route);
                if outcome == HookOutcome::Pass {
                    tracing::warn!(action = %entry.action, "visitor may not view the site");
                    return Err(RouteError::AccessDenied(entry.action));
                }
            }

            // Responders provided by extensions come first.
            let specific = format!("{}_{}", controller.name(), entry.action);
            let generic = format!("route_{}", entry.action);
            if (self.hooks.exists(&specific) || self.hooks.exists(&generic))
                && self
                    .hooks
                    .call(&[specific.as_str(), generic.as_str()], route)
                    .is_handled()
            {
                tracing::info!(action = %entry.action, "action served by hook");
                route.set_success();
                return Ok(());
            }

            // Protected names never reach the controller.
            if controller
                .protected()
                .iter()
                .any(|name| name.eq_ignore_ascii_case(&entry.action))
            {
                tracing::debug!(action = %entry.action, "protected action skipped");
                continue;
            }

            route.bind(&entry.params);
            if controller.respond(&entry.action, route) == Outcome::Handled {
                tracing::info!(action = %entry.action, "action served by controller");
                route.set_success();
                return Ok(());
            }
        }

        // Candidates exhausted; the failure handler gets the last word.
        controller.failed(route);

        if !route.success() && !controller.displayed() {
            tracing::warn!(request = %route.request(), "no responder found");
            return Err(RouteError::NotFound(route.request().to_string()));
        }

        Ok(())
    }
}
