//! Request-scoped routing state.

use crate::config::store::Snapshot;
use crate::controller::Controller;
use crate::error::RouteError;
use crate::hooks::{event, Hooks};
use crate::request::{self, Params, ParsedRequest};
use crate::urls::normalize::base_for;

/// One candidate action, with the parameters to bind when it is tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryEntry {
    pub action: String,
    pub params: Vec<(String, String)>,
}

impl TryEntry {
    /// A candidate with no extra parameters.
    pub fn bare(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            params: Vec::new(),
        }
    }

    pub fn with_params(action: impl Into<String>, params: Vec<(String, String)>) -> Self {
        Self {
            action: action.into(),
            params,
        }
    }
}

/// Routing state for a single request.
///
/// Constructed once per request and discarded with it, never shared
/// across requests. Components that need routing state receive this
/// value explicitly; there is no process-wide accessor.
pub struct Route<'a> {
    controller: &'a dyn Controller,
    action: String,
    request: String,
    args: Vec<String>,
    params: Params,
    try_list: Vec<TryEntry>,
    feed: bool,
    success: bool,
    self_url: String,
}

impl std::fmt::Debug for Route<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("controller", &self.controller.name())
            .field("action", &self.action)
            .field("request", &self.request)
            .field("args", &self.args)
            .field("params", &self.params)
            .field("try_list", &self.try_list)
            .field("feed", &self.feed)
            .field("success", &self.success)
            .field("self_url", &self.self_url)
            .finish()
    }
}

impl<'a> Route<'a> {
    /// Parse the URI and give the custom route table, the controller and
    /// the `parse_route` hook their chance to determine the action.
    pub fn new(
        uri: &str,
        controller: &'a dyn Controller,
        snapshot: &Snapshot,
        hooks: &dyn Hooks,
    ) -> Result<Self, RouteError> {
        let name = controller.name();
        if name.is_empty() || has_non_word(name) {
            return Err(RouteError::Configuration(format!(
                "controller name {name:?} is not usable in hook names"
            )));
        }

        let base = base_for(&snapshot.config, controller)?;
        let ParsedRequest {
            request,
            args,
            query,
            self_url,
        } = request::parse(uri, &base);

        // Dirty URLs carry the action as a query parameter.
        let action = query.get("action").cloned().unwrap_or_default();
        let feed = query.contains_key("feed");

        let mut route = Self {
            controller,
            action,
            request,
            args,
            params: query,
            try_list: Vec::new(),
            feed,
            success: false,
            self_url,
        };

        tracing::debug!(request = %route.request, args = ?route.args, "request parsed");

        // Custom routes may override the action.
        if let Some(action) = snapshot.table.resolve(&route.request, &mut route.params) {
            route.action = action;
        }

        // The controller parses next, then the hook registry.
        let controller = route.controller;
        controller.parse(&mut route);
        hooks.call(&[event::PARSE_ROUTE], &mut route);

        // Single-segment requests try their first token as the action
        // without needing a custom route.
        if route.action.is_empty() {
            if let Some(first) = route.args.first().filter(|arg| !arg.is_empty()) {
                route.try_list.push(TryEntry::bare(first.clone()));
            }
        }

        Ok(route)
    }

    /// The controller this route dispatches into.
    pub fn controller(&self) -> &'a dyn Controller {
        self.controller
    }

    /// The resolved action. Once dispatch succeeds this is the name of
    /// the responder that served the request.
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn set_action(&mut self, action: impl Into<String>) {
        self.action = action.into();
    }

    /// The normalized request string, still percent-encoded.
    pub fn request(&self) -> &str {
        &self.request
    }

    /// Decoded slash-delimited tokens of the request.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Bound parameters: query values, captures, action parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    /// Candidate actions still to be tried.
    pub fn try_list(&self) -> &[TryEntry] {
        &self.try_list
    }

    /// Append a candidate action.
    pub fn push_try(&mut self, entry: TryEntry) {
        self.try_list.push(entry);
    }

    pub(crate) fn try_front(&mut self, entry: TryEntry) {
        self.try_list.insert(0, entry);
    }

    pub(crate) fn take_try_list(&mut self) -> Vec<TryEntry> {
        std::mem::take(&mut self.try_list)
    }

    pub(crate) fn bind(&mut self, params: &[(String, String)]) {
        for (key, value) in params {
            self.params.insert(key.clone(), value.clone());
        }
    }

    /// Whether this is a feed request.
    pub fn feed(&self) -> bool {
        self.feed
    }

    /// Whether a responder served the route.
    pub fn success(&self) -> bool {
        self.success
    }

    pub(crate) fn set_success(&mut self) {
        self.success = true;
    }

    /// Absolute URL of the incoming request.
    pub fn self_url(&self) -> &str {
        &self.self_url
    }
}

/// Whether `s` contains anything outside `[A-Za-z0-9_]`.
pub(crate) fn has_non_word(s: &str) -> bool {
    s.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}
