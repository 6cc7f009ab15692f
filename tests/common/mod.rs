//! Shared fixtures for integration tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use chapbook_router::{
    ConfigStore, Controller, HookOutcome, Hooks, Outcome, Params, Route, RouteSpec,
    RoutingConfig, UrlRule, Visitor,
};

/// A controller scripted with the actions it serves.
pub struct ScriptedController {
    pub name: &'static str,
    pub base: &'static str,
    pub clean: bool,
    pub serves: Vec<&'static str>,
    pub rules: Vec<UrlRule>,
    pub fail_displays: bool,
    displayed: Cell<bool>,
    served: RefCell<Vec<(String, Params)>>,
}

impl ScriptedController {
    pub fn serving(serves: &[&'static str]) -> Self {
        Self {
            name: "blog",
            base: "",
            clean: false,
            serves: serves.to_vec(),
            rules: Vec::new(),
            fail_displays: false,
            displayed: Cell::new(false),
            served: RefCell::new(Vec::new()),
        }
    }

    /// Actions served so far, with the parameters they saw.
    #[allow(dead_code)]
    pub fn served(&self) -> Vec<(String, Params)> {
        self.served.borrow().clone()
    }
}

impl Controller for ScriptedController {
    fn name(&self) -> &str {
        self.name
    }

    fn base(&self) -> &str {
        self.base
    }

    fn clean_urls_supported(&self) -> bool {
        self.clean
    }

    fn url_rules(&self) -> Vec<UrlRule> {
        self.rules.clone()
    }

    fn respond(&self, action: &str, route: &mut Route<'_>) -> Outcome {
        if self.serves.contains(&action) {
            self.served
                .borrow_mut()
                .push((action.to_string(), route.params().clone()));
            self.displayed.set(true);
            Outcome::Handled
        } else {
            Outcome::Pass
        }
    }

    fn failed(&self, _route: &mut Route<'_>) {
        if self.fail_displays {
            self.displayed.set(true);
        }
    }

    fn displayed(&self) -> bool {
        self.displayed.get()
    }
}

/// A hook registry scripted with named handlers; records every offered
/// event.
#[derive(Default)]
pub struct ScriptedHooks {
    pub handlers: HashMap<String, HookOutcome>,
    pub extra_rules: Vec<UrlRule>,
    fired: RefCell<Vec<String>>,
}

impl ScriptedHooks {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn handling(names: &[&str]) -> Self {
        Self {
            handlers: names
                .iter()
                .map(|name| (name.to_string(), HookOutcome::Handled))
                .collect(),
            ..Self::default()
        }
    }

    #[allow(dead_code)]
    pub fn fired(&self, name: &str) -> usize {
        self.fired.borrow().iter().filter(|n| *n == name).count()
    }
}

impl Hooks for ScriptedHooks {
    fn exists(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    fn call(&self, names: &[&str], _route: &mut Route<'_>) -> HookOutcome {
        for name in names {
            self.fired.borrow_mut().push((*name).to_string());
            if self.handlers.get(*name) == Some(&HookOutcome::Handled) {
                return HookOutcome::Handled;
            }
        }
        HookOutcome::Pass
    }

    fn filter_urls(&self, rules: &mut Vec<UrlRule>) {
        rules.extend(self.extra_rules.iter().cloned());
    }
}

/// A visitor whose whole capability set is one flag.
#[allow(dead_code)]
pub struct FlagVisitor(pub bool);

impl Visitor for FlagVisitor {
    fn can(&self, _capability: &str) -> bool {
        self.0
    }
}

/// An in-memory store for `url` with the given routes.
pub fn store_with(url: &str, routes: &[(&str, &str)]) -> ConfigStore {
    ConfigStore::new(RoutingConfig {
        url: url.into(),
        routes: routes
            .iter()
            .map(|(path, action)| RouteSpec {
                path: path.to_string(),
                action: action.to_string(),
            })
            .collect(),
        ..RoutingConfig::default()
    })
    .expect("fixture config is valid")
}
