//! Route registration.
//!
//! Adding and removing custom routes are the only writes to the shared
//! configuration. Match priority is the order routes were added.

use crate::config::loader::ConfigError;
use crate::config::schema::RouteSpec;
use crate::config::store::ConfigStore;

/// Add/remove interface over the persisted route table.
#[derive(Debug, Clone, Copy)]
pub struct RouteRegistry<'a> {
    store: &'a ConfigStore,
}

impl<'a> RouteRegistry<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    /// Register `path -> action`. Needed for actions that take more than
    /// one parameter: "/tags/" works bare, "/tag/(name)/" needs a route.
    ///
    /// Re-adding an existing path replaces its action in place, keeping
    /// the path's priority position. The pattern is validated before the
    /// table is swapped.
    pub fn add(&self, path: &str, action: &str) -> Result<(), ConfigError> {
        self.store.update(|config| {
            match config.routes.iter_mut().find(|spec| spec.path == path) {
                Some(spec) => spec.action = action.to_string(),
                None => config.routes.push(RouteSpec {
                    path: path.to_string(),
                    action: action.to_string(),
                }),
            }
        })?;

        tracing::info!(path, action, "route added");
        Ok(())
    }

    /// Remove a route added by `add`, by exact path key. Removing an
    /// unknown path is a no-op.
    pub fn remove(&self, path: &str) -> Result<(), ConfigError> {
        self.store.update(|config| {
            config.routes.retain(|spec| spec.path != path);
        })?;

        tracing::info!(path, "route removed");
        Ok(())
    }
}
