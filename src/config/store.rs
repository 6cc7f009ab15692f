//! Shared configuration state.
//!
//! # Responsibilities
//! - Publish immutable (config, compiled route table) snapshots
//! - Apply registry writes: rebuild, revalidate, swap atomically
//! - Persist mutated configuration back to its source file
//!
//! # Design Decisions
//! - Readers take a snapshot per request; no locks on the request path
//! - A rejected mutation leaves the published snapshot untouched
//! - Request state is never shared: snapshots are read-only

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::RoutingConfig;
use crate::config::validation::ValidationError;
use crate::routing::matcher::RouteTable;

/// An immutable view of the configuration and its compiled route table.
#[derive(Debug)]
pub struct Snapshot {
    pub config: RoutingConfig,
    pub table: RouteTable,
}

impl Snapshot {
    fn build(config: RoutingConfig) -> Result<Self, ConfigError> {
        let table = RouteTable::compile(&config.routes)
            .map_err(|err| ConfigError::Validation(vec![ValidationError::Route(err)]))?;

        Ok(Self { config, table })
    }
}

/// Process-wide configuration store.
///
/// Read-mostly: request handling takes a snapshot per request; the route
/// registry is the single writer.
#[derive(Debug)]
pub struct ConfigStore {
    current: ArcSwap<Snapshot>,
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Create an in-memory store from a configuration.
    pub fn new(config: RoutingConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            current: ArcSwap::from_pointee(Snapshot::build(config)?),
            path: None,
        })
    }

    /// Load, validate and compile a configuration file. Mutations made
    /// through the route registry persist back to this file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = load_config(path)?;

        Ok(Self {
            current: ArcSwap::from_pointee(Snapshot::build(config)?),
            path: Some(path.to_path_buf()),
        })
    }

    /// The current immutable snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// Apply a configuration mutation: rebuild the route table, persist,
    /// then swap the published snapshot.
    pub(crate) fn update(
        &self,
        mutate: impl FnOnce(&mut RoutingConfig),
    ) -> Result<(), ConfigError> {
        let mut config = self.snapshot().config.clone();
        mutate(&mut config);

        let snapshot = Snapshot::build(config)?;

        if let Some(path) = &self.path {
            let serialized = toml::to_string_pretty(&snapshot.config)?;
            fs::write(path, serialized)?;
        }

        self.current.store(Arc::new(snapshot));
        Ok(())
    }
}
