//! Taskpad Core - state model for a terminal to-do app with mock auth
//!
//! This crate implements the core logic following hexagonal architecture:
//!
//! - **domain**: Core entities (Account, Task, Subtask, session views)
//! - **ports**: Trait definition for the external key-value store
//! - **adapters**: Concrete storage implementations (file, in-memory)
//! - **services**: Directory, password policy, task store, session control

pub mod adapters;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::FileStore;
use config::Config;
use ports::StorageService;
use services::{AuthService, DirectoryService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result as CoreResult};
pub use domain::{Account, AuthView, Subtask, Task};
pub use services::TaskStore;

/// Main context for Taskpad operations
///
/// This is the primary entry point: it holds the configuration, the
/// storage adapter, the loaded user directory, and the session
/// controller. The directory is loaded once here and survives across
/// sessions; task state lives inside [`AuthService`] and is discarded
/// on logout.
pub struct TaskpadContext {
    pub config: Config,
    pub storage: Arc<dyn StorageService>,
    pub directory: DirectoryService,
    pub auth: AuthService,
}

impl TaskpadContext {
    /// Create a new Taskpad context rooted at the given directory.
    pub fn new(taskpad_dir: &Path) -> Result<Self> {
        let config = Config::load(taskpad_dir)?;
        let storage: Arc<dyn StorageService> =
            Arc::new(FileStore::new(taskpad_dir.join(&config.store_file)));
        Self::with_storage(config, storage)
    }

    /// Create a context over an arbitrary storage adapter.
    pub fn with_storage(config: Config, storage: Arc<dyn StorageService>) -> Result<Self> {
        let mut directory = DirectoryService::new(Arc::clone(&storage));
        directory.load();

        Ok(Self {
            config,
            storage,
            directory,
            auth: AuthService::new(),
        })
    }
}
