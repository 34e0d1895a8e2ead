//! Business logic services

pub mod auth;
pub mod directory;
pub mod password;
pub mod tasks;

pub use auth::{AuthService, SessionState};
pub use directory::DirectoryService;
pub use tasks::TaskStore;
