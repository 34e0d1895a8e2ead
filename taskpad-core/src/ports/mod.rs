//! Port definitions (trait boundaries to external dependencies)

pub mod storage;

pub use storage::{StorageService, USERS_KEY};
