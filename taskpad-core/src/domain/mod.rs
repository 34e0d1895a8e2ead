//! Domain models

pub mod account;
pub mod result;
pub mod session;
pub mod task;

pub use account::Account;
pub use session::AuthView;
pub use task::{Subtask, Task};
