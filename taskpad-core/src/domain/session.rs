//! Session domain model

/// Which authentication form is shown while nobody is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthView {
    /// Initial view on startup and after logout.
    #[default]
    Login,
    Register,
}
