//! Theme errors

use thiserror::Error;

/// Errors surfaced by the theme system
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// Theme tokens were requested without a live store in scope. Widgets
    /// cannot render meaningful colors without one, so this is surfaced
    /// instead of falling back to an undefined palette.
    #[error("theme store not initialized: attach a ThemeStore before reading tokens")]
    NotInitialized,
}
