//! Widget errors

use thiserror::Error;

/// Errors surfaced by the widget layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// A size name that is not one of the three tiers
    #[error("unrecognized size: {0:?} (expected \"small\", \"medium\", or \"large\")")]
    InvalidSize(String),
}
