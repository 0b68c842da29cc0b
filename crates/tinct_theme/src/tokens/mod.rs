//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors (variant scales, text, background)
//! - Spacing (padding scale)

mod color;
mod spacing;

pub use color::*;
pub use spacing::*;

use serde::{Deserialize, Serialize};

/// The complete resolved token set for one theme mode.
///
/// Never mutated in place; the store swaps the whole set when the mode
/// changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
}

impl ThemeTokens {
    /// Get a color by token key
    pub fn color(&self, token: ColorToken) -> tinct_core::Color {
        self.colors.get(token)
    }

    /// Get a spacing value by token key
    pub fn spacing(&self, token: SpacingToken) -> f32 {
        self.spacing.get(token)
    }
}
