//! Spacing tokens
//!
//! Three-step padding scale in logical pixels. Both built-in modes share the
//! same scale; only colors differ between light and dark.

use serde::{Deserialize, Serialize};

/// Spacing token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum SpacingToken {
    Sm,
    Md,
    Lg,
}

/// Spacing scale in logical pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
}

impl SpacingTokens {
    /// Get a spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            sm: 8.0,
            md: 16.0,
            lg: 24.0,
        }
    }
}
