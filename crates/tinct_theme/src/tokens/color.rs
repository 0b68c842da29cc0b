//! Color tokens for theming

use serde::{Deserialize, Serialize};
use tinct_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ColorToken {
    // Variant scales
    Primary,
    PrimaryHover,
    SecondaryBg,
    SecondaryBgHover,
    SecondaryBorder,
    SecondaryBorderHover,
    Danger,
    DangerHover,

    // Text colors
    TextPrimary,
    TextSecondary,

    // Surface
    Background,
}

/// Complete set of semantic color tokens for one mode
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    // Variant scales
    pub primary: Color,
    pub primary_hover: Color,
    pub secondary_bg: Color,
    pub secondary_bg_hover: Color,
    pub secondary_border: Color,
    pub secondary_border_hover: Color,
    pub danger: Color,
    pub danger_hover: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Surface
    pub background: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryHover => self.primary_hover,
            ColorToken::SecondaryBg => self.secondary_bg,
            ColorToken::SecondaryBgHover => self.secondary_bg_hover,
            ColorToken::SecondaryBorder => self.secondary_border,
            ColorToken::SecondaryBorderHover => self.secondary_border_hover,
            ColorToken::Danger => self.danger,
            ColorToken::DangerHover => self.danger_hover,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::Background => self.background,
        }
    }
}
