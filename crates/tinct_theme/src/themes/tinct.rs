//! Default Tinct theme
//!
//! The palette follows the Tailwind color scales the design system was
//! authored against: blue for primary, gray for secondary, red for danger.
//! Light mode uses the 500/600 steps on white; dark mode shifts every scale
//! one step lighter on a near-black surface.

use crate::theme::{Theme, ThemeBundle, ThemeMode};
use crate::tokens::{ColorTokens, SpacingTokens};

/// Light palette
pub mod light {
    use tinct_core::Color;

    pub const BLUE_500: Color = Color::from_hex(0x3B82F6);
    pub const BLUE_600: Color = Color::from_hex(0x2563EB);
    pub const GRAY_100: Color = Color::from_hex(0xF3F4F6);
    pub const GRAY_200: Color = Color::from_hex(0xE5E7EB);
    pub const GRAY_300: Color = Color::from_hex(0xD1D5DB);
    pub const GRAY_400: Color = Color::from_hex(0x9CA3AF);
    pub const RED_500: Color = Color::from_hex(0xEF4444);
    pub const RED_600: Color = Color::from_hex(0xDC2626);
    pub const TEXT: Color = Color::from_hex(0x1F2937);
    pub const SUBTEXT: Color = Color::from_hex(0x4B5563);
    pub const BASE: Color = Color::from_hex(0xFFFFFF);
}

/// Dark palette
pub mod dark {
    use tinct_core::Color;

    pub const BLUE_500: Color = Color::from_hex(0x60A5FA);
    pub const BLUE_600: Color = Color::from_hex(0x3B82F6);
    pub const GRAY_100: Color = Color::from_hex(0x374151);
    pub const GRAY_200: Color = Color::from_hex(0x4B5563);
    pub const GRAY_300: Color = Color::from_hex(0x6B7280);
    pub const GRAY_400: Color = Color::from_hex(0x9CA3AF);
    pub const RED_500: Color = Color::from_hex(0xF87171);
    pub const RED_600: Color = Color::from_hex(0xEF4444);
    pub const TEXT: Color = Color::from_hex(0xF9FAFB);
    pub const SUBTEXT: Color = Color::from_hex(0xE5E7EB);
    pub const BASE: Color = Color::from_hex(0x111827);
}

/// Default Tinct theme
#[derive(Clone, Debug)]
pub struct TinctTheme {
    mode: ThemeMode,
    colors: ColorTokens,
    spacing: SpacingTokens,
}

impl TinctTheme {
    /// Create the light variant
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            colors: ColorTokens {
                primary: light::BLUE_500,
                primary_hover: light::BLUE_600,
                secondary_bg: light::GRAY_100,
                secondary_bg_hover: light::GRAY_200,
                secondary_border: light::GRAY_300,
                secondary_border_hover: light::GRAY_400,
                danger: light::RED_500,
                danger_hover: light::RED_600,
                text_primary: light::TEXT,
                text_secondary: light::SUBTEXT,
                background: light::BASE,
            },
            spacing: SpacingTokens::default(),
        }
    }

    /// Create the dark variant
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            colors: ColorTokens {
                primary: dark::BLUE_500,
                primary_hover: dark::BLUE_600,
                secondary_bg: dark::GRAY_100,
                secondary_bg_hover: dark::GRAY_200,
                secondary_border: dark::GRAY_300,
                secondary_border_hover: dark::GRAY_400,
                danger: dark::RED_500,
                danger_hover: dark::RED_600,
                text_primary: dark::TEXT,
                text_secondary: dark::SUBTEXT,
                background: dark::BASE,
            },
            spacing: SpacingTokens::default(),
        }
    }

    /// Create a theme bundle with light and dark variants
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new("Tinct", Self::light(), Self::dark())
    }
}

impl Theme for TinctTheme {
    fn name(&self) -> &str {
        "Tinct"
    }

    fn mode(&self) -> ThemeMode {
        self.mode
    }

    fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }
}
