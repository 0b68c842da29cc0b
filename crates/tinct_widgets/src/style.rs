//! Ordered style resolution
//!
//! A widget's visual description is computed in a fixed precedence order:
//! base variant style, then size style, then the disabled override. Later
//! stages win; there is no implicit cascading.

use crate::error::WidgetError;
use std::fmt;
use std::str::FromStr;
use tinct_core::Color;
use tinct_theme::{SpacingToken, ThemeTokens};

/// Visual scale while the pressed state is active
pub const PRESSED_SCALE: f32 = 0.95;

/// Opacity applied by the disabled override
pub const DISABLED_OPACITY: f32 = 0.5;

/// Visual/semantic category of a button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

/// Size tier of a button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl FromStr for Size {
    type Err = WidgetError;

    /// Strict parsing: an unrecognized size name is an error, never a
    /// silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            other => Err(WidgetError::InvalidSize(other.to_string())),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        };
        f.write_str(name)
    }
}

/// Cursor shown while hovering the widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Pointer,
    NotAllowed,
}

/// A solid border
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

/// Resolved visual description of a widget
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub background: Color,
    pub hover_background: Color,
    pub text_color: Color,
    pub border: Option<Border>,
    /// (horizontal, vertical) padding in logical pixels
    pub padding: (f32, f32),
    pub font_size: f32,
    pub corner_radius: f32,
    pub opacity: f32,
    pub cursor: Cursor,
    pub scale: f32,
}

/// Resolve the full style for a button.
///
/// `inverted` swaps the variant's color scale with the danger scale (the
/// color-alternation design); an inverted Danger button falls back to the
/// primary scale.
pub fn resolve_style(
    tokens: &ThemeTokens,
    variant: Variant,
    size: Size,
    disabled: bool,
    inverted: bool,
) -> Style {
    let colors = &tokens.colors;

    let effective = if inverted {
        match variant {
            Variant::Danger => Variant::Primary,
            _ => Variant::Danger,
        }
    } else {
        variant
    };

    // 1. Base variant style
    let (background, hover_background, border) = match effective {
        Variant::Primary => (colors.primary, colors.primary_hover, None),
        Variant::Secondary => (
            colors.secondary_bg,
            colors.secondary_bg_hover,
            Some(Border {
                width: 1.0,
                color: colors.secondary_border,
            }),
        ),
        Variant::Danger => (colors.danger, colors.danger_hover, None),
    };

    // 2. Size style: padding from the spacing scale, fixed font/radius tiers
    let (padding, font_size, corner_radius) = match size {
        Size::Small => (
            (tokens.spacing(SpacingToken::Md), tokens.spacing(SpacingToken::Sm)),
            14.0,
            4.0,
        ),
        Size::Medium => (
            (tokens.spacing(SpacingToken::Lg), tokens.spacing(SpacingToken::Md)),
            16.0,
            6.0,
        ),
        Size::Large => (
            (tokens.spacing(SpacingToken::Lg), tokens.spacing(SpacingToken::Lg)),
            18.0,
            8.0,
        ),
    };

    // 3. Disabled override, independent of interaction state
    let (opacity, cursor) = if disabled {
        (DISABLED_OPACITY, Cursor::NotAllowed)
    } else {
        (1.0, Cursor::Pointer)
    };

    Style {
        background,
        hover_background,
        text_color: colors.text_primary,
        border,
        padding,
        font_size,
        corner_radius,
        opacity,
        cursor,
        scale: 1.0,
    }
}
