//! Theme trait, mode, and light/dark bundles

use crate::tokens::{ColorTokens, SpacingTokens, ThemeTokens};
use serde::{Deserialize, Serialize};

/// Light or dark mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Flip between light and dark
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

/// A theme supplies the token tables for one mode
pub trait Theme: Send + Sync {
    /// Theme name (for debugging and logs)
    fn name(&self) -> &str;

    /// Which mode this theme variant renders
    fn mode(&self) -> ThemeMode;

    fn colors(&self) -> &ColorTokens;

    fn spacing(&self) -> &SpacingTokens;

    /// Resolve the full token set for this variant
    fn tokens(&self) -> ThemeTokens {
        ThemeTokens {
            colors: self.colors().clone(),
            spacing: *self.spacing(),
        }
    }
}

/// A light/dark pair of theme variants
pub struct ThemeBundle {
    name: String,
    light: Box<dyn Theme>,
    dark: Box<dyn Theme>,
}

impl ThemeBundle {
    pub fn new(
        name: impl Into<String>,
        light: impl Theme + 'static,
        dark: impl Theme + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            light: Box::new(light),
            dark: Box::new(dark),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the theme variant for a mode
    pub fn for_mode(&self, mode: ThemeMode) -> &dyn Theme {
        match mode {
            ThemeMode::Light => self.light.as_ref(),
            ThemeMode::Dark => self.dark.as_ref(),
        }
    }
}
