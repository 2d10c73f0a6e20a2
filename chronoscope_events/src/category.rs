// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::str::FromStr;

use hashbrown::HashMap;
use peniko::Color;
use serde::Deserialize;

/// Color used for categories that are not registered.
pub const DEFAULT_COLOR: Color = Color::WHITE;

/// Display attributes of a category.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryStyle {
    /// Dot and glow color.
    pub color: Color,
    /// Human-readable label.
    pub label: String,
}

/// Result of a registry lookup. Always available, even for unknown categories.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedCategory<'a> {
    /// Category color, or the registry default.
    pub color: Color,
    /// Category label, or the raw category key.
    pub label: &'a str,
    /// Whether the category was registered.
    pub known: bool,
}

/// Errors produced while reading category configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A color string was not `#rrggbb` or `#rrggbbaa`.
    #[error("invalid color `{0}`: expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    /// The configuration was not valid JSON for the expected shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A color parsed from a `#rrggbb` / `#rrggbbaa` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(pub Color);

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_owned());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() || !matches!(hex.len(), 6 | 8) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if hex.len() == 8 { channel(6)? } else { 0xff };
        Ok(Self(Color::from_rgba8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            alpha,
        )))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One category in a [`CategoryConfig`].
#[derive(Clone, Debug, Deserialize)]
pub struct CategoryEntry {
    /// Category key as used by events.
    pub id: String,
    /// Display label; defaults to the key.
    #[serde(default)]
    pub label: Option<String>,
    /// Display color.
    pub color: HexColor,
}

/// Serializable category configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct CategoryConfig {
    /// Fallback color for unknown categories.
    #[serde(default = "default_hex_color")]
    pub default_color: HexColor,
    /// Registered categories, in presentation order.
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
}

fn default_hex_color() -> HexColor {
    HexColor(DEFAULT_COLOR)
}

/// Static mapping from category key to [`CategoryStyle`].
///
/// Lookups through [`CategoryRegistry::resolve`] are total: unknown keys get
/// the default color and their own key as label. Registration order is kept,
/// so [`CategoryRegistry::ids`] can drive filter-button lists.
#[derive(Clone, Debug)]
pub struct CategoryRegistry {
    entries: Vec<(String, CategoryStyle)>,
    index: HashMap<String, usize>,
    default_color: Color,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

impl CategoryRegistry {
    /// Creates an empty registry with the given fallback color.
    #[must_use]
    pub fn new(default_color: Color) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            default_color,
        }
    }

    /// Builds a registry from parsed configuration.
    #[must_use]
    pub fn from_config(config: CategoryConfig) -> Self {
        let mut registry = Self::new(config.default_color.0);
        for entry in config.categories {
            let label = entry.label.unwrap_or_else(|| entry.id.clone());
            registry.insert(
                entry.id,
                CategoryStyle {
                    color: entry.color.0,
                    label,
                },
            );
        }
        registry
    }

    /// Parses a JSON [`CategoryConfig`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CategoryConfig = serde_json::from_str(json)?;
        Ok(Self::from_config(config))
    }

    /// Registers or replaces a category. Replacing keeps the original position.
    pub fn insert(&mut self, id: impl Into<String>, style: CategoryStyle) {
        let id = id.into();
        if let Some(&slot) = self.index.get(&id) {
            self.entries[slot].1 = style;
            return;
        }
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, style));
    }

    /// Returns the fallback color.
    #[must_use]
    pub fn default_color(&self) -> Color {
        self.default_color
    }

    /// Returns the registered style for `id`, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CategoryStyle> {
        self.index.get(id).map(|&slot| &self.entries[slot].1)
    }

    /// Resolves `id`, falling back to defaults for unknown categories.
    #[must_use]
    pub fn resolve<'a>(&'a self, id: &'a str) -> ResolvedCategory<'a> {
        match self.get(id) {
            Some(style) => ResolvedCategory {
                color: style.color,
                label: &style.label,
                known: true,
            },
            None => ResolvedCategory {
                color: self.default_color,
                label: id,
                known: false,
            },
        }
    }

    /// Registered category keys in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Number of registered categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no categories are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
