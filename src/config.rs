//! Highlight settings persistence
//!
//! Stores user color and opacity overrides in
//! `~/.config/structured-highlights/settings.yaml`. Every field is optional;
//! anything missing falls back to the built-in palette.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::structure::{Category, Role};
use crate::theme::{
    default_color, default_highlight_color, Color, Palette, DEFAULT_BLOCK_OPACITY,
    DEFAULT_HEADER_OPACITY, DEFAULT_SUBHEADER_OPACITY,
};

/// User-adjustable colors and opacities for structural highlights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightSettings {
    /// Tint per category for full-line regions
    #[serde(default)]
    pub colors: BTreeMap<Category, Color>,
    /// Identifier background per category
    #[serde(default)]
    pub highlight_colors: BTreeMap<Category, Color>,
    #[serde(default = "default_block_opacity")]
    pub opacity_block: f64,
    #[serde(default = "default_header_opacity")]
    pub opacity_header: f64,
    #[serde(default = "default_subheader_opacity")]
    pub opacity_subheader: f64,
}

fn default_block_opacity() -> f64 {
    DEFAULT_BLOCK_OPACITY
}

fn default_header_opacity() -> f64 {
    DEFAULT_HEADER_OPACITY
}

fn default_subheader_opacity() -> f64 {
    DEFAULT_SUBHEADER_OPACITY
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            colors: BTreeMap::new(),
            highlight_colors: BTreeMap::new(),
            opacity_block: default_block_opacity(),
            opacity_header: default_header_opacity(),
            opacity_subheader: default_subheader_opacity(),
        }
    }
}

impl HighlightSettings {
    /// Load settings from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::settings_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from `path`; any problem is logged and yields defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Settings file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<HighlightSettings>(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded settings from {}", path.display());
                    settings.clamped()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse settings at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::settings_file()
            .context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save settings to `path`, creating its parent directory if needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;

        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    pub fn set_color(&mut self, category: Category, color: Color) {
        self.colors.insert(category, color);
    }

    pub fn set_highlight_color(&mut self, category: Category, color: Color) {
        self.highlight_colors.insert(category, color);
    }

    fn clamped(mut self) -> Self {
        self.opacity_block = self.opacity_block.clamp(0.0, 1.0);
        self.opacity_header = self.opacity_header.clamp(0.0, 1.0);
        self.opacity_subheader = self.opacity_subheader.clamp(0.0, 1.0);
        self
    }
}

impl Palette for HighlightSettings {
    fn color(&self, category: Category) -> Color {
        self.colors
            .get(&category)
            .copied()
            .unwrap_or_else(|| default_color(category))
    }

    fn highlight_color(&self, category: Category) -> Color {
        self.highlight_colors
            .get(&category)
            .copied()
            .unwrap_or_else(|| default_highlight_color(category))
    }

    fn opacity(&self, role: Role) -> f64 {
        match role {
            Role::Block | Role::Identifier => self.opacity_block,
            Role::Header => self.opacity_header,
            Role::Subheader => self.opacity_subheader,
        }
    }
}
