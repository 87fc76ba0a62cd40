//! TOML configuration for a key panel.
//!
//! Every field is optional; missing fields take the [`PanelStyle`] defaults.
//!
//! ```toml
//! columns = 3
//! column_padding = 16
//! row_padding = 16
//! text_size = 30.0
//! text_color = "#000000"
//! override_text_color = "#ffffff"
//! override_key_index = 11
//!
//! [key_background]
//! normal = "#f2f2f2"
//! pressed = "#c8c8c8"
//! corner_radius = 6.0
//!
//! [override_background]
//! normal = "#3478f6"
//! pressed = "#1f5fd1"
//! ```

use crate::error::PanelError;
use crate::style::{PaintState, PanelStyle};
use keypanel_core::{Color, CornerRadius, FontWeight, StateVisual};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Panel configuration as read from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Keys per row
    pub columns: Option<usize>,
    /// Horizontal edge inset
    pub column_padding: Option<i32>,
    /// Vertical inset
    pub row_padding: Option<i32>,
    /// Label size
    pub text_size: Option<f32>,
    /// Label weight
    pub font_weight: Option<FontWeight>,
    /// Label anti-aliasing
    pub anti_alias: Option<bool>,
    /// Label colour, hex
    pub text_color: Option<String>,
    /// Override key label colour, hex
    pub override_text_color: Option<String>,
    /// Index of the override key
    pub override_key_index: Option<usize>,
    /// Fill behind all keys, hex
    pub panel_background: Option<String>,
    /// Visual painted behind every key
    pub key_background: Option<VisualConfig>,
    /// Visual painted behind the override key
    pub override_background: Option<VisualConfig>,
}

/// State visual as read from TOML. `normal` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisualConfig {
    /// Resting fill, hex
    pub normal: String,
    /// Pressed fill, hex
    #[serde(default)]
    pub pressed: Option<String>,
    /// Checked toggle fill, hex
    #[serde(default)]
    pub checked: Option<String>,
    /// Uniform corner radius
    #[serde(default)]
    pub corner_radius: Option<f32>,
}

impl VisualConfig {
    /// Build the visual, parsing colours.
    pub fn to_visual(&self) -> Result<StateVisual, PanelError> {
        let mut visual = StateVisual::new(parse_color("normal", &self.normal)?);
        if let Some(hex) = &self.pressed {
            visual = visual.pressed(parse_color("pressed", hex)?);
        }
        if let Some(hex) = &self.checked {
            visual = visual.checked(parse_color("checked", hex)?);
        }
        if let Some(radius) = self.corner_radius {
            visual = visual.corner_radius(CornerRadius::uniform(radius));
        }
        Ok(visual)
    }
}

impl PanelConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, PanelError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PanelError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        log::debug!("loading panel config from {}", path.display());
        Self::from_toml_str(&source)
    }

    /// Resolve against the defaults, validating every value.
    pub fn to_style(&self) -> Result<PanelStyle, PanelError> {
        let defaults = PanelStyle::default();

        let columns = self.columns.unwrap_or(defaults.columns);
        if columns == 0 {
            return Err(PanelError::InvalidConfig(
                "columns must be at least 1".to_string(),
            ));
        }

        let paint = PaintState {
            text_size: self.text_size.unwrap_or(defaults.paint.text_size),
            weight: self.font_weight.unwrap_or(defaults.paint.weight),
            anti_alias: self.anti_alias.unwrap_or(defaults.paint.anti_alias),
        };

        Ok(PanelStyle {
            columns,
            column_padding: self.column_padding.unwrap_or(defaults.column_padding),
            row_padding: self.row_padding.unwrap_or(defaults.row_padding),
            text_color: parse_optional_color("text_color", self.text_color.as_deref())?
                .unwrap_or(defaults.text_color),
            override_text_color: parse_optional_color(
                "override_text_color",
                self.override_text_color.as_deref(),
            )?
            .unwrap_or(defaults.override_text_color),
            paint,
            override_key_index: self
                .override_key_index
                .unwrap_or(defaults.override_key_index),
            panel_background: parse_optional_color(
                "panel_background",
                self.panel_background.as_deref(),
            )?
            .unwrap_or(defaults.panel_background),
        })
    }
}

fn parse_color(field: &str, hex: &str) -> Result<Color, PanelError> {
    Color::from_hex(hex)
        .map_err(|e| PanelError::InvalidConfig(format!("{field}: {hex:?} is not a colour ({e})")))
}

fn parse_optional_color(field: &str, hex: Option<&str>) -> Result<Option<Color>, PanelError> {
    hex.map(|h| parse_color(field, h)).transpose()
}
