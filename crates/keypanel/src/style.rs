//! Paint parameters and panel style defaults.

use keypanel_core::{Color, FontWeight, TextAlign, TextStyle};
use serde::{Deserialize, Serialize};

/// Keys per row.
pub const DEFAULT_COLUMNS: usize = 3;
/// Edge inset in pixels; interior insets are half of it.
pub const DEFAULT_PADDING: i32 = 16;
/// Label size in pixels.
pub const DEFAULT_TEXT_SIZE: f32 = 30.0;
/// The key that receives the override visual: the twelfth key, which is the
/// bottom-right key of a 3x4 numeric pad.
pub const DEFAULT_OVERRIDE_KEY_INDEX: usize = 11;

/// Font parameters applied to every label.
///
/// Colour is not part of the paint state: it is chosen per key from the
/// panel's text colours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintState {
    /// Label size in pixels
    pub text_size: f32,
    /// Font weight
    pub weight: FontWeight,
    /// Whether glyph edges are smoothed
    pub anti_alias: bool,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            text_size: DEFAULT_TEXT_SIZE,
            weight: FontWeight::Bold,
            anti_alias: true,
        }
    }
}

impl PaintState {
    /// Centre-aligned text style in `color`.
    #[must_use]
    pub const fn text_style(&self, color: Color) -> TextStyle {
        TextStyle {
            size: self.text_size,
            color,
            weight: self.weight,
            align: TextAlign::Center,
            anti_alias: self.anti_alias,
        }
    }
}

/// Host hook for restyling labels: receives the active paint state and returns
/// the replacement. Returning `None` is rejected by the panel.
pub trait PaintCustomizer {
    /// Produce the new paint state from the current one.
    fn customize(&self, paint: PaintState) -> Option<PaintState>;
}

impl<F> PaintCustomizer for F
where
    F: Fn(PaintState) -> Option<PaintState>,
{
    fn customize(&self, paint: PaintState) -> Option<PaintState> {
        self(paint)
    }
}

/// Plain-data style of a key panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelStyle {
    /// Keys per row, at least 1
    pub columns: usize,
    /// Horizontal edge inset
    pub column_padding: i32,
    /// Vertical inset (halved on each side)
    pub row_padding: i32,
    /// Label colour for ordinary keys
    pub text_color: Color,
    /// Label colour for the override key
    pub override_text_color: Color,
    /// Font parameters
    pub paint: PaintState,
    /// Index of the key that gets the override visual
    pub override_key_index: usize,
    /// Fill behind all keys; transparent paints nothing
    pub panel_background: Color,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            column_padding: DEFAULT_PADDING,
            row_padding: DEFAULT_PADDING,
            text_color: Color::BLACK,
            override_text_color: Color::TRANSPARENT,
            paint: PaintState::default(),
            override_key_index: DEFAULT_OVERRIDE_KEY_INDEX,
            panel_background: Color::TRANSPARENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_style_defaults() {
        let style = PanelStyle::default();
        assert_eq!(style.columns, 3);
        assert_eq!(style.column_padding, 16);
        assert_eq!(style.row_padding, 16);
        assert_eq!(style.text_color, Color::BLACK);
        assert!(style.override_text_color.is_transparent());
        assert_eq!(style.override_key_index, 11);
        assert!(style.panel_background.is_transparent());
    }

    #[test]
    fn test_paint_state_text_style() {
        let paint = PaintState {
            text_size: 18.0,
            weight: FontWeight::Normal,
            anti_alias: false,
        };
        let style = paint.text_style(Color::BLUE);
        assert_eq!(style.size, 18.0);
        assert_eq!(style.color, Color::BLUE);
        assert_eq!(style.weight, FontWeight::Normal);
        assert_eq!(style.align, TextAlign::Center);
        assert!(!style.anti_alias);
    }

    #[test]
    fn test_closure_customizer() {
        let bigger = |p: PaintState| {
            Some(PaintState {
                text_size: p.text_size * 2.0,
                ..p
            })
        };
        let out = bigger.customize(PaintState::default());
        assert_eq!(out.map(|p| p.text_size), Some(60.0));
    }
}
