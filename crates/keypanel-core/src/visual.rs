//! Key visuals: interaction state, state-dependent backgrounds and icons.

use crate::canvas::Canvas;
use crate::error::CanvasResult;
use crate::{Color, CornerRadius, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interaction state of a key, used to pick a visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct InteractionState {
    /// Key is held down
    pub pressed: bool,
    /// Key toggles (sticky keys such as shift)
    pub checkable: bool,
    /// Toggle key is on
    pub checked: bool,
}

impl InteractionState {
    /// Resting state.
    pub const NORMAL: Self = Self {
        pressed: false,
        checkable: false,
        checked: false,
    };

    /// Held-down state.
    pub const PRESSED: Self = Self {
        pressed: true,
        checkable: false,
        checked: false,
    };

    /// Copy with the pressed flag set.
    #[must_use]
    pub fn with_pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    /// Copy marked as a checkable toggle in the given position.
    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checkable = true;
        self.checked = checked;
        self
    }
}

/// Opaque identifier of a bitmap owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconId(pub u32);

/// Bitmap handle with its intrinsic pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Icon {
    /// Host bitmap
    pub id: IconId,
    /// Intrinsic width
    pub width: i32,
    /// Intrinsic height
    pub height: i32,
}

impl Icon {
    /// Create an icon handle.
    #[must_use]
    pub const fn new(id: IconId, width: i32, height: i32) -> Self {
        Self { id, width, height }
    }
}

/// A paintable key background whose appearance depends on interaction state.
///
/// The panel clips to `bounds` before calling [`Visual::paint`].
pub trait Visual: fmt::Debug + Send {
    /// Paint the variant selected by `state` into `bounds`.
    fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect, state: InteractionState)
        -> CanvasResult;
}

/// Solid colour visual that ignores interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorVisual(pub Color);

impl Visual for ColorVisual {
    fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect, _state: InteractionState) -> CanvasResult {
        canvas.fill_rect(bounds, self.0)
    }
}

/// State-list visual: one fill colour per state, first match wins in the
/// order pressed, checked, normal.
///
/// # Examples
///
/// ```
/// use keypanel_core::{Color, InteractionState, StateVisual};
///
/// let visual = StateVisual::new(Color::WHITE).pressed(Color::BLUE);
/// assert_eq!(visual.color_for(InteractionState::NORMAL), Color::WHITE);
/// assert_eq!(visual.color_for(InteractionState::PRESSED), Color::BLUE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVisual {
    normal: Color,
    pressed: Option<Color>,
    checked: Option<Color>,
    corner_radius: CornerRadius,
    border: Option<(Color, f32)>,
}

impl StateVisual {
    /// Visual filling every state with `normal`.
    #[must_use]
    pub const fn new(normal: Color) -> Self {
        Self {
            normal,
            pressed: None,
            checked: None,
            corner_radius: CornerRadius::ZERO,
            border: None,
        }
    }

    /// Set the pressed fill.
    #[must_use]
    pub fn pressed(mut self, color: Color) -> Self {
        self.pressed = Some(color);
        self
    }

    /// Set the fill for a checked toggle key.
    #[must_use]
    pub fn checked(mut self, color: Color) -> Self {
        self.checked = Some(color);
        self
    }

    /// Round the corners.
    #[must_use]
    pub fn corner_radius(mut self, radius: CornerRadius) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Outline every state.
    #[must_use]
    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.border = Some((color, width));
        self
    }

    /// Fill colour for `state`.
    #[must_use]
    pub fn color_for(&self, state: InteractionState) -> Color {
        if state.pressed {
            if let Some(c) = self.pressed {
                return c;
            }
        }
        if state.checkable && state.checked {
            if let Some(c) = self.checked {
                return c;
            }
        }
        self.normal
    }
}

impl Visual for StateVisual {
    fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect, state: InteractionState) -> CanvasResult {
        let fill = self.color_for(state);
        if self.corner_radius.is_zero() {
            canvas.fill_rect(bounds, fill)?;
        } else {
            canvas.fill_rounded_rect(bounds, self.corner_radius, fill)?;
        }
        if let Some((color, width)) = self.border {
            canvas.stroke_rect(bounds, color, width)?;
        }
        Ok(())
    }
}
