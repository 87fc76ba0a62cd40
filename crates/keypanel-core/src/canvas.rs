//! Canvas trait and the recording implementation.
//!
//! [`Canvas`] is the capability a host surface exposes to the key panel: clip,
//! fill a rectangle, draw centred text, draw a bitmap. Every call is fallible so
//! that a backend failure aborts the current pass and reaches the host.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle};
use crate::error::{CanvasError, CanvasResult};
use crate::visual::Icon;
use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Descent as a fraction of the text size, used when a backend has no font
/// metrics of its own.
pub const DEFAULT_DESCENT_RATIO: f32 = 0.25;

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> CanvasResult;

    /// Draw a filled rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color)
        -> CanvasResult;

    /// Draw a stroked rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) -> CanvasResult;

    /// Draw text. `position.y` is the baseline; `position.x` is interpreted
    /// according to `style.align`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) -> CanvasResult;

    /// Draw a bitmap scaled into `bounds`.
    fn draw_image(&mut self, icon: &Icon, bounds: Rect) -> CanvasResult;

    /// Push a clip region.
    fn push_clip(&mut self, rect: Rect) -> CanvasResult;

    /// Pop the clip region.
    fn pop_clip(&mut self) -> CanvasResult;

    /// Distance from the baseline to the bottom of the glyphs for `style`.
    fn font_descent(&self, style: &TextStyle) -> f32 {
        style.size * DEFAULT_DESCENT_RATIO
    }
}

/// Text style for rendering.
///
/// # Examples
///
/// ```
/// use keypanel_core::{Color, FontWeight, TextAlign, TextStyle};
///
/// let style = TextStyle::default();
/// assert_eq!(style.size, 30.0);
/// assert_eq!(style.weight, FontWeight::Bold);
/// assert_eq!(style.align, TextAlign::Center);
///
/// let small = TextStyle { size: 16.0, color: Color::BLUE, ..TextStyle::default() };
/// assert_eq!(small.color, Color::BLUE);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
    /// Horizontal anchor
    pub align: TextAlign,
    /// Whether glyph edges are smoothed
    pub anti_alias: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 30.0,
            color: Color::BLACK,
            weight: FontWeight::Bold,
            align: TextAlign::Center,
            anti_alias: true,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Normal (400)
    Normal,
    /// Medium (500)
    Medium,
    /// Bold (700)
    #[default]
    Bold,
}

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Text starts at the anchor
    Left,
    /// Text is centred on the anchor
    #[default]
    Center,
    /// Text ends at the anchor
    Right,
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to another backend)
/// - Fault injection (fail after a fixed number of operations)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
    fail_after: Option<usize>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation after the first `ops` recorded ones fail with
    /// [`CanvasError::Backend`].
    #[must_use]
    pub fn failing_after(mut self, ops: usize) -> Self {
        self.fail_after = Some(ops);
        self
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }

    /// Get the clip stack depth.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Text commands in paint order, as `(content, position, style)`.
    #[must_use]
    pub fn texts(&self) -> Vec<(&str, Point, &TextStyle)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text {
                    content,
                    position,
                    style,
                } => Some((content.as_str(), *position, style)),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, command: DrawCommand) -> CanvasResult {
        if self
            .fail_after
            .is_some_and(|limit| self.commands.len() >= limit)
        {
            return Err(CanvasError::Backend(format!(
                "injected failure after {} operations",
                self.commands.len()
            )));
        }
        self.commands.push(command);
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> CanvasResult {
        self.record(DrawCommand::filled_rect(rect, color))
    }

    fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: CornerRadius,
        color: Color,
    ) -> CanvasResult {
        self.record(DrawCommand::Rect {
            bounds: rect,
            radius,
            style: BoxStyle::fill(color),
        })
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) -> CanvasResult {
        self.record(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::ZERO,
            style: BoxStyle::stroke(StrokeStyle { color, width }),
        })
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) -> CanvasResult {
        self.record(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        })
    }

    fn draw_image(&mut self, icon: &Icon, bounds: Rect) -> CanvasResult {
        self.record(DrawCommand::Image {
            icon: *icon,
            bounds,
        })
    }

    fn push_clip(&mut self, rect: Rect) -> CanvasResult {
        self.record(DrawCommand::PushClip { bounds: rect })?;
        self.clip_stack.push(rect);
        Ok(())
    }

    fn pop_clip(&mut self) -> CanvasResult {
        if self.clip_stack.is_empty() {
            return Err(CanvasError::ClipUnderflow);
        }
        self.record(DrawCommand::PopClip)?;
        self.clip_stack.pop();
        Ok(())
    }
}
