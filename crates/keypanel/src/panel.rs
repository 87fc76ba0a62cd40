//! The key panel renderer.
//!
//! A [`KeyPanel`] owns the style of an on-screen key grid and paints a full
//! key sequence onto a [`Canvas`] in one pass. It is plugged into whatever
//! redraw callback the host UI exposes: the host calls [`KeyPanel::draw`] (or
//! [`KeyPanel::render`] with its own key slice) whenever the panel reports
//! itself dirty or the compositor asks for a frame.
//!
//! All mutation and rendering happen on the host's drawing thread. Nothing is
//! cached between passes, so a pass is a pure function of the style, the keys
//! and the canvas.
//!
//! # Examples
//!
//! ```
//! use keypanel::{Key, KeyPanel};
//! use keypanel_core::{Color, RecordingCanvas, StateVisual};
//!
//! let keys: Vec<Key> = (0..12)
//!     .map(|i| Key::new((i % 3) * 100, (i / 3) * 100, 100, 100).with_label(i.to_string()))
//!     .collect();
//!
//! let mut panel = KeyPanel::default();
//! panel.set_background_visual(Some(Box::new(StateVisual::new(Color::WHITE))));
//!
//! let mut canvas = RecordingCanvas::new();
//! panel.draw(&mut canvas, &keys).expect("recording canvas never fails");
//! assert_eq!(canvas.texts().len(), 12);
//! assert!(!panel.is_dirty());
//! ```

use crate::config::PanelConfig;
use crate::error::PanelError;
use crate::key::{Key, KeySource};
use crate::layout::{self, GridPosition};
use crate::style::{PaintCustomizer, PaintState, PanelStyle};
use keypanel_core::{Bounds, Canvas, Color, Rect, Visual};

/// Geometry and override decision for one key in a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLayout {
    /// Index in the key sequence
    pub index: usize,
    /// Grid cell derived from the index
    pub position: GridPosition,
    /// Top edge used for drawing (`y`, or 1 when `y == 0`)
    pub draw_y: i32,
    /// Padded drawing rectangle
    pub bounds: Bounds,
    /// Whether this key receives the override visual and text colour
    pub is_override: bool,
}

/// Grid key panel renderer.
#[derive(Debug)]
pub struct KeyPanel {
    style: PanelStyle,
    background_visual: Option<Box<dyn Visual>>,
    override_visual: Option<Box<dyn Visual>>,
    dirty: bool,
}

impl Default for KeyPanel {
    fn default() -> Self {
        Self::new(PanelStyle::default())
    }
}

impl KeyPanel {
    /// Create a panel with `style` and no visuals. The panel starts dirty.
    #[must_use]
    pub fn new(mut style: PanelStyle) -> Self {
        style.columns = clamp_columns(style.columns);
        Self {
            style,
            background_visual: None,
            override_visual: None,
            dirty: true,
        }
    }

    /// Create a panel from a parsed config, including its visuals.
    pub fn from_config(config: &PanelConfig) -> Result<Self, PanelError> {
        let mut panel = Self::default();
        panel.apply_config(config)?;
        Ok(panel)
    }

    /// Replace the style and visuals from `config`. Nothing changes if any
    /// value in the config is invalid.
    pub fn apply_config(&mut self, config: &PanelConfig) -> Result<(), PanelError> {
        let style = config.to_style()?;
        let background = config
            .key_background
            .as_ref()
            .map(|v| v.to_visual())
            .transpose()?;
        let override_visual = config
            .override_background
            .as_ref()
            .map(|v| v.to_visual())
            .transpose()?;

        self.style = style;
        self.background_visual = background.map(|v| Box::new(v) as Box<dyn Visual>);
        self.override_visual = override_visual.map(|v| Box::new(v) as Box<dyn Visual>);
        self.invalidate();
        Ok(())
    }

    /// Current style.
    #[must_use]
    pub const fn style(&self) -> &PanelStyle {
        &self.style
    }

    // =========================================================================
    // Redraw scheduling
    // =========================================================================

    /// Request a redraw.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Whether a redraw has been requested since the last [`draw`](Self::draw).
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consume a pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    // =========================================================================
    // Style mutators
    // =========================================================================

    /// Set the visual painted behind every key; `None` paints no background.
    pub fn set_background_visual(&mut self, visual: Option<Box<dyn Visual>>) {
        self.background_visual = visual;
        self.invalidate();
    }

    /// Set the visual painted behind the override key only.
    pub fn set_override_visual(&mut self, visual: Option<Box<dyn Visual>>) {
        self.override_visual = visual;
        self.invalidate();
    }

    /// Set the label size.
    pub fn set_text_size(&mut self, size: f32) {
        self.style.paint.text_size = size;
        self.invalidate();
    }

    /// Set the label colour of ordinary keys.
    pub fn set_text_color(&mut self, color: Color) {
        self.style.text_color = color;
        self.invalidate();
    }

    /// Set the label colour of the override key.
    pub fn set_override_text_color(&mut self, color: Color) {
        self.style.override_text_color = color;
        self.invalidate();
    }

    /// Set the number of keys per row. Zero is clamped to one.
    pub fn set_column_count(&mut self, columns: usize) {
        self.style.columns = clamp_columns(columns);
        self.invalidate();
    }

    /// Set the horizontal edge inset.
    pub fn set_column_padding(&mut self, padding: i32) {
        self.style.column_padding = padding;
        self.invalidate();
    }

    /// Set the vertical inset.
    pub fn set_row_padding(&mut self, padding: i32) {
        self.style.row_padding = padding;
        self.invalidate();
    }

    /// Choose which key index receives the override visual.
    pub fn set_override_key_index(&mut self, index: usize) {
        self.style.override_key_index = index;
        self.invalidate();
    }

    /// Set the fill painted behind all keys.
    ///
    /// A [`Canvas`] exposes no surface size, so the fill covers the union of
    /// the unpadded key rectangles rather than the whole surface. Area outside
    /// the key grid is left to the host.
    pub fn set_panel_background(&mut self, color: Color) {
        self.style.panel_background = color;
        self.invalidate();
    }

    /// Active paint state.
    #[must_use]
    pub const fn paint_state(&self) -> &PaintState {
        &self.style.paint
    }

    /// Replace the paint state.
    ///
    /// # Errors
    ///
    /// [`PanelError::InvalidConfig`] when `paint` is `None`; the previous
    /// paint state stays active.
    pub fn set_paint_state(&mut self, paint: Option<PaintState>) -> Result<(), PanelError> {
        let paint = paint
            .ok_or_else(|| PanelError::InvalidConfig("paint state must be set".to_string()))?;
        self.style.paint = paint;
        self.invalidate();
        Ok(())
    }

    /// Let the host restyle labels from the current paint state.
    pub fn customize_paint(&mut self, customizer: &dyn PaintCustomizer) -> Result<(), PanelError> {
        let paint = customizer.customize(self.style.paint);
        self.set_paint_state(paint)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Geometry of key `index` within `keys`, or `None` past the end.
    #[must_use]
    pub fn layout_key(&self, index: usize, keys: &[Key]) -> Option<KeyLayout> {
        keys.get(index)
            .map(|key| self.layout_at(index, key, keys.len()))
    }

    fn layout_at(&self, index: usize, key: &Key, len: usize) -> KeyLayout {
        let position = layout::classify(index, len, self.style.columns);
        KeyLayout {
            index,
            position,
            draw_y: layout::draw_y(key.y),
            bounds: layout::key_bounds(
                key,
                position,
                self.style.column_padding,
                self.style.row_padding,
            ),
            is_override: index == self.style.override_key_index,
        }
    }

    /// Read the keys from `source`, paint them, and clear the redraw request.
    ///
    /// The request is left pending if painting fails.
    pub fn draw<S>(&mut self, canvas: &mut dyn Canvas, source: &S) -> Result<(), PanelError>
    where
        S: KeySource + ?Sized,
    {
        self.render(canvas, source.keys())?;
        self.dirty = false;
        Ok(())
    }

    /// Paint every key in `keys` onto `canvas`.
    ///
    /// A canvas error aborts the pass at the failing key and is returned;
    /// later keys are not painted.
    pub fn render(&self, canvas: &mut dyn Canvas, keys: &[Key]) -> Result<(), PanelError> {
        log::debug!(
            "rendering {} keys in {} columns",
            keys.len(),
            self.style.columns
        );

        self.paint_panel_background(canvas, keys)?;

        for (index, key) in keys.iter().enumerate() {
            let layout = self.layout_at(index, key, keys.len());
            log::trace!(
                "key {index}: row {} column {} bounds {:?}",
                layout.position.row,
                layout.position.column,
                layout.bounds
            );
            self.render_key(canvas, key, &layout)?;
        }
        Ok(())
    }

    fn paint_panel_background(&self, canvas: &mut dyn Canvas, keys: &[Key]) -> Result<(), PanelError> {
        if self.style.panel_background.is_transparent() {
            return Ok(());
        }
        let area = keys
            .iter()
            .map(|k| Rect::from(k.bounds()))
            .reduce(|a, b| a.union(&b));
        if let Some(area) = area {
            canvas.fill_rect(area, self.style.panel_background)?;
        }
        Ok(())
    }

    fn render_key(&self, canvas: &mut dyn Canvas, key: &Key, layout: &KeyLayout) -> Result<(), PanelError> {
        let rect = Rect::from(layout.bounds);
        let mut clips = 0;

        if let Some(visual) = &self.background_visual {
            canvas.push_clip(rect)?;
            clips += 1;
            visual.paint(canvas, rect, key.state)?;
        }

        let text_color = match &self.override_visual {
            Some(visual) if layout.is_override => {
                canvas.push_clip(rect)?;
                clips += 1;
                visual.paint(canvas, rect, key.state)?;
                self.style.override_text_color
            }
            _ => self.style.text_color,
        };

        if let Some(label) = &key.label {
            let style = self.style.paint.text_style(text_color);
            let descent = canvas.font_descent(&style);
            let anchor = layout::label_anchor(key, style.size, descent);
            canvas.draw_text(label, anchor, &style)?;
        }

        if let Some(icon) = &key.icon {
            let bounds = layout::icon_bounds(key, icon);
            canvas.draw_image(icon, Rect::from(bounds))?;
        }

        for _ in 0..clips {
            canvas.pop_clip()?;
        }
        Ok(())
    }
}

fn clamp_columns(columns: usize) -> usize {
    if columns == 0 {
        log::warn!("column count 0 is invalid, using 1");
        1
    } else {
        columns
    }
}
