//! Integration tests for keypanel.
//!
//! These tests drive the public API end-to-end against recording and custom
//! canvases.

use keypanel::{Key, KeyPanel, KeySource, PaintState, PanelConfig, PanelError};
use keypanel_core::{
    Bounds, Canvas, CanvasError, CanvasResult, Color, CornerRadius, DrawCommand, Icon, IconId,
    InteractionState, Point, RecordingCanvas, Rect, StateVisual, TextStyle,
};
use proptest::prelude::*;

fn grid(count: usize, columns: usize, size: i32) -> Vec<Key> {
    (0..count)
        .map(|i| {
            let x = (i % columns) as i32 * size;
            let y = (i / columns) as i32 * size;
            Key::new(x, y, size, size).with_label(format!("{i}"))
        })
        .collect()
}

/// Canvas that only remembers the colour of every rectangle fill.
#[derive(Default)]
struct FillLog {
    fills: Vec<(Rect, Color)>,
    texts: Vec<(String, Color)>,
    depth: usize,
}

impl Canvas for FillLog {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> CanvasResult {
        self.fills.push((rect, color));
        Ok(())
    }

    fn fill_rounded_rect(&mut self, rect: Rect, _radius: CornerRadius, color: Color) -> CanvasResult {
        self.fill_rect(rect, color)
    }

    fn stroke_rect(&mut self, _rect: Rect, _color: Color, _width: f32) -> CanvasResult {
        Ok(())
    }

    fn draw_text(&mut self, text: &str, _position: Point, style: &TextStyle) -> CanvasResult {
        self.texts.push((text.to_string(), style.color));
        Ok(())
    }

    fn draw_image(&mut self, _icon: &Icon, _bounds: Rect) -> CanvasResult {
        Ok(())
    }

    fn push_clip(&mut self, _rect: Rect) -> CanvasResult {
        self.depth += 1;
        Ok(())
    }

    fn pop_clip(&mut self) -> CanvasResult {
        self.depth = self.depth.checked_sub(1).ok_or(CanvasError::ClipUnderflow)?;
        Ok(())
    }

    fn font_descent(&self, _style: &TextStyle) -> f32 {
        0.0
    }
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn test_numpad_end_to_end() {
    let keys = grid(12, 3, 100);
    let mut panel = KeyPanel::default();
    panel.set_background_visual(Some(Box::new(StateVisual::new(Color::WHITE))));
    panel.set_override_visual(Some(Box::new(StateVisual::new(Color::BLUE))));
    panel.set_override_text_color(Color::WHITE);

    let first = panel.layout_key(0, &keys).expect("key 0");
    assert_eq!(first.bounds, Bounds::new(16, 9, 92, 92));

    let mut canvas = FillLog::default();
    panel.draw(&mut canvas, &keys).expect("paint");

    // 12 backgrounds plus one override fill
    assert_eq!(canvas.fills.len(), 13);
    assert_eq!(canvas.fills[0], (Rect::new(16.0, 9.0, 76.0, 83.0), Color::WHITE));
    let override_fills: Vec<_> = canvas
        .fills
        .iter()
        .filter(|(_, c)| *c == Color::BLUE)
        .collect();
    assert_eq!(override_fills.len(), 1);

    for (i, (label, color)) in canvas.texts.iter().enumerate() {
        assert_eq!(label, &i.to_string());
        let expected = if i == 11 { Color::WHITE } else { Color::BLACK };
        assert_eq!(*color, expected);
    }
    assert_eq!(canvas.depth, 0);
    assert!(!panel.is_dirty());
}

#[test]
fn test_custom_descent_moves_baseline() {
    let keys = vec![Key::new(0, 100, 100, 100).with_label("A")];
    let panel = KeyPanel::default();
    let mut canvas = RecordingCanvas::new();
    panel.render(&mut canvas, &keys).expect("paint");

    // Recording canvas: descent = 30 * 0.25
    assert_eq!(canvas.texts()[0].1, Point::new(50.0, 161.25));
}

#[test]
fn test_sticky_key_checked_visual() {
    let mut keys = grid(3, 3, 50);
    keys[2].state = InteractionState::NORMAL.with_checked(true);

    let mut panel = KeyPanel::default();
    panel.set_background_visual(Some(Box::new(
        StateVisual::new(Color::WHITE).checked(Color::RED),
    )));
    let mut canvas = FillLog::default();
    panel.render(&mut canvas, &keys).expect("paint");

    let colors: Vec<Color> = canvas.fills.iter().map(|(_, c)| *c).collect();
    assert_eq!(colors, vec![Color::WHITE, Color::WHITE, Color::RED]);
}

#[test]
fn test_label_and_icon_on_same_key() {
    let icon = Icon::new(IconId(2), 10, 10);
    let keys = vec![Key::new(0, 50, 40, 40).with_label("x").with_icon(icon)];
    let mut canvas = RecordingCanvas::new();
    KeyPanel::default().render(&mut canvas, &keys).expect("paint");

    assert!(matches!(canvas.commands()[0], DrawCommand::Text { .. }));
    assert_eq!(
        canvas.commands()[1],
        DrawCommand::Image {
            icon,
            bounds: Rect::new(15.0, 65.0, 10.0, 10.0)
        }
    );
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_panel_from_config() {
    let config = PanelConfig::from_toml_str(
        r##"
        columns = 2
        column_padding = 8
        row_padding = 4
        override_key_index = 1
        override_text_color = "#ff0000"

        [key_background]
        normal = "#ffffff"

        [override_background]
        normal = "#0000ff"
        "##,
    )
    .expect("valid toml");
    let panel = KeyPanel::from_config(&config).expect("valid config");

    let keys = grid(4, 2, 100);
    let mut canvas = FillLog::default();
    panel.render(&mut canvas, &keys).expect("paint");

    // key 1 is the last column: left = 100 + 4, right = 200 - 8, top = 1 + 2
    assert!(canvas
        .fills
        .contains(&(Rect::new(104.0, 3.0, 88.0, 95.0), Color::BLUE)));
    assert_eq!(canvas.texts[1].1, Color::RED);
    assert_eq!(canvas.texts[0].1, Color::BLACK);
}

#[test]
fn test_apply_invalid_config_keeps_style() {
    let mut panel = KeyPanel::default();
    panel.set_column_count(5);
    let config = PanelConfig::from_toml_str(
        r#"
        columns = 2
        text_color = "nope"
        "#,
    )
    .expect("valid toml");

    assert!(matches!(
        panel.apply_config(&config),
        Err(PanelError::InvalidConfig(_))
    ));
    assert_eq!(panel.style().columns, 5);
}

// =============================================================================
// Host surfaces
// =============================================================================

#[test]
fn test_surface_error_propagates_and_stops() {
    let keys = grid(12, 3, 100);
    let mut panel = KeyPanel::default();
    panel.set_background_visual(Some(Box::new(StateVisual::new(Color::WHITE))));

    // Each key: push clip, fill, text, pop clip. Fail inside key 2.
    let mut canvas = RecordingCanvas::new().failing_after(9);
    let err = panel.draw(&mut canvas, &keys).unwrap_err();
    assert!(matches!(err, PanelError::Surface(CanvasError::Backend(_))));
    assert_eq!(canvas.texts().len(), 2);
    assert!(panel.is_dirty());
}

#[test]
fn test_key_source_slice() {
    let keys = grid(6, 3, 10);
    let source: &[Key] = &keys;
    assert_eq!(source.keys().len(), 6);

    let mut panel = KeyPanel::default();
    let mut canvas = RecordingCanvas::new();
    panel.draw(&mut canvas, source).expect("paint");
    assert_eq!(canvas.texts().len(), 6);
}

#[test]
fn test_replaced_paint_state_reflected_in_next_render() {
    let keys = grid(1, 3, 100);
    let mut panel = KeyPanel::default();
    panel
        .set_paint_state(Some(PaintState {
            text_size: 12.0,
            ..PaintState::default()
        }))
        .expect("set");

    let mut canvas = RecordingCanvas::new();
    panel.render(&mut canvas, &keys).expect("paint");
    assert_eq!(canvas.texts()[0].2.size, 12.0);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_override_applied_to_exactly_one_index(len in 0usize..40, override_index in 0usize..20) {
        let keys = grid(len, 3, 50);
        let mut panel = KeyPanel::default();
        panel.set_override_key_index(override_index);
        panel.set_override_visual(Some(Box::new(StateVisual::new(Color::BLUE))));
        panel.set_override_text_color(Color::RED);

        let mut canvas = FillLog::default();
        panel.render(&mut canvas, &keys).expect("paint");

        let expected = usize::from(len > override_index);
        prop_assert_eq!(canvas.fills.len(), expected);
        let red: Vec<usize> = canvas
            .texts
            .iter()
            .enumerate()
            .filter(|(_, (_, c))| *c == Color::RED)
            .map(|(i, _)| i)
            .collect();
        if len > override_index {
            prop_assert_eq!(red, vec![override_index]);
        } else {
            prop_assert!(red.is_empty());
        }
    }

    #[test]
    fn prop_top_row_offset(y in 0i32..3, x in 0i32..200) {
        let keys = vec![Key::new(x, y, 60, 60)];
        let layout = KeyPanel::default().layout_key(0, &keys).expect("key");
        let expected = if y == 0 { 1 } else { y };
        prop_assert_eq!(layout.draw_y, expected);
        prop_assert_eq!(layout.bounds.top, expected + 8);
    }

    #[test]
    fn prop_render_total_over_full_i32_range(
        geometry in proptest::collection::vec(any::<(i32, i32, i32, i32)>(), 0..8),
        icon in any::<(i32, i32)>(),
        column_padding in any::<i32>(),
        row_padding in any::<i32>(),
        columns in 1usize..5,
    ) {
        let keys: Vec<Key> = geometry
            .iter()
            .map(|&(x, y, w, h)| {
                Key::new(x, y, w, h)
                    .with_label("k")
                    .with_icon(Icon::new(IconId(0), icon.0, icon.1))
            })
            .collect();
        let mut panel = KeyPanel::default();
        panel.set_column_count(columns);
        panel.set_column_padding(column_padding);
        panel.set_row_padding(row_padding);
        panel.set_panel_background(Color::WHITE);
        panel.set_background_visual(Some(Box::new(StateVisual::new(Color::WHITE))));

        let mut canvas = RecordingCanvas::new();
        prop_assert!(panel.render(&mut canvas, &keys).is_ok());
        prop_assert_eq!(canvas.texts().len(), keys.len());
        prop_assert_eq!(canvas.clip_depth(), 0);
    }

    #[test]
    fn prop_render_is_deterministic(len in 0usize..30, columns in 1usize..6) {
        let keys = grid(len, columns, 40);
        let mut panel = KeyPanel::default();
        panel.set_column_count(columns);
        panel.set_background_visual(Some(Box::new(StateVisual::new(Color::WHITE))));

        let mut a = RecordingCanvas::new();
        let mut b = RecordingCanvas::new();
        panel.render(&mut a, &keys).expect("paint");
        panel.render(&mut b, &keys).expect("paint");
        prop_assert_eq!(a.commands(), b.commands());
        prop_assert_eq!(a.clip_depth(), 0);
    }
}
