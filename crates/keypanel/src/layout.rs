//! Grid classification and padded key geometry.
//!
//! Keys arrive in row-major order. A key's grid cell is derived from its index
//! and the panel's column count only; the key's own coordinates are never used
//! to decide which row or column it sits in.
//!
//! Horizontal insets depend on the column: keys touching the left or right
//! panel edge are inset by the full column padding on that side and by half of
//! it on the side facing a neighbour. Vertical insets are half the row padding
//! on both sides for every row.

use crate::key::Key;
use keypanel_core::{Bounds, Icon, Point};

/// Where a key sits in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    /// `index / columns`
    pub row: usize,
    /// `index % columns`
    pub column: usize,
    /// Key is in the first column
    pub first_column: bool,
    /// Key is in the last column (and not the first)
    pub last_column: bool,
    /// Key is among the first `columns` keys
    pub first_row: bool,
    /// Key is among the last `columns` keys
    pub last_row: bool,
}

/// Classify key `index` of a sequence of `len` keys laid out in `columns`
/// columns. A column count of zero is treated as one.
#[must_use]
pub fn classify(index: usize, len: usize, columns: usize) -> GridPosition {
    let columns = columns.max(1);
    let column = index % columns;
    let first_column = column == 0;
    GridPosition {
        row: index / columns,
        column,
        first_column,
        last_column: !first_column && column == columns - 1,
        first_row: index < columns,
        last_row: len.saturating_sub(index) <= columns,
    }
}

/// Top edge used for drawing a key: a key at `y == 0` is nudged down one pixel
/// so its background does not touch the panel's top edge.
#[must_use]
pub const fn draw_y(y: i32) -> i32 {
    if y == 0 {
        y + 1
    } else {
        y
    }
}

/// Padded drawing rectangle for `key` at `position`.
///
/// Paddings are not validated: negative or oversized values produce inverted
/// bounds, which are passed through unchanged. Edge arithmetic wraps on
/// overflow.
#[must_use]
pub fn key_bounds(key: &Key, position: GridPosition, column_padding: i32, row_padding: i32) -> Bounds {
    let half_column = column_padding / 2;
    let half_row = row_padding / 2;

    let x = key.x;
    let right_edge = key.x.wrapping_add(key.width);
    let (left, right) = if position.first_column {
        (x.wrapping_add(column_padding), right_edge.wrapping_sub(half_column))
    } else if position.last_column {
        (x.wrapping_add(half_column), right_edge.wrapping_sub(column_padding))
    } else {
        (x.wrapping_add(half_column), right_edge.wrapping_sub(half_column))
    };

    // First, middle and last rows share the same vertical insets.
    let top = draw_y(key.y).wrapping_add(half_row);
    let bottom = key.y.wrapping_add(key.height).wrapping_sub(half_row);

    Bounds::new(left, top, right, bottom)
}

/// Baseline anchor for a centred label of `text_size` with the given font
/// `descent`.
#[must_use]
pub fn label_anchor(key: &Key, text_size: f32, descent: f32) -> Point {
    let x = key.x.wrapping_add(key.width / 2);
    let y = draw_y(key.y) as f32 + (key.height as f32 + text_size - descent) / 2.0;
    Point::new(x as f32, y)
}

/// Bounds of `icon` at its intrinsic size, centred on the key.
#[must_use]
pub const fn icon_bounds(key: &Key, icon: &Icon) -> Bounds {
    let x = key.x.wrapping_add(key.width.wrapping_sub(icon.width) / 2);
    let y = draw_y(key.y).wrapping_add(key.height.wrapping_sub(icon.height) / 2);
    Bounds::from_origin_size(x, y, icon.width, icon.height)
}
