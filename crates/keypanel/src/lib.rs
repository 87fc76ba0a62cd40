//! Grid key panel renderer.
//!
//! Turns an ordered sequence of [`Key`] records into draw calls on a
//! [`Canvas`](keypanel_core::Canvas):
//! - [`layout`]: grid classification and padded key rectangles
//! - [`KeyPanel`]: style state, redraw requests and the paint pass
//! - [`PanelConfig`]: TOML configuration with explicit defaults
//!
//! Key-event handling, text editing and keyboard-layout parsing belong to the
//! host; the panel only reads the keys it is given.

mod config;
mod error;
mod key;
pub mod layout;
mod panel;
mod style;

pub use config::{PanelConfig, VisualConfig};
pub use error::PanelError;
pub use key::{Key, KeySource};
pub use layout::GridPosition;
pub use panel::{KeyLayout, KeyPanel};
pub use style::{
    PaintCustomizer, PaintState, PanelStyle, DEFAULT_COLUMNS, DEFAULT_OVERRIDE_KEY_INDEX,
    DEFAULT_PADDING, DEFAULT_TEXT_SIZE,
};
