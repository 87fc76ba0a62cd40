//! Core types and traits for the keypanel renderer.
//!
//! This crate provides the primitives the key panel paints with:
//! - Geometric primitives: [`Point`], [`Rect`], [`Bounds`]
//! - Color representation: [`Color`]
//! - The drawing capability: [`Canvas`], with [`RecordingCanvas`] for tests
//! - Key appearance: [`InteractionState`], [`Visual`], [`StateVisual`], [`Icon`]

mod canvas;
mod color;
pub mod draw;
mod error;
mod geometry;
mod visual;

pub use canvas::{Canvas, FontWeight, RecordingCanvas, TextAlign, TextStyle, DEFAULT_DESCENT_RATIO};
pub use color::{Color, ColorParseError};
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use error::{CanvasError, CanvasResult};
pub use geometry::{Bounds, CornerRadius, Point, Rect};
pub use visual::{ColorVisual, Icon, IconId, InteractionState, StateVisual, Visual};
