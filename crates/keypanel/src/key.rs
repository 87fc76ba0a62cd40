//! Key records handed to the panel by the host keyboard model.

use keypanel_core::{Bounds, Icon, InteractionState};

/// One paintable key: geometry in panel pixels, optional label and icon, and
/// the interaction state that selects its visual variant.
///
/// The panel never mutates keys; the host owns them and their state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Key {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
    /// Text drawn centred on the key
    pub label: Option<String>,
    /// Bitmap drawn centred on the key
    pub icon: Option<Icon>,
    /// Pressed / checked state
    pub state: InteractionState,
}

impl Key {
    /// Create an unlabelled key.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: None,
            icon: None,
            state: InteractionState::NORMAL,
        }
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the interaction state.
    #[must_use]
    pub fn with_state(mut self, state: InteractionState) -> Self {
        self.state = state;
        self
    }

    /// Unpadded key area.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.x, self.y, self.width, self.height)
    }
}

/// Keyboard model the panel reads its keys from, in row-major order.
pub trait KeySource {
    /// Current keys.
    fn keys(&self) -> &[Key];
}

impl KeySource for [Key] {
    fn keys(&self) -> &[Key] {
        self
    }
}

impl KeySource for Vec<Key> {
    fn keys(&self) -> &[Key] {
        self
    }
}
