use serde::{Deserialize, Serialize};

/// Platform-agnostic pointer events.
///
/// These are fed into a [`ViewController`](super::ViewController), which
/// turns primary-button drags into yaw and pitch changes.
///
/// # Example
///
/// ```
/// use netfold::view::{PointerButton, PointerEvent, ViewController, ViewState};
///
/// let mut view = ViewController::new(ViewState::default(), 0.5);
/// let _ = view.handle_event(PointerEvent::Pressed { button: PointerButton::Primary });
/// let _ = view.handle_event(PointerEvent::Moved { dx: 10.0, dy: 0.0 });
/// assert_eq!(view.state().yaw, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    /// A button went down over the drawing surface.
    Pressed {
        /// Which button changed.
        button: PointerButton,
    },
    /// Pointer moved by a relative amount.
    Moved {
        /// Horizontal travel in pixels (positive = right).
        dx: f32,
        /// Vertical travel in pixels (positive = down).
        dy: f32,
    },
    /// A button was released.
    Released {
        /// Which button changed.
        button: PointerButton,
    },
    /// Pointer left the drawing surface.
    Left,
}

/// Platform-agnostic pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Primary (left) button or a touch contact.
    Primary,
    /// Secondary (right) button.
    Secondary,
    /// Middle button (wheel click).
    Middle,
}
