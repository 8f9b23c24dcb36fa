//! Drag-to-rotate state machine.
//!
//! Two states. A primary press starts a drag; while dragging every move
//! sample turns the view; releasing the primary button or leaving the
//! surface ends it. Moves while idle are ignored. There is no inertia and
//! no clamping, so pitch may pass through the poles.

use super::event::{PointerButton, PointerEvent};
use super::ViewState;

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No button held.
    #[default]
    Idle,
    /// Primary button held; moves rotate the view.
    Dragging,
}

/// Owns the view angles and the drag state.
#[derive(Debug, Clone)]
pub struct ViewController {
    state: ViewState,
    initial: ViewState,
    drag: DragState,
    /// Degrees of rotation per pixel of pointer travel.
    pub sensitivity: f32,
}

impl ViewController {
    /// Controller starting (and resetting) at `initial`.
    #[must_use]
    pub fn new(initial: ViewState, sensitivity: f32) -> Self {
        Self {
            state: initial,
            initial,
            drag: DragState::Idle,
            sensitivity,
        }
    }

    /// Current view angles.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Current drag state.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Feed one pointer event. Returns `true` when the view angles changed.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        match (self.drag, event) {
            (DragState::Idle, PointerEvent::Pressed { button: PointerButton::Primary }) => {
                self.drag = DragState::Dragging;
                false
            }
            (DragState::Dragging, PointerEvent::Moved { dx, dy }) => {
                self.rotate(dx, dy);
                true
            }
            (
                DragState::Dragging,
                PointerEvent::Released { button: PointerButton::Primary } | PointerEvent::Left,
            ) => {
                self.drag = DragState::Idle;
                false
            }
            _ => false,
        }
    }

    /// Drag right turns yaw up; drag down tilts pitch down.
    fn rotate(&mut self, dx: f32, dy: f32) {
        self.state.yaw += dx * self.sensitivity;
        self.state.pitch -= dy * self.sensitivity;
    }

    /// Return to the initial angles and end any drag.
    pub fn reset(&mut self) {
        self.state = self.initial;
        self.drag = DragState::Idle;
    }

    /// Replace the initial angles and jump to them.
    pub fn reset_to(&mut self, initial: ViewState) {
        self.initial = initial;
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press() -> PointerEvent {
        PointerEvent::Pressed {
            button: PointerButton::Primary,
        }
    }

    fn controller() -> ViewController {
        ViewController::new(ViewState::new(30.0, -20.0), 0.5)
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut view = controller();
        assert!(!view.handle_event(PointerEvent::Moved { dx: 40.0, dy: 40.0 }));
        assert_eq!(view.state(), ViewState::new(30.0, -20.0));
    }

    #[test]
    fn drag_accumulates_yaw_and_pitch() {
        let mut view = controller();
        let _ = view.handle_event(press());
        assert!(view.is_dragging());
        assert!(view.handle_event(PointerEvent::Moved { dx: 10.0, dy: 4.0 }));
        assert!(view.handle_event(PointerEvent::Moved { dx: -2.0, dy: 0.0 }));
        assert_eq!(view.state(), ViewState::new(34.0, -22.0));
    }

    #[test]
    fn leaving_surface_ends_drag() {
        let mut view = controller();
        let _ = view.handle_event(press());
        let _ = view.handle_event(PointerEvent::Left);
        assert_eq!(view.drag_state(), DragState::Idle);
        assert!(!view.handle_event(PointerEvent::Moved { dx: 10.0, dy: 0.0 }));
    }

    #[test]
    fn secondary_button_does_not_drag_or_release() {
        let mut view = controller();
        let _ = view.handle_event(PointerEvent::Pressed {
            button: PointerButton::Secondary,
        });
        assert!(!view.is_dragging());
        let _ = view.handle_event(press());
        let _ = view.handle_event(PointerEvent::Released {
            button: PointerButton::Secondary,
        });
        assert!(view.is_dragging());
    }

    #[test]
    fn pitch_is_not_clamped() {
        let mut view = controller();
        let _ = view.handle_event(press());
        let _ = view.handle_event(PointerEvent::Moved { dx: 0.0, dy: 400.0 });
        assert_eq!(view.state().pitch, -220.0);
    }

    #[test]
    fn reset_restores_initial_angles() {
        let mut view = controller();
        let _ = view.handle_event(press());
        let _ = view.handle_event(PointerEvent::Moved { dx: 10.0, dy: 10.0 });
        view.reset();
        assert_eq!(view.state(), ViewState::new(30.0, -20.0));
        assert!(!view.is_dragging());
    }
}
