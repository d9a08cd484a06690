use crate::input::events::MouseButton;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a pointer button press event.
    ///
    /// Coordinates are surface-space; they are mapped into drawing-space
    /// through the canvas geometry before entering the state machine.
    ///
    /// # Behavior
    /// - Left press while Idle on the canvas sheet: starts a stroke with
    ///   `start == current == mapped point`
    /// - Left press outside the canvas: ignored
    /// - Right press: discards the in-progress stroke without committing
    pub fn on_mouse_press(&mut self, button: MouseButton, surface_x: f64, surface_y: f64) {
        match button {
            MouseButton::Left => {
                if matches!(self.state, DrawingState::Idle) {
                    if !self.canvas.contains(surface_x, surface_y) {
                        return;
                    }
                    let point = self.canvas.to_canvas(surface_x, surface_y);
                    self.state = DrawingState::Drawing {
                        start: point,
                        current: point,
                    };
                    self.needs_redraw = true;
                }
            }
            MouseButton::Right => {
                if !matches!(self.state, DrawingState::Idle) {
                    self.state = DrawingState::Idle;
                    self.needs_redraw = true;
                }
            }
            _ => {}
        }
    }

    /// Processes pointer motion events.
    ///
    /// While drawing, tracks the mapped position as the stroke's moving
    /// endpoint and requests a repaint for the live preview. Motion while
    /// idle is a no-op.
    pub fn on_mouse_motion(&mut self, surface_x: f64, surface_y: f64) {
        let point = self.canvas.to_canvas(surface_x, surface_y);
        if let DrawingState::Drawing { current, .. } = &mut self.state {
            *current = point;
            self.needs_redraw = true;
        }
    }

    /// Processes pointer button release events.
    ///
    /// A left release while drawing commits the stroke from the start point
    /// to the last tracked position; the release event's own coordinates are
    /// not consulted. Releases while idle are ignored.
    pub fn on_mouse_release(&mut self, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        self.commit_active();
    }
}
