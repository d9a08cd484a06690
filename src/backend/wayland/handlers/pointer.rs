// Feeds pointer events (motion/buttons/scroll) into the drawing state to keep
// the canvas reactive. Positions are forwarded in surface coordinates; the
// input state maps them into canvas space.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::input::MouseButton;

use super::super::state::WaylandState;

fn map_button(button: u32) -> Option<MouseButton> {
    match button {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_RIGHT => Some(MouseButton::Right),
        _ => None,
    }
}

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            let (x, y) = event.position;
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!("Pointer entered at ({}, {})", x, y);
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                }
                PointerEventKind::Motion { .. } => {
                    // needs_redraw is set inside on_mouse_motion only while a
                    // stroke is in flight, so idle motion stays render-free
                    self.input_state.on_mouse_motion(x, y);
                }
                PointerEventKind::Press { button, .. } => {
                    debug!("Button {} pressed at ({}, {})", button, x, y);

                    let Some(mb) = map_button(button) else {
                        continue;
                    };
                    self.input_state.on_mouse_press(mb, x, y);
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);

                    let Some(mb) = map_button(button) else {
                        continue;
                    };
                    self.input_state.on_mouse_release(mb);
                }
                PointerEventKind::Axis { vertical, .. } => {
                    let scroll_direction = if vertical.discrete != 0 {
                        vertical.discrete
                    } else if vertical.absolute.abs() > 0.1 {
                        if vertical.absolute > 0.0 { 1 } else { -1 }
                    } else {
                        0
                    };

                    if self.input_state.modifiers.shift {
                        // Shift+Scroll: adjust measurement label size
                        if scroll_direction > 0 {
                            self.input_state.adjust_label_size(-2.0);
                        } else if scroll_direction < 0 {
                            self.input_state.adjust_label_size(2.0);
                        }
                    } else if scroll_direction > 0 {
                        self.input_state.adjust_thickness(-1.0);
                    } else if scroll_direction < 0 {
                        self.input_state.adjust_thickness(1.0);
                    }
                }
            }
        }
    }
}
