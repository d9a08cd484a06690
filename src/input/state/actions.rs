use crate::config::Action;
use crate::draw::color;
use crate::input::events::Key;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a key press event.
    ///
    /// Handles modifier tracking and routes everything else through the
    /// configurable action map: pen color selection, thickness and label
    /// size adjustment, UI toggles, and the stop/exit key.
    pub fn on_key_press(&mut self, key: Key) {
        // Handle modifier keys first
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        // Convert key to string for action lookup
        let key_str = match key {
            Key::Char(c) => c.to_string(),
            Key::Escape => "Escape".to_string(),
            Key::Plus => "+".to_string(),
            Key::Minus => "-".to_string(),
            Key::F10 => "F10".to_string(),
            Key::F12 => "F12".to_string(),
            _ => return,
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Handle an action triggered by a keybinding.
    pub(super) fn handle_action(&mut self, action: Action) {
        match action {
            Action::Exit => {
                // The stop key behaves exactly like a pointer release while a
                // stroke is in flight: the segment is committed, not dropped.
                match self.state {
                    DrawingState::Drawing { .. } => {
                        self.commit_active();
                    }
                    DrawingState::Idle => {
                        self.should_exit = true;
                    }
                }
            }
            Action::IncreaseThickness => {
                self.adjust_thickness(1.0);
            }
            Action::DecreaseThickness => {
                self.adjust_thickness(-1.0);
            }
            Action::IncreaseLabelSize => {
                self.adjust_label_size(2.0);
            }
            Action::DecreaseLabelSize => {
                self.adjust_label_size(-2.0);
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.needs_redraw = true;
            }
            Action::ToggleStatusBar => {
                self.show_status_bar = !self.show_status_bar;
                self.needs_redraw = true;
            }
            Action::SetColorRed => self.set_color(color::RED),
            Action::SetColorGreen => self.set_color(color::GREEN),
            Action::SetColorBlue => self.set_color(color::BLUE),
            Action::SetColorYellow => self.set_color(color::YELLOW),
            Action::SetColorOrange => self.set_color(color::ORANGE),
            Action::SetColorPink => self.set_color(color::PINK),
            Action::SetColorWhite => self.set_color(color::WHITE),
            Action::SetColorBlack => self.set_color(color::BLACK),
        }
    }

    /// Processes a key release event.
    ///
    /// Currently only tracks modifier key releases to update the modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }
}
