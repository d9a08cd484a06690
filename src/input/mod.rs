//! Input handling and drawing state machine.
//!
//! This module translates backend keyboard and pointer events into drawing
//! actions. It maintains the drawing session state (pen color, thickness,
//! committed segments) and the idle/drawing state machine that decides when
//! a stroke is committed.

pub mod events;
pub mod modifiers;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use state::{DrawingState, InputState};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use modifiers::Modifiers;
