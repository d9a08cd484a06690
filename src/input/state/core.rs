//! Drawing state machine and input state management.

use crate::config::{Action, KeyBinding};
use crate::draw::{
    CanvasGeometry, Color, FontDescriptor, LineSegment, Point, SegmentStore,
};
use crate::input::modifiers::Modifiers;
use std::collections::HashMap;

/// Current drawing mode state machine.
///
/// The machine is either idle or tracing a stroke; there is no other mode.
/// `Drawing` exists exactly while a start point is recorded, so "is drawing"
/// and "has a start point" cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for a pointer press on the canvas
    Idle,
    /// Tracing a stroke (pointer button held down)
    Drawing {
        /// Where the press landed, in drawing-space coordinates
        start: Point,
        /// Most recent pointer position; equals `start` until the first motion
        current: Point,
    },
}

/// Main input state containing all drawing session state.
///
/// Holds the committed segment store, the active pen parameters, modifier
/// keys, the drawing state machine, and UI flags. All keyboard and pointer
/// events funnel through this struct, which decides when redraws are needed.
/// Nothing here survives the session; there is no persistence.
pub struct InputState {
    /// Committed segments and their measurements
    pub store: SegmentStore,
    /// Canvas placement and surface-to-drawing-space mapping
    pub canvas: CanvasGeometry,
    /// Current pen color (changed with color keys: R, G, B, etc.)
    pub current_color: Color,
    /// Current stroke thickness in pixels (changed with +/- keys or scroll)
    pub current_thickness: f64,
    /// Measurement label font size in points (Shift+scroll)
    pub label_size: f64,
    /// Font descriptor for label rendering (family, weight, style)
    pub font_descriptor: FontDescriptor,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Whether user requested to exit the overlay
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the help overlay is currently visible (toggled with F10)
    pub show_help: bool,
    /// Whether the status bar is currently visible (toggled with F12)
    pub show_status_bar: bool,
    /// Surface width in pixels (set by backend after configuration)
    pub surface_width: u32,
    /// Surface height in pixels (set by backend after configuration)
    pub surface_height: u32,
    /// Maximum number of committed segments (0 = unlimited)
    pub max_segments: usize,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// Surface dimensions start at 0 and should be updated by the backend
    /// after the compositor configures the surface
    /// (see `update_surface_dimensions`).
    ///
    /// # Arguments
    /// * `color` - Initial pen color
    /// * `thickness` - Initial stroke thickness in pixels
    /// * `label_size` - Measurement label font size in points
    /// * `font_descriptor` - Font configuration for label rendering
    /// * `show_status_bar` - Whether the status bar starts visible
    /// * `canvas` - Canvas geometry (placed once dimensions are known)
    /// * `action_map` - Keybinding action map
    /// * `max_segments` - Commit limit for the store (0 = unlimited)
    #[allow(clippy::too_many_arguments)]
    pub fn with_defaults(
        color: Color,
        thickness: f64,
        label_size: f64,
        font_descriptor: FontDescriptor,
        show_status_bar: bool,
        canvas: CanvasGeometry,
        action_map: HashMap<KeyBinding, Action>,
        max_segments: usize,
    ) -> Self {
        Self {
            store: SegmentStore::new(),
            canvas,
            current_color: color,
            current_thickness: thickness,
            label_size,
            font_descriptor,
            modifiers: Modifiers::new(),
            state: DrawingState::Idle,
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            show_status_bar,
            surface_width: 0,
            surface_height: 0,
            max_segments,
            action_map,
        }
    }

    /// Updates surface dimensions after backend configuration.
    ///
    /// Re-centers the canvas on the new surface. Called by the backend when
    /// the compositor reports the actual surface size.
    pub fn update_surface_dimensions(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;
        self.canvas.place_within(width as f64, height as f64);
    }

    /// Whether a stroke is currently in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Returns the segment currently being traced, for the live preview.
    ///
    /// `None` while idle. The preview segment runs from the recorded start
    /// point to the most recent pointer position.
    pub fn preview_segment(&self) -> Option<LineSegment> {
        if let DrawingState::Drawing { start, current } = self.state {
            Some(LineSegment {
                start,
                end: current,
            })
        } else {
            None
        }
    }

    /// Commits the in-progress stroke and returns to `Idle`.
    ///
    /// No-op while idle, so stray release events degrade to inaction. The
    /// committed endpoint is the last tracked pointer position; a press with
    /// no motion commits a zero-length segment.
    pub(super) fn commit_active(&mut self) {
        if let DrawingState::Drawing { start, current } = self.state {
            let segment = LineSegment {
                start,
                end: current,
            };
            if !self.store.try_commit(segment, self.max_segments) {
                log::warn!(
                    "Segment limit ({}) reached; discarding new segment",
                    self.max_segments
                );
            }
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
        }
    }

    /// Look up an action for the given key and modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        for (binding, action) in &self.action_map {
            if binding.matches(
                key_str,
                self.modifiers.ctrl,
                self.modifiers.shift,
                self.modifiers.alt,
            ) {
                return Some(*action);
            }
        }
        None
    }

    /// Adjusts the stroke thickness by a delta, clamping to the 1-20px range.
    pub fn adjust_thickness(&mut self, delta: f64) {
        self.current_thickness = (self.current_thickness + delta).clamp(1.0, 20.0);
        self.needs_redraw = true;
        log::debug!("Thickness adjusted to {:.0}px", self.current_thickness);
    }

    /// Adjusts the label font size by a delta, clamping to the 8-72pt range.
    pub fn adjust_label_size(&mut self, delta: f64) {
        self.label_size = (self.label_size + delta).clamp(8.0, 72.0);
        self.needs_redraw = true;
        log::debug!("Label size adjusted to {:.1}pt", self.label_size);
    }

    /// Switches the pen color and repaints (committed strokes recolor too,
    /// since segments carry no color of their own).
    pub(super) fn set_color(&mut self, color: Color) {
        self.current_color = color;
        self.needs_redraw = true;
    }
}
