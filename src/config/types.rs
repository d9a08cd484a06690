//! Configuration type definitions.

use super::enums::{ColorSpec, StatusPosition};
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen and label appearance when the overlay first opens.
/// Color, thickness, and label size can be changed at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default pen color - either a named color (red, green, blue, yellow,
    /// orange, pink, white, black) or an RGB array like `[40, 60, 200]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke thickness in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Measurement label font size in points (valid range: 8.0 - 72.0)
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,

    /// Font family name for label text (e.g., "Sans", "Monospace")
    /// Falls back to "Sans" if the specified font is not available
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Draw a contrast box behind labels so they stay readable over the grid
    #[serde(default = "default_label_background")]
    pub label_background_enabled: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            label_font_size: default_label_font_size(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            label_background_enabled: default_label_background(),
        }
    }
}

/// Reference grid settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Distance between grid rules in pixels (valid range: 4.0 - 200.0)
    #[serde(default = "default_grid_spacing")]
    pub spacing: f64,

    /// Rule color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_grid_color")]
    pub color: [f64; 4],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spacing: default_grid_spacing(),
            color: default_grid_color(),
        }
    }
}

/// Canvas sheet settings.
///
/// The canvas is a fixed-size sheet centered on the overlay surface; the
/// default 1140x700 matches the reference layout this tool grew out of.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Sheet color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_canvas_background")]
    pub background: [f64; 4],

    /// Scrim color for the area outside the canvas [R, G, B, A]
    #[serde(default = "default_canvas_scrim")]
    pub scrim: [f64; 4],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_canvas_background(),
            scrim: default_canvas_scrim(),
        }
    }
}

/// Measurement label formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementConfig {
    /// Unit suffix appended to lengths; lengths themselves are raw
    /// drawing-space distances, no conversion is applied
    #[serde(default = "default_unit")]
    pub unit: String,

    /// Decimal places in formatted lengths (valid range: 0 - 3)
    #[serde(default = "default_precision")]
    pub precision: u8,
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            precision: default_precision(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Number of buffers for buffering (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory, potential tearing)
    /// - 3 = triple buffering (balanced, recommended)
    /// - 4 = quad buffering (highest memory, smoothest)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Enable vsync frame synchronization to prevent tearing
    /// Set to false for lower latency at the cost of potential screen tearing
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,

    /// Maximum number of committed segments kept in memory (0 = unlimited)
    #[serde(default = "default_max_segments")]
    pub max_segments: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
            max_segments: default_max_segments(),
        }
    }
}

/// UI display preferences.
///
/// Controls the visibility and positioning of on-screen UI elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the status bar displaying pen color, thickness, and segment count
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Status bar screen position (top-left, top-right, bottom-left, bottom-right)
    #[serde(default = "default_status_position")]
    pub status_bar_position: StatusPosition,

    /// Status bar styling options
    #[serde(default)]
    pub status_bar_style: StatusBarStyle,

    /// Help overlay styling options
    #[serde(default)]
    pub help_overlay_style: HelpOverlayStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            status_bar_position: default_status_position(),
            status_bar_style: StatusBarStyle::default(),
            help_overlay_style: HelpOverlayStyle::default(),
        }
    }
}

/// Status bar styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBarStyle {
    /// Font size for status bar text
    #[serde(default = "default_status_font_size")]
    pub font_size: f64,

    /// Padding around status bar text
    #[serde(default = "default_status_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_text_color")]
    pub text_color: [f64; 4],

    /// Pen color indicator dot radius
    #[serde(default = "default_status_dot_radius")]
    pub dot_radius: f64,
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            font_size: default_status_font_size(),
            padding: default_status_padding(),
            bg_color: default_status_bg_color(),
            text_color: default_status_text_color(),
            dot_radius: default_status_dot_radius(),
        }
    }
}

/// Help overlay styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpOverlayStyle {
    /// Font size for help overlay text
    #[serde(default = "default_help_font_size")]
    pub font_size: f64,

    /// Line height for help text
    #[serde(default = "default_help_line_height")]
    pub line_height: f64,

    /// Padding around help box
    #[serde(default = "default_help_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_bg_color")]
    pub bg_color: [f64; 4],

    /// Border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_border_color")]
    pub border_color: [f64; 4],

    /// Border line width
    #[serde(default = "default_help_border_width")]
    pub border_width: f64,

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_text_color")]
    pub text_color: [f64; 4],
}

impl Default for HelpOverlayStyle {
    fn default() -> Self {
        Self {
            font_size: default_help_font_size(),
            line_height: default_help_line_height(),
            padding: default_help_padding(),
            bg_color: default_help_bg_color(),
            border_color: default_help_border_color(),
            border_width: default_help_border_width(),
            text_color: default_help_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thickness() -> f64 {
    2.0
}

fn default_label_font_size() -> f64 {
    14.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_label_background() -> bool {
    true
}

fn default_grid_spacing() -> f64 {
    20.0
}

fn default_grid_color() -> [f64; 4] {
    [0.82, 0.85, 0.88, 1.0]
}

fn default_canvas_width() -> u32 {
    1140
}

fn default_canvas_height() -> u32 {
    700
}

fn default_canvas_background() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_canvas_scrim() -> [f64; 4] {
    [0.08, 0.09, 0.11, 0.45]
}

fn default_unit() -> String {
    "px".to_string()
}

fn default_precision() -> u8 {
    1
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}

fn default_max_segments() -> usize {
    0
}

fn default_show_status() -> bool {
    true
}

fn default_status_position() -> StatusPosition {
    StatusPosition::BottomLeft
}

// Status bar style defaults
fn default_status_font_size() -> f64 {
    18.0
}

fn default_status_padding() -> f64 {
    12.0
}

fn default_status_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.85]
}

fn default_status_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_status_dot_radius() -> f64 {
    6.0
}

// Help overlay style defaults
fn default_help_font_size() -> f64 {
    16.0
}

fn default_help_line_height() -> f64 {
    22.0
}

fn default_help_padding() -> f64 {
    20.0
}

fn default_help_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.85]
}

fn default_help_border_color() -> [f64; 4] {
    [0.3, 0.6, 1.0, 0.9]
}

fn default_help_border_width() -> f64 {
    2.0
}

fn default_help_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
