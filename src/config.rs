//! Watchface configuration constants.
//!
//! All configurability lives here as compile-time constants: display size,
//! feature flags, and the geometry of the face (ring multipliers, border
//! widths, marker radii, label frame size). Ring radii are fractions of the
//! face radius so the same face renders correctly on any display size.

use std::time::Duration;

use embedded_graphics::pixelcolor::BinaryColor;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (144x168, the classic 1-bit watch panel).
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Foreground draw color (hands, labels, borders).
pub const FOREGROUND: BinaryColor = BinaryColor::On;

/// Background fill color.
pub const BACKGROUND: BinaryColor = BinaryColor::Off;

// =============================================================================
// Feature Flags
// =============================================================================

/// Draw the second-hand marker and tick once per second instead of per minute.
pub const SHOW_SECONDS: bool = false;

/// Draw the two concentric border circles.
pub const SHOW_BORDERS: bool = true;

// =============================================================================
// Face Geometry
// =============================================================================

/// Outer border circle radius as a fraction of the face radius.
pub const OUTER_RADIUS_MULT: f32 = 0.8;

/// Inner border circle radius as a fraction of the face radius.
pub const INNER_RADIUS_MULT: f32 = 0.4;

/// Stroke width of the outer border circle, in pixels.
pub const OUTER_BORDER_WIDTH: i32 = 1;

/// Stroke width of the inner border circle, in pixels.
pub const INNER_BORDER_WIDTH: i32 = 1;

/// Hour label ring radius as a fraction of the face radius.
pub const HOUR_TEXT_RADIUS_MULT: f32 = 0.9;

/// Minute label ring radius as a fraction of the face radius.
pub const MINUTE_TEXT_RADIUS_MULT: f32 = 0.5;

/// Width of the frame each label is centered in. The dither mask is
/// composited over this whole frame, not just the glyphs.
pub const TEXT_FRAME_WIDTH: u32 = 20;

/// Height of the label frame.
pub const TEXT_FRAME_HEIGHT: u32 = 20;

// =============================================================================
// Hand Markers
// =============================================================================
//
// Hands are drawn as small filled dots riding just inside their border ring,
// offset inward by the ring's stroke width plus a gap.

/// Radius of the second-hand marker dot, in pixels.
pub const SECOND_MARKER_RADIUS: u32 = 2;

/// Gap between the inner border and the second-hand marker, in pixels.
pub const SECOND_MARKER_GAP: i32 = 10;

/// Radius of the minute-hand marker dot, in pixels.
pub const MINUTE_MARKER_RADIUS: u32 = 2;

/// Gap between the inner border and the minute-hand marker, in pixels.
pub const MINUTE_MARKER_GAP: i32 = 5;

/// Radius of the hour-hand marker dot, in pixels.
pub const HOUR_MARKER_RADIUS: u32 = 2;

/// Gap between the outer border and the hour-hand marker, in pixels.
pub const HOUR_MARKER_GAP: i32 = 5;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Interval between event-pump iterations. The face only redraws when the
/// watched time unit (minute, or second when [`SHOW_SECONDS`] is on) changes,
/// so this only bounds how quickly a quit event is noticed.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);
