//! The watchface renderer.
//!
//! [`render`] produces one complete frame from a [`ClockTime`] snapshot:
//! background fill, the two label rings with dither overlays on the slots
//! adjacent to the current one, the optional border circles, and the hand
//! marker dots. It is a pure function of the time snapshot and the target's
//! bounds, so rendering the same inputs twice yields identical pixels.
//!
//! Angle convention: 0 points at 12 o'clock and positive angles sweep
//! clockwise, with `x = cx + sin(a) * len`, `y = cy - cos(a) * len`.

use std::f32::consts::TAU;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::config::{
    BACKGROUND, FOREGROUND, HOUR_MARKER_GAP, HOUR_MARKER_RADIUS, HOUR_TEXT_RADIUS_MULT,
    INNER_BORDER_WIDTH, INNER_RADIUS_MULT, MINUTE_MARKER_GAP, MINUTE_MARKER_RADIUS,
    MINUTE_TEXT_RADIUS_MULT, OUTER_BORDER_WIDTH, OUTER_RADIUS_MULT, SECOND_MARKER_GAP,
    SECOND_MARKER_RADIUS, SHOW_BORDERS, SHOW_SECONDS, TEXT_FRAME_HEIGHT, TEXT_FRAME_WIDTH,
};
use crate::dither;
use crate::styles::{CENTERED, LABEL_STYLE};
use crate::time::{ClockTime, RING_SLOTS, neighbor_slots};

/// Hour ring labels, slot 0 at 12 o'clock.
const HOUR_LABELS: [&str; RING_SLOTS] =
    ["12", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"];

/// Minute ring labels in 5-minute steps, slot 0 at 12 o'clock.
const MINUTE_LABELS: [&str; RING_SLOTS] =
    ["0", "5", "10", "15", "20", "25", "30", "35", "40", "45", "50", "55"];

const BORDER_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(FOREGROUND, 1);
const MARKER_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(FOREGROUND);

/// Size of the frame each ring label is centered in.
const TEXT_FRAME_SIZE: Size = Size::new(TEXT_FRAME_WIDTH, TEXT_FRAME_HEIGHT);

/// Draw one complete watchface frame for `time` onto `display`.
///
/// Out-of-range time values degrade to a nonsense hand position rather than
/// a panic: slot indices reduce modulo the ring size and angles wrap through
/// the trigonometry.
pub fn render<D>(display: &mut D, time: ClockTime)
where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BACKGROUND).ok();

    let bounds = display.bounding_box();
    let center = bounds.center();
    let radius = (bounds.size.width.min(bounds.size.height) / 2) as i32;
    if radius == 0 {
        return;
    }

    // Label rings: hour labels near the rim, minute labels halfway in.
    draw_label_ring(
        display,
        center,
        scaled(radius, HOUR_TEXT_RADIUS_MULT),
        &HOUR_LABELS,
        time.hour_slot(),
    );
    draw_label_ring(
        display,
        center,
        scaled(radius, MINUTE_TEXT_RADIUS_MULT),
        &MINUTE_LABELS,
        time.minute_slot(),
    );

    let outer_radius = scaled(radius, OUTER_RADIUS_MULT);
    let inner_radius = scaled(radius, INNER_RADIUS_MULT);

    if SHOW_BORDERS {
        draw_ring(display, center, outer_radius);
        draw_ring(display, center, inner_radius);
    }

    if SHOW_SECONDS {
        let length = inner_radius - INNER_BORDER_WIDTH - SECOND_MARKER_GAP;
        let angle = ring_angle(time.seconds, 60);
        draw_marker(display, polar(center, angle, length), SECOND_MARKER_RADIUS);
    }

    // Minute hand rides inside the inner ring, hour hand inside the outer.
    let minute_length = inner_radius - INNER_BORDER_WIDTH - MINUTE_MARKER_GAP;
    let minute_angle = ring_angle(time.minutes, 60);
    draw_marker(display, polar(center, minute_angle, minute_length), MINUTE_MARKER_RADIUS);

    // Integer hour only: the hour hand jumps on the hour instead of gliding.
    let hour_length = outer_radius - OUTER_BORDER_WIDTH - HOUR_MARKER_GAP;
    let hour_angle = ring_angle(time.hours, 12);
    draw_marker(display, polar(center, hour_angle, hour_length), HOUR_MARKER_RADIUS);
}

/// Draw the visible slots of one label ring: the current slot plain, its two
/// neighbors with the dither mask composited over their frames.
fn draw_label_ring<D>(
    display: &mut D,
    center: Point,
    ring_radius: i32,
    labels: &[&str; RING_SLOTS],
    current: usize,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let (prev, next) = neighbor_slots(current);

    for (i, label) in labels.iter().enumerate() {
        if i != current && i != prev && i != next {
            continue;
        }

        let anchor = polar(center, ring_angle(i as u32, RING_SLOTS as u32), ring_radius);
        Text::with_text_style(label, anchor, LABEL_STYLE, CENTERED)
            .draw(display)
            .ok();

        if i != current {
            dither::overlay(display, Rectangle::with_center(anchor, TEXT_FRAME_SIZE));
        }
    }
}

fn draw_ring<D>(display: &mut D, center: Point, ring_radius: i32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    Circle::with_center(center, diameter(ring_radius.max(0) as u32))
        .into_styled(BORDER_STYLE)
        .draw(display)
        .ok();
}

fn draw_marker<D>(display: &mut D, at: Point, marker_radius: u32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    Circle::with_center(at, diameter(marker_radius))
        .into_styled(MARKER_STYLE)
        .draw(display)
        .ok();
}

/// Angle of slot `index` on a ring of `count` slots, clockwise from 12
/// o'clock. Indices past `count` wrap naturally through sin/cos.
#[inline]
fn ring_angle(index: u32, count: u32) -> f32 {
    TAU * index as f32 / count as f32
}

/// Point at `length` pixels from `center` along `angle`.
#[inline]
fn polar(center: Point, angle: f32, length: i32) -> Point {
    let len = length as f32;
    Point::new(
        center.x + (angle.sin() * len) as i32,
        center.y - (angle.cos() * len) as i32,
    )
}

/// Ring radius scaled by a face-geometry multiplier, truncated to pixels.
#[inline]
fn scaled(radius: i32, mult: f32) -> i32 {
    (radius as f32 * mult) as i32
}

/// Diameter of a circle drawn with `Circle::with_center` that covers
/// `radius` pixels on each side of the center pixel.
#[inline]
const fn diameter(radius: u32) -> u32 {
    2 * radius + 1
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;

    /// MockDisplay is 64x64, so the face radius in these tests is 32 and the
    /// hour label frames poke past the top edge; overdraw happens wherever
    /// the dither mask and hand markers revisit label pixels.
    fn test_display() -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    // -------------------------------------------------------------------------
    // Geometry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_polar_points_up_at_angle_zero() {
        let center = Point::new(32, 32);
        assert_eq!(polar(center, 0.0, 10), Point::new(32, 22), "angle 0 should point at 12 o'clock");
    }

    #[test]
    fn test_polar_sweeps_clockwise() {
        let center = Point::new(32, 32);
        // Quarter turn lands due east, half turn due south.
        assert_eq!(polar(center, ring_angle(3, 12), 10), Point::new(42, 32));
        assert_eq!(polar(center, ring_angle(6, 12), 10), Point::new(32, 42));
        assert_eq!(polar(center, ring_angle(9, 12), 10), Point::new(22, 32));
    }

    #[test]
    fn test_ring_angle_wraps_past_full_turn() {
        // 15 hours and 3 hours land the hand in the same place.
        let center = Point::new(32, 32);
        assert_eq!(
            polar(center, ring_angle(15, 12), 10),
            polar(center, ring_angle(3, 12), 10),
            "hand angle should wrap each 12 hours"
        );
    }

    // -------------------------------------------------------------------------
    // Render Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_render_is_idempotent() {
        let time = ClockTime::new(3, 27, 0);

        let mut first = test_display();
        render(&mut first, time);
        let mut second = test_display();
        render(&mut second, time);

        assert_eq!(first, second, "same time and bounds should yield identical pixels");
    }

    #[test]
    fn test_render_fills_background() {
        let mut display = test_display();
        render(&mut display, ClockTime::new(3, 27, 0));

        assert_eq!(
            display.get_pixel(Point::zero()),
            Some(BinaryColor::Off),
            "corner should hold the background fill"
        );
    }

    #[test]
    fn test_hour_marker_due_east_at_three() {
        // The 64x64 bounding box centers on (31,31). Face radius 32: outer
        // ring 25, hour marker length 25 - 1 - 5 = 19, so the dot centers
        // on (31 + 19, 31).
        let mut display = test_display();
        render(&mut display, ClockTime::new(3, 27, 0));

        assert_eq!(
            display.get_pixel(Point::new(50, 31)),
            Some(BinaryColor::On),
            "hour marker at 3 o'clock should sit due east of center"
        );
    }

    #[test]
    fn test_border_circles_drawn() {
        // At 3:27 no highlighted label frame reaches the top of the face,
        // so the topmost ring pixels are the border strokes alone. With the
        // center at (31,31) the outer ring (radius 25) crosses the
        // 12 o'clock axis at y=6 and the inner ring (radius 12) at y=19.
        let mut display = test_display();
        render(&mut display, ClockTime::new(3, 27, 0));

        assert_eq!(
            display.get_pixel(Point::new(31, 6)),
            Some(BinaryColor::On),
            "outer border should cross the 12 o'clock axis"
        );
        assert_eq!(
            display.get_pixel(Point::new(31, 19)),
            Some(BinaryColor::On),
            "inner border should cross the 12 o'clock axis"
        );
    }

    #[test]
    fn test_render_survives_out_of_range_time() {
        let mut display = test_display();
        render(&mut display, ClockTime::new(99, 99, 99));
    }
}
