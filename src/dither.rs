//! Dither mask compositing for transitioning labels.
//!
//! The mask is a precomputed 50% checkerboard held as a const 1-bit bitmap.
//! Overlaying it AND-combines the mask with pixels already on the surface:
//! wherever the mask is black the destination pixel is forced off, wherever
//! it is set the destination is left alone. Applied over a label's frame this
//! knocks out every other pixel of the glyphs, the half-faded look that marks
//! a label as just vacated or about to become current.

use embedded_graphics::image::{GetPixel, ImageRaw};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};

/// Checkerboard tile, 1 bit per pixel, MSB first, one byte per row.
const PATTERN_DATA: &[u8] = &[0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55];

/// Side length of the checkerboard tile in pixels.
const PATTERN_SIZE: i32 = 8;

fn pattern() -> ImageRaw<'static, BinaryColor> {
    ImageRaw::new(PATTERN_DATA, PATTERN_SIZE as u32)
}

/// AND-composite the dither mask over `frame`, tiling the pattern from the
/// frame's top-left corner. Only clears pixels; never sets any.
pub fn overlay<D>(display: &mut D, frame: Rectangle)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let mask = pattern();
    let cleared = frame
        .points()
        .filter(|p| {
            let local = *p - frame.top_left;
            let tile = Point::new(local.x.rem_euclid(PATTERN_SIZE), local.y.rem_euclid(PATTERN_SIZE));
            mask.pixel(tile) == Some(BinaryColor::Off)
        })
        .map(|p| Pixel(p, BinaryColor::Off));
    display.draw_iter(cleared).ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
