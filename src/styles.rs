//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyleBuilder` are const fn in embedded-graphics
//! 0.8, so the label style and alignment are computed at compile time and
//! shared by every label draw instead of being rebuilt each frame.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

use crate::config::FOREGROUND;

/// Centered on the anchor point both horizontally and vertically. Label
/// anchor points are ring positions, so the glyphs center on them.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Foreground label text. ProFont 14pt (10x18 glyphs) fits two digits inside
/// the 20x20 label frame.
pub const LABEL_STYLE: MonoTextStyle<'static, BinaryColor> =
    MonoTextStyle::new(&PROFONT_14_POINT, FOREGROUND);
