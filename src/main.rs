// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in angle calculations
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Analog watchface simulator.
//!
//! Renders a 144x168 1-bit analog watchface: hour labels around the rim,
//! minute labels halfway in, hand positions as small dots riding the two
//! border circles. Only the labels near the current time are visible; the
//! two labels adjacent to the current one are drawn through a dither mask,
//! signaling the value just passed and the value about to become current.
//!
//! ```text
//!          12
//!    11     0     1
//!        55   5
//!   10  50  .  10  2      . = hand marker dots on the
//!        45  15           border rings
//!    9   40 20    3
//!          ...
//! ```
//!
//! The main loop polls the SDL window for a quit event and snapshots the
//! local wall clock each iteration, redrawing only when the watched time
//! unit changes: once per minute, or once per second when
//! [`config::SHOW_SECONDS`] is enabled. Rendering itself is pure (see
//! [`face::render`]), so skipped iterations lose nothing.

mod config;
mod dither;
mod face;
mod styles;
mod time;

use std::thread;

use chrono::{Local, Timelike};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};

use config::{POLL_INTERVAL, SCREEN_HEIGHT, SCREEN_WIDTH, SHOW_SECONDS};
use time::ClockTime;

fn main() {
    let mut display: SimulatorDisplay<BinaryColor> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledWhite)
        .scale(2)
        .build();
    let mut window = Window::new("Watchface", &output_settings);

    // First frame before the tick loop, as on initial display.
    let mut shown = local_time();
    face::render(&mut display, shown);
    window.update(&display);

    'running: loop {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                _ => {}
            }
        }

        let now = local_time();
        if tick_changed(shown, now) {
            shown = now;
            face::render(&mut display, shown);
        }

        window.update(&display);
        thread::sleep(POLL_INTERVAL);
    }
}

/// Snapshot the local wall clock.
fn local_time() -> ClockTime {
    let now = Local::now();
    ClockTime::new(now.hour(), now.minute(), now.second())
}

/// Whether the watched time unit advanced since the last drawn frame.
/// Per-second when seconds are displayed, per-minute otherwise.
fn tick_changed(prev: ClockTime, now: ClockTime) -> bool {
    if SHOW_SECONDS {
        prev != now
    } else {
        (prev.hours, prev.minutes) != (now.hours, now.minutes)
    }
}
