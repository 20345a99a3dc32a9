//! Time snapshots and label-ring slot arithmetic.
//!
//! Both label rings have twelve slots: the hour ring maps one slot per hour,
//! the minute ring one slot per 5-minute step. The slot under the current
//! time is drawn plain; its two ring neighbors get the dither overlay to
//! signal the value just passed and the value coming up.
//!
//! All slot math reduces modulo [`RING_SLOTS`], so out-of-range time values
//! still produce valid indices (the face just shows a nonsense position
//! instead of aborting).

/// Number of label slots per ring (12 hours, 60 / 5 minute steps).
pub const RING_SLOTS: usize = 12;

/// Minutes between adjacent minute-ring labels.
pub const MINUTE_STEP: u32 = 5;

/// Immutable time snapshot, refreshed once per tick by the host.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClockTime {
    /// Hour of day, 0-23.
    pub hours: u32,
    /// Minute of hour, 0-59.
    pub minutes: u32,
    /// Second of minute, 0-59. Only drawn when seconds are enabled.
    pub seconds: u32,
}

impl ClockTime {
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Hour-ring slot under the current time.
    #[inline]
    pub const fn hour_slot(&self) -> usize {
        (self.hours % RING_SLOTS as u32) as usize
    }

    /// Minute-ring slot nearest the current time, rounding to the closest
    /// 5-minute label: minutes 0-2 map to slot 0, 3-7 to slot 1, and 58-59
    /// wrap around to slot 0. Integer minutes never land exactly halfway
    /// between labels, so no tie-break is involved. Wrapping arithmetic so
    /// malformed minute values reduce to a valid slot instead of panicking
    /// on overflow in debug builds.
    #[inline]
    pub const fn minute_slot(&self) -> usize {
        let doubled = self.minutes.wrapping_mul(2).wrapping_add(MINUTE_STEP);
        ((doubled / (2 * MINUTE_STEP)) % RING_SLOTS as u32) as usize
    }
}

/// The two ring slots adjacent to `slot`, as `(previous, next)`, wrapping at
/// the ring boundary.
#[inline]
pub const fn neighbor_slots(slot: usize) -> (usize, usize) {
    ((slot + RING_SLOTS - 1) % RING_SLOTS, (slot + 1) % RING_SLOTS)
}

// =============================================================================
// Unit Tests
// =============================================================================
