//! Tick counts of the WS2812 encoder program and the clock math that goes with them.
//!
//! The encoder program (see `ws2812_pio`) spends 16 state-machine ticks on every bit:
//!
//! ```text
//! bitloop:  pull ifempty   low   1 tick
//!           out x, 1       low   6 ticks
//!           jmp !x         high  4 ticks
//! "1":      jmp y--        high  5 ticks   -> 9 high, 7 low
//! "0":      jmp y--        low   5 ticks   -> 4 high, 12 low
//! ```
//!
//! The state machine clock is divided down from the system clock so that 16 ticks
//! take 1.25 µs whatever the system clock is.

/// WS2812 data sheet timing, all in nanoseconds.
pub mod ws2812 {
    /// Nominal high time of a "1" bit.
    pub const T1H_NS: u32 = 800;
    /// Nominal high time of a "0" bit.
    pub const T0H_NS: u32 = 400;
    /// Allowed deviation of the high times.
    pub const HIGH_TOLERANCE_NS: u32 = 150;
    /// Nominal bit period.
    pub const PERIOD_NS: u32 = 1_250;
    /// Allowed deviation of the bit period.
    pub const PERIOD_TOLERANCE_NS: u32 = 300;
    /// Minimum low time that latches the data.
    pub const RESET_MIN_NS: u32 = 280_000;
}

/// Timing of one encoded bit, in state-machine ticks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BitTiming {
    /// State-machine tick rate.
    pub tick_hz: u32,
    /// Ticks spent on every bit.
    pub ticks_per_bit: u32,
    /// Ticks the line is high for a "1".
    pub one_high_ticks: u32,
    /// Ticks the line is high for a "0".
    pub zero_high_ticks: u32,
}

impl BitTiming {
    /// The timing of the ZIP96 encoder program.
    pub const ZIP96: Self = Self {
        tick_hz: 12_800_000,
        ticks_per_bit: 16,
        one_high_ticks: 9,
        zero_high_ticks: 4,
    };

    /// Convert a tick count to nanoseconds (rounded down).
    ///
    /// Saturates at `u32::MAX`, which is also the result for a zero tick rate.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "clamped to u32::MAX first"
    )]
    pub const fn ticks_to_ns(&self, ticks: u32) -> u32 {
        let scaled = (ticks as u64).saturating_mul(1_000_000_000);
        let ns = match scaled.checked_div(self.tick_hz as u64) {
            Some(ns) => ns,
            None => u64::MAX,
        };
        if ns > u32::MAX as u64 {
            u32::MAX
        } else {
            ns as u32
        }
    }

    /// High time of a "1" bit.
    #[must_use]
    pub const fn one_high_ns(&self) -> u32 {
        self.ticks_to_ns(self.one_high_ticks)
    }

    /// High time of a "0" bit.
    #[must_use]
    pub const fn zero_high_ns(&self) -> u32 {
        self.ticks_to_ns(self.zero_high_ticks)
    }

    /// Length of one bit.
    #[must_use]
    pub const fn period_ns(&self) -> u32 {
        self.ticks_to_ns(self.ticks_per_bit)
    }

    /// Time to shift out one 32-bit FIFO word.
    #[must_use]
    pub const fn word_ns(&self) -> u32 {
        self.ticks_to_ns(self.ticks_per_bit.saturating_mul(32))
    }

    /// Length of the reset gap produced by a trailer of `reset_ticks`.
    #[must_use]
    pub const fn reset_ns(&self, reset_ticks: u32) -> u32 {
        self.ticks_to_ns(reset_ticks)
    }

    /// Whether the high times and bit period are within the WS2812 tolerances.
    #[must_use]
    pub const fn meets_ws2812_tolerances(&self) -> bool {
        within(self.one_high_ns(), ws2812::T1H_NS, ws2812::HIGH_TOLERANCE_NS)
            && within(self.zero_high_ns(), ws2812::T0H_NS, ws2812::HIGH_TOLERANCE_NS)
            && within(self.period_ns(), ws2812::PERIOD_NS, ws2812::PERIOD_TOLERANCE_NS)
    }

    /// PIO clock divider for `sys_clock_hz`, as the raw bits of a 24.8 fixed-point number.
    ///
    /// The result is rounded to the nearest 1/256 and clamped to the range the PIO
    /// accepts (1.0 up to 65535.0). A zero tick rate gives the slowest divider.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "clamped to the PIO divider range first"
    )]
    pub const fn clock_divider_bits(&self, sys_clock_hz: u32) -> u32 {
        const MIN_BITS: u64 = 1 << 8;
        const MAX_BITS: u64 = 0xFFFF << 8;
        let tick_hz = self.tick_hz as u64;
        let rounded = (sys_clock_hz as u64)
            .saturating_mul(256)
            .saturating_add(tick_hz / 2);
        let bits = match rounded.checked_div(tick_hz) {
            Some(bits) => bits,
            None => MAX_BITS,
        };
        let bits = if bits < MIN_BITS {
            MIN_BITS
        } else if bits > MAX_BITS {
            MAX_BITS
        } else {
            bits
        };
        bits as u32
    }
}

const fn within(actual: u32, nominal: u32, tolerance: u32) -> bool {
    actual.abs_diff(nominal) <= tolerance
}
