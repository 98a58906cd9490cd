//! The serialized form of one WS2812 transmission.
//!
//! A frame is what the encoder program in [`ws2812_pio`](super) consumes, in this order:
//!
//! | part    | size                        | content                                   |
//! |---------|-----------------------------|-------------------------------------------|
//! | header  | 4 bytes, big-endian         | number of payload bits minus one          |
//! | payload | 3 bytes per LED             | green, red, blue, brightness already applied |
//! | padding | 0..=3 zero bytes            | aligns the payload to 4 bytes             |
//! | trailer | 4 bytes, big-endian         | [`RESET_DELAY_TICKS`]                     |
//!
//! The state machine shifts its input left (most significant bit first), 32 bits at a time.
//! [`Frame::words`] therefore packs each group of four wire bytes big-endian into one `u32`,
//! so no byte swap is needed between memory and the PIO FIFO.
//!
//! ```
//! use zip96::led_strip::{Grb8, frame::Frame};
//!
//! let frame = Frame::new([Grb8 { g: 1, r: 2, b: 3 }], 100);
//! assert_eq!(Frame::<1>::HEADER, 23);
//! assert_eq!(
//!     frame.words().collect::<Vec<_>>(),
//!     [23, 0x0102_0300, 3840]
//! );
//! ```

use core::iter;

use itertools::Itertools;

use super::Grb8;

/// Reset-gap length in encoder ticks sent as the frame trailer.
///
/// At 12.8 MHz this holds the data line low for 300 µs, above the 280 µs
/// WS2812 reset time.
pub const RESET_DELAY_TICKS: u32 = 3840;

/// One complete, brightness-scaled WS2812 transmission for `N` LEDs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame<const N: usize> {
    pixels: [Grb8; N],
}

impl<const N: usize> Frame<N> {
    /// Number of payload bytes (3 per LED).
    pub const PAYLOAD_LEN: usize = N * 3;

    /// Number of payload bits the encoder emits.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "checked by the assert above the cast"
    )]
    pub const BIT_COUNT: u32 = {
        assert!(N > 0, "a frame needs at least one LED");
        assert!(N * 24 <= u32::MAX as usize, "too many LEDs for one frame");
        (N * 24) as u32
    };

    /// Header word: the encoder loop runs `HEADER + 1` times.
    pub const HEADER: u32 = Self::BIT_COUNT - 1;

    /// Trailer word: reset delay in encoder ticks.
    pub const TRAILER: u32 = RESET_DELAY_TICKS;

    /// Zero bytes appended so the payload ends on a 4-byte boundary.
    pub const PADDING_LEN: usize = (4 - Self::PAYLOAD_LEN % 4) % 4;

    /// Total frame length in bytes.
    pub const BYTE_LEN: usize = 4 + Self::PAYLOAD_LEN + Self::PADDING_LEN + 4;

    /// Total frame length in 32-bit words.
    pub const WORD_LEN: usize = Self::BYTE_LEN / 4;

    /// Build a frame from wire-order pixels, scaling every channel by `brightness_percent`.
    ///
    /// Percentages above 100 are treated as 100.
    #[must_use]
    pub fn new(pixels: [Grb8; N], brightness_percent: u8) -> Self {
        Self {
            pixels: pixels.map(|pixel| pixel.scaled(brightness_percent)),
        }
    }

    /// The scaled pixels, in wire order.
    #[must_use]
    pub const fn pixels(&self) -> &[Grb8; N] {
        &self.pixels
    }

    /// The payload bytes (green, red, blue per LED), without header, padding or trailer.
    pub fn payload(&self) -> impl Iterator<Item = u8> + '_ {
        self.pixels.iter().flat_map(|pixel| pixel.to_bytes())
    }

    /// The whole frame as it appears on the wire, byte by byte.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        Self::HEADER
            .to_be_bytes()
            .into_iter()
            .chain(self.payload())
            .chain(iter::repeat_n(0, Self::PADDING_LEN))
            .chain(Self::TRAILER.to_be_bytes())
    }

    /// The whole frame as the 32-bit words pushed into the state machine FIFO.
    pub fn words(&self) -> impl Iterator<Item = u32> + '_ {
        self.bytes()
            .tuples()
            .map(|(byte0, byte1, byte2, byte3)| u32::from_be_bytes([byte0, byte1, byte2, byte3]))
    }

    /// Copy [`words`](Self::words) into `out`, returning how many were written.
    ///
    /// Writes stop early if `out` is shorter than [`WORD_LEN`](Self::WORD_LEN).
    pub fn write_words(&self, out: &mut [u32]) -> usize {
        for (slot, word) in out.iter_mut().zip(self.words()) {
            *slot = word;
        }
        out.len().min(Self::WORD_LEN)
    }
}
