//! A device abstraction for `NeoPixel`-style (WS2812) LED strips, as used by the ZIP96 screen.
//!
//! The pieces, leaf first:
//!
//! - [`Grb8`] and the [`rgb_to_wire`]/[`wire_to_rgb`] pair convert between the API color
//!   order (red, green, blue) and the order WS2812 LEDs expect on the wire (green, red, blue).
//! - [`Frame`](frame::Frame) is one serialized transmission: bit-count header, payload,
//!   padding and reset-delay trailer.
//! - [`BitTiming`](bit_timing::BitTiming) holds the tick counts of the WS2812 encoder program
//!   and derives the PIO clock divider from the system clock.
//! - [`PixelBuffer`](pixel_buffer::PixelBuffer) holds the colors and brightness until
//!   [`LedScreen::show`](pixel_buffer::LedScreen::show) hands a frame to a
//!   [`FrameSink`](transmit::FrameSink).
//! - [`TransmitLink`](transmit::TransmitLink) is the busy guard between the caller and the
//!   encoder task.
//! - With a board feature, `ws2812_pio` runs the encoder program on PIO0.
//!
//! # Example
//!
//! ```
//! use zip96::led_strip::{palette, pixel_buffer::PixelBuffer};
//!
//! let mut pixels = PixelBuffer::<96, 12>::new();
//! pixels.fill(palette::BLUE);
//! pixels.set_led_matrix(3, 2, palette::YELLOW)?;
//! assert_eq!(pixels.get_led(3 + 2 * 12)?, palette::YELLOW);
//! # Ok::<(), zip96::Error>(())
//! ```

use smart_leds::RGB8;

pub mod bit_timing;
pub mod frame;
pub mod pixel_buffer;
pub mod transmit;
#[cfg(feature = "rp")]
pub mod ws2812_pio;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// One LED's color in WS2812 wire order.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Grb8 {
    /// Green channel, sent first.
    pub g: u8,
    /// Red channel.
    pub r: u8,
    /// Blue channel, sent last.
    pub b: u8,
}

impl Grb8 {
    /// All channels off.
    pub const BLACK: Self = Self { g: 0, r: 0, b: 0 };

    /// The three bytes in transmission order.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.g, self.r, self.b]
    }

    /// Scale every channel by `percent` (0..=100).
    #[must_use]
    pub const fn scaled(self, percent: u8) -> Self {
        Self {
            g: scale_channel(self.g, percent),
            r: scale_channel(self.r, percent),
            b: scale_channel(self.b, percent),
        }
    }
}

impl From<Rgb> for Grb8 {
    fn from(color: Rgb) -> Self {
        rgb_to_wire(color)
    }
}

impl From<Grb8> for Rgb {
    fn from(wire: Grb8) -> Self {
        wire_to_rgb(wire)
    }
}

/// Reorder an API color into wire order.
#[must_use]
pub const fn rgb_to_wire(color: Rgb) -> Grb8 {
    Grb8 {
        g: color.g,
        r: color.r,
        b: color.b,
    }
}

/// Reorder a wire-order color back into an API color.
#[must_use]
pub const fn wire_to_rgb(wire: Grb8) -> Rgb {
    Rgb::new(wire.r, wire.g, wire.b)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value * percent / 100 never exceeds 255 when percent <= 100"
)]
const fn scale_channel(value: u8, percent: u8) -> u8 {
    let percent = if percent > 100 { 100 } else { percent };
    (value as u16 * percent as u16 / 100) as u8
}

/// The ZIP96 colour palette.
///
/// These match the board maker's own examples, so `YELLOW` and `PURPLE` differ from the
/// `smart_leds::colors` constants of the same name.
pub mod palette {
    use super::Rgb;

    /// Off.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Red.
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    /// Yellow.
    pub const YELLOW: Rgb = Rgb::new(255, 150, 0);
    /// Green.
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    /// Cyan.
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    /// Blue.
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    /// Purple.
    pub const PURPLE: Rgb = Rgb::new(180, 0, 255);
    /// White.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// All palette entries, in the board maker's order.
    pub const COLORS: [Rgb; 8] = [BLACK, RED, YELLOW, GREEN, CYAN, BLUE, PURPLE, WHITE];
}
