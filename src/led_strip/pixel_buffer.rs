//! The in-memory LED colors and brightness, and the screen that shows them.
//!
//! [`PixelBuffer`] changes are invisible until [`LedScreen::show`] serializes the buffer
//! into a [`Frame`] and hands it to a [`FrameSink`].
//!
//! For custom graphics, the buffer is an `embedded-graphics`
//! [`DrawTarget`](embedded_graphics::draw_target::DrawTarget) over `W` columns and
//! `N / W` rows.
//!
//! ```
//! use embedded_graphics::{
//!     pixelcolor::Rgb888,
//!     prelude::*,
//!     primitives::{Line, PrimitiveStyle},
//! };
//! use zip96::led_strip::{palette, pixel_buffer::PixelBuffer};
//!
//! let mut pixels = PixelBuffer::<96, 12>::new();
//! Line::new(Point::new(0, 0), Point::new(11, 7))
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb888::RED, 1))
//!     .draw(&mut pixels)
//!     .unwrap();
//! assert_eq!(pixels.get_led(0)?, palette::RED);
//! assert_eq!(pixels.get_led(95)?, palette::RED);
//! # Ok::<(), zip96::Error>(())
//! ```

use core::convert::Infallible;
use core::ops::{Deref, DerefMut};

use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::{Rgb888, RgbColor},
};

use super::frame::Frame;
use super::palette;
use super::transmit::{FrameSink, TransmitState};
use super::{Grb8, Rgb, rgb_to_wire, wire_to_rgb};
use crate::{Error, Result};

/// Brightness (percent) of a newly created buffer.
pub const BRIGHTNESS_DEFAULT: u8 = 20;

/// Colors of `N` LEDs laid out in rows of `W`, plus one global brightness.
///
/// Colors are stored in wire order; brightness is only applied when a [`Frame`] is built,
/// so [`get_led`](Self::get_led) returns exactly what was set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PixelBuffer<const N: usize, const W: usize> {
    pixels: [Grb8; N],
    brightness: u8,
}

impl<const N: usize, const W: usize> PixelBuffer<N, W> {
    /// Number of LEDs.
    pub const LEN: usize = N;
    /// LEDs per row.
    pub const WIDTH: usize = W;
    /// Number of full rows.
    pub const HEIGHT: usize = N / W;

    /// Create an all-black buffer at [`BRIGHTNESS_DEFAULT`].
    #[must_use]
    pub const fn new() -> Self {
        const { assert!(W > 0, "row width must be positive") };
        Self {
            pixels: [Grb8::BLACK; N],
            brightness: BRIGHTNESS_DEFAULT,
        }
    }

    /// Set the color of one LED. Takes effect on the next show.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLedIndex`] if `index >= N`; the buffer is unchanged.
    pub fn set_led(&mut self, index: usize, color: Rgb) -> Result<()> {
        *self.slot_mut(index)? = rgb_to_wire(color);
        Ok(())
    }

    /// The last color set for one LED, which is not necessarily what is displayed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLedIndex`] if `index >= N`.
    pub fn get_led(&self, index: usize) -> Result<Rgb> {
        self.pixels
            .get(index)
            .copied()
            .map(wire_to_rgb)
            .ok_or_else(|| Error::invalid_led_index(index, N))
    }

    /// Turn one LED off.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLedIndex`] if `index >= N`.
    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.set_led(index, palette::BLACK)
    }

    /// Set every LED to the same color.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels = [rgb_to_wire(color); N];
    }

    /// Set the LED at column `x`, row `y`, i.e. index `x + y * W`.
    ///
    /// Only the resulting index is checked, so an `x` outside the row wraps into a
    /// neighboring row (for example `(12, 0)` is the same LED as `(0, 1)` on a 12-wide
    /// buffer).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLedIndex`] if `x + y * W` is negative or `>= N`.
    pub fn set_led_matrix(&mut self, x: i32, y: i32, color: Rgb) -> Result<()> {
        let width = i64::try_from(W).unwrap_or(i64::MAX);
        let index = i64::from(x).saturating_add(i64::from(y).saturating_mul(width));
        let index = usize::try_from(index).map_err(|_| Error::InvalidLedIndex { index, len: N })?;
        self.set_led(index, color)
    }

    /// Set the brightness in percent, clamped to `0..=100`. Takes effect on the next show.
    pub fn set_brightness(&mut self, percent: i32) {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped to 0..=100 first"
        )]
        let percent = percent.clamp(0, 100) as u8;
        self.brightness = percent;
    }

    /// Brightness in percent (`0..=100`).
    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Serialize the buffer, with brightness applied, into a frame.
    #[must_use]
    pub fn to_frame(&self) -> Frame<N> {
        Frame::new(self.pixels, self.brightness)
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Grb8> {
        self.pixels
            .get_mut(index)
            .ok_or_else(|| Error::invalid_led_index(index, N))
    }
}

impl<const N: usize, const W: usize> Default for PixelBuffer<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const W: usize> OriginDimensions for PixelBuffer<N, W> {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "LED panels are far smaller than u32::MAX"
    )]
    fn size(&self) -> Size {
        Size::new(W as u32, Self::HEIGHT as u32)
    }
}

impl<const N: usize, const W: usize> DrawTarget for PixelBuffer<N, W> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            // Unlike set_led_matrix, drawing clips instead of wrapping.
            let (Ok(x_index), Ok(y_index)) = (usize::try_from(coord.x), usize::try_from(coord.y))
            else {
                continue;
            };
            if x_index >= W || y_index >= Self::HEIGHT {
                continue;
            }
            let slot = y_index
                .checked_mul(W)
                .and_then(|row_start| row_start.checked_add(x_index))
                .and_then(|index| self.pixels.get_mut(index));
            if let Some(slot) = slot {
                *slot = rgb_to_wire(Rgb::new(color.r(), color.g(), color.b()));
            }
        }
        Ok(())
    }
}

/// A [`PixelBuffer`] bound to the transmitter that shows it.
///
/// Derefs to the buffer, so `set_led`, `fill` and friends are available directly.
pub struct LedScreen<S, const N: usize, const W: usize> {
    pixels: PixelBuffer<N, W>,
    sink: S,
}

impl<S: FrameSink<N>, const N: usize, const W: usize> LedScreen<S, N, W> {
    /// Create a screen with an all-black buffer at [`BRIGHTNESS_DEFAULT`].
    #[must_use]
    pub const fn new(sink: S) -> Self {
        Self {
            pixels: PixelBuffer::new(),
            sink,
        }
    }

    /// Start transmitting the current buffer and return without waiting.
    ///
    /// The frame is copied, so the buffer may be changed again right away.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] if the previous frame is still being transmitted.
    pub fn show(&self) -> Result<()> {
        self.sink.try_send(self.pixels.to_frame())
    }

    /// Wait for any frame in flight, show the buffer, and wait for it to be displayed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] only if some other caller started a frame in between.
    pub async fn show_and_wait(&self) -> Result<()> {
        self.sink.wait_until_ready().await;
        self.show()?;
        self.sink.wait_until_ready().await;
        Ok(())
    }

    /// Whether a frame is still being transmitted.
    pub fn is_busy(&self) -> bool {
        self.sink.is_busy()
    }

    /// Current transmitter state.
    pub fn state(&self) -> TransmitState {
        self.sink.state()
    }

    /// Wait until the previous frame has been fully transmitted.
    pub async fn wait_until_ready(&self) {
        self.sink.wait_until_ready().await;
    }
}

impl<S, const N: usize, const W: usize> Deref for LedScreen<S, N, W> {
    type Target = PixelBuffer<N, W>;

    fn deref(&self) -> &Self::Target {
        &self.pixels
    }
}

impl<S, const N: usize, const W: usize> DerefMut for LedScreen<S, N, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.pixels
    }
}
