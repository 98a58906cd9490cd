//! Device abstractions for the Kitronik ZIP96 retro gamer (a Raspberry Pi Pico carrier).
//!
//! The board has a 12x8 matrix of 96 WS2812 (`NeoPixel`) LEDs, six buttons
//! (Up, Down, Left, Right, A, B), a piezo buzzer and a vibration motor.
//! With a board feature enabled, [`zip96::Zip96`] binds all of them to their fixed pins.
//!
//! Without a board feature only the hardware-independent pieces are built: the
//! [`PixelBuffer`](led_strip::pixel_buffer::PixelBuffer), the WS2812
//! [`Frame`](led_strip::frame::Frame) encoding, the bit and tone timing math and the
//! numeric pin map. The host tests use that configuration.
//!
//! # Glossary
//!
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):**
//!   runs the WS2812 bit encoder program. The ZIP96 screen uses PIO0, state machine 0.
//! - **DMA ([Direct Memory Access](https://en.wikipedia.org/wiki/Direct_memory_access)):**
//!   feeds frames to the PIO in the background. The screen uses `DMA_CH0`.
//! - **PWM ([Pulse Width Modulation](https://en.wikipedia.org/wiki/Pulse-width_modulation)) Slices:**
//!   the buzzer uses slice 2, channel B (GPIO 5).
//! - **Wire order:** WS2812 LEDs expect green, red, blue. The API takes red, green, blue.
#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

#[cfg(all(feature = "rp", not(any(feature = "pico1", feature = "pico2"))))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "rp", not(feature = "arm")))]
compile_error!("The ZIP96 board support requires the 'arm' feature");

#[cfg(feature = "rp")]
pub mod button;
pub mod buzzer;
mod error;
pub mod led_strip;
#[cfg(feature = "rp")]
#[doc(hidden)]
pub mod pio_irqs;
#[cfg(feature = "rp")]
pub mod vibration;
pub mod zip96;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
