//! A device abstraction for the ZIP96 buttons.
//!
//! See [`Button`] for usage example.

use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Pin, Pull};

/// A push button that connects its pin to 3.3V when pressed.
///
/// The pin uses the internal pull-down, so it reads high only while the button is held.
/// Readings are not debounced.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use zip96::button::Button;
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// async fn example(p: embassy_rp::Peripherals) {
///     let mut a = Button::new(p.PIN_1);
///
///     // Poll.
///     if a.is_pressed() {
///         // ...
///     }
///
///     // Or wait.
///     a.wait_for_press().await;
///     a.wait_for_release().await;
/// }
/// ```
pub struct Button<'a> {
    input: Input<'a>,
}

impl<'a> Button<'a> {
    /// Creates a new `Button` on `pin` with the internal pull-down enabled.
    #[must_use]
    pub fn new<P: Pin>(pin: Peri<'a, P>) -> Self {
        Self {
            input: Input::new(pin, Pull::Down),
        }
    }

    /// Returns whether the button is currently pressed (pin high).
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.input.is_high()
    }

    /// Waits for the next press, i.e. the next rising edge.
    ///
    /// A button that is already held does not count; it has to be released first.
    pub async fn wait_for_press(&mut self) {
        self.input.wait_for_rising_edge().await;
    }

    /// Waits until the button is released. Returns at once if it is not pressed.
    pub async fn wait_for_release(&mut self) {
        self.input.wait_for_low().await;
    }
}
