//! A device abstraction for the ZIP96 vibration motor.
//!
//! The motor sits behind a transistor on one GPIO: high runs it, low stops it.

use embassy_rp::Peri;
use embassy_rp::gpio::{Level, Output, Pin};
use embassy_time::{Duration, Timer};

/// A vibration motor switched by one push-pull output.
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use embassy_time::Duration;
/// use zip96::vibration::VibrationMotor;
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// async fn example(p: embassy_rp::Peripherals) {
///     let mut motor = VibrationMotor::new(p.PIN_4);
///     motor.pulse(Duration::from_millis(150)).await;
/// }
/// ```
pub struct VibrationMotor<'d> {
    output: Output<'d>,
}

impl<'d> VibrationMotor<'d> {
    /// Create a stopped motor on `pin`.
    #[must_use]
    pub fn new<P: Pin>(pin: Peri<'d, P>) -> Self {
        Self {
            output: Output::new(pin, Level::Low),
        }
    }

    /// Start vibrating until [`stop`](Self::stop).
    pub fn vibrate(&mut self) {
        self.output.set_high();
    }

    /// Stop vibrating.
    pub fn stop(&mut self) {
        self.output.set_low();
    }

    /// Whether the motor is currently driven.
    #[must_use]
    pub fn is_vibrating(&self) -> bool {
        self.output.is_set_high()
    }

    /// Vibrate for `duration`, then stop.
    pub async fn pulse(&mut self, duration: Duration) {
        self.vibrate();
        Timer::after(duration).await;
        self.stop();
    }
}
