//! PIO interrupt bindings shared by the PIO-driven devices.

use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::InterruptHandler;

bind_interrupts!(
    /// Interrupt binding for `PIO0`, used by the ZIP96 screen encoder.
    pub struct Pio0Irqs {
        PIO0_IRQ_0 => InterruptHandler<PIO0>;
    }
);
