//! The ZIP96 board: its fixed pin assignment and the aggregate of all its devices.
//!
//! [`PinMap::ZIP96`] lists the GPIO numbers. With a board feature, [`Zip96Pins`] takes the
//! matching typed peripherals out of [`embassy_rp::Peripherals`] and [`Zip96::new`]
//! turns them into devices.

use crate::led_strip::pixel_buffer::PixelBuffer;

/// Number of LEDs on the screen.
pub const ZIP96_LED_COUNT: usize = 96;

/// LEDs per screen row.
pub const ZIP96_ROW_WIDTH: usize = 12;

/// Number of screen rows.
pub const ZIP96_ROWS: usize = ZIP96_LED_COUNT / ZIP96_ROW_WIDTH;

/// A pixel buffer shaped like the ZIP96 screen.
pub type Zip96PixelBuffer = PixelBuffer<ZIP96_LED_COUNT, ZIP96_ROW_WIDTH>;

/// GPIO numbers of every device on a board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PinMap {
    /// Up button.
    pub up: u8,
    /// Down button.
    pub down: u8,
    /// Left button.
    pub left: u8,
    /// Right button.
    pub right: u8,
    /// A button.
    pub a: u8,
    /// B button.
    pub b: u8,
    /// Piezo buzzer (PWM).
    pub buzzer: u8,
    /// Vibration motor.
    pub vibrate: u8,
    /// WS2812 data line of the screen.
    pub screen: u8,
}

impl PinMap {
    /// The ZIP96 wiring.
    pub const ZIP96: Self = Self {
        up: 14,
        down: 12,
        left: 13,
        right: 15,
        a: 1,
        b: 2,
        buzzer: 5,
        vibrate: 4,
        screen: 7,
    };

    /// PWM slice driving GPIO `pin` (two pins per slice, eight slices).
    #[must_use]
    pub const fn pwm_slice(pin: u8) -> u8 {
        (pin / 2) % 8
    }

    /// Whether GPIO `pin` is the B output of its PWM slice.
    #[must_use]
    pub const fn is_pwm_channel_b(pin: u8) -> bool {
        pin % 2 == 1
    }
}

#[cfg(feature = "rp")]
pub use self::hardware::{Zip96, Zip96Pins, Zip96Screen};

#[cfg(feature = "rp")]
mod hardware {
    use embassy_executor::Spawner;
    use embassy_rp::Peri;
    use embassy_rp::peripherals::{
        DMA_CH0, PIN_1, PIN_2, PIN_4, PIN_5, PIN_7, PIN_12, PIN_13, PIN_14, PIN_15, PIO0,
        PWM_SLICE2,
    };
    use embassy_rp::pwm::{Config, Pwm};

    use super::{ZIP96_LED_COUNT, ZIP96_ROW_WIDTH};
    use crate::Result;
    use crate::button::Button;
    use crate::buzzer::Buzzer;
    use crate::led_strip::pixel_buffer::LedScreen;
    use crate::led_strip::transmit::TransmitLink;
    use crate::led_strip::ws2812_pio::Ws2812Encoder;
    use crate::vibration::VibrationMotor;

    /// The ZIP96 screen: a 12x8 pixel buffer bound to the WS2812 encoder task.
    pub type Zip96Screen =
        LedScreen<&'static TransmitLink<ZIP96_LED_COUNT>, ZIP96_LED_COUNT, ZIP96_ROW_WIDTH>;

    /// The peripherals the ZIP96 uses, one typed field per role.
    ///
    /// The types pin down the wiring in [`PinMap::ZIP96`](super::PinMap::ZIP96), so a
    /// board with different wiring needs a different struct, not different numbers.
    pub struct Zip96Pins {
        /// Up button, GPIO 14.
        pub up: Peri<'static, PIN_14>,
        /// Down button, GPIO 12.
        pub down: Peri<'static, PIN_12>,
        /// Left button, GPIO 13.
        pub left: Peri<'static, PIN_13>,
        /// Right button, GPIO 15.
        pub right: Peri<'static, PIN_15>,
        /// A button, GPIO 1.
        pub a: Peri<'static, PIN_1>,
        /// B button, GPIO 2.
        pub b: Peri<'static, PIN_2>,
        /// Buzzer, GPIO 5.
        pub buzzer: Peri<'static, PIN_5>,
        /// PWM slice of the buzzer pin.
        pub buzzer_slice: Peri<'static, PWM_SLICE2>,
        /// Vibration motor, GPIO 4.
        pub vibrate: Peri<'static, PIN_4>,
        /// Screen data line, GPIO 7.
        pub screen: Peri<'static, PIN_7>,
        /// PIO block running the WS2812 encoder.
        pub screen_pio: Peri<'static, PIO0>,
        /// DMA channel feeding the encoder.
        pub screen_dma: Peri<'static, DMA_CH0>,
    }

    impl Zip96Pins {
        /// Take the ZIP96 peripherals. The rest of `p` is dropped.
        #[must_use]
        pub fn from_peripherals(p: embassy_rp::Peripherals) -> Self {
            Self {
                up: p.PIN_14,
                down: p.PIN_12,
                left: p.PIN_13,
                right: p.PIN_15,
                a: p.PIN_1,
                b: p.PIN_2,
                buzzer: p.PIN_5,
                buzzer_slice: p.PWM_SLICE2,
                vibrate: p.PIN_4,
                screen: p.PIN_7,
                screen_pio: p.PIO0,
                screen_dma: p.DMA_CH0,
            }
        }
    }

    /// Every device on the ZIP96, ready to use.
    ///
    /// ```rust,no_run
    /// # #![no_std]
    /// # #![no_main]
    /// use embassy_executor::Spawner;
    /// use zip96::led_strip::palette;
    /// use zip96::zip96::{Zip96, Zip96Pins};
    /// # #[panic_handler]
    /// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
    ///
    /// async fn example(spawner: Spawner) -> zip96::Result<()> {
    ///     let p = embassy_rp::init(Default::default());
    ///     let mut zip96 = Zip96::new(Zip96Pins::from_peripherals(p), spawner)?;
    ///     zip96.screen.set_led_matrix(5, 3, palette::CYAN)?;
    ///     zip96.screen.show_and_wait().await
    /// }
    /// ```
    pub struct Zip96 {
        /// Up button.
        pub up: Button<'static>,
        /// Down button.
        pub down: Button<'static>,
        /// Left button.
        pub left: Button<'static>,
        /// Right button.
        pub right: Button<'static>,
        /// A button.
        pub a: Button<'static>,
        /// B button.
        pub b: Button<'static>,
        /// The 12x8 LED screen.
        pub screen: Zip96Screen,
        /// The piezo buzzer.
        pub buzzer: Buzzer<'static>,
        /// The vibration motor.
        pub vibrate: VibrationMotor<'static>,
    }

    impl Zip96 {
        /// Configure every device and start the screen's encoder task.
        ///
        /// The screen starts all black at 20% brightness. Nothing is shown until the
        /// first [`show`](crate::led_strip::pixel_buffer::LedScreen::show).
        ///
        /// # Errors
        ///
        /// Returns [`Error::TaskSpawn`](crate::Error::TaskSpawn) if a `Zip96` was
        /// already created.
        pub fn new(pins: Zip96Pins, spawner: Spawner) -> Result<Self> {
            let screen =
                Ws2812Encoder::spawn_zip96(pins.screen, pins.screen_pio, pins.screen_dma, spawner)?;
            let buzzer_pwm = Pwm::new_output_b(pins.buzzer_slice, pins.buzzer, Config::default());
            defmt::info!("zip96 ready");
            Ok(Self {
                up: Button::new(pins.up),
                down: Button::new(pins.down),
                left: Button::new(pins.left),
                right: Button::new(pins.right),
                a: Button::new(pins.a),
                b: Button::new(pins.b),
                screen,
                buzzer: Buzzer::new_output_b(buzzer_pwm),
                vibrate: VibrationMotor::new(pins.vibrate),
            })
        }
    }
}
