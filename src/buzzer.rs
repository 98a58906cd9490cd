//! A device abstraction for the ZIP96 piezo buzzer, driven by one PWM channel.
//!
//! The tone math ([`clamp_tone_hz`], [`ToneTiming`]) is hardware independent. With a
//! board feature, [`Buzzer`] applies it to a PWM slice.

/// Lowest tone the buzzer plays; lower requests are raised to this.
pub const TONE_MIN_HZ: u32 = 30;

/// Highest tone the buzzer plays; higher requests are lowered to this.
pub const TONE_MAX_HZ: u32 = 3_000;

/// Clamp a requested frequency to [`TONE_MIN_HZ`]`..=`[`TONE_MAX_HZ`].
///
/// ```
/// use zip96::buzzer::clamp_tone_hz;
///
/// assert_eq!(clamp_tone_hz(20), 30);
/// assert_eq!(clamp_tone_hz(500), 500);
/// assert_eq!(clamp_tone_hz(5_000), 3_000);
/// ```
#[must_use]
pub const fn clamp_tone_hz(freq_hz: u32) -> u32 {
    if freq_hz < TONE_MIN_HZ {
        TONE_MIN_HZ
    } else if freq_hz > TONE_MAX_HZ {
        TONE_MAX_HZ
    } else {
        freq_hz
    }
}

/// Integer PWM divider and wrap value for a square wave.
///
/// The slice counts `0..=top` once per period (edge aligned), each count lasting
/// `divider` system clock cycles.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ToneTiming {
    /// Integer clock divider, `1..=255`.
    pub divider: u8,
    /// Counter wrap value.
    pub top: u16,
}

impl ToneTiming {
    /// The smallest divider whose wrap value fits in 16 bits, and the wrap value for it.
    ///
    /// `freq_hz` is clamped with [`clamp_tone_hz`] first.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "both values are clamped to their register width"
    )]
    pub const fn new(sys_clock_hz: u32, freq_hz: u32) -> Self {
        let freq_hz = clamp_tone_hz(freq_hz) as u64;
        let sys_clock_hz = sys_clock_hz as u64;
        // freq_hz is at least TONE_MIN_HZ here, so the divisor is never zero.
        let counts_per_divider = freq_hz.saturating_mul(1 << 16);
        let divider = sys_clock_hz.div_ceil(counts_per_divider);
        let divider = if divider < 1 {
            1
        } else if divider > 255 {
            255
        } else {
            divider
        };
        let counts = match sys_clock_hz.checked_div(divider.saturating_mul(freq_hz)) {
            Some(counts) => counts,
            None => 0,
        };
        let top = counts.saturating_sub(1);
        let top = if top > u16::MAX as u64 {
            u16::MAX as u64
        } else {
            top
        };
        Self {
            divider: divider as u8,
            top: top as u16,
        }
    }

    /// Compare value for a 50% duty cycle, i.e. half of the `top + 1` counts.
    #[must_use]
    pub const fn half_duty(&self) -> u16 {
        self.top.div_ceil(2)
    }

    /// The frequency these settings actually produce at `sys_clock_hz`.
    ///
    /// A zero divider produces nothing and gives 0.
    #[must_use]
    pub const fn frequency_hz(&self, sys_clock_hz: u32) -> u32 {
        let counts = (self.divider as u32).saturating_mul((self.top as u32).saturating_add(1));
        match sys_clock_hz.checked_div(counts) {
            Some(freq_hz) => freq_hz,
            None => 0,
        }
    }
}

#[cfg(feature = "rp")]
pub use self::hardware::Buzzer;

#[cfg(feature = "rp")]
mod hardware {
    use defmt::info;
    use embassy_rp::clocks::clk_sys_freq;
    use embassy_rp::pwm::{Config, Pwm};
    use embassy_time::{Duration, Timer};

    use super::{ToneTiming, clamp_tone_hz};

    /// A piezo buzzer on one PWM channel.
    ///
    /// On the ZIP96 this is GPIO 5, PWM slice 2, channel B; [`Zip96`](crate::zip96::Zip96)
    /// wires it up.
    ///
    /// ```rust,no_run
    /// # #![no_std]
    /// # #![no_main]
    /// use embassy_rp::pwm::{Config, Pwm};
    /// use embassy_time::Duration;
    /// use zip96::buzzer::Buzzer;
    /// # #[panic_handler]
    /// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
    ///
    /// async fn example(p: embassy_rp::Peripherals) {
    ///     let pwm = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_5, Config::default());
    ///     let mut buzzer = Buzzer::new_output_b(pwm);
    ///     buzzer.play_tone_for(500, Duration::from_millis(200)).await;
    /// }
    /// ```
    pub struct Buzzer<'d> {
        pwm: Pwm<'d>,
        cfg: Config,
        channel: BuzzerChannel,
    }

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    enum BuzzerChannel {
        A,
        B,
    }

    impl<'d> Buzzer<'d> {
        /// Create a silent buzzer on a PWM output A channel.
        #[must_use]
        pub fn new_output_a(pwm: Pwm<'d>) -> Self {
            Self::init(pwm, BuzzerChannel::A)
        }

        /// Create a silent buzzer on a PWM output B channel.
        #[must_use]
        pub fn new_output_b(pwm: Pwm<'d>) -> Self {
            Self::init(pwm, BuzzerChannel::B)
        }

        fn init(pwm: Pwm<'d>, channel: BuzzerChannel) -> Self {
            let mut buzzer = Self {
                pwm,
                cfg: Config::default(),
                channel,
            };
            buzzer.stop_tone();
            buzzer
        }

        /// Start a square wave at `freq_hz` (clamped to 30..=3000 Hz), 50% duty.
        ///
        /// Keeps playing until [`stop_tone`](Self::stop_tone) or the next tone.
        pub fn play_tone(&mut self, freq_hz: u32) {
            let sys_clock_hz = clk_sys_freq();
            let timing = ToneTiming::new(sys_clock_hz, freq_hz);
            self.cfg.top = timing.top;
            self.cfg.phase_correct = false;
            self.cfg.divider = timing.divider.into();
            self.set_compare(timing.half_duty());
            self.cfg.enable = true;
            self.pwm.set_config(&self.cfg);
            info!(
                "buzzer {}Hz (asked {}Hz) div={} top={}",
                timing.frequency_hz(sys_clock_hz),
                clamp_tone_hz(freq_hz),
                timing.divider,
                timing.top
            );
        }

        /// Silence the buzzer (duty 0). The divider and wrap value are kept.
        pub fn stop_tone(&mut self) {
            self.set_compare(0);
            self.pwm.set_config(&self.cfg);
        }

        /// Play `freq_hz` for `duration`, then stop.
        pub async fn play_tone_for(&mut self, freq_hz: u32, duration: Duration) {
            self.play_tone(freq_hz);
            Timer::after(duration).await;
            self.stop_tone();
        }

        fn set_compare(&mut self, compare: u16) {
            match self.channel {
                BuzzerChannel::A => self.cfg.compare_a = compare,
                BuzzerChannel::B => self.cfg.compare_b = compare,
            }
        }
    }
}
