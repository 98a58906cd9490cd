//! The WS2812 bit encoder: a PIO program fed by DMA from a background task.
//!
//! The program reads a bit count, shifts out exactly that many bits (each one a long or
//! short high pulse, see [`BitTiming`]), then reads a delay count and holds the line low
//! for the reset gap. It then waits for the next frame. See [`Frame`] for the data layout.
//!
//! The task owns the data pin, PIO0 state machine 0 and one DMA channel for as long as
//! the program runs.

use embassy_executor::Spawner;
use embassy_rp::Peri;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::peripherals::{DMA_CH0, PIN_7, PIO0};
use embassy_rp::pio::{Common, Config, Direction, FifoJoin, Pio, ShiftDirection, StateMachine};
use embassy_time::{Duration, Timer};
use fixed::types::U24F8;

use super::bit_timing::BitTiming;
use super::frame::{Frame, RESET_DELAY_TICKS};
use super::transmit::TransmitLink;
use crate::zip96::{ZIP96_LED_COUNT, Zip96Screen};
use crate::{Error, Result};

/// Number of FIFO words in one ZIP96 frame.
pub const ZIP96_FRAME_WORDS: usize = Frame::<ZIP96_LED_COUNT>::WORD_LEN;

static ZIP96_LINK: TransmitLink<ZIP96_LED_COUNT> = TransmitLink::new();

/// Starts the encoder for the ZIP96 screen.
pub struct Ws2812Encoder;

impl Ws2812Encoder {
    /// Load the encoder program on PIO0, spawn its task and return the screen it drives.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskSpawn`] if the encoder is already running.
    pub fn spawn_zip96(
        pin: Peri<'static, PIN_7>,
        pio: Peri<'static, PIO0>,
        dma: Peri<'static, DMA_CH0>,
        spawner: Spawner,
    ) -> Result<Zip96Screen> {
        let Pio { common, sm0, .. } = Pio::new(pio, crate::pio_irqs::Pio0Irqs);
        let token = ws2812_encoder_task(common, sm0, dma, pin, &ZIP96_LINK);
        spawner.spawn(token).map_err(Error::TaskSpawn)?;
        Ok(Zip96Screen::new(&ZIP96_LINK))
    }
}

fn configure_state_machine(
    common: &mut Common<'static, PIO0>,
    sm: &mut StateMachine<'static, PIO0, 0>,
    pin: Peri<'static, PIN_7>,
) {
    let program = pio::pio_asm!(
        ".side_set 1",
        ".wrap_target",
        "    pull block          side 0",
        "    out y, 32           side 0",      // bit count - 1
        "bitloop:",
        "    pull ifempty        side 0",
        "    out x, 1            side 0 [5]",
        "    jmp !x do_zero      side 1 [3]",
        "    jmp y-- bitloop     side 1 [4]",  // "1": stay high
        "    jmp end_sequence    side 0",
        "do_zero:",
        "    jmp y-- bitloop     side 0 [4]",  // "0": drop low
        "end_sequence:",
        "    pull block          side 0",
        "    out y, 32           side 0",      // reset delay
        "wait_reset:",
        "    jmp y-- wait_reset  side 0",
        ".wrap"
    );
    let loaded = common.load_program(&program.program);
    let out_pin = common.make_pio_pin(pin);

    let mut cfg = Config::default();
    cfg.use_program(&loaded, &[&out_pin]);
    cfg.shift_out.auto_fill = false;
    cfg.shift_out.threshold = 32;
    cfg.shift_out.direction = ShiftDirection::Left;
    cfg.fifo_join = FifoJoin::TxOnly;

    let sys_clock_hz = clk_sys_freq();
    let divider_bits = BitTiming::ZIP96.clock_divider_bits(sys_clock_hz);
    cfg.clock_divider = U24F8::from_bits(divider_bits);
    defmt::info!(
        "ws2812 encoder clk={}Hz divider={}/256 tick={}Hz",
        sys_clock_hz,
        divider_bits,
        BitTiming::ZIP96.tick_hz
    );

    sm.set_config(&cfg);
    sm.set_pin_dirs(Direction::Out, &[&out_pin]);
    sm.set_enable(true);
}

#[embassy_executor::task]
async fn ws2812_encoder_task(
    mut common: Common<'static, PIO0>,
    mut sm: StateMachine<'static, PIO0, 0>,
    mut dma: Peri<'static, DMA_CH0>,
    pin: Peri<'static, PIN_7>,
    link: &'static TransmitLink<ZIP96_LED_COUNT>,
) -> ! {
    configure_state_machine(&mut common, &mut sm, pin);

    let timing = BitTiming::ZIP96;
    let word_time = Duration::from_micros(u64::from(timing.word_ns().div_ceil(1_000)));
    let reset_time = Duration::from_micros(u64::from(
        timing.reset_ns(RESET_DELAY_TICKS).div_ceil(1_000),
    ));
    let mut words = [0_u32; ZIP96_FRAME_WORDS];

    loop {
        let frame = link.next_frame().await;
        let written = frame.write_words(&mut words);
        defmt::debug!("ws2812 frame: {} words", written);

        sm.tx().dma_push(dma.reborrow(), &words, false).await;

        // The trailer is the last word, so an empty FIFO means the bits are out
        // and the state machine is counting down the reset gap.
        while !sm.tx().empty() {
            Timer::after(word_time).await;
        }
        Timer::after(reset_time).await;

        link.finish();
    }
}
