#![allow(missing_docs)]
//! Host-level tests for the busy guard between the screen and the encoder task.

use embassy_futures::block_on;
use zip96::Error;
use zip96::led_strip::palette;
use zip96::led_strip::pixel_buffer::LedScreen;
use zip96::led_strip::transmit::{FrameSink, TransmitLink, TransmitState};

type TestScreen<'a> = LedScreen<&'a TransmitLink<4>, 4, 2>;

#[test]
fn new_link_is_idle() {
    let link = TransmitLink::<4>::new();

    assert_eq!(link.state(), TransmitState::Idle);
    assert!(!link.is_busy());
}

#[test]
fn show_starts_transmitting() {
    let link = TransmitLink::<4>::new();
    let screen = TestScreen::new(&link);

    screen.show().unwrap();

    assert_eq!(screen.state(), TransmitState::Transmitting);
    assert!(screen.is_busy());
}

#[test]
fn second_show_is_busy() {
    let link = TransmitLink::<4>::new();
    let screen = TestScreen::new(&link);

    screen.show().unwrap();

    assert!(matches!(screen.show(), Err(Error::Busy)));
    assert_eq!(screen.state(), TransmitState::Transmitting);
}

#[test]
fn finish_returns_to_idle() {
    let link = TransmitLink::<4>::new();
    let mut screen = TestScreen::new(&link);
    screen.fill(palette::RED);

    screen.show().unwrap();
    let frame = block_on(link.next_frame());
    link.finish();

    assert_eq!(frame, screen.to_frame());
    assert_eq!(screen.state(), TransmitState::Idle);
    screen.show().unwrap();
}

#[test]
fn busy_show_does_not_replace_frame_in_flight() {
    let link = TransmitLink::<4>::new();
    let mut screen = TestScreen::new(&link);

    screen.fill(palette::RED);
    screen.show().unwrap();
    let first = screen.to_frame();

    screen.fill(palette::BLUE);
    assert!(matches!(screen.show(), Err(Error::Busy)));

    assert_eq!(block_on(link.next_frame()), first);
}

#[test]
fn shown_frame_is_a_copy() {
    let link = TransmitLink::<4>::new();
    let mut screen = TestScreen::new(&link);
    screen.set_brightness(100);
    screen.set_led(0, palette::WHITE).unwrap();

    screen.show().unwrap();
    screen.clear(0).unwrap();
    let frame = block_on(link.next_frame());

    assert_eq!(frame.payload().take(3).collect::<Vec<_>>(), [255, 255, 255]);
}

#[test]
fn wait_until_ready_returns_when_idle() {
    let link = TransmitLink::<4>::new();
    let screen = TestScreen::new(&link);

    block_on(screen.wait_until_ready());

    screen.show().unwrap();
    let _frame = block_on(link.next_frame());
    link.finish();
    block_on(screen.wait_until_ready());
    assert!(!screen.is_busy());
}

#[test]
fn stale_ready_signal_does_not_end_next_wait() {
    let link = TransmitLink::<4>::new();

    // A finish with nothing in flight leaves a pending ready signal behind.
    link.finish();
    link.try_send(zip96::led_strip::pixel_buffer::PixelBuffer::<4, 2>::new().to_frame())
        .unwrap();

    assert!(link.is_busy());
    let _frame = block_on(link.next_frame());
    link.finish();
    block_on(link.wait_until_ready());
    assert_eq!(link.state(), TransmitState::Idle);
}

/// A sink that finishes every frame immediately, like an encoder with infinite speed.
struct InstantSink {
    sent: core::cell::Cell<usize>,
}

impl FrameSink<4> for InstantSink {
    fn try_send(&self, _frame: zip96::led_strip::frame::Frame<4>) -> zip96::Result<()> {
        self.sent.set(self.sent.get() + 1);
        Ok(())
    }

    fn state(&self) -> TransmitState {
        TransmitState::Idle
    }

    async fn wait_until_ready(&self) {}
}

#[test]
fn show_and_wait_sends_once() {
    let sink = InstantSink {
        sent: core::cell::Cell::new(0),
    };
    let screen = LedScreen::<_, 4, 2>::new(&sink);

    block_on(screen.show_and_wait()).unwrap();
    block_on(screen.show_and_wait()).unwrap();

    assert_eq!(sink.sent.get(), 2);
    assert!(!screen.is_busy());
}
