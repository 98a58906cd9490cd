//! Hand-off between the code that shows frames and the task that transmits them.
//!
//! Transmission runs in the background, so the link keeps an explicit
//! [`TransmitState`]. [`TransmitLink::try_send`] only accepts a frame while the state is
//! [`Idle`](TransmitState::Idle); a second frame sent while one is in flight is rejected
//! with [`Error::Busy`] instead of racing the first one.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicBool, Ordering};

use super::frame::Frame;
use crate::{Error, Result};

/// Whether a frame is on its way to the LEDs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransmitState {
    /// Ready to accept a frame.
    Idle,
    /// A frame was accepted and the reset gap after it has not elapsed yet.
    Transmitting,
}

/// Something that accepts frames for transmission.
///
/// Implemented by [`TransmitLink`] (and references to it). Tests can supply their own.
pub trait FrameSink<const N: usize> {
    /// Start transmitting `frame` without waiting for it to finish.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] if the previous frame is still being transmitted; the new
    /// frame is dropped.
    fn try_send(&self, frame: Frame<N>) -> Result<()>;

    /// Current state of the transmitter.
    fn state(&self) -> TransmitState;

    /// Wait until the transmitter is [`Idle`](TransmitState::Idle).
    async fn wait_until_ready(&self);

    /// Whether a frame is still being transmitted.
    fn is_busy(&self) -> bool {
        self.state() == TransmitState::Transmitting
    }
}

impl<T: FrameSink<N>, const N: usize> FrameSink<N> for &T {
    fn try_send(&self, frame: Frame<N>) -> Result<()> {
        (**self).try_send(frame)
    }

    fn state(&self) -> TransmitState {
        (**self).state()
    }

    async fn wait_until_ready(&self) {
        (**self).wait_until_ready().await;
    }
}

/// Shared state between a screen and its encoder task.
///
/// Usually lives in a `static`; the encoder side calls [`next_frame`](Self::next_frame)
/// and [`finish`](Self::finish).
pub struct TransmitLink<const N: usize> {
    frame_signal: Signal<CriticalSectionRawMutex, Frame<N>>,
    ready_signal: Signal<CriticalSectionRawMutex, ()>,
    transmitting: AtomicBool,
}

impl<const N: usize> TransmitLink<N> {
    /// Creates an idle link.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frame_signal: Signal::new(),
            ready_signal: Signal::new(),
            transmitting: AtomicBool::new(false),
        }
    }

    /// Encoder side: wait for the next accepted frame.
    pub async fn next_frame(&self) -> Frame<N> {
        self.frame_signal.wait().await
    }

    /// Encoder side: the frame is on the LEDs and the reset gap has elapsed.
    pub fn finish(&self) {
        self.transmitting.store(false, Ordering::Release);
        self.ready_signal.signal(());
    }
}

impl<const N: usize> Default for TransmitLink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameSink<N> for TransmitLink<N> {
    fn try_send(&self, frame: Frame<N>) -> Result<()> {
        self.transmitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::Busy)?;
        self.ready_signal.reset();
        self.frame_signal.signal(frame);
        Ok(())
    }

    fn state(&self) -> TransmitState {
        if self.transmitting.load(Ordering::Acquire) {
            TransmitState::Transmitting
        } else {
            TransmitState::Idle
        }
    }

    async fn wait_until_ready(&self) {
        while self.is_busy() {
            self.ready_signal.wait().await;
        }
    }
}
