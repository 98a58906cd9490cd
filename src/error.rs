use derive_more::{Display, Error as DeriveError};

/// Errors returned by the ZIP96 device abstractions.
#[derive(Debug, Display, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// An LED index (or the linear index derived from a matrix coordinate) is
    /// outside `0..len`.
    #[display("invalid LED index {index} (valid range is 0..{len})")]
    InvalidLedIndex {
        /// The rejected index.
        index: i64,
        /// Number of LEDs in the buffer.
        len: usize,
    },

    /// A frame was shown while the previous one was still being transmitted.
    #[display("LED frame still transmitting")]
    Busy,

    /// A background task could not be spawned (its pool is already in use).
    #[cfg(feature = "rp")]
    #[display("task spawn failed: {_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),
}

impl Error {
    pub(crate) fn invalid_led_index(index: usize, len: usize) -> Self {
        Self::InvalidLedIndex {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
