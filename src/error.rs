use core::fmt;


/// Result type specific to this harness
pub type Result<T = ()> = core::result::Result<T, Error>;


/// Error type specific to this harness
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The formatted report did not fit its buffer. The truncated text
    /// was still transmitted.
    BufferOverflow,
    /// A test table with no vectors, or a score over zero tests.
    EmptyTestSet,
    Transmit(TransmitError),
    /// `finish` was called before the last vector was accumulated.
    NotDrained,
}

/// Failure to hand a buffer to the transmission channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransmitError {
    /// A previous transfer has not completed yet.
    Busy,
    /// The payload is larger than the transfer buffer.
    TooLong,
}

impl From<TransmitError> for Error {
    fn from(err: TransmitError) -> Self {
        Self::Transmit(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BufferOverflow => f.write_str("report buffer overflow"),
            Error::EmptyTestSet => f.write_str("empty test set"),
            Error::Transmit(TransmitError::Busy) => f.write_str("transmit channel busy"),
            Error::Transmit(TransmitError::TooLong) => f.write_str("transmit payload too long"),
            Error::NotDrained => f.write_str("test run not finished"),
        }
    }
}
