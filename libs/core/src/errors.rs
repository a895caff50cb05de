use std::fmt::{self, Debug, Display, Formatter};

use thiserror::Error;

/// One of the GPIO lines connected to the chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Line {
    /// Serial data input (SER/DS).
    Data,

    /// Shift register clock (SRCLK/SHCP).
    ShiftClock,

    /// Storage register clock, a.k.a. latch (RCLK/STCP).
    LatchClock,

    /// Active-low output enable (OE).
    OutputEnable,

    /// Active-low shift register clear (SRCLR/MR).
    Reset,
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Line::Data => "data",
            Line::ShiftClock => "shift clock",
            Line::LatchClock => "latch clock",
            Line::OutputEnable => "output enable",
            Line::Reset => "reset",
        };
        write!(f, "{}", name)
    }
}

/// Errors that can occur while clocking data into the chain.
///
/// `E` is the error type of the underlying [`OutputPin`](embedded_hal::digital::OutputPin)
/// implementation; use [`Infallible`](core::convert::Infallible) pins and it can never be constructed
/// except for [`WrongFrameLength`](Self::WrongFrameLength).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShiftError<E: Debug> {
    /// Setting the level of one of the lines failed.
    #[error("Failed to drive the {line} line: {cause:?}")]
    Line {
        /// The line that could not be driven.
        line: Line,

        /// The error reported by the pin.
        cause: E,
    },

    /// An explicit frame did not contain exactly one bit per output.
    #[error("Frame length didn't match the chain: Expected {expected} bits, got {actual}")]
    WrongFrameLength {
        /// The chain length in outputs.
        expected: usize,

        /// The number of bits supplied.
        actual: usize,
    },
}

/// Error returned when a [`ChainLength`](crate::ChainLength) would not describe whole registers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChainLengthError {
    /// Output count was zero or not a multiple of 8.
    #[error("Chain length must be a non-zero multiple of 8 outputs, got {outputs}")]
    Invalid {
        /// The rejected number of outputs.
        outputs: usize,
    },

    /// Register count whose output count does not fit in a `usize`.
    #[error("Too many registers for one chain: {registers}")]
    TooManyRegisters {
        /// The rejected number of registers.
        registers: usize,
    },
}
