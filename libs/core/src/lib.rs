//! Core types for clocking data into daisy-chained 74HC595 shift registers.
//!
//! For the basic task of driving outputs, you likely want to use the high-level API
//! in the [`shiftout`] crate instead, which remembers the state of every output.
//!
//! However, `shiftout_core` is useful for crates that want to stream raw frames into a chain
//! without any state tracking, or that want to build their own driver on top of the
//! [`Serializer`].
//!
//! Lines and delays are abstracted with the [`embedded-hal`] 1.0 traits, so any HAL's output pins
//! (or the virtual ones from [`shiftout-testing`]) can be used.
//!
//! # Examples
//!
//! ```
//! use shiftout_core::{ChainLength, Lines, Serializer};
//! use shiftout_testing::{Pin, VirtualChain};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! #
//! // Two cascaded registers.
//! let chain = VirtualChain::new(16);
//! let lines = Lines::new(chain.line(Pin::Data), chain.line(Pin::ShiftClock), chain.line(Pin::LatchClock));
//! let mut serializer = Serializer::new(lines, chain.delay(), ChainLength::new(2)?);
//!
//! // Shift 16 bits and latch them.
//! let mut frame = [false; 16];
//! frame[15] = true;
//! serializer.write_frame(&frame)?;
//! assert!(chain.output(0));
//! #
//! # Ok(()) }
//! ```
//!
//! [`shiftout`]: https://docs.rs/shiftout
//! [`shiftout-testing`]: https://docs.rs/shiftout-testing
//! [`embedded-hal`]: https://docs.rs/embedded-hal
#![doc(html_root_url = "https://docs.rs/shiftout-core/0.1.0")]
#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![warn(
    missing_docs,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

mod chain;
mod errors;
mod lines;
mod serializer;
mod timing;

pub use self::chain::{ChainLength, OUTPUTS_PER_REGISTER};
pub use self::errors::{ChainLengthError, Line, ShiftError};
pub use self::lines::Lines;
pub use self::serializer::{Bits, Serializer};
pub use self::timing::{Timing, MIN_PULSE_WIDTH_US};
