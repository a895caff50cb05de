//! A library for driving daisy-chained 74HC595 shift registers over GPIO.
//!
//! Provides a way to connect to a chain of one or more registers, turn individual outputs on and off
//! while the others keep their state, write whole bytes or explicit frames, and play simple
//! animations. Lines and delays are abstracted with the [`embedded-hal`] 1.0 traits, so the
//! driver works with any HAL's output pins.
//!
//! Tested with the SN74HC595N. Should work with any 8-bit serial-in/parallel-out register with a
//! separate storage clock, but no guarantees.
//!
//! # Examples
//!
//! ```no_run
//! use shiftout::{ChainLength, PinNumbers, ShiftOut, ThreadDelay};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! #
//! // Export the GPIOs wired to the chain.
//! let pins = PinNumbers {
//!     data: 38,
//!     shift_clock: 44,
//!     latch_clock: 40,
//!     output_enable: Some(276),
//!     reset: None,
//! };
//!
//! // Two cascaded registers. All outputs are turned off on creation.
//! let mut register = ShiftOut::new(pins.open()?, ThreadDelay, ChainLength::new(2)?)?;
//!
//! // Turn on single outputs; the others keep their state.
//! register.write_bit_at_pos(3, true)?;
//! register.write_bit_at_pos(12, true)?;
//!
//! // Replace everything with a fixed pattern.
//! register.write_word(0x30F0)?;
//!
//! // Play the built-in demonstration on the first eight outputs.
//! register.animation_example()?;
//! #
//! # Ok(()) }
//! ```
//!
//! # Sub-crates
//!
//! In addition to the high-level API of [`ShiftOut`], several lower-level components are provided
//! that can be combined for more specialized use-cases.
//!
//! - [`shiftout-core`] \(re-exported as `core`\) contains the [`Serializer`](crate::core::Serializer) that clocks
//!   raw frames into the chain, and is useful if you want to stream frames without any state tracking.
//! - [`shiftout-sysfs`] \(re-exported as `sysfs`\) contains GPIO lines and a delay for Linux hosts.
//! - [`shiftout-testing`] contains a simulated chain, useful for testing without hardware.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`shiftout-core`]: https://docs.rs/shiftout-core
//! [`shiftout-sysfs`]: https://docs.rs/shiftout-sysfs
//! [`shiftout-testing`]: https://docs.rs/shiftout-testing
#![doc(html_root_url = "https://docs.rs/shiftout/0.1.0")]
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

pub use shiftout_core as core;
pub use shiftout_sysfs as sysfs;

pub mod animation;
mod shift_out;

pub use self::animation::Frame;
pub use self::shift_out::{CacheState, ShiftOut};

pub use crate::core::{ChainLength, Line, Lines, ShiftError, Timing};
pub use crate::sysfs::{PinNumbers, SysfsLine, ThreadDelay};
