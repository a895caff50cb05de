//! Linux sysfs GPIO backend for driving shift register chains.
//!
//! For the basic task of driving outputs, you likely want to use the high-level API
//! in the [`shiftout`] crate instead, which re-exports this crate as `shiftout::sysfs`.
//!
//! [`SysfsLine`] implements the [`embedded-hal`] `OutputPin` trait on top of `/sys/class/gpio`,
//! [`ThreadDelay`] implements `DelayNs` with `thread::sleep`, and [`PinNumbers`] opens a complete set
//! of lines in one go.
//!
//! # Examples
//!
//! ```no_run
//! use shiftout_core::{ChainLength, Serializer};
//! use shiftout_sysfs::{PinNumbers, ThreadDelay};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! #
//! let pins = PinNumbers {
//!     data: 45,
//!     shift_clock: 39,
//!     latch_clock: 37,
//!     output_enable: Some(277),
//!     reset: None,
//! };
//! let mut serializer = Serializer::new(pins.open()?, ThreadDelay, ChainLength::new(2)?);
//! serializer.write_frame(&[true; 16])?;
//! #
//! # Ok(()) }
//! ```
//!
//! [`shiftout`]: https://docs.rs/shiftout
//! [`embedded-hal`]: https://docs.rs/embedded-hal
#![doc(html_root_url = "https://docs.rs/shiftout-sysfs/0.1.0")]
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

mod errors;
mod sysfs_line;
mod thread_delay;

pub use self::errors::SysfsLineError;
pub use self::sysfs_line::{PinNumbers, SysfsLine};
pub use self::thread_delay::ThreadDelay;
