//! Tools for testing and debugging shift register chains without hardware.
//!
//! For the basic task of driving outputs, you likely want to use the high-level API
//! in the [`shiftout`] crate instead.
//!
//! This crate isn't directly related to controlling real chips, but provides a [`VirtualChain`]
//! that simulates one or more cascaded 74HC595s. Its [`VirtualLine`]s and [`VirtualDelay`] implement
//! the [`embedded-hal`] traits, so they can be handed to any driver in place of real pins.
//!
//! # Examples
//!
//! ```
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use shiftout_testing::{Pin, VirtualChain};
//!
//! let chain = VirtualChain::new(16);
//! let mut latch = chain.line(Pin::LatchClock);
//! let mut delay = chain.delay();
//!
//! latch.set_high().unwrap();
//! delay.delay_us(2);
//! latch.set_low().unwrap();
//!
//! assert_eq!(1, chain.latch_pulses());
//! assert_eq!(vec![false; 16], chain.outputs());
//! ```
//!
//! [`shiftout`]: https://docs.rs/shiftout
//! [`embedded-hal`]: https://docs.rs/embedded-hal
#![doc(html_root_url = "https://docs.rs/shiftout-testing/0.1.0")]
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

mod virtual_chain;

pub use self::virtual_chain::{Pin, VirtualChain, VirtualDelay, VirtualLine};
