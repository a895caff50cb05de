use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

/// A [`DelayNs`] implementation that blocks the current thread with [`thread::sleep`].
///
/// The sleep may overshoot by the scheduler's granularity but never returns early, which is
/// all the clock pulses need.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ThreadDelay;

impl DelayNs for ThreadDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
