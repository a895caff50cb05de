/// Minimum clock pulse width in microseconds.
///
/// The 74HC595 itself needs well under a microsecond at any supply voltage; this is the
/// lower bound for every pulse this crate produces.
pub const MIN_PULSE_WIDTH_US: u32 = 2;

/// Timing parameters for the clock pulses.
///
/// # Examples
///
/// ```
/// use shiftout_core::Timing;
///
/// assert_eq!(2, Timing::default().pulse_width_us());
/// assert_eq!(10, Timing::with_pulse_width(10).pulse_width_us());
///
/// // Shorter pulses than the minimum are never produced.
/// assert_eq!(2, Timing::with_pulse_width(0).pulse_width_us());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Timing {
    pulse_width_us: u32,
}

impl Timing {
    /// Creates a `Timing` that holds each clock pulse high for `pulse_width_us`,
    /// clamped to at least [`MIN_PULSE_WIDTH_US`].
    pub fn with_pulse_width(pulse_width_us: u32) -> Self {
        Timing {
            pulse_width_us: pulse_width_us.max(MIN_PULSE_WIDTH_US),
        }
    }

    /// Returns how long each clock pulse is held high, in microseconds.
    pub fn pulse_width_us(&self) -> u32 {
        self.pulse_width_us
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            pulse_width_us: MIN_PULSE_WIDTH_US,
        }
    }
}
