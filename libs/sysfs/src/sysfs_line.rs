use embedded_hal::digital::{ErrorType, OutputPin};
use log::{debug, warn};
use sysfs_gpio::{Direction, Pin};

use shiftout_core::Lines;

use crate::errors::SysfsLineError;

/// A GPIO output exported through the Linux sysfs interface.
///
/// The line is exported and switched to an output driven low when opened, and unexported again
/// when dropped.
///
/// # Examples
///
/// ```no_run
/// use embedded_hal::digital::OutputPin;
/// use shiftout_sysfs::SysfsLine;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let mut line = SysfsLine::open(38)?;
/// line.set_high()?;
/// #
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct SysfsLine {
    pin: Pin,
}

impl SysfsLine {
    /// Exports GPIO `number` and configures it as an output, initially low.
    ///
    /// # Errors
    ///
    /// Returns a [`SysfsLineError`] if the GPIO cannot be exported or configured,
    /// typically because it does not exist or the process lacks permission.
    pub fn open(number: u64) -> Result<Self, SysfsLineError> {
        let pin = Pin::new(number);
        let wrap = |source| SysfsLineError { number, source };
        pin.export().map_err(wrap)?;
        pin.set_direction(Direction::Low).map_err(wrap)?;
        debug!("Exported GPIO {} as output", number);
        Ok(SysfsLine { pin })
    }

    /// Returns the kernel GPIO number of this line.
    pub fn number(&self) -> u64 {
        self.pin.get_pin_num()
    }

    fn set_value(&mut self, value: u8) -> Result<(), SysfsLineError> {
        self.pin.set_value(value).map_err(|source| SysfsLineError {
            number: self.pin.get_pin_num(),
            source,
        })
    }
}

impl Drop for SysfsLine {
    fn drop(&mut self) {
        if let Err(e) = self.pin.unexport() {
            warn!("Failed to unexport GPIO {}: {}", self.pin.get_pin_num(), e);
        }
    }
}

impl ErrorType for SysfsLine {
    type Error = SysfsLineError;
}

impl OutputPin for SysfsLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_value(0)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_value(1)
    }
}

/// Kernel GPIO numbers for the lines of a shift register chain.
///
/// # Examples
///
/// ```no_run
/// use shiftout_sysfs::PinNumbers;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let pins = PinNumbers {
///     data: 38,
///     shift_clock: 44,
///     latch_clock: 40,
///     output_enable: Some(276),
///     reset: None,
/// };
/// let lines = pins.open()?;
/// #
/// # Ok(()) }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PinNumbers {
    /// Serial data input.
    pub data: u64,

    /// Shift register clock.
    pub shift_clock: u64,

    /// Storage register (latch) clock.
    pub latch_clock: u64,

    /// Active-low output enable, if connected.
    pub output_enable: Option<u64>,

    /// Active-low shift register clear, if connected.
    pub reset: Option<u64>,
}

impl PinNumbers {
    /// Opens every configured line.
    ///
    /// # Errors
    ///
    /// Returns the first [`SysfsLineError`] encountered. Lines opened before the failure are
    /// unexported again.
    pub fn open(&self) -> Result<Lines<SysfsLine>, SysfsLineError> {
        Ok(Lines {
            data: SysfsLine::open(self.data)?,
            shift_clock: SysfsLine::open(self.shift_clock)?,
            latch_clock: SysfsLine::open(self.latch_clock)?,
            output_enable: self.output_enable.map(SysfsLine::open).transpose()?,
            reset: self.reset.map(SysfsLine::open).transpose()?,
        })
    }
}
