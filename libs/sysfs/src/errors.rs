use embedded_hal::digital::{Error, ErrorKind};
use thiserror::Error;

/// Errors related to [`SysfsLine`](crate::SysfsLine)s.
#[derive(Debug, Error)]
#[error("Failed to access GPIO {number} through sysfs")]
pub struct SysfsLineError {
    /// The kernel GPIO number of the line.
    pub number: u64,

    /// The underlying sysfs error.
    #[source]
    pub source: sysfs_gpio::Error,
}

impl Error for SysfsLineError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}
