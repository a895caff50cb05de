use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error, ErrorKind, ErrorType, OutputPin};

/// Error reported by a [`MockLine`] once it has run out of successful writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockLineError;

impl Error for MockLineError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Mock output line that accepts a fixed number of writes and then fails.
/// Used to verify that line errors are surfaced with the right line attached.
#[derive(Debug, Clone)]
pub struct MockLine {
    remaining: Option<usize>,
    writes: Rc<Cell<usize>>,
}

impl MockLine {
    pub fn working() -> Self {
        MockLine {
            remaining: None,
            writes: Rc::new(Cell::new(0)),
        }
    }

    pub fn failing_after(writes: usize) -> Self {
        MockLine {
            remaining: Some(writes),
            writes: Rc::new(Cell::new(0)),
        }
    }

    #[allow(dead_code)] // Not used by all tests.
    pub fn writes(&self) -> Rc<Cell<usize>> {
        self.writes.clone()
    }

    fn write(&mut self) -> Result<(), MockLineError> {
        match self.remaining {
            Some(0) => return Err(MockLineError),
            Some(ref mut remaining) => *remaining -= 1,
            None => {}
        }
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl ErrorType for MockLine {
    type Error = MockLineError;
}

impl OutputPin for MockLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write()
    }
}

/// Delay that returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _: u32) {}
}
