use std::fmt::{self, Display, Formatter};

use crate::errors::ChainLengthError;

/// Number of parallel outputs on a single 74HC595.
pub const OUTPUTS_PER_REGISTER: usize = 8;

/// The number of outputs in a chain of cascaded shift registers.
///
/// Always a non-zero multiple of [`OUTPUTS_PER_REGISTER`], since every chip in the chain
/// contributes a full byte. Defaults to a single register.
///
/// # Examples
///
/// ```
/// use shiftout_core::ChainLength;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let chain = ChainLength::new(3)?;
/// assert_eq!(24, chain.outputs());
/// assert_eq!(chain, ChainLength::from_outputs(24)?);
///
/// assert!(ChainLength::from_outputs(12).is_err());
/// #
/// # Ok(()) }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainLength(usize);

impl ChainLength {
    /// Creates a `ChainLength` for the given number of cascaded registers.
    ///
    /// # Errors
    ///
    /// Returns [`ChainLengthError::Invalid`] if `registers` is zero, or
    /// [`ChainLengthError::TooManyRegisters`] if the output count would overflow.
    pub fn new(registers: usize) -> Result<Self, ChainLengthError> {
        registers
            .checked_mul(OUTPUTS_PER_REGISTER)
            .ok_or(ChainLengthError::TooManyRegisters { registers })
            .and_then(Self::from_outputs)
    }

    /// Creates a `ChainLength` from a total number of outputs.
    ///
    /// # Errors
    ///
    /// Returns [`ChainLengthError::Invalid`] unless `outputs` is a non-zero multiple of 8.
    pub fn from_outputs(outputs: usize) -> Result<Self, ChainLengthError> {
        if outputs == 0 || outputs % OUTPUTS_PER_REGISTER != 0 {
            return Err(ChainLengthError::Invalid { outputs });
        }
        Ok(ChainLength(outputs))
    }

    /// Returns the total number of outputs, i.e. the number of bits in a full frame.
    pub fn outputs(self) -> usize {
        self.0
    }

    /// Returns the number of cascaded registers.
    pub fn registers(self) -> usize {
        self.0 / OUTPUTS_PER_REGISTER
    }
}

impl Default for ChainLength {
    fn default() -> Self {
        ChainLength(OUTPUTS_PER_REGISTER)
    }
}

impl Display for ChainLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} outputs ({} registers)", self.outputs(), self.registers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1, 8 ; "single register")]
    #[test_case(2, 16 ; "two registers")]
    #[test_case(8, 64 ; "eight registers")]
    fn from_registers(registers: usize, outputs: usize) {
        let chain = ChainLength::new(registers).unwrap();
        assert_eq!(outputs, chain.outputs());
        assert_eq!(registers, chain.registers());
    }

    #[test_case(0 ; "empty")]
    #[test_case(7 ; "short")]
    #[test_case(12 ; "partial register")]
    fn invalid_outputs(outputs: usize) {
        assert_eq!(
            Err(ChainLengthError::Invalid { outputs }),
            ChainLength::from_outputs(outputs)
        );
    }

    #[test]
    fn zero_registers() {
        assert_eq!(Err(ChainLengthError::Invalid { outputs: 0 }), ChainLength::new(0));
    }

    #[test]
    fn too_many_registers() {
        assert_eq!(
            Err(ChainLengthError::TooManyRegisters { registers: usize::MAX }),
            ChainLength::new(usize::MAX)
        );
        let registers = usize::MAX / OUTPUTS_PER_REGISTER + 1;
        assert_eq!(Err(ChainLengthError::TooManyRegisters { registers }), ChainLength::new(registers));
    }

    #[test]
    fn default_is_one_register() {
        assert_eq!(8, ChainLength::default().outputs());
        assert_eq!("16 outputs (2 registers)", ChainLength::new(2).unwrap().to_string());
    }
}
