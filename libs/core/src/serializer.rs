use std::fmt::{self, Display, Formatter};
use std::iter;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use log::trace;

use crate::chain::ChainLength;
use crate::errors::{Line, ShiftError};
use crate::lines::Lines;
use crate::timing::Timing;

/// Clocks bits into a shift register chain and latches them onto the outputs.
///
/// This is the lowest level of the protocol: it knows how to pulse the clocks but keeps no
/// record of what the outputs show. Most users want `ShiftOut` from the [`shiftout`] crate,
/// which remembers per-output state on top of this.
///
/// # Examples
///
/// ```
/// use shiftout_core::{ChainLength, Lines, Serializer};
/// use shiftout_testing::{Pin, VirtualChain};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// let chain = VirtualChain::new(8);
/// let lines = Lines::new(chain.line(Pin::Data), chain.line(Pin::ShiftClock), chain.line(Pin::LatchClock));
/// let mut serializer = Serializer::new(lines, chain.delay(), ChainLength::default());
///
/// // The last bit shifted in ends up on the first output.
/// serializer.write_frame(&[true, false, false, false, false, false, false, false])?;
/// assert!(chain.output(7));
/// assert_eq!(1, chain.latch_pulses());
/// #
/// # Ok(()) }
/// ```
///
/// [`shiftout`]: https://docs.rs/shiftout
#[derive(Debug)]
pub struct Serializer<P, D> {
    lines: Lines<P>,
    delay: D,
    chain: ChainLength,
    timing: Timing,
}

impl<P: OutputPin, D: DelayNs> Serializer<P, D> {
    /// Creates a new `Serializer` with the default [`Timing`].
    ///
    /// No lines are touched until the first write.
    pub fn new(lines: Lines<P>, delay: D, chain: ChainLength) -> Self {
        Self::with_timing(lines, delay, chain, Timing::default())
    }

    /// Creates a new `Serializer` with custom pulse timing.
    pub fn with_timing(lines: Lines<P>, delay: D, chain: ChainLength, timing: Timing) -> Self {
        Serializer {
            lines,
            delay,
            chain,
            timing,
        }
    }

    /// Returns the length of the chain this serializer writes full frames for.
    pub fn chain_length(&self) -> ChainLength {
        self.chain
    }

    /// Returns the pulse timing in use.
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Sets the data line to `value` and pulses the shift clock once.
    ///
    /// Every bit already in the chain moves one stage further along; nothing changes on the
    /// outputs until [`latch`](Self::latch).
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if the data or shift clock line could not be driven.
    pub fn shift_bit(&mut self, value: bool) -> Result<(), ShiftError<P::Error>> {
        drive(&mut self.lines.data, Line::Data, value)?;
        pulse(
            &mut self.lines.shift_clock,
            Line::ShiftClock,
            &mut self.delay,
            self.timing,
        )
    }

    /// Pulses the latch clock, copying the shifted bits onto the outputs all at once.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if the latch clock line could not be driven.
    pub fn latch(&mut self) -> Result<(), ShiftError<P::Error>> {
        pulse(
            &mut self.lines.latch_clock,
            Line::LatchClock,
            &mut self.delay,
            self.timing,
        )
    }

    /// Shifts a full frame, index 0 first, then latches once.
    ///
    /// Index 0 ends up furthest down the chain (the last output of the last register), and
    /// the final index lands on the first output of the first register.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::WrongFrameLength`] without touching any line if `bits` does not hold
    /// exactly one value per output, or [`ShiftError::Line`] if a line could not be driven.
    pub fn write_frame(&mut self, bits: &[bool]) -> Result<(), ShiftError<P::Error>> {
        let expected = self.chain.outputs();
        if bits.len() != expected {
            return Err(ShiftError::WrongFrameLength {
                expected,
                actual: bits.len(),
            });
        }

        trace!("Frame: {}", Bits(bits));
        self.write_bits(bits.iter().copied())
    }

    /// Shifts every bit of `bits` in order, then latches once.
    ///
    /// Unlike [`write_frame`](Self::write_frame), the number of bits is not checked; shifting fewer
    /// bits than the chain holds moves the previous contents along instead of replacing them.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if a line could not be driven.
    pub fn write_bits<I>(&mut self, bits: I) -> Result<(), ShiftError<P::Error>>
    where
        I: IntoIterator<Item = bool>,
    {
        for bit in bits {
            self.shift_bit(bit)?;
        }
        self.latch()
    }

    /// Enables or disables the outputs via the active-low output enable line.
    ///
    /// Does nothing if no output enable line is connected.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if the output enable line could not be driven.
    pub fn set_outputs_enabled(&mut self, enabled: bool) -> Result<(), ShiftError<P::Error>> {
        match self.lines.output_enable.as_mut() {
            Some(pin) => drive(pin, Line::OutputEnable, !enabled),
            None => Ok(()),
        }
    }

    /// Asserts or releases the active-low reset line.
    ///
    /// Does nothing if no reset line is connected.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if the reset line could not be driven.
    pub fn set_reset(&mut self, asserted: bool) -> Result<(), ShiftError<P::Error>> {
        match self.lines.reset.as_mut() {
            Some(pin) => drive(pin, Line::Reset, !asserted),
            None => Ok(()),
        }
    }

    /// Clears every stage of the chain and latches, turning all outputs off.
    ///
    /// Uses a reset pulse when the reset line is connected and shifts a frame of zeros otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if a line could not be driven.
    pub fn clear(&mut self) -> Result<(), ShiftError<P::Error>> {
        if self.lines.reset.is_some() {
            trace!("Clearing chain with reset pulse");
            self.set_reset(true)?;
            self.delay.delay_us(self.timing.pulse_width_us());
            self.set_reset(false)?;
            self.latch()
        } else {
            trace!("Clearing chain with zero frame");
            let outputs = self.chain.outputs();
            self.write_bits(iter::repeat(false).take(outputs))
        }
    }

    /// Blocks for `ms` milliseconds using the serializer's delay.
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Consumes the serializer, returning the lines and delay.
    pub fn release(self) -> (Lines<P>, D) {
        (self.lines, self.delay)
    }
}

/// Renders a slice of bits as a string of `0`s and `1`s, index 0 first,
/// with a space between each byte.
///
/// # Examples
///
/// ```
/// use shiftout_core::Bits;
///
/// let bits = [true, false, false, false, false, false, false, true, true];
/// assert_eq!("10000001 1", Bits(&bits).to_string());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Bits<'a>(pub &'a [bool]);

impl Display for Bits<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, bit) in self.0.iter().enumerate() {
            if i > 0 && i % 8 == 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

fn drive<P: OutputPin>(pin: &mut P, line: Line, level: bool) -> Result<(), ShiftError<P::Error>> {
    pin.set_state(PinState::from(level))
        .map_err(|cause| ShiftError::Line { line, cause })
}

fn pulse<P: OutputPin, D: DelayNs>(
    pin: &mut P,
    line: Line,
    delay: &mut D,
    timing: Timing,
) -> Result<(), ShiftError<P::Error>> {
    drive(pin, line, true)?;
    delay.delay_us(timing.pulse_width_us());
    drive(pin, line, false)
}
