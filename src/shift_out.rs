use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::debug;

use crate::animation::{self, Frame};
use crate::core::{Bits, ChainLength, Lines, Serializer, ShiftError, Timing};

/// Whether the per-output cache of a [`ShiftOut`] can be trusted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CacheState {
    /// A full-frame write has happened since the cache was last used. The next single-output
    /// update starts again from all outputs off.
    Stale,

    /// The cache reflects the outputs, and single-output updates are merged into it.
    Fresh,
}

/// A chain of one or more cascaded 74HC595 shift registers.
///
/// The chips have no way to read back what they are showing, so `ShiftOut` remembers the desired
/// state of every output. [`write_bit_at_pos`](Self::write_bit_at_pos) changes a single output and
/// leaves the others as they were, while the full-frame writes ([`write_byte`](Self::write_byte),
/// [`write_word`](Self::write_word), [`animate`](Self::animate)) replace everything and mark that
/// memory stale, so the next single-output update starts from all outputs off rather than mixing
/// with the previous pattern.
///
/// # Examples
///
/// ```
/// use shiftout::{ChainLength, Lines, ShiftOut};
/// use shiftout_testing::{Pin, VirtualChain};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// #
/// // Using a virtual chain here; on Linux you could use `shiftout::sysfs` lines instead.
/// let chain = VirtualChain::new(8);
/// let lines = Lines::new(chain.line(Pin::Data), chain.line(Pin::ShiftClock), chain.line(Pin::LatchClock));
/// let mut register = ShiftOut::new(lines, chain.delay(), ChainLength::default())?;
///
/// // Turn on two outputs one at a time.
/// register.write_bit_at_pos(3, true)?;
/// register.write_bit_at_pos(5, true)?;
/// assert!(chain.output(3) && chain.output(5));
///
/// // Write a whole byte, least significant bit first.
/// register.write_byte(0x30)?;
/// #
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct ShiftOut<P, D> {
    serializer: Serializer<P, D>,
    state: Vec<bool>,
    cache_state: CacheState,
}

impl<P: OutputPin, D: DelayNs> ShiftOut<P, D> {
    /// Takes ownership of the lines and turns every output off.
    ///
    /// The output enable line, if connected, is driven low so the outputs are visible. After
    /// the chain has been zeroed the reset line, if connected, is released.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if one of the lines could not be driven.
    pub fn new(lines: Lines<P>, delay: D, chain: ChainLength) -> Result<Self, ShiftError<P::Error>> {
        Self::with_timing(lines, delay, chain, Timing::default())
    }

    /// Like [`new`](Self::new), but with custom clock pulse timing.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if one of the lines could not be driven.
    pub fn with_timing(
        lines: Lines<P>,
        delay: D,
        chain: ChainLength,
        timing: Timing,
    ) -> Result<Self, ShiftError<P::Error>> {
        debug!("Initializing chain of {}", chain);
        let mut shift_out = ShiftOut {
            serializer: Serializer::with_timing(lines, delay, chain, timing),
            state: vec![false; chain.outputs()],
            cache_state: CacheState::Stale,
        };
        shift_out.serializer.set_outputs_enabled(true)?;
        shift_out.write_byte(0x00)?;
        shift_out.serializer.set_reset(false)?;
        Ok(shift_out)
    }

    /// Returns the length of the chain.
    pub fn chain_length(&self) -> ChainLength {
        self.serializer.chain_length()
    }

    /// Returns the remembered state of every output, index 0 first.
    ///
    /// Only meaningful while [`cache_state`](Self::cache_state) is [`CacheState::Fresh`].
    pub fn state(&self) -> &[bool] {
        &self.state
    }

    /// Returns whether the remembered output state is in use.
    pub fn cache_state(&self) -> CacheState {
        self.cache_state
    }

    /// Writes a byte to the chain, least significant bit first.
    ///
    /// On a chain longer than one register the remaining bits are zero. Marks the cache stale.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if one of the lines could not be driven.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), ShiftError<P::Error>> {
        self.write_word(u64::from(byte))
    }

    /// Writes up to 64 bits to the chain, least significant bit first.
    ///
    /// Bit `i` of `value` is shifted in `i`-th; bits beyond the chain length are dropped and
    /// outputs beyond bit 63 are zero. Marks the cache stale.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if one of the lines could not be driven.
    pub fn write_word(&mut self, value: u64) -> Result<(), ShiftError<P::Error>> {
        self.cache_state = CacheState::Stale;
        let frame: Vec<bool> = (0..self.chain_length().outputs())
            .map(|i| i < 64 && (value >> i) & 1 == 1)
            .collect();
        debug!("Writing {:#x}: {}", value, Bits(&frame));
        self.serializer.write_frame(&frame)
    }

    /// Shifts a single bit into the chain and latches.
    ///
    /// Every other bit moves one stage along, so this is mostly useful on a single register.
    /// The cache is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if one of the lines could not be driven.
    pub fn write_bit(&mut self, bit: bool) -> Result<(), ShiftError<P::Error>> {
        debug!("Writing single bit {}", u8::from(bit));
        self.serializer.write_bits(Some(bit))
    }

    /// Sets a single output and rewrites the whole chain, leaving every other output as it was.
    ///
    /// If the cache is stale, all other outputs are turned off first. Output indices count from
    /// the first output of the first register. An `index` beyond the chain is ignored, though the
    /// current state is still written out.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if one of the lines could not be driven.
    pub fn write_bit_at_pos(&mut self, index: usize, state: bool) -> Result<(), ShiftError<P::Error>> {
        if self.cache_state == CacheState::Stale {
            debug!("Output cache is stale, starting from all outputs off");
            self.state.iter_mut().for_each(|output| *output = false);
            self.cache_state = CacheState::Fresh;
        }

        match self.state.get_mut(index) {
            Some(output) => {
                *output = state;
                debug!("Setting output {} to {}: {}", index, u8::from(state), Bits(&self.state));
            }
            None => debug!("Ignoring output {} beyond chain of {}", index, self.state.len()),
        }

        self.serializer.write_bits(self.state.iter().rev().copied())
    }

    /// Writes an explicit frame, index 0 first.
    ///
    /// Note that this is the reverse of the cache order: `bits[0]` ends up on the last output and
    /// the final element on output 0. The cache and its state are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::WrongFrameLength`] without writing anything if `bits` does not have
    /// exactly one element per output, or [`ShiftError::Line`] if one of the lines could not be driven.
    pub fn write_array(&mut self, bits: &[bool]) -> Result<(), ShiftError<P::Error>> {
        debug!("Writing array {}", Bits(bits));
        self.serializer.write_frame(bits)
    }

    /// Plays a sequence of frames on the first eight outputs, pausing `delay_ms` after each one.
    ///
    /// Each frame is applied as eight single-output updates, so any later outputs in the chain are
    /// off. Blocks until the last frame's pause has elapsed. The cache is stale afterwards, so the
    /// next single-output update starts from all outputs off rather than from the last frame.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if one of the lines could not be driven; the remaining frames
    /// are not played.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiftout::animation::STROBE;
    /// use shiftout::{ChainLength, Lines, ShiftOut};
    /// use shiftout_testing::{Pin, VirtualChain};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// #
    /// let chain = VirtualChain::new(8);
    /// let lines = Lines::new(chain.line(Pin::Data), chain.line(Pin::ShiftClock), chain.line(Pin::LatchClock));
    /// let mut register = ShiftOut::new(lines, chain.delay(), ChainLength::default())?;
    ///
    /// register.animate(&STROBE, 200)?;
    /// assert!(chain.output(7));
    /// #
    /// # Ok(()) }
    /// ```
    pub fn animate(&mut self, frames: &[Frame], delay_ms: u32) -> Result<(), ShiftError<P::Error>> {
        debug!("Animating {} frames at {} ms", frames.len(), delay_ms);
        self.cache_state = CacheState::Stale;
        for frame in frames {
            for (index, &bit) in frame.iter().enumerate() {
                self.write_bit_at_pos(index, bit)?;
            }
            self.serializer.delay_ms(delay_ms);
        }
        self.cache_state = CacheState::Stale;
        Ok(())
    }

    /// Plays the built-in [`NIGHT_RIDER`](animation::NIGHT_RIDER) sequence, pauses for a second, then
    /// plays [`STROBE`](animation::STROBE).
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if one of the lines could not be driven.
    pub fn animation_example(&mut self) -> Result<(), ShiftError<P::Error>> {
        self.animate(&animation::NIGHT_RIDER, animation::NIGHT_RIDER_DELAY_MS)?;
        self.serializer.delay_ms(animation::DEMONSTRATION_PAUSE_MS);
        self.animate(&animation::STROBE, animation::STROBE_DELAY_MS)
    }

    /// Turns every output off, using the reset line if connected. Marks the cache stale.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if one of the lines could not be driven.
    pub fn clear(&mut self) -> Result<(), ShiftError<P::Error>> {
        debug!("Clearing chain");
        self.cache_state = CacheState::Stale;
        self.serializer.clear()
    }

    /// Drives the output enable line low so the latched outputs are visible.
    ///
    /// Does nothing if no output enable line is connected.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if the output enable line could not be driven.
    pub fn enable_outputs(&mut self) -> Result<(), ShiftError<P::Error>> {
        self.serializer.set_outputs_enabled(true)
    }

    /// Drives the output enable line high, putting every output in high impedance.
    ///
    /// The latched state is kept and reappears on [`enable_outputs`](Self::enable_outputs).
    /// Does nothing if no output enable line is connected.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::Line`] if the output enable line could not be driven.
    pub fn disable_outputs(&mut self) -> Result<(), ShiftError<P::Error>> {
        self.serializer.set_outputs_enabled(false)
    }

    /// Consumes the `ShiftOut`, returning the lines and delay.
    pub fn release(self) -> (Lines<P>, D) {
        self.serializer.release()
    }
}
