/// The GPIO lines wired to a shift register chain.
///
/// Data, shift clock and latch clock are required. Output enable and reset are optional;
/// leave them `None` when the chip's OE pin is tied low or SRCLR is tied high.
///
/// All lines share one pin type `P`. On HALs with a distinct type per pin, downgrade
/// them to the erased pin type first.
///
/// # Examples
///
/// ```
/// use shiftout_core::Lines;
/// use shiftout_testing::{Pin, VirtualChain};
///
/// let chain = VirtualChain::new(8);
/// let lines = Lines {
///     data: chain.line(Pin::Data),
///     shift_clock: chain.line(Pin::ShiftClock),
///     latch_clock: chain.line(Pin::LatchClock),
///     output_enable: None,
///     reset: Some(chain.line(Pin::Reset)),
/// };
/// assert!(lines.output_enable.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lines<P> {
    /// Serial data input.
    pub data: P,

    /// Shift register clock; data is sampled on its rising edge.
    pub shift_clock: P,

    /// Storage register clock; shifted data appears on the outputs on its rising edge.
    pub latch_clock: P,

    /// Active-low output enable, if connected.
    pub output_enable: Option<P>,

    /// Active-low shift register clear, if connected.
    pub reset: Option<P>,
}

impl<P> Lines<P> {
    /// Creates a bundle with only the three required lines connected.
    pub fn new(data: P, shift_clock: P, latch_clock: P) -> Self {
        Lines {
            data,
            shift_clock,
            latch_clock,
            output_enable: None,
            reset: None,
        }
    }

    /// Connects the active-low output enable line.
    pub fn with_output_enable(mut self, output_enable: P) -> Self {
        self.output_enable = Some(output_enable);
        self
    }

    /// Connects the active-low reset line.
    pub fn with_reset(mut self, reset: P) -> Self {
        self.reset = Some(reset);
        self
    }
}
