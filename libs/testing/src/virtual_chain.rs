use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use log::debug;

/// Identifies which pin of the simulated chips a [`VirtualLine`] is wired to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Pin {
    /// Serial data input (SER).
    Data,

    /// Shift register clock (SRCLK).
    ShiftClock,

    /// Storage register clock (RCLK).
    LatchClock,

    /// Active-low output enable (OE).
    OutputEnable,

    /// Active-low shift register clear (SRCLR).
    Reset,
}

impl Pin {
    fn index(self) -> usize {
        match self {
            Pin::Data => 0,
            Pin::ShiftClock => 1,
            Pin::LatchClock => 2,
            Pin::OutputEnable => 3,
            Pin::Reset => 4,
        }
    }
}

/// Mock implementation of a chain of cascaded 74HC595 shift registers.
///
/// `VirtualChain` hands out [`VirtualLine`]s implementing [`OutputPin`] and a [`VirtualDelay`]
/// implementing [`DelayNs`]. Driving the lines updates the simulated chips the same way the real
/// ones respond to their pins:
///
/// * A rising edge on the shift clock moves every stage one position down the chain and
///   samples the data line into the first stage.
/// * A rising edge on the latch clock copies the stages onto the outputs.
/// * While the reset line is low, every stage is held at zero.
/// * While the output enable line is high, the outputs are floating.
///
/// Output index 0 is the first output (Q0) of the first register in the chain.
///
/// Rather than sleeping, the delay advances a virtual clock, which lets tests check elapsed time
/// and clock pulse widths instantly. Latched output patterns are logged using the [`log`] crate.
/// Consuming binaries typically use the [`env_logger`] crate and can be run with the `RUST_LOG=debug`
/// environment variable to watch the patterns go by.
///
/// # Examples
///
/// ```
/// use embedded_hal::digital::OutputPin;
/// use shiftout_testing::{Pin, VirtualChain};
///
/// let chain = VirtualChain::new(8);
/// let mut data = chain.line(Pin::Data);
/// let mut clock = chain.line(Pin::ShiftClock);
/// let mut latch = chain.line(Pin::LatchClock);
///
/// data.set_high().unwrap();
/// clock.set_high().unwrap();
/// clock.set_low().unwrap();
/// latch.set_high().unwrap();
/// latch.set_low().unwrap();
///
/// assert!(chain.output(0));
/// assert_eq!(1, chain.shift_pulses());
/// assert_eq!(1, chain.latch_pulses());
/// ```
///
/// [`log`]: https://crates.io/crates/log
/// [`env_logger`]: https://crates.io/crates/env_logger
#[derive(Debug, Clone)]
pub struct VirtualChain {
    state: Rc<RefCell<ChainState>>,
}

impl VirtualChain {
    /// Creates a new `VirtualChain` with the given total number of outputs.
    ///
    /// All lines start low and all stages and outputs start off. The output count is not
    /// required to be a multiple of 8 so that tests can model odd wiring.
    pub fn new(outputs: usize) -> Self {
        VirtualChain {
            state: Rc::new(RefCell::new(ChainState::new(outputs))),
        }
    }

    /// Returns a line wired to the given pin of every chip in the chain.
    ///
    /// The output enable and reset pins are considered tied inactive until a line has been
    /// requested for them.
    pub fn line(&self, pin: Pin) -> VirtualLine {
        self.state.borrow_mut().connected[pin.index()] = true;
        VirtualLine {
            pin,
            state: self.state.clone(),
        }
    }

    /// Returns a delay that advances this chain's virtual clock.
    pub fn delay(&self) -> VirtualDelay {
        VirtualDelay {
            state: self.state.clone(),
        }
    }

    /// Returns the latched state of every output, whether or not the outputs are enabled.
    pub fn outputs(&self) -> Vec<bool> {
        self.state.borrow().outputs.clone()
    }

    /// Returns the latched state of a single output.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the number of outputs.
    pub fn output(&self, index: usize) -> bool {
        self.state.borrow().outputs[index]
    }

    /// Returns the outputs as they appear on the pins, or `None` if the output enable line
    /// is high and the outputs are floating.
    pub fn visible_outputs(&self) -> Option<Vec<bool>> {
        let state = self.state.borrow();
        if state.is_active_low_asserted(Pin::OutputEnable) {
            Some(state.outputs.clone())
        } else {
            None
        }
    }

    /// Returns the current contents of the shift stages (not yet latched).
    pub fn stages(&self) -> Vec<bool> {
        self.state.borrow().stages.clone()
    }

    /// Returns the current level of a line.
    pub fn level(&self, pin: Pin) -> bool {
        self.state.borrow().levels[pin.index()]
    }

    /// Returns the number of shift clock pulses that moved data since creation or the last
    /// [`reset_counters`](Self::reset_counters).
    pub fn shift_pulses(&self) -> usize {
        self.state.borrow().shift_pulses
    }

    /// Returns the number of latch pulses since creation or the last
    /// [`reset_counters`](Self::reset_counters).
    pub fn latch_pulses(&self) -> usize {
        self.state.borrow().history.len()
    }

    /// Returns every output pattern latched since creation or the last
    /// [`reset_counters`](Self::reset_counters), oldest first.
    pub fn history(&self) -> Vec<Vec<bool>> {
        self.state.borrow().history.clone()
    }

    /// Returns the total virtual time that has elapsed.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.state.borrow().now_ns)
    }

    /// Returns every delay that was requested, oldest first.
    pub fn delays(&self) -> Vec<Duration> {
        self.state.borrow().delays.iter().map(|&ns| Duration::from_nanos(ns)).collect()
    }

    /// Returns the shortest time either clock line was held high, or `None` if no complete pulse
    /// has been seen.
    pub fn min_pulse_width(&self) -> Option<Duration> {
        self.state.borrow().min_pulse_ns.map(Duration::from_nanos)
    }

    /// Clears the pulse counters, the latch history, the recorded delays and the virtual clock,
    /// leaving the stages, outputs and line levels intact.
    pub fn reset_counters(&self) {
        let mut state = self.state.borrow_mut();
        state.now_ns = 0;
        state.rose_at_ns = [0; 5];
        state.shift_pulses = 0;
        state.history.clear();
        state.delays.clear();
        state.min_pulse_ns = None;
    }
}

/// A single line into a [`VirtualChain`].
///
/// Never fails; the error type is [`Infallible`].
#[derive(Debug, Clone)]
pub struct VirtualLine {
    pin: Pin,
    state: Rc<RefCell<ChainState>>,
}

impl VirtualLine {
    /// Returns the pin this line is wired to.
    pub fn pin(&self) -> Pin {
        self.pin
    }
}

impl ErrorType for VirtualLine {
    type Error = Infallible;
}

impl OutputPin for VirtualLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state.borrow_mut().drive(self.pin, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state.borrow_mut().drive(self.pin, true);
        Ok(())
    }
}

/// A delay that advances the virtual clock of a [`VirtualChain`] instead of sleeping.
#[derive(Debug, Clone)]
pub struct VirtualDelay {
    state: Rc<RefCell<ChainState>>,
}

impl DelayNs for VirtualDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.state.borrow_mut().advance(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.state.borrow_mut().advance(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.state.borrow_mut().advance(u64::from(ms) * 1_000_000);
    }
}

#[derive(Debug)]
struct ChainState {
    levels: [bool; 5],
    connected: [bool; 5],
    stages: Vec<bool>,
    outputs: Vec<bool>,
    shift_pulses: usize,
    history: Vec<Vec<bool>>,
    now_ns: u64,
    delays: Vec<u64>,
    rose_at_ns: [u64; 5],
    min_pulse_ns: Option<u64>,
}

impl ChainState {
    fn new(outputs: usize) -> Self {
        ChainState {
            levels: [false; 5],
            connected: [false; 5],
            stages: vec![false; outputs],
            outputs: vec![false; outputs],
            shift_pulses: 0,
            history: vec![],
            now_ns: 0,
            delays: vec![],
            rose_at_ns: [0; 5],
            min_pulse_ns: None,
        }
    }

    /// Whether an active-low control pin is asserted. Unconnected pins are tied inactive,
    /// except output enable which is tied low (enabled).
    fn is_active_low_asserted(&self, pin: Pin) -> bool {
        if !self.connected[pin.index()] {
            return pin == Pin::OutputEnable;
        }
        !self.levels[pin.index()]
    }

    fn advance(&mut self, ns: u64) {
        self.now_ns += ns;
        self.delays.push(ns);
    }

    fn drive(&mut self, pin: Pin, level: bool) {
        let index = pin.index();
        let previous = self.levels[index];
        self.levels[index] = level;

        match (previous, level) {
            (false, true) => {
                self.rose_at_ns[index] = self.now_ns;
                self.rising_edge(pin);
            }
            (true, false) => self.falling_edge(pin),
            _ => {}
        }

        if pin == Pin::Reset && self.is_active_low_asserted(Pin::Reset) {
            self.stages.iter_mut().for_each(|stage| *stage = false);
        }
    }

    fn rising_edge(&mut self, pin: Pin) {
        match pin {
            Pin::ShiftClock => {
                if self.is_active_low_asserted(Pin::Reset) || self.stages.is_empty() {
                    return;
                }
                let _ = self.stages.pop();
                self.stages.insert(0, self.levels[Pin::Data.index()]);
                self.shift_pulses += 1;
            }
            Pin::LatchClock => {
                self.outputs.clone_from(&self.stages);
                debug!("Vchain latched {}", render(&self.outputs));
                self.history.push(self.outputs.clone());
            }
            _ => {}
        }
    }

    fn falling_edge(&mut self, pin: Pin) {
        if let Pin::ShiftClock | Pin::LatchClock = pin {
            let width = self.now_ns - self.rose_at_ns[pin.index()];
            self.min_pulse_ns = Some(self.min_pulse_ns.map_or(width, |min| min.min(width)));
        }
    }
}

fn render(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}
