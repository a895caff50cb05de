//! Frame sequences for [`ShiftOut::animate`](crate::ShiftOut::animate).

/// The state of the first eight outputs, index 0 first.
pub type Frame = [bool; 8];

/// Builds a [`Frame`] from a byte written left to right, so `0b1000_0000` turns on output 0.
///
/// # Examples
///
/// ```
/// use shiftout::animation::frame;
///
/// assert_eq!([true, true, false, false, false, false, false, true], frame(0b1100_0001));
/// ```
pub const fn frame(pattern: u8) -> Frame {
    let mut frame = [false; 8];
    let mut i = 0;
    while i < 8 {
        frame[i] = pattern & (0x80 >> i) != 0;
        i += 1;
    }
    frame
}

/// A single lit output stepping from output 0 to output 7.
pub const STROBE: [Frame; 8] = [
    frame(0b1000_0000),
    frame(0b0100_0000),
    frame(0b0010_0000),
    frame(0b0001_0000),
    frame(0b0000_1000),
    frame(0b0000_0100),
    frame(0b0000_0010),
    frame(0b0000_0001),
];

/// Delay between [`STROBE`] frames in the built-in demonstration.
pub const STROBE_DELAY_MS: u32 = 200;

/// A three-output bar sweeping to the end and back again.
pub const NIGHT_RIDER: [Frame; 18] = [
    frame(0b1000_0000),
    frame(0b1100_0000),
    frame(0b1110_0000),
    frame(0b0111_0000),
    frame(0b0011_1000),
    frame(0b0001_1100),
    frame(0b0000_1110),
    frame(0b0000_0111),
    frame(0b0000_0011),
    frame(0b0000_0001),
    frame(0b0000_0011),
    frame(0b0000_0111),
    frame(0b0000_1110),
    frame(0b0001_1100),
    frame(0b0011_1000),
    frame(0b0111_0000),
    frame(0b1110_0000),
    frame(0b1100_0000),
];

/// Delay between [`NIGHT_RIDER`] frames in the built-in demonstration.
pub const NIGHT_RIDER_DELAY_MS: u32 = 50;

/// Pause between the two sequences of the built-in demonstration.
pub const DEMONSTRATION_PAUSE_MS: u32 = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(frame: &Frame) -> usize {
        frame.iter().filter(|&&bit| bit).count()
    }

    #[test]
    fn strobe_lights_one_output_at_a_time() {
        for (i, frame) in STROBE.iter().enumerate() {
            assert_eq!(1, lit(frame));
            assert!(frame[i]);
        }
    }

    #[test]
    fn night_rider_returns_to_start() {
        assert_eq!(NIGHT_RIDER[0], frame(0b1000_0000));
        assert!(NIGHT_RIDER.iter().all(|frame| (1..=3).contains(&lit(frame))));

        // Sweeping back mirrors sweeping out.
        for i in 1..9 {
            assert_eq!(NIGHT_RIDER[i], NIGHT_RIDER[18 - i]);
        }
    }
}
