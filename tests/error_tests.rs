use shiftout::{ChainLength, Line, Lines, ShiftError, ShiftOut};

mod mock_line;
use crate::mock_line::{MockLine, MockLineError, NoDelay};

fn lines() -> Lines<MockLine> {
    Lines::new(MockLine::working(), MockLine::working(), MockLine::working())
}

fn failed_line<T: std::fmt::Debug>(result: Result<T, ShiftError<MockLineError>>) -> Line {
    match result {
        Err(ShiftError::Line { line, cause }) => {
            assert_eq!(MockLineError, cause);
            line
        }
        other => panic!("Expected a line error, got {:?}", other),
    }
}

#[test]
fn construction_reports_failing_line() {
    let mut broken = lines();
    broken.data = MockLine::failing_after(0);
    assert_eq!(Line::Data, failed_line(ShiftOut::new(broken, NoDelay, ChainLength::default())));

    let mut broken = lines();
    broken.shift_clock = MockLine::failing_after(1);
    assert_eq!(
        Line::ShiftClock,
        failed_line(ShiftOut::new(broken, NoDelay, ChainLength::default()))
    );

    let broken = lines().with_output_enable(MockLine::failing_after(0));
    assert_eq!(
        Line::OutputEnable,
        failed_line(ShiftOut::new(broken, NoDelay, ChainLength::default()))
    );

    let broken = lines().with_reset(MockLine::failing_after(0));
    assert_eq!(Line::Reset, failed_line(ShiftOut::new(broken, NoDelay, ChainLength::default())));
}

#[test]
fn latch_failure_after_construction() {
    // Construction latches once (high + low).
    let mut broken = lines();
    broken.latch_clock = MockLine::failing_after(2);
    let mut register = ShiftOut::new(broken, NoDelay, ChainLength::default()).unwrap();

    assert_eq!(Line::LatchClock, failed_line(register.write_bit_at_pos(0, true)));
    assert_eq!(Line::LatchClock, failed_line(register.write_array(&[false; 8])));
}

#[test]
fn write_stops_at_first_failure() {
    let data = MockLine::failing_after(8 + 3);
    let writes = data.writes();
    let mut broken = lines();
    broken.data = data;
    let mut register = ShiftOut::new(broken, NoDelay, ChainLength::default()).unwrap();
    assert_eq!(8, writes.get());

    assert_eq!(Line::Data, failed_line(register.write_byte(0xFF)));
    assert_eq!(11, writes.get());
}

#[test]
fn wrong_frame_length_is_checked_first() {
    let mut broken = lines();
    broken.latch_clock = MockLine::failing_after(2);
    let mut register = ShiftOut::new(broken, NoDelay, ChainLength::new(2).unwrap()).unwrap();

    match register.write_array(&[true; 3]) {
        Err(ShiftError::WrongFrameLength { expected, actual }) => {
            assert_eq!(16, expected);
            assert_eq!(3, actual);
        }
        other => panic!("Expected a frame length error, got {:?}", other),
    }
}

#[test]
fn format_errors() {
    let error = ShiftOut::new(
        lines().with_reset(MockLine::failing_after(0)),
        NoDelay,
        ChainLength::default(),
    )
    .unwrap_err();
    assert_eq!("Failed to drive the reset line: MockLineError", error.to_string());

    let error = ChainLength::from_outputs(9).unwrap_err();
    assert_eq!("Chain length must be a non-zero multiple of 8 outputs, got 9", error.to_string());
}
