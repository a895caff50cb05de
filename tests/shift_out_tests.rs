use std::time::Duration;

use shiftout::{CacheState, ChainLength, Lines, ShiftOut};
use shiftout_testing::{Pin, VirtualChain, VirtualDelay, VirtualLine};
use test_case::test_case;

fn connect(outputs: usize) -> (VirtualChain, ShiftOut<VirtualLine, VirtualDelay>) {
    let chain = VirtualChain::new(outputs);
    let lines = Lines::new(
        chain.line(Pin::Data),
        chain.line(Pin::ShiftClock),
        chain.line(Pin::LatchClock),
    );
    let length = ChainLength::from_outputs(outputs).unwrap();
    let register = ShiftOut::new(lines, chain.delay(), length).unwrap();
    chain.reset_counters();
    (chain, register)
}

fn lit(bits: &[bool]) -> Vec<usize> {
    bits.iter().enumerate().filter(|(_, &bit)| bit).map(|(i, _)| i).collect()
}

#[test]
fn single_register_scenario() {
    let (chain, mut register) = connect(8);

    register.write_byte(0x00).unwrap();
    assert_eq!(vec![false; 8], chain.outputs());
    chain.reset_counters();

    register.write_bit_at_pos(3, true).unwrap();
    assert_eq!(vec![3], lit(&chain.outputs()));
    assert_eq!(8, chain.shift_pulses());
    assert_eq!(1, chain.latch_pulses());

    let before = register.state().to_vec();
    register.write_bit_at_pos(10, true).unwrap();
    assert_eq!(before, register.state());

    let history = chain.history();
    assert_eq!(2, history.len());
    assert_eq!(history[0], history[1]);
}

#[test_case(8 ; "one register")]
#[test_case(16 ; "two registers")]
#[test_case(24 ; "three registers")]
#[test_case(32 ; "four registers")]
fn partial_updates_accumulate(outputs: usize) {
    let (chain, mut register) = connect(outputs);
    register.write_byte(0xFF).unwrap();
    chain.reset_counters();

    for index in 0..outputs {
        register.write_bit_at_pos(index, true).unwrap();
        let expected: Vec<usize> = (0..=index).collect();
        assert_eq!(expected, lit(&chain.outputs()));
        assert_eq!(expected, lit(register.state()));
    }

    assert_eq!(vec![true; outputs], register.state());
    assert_eq!(outputs * outputs, chain.shift_pulses());
    assert_eq!(outputs, chain.latch_pulses());
}

#[test_case(8 ; "one register")]
#[test_case(16 ; "two registers")]
fn full_frame_write_invalidates_cache(outputs: usize) {
    let (chain, mut register) = connect(outputs);
    register.write_bit_at_pos(outputs - 1, true).unwrap();
    register.write_bit_at_pos(2, true).unwrap();

    register.write_byte(0xFF).unwrap();
    assert_eq!(CacheState::Stale, register.cache_state());

    register.write_bit_at_pos(0, true).unwrap();
    assert_eq!(vec![0], lit(&chain.outputs()));
    assert_eq!(CacheState::Fresh, register.cache_state());
}

#[test_case(8, 8 ; "just past the end")]
#[test_case(8, 10 ; "past the end")]
#[test_case(16, usize::MAX ; "maximum index")]
fn out_of_range_index_is_ignored(outputs: usize, index: usize) {
    let (chain, mut register) = connect(outputs);
    register.write_bit_at_pos(1, true).unwrap();
    let before = register.state().to_vec();
    let outputs_before = chain.outputs();

    register.write_bit_at_pos(index, true).unwrap();
    register.write_bit_at_pos(index, false).unwrap();

    assert_eq!(before, register.state());
    assert_eq!(outputs_before, chain.outputs());
    assert_eq!(3, chain.latch_pulses());
}

#[test]
fn out_of_range_index_still_resets_stale_cache() {
    let (chain, mut register) = connect(8);
    register.write_byte(0xFF).unwrap();

    register.write_bit_at_pos(8, true).unwrap();
    assert_eq!(CacheState::Fresh, register.cache_state());
    assert_eq!(vec![false; 8], chain.outputs());
}

#[test_case(8 ; "one register")]
#[test_case(16 ; "two registers")]
#[test_case(32 ; "four registers")]
fn array_and_cache_orders_are_reversed(outputs: usize) {
    let pattern: Vec<bool> = (0..outputs).map(|i| i % 3 == 0 || i == 1).collect();

    let (chain, mut register) = connect(outputs);
    register.write_array(&pattern).unwrap();
    let from_array = chain.outputs();

    let (chain, mut register) = connect(outputs);
    for (index, &bit) in pattern.iter().enumerate() {
        register.write_bit_at_pos(index, bit).unwrap();
    }
    let from_cache = chain.outputs();

    assert_eq!(pattern, from_cache);
    for i in 0..outputs {
        assert_eq!(pattern[i], from_array[outputs - 1 - i]);
        assert_eq!(from_array[i], from_cache[outputs - 1 - i]);
    }
}

#[test]
fn write_array_checks_length() {
    let (chain, mut register) = connect(16);
    assert!(register.write_array(&[true; 8]).is_err());
    assert!(register.write_array(&[true; 17]).is_err());
    assert_eq!(0, chain.shift_pulses());
    assert_eq!(0, chain.latch_pulses());
}

#[test]
fn animate_nothing() {
    let (chain, mut register) = connect(8);
    register.animate(&[], 500).unwrap();

    assert_eq!(Duration::from_secs(0), chain.elapsed());
    assert!(chain.delays().is_empty());
    assert_eq!(0, chain.shift_pulses());
    assert_eq!(0, chain.latch_pulses());
}

#[test_case(8 ; "one register")]
#[test_case(16 ; "two registers")]
fn animate_uses_partial_updates(outputs: usize) {
    let (chain, mut register) = connect(outputs);
    register.write_word(u64::MAX).unwrap();
    chain.reset_counters();

    let frames = [shiftout::animation::frame(0b1010_0000), shiftout::animation::frame(0b0000_0011)];
    register.animate(&frames, 20).unwrap();

    assert_eq!(16, chain.latch_pulses());
    assert_eq!(16 * outputs, chain.shift_pulses());
    assert_eq!(vec![6, 7], lit(&chain.outputs()));

    // The stale full-frame bits are gone from the very first update on.
    assert_eq!(vec![0], lit(&chain.history()[0]));

    let pauses: Vec<Duration> = chain.delays().into_iter().filter(|&d| d >= Duration::from_millis(1)).collect();
    assert_eq!(vec![Duration::from_millis(20); 2], pauses);
}

#[test_case(8 ; "one register")]
#[test_case(16 ; "two registers")]
fn animate_leaves_cache_stale(outputs: usize) {
    let (chain, mut register) = connect(outputs);
    register.animate(&shiftout::animation::STROBE, 1).unwrap();
    assert!(chain.output(7));
    assert_eq!(CacheState::Stale, register.cache_state());

    // The last frame does not leak into the next partial update.
    register.write_bit_at_pos(0, true).unwrap();
    assert_eq!(vec![0], lit(&chain.outputs()));
    assert_eq!(CacheState::Fresh, register.cache_state());
}

#[test]
fn every_pulse_is_at_least_two_microseconds() {
    let (chain, mut register) = connect(16);
    register.write_word(0x1234).unwrap();
    register.write_bit_at_pos(7, true).unwrap();
    register.write_bit(true).unwrap();
    register.animation_example().unwrap();

    assert!(chain.min_pulse_width().unwrap() >= Duration::from_micros(2));
}

#[test]
fn instances_are_independent() {
    let (chain_a, mut register_a) = connect(8);
    let (chain_b, mut register_b) = connect(8);

    register_a.write_bit_at_pos(1, true).unwrap();
    register_b.write_bit_at_pos(6, true).unwrap();
    register_a.write_bit_at_pos(2, true).unwrap();

    assert_eq!(vec![1, 2], lit(&chain_a.outputs()));
    assert_eq!(vec![6], lit(&chain_b.outputs()));
}

#[test]
fn release_hands_back_lines() {
    let (chain, mut register) = connect(8);
    register.write_bit_at_pos(0, true).unwrap();

    let (lines, _delay) = register.release();
    assert_eq!(Pin::Data, lines.data.pin());
    assert_eq!(Pin::LatchClock, lines.latch_clock.pin());
    assert!(chain.output(0));
}
