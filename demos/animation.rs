use std::error::Error;

use shiftout::{ChainLength, Lines, ShiftOut};
use shiftout_testing::{Pin, VirtualChain};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Create a virtual chain of two registers for testing purposes.
    // To control real chips you would use lines from `shiftout::sysfs` instead.
    let chain = VirtualChain::new(16);
    let lines = Lines::new(chain.line(Pin::Data), chain.line(Pin::ShiftClock), chain.line(Pin::LatchClock))
        .with_output_enable(chain.line(Pin::OutputEnable))
        .with_reset(chain.line(Pin::Reset));
    let mut register = ShiftOut::new(lines, chain.delay(), ChainLength::new(2)?)?;

    // Light every third output one at a time.
    for index in (0..16).step_by(3) {
        register.write_bit_at_pos(index, true)?;
    }

    // Replace everything with a fixed pattern, then play the built-in animations.
    register.write_word(0xF00F)?;
    register.animation_example()?;

    // For testing purposes, print what the virtual chain went through.
    println!("Latched {} frames in {:?} of virtual time", chain.latch_pulses(), chain.elapsed());
    for outputs in chain.history().iter().step_by(8) {
        let line: String = outputs.iter().map(|&bit| if bit { '#' } else { '.' }).collect();
        println!("{}", line);
    }

    Ok(())
}
