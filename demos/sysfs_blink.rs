use std::time::Duration;
use std::{env, error::Error, thread};

use shiftout::{ChainLength, PinNumbers, ShiftOut, ThreadDelay};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        println!("Usage: sysfs_blink <registers> <data> <shift_clock> <latch_clock> [output_enable]");
        println!();
        println!("Pin arguments are kernel GPIO numbers as used under /sys/class/gpio");
        println!("If output_enable is omitted, OE is assumed to be tied low");
        return Ok(());
    }

    let chain = ChainLength::new(args[1].parse()?)?;
    let pins = PinNumbers {
        data: args[2].parse()?,
        shift_clock: args[3].parse()?,
        latch_clock: args[4].parse()?,
        output_enable: args.get(5).map(|oe| oe.parse()).transpose()?,
        reset: None,
    };

    let mut register = ShiftOut::new(pins.open()?, ThreadDelay, chain)?;
    loop {
        for index in 0..chain.outputs() {
            register.write_bit_at_pos(index, true)?;
            thread::sleep(Duration::from_millis(100));
        }
        register.clear()?;
        register.animation_example()?;
    }
}
