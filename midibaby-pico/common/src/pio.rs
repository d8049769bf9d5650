use fugit::HertzU32;
use pio::Program;
use pio_proc::pio_file;

use crate::consts::WS2812_PIO_CLOCK_HZ;

pub fn ws2812_program() -> Program<32> {
    pio_file!("src/ws2812.pio", select_program("ws2812")).program
}

/// Integer and 1/256 fractional divider that runs the WS2812 program at
/// [`WS2812_PIO_CLOCK_HZ`] from the given system clock.
pub fn ws2812_clock_divisor(system_clock: HertzU32) -> (u16, u8) {
    let sys = system_clock.raw();
    let pio = WS2812_PIO_CLOCK_HZ.raw();

    let int = (sys / pio) as u16;
    let frac = (((sys % pio) * 256) / pio) as u8;

    (int, frac)
}
