//! Light shows played once at power up, before the footswitches are polled.

use core::{fmt::Debug, iter};

use embedded_hal::blocking::delay::DelayMs;
use log::warn;
use smart_leds::{SmartLedsWrite, RGB8};

use crate::{
    consts::{BLUE, GREEN, OFF, RED, STARTUP_STEP_MS},
    indicator::Indicator,
};

pub const FLASH_COLORS: [RGB8; 3] = [RED, GREEN, BLUE];

/// One step of a light show: show `frame`, then wait `hold_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash<const N: usize> {
    pub frame: [RGB8; N],
    pub hold_ms: u32,
}

impl<const N: usize> Flash<N> {
    pub fn dark() -> Self {
        Self {
            frame: [OFF; N],
            hold_ms: STARTUP_STEP_MS,
        }
    }
}

/// Every LED shows each color in turn, then all go dark.
pub fn flash_all<const N: usize>(colors: &[RGB8]) -> impl Iterator<Item = Flash<N>> + '_ {
    colors
        .iter()
        .map(|&color| Flash {
            frame: [color; N],
            hold_ms: STARTUP_STEP_MS,
        })
        .chain(iter::once(Flash::dark()))
}

/// LED `i` lights up alone in `colors[i]`, one after the other, then all go dark.
pub fn chase<const N: usize>(colors: &[RGB8; N]) -> impl Iterator<Item = Flash<N>> + '_ {
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            let mut frame = [OFF; N];
            frame[i] = color;
            Flash {
                frame,
                hold_ms: STARTUP_STEP_MS,
            }
        })
        .chain(iter::once(Flash::dark()))
}

/// Plays a light show to completion at the indicator's current brightness.
pub fn play<W, D, I, const N: usize>(indicator: &mut Indicator<W, N>, delay: &mut D, show: I)
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
    D: DelayMs<u32>,
    I: IntoIterator<Item = Flash<N>>,
{
    for flash in show {
        let brightness = indicator.brightness();
        if let Err(err) = indicator.render(flash.frame, brightness) {
            warn!("LED update failed during startup: {:?}", err);
        }
        delay.delay_ms(flash.hold_ms);
    }
}
