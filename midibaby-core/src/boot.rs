//! One-shot check right after the startup show: holding the maintenance button means
//! the user wants to flash new firmware instead of playing.

use core::fmt::Debug;

use embedded_hal::blocking::delay::DelayMs;
use log::{info, warn};
use smart_leds::{SmartLedsWrite, RGB8};

use crate::{
    consts::{BOOTLOADER_NOTICE_MS, CYAN},
    indicator::Indicator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootMode {
    Normal,
    Bootloader,
}

/// `level` is the raw, active-low pin level of the maintenance button.
pub fn check(level: bool) -> BootMode {
    if level {
        BootMode::Normal
    } else {
        BootMode::Bootloader
    }
}

/// Turns every LED cyan and waits long enough for the user to notice before the
/// platform reboots into its bootloader.
pub fn announce<W, D, const N: usize>(indicator: &mut Indicator<W, N>, delay: &mut D)
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
    D: DelayMs<u32>,
{
    info!("Maintenance button held, resetting into the bootloader");

    indicator.fill(CYAN);
    if let Err(err) = indicator.show() {
        warn!("LED update failed: {:?}", err);
    }

    delay.delay_ms(BOOTLOADER_NOTICE_MS);
}
