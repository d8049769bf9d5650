#![no_std]

pub mod boot;
pub mod consts;
pub mod pio;
pub mod serial_midi;
pub mod usb_midi;
pub mod ws2812;
