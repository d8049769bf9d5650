use smart_leds::RGB8;

use crate::Duration;

/// Time between two samples of the footswitches. This is the only debouncing most
/// switches get: a bounce shorter than one interval is never seen.
pub const POLL_INTERVAL: Duration = Duration::millis(10);
/// A footswitch held at least this long is a long press.
pub const LONG_PRESS: Duration = Duration::millis(500);

pub const STARTUP_STEP_MS: u32 = 300;
pub const BOOTLOADER_NOTICE_MS: u32 = 1000;

/// Controller number toggled by a long press on the single button pedal.
pub const TOGGLE_CONTROLLER: u8 = 102;

// Brightness as a fraction of 255
pub const BRIGHTNESS_DEFAULT: u8 = 128; // 0.5
pub const BRIGHTNESS_LOW: u8 = 13; // 0.05
pub const BRIGHTNESS_HIGH: u8 = 204; // 0.8

pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
pub const WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};
pub const CYAN: RGB8 = RGB8 {
    r: 0,
    g: 255,
    b: 255,
};
