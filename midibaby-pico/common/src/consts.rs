use fugit::HertzU32;

pub const MIDI_BAUD: HertzU32 = HertzU32::from_raw(31_250u32);

pub const WS2812_BIT_HZ: HertzU32 = HertzU32::from_raw(800_000u32);
/// PIO cycles per bit, T1 + T2 + T3 in `ws2812.pio`
pub const WS2812_CYCLES_PER_BIT: u32 = 10;
pub const WS2812_PIO_CLOCK_HZ: HertzU32 =
    HertzU32::from_raw(WS2812_BIT_HZ.raw() * WS2812_CYCLES_PER_BIT);

pub const USB_VID: u16 = 0xabc9;
pub const USB_PID_MIDI_BABY: u16 = 0xb001;
pub const USB_PID_MIDI_BABY3: u16 = 0xb003;
pub const USB_MANUFACTURER: &str = "de vck";
