#![no_std]
#![no_main]

#[link_section = ".boot2"]
#[no_mangle]
#[used]
pub static BOOT2_FIRMWARE: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

use common::{
    consts::{MIDI_BAUD, USB_MANUFACTURER, USB_PID_MIDI_BABY, USB_VID},
    serial_midi::SerialMidi,
    usb_midi::UsbMidi,
    ws2812::Ws2812,
};
use defmt::*;
use defmt_rtt as _;
use embedded_hal::digital::v2::InputPin;
use midibaby_core::{
    consts::POLL_INTERVAL,
    cycler::{CyclerSettings, ProgramCycler},
    dispatch,
    indicator::Indicator,
    midi::Channel,
    sink::FanOut,
    startup,
};
use panic_probe as _;
use rp_pico::{
    entry,
    hal::{
        clocks::{init_clocks_and_plls, Clock},
        gpio::{self, FunctionPio0, FunctionSio, FunctionUart, Pin, PullUp, SioInput},
        pio::PIOExt,
        sio::Sio,
        timer::Timer,
        uart::{DataBits, StopBits, UartConfig, UartPeripheral},
        usb::UsbBus,
        Watchdog,
    },
    pac,
};
use usb_device::{
    bus::UsbBusAllocator,
    device::{StringDescriptors, UsbDeviceBuilder, UsbVidPid},
};
use usbd_midi::UsbMidiClass;

#[entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();
    let sio = Sio::new(pac.SIO);

    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let mut delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let pins = gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let settings = CyclerSettings::default();

    let led_pin = pins.gpio25.into_function::<FunctionPio0>();
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let leds = Ws2812::new(
        &mut pio,
        sm0,
        led_pin.id().num,
        clocks.system_clock.freq(),
    )
    .unwrap();
    let mut indicator = Indicator::<_, 1>::new(leds, settings.brightness);

    info!("Startup flash.");
    startup::play(
        &mut indicator,
        &mut delay,
        startup::flash_all(&startup::FLASH_COLORS),
    );

    let uart_pins = (
        pins.gpio0.into_function::<FunctionUart>(),
        pins.gpio1.into_function::<FunctionUart>(),
    );
    let uart = UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
        .enable(
            UartConfig::new(MIDI_BAUD, DataBits::Eight, None, StopBits::One),
            clocks.peripheral_clock.freq(),
        )
        .unwrap();

    info!("Creating usb devices.");

    let usb_bus = UsbBusAllocator::new(UsbBus::new(
        pac.USBCTRL_REGS,
        pac.USBCTRL_DPRAM,
        clocks.usb_clock,
        true,
        &mut pac.RESETS,
    ));

    let midi = UsbMidiClass::new(&usb_bus, 1, 0).unwrap();

    let usb_dev = UsbDeviceBuilder::new(&usb_bus, UsbVidPid(USB_VID, USB_PID_MIDI_BABY))
        .device_class(0)
        .device_sub_class(0)
        .strings(&[StringDescriptors::default()
            .manufacturer(USB_MANUFACTURER)
            .product("MIDI Baby")
            .serial_number("0")])
        .unwrap()
        .build();

    let mut sink = FanOut::new(
        UsbMidi::new(usb_dev, midi),
        SerialMidi::new(uart),
        Channel::default(),
    );

    let pedal_pin: Pin<_, FunctionSio<SioInput>, PullUp> = pins.gpio26.reconfigure();
    let mut pedal: ProgramCycler<4> = ProgramCycler::new(settings).unwrap();

    info!("Polling footswitch on GPIO {}.", settings.pin);

    loop {
        let now = timer.get_counter();

        dispatch::step(
            &mut pedal,
            &mut sink,
            &mut indicator,
            pedal_pin.is_high().unwrap(),
            now,
        );

        sink.usb.poll_until(&timer, now + POLL_INTERVAL);
    }
}
