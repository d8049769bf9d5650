#![no_std]
#![no_main]

#[link_section = ".boot2"]
#[no_mangle]
#[used]
pub static BOOT2_FIRMWARE: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

use common::{
    consts::{MIDI_BAUD, USB_MANUFACTURER, USB_PID_MIDI_BABY3, USB_VID},
    serial_midi::SerialMidi,
    usb_midi::UsbMidi,
    ws2812::Ws2812,
};
use defmt::*;
use defmt_rtt as _;
use embedded_hal::digital::v2::InputPin;
use midibaby_core::{
    boot::{self, BootMode},
    consts::POLL_INTERVAL,
    dispatch,
    indicator::Indicator,
    midi::Channel,
    selector::{ProgramSelector, SelectorSettings},
    sink::FanOut,
    startup,
};
use panic_probe as _;
use rp_pico::{
    entry,
    hal::{
        clocks::{init_clocks_and_plls, Clock},
        gpio::{self, DynPinId, FunctionPio0, FunctionSio, FunctionUart, Pin, PullUp, SioInput},
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

type Footswitch = Pin<DynPinId, FunctionSio<SioInput>, PullUp>;

/// The middle footswitch doubles as the maintenance button.
const MAINTENANCE_BUTTON: usize = 1;

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

    let settings = SelectorSettings::default();

    // Program order, must match `settings.pins`
    let footswitches: [Footswitch; 3] = [
        pins.gpio20.reconfigure().into_dyn_pin(),
        pins.gpio19.reconfigure().into_dyn_pin(),
        pins.gpio18.reconfigure().into_dyn_pin(),
    ];

    let led_pin = pins.gpio25.into_function::<FunctionPio0>();
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let leds = Ws2812::new(
        &mut pio,
        sm0,
        led_pin.id().num,
        clocks.system_clock.freq(),
    )
    .unwrap();
    let mut indicator = Indicator::<_, 3>::new(leds, settings.brightness);

    info!("Startup chase.");
    startup::play(&mut indicator, &mut delay, startup::chase(&settings.colors));

    if boot::check(footswitches[MAINTENANCE_BUTTON].is_high().unwrap()) == BootMode::Bootloader {
        boot::announce(&mut indicator, &mut delay);
        common::boot::reset_to_bootloader();
    }

    let uart_pins = (
        pins.gpio8.into_function::<FunctionUart>(),
        pins.gpio9.into_function::<FunctionUart>(),
    );
    let uart = UartPeripheral::new(pac.UART1, uart_pins, &mut pac.RESETS)
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

    let usb_dev = UsbDeviceBuilder::new(&usb_bus, UsbVidPid(USB_VID, USB_PID_MIDI_BABY3))
        .device_class(0)
        .device_sub_class(0)
        .strings(&[StringDescriptors::default()
            .manufacturer(USB_MANUFACTURER)
            .product("MIDI Baby 3")
            .serial_number("0")])
        .unwrap()
        .build();

    let mut sink = FanOut::new(
        UsbMidi::new(usb_dev, midi),
        SerialMidi::new(uart),
        Channel::default(),
    );

    let mut pedal: ProgramSelector<3> = ProgramSelector::new(settings);

    info!("Polling footswitches on GPIO {}.", settings.pins);

    loop {
        let now = timer.get_counter();
        let levels = footswitches.each_ref().map(|pin| pin.is_high().unwrap());

        dispatch::step(&mut pedal, &mut sink, &mut indicator, levels, now);

        sink.usb.poll_until(&timer, now + POLL_INTERVAL);
    }
}
