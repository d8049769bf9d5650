use midibaby_core::{sink::MidiTransport, Instant};
use rp_pico::hal::timer::Timer;
use usb_device::{bus::UsbBus, device::UsbDevice, UsbError};
use usbd_midi::{CableNumber, UsbMidiClass, UsbMidiEventPacket};

/// USB MIDI on cable 0. Owns the device as well as the class, so that the firmware
/// can keep servicing the bus while it waits for the next tick.
pub struct UsbMidi<'a, B: UsbBus> {
    device: UsbDevice<'a, B>,
    class: UsbMidiClass<'a, B>,
}

#[derive(Debug, defmt::Format)]
pub enum UsbMidiError {
    /// The bytes are not a single complete MIDI message
    Packet,
    /// Not configured by a host yet, or the endpoint is busy
    Bus(UsbError),
}

impl<'a, B: UsbBus> UsbMidi<'a, B> {
    pub fn new(device: UsbDevice<'a, B>, class: UsbMidiClass<'a, B>) -> Self {
        Self { device, class }
    }

    pub fn poll(&mut self) -> bool {
        self.device.poll(&mut [&mut self.class])
    }

    /// Busy waits until `deadline`, polling the bus the whole time.
    pub fn poll_until(&mut self, timer: &Timer, deadline: Instant) {
        while timer.get_counter() < deadline {
            self.poll();
        }
    }
}

impl<'a, B: UsbBus> MidiTransport for UsbMidi<'a, B> {
    type Error = UsbMidiError;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let packet = UsbMidiEventPacket::try_from_payload_bytes(CableNumber::Cable0, bytes)
            .map_err(|_| UsbMidiError::Packet)?;

        self.class
            .send_packet(packet)
            .map(|_| ())
            .map_err(UsbMidiError::Bus)
    }
}
