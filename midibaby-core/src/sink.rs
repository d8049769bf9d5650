use core::fmt::Debug;

use log::{debug, warn};

use crate::midi::{Channel, MidiEvent};

/// Anything encoded MIDI messages can be written to: the USB endpoint, a UART.
pub trait MidiTransport {
    type Error: Debug;

    /// Writes one complete message. Must not block for longer than it takes to
    /// hand the bytes to the hardware.
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<T: MidiTransport + ?Sized> MidiTransport for &mut T {
    type Error = T::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).send(bytes)
    }
}

/// Consumes the events the dispatch loop produces.
pub trait MidiSink {
    fn emit(&mut self, event: MidiEvent);
}

/// Sends every event, byte for byte the same, to the USB and the serial transport.
///
/// Sending is best effort: a transport that fails is logged and skipped, the other
/// transport still gets the message and nothing is retried.
pub struct FanOut<U, S> {
    pub usb: U,
    pub serial: S,
    channel: Channel,
}

impl<U, S> FanOut<U, S>
where
    U: MidiTransport,
    S: MidiTransport,
{
    pub fn new(usb: U, serial: S, channel: Channel) -> Self {
        Self {
            usb,
            serial,
            channel,
        }
    }
}

impl<U, S> MidiSink for FanOut<U, S>
where
    U: MidiTransport,
    S: MidiTransport,
{
    fn emit(&mut self, event: MidiEvent) {
        let bytes = event.encode(self.channel);
        debug!("{:?} -> {:02x?}", event, bytes.as_slice());

        if let Err(err) = self.usb.send(&bytes) {
            warn!("USB MIDI send dropped: {:?}", err);
        }

        if let Err(err) = self.serial.send(&bytes) {
            warn!("Serial MIDI send dropped: {:?}", err);
        }
    }
}
