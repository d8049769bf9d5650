use midibaby_core::sink::MidiTransport;
use rp_pico::hal::uart::{Enabled, UartDevice, UartPeripheral, ValidUartPinout};

/// The 5-pin DIN output, a UART running at [`crate::consts::MIDI_BAUD`].
pub struct SerialMidi<D: UartDevice, P: ValidUartPinout<D>> {
    uart: UartPeripheral<Enabled, D, P>,
}

#[derive(Debug, defmt::Format)]
pub enum SerialMidiError {
    /// The TX FIFO was full, this many bytes were not sent
    Overrun(usize),
}

impl<D: UartDevice, P: ValidUartPinout<D>> SerialMidi<D, P> {
    pub fn new(uart: UartPeripheral<Enabled, D, P>) -> Self {
        Self { uart }
    }
}

impl<D: UartDevice, P: ValidUartPinout<D>> MidiTransport for SerialMidi<D, P> {
    type Error = SerialMidiError;

    /// Only queues the bytes in the TX FIFO, never waits for the line.
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        match self.uart.write_raw(bytes) {
            Ok(rest) if rest.is_empty() => Ok(()),
            Ok(rest) => Err(SerialMidiError::Overrun(rest.len())),
            Err(nb::Error::WouldBlock) => Err(SerialMidiError::Overrun(bytes.len())),
            Err(nb::Error::Other(never)) => match never {},
        }
    }
}
