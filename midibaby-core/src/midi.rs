use heapless::Vec;

const PROGRAM_CHANGE: u8 = 0xC0;
const CONTROL_CHANGE: u8 = 0xB0;

const DATA_MASK: u8 = 0x7F;
const CHANNEL_MASK: u8 = 0x0F;

/// Longest encoded message, a control change.
pub const MAX_MESSAGE_LEN: usize = 3;

/// The only two messages the pedals ever send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MidiEvent {
    /// Program number
    ProgramChange(u8),
    /// Controller number and value
    ControlChange(u8, u8),
}

/// MIDI channel, zero based. Channel 1 in the numbering printed on most gear is `Channel(0)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MidiError {
    ChannelOutOfRange(u8),
    DataOutOfRange(u8),
}

impl Channel {
    pub fn new(channel: u8) -> Result<Self, MidiError> {
        if channel > CHANNEL_MASK {
            return Err(MidiError::ChannelOutOfRange(channel));
        }
        Ok(Self(channel))
    }

    pub fn index(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Channel {
    type Error = MidiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Channel::new(value)
    }
}

fn data_byte(value: u8) -> Result<u8, MidiError> {
    if value > DATA_MASK {
        Err(MidiError::DataOutOfRange(value))
    } else {
        Ok(value)
    }
}

impl MidiEvent {
    pub fn program_change(program: u8) -> Result<Self, MidiError> {
        Ok(MidiEvent::ProgramChange(data_byte(program)?))
    }

    pub fn control_change(controller: u8, value: u8) -> Result<Self, MidiError> {
        Ok(MidiEvent::ControlChange(
            data_byte(controller)?,
            data_byte(value)?,
        ))
    }

    /// Encodes the message as it goes over the wire. Data bytes are masked to 7 bits so
    /// an out of range value can never be mistaken for a status byte.
    pub fn encode(&self, channel: Channel) -> Vec<u8, MAX_MESSAGE_LEN> {
        let channel = channel.0 & CHANNEL_MASK;

        match *self {
            MidiEvent::ProgramChange(program) => {
                Vec::from_iter([PROGRAM_CHANGE | channel, program & DATA_MASK])
            }
            MidiEvent::ControlChange(controller, value) => Vec::from_iter([
                CONTROL_CHANGE | channel,
                controller & DATA_MASK,
                value & DATA_MASK,
            ]),
        }
    }
}
