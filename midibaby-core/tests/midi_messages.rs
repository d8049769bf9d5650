mod common;

use midibaby_core::{
    midi::{Channel, MidiError, MidiEvent},
    sink::{FanOut, MidiSink},
};

use common::{init_logger, FailingTransport, RecordingTransport};

#[test]
fn test_program_change_encoding() {
    let bytes = MidiEvent::ProgramChange(3).encode(Channel::default());
    assert_eq!(bytes.as_slice(), &[0xC0, 0x03]);

    let bytes = MidiEvent::ProgramChange(127).encode(Channel::new(9).unwrap());
    assert_eq!(bytes.as_slice(), &[0xC9, 0x7F]);
}

#[test]
fn test_control_change_encoding() {
    let bytes = MidiEvent::ControlChange(102, 127).encode(Channel::default());
    assert_eq!(bytes.as_slice(), &[0xB0, 0x66, 0x7F]);

    let bytes = MidiEvent::ControlChange(102, 0).encode(Channel::new(15).unwrap());
    assert_eq!(bytes.as_slice(), &[0xBF, 0x66, 0x00]);
}

#[test]
fn test_out_of_range_values() {
    assert_eq!(
        MidiEvent::program_change(128),
        Err(MidiError::DataOutOfRange(128))
    );
    assert_eq!(
        MidiEvent::control_change(102, 200),
        Err(MidiError::DataOutOfRange(200))
    );
    assert_eq!(Channel::new(16), Err(MidiError::ChannelOutOfRange(16)));
    assert_eq!(Channel::try_from(4u8).map(|c| c.index()), Ok(4));

    // Data bytes built by hand never leak into the status bit
    let bytes = MidiEvent::ProgramChange(0x83).encode(Channel::default());
    assert_eq!(bytes.as_slice(), &[0xC0, 0x03]);
}

#[test]
fn test_fan_out_sends_identical_bytes_to_both() {
    init_logger();

    let mut sink = FanOut::new(
        RecordingTransport::default(),
        RecordingTransport::default(),
        Channel::default(),
    );

    sink.emit(MidiEvent::ProgramChange(2));
    sink.emit(MidiEvent::ControlChange(102, 0));

    let expected = vec![vec![0xC0, 0x02], vec![0xB0, 0x66, 0x00]];
    assert_eq!(sink.usb.sent, expected);
    assert_eq!(sink.serial.sent, expected);
}

#[test]
fn test_fan_out_survives_failing_transport() {
    init_logger();

    let mut sink = FanOut::new(
        FailingTransport::default(),
        RecordingTransport::default(),
        Channel::default(),
    );

    sink.emit(MidiEvent::ProgramChange(0));
    sink.emit(MidiEvent::ProgramChange(1));

    // no retries on the broken one, nothing lost on the other
    assert_eq!(sink.usb.attempts, 2);
    assert_eq!(sink.serial.sent, vec![vec![0xC0, 0x00], vec![0xC0, 0x01]]);

    let mut sink = FanOut::new(
        RecordingTransport::default(),
        FailingTransport::default(),
        Channel::default(),
    );

    sink.emit(MidiEvent::ControlChange(102, 127));
    assert_eq!(sink.usb.sent, vec![vec![0xB0, 0x66, 0x7F]]);
    assert_eq!(sink.serial.attempts, 1);
}
