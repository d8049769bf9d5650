#![allow(dead_code)]

use std::convert::Infallible;
use std::sync::Once;

use embedded_hal::blocking::delay::DelayMs;
use midibaby_core::{
    dispatch::Pedal,
    midi::MidiEvent,
    sink::{MidiSink, MidiTransport},
    Instant,
};
use smart_leds::{SmartLedsWrite, RGB8};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Matches `POLL_INTERVAL`, checked in `tests/dispatch.rs`.
pub const TICK_MS: u64 = 10;

pub fn at(ms: u64) -> Instant {
    Instant::from_ticks(ms * 1000)
}

/// Feeds the same sample every polling tick for `duration_ms`, starting at `*now_ms`,
/// and returns every event the pedal produced.
pub fn feed<P, const LEDS: usize>(
    pedal: &mut P,
    sample: P::Sample,
    now_ms: &mut u64,
    duration_ms: u64,
) -> Vec<MidiEvent>
where
    P: Pedal<LEDS>,
    P::Sample: Copy,
{
    let end = *now_ms + duration_ms;
    let mut events = Vec::new();

    while *now_ms < end {
        let reaction = pedal.tick(sample, at(*now_ms));
        events.extend(reaction.events.iter().copied());
        *now_ms += TICK_MS;
    }

    events
}

#[derive(Default)]
pub struct RecordingTransport {
    pub sent: Vec<Vec<u8>>,
}

impl MidiTransport for RecordingTransport {
    type Error = Infallible;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.sent.push(bytes.to_vec());
        Ok(())
    }
}

/// A transport whose cable has been pulled.
#[derive(Default)]
pub struct FailingTransport {
    pub attempts: usize,
}

impl MidiTransport for FailingTransport {
    type Error = &'static str;

    fn send(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> {
        self.attempts += 1;
        Err("unplugged")
    }
}

#[derive(Default)]
pub struct CollectingSink {
    pub events: Vec<MidiEvent>,
}

impl MidiSink for CollectingSink {
    fn emit(&mut self, event: MidiEvent) {
        self.events.push(event);
    }
}

/// Remembers every frame written to it, after brightness scaling.
#[derive(Default)]
pub struct RecordingPixels {
    pub frames: Vec<Vec<RGB8>>,
    pub fail: bool,
}

impl SmartLedsWrite for RecordingPixels {
    type Error = &'static str;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        if self.fail {
            return Err("data line stuck");
        }
        self.frames.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeDelay {
    pub waited_ms: Vec<u32>,
}

impl DelayMs<u32> for FakeDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.waited_ms.push(ms);
    }
}
