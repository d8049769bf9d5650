use core::fmt::Debug;

use heapless::Vec;
use log::warn;
use smart_leds::{SmartLedsWrite, RGB8};

use crate::{indicator::Indicator, midi::MidiEvent, sink::MidiSink, Instant};

/// More than any pedal can produce in one tick: at most one event per button.
pub const MAX_EVENTS_PER_TICK: usize = 8;

/// What a pedal wants done after processing one sample.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub events: Vec<MidiEvent, MAX_EVENTS_PER_TICK>,
    /// The LEDs have to be redrawn from [`Pedal::frame`] and [`Pedal::brightness`].
    pub redraw: bool,
}

impl Reaction {
    pub fn emit(&mut self, event: MidiEvent) {
        if self.events.push(event).is_err() {
            warn!("Dropped {:?}, too many events in one tick", event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && !self.redraw
    }
}

/// The state of a pedal and the step function that advances it one polling tick.
///
/// `tick` only mutates the pedal and describes the outcome, it never touches
/// hardware. [`step`] applies the outcome to the outputs.
pub trait Pedal<const LEDS: usize> {
    /// Raw pin levels of all footswitches, sampled at the same time
    type Sample;

    fn tick(&mut self, sample: Self::Sample, now: Instant) -> Reaction;

    /// The colors the LEDs should show right now, at full scale
    fn frame(&self) -> [RGB8; LEDS];

    fn brightness(&self) -> u8;
}

/// One iteration of the dispatch loop, minus the sleep: classify the sample, send
/// every resulting event, then update the LEDs.
pub fn step<P, S, W, const LEDS: usize>(
    pedal: &mut P,
    sink: &mut S,
    indicator: &mut Indicator<W, LEDS>,
    sample: P::Sample,
    now: Instant,
) -> Reaction
where
    P: Pedal<LEDS>,
    S: MidiSink,
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
{
    let reaction = pedal.tick(sample, now);

    for &event in reaction.events.iter() {
        sink.emit(event);
    }

    if reaction.redraw {
        if let Err(err) = indicator.render(pedal.frame(), pedal.brightness()) {
            warn!("LED update failed: {:?}", err);
        }
    }

    reaction
}
