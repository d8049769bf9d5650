mod common;

use midibaby_core::{
    consts::{LONG_PRESS, TOGGLE_CONTROLLER},
    cycler::{CyclerSettings, ProgramCycler},
    dispatch::Pedal,
    midi::MidiEvent,
    selector::{ProgramSelector, SelectorSettings},
};
use proptest::prelude::*;

use common::{at, TICK_MS};

fn falling_edges(levels: &[bool]) -> usize {
    let mut previous = true;
    let mut edges = 0;
    for &level in levels {
        if previous && !level {
            edges += 1;
        }
        previous = level;
    }
    edges
}

/// What the single switch pedal should send for a timeline of pin levels sampled
/// every tick: a press still held 500 ms after it started is a long press, any other
/// press that ends in a release is a short one.
fn expected_cycler_events(levels: &[bool]) -> Vec<MidiEvent> {
    let long_press_ticks = (LONG_PRESS.to_millis() / TICK_MS) as usize;

    let mut program = 3;
    let mut toggle = 127;
    let mut events = Vec::new();

    let mut i = 0;
    while i < levels.len() {
        if levels[i] {
            i += 1;
            continue;
        }

        let held = levels[i..].iter().take_while(|&&level| !level).count();
        let released = i + held < levels.len();

        if held > long_press_ticks {
            toggle = if toggle == 127 { 0 } else { 127 };
            events.push(MidiEvent::ControlChange(TOGGLE_CONTROLLER, toggle));
        } else if released {
            program = (program + 1) % 4;
            events.push(MidiEvent::ProgramChange(program));
        }

        i += held;
    }

    events
}

proptest! {
    #[test]
    fn cycler_emits_one_event_per_classified_press(levels in prop::collection::vec(any::<bool>(), 0..400)) {
        let mut pedal: ProgramCycler<4> = ProgramCycler::new(CyclerSettings::default()).unwrap();
        let mut events = Vec::new();

        for (i, &level) in levels.iter().enumerate() {
            let reaction = pedal.tick(level, at(i as u64 * TICK_MS));
            prop_assert!(reaction.events.len() <= 1);
            events.extend(reaction.events.iter().copied());
        }

        let expected = expected_cycler_events(&levels);
        prop_assert!(events.len() <= falling_edges(&levels));
        prop_assert_eq!(events.len(), expected.len());
        prop_assert_eq!(events, expected);
    }

    #[test]
    fn selector_emits_exactly_one_event_per_press(
        samples in prop::collection::vec(prop::array::uniform3(any::<bool>()), 0..200)
    ) {
        let mut pedal: ProgramSelector<3> = ProgramSelector::new(SelectorSettings::default());
        let mut count = 0;

        for (i, &levels) in samples.iter().enumerate() {
            let reaction = pedal.tick(levels, at(i as u64 * TICK_MS));
            count += reaction.events.len();

            let lit = pedal.frame().iter().filter(|&&pixel| pixel != midibaby_core::consts::OFF).count();
            prop_assert_eq!(lit, usize::from(pedal.selected().is_some()));
        }

        let expected: usize = (0..3)
            .map(|button| falling_edges(&samples.iter().map(|levels| levels[button]).collect::<Vec<_>>()))
            .sum();
        prop_assert_eq!(count, expected);
    }

    #[test]
    fn idle_pedals_stay_silent(ticks in 0u64..2_000) {
        let mut cycler: ProgramCycler<4> = ProgramCycler::new(CyclerSettings::default()).unwrap();
        let mut selector: ProgramSelector<3> = ProgramSelector::new(SelectorSettings::default());

        for tick in 0..ticks {
            prop_assert!(cycler.tick(true, at(tick * TICK_MS)).is_empty());
            prop_assert!(selector.tick([true; 3], at(tick * TICK_MS)).is_empty());
        }
    }
}
