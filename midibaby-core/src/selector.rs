//! The three footswitch pedal: every switch selects its own program and lights only
//! its own LED.

use core::array;

use smart_leds::RGB8;

use crate::{
    button::{Button, ButtonEdge},
    consts::*,
    dispatch::{Pedal, Reaction},
    midi::MidiEvent,
    Instant,
};

#[derive(Debug, Clone, Copy)]
pub struct SelectorSettings<const BUTTONS: usize> {
    /// GPIO numbers of the footswitches in program order, for logging
    pub pins: [u8; BUTTONS],
    /// Colors for the startup chase
    pub colors: [RGB8; BUTTONS],
    /// Color of the LED of the selected program
    pub lit: RGB8,
    pub brightness: u8,
    pub stable_samples: u32,
}

impl Default for SelectorSettings<3> {
    fn default() -> Self {
        Self {
            pins: [20, 19, 18],
            colors: [RED, GREEN, BLUE],
            lit: BLUE,
            brightness: BRIGHTNESS_DEFAULT,
            stable_samples: 1,
        }
    }
}

pub struct ProgramSelector<const BUTTONS: usize> {
    settings: SelectorSettings<BUTTONS>,
    buttons: [Button; BUTTONS],
    selected: Option<usize>,
}

impl<const BUTTONS: usize> ProgramSelector<BUTTONS> {
    /// Nothing is selected and no LED is lit until the first press.
    pub fn new(settings: SelectorSettings<BUTTONS>) -> Self {
        assert!(BUTTONS <= crate::dispatch::MAX_EVENTS_PER_TICK);

        Self {
            buttons: array::from_fn(|i| Button::new(settings.pins[i], settings.stable_samples)),
            selected: None,
            settings,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

impl<const BUTTONS: usize> Pedal<BUTTONS> for ProgramSelector<BUTTONS> {
    type Sample = [bool; BUTTONS];

    /// Buttons are handled in program order. Several presses in the same tick each
    /// send their program change and the highest one stays selected.
    fn tick(&mut self, levels: [bool; BUTTONS], _now: Instant) -> Reaction {
        let mut reaction = Reaction::default();

        for (program, (button, level)) in self.buttons.iter_mut().zip(levels).enumerate() {
            if button.sample(level) == Some(ButtonEdge::Pressed) {
                self.selected = Some(program);
                reaction.emit(MidiEvent::ProgramChange(program as u8));
                reaction.redraw = true;
            }
        }

        reaction
    }

    fn frame(&self) -> [RGB8; BUTTONS] {
        let mut frame = [OFF; BUTTONS];
        if let Some(selected) = self.selected {
            frame[selected] = self.settings.lit;
        }
        frame
    }

    fn brightness(&self) -> u8 {
        self.settings.brightness
    }
}
