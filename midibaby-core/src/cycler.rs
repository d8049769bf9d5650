//! The single footswitch pedal: a tap steps through the programs, a hold toggles a
//! controller between its extremes and dims or brightens the LED to match.

use smart_leds::RGB8;

use crate::{
    button::Button,
    classifier::{Press, PressClassifier},
    consts::*,
    dispatch::{Pedal, Reaction},
    midi::{MidiError, MidiEvent},
    Duration, Instant,
};

const CONTROL_MIN: u8 = 0;
const CONTROL_MAX: u8 = 127;

#[derive(Debug, Clone, Copy)]
pub struct CyclerSettings<const PROGRAMS: usize> {
    /// GPIO number of the footswitch, for logging
    pub pin: u8,
    /// One color per program
    pub colors: [RGB8; PROGRAMS],
    pub toggle_controller: u8,
    pub long_press: Duration,
    pub stable_samples: u32,
    pub brightness: u8,
    /// Brightness after the controller was toggled to 0
    pub brightness_low: u8,
    /// Brightness after the controller was toggled to 127
    pub brightness_high: u8,
}

impl Default for CyclerSettings<4> {
    fn default() -> Self {
        Self {
            pin: 26,
            colors: [RED, GREEN, BLUE, WHITE],
            toggle_controller: TOGGLE_CONTROLLER,
            long_press: LONG_PRESS,
            stable_samples: 1,
            brightness: BRIGHTNESS_DEFAULT,
            brightness_low: BRIGHTNESS_LOW,
            brightness_high: BRIGHTNESS_HIGH,
        }
    }
}

pub struct ProgramCycler<const PROGRAMS: usize> {
    settings: CyclerSettings<PROGRAMS>,
    button: Button,
    classifier: PressClassifier,
    program: usize,
    toggle: u8,
    brightness: u8,
}

impl<const PROGRAMS: usize> ProgramCycler<PROGRAMS> {
    /// Starts on the last program so the first tap selects program 0, and with the
    /// controller at 127 so the first hold sends 0.
    ///
    /// Fails if the controller number or the program count does not fit in a MIDI data
    /// byte, so that nothing out of range ever reaches the encoder.
    pub fn new(settings: CyclerSettings<PROGRAMS>) -> Result<Self, MidiError> {
        assert!(PROGRAMS > 0);

        let last_program = u8::try_from(PROGRAMS - 1).unwrap_or(u8::MAX);
        MidiEvent::program_change(last_program)?;
        MidiEvent::control_change(settings.toggle_controller, CONTROL_MAX)?;

        Ok(Self {
            button: Button::new(settings.pin, settings.stable_samples),
            classifier: PressClassifier::new(settings.long_press),
            program: PROGRAMS - 1,
            toggle: CONTROL_MAX,
            brightness: settings.brightness,
            settings,
        })
    }

    pub fn program(&self) -> usize {
        self.program
    }

    pub fn toggle(&self) -> u8 {
        self.toggle
    }

    pub fn is_pressed(&self) -> bool {
        self.button.is_pressed()
    }

    fn next_program(&mut self, reaction: &mut Reaction) {
        self.program = (self.program + 1) % PROGRAMS;
        reaction.emit(MidiEvent::ProgramChange(self.program as u8));
        reaction.redraw = true;
    }

    fn flip_toggle(&mut self, reaction: &mut Reaction) {
        self.toggle = if self.toggle == CONTROL_MAX {
            CONTROL_MIN
        } else {
            CONTROL_MAX
        };

        self.brightness = if self.toggle == CONTROL_MIN {
            self.settings.brightness_low
        } else {
            self.settings.brightness_high
        };

        reaction.emit(MidiEvent::ControlChange(
            self.settings.toggle_controller,
            self.toggle,
        ));
        reaction.redraw = true;
    }
}

impl<const PROGRAMS: usize> Pedal<1> for ProgramCycler<PROGRAMS> {
    type Sample = bool;

    fn tick(&mut self, level: bool, now: Instant) -> Reaction {
        let mut reaction = Reaction::default();

        let edge = self.button.sample(level);

        match self.classifier.update(edge, now) {
            Some(Press::Short) => self.next_program(&mut reaction),
            Some(Press::Long) => self.flip_toggle(&mut reaction),
            None => {}
        }

        reaction
    }

    fn frame(&self) -> [RGB8; 1] {
        [self.settings.colors[self.program]]
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }
}
