use crate::debouncer::{DebounceError, Debouncer, Edge};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEdge {
    Pressed,
    Released,
}

/// An active-low footswitch with a pull-up: the pin reads high while released.
#[derive(Debug, Clone, Copy)]
pub struct Button {
    pin: u8,
    debouncer: Debouncer,
}

impl Button {
    pub fn new(pin: u8, stable_samples: u32) -> Self {
        Self {
            pin,
            debouncer: Debouncer::new(stable_samples, true),
        }
    }

    /// Feeds the raw pin level sampled this tick.
    pub fn sample(&mut self, level: bool) -> Option<ButtonEdge> {
        let edge = self.debouncer.update(level).map(|edge| match edge {
            Edge::Falling => ButtonEdge::Pressed,
            Edge::Rising => ButtonEdge::Released,
        });

        if let Some(edge) = edge {
            log::trace!("GP{}: {:?}", self.pin, edge);
        }

        edge
    }

    pub fn is_pressed(&self) -> bool {
        !self.debouncer.level()
    }

    /// Like [`Button::is_pressed`], but fails while the pin has not settled yet.
    pub fn is_settled_pressed(&self) -> Result<bool, DebounceError> {
        self.debouncer.is_low()
    }
}
