use crate::{button::ButtonEdge, Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Press {
    /// Released before the long press threshold
    Short,
    /// Held for at least the threshold, fires once per hold
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressState {
    Idle,
    Pressed { since: Instant },
    HeldLong,
}

/// Tells short presses from long presses for a single button.
///
/// A short press is only known once the button is released, a long press fires while
/// the button is still down. Releasing after a long press emits nothing.
#[derive(Debug, Clone, Copy)]
pub struct PressClassifier {
    threshold: Duration,
    state: PressState,
}

impl PressClassifier {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            state: PressState::Idle,
        }
    }

    /// Advances the state machine with this tick's edge, if any. `now` must be the
    /// timestamp the sample was taken at.
    pub fn update(&mut self, edge: Option<ButtonEdge>, now: Instant) -> Option<Press> {
        match edge {
            Some(ButtonEdge::Pressed) => self.state = PressState::Pressed { since: now },
            Some(ButtonEdge::Released) => {
                let released_from = core::mem::replace(&mut self.state, PressState::Idle);
                return matches!(released_from, PressState::Pressed { .. }).then_some(Press::Short);
            }
            None => {}
        }

        if let PressState::Pressed { since } = self.state {
            let held_long = now
                .checked_duration_since(since)
                .is_some_and(|held| held >= self.threshold);

            if held_long {
                self.state = PressState::HeldLong;
                return Some(Press::Long);
            }
        }

        None
    }

    pub fn is_held(&self) -> bool {
        self.state != PressState::Idle
    }
}
