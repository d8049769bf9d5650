/// Accepts a sampled level once it has been seen for `stable_samples` consecutive updates
/// and reports the transitions of the accepted level.
///
/// With `stable_samples == 1` every change between two samples is accepted right away,
/// so the sampling interval alone filters out bounces.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    stable_samples: u32,
    current_stable_time: u32,
    last_state: bool,
    stable_state: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

impl Debouncer {
    /// `initial` is the level the input is assumed to rest at before the first sample.
    pub fn new(stable_samples: u32, initial: bool) -> Self {
        let stable_samples = stable_samples.max(1);
        Self {
            stable_samples,
            current_stable_time: stable_samples,
            last_state: initial,
            stable_state: initial,
        }
    }

    pub fn update(&mut self, state: bool) -> Option<Edge> {
        if state != self.last_state {
            self.current_stable_time = 1;
        } else {
            self.current_stable_time = self.current_stable_time.saturating_add(1);
        }

        self.last_state = state;

        if self.current_stable_time < self.stable_samples || state == self.stable_state {
            return None;
        }

        self.stable_state = state;

        if state {
            Some(Edge::Rising)
        } else {
            Some(Edge::Falling)
        }
    }

    /// The last accepted level, regardless of whether the input is bouncing right now.
    pub fn level(&self) -> bool {
        self.stable_state
    }

    pub fn is_high(&self) -> Result<bool, DebounceError> {
        self.settled().map(|_| self.stable_state)
    }

    pub fn is_low(&self) -> Result<bool, DebounceError> {
        self.settled().map(|_| !self.stable_state)
    }

    fn settled(&self) -> Result<(), DebounceError> {
        if self.current_stable_time >= self.stable_samples {
            Ok(())
        } else {
            Err(DebounceError::NotStable(
                self.stable_samples - self.current_stable_time,
            ))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceError {
    /// Samples still needed before the input counts as settled
    NotStable(u32),
}
