//! Hardware independent logic of the MIDI Baby foot controllers.
//!
//! The firmware for both pedals is a single polling loop: sample the footswitches,
//! debounce and classify the presses, emit MIDI messages to every transport and
//! redraw the LEDs. Everything in here is driven by explicit samples and timestamps
//! so it runs the same on the RP2040 as in the host tests and the simulator.
#![cfg_attr(not(test), no_std)]

pub mod boot;
pub mod button;
pub mod classifier;
pub mod consts;
pub mod cycler;
pub mod debouncer;
pub mod dispatch;
pub mod indicator;
pub mod midi;
pub mod selector;
pub mod sink;
pub mod startup;

/// Monotonic timestamp in microseconds, the native resolution of the RP2040 timer.
pub type Instant = fugit::TimerInstantU64<1_000_000>;
pub type Duration = fugit::MicrosDurationU64;
