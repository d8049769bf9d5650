use std::convert::Infallible;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use embedded_hal::blocking::delay::DelayMs;
use env_logger::{Builder, Env};
use log::{info, LevelFilter};
use midibaby_core::{
    boot,
    consts::POLL_INTERVAL,
    cycler::{CyclerSettings, ProgramCycler},
    dispatch::{self, Pedal},
    indicator::Indicator,
    midi::Channel,
    selector::{ProgramSelector, SelectorSettings},
    sink::{FanOut, MidiTransport},
    startup, Instant,
};
use smart_leds::{SmartLedsWrite, RGB8};

mod script;

/// Replays a footswitch timeline through one of the MIDI Baby pedals and logs what
/// the firmware would send and show
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which pedal to simulate
    #[arg(value_enum)]
    pedal: Variant,

    /// Comma separated steps, `press:<button>:<ms>` or `idle:<ms>`
    script: String,

    /// Hold the maintenance button at power up (baby3 only)
    #[arg(long)]
    maintenance: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    /// One footswitch cycling four programs
    Baby,
    /// Three footswitches, one program each
    Baby3,
}

/// Prints every message instead of sending it over a cable.
struct LoggingTransport {
    name: &'static str,
}

impl MidiTransport for LoggingTransport {
    type Error = Infallible;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let hex: Vec<String> = bytes.iter().map(|byte| format!("{byte:02X}")).collect();
        info!("{:>6} <- {}", self.name, hex.join(" "));
        Ok(())
    }
}

/// Prints every LED frame as it would leave the data pin, after brightness scaling.
struct LoggingPixels;

impl SmartLedsWrite for LoggingPixels {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let pixels: Vec<String> = iterator
            .into_iter()
            .map(|pixel| {
                let RGB8 { r, g, b } = pixel.into();
                format!("#{r:02x}{g:02x}{b:02x}")
            })
            .collect();
        info!("   led  = [{}]", pixels.join(", "));
        Ok(())
    }
}

/// Sleeping is pointless here, the clock is virtual.
struct SkipDelay;

impl DelayMs<u32> for SkipDelay {
    fn delay_ms(&mut self, ms: u32) {
        log::trace!("(waiting {ms} ms)");
    }
}

fn sink() -> FanOut<LoggingTransport, LoggingTransport> {
    FanOut::new(
        LoggingTransport { name: "usb" },
        LoggingTransport { name: "serial" },
        Channel::default(),
    )
}

fn replay<P, const LEDS: usize>(
    pedal: &mut P,
    indicator: &mut Indicator<LoggingPixels, LEDS>,
    samples: Vec<P::Sample>,
) where
    P: Pedal<LEDS>,
{
    let tick_us = POLL_INTERVAL.to_micros();
    let mut sink = sink();

    for (tick, sample) in samples.into_iter().enumerate() {
        let now = Instant::from_ticks(tick as u64 * tick_us);
        let reaction = dispatch::step(pedal, &mut sink, indicator, sample, now);

        if !reaction.is_empty() {
            log::debug!("t = {} ms", now.duration_since_epoch().to_millis());
        }
    }
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or(LevelFilter::Info.to_string())).init();

    let args = Args::parse();
    let tick_ms = POLL_INTERVAL.to_millis();

    match args.pedal {
        Variant::Baby => {
            let settings = CyclerSettings::default();
            let steps = script::parse(&args.script, 1).context("invalid script")?;
            let mut indicator = Indicator::<_, 1>::new(LoggingPixels, settings.brightness);

            info!("MIDI Baby, footswitch on GPIO {}", settings.pin);
            startup::play(
                &mut indicator,
                &mut SkipDelay,
                startup::flash_all(&startup::FLASH_COLORS),
            );

            let mut pedal: ProgramCycler<4> = ProgramCycler::new(settings)
                .map_err(|err| anyhow!("invalid pedal settings: {err:?}"))?;
            let samples = script::samples::<1>(&steps, tick_ms)
                .into_iter()
                .map(|[level]| level)
                .collect();
            replay(&mut pedal, &mut indicator, samples);
        }
        Variant::Baby3 => {
            let settings = SelectorSettings::default();
            let steps = script::parse(&args.script, 3).context("invalid script")?;
            let mut indicator = Indicator::<_, 3>::new(LoggingPixels, settings.brightness);

            info!("MIDI Baby 3, footswitches on GPIO {:?}", settings.pins);
            startup::play(&mut indicator, &mut SkipDelay, startup::chase(&settings.colors));

            if boot::check(!args.maintenance) == boot::BootMode::Bootloader {
                boot::announce(&mut indicator, &mut SkipDelay);
                info!("(the pedal would now reboot into its bootloader)");
                return Ok(());
            }

            let mut pedal: ProgramSelector<3> = ProgramSelector::new(settings);
            replay(&mut pedal, &mut indicator, script::samples::<3>(&steps, tick_ms));
        }
    }

    Ok(())
}
