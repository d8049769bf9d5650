//! Footswitch timelines for the simulator.
//!
//! A script is a comma separated list of steps:
//!
//! * `press:<button>:<ms>` holds footswitch `<button>` down for `<ms>` milliseconds
//!   and then lets go of it for one polling tick, so two presses in a row are two
//!   presses.
//! * `idle:<ms>` keeps every footswitch released for `<ms>` milliseconds.

use std::str::FromStr;

use thiserror::Error;

/// Longest single step, ten minutes of footswitch time.
pub const MAX_STEP_MS: u64 = 10 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Press { button: usize, ms: u64 },
    Idle { ms: u64 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown step `{0}`, expected `press:<button>:<ms>` or `idle:<ms>`")]
    UnknownStep(String),
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("button {button} does not exist, this pedal has {buttons}")]
    NoSuchButton { button: usize, buttons: usize },
    #[error("a step of {ms} ms is too long, at most {max} ms is allowed")]
    TooLong { ms: u64, max: u64 },
}

impl FromStr for Step {
    type Err = ScriptError;

    fn from_str(step: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = step.trim().split(':').collect();

        match parts.as_slice() {
            ["press", button, ms] => Ok(Step::Press {
                button: number(button)?,
                ms: number(ms)?,
            }),
            ["idle", ms] => Ok(Step::Idle { ms: number(ms)? }),
            _ => Err(ScriptError::UnknownStep(step.trim().to_string())),
        }
    }
}

fn number<T: FromStr>(text: &str) -> Result<T, ScriptError> {
    text.parse()
        .map_err(|_| ScriptError::NotANumber(text.to_string()))
}

/// Parses a whole script and checks every button index against the pedal it is for.
pub fn parse(script: &str, buttons: usize) -> Result<Vec<Step>, ScriptError> {
    let steps = script
        .split(',')
        .filter(|step| !step.trim().is_empty())
        .map(str::parse)
        .collect::<Result<Vec<Step>, _>>()?;

    for step in &steps {
        let ms = match *step {
            Step::Press { button, ms } => {
                if button >= buttons {
                    return Err(ScriptError::NoSuchButton { button, buttons });
                }
                ms
            }
            Step::Idle { ms } => ms,
        };

        if ms > MAX_STEP_MS {
            return Err(ScriptError::TooLong {
                ms,
                max: MAX_STEP_MS,
            });
        }
    }

    Ok(steps)
}

/// Expands the steps into one sample of `N` pin levels per polling tick, active low.
pub fn samples<const N: usize>(steps: &[Step], tick_ms: u64) -> Vec<[bool; N]> {
    let mut samples = Vec::new();

    for step in steps {
        match *step {
            Step::Press { button, ms } => {
                let mut levels = [true; N];
                levels[button] = false;
                samples.extend(std::iter::repeat(levels).take(ticks(ms, tick_ms)));
                samples.push([true; N]);
            }
            Step::Idle { ms } => {
                samples.extend(std::iter::repeat([true; N]).take(ticks(ms, tick_ms)));
            }
        }
    }

    samples
}

fn ticks(ms: u64, tick_ms: u64) -> usize {
    ms.div_ceil(tick_ms) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let steps = parse("press:0:50, idle:200,press:2:600", 3).unwrap();

        assert_eq!(
            steps,
            vec![
                Step::Press { button: 0, ms: 50 },
                Step::Idle { ms: 200 },
                Step::Press { button: 2, ms: 600 },
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse("hold:0:50", 1),
            Err(ScriptError::UnknownStep("hold:0:50".to_string()))
        );
        assert_eq!(
            parse("idle:soon", 1),
            Err(ScriptError::NotANumber("soon".to_string()))
        );
        assert_eq!(
            parse("press:1:50", 1),
            Err(ScriptError::NoSuchButton {
                button: 1,
                buttons: 1
            })
        );
        assert_eq!(parse("", 1), Ok(vec![]));
    }

    #[test]
    fn test_huge_steps_are_rejected_before_expanding() {
        assert_eq!(
            parse("press:0:18446744073709551615", 1),
            Err(ScriptError::TooLong {
                ms: u64::MAX,
                max: MAX_STEP_MS
            })
        );
        assert_eq!(
            parse("idle:600001", 1),
            Err(ScriptError::TooLong {
                ms: 600_001,
                max: MAX_STEP_MS
            })
        );
        assert!(parse("idle:600000", 1).is_ok());
    }

    #[test]
    fn test_samples_release_after_each_press() {
        let steps = [
            Step::Press { button: 1, ms: 25 },
            Step::Press { button: 1, ms: 10 },
            Step::Idle { ms: 20 },
        ];

        let samples = samples::<3>(&steps, 10);

        let pressed = [true, false, true];
        let released = [true; 3];
        assert_eq!(
            samples,
            vec![
                pressed, pressed, pressed, released, pressed, released, released, released
            ]
        );
    }
}
