//! Input script parsing for the simulator.

use maru::{InputEvent, Key};
use maru_error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

/// One step of a simulation script.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    /// Deliver an input event
    Event(InputEvent),
    /// Click the timeline at a fraction of its width
    TimelineClick(f64),
    /// Let time pass
    Wait(Duration),
    /// Start the guided tour
    StartTour,
}

impl FromStr for ScriptStep {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s, None),
        };

        let step = match (name, arg) {
            ("wheel", Some(delta)) => ScriptStep::Event(InputEvent::Wheel {
                delta_y: number(s, delta)?,
            }),
            ("key", Some(key)) => ScriptStep::Event(InputEvent::Key(
                Key::from_str(key)
                    .map_err(|_| ConfigError::new(format!("Unknown key in '{s}'")))?,
            )),
            ("click", Some(pct)) => ScriptStep::TimelineClick(number(s, pct)?),
            ("wait", Some(ms)) => {
                let ms = ms
                    .parse::<u64>()
                    .map_err(|_| ConfigError::new(format!("Invalid milliseconds in '{s}'")))?;
                ScriptStep::Wait(Duration::from_millis(ms))
            }
            ("landmark", Some(at)) => {
                let parsed = at
                    .split_once('.')
                    .and_then(|(c, l)| Some((c.parse().ok()?, l.parse().ok()?)));
                let Some((chapter, landmark)) = parsed else {
                    return Err(ConfigError::new(format!(
                        "Expected landmark:<chapter>.<index> in '{s}'"
                    )));
                };
                ScriptStep::Event(InputEvent::LandmarkActivate { chapter, landmark })
            }
            ("sound", None) => ScriptStep::Event(InputEvent::SoundToggle),
            ("dismiss", None) => ScriptStep::Event(InputEvent::DetailDismiss),
            ("tour", None) => ScriptStep::StartTour,
            ("tour-dismiss", None) => ScriptStep::Event(InputEvent::TourDismiss),
            _ => return Err(ConfigError::new(format!("Unknown script step '{s}'"))),
        };
        Ok(step)
    }
}

fn number(step: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::new(format!("Invalid number in '{step}'")))
}

/// Parse a comma-separated script. Blank entries are skipped.
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, ConfigError> {
    script
        .split(',')
        .filter(|step| !step.trim().is_empty())
        .map(str::parse)
        .collect()
}
