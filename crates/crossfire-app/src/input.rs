//! Input sources: where each tick's [`InputSample`] comes from.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crossfire_core::error::CollaboratorError;
use crossfire_core::input::InputSample;

/// A device layer that can be sampled once per tick.
pub trait InputSource {
    /// Capture the current device state.
    fn sample_input(&mut self) -> Result<InputSample, CollaboratorError>;

    /// Whether the owner of the devices (window, script) asked to stop.
    fn close_requested(&self) -> bool {
        false
    }

    /// Release the underlying devices. Called exactly once by the session.
    fn release(&mut self) {}
}

/// On-disk form of a scripted input sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputScript {
    /// Start over from the first sample instead of closing at the end.
    #[serde(default)]
    pub repeat: bool,
    pub samples: Vec<InputSample>,
}

/// Replays a fixed sequence of samples, one per tick.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    samples: Vec<InputSample>,
    cursor: usize,
    repeat: bool,
    released: bool,
}

impl ScriptedInput {
    pub fn new(samples: Vec<InputSample>, repeat: bool) -> Self {
        Self {
            samples,
            cursor: 0,
            repeat,
            released: false,
        }
    }

    /// Stand still and tap the trigger every `period` ticks, forever.
    pub fn trigger_taps(period: usize) -> Self {
        let period = period.max(2);
        let samples = (0..period)
            .map(|i| {
                if i == 0 {
                    InputSample::fire()
                } else {
                    InputSample::idle()
                }
            })
            .collect();
        Self::new(samples, true)
    }

    /// Load an [`InputScript`] from a JSON file.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading input script {}", path.display()))?;
        let script: InputScript = serde_json::from_str(&text)
            .with_context(|| format!("parsing input script {}", path.display()))?;
        log::info!(
            "loaded {} scripted samples from {}",
            script.samples.len(),
            path.display()
        );
        Ok(Self::new(script.samples, script.repeat))
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl InputSource for ScriptedInput {
    fn sample_input(&mut self) -> Result<InputSample, CollaboratorError> {
        if self.released {
            return Err(CollaboratorError::Input("input devices already released".into()));
        }
        if self.cursor >= self.samples.len() {
            if !self.repeat || self.samples.is_empty() {
                return Ok(InputSample::idle());
            }
            self.cursor = 0;
        }
        let sample = self.samples[self.cursor];
        self.cursor += 1;
        Ok(sample)
    }

    fn close_requested(&self) -> bool {
        !self.repeat && self.cursor >= self.samples.len()
    }

    fn release(&mut self) {
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_plays_once_then_closes() {
        let mut input = ScriptedInput::new(vec![InputSample::fire(), InputSample::walk(1.0, 0.0)], false);
        assert!(!input.close_requested());
        assert_eq!(input.sample_input().unwrap(), InputSample::fire());
        assert_eq!(input.sample_input().unwrap(), InputSample::walk(1.0, 0.0));
        assert!(input.close_requested());
        assert_eq!(input.sample_input().unwrap(), InputSample::idle());
    }

    #[test]
    fn test_trigger_taps_repeat() {
        let mut input = ScriptedInput::trigger_taps(3);
        let pressed: Vec<bool> = (0..7)
            .map(|_| input.sample_input().unwrap().fire_pressed)
            .collect();
        assert_eq!(pressed, vec![true, false, false, true, false, false, true]);
        assert!(!input.close_requested());
    }

    #[test]
    fn test_released_input_fails() {
        let mut input = ScriptedInput::trigger_taps(2);
        input.release();
        assert!(input.is_released());
        assert!(matches!(
            input.sample_input(),
            Err(CollaboratorError::Input(_))
        ));
    }

    #[test]
    fn test_script_from_json_file() {
        let path = std::env::temp_dir().join(format!("crossfire-script-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"samples":[{"fire_pressed":true},{"move_axes":[0.0,1.0]}]}"#,
        )
        .unwrap();

        let mut input = ScriptedInput::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(input.sample_input().unwrap().fire_pressed);
        assert_eq!(input.sample_input().unwrap(), InputSample::walk(0.0, 1.0));
        assert!(input.close_requested());
    }

    #[test]
    fn test_missing_script_file_has_context() {
        let err = ScriptedInput::from_json_file(Path::new("/nonexistent/script.json")).unwrap_err();
        assert!(err.to_string().contains("reading input script"), "got {err}");
    }
}
