//! A play session: the loop that feeds device input into the engine.
//!
//! The session owns the input devices it was handed and releases them
//! exactly once, whether the loop ends normally, a collaborator fails,
//! or the session is simply dropped.

use serde::Serialize;

use crossfire_core::enums::GamePhase;
use crossfire_core::error::CollaboratorError;
use crossfire_core::events::CombatEvent;
use crossfire_core::state::{ScoreView, SessionSnapshot};
use crossfire_sim::SimulationEngine;

use crate::game_loop::Pacer;
use crate::input::InputSource;

/// When to stop the loop, besides the input source asking to close.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunLimits {
    /// Stop after this many loop iterations.
    pub max_ticks: Option<u64>,
    /// Stop as soon as the roster becomes empty.
    pub stop_when_cleared: bool,
    /// Pace ticks to wall-clock time instead of running flat out.
    pub realtime: bool,
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    Closed,
    TickLimit,
    Cleared,
}

/// What a finished session reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub exit: ExitReason,
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub phase: GamePhase,
    pub score: ScoreView,
    pub enemies_remaining: usize,
}

pub struct Session<I: InputSource> {
    engine: SimulationEngine,
    input: I,
    released: bool,
}

impl<I: InputSource> Session<I> {
    pub fn new(engine: SimulationEngine, input: I) -> Self {
        Self {
            engine,
            input,
            released: false,
        }
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Run the loop until a limit is hit or the input source closes.
    ///
    /// Every produced snapshot is handed to `on_snapshot`. Input devices
    /// are released before this returns, on success and on error, so a
    /// session runs at most once.
    pub fn run(
        &mut self,
        limits: RunLimits,
        mut on_snapshot: impl FnMut(&SessionSnapshot),
    ) -> Result<SessionSummary, CollaboratorError> {
        if self.released {
            return Err(CollaboratorError::Input(
                "input devices already released".into(),
            ));
        }
        let result = self.run_loop(limits, &mut on_snapshot);
        self.release();
        let exit = result?;

        let summary = self.summary(exit);
        log::info!(
            "session ended ({:?}) after {} ticks: {} kills, {} misses",
            summary.exit,
            summary.ticks,
            summary.score.kills,
            summary.score.misses
        );
        Ok(summary)
    }

    /// Release the input devices. Later calls do nothing.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.input.release();
        log::info!("input devices released");
    }

    fn run_loop(
        &mut self,
        limits: RunLimits,
        on_snapshot: &mut dyn FnMut(&SessionSnapshot),
    ) -> Result<ExitReason, CollaboratorError> {
        let mut pacer = limits
            .realtime
            .then(|| Pacer::from_dt(self.engine.config().dt));
        let mut iterations = 0u64;

        loop {
            if self.input.close_requested() {
                return Ok(ExitReason::Closed);
            }
            if limits.max_ticks.is_some_and(|max| iterations >= max) {
                return Ok(ExitReason::TickLimit);
            }

            let sample = self.input.sample_input()?;
            let snapshot = self.engine.tick(&sample)?;
            iterations += 1;
            on_snapshot(&snapshot);

            let cleared = snapshot.phase == GamePhase::Cleared
                || snapshot.events.contains(&CombatEvent::RosterCleared);
            if limits.stop_when_cleared && cleared {
                return Ok(ExitReason::Cleared);
            }

            if let Some(pacer) = pacer.as_mut() {
                pacer.wait();
            }
        }
    }

    fn summary(&self, exit: ExitReason) -> SessionSummary {
        let time = self.engine.time();
        SessionSummary {
            exit,
            ticks: time.tick,
            elapsed_secs: time.elapsed_secs,
            phase: self.engine.phase(),
            score: self.engine.score(),
            enemies_remaining: self.engine.enemy_count(),
        }
    }
}

impl<I: InputSource> Drop for Session<I> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crossfire_core::input::InputSample;
    use crossfire_sim::SimConfig;

    use super::*;
    use crate::input::ScriptedInput;

    /// Input source that counts releases and can be told to fail.
    struct CountingInput {
        releases: Rc<Cell<usize>>,
        fail_after: Option<usize>,
        sampled: usize,
    }

    impl CountingInput {
        fn new(releases: Rc<Cell<usize>>) -> Self {
            Self {
                releases,
                fail_after: None,
                sampled: 0,
            }
        }
    }

    impl InputSource for CountingInput {
        fn sample_input(&mut self) -> Result<InputSample, CollaboratorError> {
            if self.fail_after.is_some_and(|n| self.sampled >= n) {
                return Err(CollaboratorError::Input("keyboard unplugged".into()));
            }
            self.sampled += 1;
            Ok(InputSample::idle())
        }

        fn release(&mut self) {
            self.releases.set(self.releases.get() + 1);
        }
    }

    fn engine() -> SimulationEngine {
        SimulationEngine::new(SimConfig::default()).unwrap()
    }

    #[test]
    fn test_tick_limit_releases_once() {
        let releases = Rc::new(Cell::new(0));
        let mut session = Session::new(engine(), CountingInput::new(Rc::clone(&releases)));

        let limits = RunLimits {
            max_ticks: Some(30),
            ..Default::default()
        };
        let summary = session.run(limits, |_| {}).unwrap();
        assert_eq!(summary.exit, ExitReason::TickLimit);
        assert_eq!(summary.ticks, 30);
        assert_eq!(releases.get(), 1);

        drop(session);
        assert_eq!(releases.get(), 1, "drop after run must not release again");
    }

    #[test]
    fn test_second_run_is_refused() {
        let releases = Rc::new(Cell::new(0));
        let mut session = Session::new(engine(), CountingInput::new(Rc::clone(&releases)));
        let limits = RunLimits {
            max_ticks: Some(3),
            ..Default::default()
        };
        session.run(limits, |_| {}).unwrap();

        let mut seen = 0;
        let err = session.run(limits, |_| seen += 1).unwrap_err();
        assert_eq!(
            err,
            CollaboratorError::Input("input devices already released".into())
        );
        assert_eq!(seen, 0);
        assert_eq!(session.engine().time().tick, 3, "released devices are not sampled");
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_input_failure_propagates_and_releases() {
        let releases = Rc::new(Cell::new(0));
        let mut input = CountingInput::new(Rc::clone(&releases));
        input.fail_after = Some(5);
        let mut session = Session::new(engine(), input);

        let err = session.run(RunLimits::default(), |_| {}).unwrap_err();
        assert_eq!(err, CollaboratorError::Input("keyboard unplugged".into()));
        assert!(session.is_released());
        assert_eq!(releases.get(), 1);
        assert_eq!(session.engine().time().tick, 5);
    }

    #[test]
    fn test_drop_without_run_releases() {
        let releases = Rc::new(Cell::new(0));
        {
            let _session = Session::new(engine(), CountingInput::new(Rc::clone(&releases)));
        }
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_closed_script_ends_session() {
        let input = ScriptedInput::new(vec![InputSample::walk(1.0, 0.0); 10], false);
        let mut session = Session::new(engine(), input);

        let mut seen = 0;
        let summary = session.run(RunLimits::default(), |_| seen += 1).unwrap();
        assert_eq!(summary.exit, ExitReason::Closed);
        assert_eq!(summary.ticks, 10);
        assert_eq!(seen, 10);
        assert!(session.engine().player_position().x > 0.0);
    }

    #[test]
    fn test_trigger_taps_clear_reference_enemy() {
        let config = SimConfig {
            end_when_cleared: true,
            ..Default::default()
        };
        let mut session = Session::new(
            SimulationEngine::new(config).unwrap(),
            ScriptedInput::trigger_taps(20),
        );

        let limits = RunLimits {
            max_ticks: Some(600),
            stop_when_cleared: true,
            realtime: false,
        };
        let summary = session.run(limits, |_| {}).unwrap();
        assert_eq!(summary.exit, ExitReason::Cleared);
        assert_eq!(summary.phase, GamePhase::Cleared);
        assert_eq!(summary.score.kills, 1);
        assert_eq!(summary.enemies_remaining, 0);
    }

    #[test]
    fn test_summary_serializes() {
        let mut session = Session::new(engine(), ScriptedInput::trigger_taps(5));
        let limits = RunLimits {
            max_ticks: Some(3),
            ..Default::default()
        };
        let summary = session.run(limits, |_| {}).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["exit"], "tick_limit");
        assert_eq!(json["ticks"], 3);
        assert_eq!(json["score"]["shots_fired"], 1);
    }
}
