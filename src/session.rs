//! Scoring session: one configured game fed by the keypad.
//!
//! The session owns the engine, the keypad accumulator and the optional event
//! log. It also keeps the summaries of games finished since startup; a game
//! counts as finished once the engine reaches `finished` or `gameover`.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::core::{DartsEngine, EngineSnapshot, GameConfig, GameEngine, GameSummary};
use crate::input::{InputPad, PadKey};
use crate::session_log::{EventLog, LogEvent};
use crate::types::PadAction;

pub struct Session<W: Write = BufWriter<File>> {
    engine: GameEngine,
    pad: InputPad,
    log: Option<EventLog<W>>,
    history: Vec<GameSummary>,
    /// Set while the current game's summary sits at the end of `history`.
    ended: bool,
    notices: Vec<String>,
}

impl Session<BufWriter<File>> {
    /// Session logging to `DARTS_LOG_PATH` when set. An unusable path is
    /// reported through [`Session::take_notices`] and logging stays off.
    pub fn from_env(config: GameConfig) -> Self {
        let mut session = Session::new(config);
        match EventLog::from_env() {
            Ok(log) => session.log = log,
            Err(e) => session
                .notices
                .push(format!("[Session] {:#}; event log disabled", e)),
        }
        session
    }
}

impl<W: Write> Session<W> {
    pub fn new(config: GameConfig) -> Self {
        Self {
            engine: GameEngine::new(config),
            pad: InputPad::new(),
            log: None,
            history: Vec::new(),
            ended: false,
            notices: Vec::new(),
        }
    }

    pub fn with_log(config: GameConfig, log: EventLog<W>) -> Self {
        let mut session = Self::new(config);
        session.log = Some(log);
        session
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn pad(&self) -> &InputPad {
        &self.pad
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        self.engine.snapshot()
    }

    /// Summaries of finished games, oldest first.
    pub fn history(&self) -> &[GameSummary] {
        &self.history
    }

    pub fn log(&self) -> Option<&EventLog<W>> {
        self.log.as_ref()
    }

    pub fn into_log(self) -> Option<EventLog<W>> {
        self.log
    }

    /// Operator messages collected so far (drained).
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// Feed one keypad key. Returns whether the engine state changed.
    pub fn press(&mut self, key: PadKey) -> bool {
        let mut changed = false;
        for action in self.pad.press(key) {
            changed |= self.apply(action);
        }
        changed
    }

    /// Apply one action. Rejected actions are silent no-ops and are not logged.
    pub fn apply(&mut self, action: PadAction) -> bool {
        let changed = match action {
            PadAction::Throw {
                segment,
                multiplier,
            } => self.engine.throw_dart(segment, multiplier),
            PadAction::Undo => self.engine.undo(),
            PadAction::NextRound => self.engine.next_round(),
            PadAction::RetryRound => self.engine.retry_round(),
            PadAction::Restart => {
                self.engine.reset();
                self.pad.clear();
                self.ended = false;
                true
            }
        };
        if !changed {
            return false;
        }

        let snapshot = self.engine.snapshot();
        self.write_log(LogEvent::for_action(&action), Some(&action), &snapshot, None);
        self.track_game_end(&snapshot);
        true
    }

    fn track_game_end(&mut self, snapshot: &EngineSnapshot) {
        let terminal = snapshot.status.is_terminal();
        if terminal && !self.ended {
            let summary = self.engine.summary();
            self.write_log(LogEvent::GameEnd, None, snapshot, Some(&summary));
            self.history.push(summary);
            self.ended = true;
        } else if !terminal && self.ended {
            // The finishing dart was undone; the game is live again.
            self.history.pop();
            self.ended = false;
        } else if terminal {
            // Rounds can still be logged after the finishing dart (Cricket
            // next round at finished); keep the summary current.
            if let Some(last) = self.history.last_mut() {
                *last = self.engine.summary();
            }
        }
    }

    fn write_log(
        &mut self,
        event: LogEvent,
        action: Option<&PadAction>,
        snapshot: &EngineSnapshot,
        summary: Option<&GameSummary>,
    ) {
        let Some(log) = self.log.as_mut() else {
            return;
        };
        if let Err(e) = log.record(event, action, snapshot, summary) {
            self.notices
                .push(format!("[Session] event log write failed: {}; logging disabled", e));
        }
    }
}
