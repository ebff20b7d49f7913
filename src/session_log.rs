//! JSONL event log for scoring sessions.
//!
//! Enabled by setting `DARTS_LOG_PATH`. Each line is one JSON object:
//!
//! ```text
//! {"seq":3,"event":"throw","action":{"type":"throw","segment":20,"multiplier":3},"snapshot":{...}}
//! {"seq":9,"event":"game_end","snapshot":{...},"summary":{"game":"01 - 301",...}}
//! ```
//!
//! Write failures disable the log instead of interrupting play.

use std::env;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{EngineSnapshot, GameSummary};
use crate::types::PadAction;

pub const LOG_PATH_ENV: &str = "DARTS_LOG_PATH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogEvent {
    Throw,
    Undo,
    NextRound,
    RetryRound,
    Restart,
    GameEnd,
}

impl LogEvent {
    pub fn for_action(action: &PadAction) -> Self {
        match action {
            PadAction::Throw { .. } => LogEvent::Throw,
            PadAction::Undo => LogEvent::Undo,
            PadAction::NextRound => LogEvent::NextRound,
            PadAction::RetryRound => LogEvent::RetryRound,
            PadAction::Restart => LogEvent::Restart,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogRecord<'a> {
    pub seq: u64,
    pub event: LogEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'a PadAction>,
    pub snapshot: &'a EngineSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<&'a GameSummary>,
}

/// Append-only JSON lines sink.
pub struct EventLog<W: Write = BufWriter<File>> {
    out: W,
    buf: Vec<u8>,
    seq: u64,
    broken: bool,
}

impl EventLog<BufWriter<File>> {
    /// Open (append) the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self::with_writer(BufWriter::new(file)))
    }

    /// `Ok(None)` when `DARTS_LOG_PATH` is unset or blank.
    pub fn from_env() -> Result<Option<Self>> {
        let path = env::var(LOG_PATH_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        match path {
            Some(path) => Self::open(path).map(Some),
            None => Ok(None),
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(1024),
            seq: 0,
            broken: false,
        }
    }

    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Records written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Write one line. After the first I/O error the log goes quiet and the
    /// error is returned once.
    pub fn record(
        &mut self,
        event: LogEvent,
        action: Option<&PadAction>,
        snapshot: &EngineSnapshot,
        summary: Option<&GameSummary>,
    ) -> io::Result<()> {
        if self.broken {
            return Ok(());
        }

        self.seq += 1;
        let rec = LogRecord {
            seq: self.seq,
            event,
            action,
            snapshot,
            summary,
        };

        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &rec)?;
        self.buf.push(b'\n');

        let res = self
            .out
            .write_all(&self.buf)
            .and_then(|()| self.out.flush());
        if res.is_err() {
            self.broken = true;
        }
        res
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DartsEngine, ZeroOneEngine};

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_json_object_per_line() {
        let mut e = ZeroOneEngine::new(301, 15);
        let mut log = EventLog::with_writer(Vec::new());

        let action = PadAction::Throw {
            segment: 20,
            multiplier: 3,
        };
        e.throw_dart(20, 3);
        log.record(LogEvent::Throw, Some(&action), &e.snapshot(), None)
            .unwrap();
        e.undo();
        log.record(LogEvent::Undo, Some(&PadAction::Undo), &e.snapshot(), None)
            .unwrap();

        let text = String::from_utf8(log.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["seq"], 1);
        assert_eq!(lines[0]["event"], "throw");
        assert_eq!(lines[0]["action"]["segment"], 20);
        assert_eq!(lines[0]["snapshot"]["board"]["remaining"], 241);
        assert_eq!(lines[1]["event"], "undo");
        assert_eq!(lines[1]["snapshot"]["board"]["remaining"], 301);
        assert!(lines[1].get("summary").is_none());
    }

    #[test]
    fn write_failure_disables_log() {
        let e = ZeroOneEngine::new(301, 15);
        let mut log = EventLog::with_writer(FailingWriter);
        assert!(log
            .record(LogEvent::Restart, None, &e.snapshot(), None)
            .is_err());
        assert!(log.is_broken());
        assert!(log
            .record(LogEvent::Restart, None, &e.snapshot(), None)
            .is_ok());
        assert_eq!(log.seq(), 1);
    }

    #[test]
    fn event_names() {
        assert_eq!(
            LogEvent::for_action(&PadAction::RetryRound),
            LogEvent::RetryRound
        );
        assert_eq!(
            serde_json::to_string(&LogEvent::GameEnd).unwrap(),
            "\"game_end\""
        );
        assert_eq!(
            serde_json::to_string(&LogEvent::NextRound).unwrap(),
            "\"next_round\""
        );
    }
}
