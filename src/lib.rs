//! TUI Darts (workspace facade crate).
//!
//! Re-exports the member crates as `tui_darts::{core,input,term,types}` and
//! adds the [`session`] layer that ties the keypad, the engine and the event
//! log together for the binary.

pub use tui_darts_core as core;
pub use tui_darts_input as input;
pub use tui_darts_term as term;
pub use tui_darts_types as types;

pub mod session;
pub mod session_log;

pub use session::Session;
pub use session_log::{EventLog, LogEvent, LOG_PATH_ENV};
