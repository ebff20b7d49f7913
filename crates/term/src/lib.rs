//! Terminal rendering for the darts scorer.
//!
//! Views draw into a plain [`FrameBuffer`]; [`TerminalRenderer`] flushes it to
//! the terminal with crossterm. No widget toolkit is involved, so layouts are
//! testable as text.

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_darts_core as core;
pub use tui_darts_types as types;

pub use fb::{BoxGlyphs, Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, DrawMode, TerminalRenderer};
pub use view::{mark_glyph, DartsView, Scene, Viewport};
