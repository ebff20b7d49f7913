//! Keypad accumulator: turns key presses into session actions.
//!
//! Mirrors a darts scoring keypad:
//! - `d` / `t` arm a double or triple for the next dart; pressing the armed
//!   one again disarms it. A half-typed `1` / `2` is committed first with the
//!   multiplier it was typed under. The arm drops back to single after every
//!   dart.
//! - Segments are typed as one or two digits. A digit that can't start a
//!   longer segment number (`0`, `3`-`9`) is committed at once; `1` and `2`
//!   wait for a second digit or `Enter`.
//! - `b` is the bull, `m` (or a lone `0`) a miss.
//! - Backspace first clears a half-typed number, otherwise it undoes the last
//!   dart.

use arrayvec::ArrayVec;

use crate::map::PadKey;
use crate::types::{Multiplier, PadAction, BULL, MAX_SEGMENT};

/// Actions emitted by a single key press (at most a flushed digit plus one).
pub type PadOutput = ArrayVec<PadAction, 2>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputPad {
    armed: Multiplier,
    pending: Option<u8>,
}

impl InputPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn armed(&self) -> Multiplier {
        self.armed
    }

    /// Half-typed segment number (`1` or `2`), if any.
    pub fn pending_digit(&self) -> Option<u8> {
        self.pending
    }

    /// Short prompt for the view, e.g. `T-1_` or `D-`.
    pub fn prompt(&self) -> String {
        match self.pending {
            Some(d) => format!("{}-{}_", self.armed.prefix(), d),
            None => format!("{}-", self.armed.prefix()),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn press(&mut self, key: PadKey) -> PadOutput {
        let mut out = PadOutput::new();

        match key {
            PadKey::Digit(d) => self.digit(d, &mut out),
            PadKey::Double => self.arm(Multiplier::Double, &mut out),
            PadKey::Triple => self.arm(Multiplier::Triple, &mut out),
            PadKey::Bull => {
                self.flush(&mut out);
                self.throw(BULL, &mut out);
            }
            PadKey::Miss => {
                self.flush(&mut out);
                self.throw(0, &mut out);
            }
            PadKey::Enter => self.flush(&mut out),
            PadKey::Backspace => {
                if self.pending.take().is_none() {
                    out.push(PadAction::Undo);
                }
            }
            PadKey::Escape => self.clear(),
            PadKey::NextRound => self.command(PadAction::NextRound, &mut out),
            PadKey::RetryRound => self.command(PadAction::RetryRound, &mut out),
            PadKey::Restart => self.command(PadAction::Restart, &mut out),
        }

        out
    }

    fn digit(&mut self, d: u8, out: &mut PadOutput) {
        if let Some(first) = self.pending.take() {
            let segment = first * 10 + d;
            if segment <= MAX_SEGMENT {
                self.throw(segment, out);
                return;
            }
            self.throw(first, out);
        }

        if d * 10 <= MAX_SEGMENT && d != 0 {
            self.pending = Some(d);
        } else {
            self.throw(d, out);
        }
    }

    fn arm(&mut self, m: Multiplier, out: &mut PadOutput) {
        if self.pending.is_some() {
            self.flush(out);
            self.armed = m;
            return;
        }
        self.armed = if self.armed == m { Multiplier::Single } else { m };
    }

    fn flush(&mut self, out: &mut PadOutput) {
        if let Some(d) = self.pending.take() {
            self.throw(d, out);
        }
    }

    fn throw(&mut self, segment: u8, out: &mut PadOutput) {
        out.push(PadAction::Throw {
            segment,
            multiplier: self.armed.factor(),
        });
        self.armed = Multiplier::Single;
    }

    fn command(&mut self, action: PadAction, out: &mut PadOutput) {
        self.clear();
        out.push(action);
    }
}
