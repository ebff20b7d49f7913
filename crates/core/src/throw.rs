//! Throw normalization - turns raw keypad input into a canonical dart.
//!
//! Inputs come from a physical or on-screen keypad and are allowed to be
//! sloppy: a triple bull is downgraded to a single bull instead of being
//! rejected, and a miss ignores whatever multiplier was armed.

use std::fmt::Write as _;

use arrayvec::ArrayString;
use serde::{Deserialize, Serialize};

use crate::types::{Multiplier, BULL, DOUBLE_BULL_ALIAS, MAX_SEGMENT};

/// Display label of a dart ("MISS", "T-20", "D-BULL", ...).
pub type Label = ArrayString<8>;

/// One normalized dart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Throw {
    /// 0 = miss, 1..=20, or 25 for the bull
    pub segment: u8,
    /// Effective multiplier after coercion
    pub multiplier: Multiplier,
}

impl Throw {
    pub const MISS: Throw = Throw {
        segment: 0,
        multiplier: Multiplier::Single,
    };

    pub fn is_miss(&self) -> bool {
        self.segment == 0
    }

    pub fn is_bull(&self) -> bool {
        self.segment == BULL
    }

    /// Score value of the dart (`segment * multiplier`, 0 for a miss).
    pub fn value(&self) -> u32 {
        self.segment as u32 * self.multiplier.factor() as u32
    }

    /// Informational label; never used for scoring.
    pub fn label(&self) -> Label {
        let mut out = Label::new();
        if self.is_miss() {
            out.push_str("MISS");
        } else if self.is_bull() {
            // "D-BULL" is the longest label and fits the buffer.
            let _ = write!(out, "{}-BULL", self.multiplier.prefix());
        } else {
            let _ = write!(out, "{}-{}", self.multiplier.prefix(), self.segment);
        }
        out
    }
}

/// Normalize a raw `(segment, multiplier)` pair.
///
/// Returns `None` when either value lies outside the board: the engines treat
/// that as a silent no-op.
///
/// # Examples
///
/// ```
/// use tui_darts_core::{normalize, Throw};
/// use tui_darts_core::types::Multiplier;
///
/// let t = normalize(20, 3).unwrap();
/// assert_eq!(t.value(), 60);
/// assert_eq!(t.label().as_str(), "T-20");
///
/// // Triple bull does not exist and is read as a single bull.
/// let bull = normalize(25, 3).unwrap();
/// assert_eq!(bull.multiplier, Multiplier::Single);
/// assert_eq!(bull.value(), 25);
///
/// assert_eq!(normalize(0, 2), Some(Throw::MISS));
/// assert_eq!(normalize(21, 1), None);
/// ```
pub fn normalize(segment: u8, multiplier: u8) -> Option<Throw> {
    let multiplier = Multiplier::from_u8(multiplier)?;

    match segment {
        0 => Some(Throw::MISS),
        1..=MAX_SEGMENT => Some(Throw {
            segment,
            multiplier,
        }),
        BULL => Some(Throw {
            segment: BULL,
            multiplier: match multiplier {
                Multiplier::Triple => Multiplier::Single,
                m => m,
            },
        }),
        DOUBLE_BULL_ALIAS => Some(Throw {
            segment: BULL,
            multiplier: Multiplier::Double,
        }),
        _ => None,
    }
}
