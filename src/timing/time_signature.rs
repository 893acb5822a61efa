use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time signature: beats per bar over the note value that carries one beat.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSignature {
    /// Number of beats per bar (numerator)
    pub numerator: u32,
    /// Note value that gets one beat (denominator: 4 = quarter, 8 = eighth)
    pub denominator: u32,
}

impl TimeSignature {
    /// Standard 4/4 time
    pub const FOUR_FOUR: TimeSignature = TimeSignature {
        numerator: 4,
        denominator: 4,
    };

    /// 3/4 time (waltz)
    pub const THREE_FOUR: TimeSignature = TimeSignature {
        numerator: 3,
        denominator: 4,
    };

    /// 6/8 time (compound duple)
    pub const SIX_EIGHT: TimeSignature = TimeSignature {
        numerator: 6,
        denominator: 8,
    };

    /// 2/2 time (cut time)
    pub const TWO_TWO: TimeSignature = TimeSignature {
        numerator: 2,
        denominator: 2,
    };

    /// Create a new time signature.
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// How many quarter notes one beat of this signature occupies.
    ///
    /// Denominator 4 gives 1.0, denominator 8 gives 0.5, denominator 2 gives
    /// 2.0. Callers validate the denominator before taking the ratio.
    pub fn beat_note_value(&self) -> f64 {
        4.0 / self.denominator as f64
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
