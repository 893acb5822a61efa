use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::time_signature::TimeSignature;

/// A point in musical time, addressed as bar and beat within the bar.
///
/// Both are 1-based: bar 1, beat 1 is the first downbeat of the piece. The
/// beat may be fractional (beat 1.5 is the "and" of one).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeatPosition {
    /// Bar number (1-based)
    pub bar: u32,
    /// Beat within the bar (1-based, fractional allowed)
    pub beat: f64,
}

impl BeatPosition {
    /// Create a new bar/beat address.
    pub fn new(bar: u32, beat: f64) -> Self {
        Self { bar, beat }
    }
}

/// Resolved wall-clock position of a bar/beat address.
///
/// Echoes the inputs alongside the derived millisecond offset so a display
/// layer can print the whole answer from one record.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionMs {
    /// Offset from bar 1, beat 1 in milliseconds
    pub ms: f64,
    /// Bar of the address (echoed from the request)
    pub bar: u32,
    /// Beat of the address (echoed from the request)
    pub beat: f64,
    /// Governing time signature
    pub signature: TimeSignature,
    /// Zero-based count of beats preceding the address
    pub beats_elapsed: f64,
}

impl fmt::Display for PositionMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bar {}, Beat {} = {:.2} ms", self.bar, self.beat, self.ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_to_two_decimals() {
        let pos = PositionMs {
            ms: 2000.0,
            bar: 2,
            beat: 1.0,
            signature: TimeSignature::FOUR_FOUR,
            beats_elapsed: 4.0,
        };
        assert_eq!(pos.to_string(), "Bar 2, Beat 1 = 2000.00 ms");
    }

    #[test]
    fn fractional_beats_print_as_typed() {
        let pos = PositionMs {
            ms: 250.0,
            bar: 1,
            beat: 1.5,
            signature: TimeSignature::FOUR_FOUR,
            beats_elapsed: 0.5,
        };
        assert_eq!(pos.to_string(), "Bar 1, Beat 1.5 = 250.00 ms");
    }
}
