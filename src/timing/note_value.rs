#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Musical note value, expressed as a multiple of a quarter note.
///
/// The six standard values from whole down to thirty-second, in the order
/// they appear on the selector row of the calculator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValue {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
}

impl NoteValue {
    /// All six values in selector order, longest first.
    pub const ALL: [NoteValue; 6] = [
        NoteValue::Whole,
        NoteValue::Half,
        NoteValue::Quarter,
        NoteValue::Eighth,
        NoteValue::Sixteenth,
        NoteValue::ThirtySecond,
    ];

    /// Length of this note in quarter notes.
    ///
    /// A whole note spans four quarters, a thirty-second an eighth of one.
    pub const fn multiplier(self) -> f64 {
        match self {
            NoteValue::Whole => 4.0,
            NoteValue::Half => 2.0,
            NoteValue::Quarter => 1.0,
            NoteValue::Eighth => 0.5,
            NoteValue::Sixteenth => 0.25,
            NoteValue::ThirtySecond => 0.125,
        }
    }

    /// Selector label with the fraction spelled out.
    pub const fn label(self) -> &'static str {
        match self {
            NoteValue::Whole => "Whole Note (1/1)",
            NoteValue::Half => "Half Note (1/2)",
            NoteValue::Quarter => "Quarter Note (1/4)",
            NoteValue::Eighth => "Eighth Note (1/8)",
            NoteValue::Sixteenth => "Sixteenth Note (1/16)",
            NoteValue::ThirtySecond => "Thirty-second Note (1/32)",
        }
    }

    /// British name, used as the caption for each selector glyph.
    pub const fn british_name(self) -> &'static str {
        match self {
            NoteValue::Whole => "Semibreve",
            NoteValue::Half => "Minim",
            NoteValue::Quarter => "Crotchet",
            NoteValue::Eighth => "Quaver",
            NoteValue::Sixteenth => "Semiquaver",
            NoteValue::ThirtySecond => "Demisemiquaver",
        }
    }

    /// Unicode musical symbol.
    ///
    /// The whole and half glyphs live outside the Basic Multilingual Plane
    /// and need real musical-font coverage to render.
    pub const fn glyph(self) -> &'static str {
        match self {
            NoteValue::Whole => "𝅝",
            NoteValue::Half => "𝅗𝅥",
            NoteValue::Quarter => "♩",
            NoteValue::Eighth => "♪",
            NoteValue::Sixteenth => "♬",
            NoteValue::ThirtySecond => "♫",
        }
    }

    /// Plain-ASCII stand-in for terminals without Unicode support.
    pub const fn ascii_glyph(self) -> &'static str {
        match self {
            NoteValue::Whole => "W",
            NoteValue::Half => "H",
            NoteValue::Quarter => "Q",
            NoteValue::Eighth => "E",
            NoteValue::Sixteenth => "S",
            NoteValue::ThirtySecond => "T",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_is_the_unit() {
        assert_eq!(NoteValue::Quarter.multiplier(), 1.0);
    }

    #[test]
    fn multipliers_match_the_standard_table() {
        assert_eq!(NoteValue::Whole.multiplier(), 4.0);
        assert_eq!(NoteValue::Half.multiplier(), 2.0);
        assert_eq!(NoteValue::Eighth.multiplier(), 0.5);
        assert_eq!(NoteValue::Sixteenth.multiplier(), 0.25);
        assert_eq!(NoteValue::ThirtySecond.multiplier(), 0.125);
    }

    #[test]
    fn each_value_is_half_the_previous() {
        for pair in NoteValue::ALL.windows(2) {
            assert_eq!(pair[1].multiplier(), pair[0].multiplier() / 2.0);
        }
    }

    #[test]
    fn ascii_glyphs_really_are_ascii() {
        for note in NoteValue::ALL {
            assert!(note.ascii_glyph().is_ascii());
        }
    }
}
