//! The calculator core: closed-form conversions from tempo to wall-clock
//! milliseconds.
//!
//! Both operations are pure and stateless; the caller re-invokes them after
//! every input change. Invalid input yields [`InvalidInput`] and no result,
//! never a defaulted value.

use std::fmt;

use super::note_value::NoteValue;
use super::position::{BeatPosition, PositionMs};
use super::time_signature::TimeSignature;

/// Rejected calculator input.
///
/// One error kind for the whole core; the variants name the check that
/// failed so the explicit-validation path can surface a precise message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidInput {
    /// BPM was zero, negative, or NaN.
    NonPositiveBpm { bpm: f64 },
    /// Time signature with a zero numerator or denominator.
    DegenerateSignature { numerator: u32, denominator: u32 },
    /// Bars are numbered from 1.
    ZeroBar,
    /// Beat was zero, negative, or NaN.
    NonPositiveBeat { beat: f64 },
    /// Beat lies past the end of the bar.
    BeatOutsideBar { beat: f64, numerator: u32 },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NonPositiveBpm { bpm } => {
                write!(f, "BPM must be positive (got {})", bpm)
            }
            InvalidInput::DegenerateSignature {
                numerator,
                denominator,
            } => {
                write!(
                    f,
                    "time signature {}/{} must have a positive numerator and denominator",
                    numerator, denominator
                )
            }
            InvalidInput::ZeroBar => write!(f, "bar numbers start at 1"),
            InvalidInput::NonPositiveBeat { beat } => {
                write!(f, "beat must be positive (got {})", beat)
            }
            InvalidInput::BeatOutsideBar { beat, numerator } => {
                write!(
                    f,
                    "beat {} does not fit in a bar of {} beats",
                    beat, numerator
                )
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

/// Milliseconds taken by one quarter note at `bpm`.
fn ms_per_quarter(bpm: f64) -> f64 {
    (60.0 / bpm) * 1000.0
}

// The comparison is written so NaN fails it too.
fn check_bpm(bpm: f64) -> Result<f64, InvalidInput> {
    if bpm > 0.0 {
        Ok(bpm)
    } else {
        Err(InvalidInput::NonPositiveBpm { bpm })
    }
}

/// Duration of one note of the given value at `bpm`, in milliseconds.
///
/// A quarter note at 120 BPM is exactly 500 ms; the other values scale by
/// their quarter-note multiplier.
pub fn note_duration_ms(bpm: f64, note: NoteValue) -> Result<f64, InvalidInput> {
    let bpm = check_bpm(bpm)?;
    Ok(ms_per_quarter(bpm) * note.multiplier())
}

/// Beat frequency in hertz at `bpm` (120 BPM beats at 2 Hz).
pub fn beat_frequency_hz(bpm: f64) -> Result<f64, InvalidInput> {
    Ok(check_bpm(bpm)? / 60.0)
}

/// Length of one beat in seconds at `bpm`.
pub fn beat_period_s(bpm: f64) -> Result<f64, InvalidInput> {
    Ok(60.0 / check_bpm(bpm)?)
}

/// Wall-clock offset of a bar/beat address, measured from bar 1, beat 1.
///
/// One beat is the note value named by the signature's denominator, so the
/// same formula covers 4/4, 2/2, and 6/8 alike: in 6/8 a beat is an eighth
/// note and lasts half as long as the quarter-note pulse would suggest.
///
/// Fractional beats are legal; beats between 0 and 1 land before the bar's
/// downbeat and give a negative offset in bar 1.
pub fn position_ms(
    bpm: f64,
    signature: TimeSignature,
    position: BeatPosition,
) -> Result<PositionMs, InvalidInput> {
    if signature.numerator == 0 || signature.denominator == 0 {
        return Err(InvalidInput::DegenerateSignature {
            numerator: signature.numerator,
            denominator: signature.denominator,
        });
    }
    if position.bar == 0 {
        return Err(InvalidInput::ZeroBar);
    }
    // Written so a NaN beat fails too
    if !(position.beat > 0.0) {
        return Err(InvalidInput::NonPositiveBeat {
            beat: position.beat,
        });
    }
    let bpm = check_bpm(bpm)?;
    if position.beat > signature.numerator as f64 {
        return Err(InvalidInput::BeatOutsideBar {
            beat: position.beat,
            numerator: signature.numerator,
        });
    }

    let ms_per_beat = ms_per_quarter(bpm) * signature.beat_note_value();
    let beats_elapsed =
        (position.bar - 1) as f64 * signature.numerator as f64 + (position.beat - 1.0);

    Ok(PositionMs {
        ms: beats_elapsed * ms_per_beat,
        bar: position.bar,
        beat: position.beat,
        signature,
        beats_elapsed,
    })
}
