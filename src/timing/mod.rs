pub mod calc;
pub mod note_value;
pub mod position;
pub mod time_signature;

pub use calc::{beat_frequency_hz, beat_period_s, note_duration_ms, position_ms, InvalidInput};
pub use note_value::NoteValue;
pub use position::{BeatPosition, PositionMs};
pub use time_signature::TimeSignature;
