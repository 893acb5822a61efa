//! Prints the millisecond grid for two bars of 6/8, then the note duration
//! table for the same tempo.
//!
//! Run with: cargo run --example click_track

use beatclock::timing::{note_duration_ms, position_ms, BeatPosition, NoteValue, TimeSignature};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let bpm = 96.0;
    let signature = TimeSignature::SIX_EIGHT;

    println!("Click track at {bpm} BPM in {signature}:");
    for bar in 1..=2 {
        for beat in 1..=signature.numerator {
            let position = position_ms(bpm, signature, BeatPosition::new(bar, beat as f64))?;
            println!("  {position}");
        }
    }

    println!();
    println!("Note durations at {bpm} BPM:");
    for note in NoteValue::ALL {
        let ms = note_duration_ms(bpm, note)?;
        println!("  {:26} {:>9.2} ms", note.label(), ms);
    }

    Ok(())
}
