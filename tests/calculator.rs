use beatclock::timing::{
    beat_frequency_hz, beat_period_s, note_duration_ms, position_ms, BeatPosition, InvalidInput,
    NoteValue, TimeSignature,
};

#[test]
fn default_session_produces_the_reference_values() {
    // 120 BPM, 4/4, bar 1 beat 1, quarter note: the startup screen
    assert_eq!(note_duration_ms(120.0, NoteValue::Quarter), Ok(500.0));

    let position =
        position_ms(120.0, TimeSignature::FOUR_FOUR, BeatPosition::new(1, 1.0)).unwrap();
    assert_eq!(position.ms, 0.0);
    assert_eq!(position.beats_elapsed, 0.0);
}

#[test]
fn a_whole_note_at_sixty_lasts_four_seconds() {
    assert_eq!(note_duration_ms(60.0, NoteValue::Whole), Ok(4000.0));
}

#[test]
fn bar_two_downbeat_in_common_time() {
    let position =
        position_ms(120.0, TimeSignature::FOUR_FOUR, BeatPosition::new(2, 1.0)).unwrap();
    assert_eq!(position.ms, 2000.0);
    assert_eq!(position.beats_elapsed, 4.0);
    assert_eq!(position.to_string(), "Bar 2, Beat 1 = 2000.00 ms");
}

#[test]
fn compound_time_counts_eighth_note_beats() {
    // 6/8: the beat unit is an eighth, half a quarter, so 250 ms at 120 BPM
    let position =
        position_ms(120.0, TimeSignature::SIX_EIGHT, BeatPosition::new(1, 3.0)).unwrap();
    assert_eq!(position.ms, 500.0);
    assert_eq!(position.beats_elapsed, 2.0);
}

#[test]
fn every_note_value_scales_from_the_quarter() {
    let quarter = note_duration_ms(98.0, NoteValue::Quarter).unwrap();
    for note in NoteValue::ALL {
        // Multipliers are powers of two, so the scaling is exact
        assert_eq!(
            note_duration_ms(98.0, note).unwrap(),
            quarter * note.multiplier()
        );
    }
}

#[test]
fn all_calculators_reject_a_non_positive_bpm() {
    for bpm in [0.0, -7.5] {
        assert!(matches!(
            note_duration_ms(bpm, NoteValue::Half),
            Err(InvalidInput::NonPositiveBpm { .. })
        ));
        assert!(matches!(
            beat_frequency_hz(bpm),
            Err(InvalidInput::NonPositiveBpm { .. })
        ));
        assert!(matches!(
            beat_period_s(bpm),
            Err(InvalidInput::NonPositiveBpm { .. })
        ));
        assert!(matches!(
            position_ms(bpm, TimeSignature::FOUR_FOUR, BeatPosition::new(1, 1.0)),
            Err(InvalidInput::NonPositiveBpm { .. })
        ));
    }
}

#[test]
fn beat_must_fit_inside_the_bar() {
    let err = position_ms(100.0, TimeSignature::THREE_FOUR, BeatPosition::new(1, 4.0)).unwrap_err();
    assert_eq!(
        err,
        InvalidInput::BeatOutsideBar {
            beat: 4.0,
            numerator: 3
        }
    );
    // The last beat of the bar itself is fine
    assert!(position_ms(100.0, TimeSignature::THREE_FOUR, BeatPosition::new(1, 3.0)).is_ok());
}

#[test]
fn faster_tempos_shorten_everything() {
    let tempos = [40.0, 60.0, 96.0, 120.0, 200.0, 240.0];
    for pair in tempos.windows(2) {
        let (slow, fast) = (pair[0], pair[1]);
        assert!(
            note_duration_ms(slow, NoteValue::Quarter).unwrap()
                > note_duration_ms(fast, NoteValue::Quarter).unwrap()
        );
        let at = |bpm| {
            position_ms(bpm, TimeSignature::FOUR_FOUR, BeatPosition::new(3, 2.0))
                .unwrap()
                .ms
        };
        assert!(at(slow) > at(fast));
    }
}

#[test]
fn recomputing_the_same_input_is_stable() {
    let first = position_ms(133.7, TimeSignature::SIX_EIGHT, BeatPosition::new(9, 5.0)).unwrap();
    let second = position_ms(133.7, TimeSignature::SIX_EIGHT, BeatPosition::new(9, 5.0)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn frequency_and_period_are_reciprocal_views_of_the_tempo() {
    assert_eq!(beat_frequency_hz(120.0), Ok(2.0));
    assert_eq!(beat_period_s(120.0), Ok(0.5));

    for bpm in [40.0, 98.0, 133.7, 208.0] {
        let product = beat_frequency_hz(bpm).unwrap() * beat_period_s(bpm).unwrap();
        assert!((product - 1.0).abs() < 1e-12);
    }
}
