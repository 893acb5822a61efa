//! Benchmarks for the tempo arithmetic.
//!
//! Run with: cargo bench
//!
//! Both calculators are a handful of float operations; these exist to catch
//! accidental regressions if the arithmetic ever grows branches or lookups.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use beatclock::timing::{note_duration_ms, position_ms, BeatPosition, NoteValue, TimeSignature};

/// Tempo spread from largo to prestissimo.
const TEMPOS: &[f64] = &[40.0, 120.0, 208.0];

fn bench_duration(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/duration");

    for &bpm in TEMPOS {
        group.bench_with_input(BenchmarkId::new("quarter", bpm as u32), &bpm, |b, &bpm| {
            b.iter(|| note_duration_ms(black_box(bpm), black_box(NoteValue::Quarter)))
        });
    }

    group.bench_function("all_note_values", |b| {
        b.iter(|| {
            for note in NoteValue::ALL {
                let _ = black_box(note_duration_ms(black_box(120.0), note));
            }
        })
    });

    group.finish();
}

fn bench_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/position");

    for &bar in &[1u32, 64, 4096] {
        group.bench_with_input(BenchmarkId::new("four_four", bar), &bar, |b, &bar| {
            b.iter(|| {
                position_ms(
                    black_box(120.0),
                    black_box(TimeSignature::FOUR_FOUR),
                    black_box(BeatPosition::new(bar, 3.0)),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_duration, bench_position);
criterion_main!(benches);
