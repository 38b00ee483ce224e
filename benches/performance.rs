// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for brass-drill
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Note parsing
//! - Range filtering of catalogs
//! - Note draws and answer checks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use brass_drill::{
    filter_by_range, get_catalog, get_eligible_pool, is_correct, note_to_pitch, Difficulty,
    Fingering, Instrument, QuizSession, TimingMode,
};

fn bench_note_to_pitch(c: &mut Criterion) {
    c.bench_function("note_to_pitch", |b| {
        b.iter(|| {
            for note in ["C4", "Bb2", "F#5", "Eb3", "G1"] {
                black_box(note_to_pitch(black_box(note)).ok());
            }
        })
    });
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_range");

    for instrument in Instrument::ALL {
        let catalog = get_catalog(instrument, Difficulty::Advanced);
        let range = instrument.range();
        group.bench_with_input(
            BenchmarkId::from_parameter(instrument.name()),
            &catalog,
            |b, catalog| b.iter(|| black_box(filter_by_range(catalog, range.min, range.max))),
        );
    }

    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut session = QuizSession::new(Instrument::Trumpet, Difficulty::Advanced, TimingMode::Practice)
        .with_seed(1);
    let _ = session.begin();

    c.bench_function("draw_note", |b| b.iter(|| black_box(session.draw_note().ok())));
}

fn bench_validate(c: &mut Criterion) {
    let pool = get_eligible_pool(Instrument::Trumpet, Difficulty::Advanced);
    let candidate = Fingering::Valves([1, 2, 0]);

    c.bench_function("is_correct_pool", |b| {
        b.iter(|| {
            pool.entries()
                .iter()
                .filter(|e| is_correct(e.fingerings, black_box(&candidate)))
                .count()
        })
    });
}

criterion_group!(benches, bench_note_to_pitch, bench_filter, bench_draw, bench_validate);
criterion_main!(benches);
