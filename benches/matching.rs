//! Benchmarks for the cellmatch engine.
//!
//! The matcher is O(C x A) worst case; these benches track how the full
//! run scales with roster size and how much the in-range early stop saves
//! in practice.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- full_run
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use cellmatch::engine::{leftover_anodes, MatchEngine};
use cellmatch::normalize::normalize;
use cellmatch::types::{ComponentRecord, RawRecord};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

// ============================================================================
// HELPER FUNCTIONS - Deterministic roster generation
// ============================================================================

/// Generate a deterministic roster. Same seed = same records.
///
/// Capacities spread 90.000 ..= 130.000 so ratios cover all tiers plus
/// misses on both sides.
fn generate_roster(prefix: &str, count: usize, seed: u64) -> Vec<ComponentRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let milli: i64 = rng.gen_range(90_000..=130_000);
            ComponentRecord::new(format!("{prefix}{i}"), Decimal::new(milli, 3))
        })
        .collect()
}

/// A roster where nothing ever matches (every ratio is exactly 1.0),
/// forcing the matcher into its full-scan worst case.
fn generate_flat_roster(prefix: &str, count: usize) -> Vec<ComponentRecord> {
    (0..count)
        .map(|i| ComponentRecord::new(format!("{prefix}{i}"), Decimal::from(100)))
        .collect()
}

// ============================================================================
// BENCHMARK: Full Run Throughput
// ============================================================================

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");

    for size in [100, 1_000, 4_000] {
        let anodes = generate_roster("A", size, 42);
        let cathodes = generate_roster("C", size / 4, 43);

        group.throughput(Throughput::Elements(cathodes.len() as u64));
        group.bench_with_input(BenchmarkId::new("cathodes", size / 4), &size, |b, _| {
            let engine = MatchEngine::new();
            b.iter(|| black_box(engine.run(&cathodes, &anodes)));
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Worst Case (no early stop)
// ============================================================================

fn bench_worst_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("worst_case");
    group.sample_size(20);

    // Every scan walks the whole roster and resolves NO MATCH
    let anodes = generate_flat_roster("A", 2_000);
    let cathodes = generate_flat_roster("C", 500);

    group.bench_function("full_scan_500x2000", |b| {
        let engine = MatchEngine::new();
        b.iter(|| black_box(engine.run(&cathodes, &anodes)));
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Normalization + Leftover Derivation
// ============================================================================

fn bench_plumbing(c: &mut Criterion) {
    let mut group = c.benchmark_group("plumbing");

    // Normalization over a dirty raw list (a third incomplete, a third dup)
    group.bench_function("normalize_3k_dirty", |b| {
        let raw: Vec<RawRecord> = (0..3_000)
            .map(|i| match i % 3 {
                0 => RawRecord::new(Some(format!("A{i}")), Some(Decimal::from(100 + i))),
                1 => RawRecord::new(Some(format!("A{i}")), None),
                _ => RawRecord::new(Some("A0".to_string()), Some(Decimal::from(100))),
            })
            .collect();

        b.iter_batched(
            || raw.clone(),
            |raw| black_box(normalize(raw)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("leftovers_4k", |b| {
        let anodes = generate_roster("A", 4_000, 42);
        let cathodes = generate_roster("C", 1_000, 43);
        let report = MatchEngine::new().run(&cathodes, &anodes);
        let consumed = report.consumed();

        b.iter(|| black_box(leftover_anodes(&anodes, consumed)));
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_full_run, bench_worst_case, bench_plumbing);

criterion_main!(benches);
