//! Criterion benchmarks for the detection pipeline.
//!
//! Run with: cargo bench -p simulation --bench detection_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use simulation::catalog::ShapeType;
use simulation::detection::{detect, detect_shape, sample_shape};
use simulation::epr_log::EprLog;
use simulation::scan_flow::ScanSession;
use simulation::sim_rng::SimRng;

const NOW: u64 = 1_700_000_000_000;

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    group.sample_size(100);

    group.bench_function("sample_shape", |b| {
        let mut rng = SimRng::from_seed_u64(1);
        b.iter(|| black_box(sample_shape(&mut rng)));
    });

    group.bench_function("detect_random_shape", |b| {
        let mut rng = SimRng::from_seed_u64(2);
        b.iter(|| black_box(detect(&mut rng, NOW)));
    });

    for shape in ShapeType::all() {
        group.bench_with_input(
            BenchmarkId::new("detect_shape", format!("{:?}", shape)),
            shape,
            |b, &shape| {
                let mut rng = SimRng::from_seed_u64(3);
                b.iter(|| black_box(detect_shape(shape, &mut rng, NOW)));
            },
        );
    }

    group.finish();
}

fn bench_analysis_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_session");

    group.bench_function("analysis_to_result", |b| {
        let mut rng = SimRng::from_seed_u64(4);
        let mut log = EprLog::default();
        b.iter(|| {
            let mut session = ScanSession::default();
            let _ = session.capture(None);
            while !session.advance_analysis(2, &mut rng, &mut log, NOW) {}
            log.entries.clear();
            black_box(session.earned_points)
        });
    });

    group.bench_function("epr_json_export_1k", |b| {
        let mut rng = SimRng::from_seed_u64(5);
        let mut log = EprLog::default();
        for _ in 0..1000 {
            log.push(detect(&mut rng, NOW).epr);
        }
        b.iter(|| black_box(log.to_json_lines().map(|s| s.len())));
    });

    group.finish();
}

criterion_group!(benches, bench_detect, bench_analysis_cycle);
criterion_main!(benches);
