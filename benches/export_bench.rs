//! Export rendering benchmarks.
//!
//! Measures JSON-lines serialization and text row rendering for a typical
//! fully-populated event and a minimal one (no entity, no details).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use sentinel::export::{render_text, write_event, OutputFormat};
use sentinel::normalizer::normalize;

fn events() -> Vec<sentinel::LogEvent> {
    vec![
        normalize(
            "2025-10-09T08:25:33.661Z INFO api EventIngest event_type=GATE_IN cntr_no=MSCU0000006 correlation_id=corr-api-0005 status=200",
            0,
            "API Event Service",
        )
        .expect("bench line must normalize"),
        normalize(
            "2025-10-09T08:25:34.000Z INFO api unremarkable remainder",
            1,
            "API Event Service",
        )
        .expect("bench line must normalize"),
    ]
}

fn json_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("json");
    group.throughput(Throughput::Elements(1));

    for (label, event) in ["full", "minimal"].iter().zip(events()) {
        group.bench_with_input(BenchmarkId::new(*label, ""), &event, |b, event| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(512);
                write_event(&mut buf, black_box(event), OutputFormat::Json, true).unwrap();
                black_box(buf)
            })
        });
    }

    group.finish();
}

fn text_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    group.throughput(Throughput::Elements(1));

    for (label, event) in ["full", "minimal"].iter().zip(events()) {
        group.bench_with_input(BenchmarkId::new(*label, ""), &event, |b, event| {
            b.iter(|| black_box(render_text(black_box(event), true)))
        });
    }

    group.finish();
}

criterion_group!(export_benches, json_bench, text_bench);
criterion_main!(export_benches);
