//! Render throughput per check-in channel
//!
//! Run benchmarks: `cargo bench --bench render_channels`

use boardpass::{Airport, BoardingPass, Channel, Flight, Passenger, RenderEnv};
use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_pass() -> BoardingPass {
    let departure = NaiveDate::from_ymd_opt(2026, 10, 18)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .expect("valid departure");
    let flight = Flight::new(
        "9W",
        "465",
        Airport::new("BOM", "Mumbai"),
        Airport::new("MAA", "Chennai"),
        departure,
        2,
    );
    let passenger = Passenger::new("First", "Last", "first.last@example.com", "Economy");
    BoardingPass::new(flight, passenger, "A1B2C3", "10D", "0018").with_gate("45C")
}

fn bench_channels(c: &mut Criterion) {
    let env = RenderEnv::bundled();
    let pass = sample_pass();

    let mut group = c.benchmark_group("render_channel");
    for channel in Channel::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(channel), &channel, |b, &channel| {
            b.iter(|| pass.render_with(&env, black_box(channel)).expect("render failed"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_channels);
criterion_main!(benches);
