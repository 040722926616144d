mod common;

use std::hint::black_box;

use circuit_art::circuit::runner::{Generator, GeneratorConfig};
use circuit_art::circuit::surface::CommandLog;
use circuit_art::circuit::svg::SvgSurface;
use circuit_art::seed::Seed;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const SEEDS: [u64; 4] = [1, 42, 123456789012, 987654321098];

fn scene_generate_benches(c: &mut Criterion) {
    let presets = [
        ("default", GeneratorConfig::default()),
        ("large", GeneratorConfig::large()),
    ];

    for (name, config) in presets {
        let generator = Generator::new(config);
        let mut group = c.benchmark_group(format!("scene/{name}"));

        for &value in &SEEDS {
            let seed = Seed::new(value);
            group.throughput(common::scene_throughput(&generator.generate(&seed)));

            group.bench_with_input(BenchmarkId::new("headless", value), &seed, |b, seed| {
                b.iter(|| black_box(generator.generate(seed)));
            });

            group.bench_with_input(BenchmarkId::new("command_log", value), &seed, |b, seed| {
                b.iter(|| {
                    let mut log = CommandLog::new();
                    generator.generate_with_surface(seed, &mut log);
                    black_box(log.len());
                });
            });

            group.bench_with_input(BenchmarkId::new("svg", value), &seed, |b, seed| {
                b.iter(|| {
                    let mut svg = SvgSurface::new();
                    generator.generate_with_surface(seed, &mut svg);
                    black_box(svg.document().len());
                });
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = common::scene_criterion();
    targets = scene_generate_benches
}
criterion_main!(benches);
