#![allow(dead_code)]

use std::time::Duration;

use circuit_art::circuit::runner::Scene;
use criterion::{Criterion, Throughput};

/// Scene passes are millisecond-scale.
pub fn scene_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(15)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3))
}

/// Sampler and path selection are microsecond-scale.
pub fn kernel_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(50)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}

pub fn points_throughput(points: usize) -> Throughput {
    Throughput::Elements(points.max(1) as u64)
}

pub fn segments_throughput(placed: usize) -> Throughput {
    Throughput::Elements(placed.max(1) as u64)
}

/// Committed connections plus decorated nodes: the elements a pass actually draws.
pub fn scene_throughput(scene: &Scene) -> Throughput {
    Throughput::Elements((scene.connections.len() + scene.nodes.len()).max(1) as u64)
}
