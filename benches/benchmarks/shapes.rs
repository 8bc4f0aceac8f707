use criterion::{BatchSize, Criterion, criterion_group};
use polyedit::{Tolerance, cartesian::Ring, merge};

use super::random_ring;

fn random_operands() -> [Ring; 2] {
    [random_ring([0., 0.], 1000), random_ring([4., 4.], 1000)]
}

pub fn large_rings(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("large rings");

    group.bench_function("union", |b| {
        b.iter_batched(
            random_operands,
            |[subject, clip]| merge::union(&subject, &clip, Tolerance::default()),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("difference", |b| {
        b.iter_batched(
            random_operands,
            |[subject, clip]| merge::difference(&subject, &clip, Tolerance::default()),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, large_rings);
