use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::TAU;

use brdc_orbit::prelude::{
    Channel, Constellation, Duration, Ephemeris, Epoch, KeplerSolver, Trajectory, SV,
};

/// GPS like regime: e ∈ [0.0, 0.03]
fn bench_solver(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let solver = KeplerSolver::default();
    let samples = 10_000usize;

    c.bench_function("kepler_solver/e<=0.03", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| (rng.gen_range(0.0..TAU), rng.gen_range(0.0..=0.03)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (m_k, e) in cases {
                    black_box(solver.solve(black_box(m_k), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// One day at 30s, single satellite
fn bench_trajectory(c: &mut Criterion) {
    let toe = Epoch::from_gpst_seconds(1.0E9);
    let sv = SV::new(Constellation::GPS, 5);
    let solver = KeplerSolver::default();

    let eph = Ephemeris::new(sv, toe)
        .with_param(Channel::SqrtA, 5153.795)
        .with_param(Channel::E, 0.01)
        .with_param(Channel::I0, 0.94)
        .with_param(Channel::Omega, 1.0)
        .with_param(Channel::Omega0, 0.5)
        .with_param(Channel::M0, 0.1)
        .with_param(Channel::DeltaN, 4.5E-9)
        .with_param(Channel::OmegaDot, -8.0E-9);

    let targets = (0..2880)
        .map(|i| toe + Duration::from_seconds(30.0 * i as f64))
        .collect::<Vec<_>>();

    c.bench_function("trajectory/24h@30s", |b| {
        b.iter(|| black_box(Trajectory::propagate(&eph, black_box(&targets), &solver)))
    });
}

criterion_group!(benches, bench_solver, bench_trajectory);
criterion_main!(benches);
