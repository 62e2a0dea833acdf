//! Benchmarks for statevector sampling
//!
//! Run with: cargo bench -p qfactor-adapter-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qfactor_adapter_sim::StatevectorSimulator;
use qfactor_hal::Simulator;
use qfactor_ir::Circuit;

fn ghz(n: u32) -> Circuit {
    let mut circuit = Circuit::new("ghz");
    let q = circuit.add_qreg("q", n);
    circuit.h(q[0]).unwrap();
    for i in 1..q.len() {
        circuit.cx(q[i - 1], q[i]).unwrap();
    }
    circuit.measure_register(&q).unwrap();
    circuit
}

/// Benchmark terminal-measurement sampling across circuit widths.
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let sim = StatevectorSimulator::new().with_seed(0);

    for n in &[4_u32, 8, 12, 16] {
        let circuit = ghz(*n);
        group.bench_with_input(BenchmarkId::new("ghz_1000_shots", n), &circuit, |b, circ| {
            b.iter(|| sim.run(black_box(circ), black_box(1000)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sampling);
criterion_main!(benches);
