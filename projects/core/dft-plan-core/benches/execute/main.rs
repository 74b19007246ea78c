use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dft_plan_core::allocate::{allocate_complex_buffer, complex_samples_mut};
use dft_plan_core::{execute_dft_slice, flags, plan_dft_1d, Complex64, Direction};

// Helper to fill a buffer with a deterministic waveform
fn fill_test_signal(samples: &mut [Complex64]) {
    for (i, sample) in samples.iter_mut().enumerate() {
        let t = i as f64 * 0.1;
        *sample = Complex64::new(t.sin(), t.cos());
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("DFT Execute Kernels");

    // 4096 exercises radix-2, 4095 the direct kernel
    for size in [4096usize, 4095] {
        let mut scratch = allocate_complex_buffer(size).unwrap();
        let plan = plan_dft_1d(
            complex_samples_mut(&mut scratch),
            Direction::Forward,
            flags::ESTIMATE,
        )
        .unwrap();

        let mut io = allocate_complex_buffer(size).unwrap();
        fill_test_signal(complex_samples_mut(&mut io));

        group.throughput(criterion::Throughput::Bytes((size * 16) as u64));
        group.bench_with_input(BenchmarkId::new("execute_dft_slice", size), &size, |b, _| {
            b.iter(|| {
                execute_dft_slice(&plan, black_box(complex_samples_mut(&mut io))).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
