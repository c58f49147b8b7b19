use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use em_fields::fields::{
    coulomb_field_magnitude, infinite_wire_field_magnitude, ElectricField, MagneticField,
};

fn bench_magnitudes(c: &mut Criterion) {
    let distances: Vec<f64> = (1..=10_000).map(|i| i as f64 * 1.0e-3).collect();
    let mut group = c.benchmark_group("field_magnitudes");

    group.bench_function(BenchmarkId::new("coulomb", distances.len()), |b| {
        b.iter(|| {
            distances
                .iter()
                .map(|&r| coulomb_field_magnitude(black_box(1.0e-9), r))
                .sum::<f64>()
        })
    });
    group.bench_function(BenchmarkId::new("infinite_wire", distances.len()), |b| {
        b.iter(|| {
            distances
                .iter()
                .map(|&r| infinite_wire_field_magnitude(black_box(1.0), r))
                .sum::<f64>()
        })
    });
    group.finish();
}

fn bench_sum_and_format(c: &mut Criterion) {
    let e1 = ElectricField::new(1.0, 2.0, 3.0);
    let e2 = ElectricField::new(4.0, 5.0, 6.0);
    let b1 = MagneticField::new(7.0, 8.0, 9.0);
    let b2 = MagneticField::new(10.0, 11.0, 12.0);

    c.bench_function("sum_and_display", |b| {
        b.iter(|| {
            let e = black_box(e1) + black_box(e2);
            let m = black_box(b1) + black_box(b2);
            (e.to_string(), m.to_string())
        })
    });
}

criterion_group!(benches, bench_magnitudes, bench_sum_and_format);
criterion_main!(benches);
