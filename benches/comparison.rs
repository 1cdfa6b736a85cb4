use criterion::{criterion_group, criterion_main, Criterion};
use svd3::linalg::{JacobiSettings, Svd3};

// ---------------------------------------------------------------------------
// Helpers: one general and one symmetric positive-definite 3×3 input
// ---------------------------------------------------------------------------

fn entry(i: usize, j: usize) -> f64 {
    ((i + 1) * 10 + j + 1) as f64 + if i == j { 3.5 } else { -0.25 * (i + j) as f64 }
}

fn svd3_general() -> svd3::Matrix3<f64> {
    svd3::Matrix3::from_fn(entry)
}

fn nalgebra_general() -> nalgebra::Matrix3<f64> {
    nalgebra::Matrix3::from_fn(entry)
}

fn svd3_spd() -> svd3::Matrix3<f64> {
    let a = svd3_general();
    a.transpose() * a
}

fn nalgebra_spd() -> nalgebra::Matrix3<f64> {
    let a = nalgebra_general();
    a.transpose() * a
}

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul_3x3(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_3x3");

    g.bench_function("svd3", |b| {
        let a = svd3_general();
        let m = svd3_spd();
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_general();
        let m = nalgebra_spd();
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Decompositions
// ---------------------------------------------------------------------------

fn qr_3x3(c: &mut Criterion) {
    let mut g = c.benchmark_group("qr_3x3");

    g.bench_function("svd3", |b| {
        let a = svd3_general();
        b.iter(|| std::hint::black_box(&a).givens_qr())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_general();
        b.iter(|| std::hint::black_box(a).qr())
    });

    g.finish();
}

fn eigen_symmetric_3x3(c: &mut Criterion) {
    let mut g = c.benchmark_group("eigen_symmetric_3x3");

    g.bench_function("svd3", |b| {
        let a = svd3_spd();
        b.iter(|| std::hint::black_box(&a).jacobi_eigen())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_spd();
        b.iter(|| std::hint::black_box(a).symmetric_eigen())
    });

    g.finish();
}

fn svd_3x3(c: &mut Criterion) {
    let mut g = c.benchmark_group("svd_3x3");

    g.bench_function("svd3", |b| {
        let a = svd3_general();
        b.iter(|| std::hint::black_box(&a).svd3())
    });

    g.bench_function("svd3_fixed4", |b| {
        let a = svd3_general();
        let settings = JacobiSettings::fixed(4);
        b.iter(|| Svd3::with_settings(std::hint::black_box(&a), &settings))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra_general();
        b.iter(|| std::hint::black_box(a).svd(true, true))
    });

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    matmul_3x3,
    qr_3x3,
    eigen_symmetric_3x3,
    svd_3x3,
);
criterion_main!(benches);
