use canvas_fx::curve::random_control_points;
use canvas_fx::{evaluate_curve, evaluate_curve_de_casteljau, ParticleField, PixelGrid};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn bench_curve_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_evaluation");

    for &count in &[3usize, 6, 9] {
        let points = random_control_points(&mut StdRng::seed_from_u64(1), count, 200, 1000);

        group.bench_with_input(BenchmarkId::new("bernstein", count), &points, |b, pts| {
            b.iter(|| {
                let curve = evaluate_curve(black_box(pts), 1000).expect("Kurve erwartet");
                black_box(curve.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("de_casteljau", count), &points, |b, pts| {
            b.iter(|| {
                let curve =
                    evaluate_curve_de_casteljau(black_box(pts), 1000).expect("Kurve erwartet");
                black_box(curve.len())
            })
        });
    }

    group.finish();
}

fn bench_particle_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_tick");

    for &size in &[64usize, 256] {
        let grid = PixelGrid::from_fn(size, size, |col, row| [col as u8, row as u8, 0, 255])
            .expect("Raster erwartet");
        let field = ParticleField::with_defaults(&grid, 3.0, &mut StdRng::seed_from_u64(7))
            .expect("Feld erwartet");

        group.bench_with_input(BenchmarkId::new("tick", size * size), &field, |b, field| {
            let mut field = field.clone();
            b.iter(|| {
                field.tick();
                black_box(field.snapshot().len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_curve_evaluation, bench_particle_tick);
criterion_main!(benches);
