use criterion::{Criterion, black_box, criterion_group, criterion_main};
use meadow_terrain::*;

fn bench_generate_default(c: &mut Criterion) {
    let builder = TerrainMeshBuilder::new(TerrainParams::default(), Some(42)).unwrap();
    c.bench_function("generate_default_disk", |bencher| {
        bencher.iter(|| black_box(builder.generate(black_box(7))))
    });
}

fn bench_generate_fine_grid(c: &mut Criterion) {
    let params = TerrainParams {
        grid_step: 0.5,
        angular_segments: 256,
        ..Default::default()
    };
    let builder = TerrainMeshBuilder::new(params, Some(42)).unwrap();
    c.bench_function("generate_fine_disk", |bencher| {
        bencher.iter(|| black_box(builder.generate(black_box(7))))
    });
}

fn bench_radial_profile(c: &mut Criterion) {
    let field = NoiseField::new(radial_seed(42), RADIAL_OCTAVES);
    let builder = RadialProfileBuilder::new(64, 50.0);
    c.bench_function("radial_profile_64", |bencher| {
        bencher.iter(|| black_box(builder.build(black_box(&field))))
    });
}

fn bench_height_at(c: &mut Criterion) {
    let mesh = TerrainMeshBuilder::new(TerrainParams::default(), Some(42))
        .unwrap()
        .current();
    c.bench_function("mesh_height_at", |bencher| {
        bencher.iter(|| black_box(mesh.height_at(black_box(12.5), black_box(-20.0))))
    });
}

criterion_group!(
    benches,
    bench_generate_default,
    bench_generate_fine_grid,
    bench_radial_profile,
    bench_height_at
);
criterion_main!(benches);
