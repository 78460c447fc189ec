/// Benchmark suite for terrain generation and world population
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::IVec3;
use raycraft::{TerrainGenerator, World};

fn bench_chunk_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_generation");
    let gen = TerrainGenerator::new(1337);

    group.bench_function("single_chunk", |b| {
        b.iter(|| black_box(gen.generate(black_box(3), black_box(-2))))
    });
    group.finish();
}

fn bench_world_population(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_population");

    for &radius in &[2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| {
                let mut world = World::new(1337);
                // Touch one voxel per chunk in the region; each touch
                // materializes the full chunk
                for cx in -radius..=radius {
                    for cz in -radius..=radius {
                        world.get_voxel(IVec3::new(cx * 16, 32, cz * 16));
                    }
                }
                black_box(world.chunk_count())
            });
        });
    }
    group.finish();
}

fn bench_voxel_access(c: &mut Criterion) {
    c.bench_function("voxel_get_resident_chunk", |b| {
        let mut world = World::new(1337);
        world.get_voxel(IVec3::new(0, 32, 0)); // pre-materialize

        b.iter(|| {
            let mut acc = 0u32;
            for x in 0..16 {
                for z in 0..16 {
                    acc += world.get_voxel(IVec3::new(x, 32, z)) as u32;
                }
            }
            black_box(acc)
        });
    });
}

criterion_group!(
    benches,
    bench_chunk_generation,
    bench_world_population,
    bench_voxel_access
);
criterion_main!(benches);
