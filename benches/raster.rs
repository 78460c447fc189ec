/// Benchmark suite for the per-ray raster and the pick ray
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use raycraft::{
    cast_ray, Framebuffer, GameMode, Player, RenderConfig, Renderer, World, PICK_DISTANCE,
};

fn standing_player() -> Player {
    let mut player = Player::new(Vec3::new(8.5, 45.0, 8.5), GameMode::Creative);
    player.pitch = -0.3;
    player
}

fn bench_frame_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_raster");
    group.sample_size(20);

    for &(cols, rows) in &[(80usize, 45usize), (160, 90), (320, 180)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", cols, rows)),
            &(cols, rows),
            |b, &(cols, rows)| {
                let mut world = World::new(1337);
                let player = standing_player();
                let mut renderer = Renderer::new(RenderConfig {
                    cols,
                    rows,
                    ..Default::default()
                });
                let mut frame = Framebuffer::new(1280, 720);

                b.iter(|| {
                    renderer.render(&mut frame, &mut world, &player, &[], 0);
                    black_box(frame.buffer()[0])
                });
            },
        );
    }
    group.finish();
}

fn bench_pick_ray(c: &mut Criterion) {
    c.bench_function("pick_ray", |b| {
        let mut world = World::new(1337);
        let player = standing_player();
        let dir = player.look_dir();

        b.iter(|| black_box(cast_ray(&mut world, player.position, dir, PICK_DISTANCE)));
    });
}

criterion_group!(benches, bench_frame_raster, bench_pick_ray);
criterion_main!(benches);
