use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rng, Rng};

use swept_physics::interactions::{
    intersect_box_box, intersect_sphere_box, intersect_sphere_sphere,
};
use swept_physics::models::{Aabb, Ball, Block};
use swept_physics::scheduler::CollisionPipeline;
use swept_physics::utils::SimulationTuning;
use swept_physics::world::World;

fn random_point(generator: &mut impl Rng, spread: f64) -> (f64, f64, f64) {
    (
        generator.random_range(-spread..spread),
        generator.random_range(-spread..spread),
        generator.random_range(-spread..spread),
    )
}

pub fn bench_pair_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_queries");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(100);

    let mut generator = rng();

    let spheres: Vec<_> = (0..256)
        .map(|_| (random_point(&mut generator, 20.0), random_point(&mut generator, 8.0)))
        .collect();

    group.bench_function("sphere_sphere", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for pair in spheres.windows(2) {
                let (center1, disp1) = pair[0];
                let (center2, disp2) = pair[1];
                sum += intersect_sphere_sphere(center1, 1.0, disp1, center2, 1.0, disp2);
            }
            sum
        })
    });

    let boxes: Vec<_> = (0..256)
        .map(|_| {
            let corner = random_point(&mut generator, 20.0);
            (
                corner,
                (corner.0 + 2.0, corner.1 + 2.0, corner.2 + 2.0),
                random_point(&mut generator, 8.0),
            )
        })
        .collect();

    group.bench_function("box_box", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for pair in boxes.windows(2) {
                let (min1, max1, disp1) = pair[0];
                let (min2, max2, disp2) = pair[1];
                sum += intersect_box_box(min1, max1, disp1, min2, max2, disp2);
            }
            sum
        })
    });

    let bounds = Aabb::new((-1.0, -1.0, -1.0), (1.0, 1.0, 1.0)).unwrap();
    group.bench_function("sphere_box", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for (center, displacement) in &spheres {
                let contact = intersect_sphere_box(
                    *center,
                    1.0,
                    *displacement,
                    &bounds,
                    (0.0, 0.0, 0.0),
                    1.0,
                );
                sum += contact.time;
            }
            sum
        })
    });

    group.finish();
}

pub fn bench_full_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_step");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(100);

    let mut generator = rng();

    let balls: Vec<_> = (0..8)
        .map(|_| {
            Ball::new(
                random_point(&mut generator, 30.0),
                1.0,
                random_point(&mut generator, 5.0),
            )
            .unwrap()
        })
        .collect();
    let blocks: Vec<_> = (0..4)
        .map(|_| {
            let corner = random_point(&mut generator, 30.0);
            Block::new(
                corner,
                (corner.0 + 2.0, corner.1 + 2.0, corner.2 + 2.0),
                random_point(&mut generator, 5.0),
            )
            .unwrap()
        })
        .collect();
    let world = World::new(vec![], balls, blocks);

    group.bench_function("advance_frame", |b| {
        b.iter(|| {
            let mut scratch_world = world.clone();
            let mut pipeline = CollisionPipeline::new(&scratch_world, SimulationTuning::default());
            pipeline.advance(&mut scratch_world, 0.02);
            scratch_world.balls[0].shape.center
        })
    });

    group.finish();
}

criterion_group!(benches, bench_pair_queries, bench_full_step);
criterion_main!(benches);
