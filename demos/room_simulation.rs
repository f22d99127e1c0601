// demos/room_simulation.rs

use std::f64::consts::{FRAC_PI_2, PI};

use rand::{rng, Rng};

use swept_physics::errors::SimulationError;
use swept_physics::models::{Ball, Block, Quaternion, Wall};
use swept_physics::scheduler::CollisionPipeline;
use swept_physics::utils::SimulationTuning;
use swept_physics::world::World;

/// Five-wall room: a floor at y = 0 enclosed by side walls on x = 0,
/// x = 20, z = 0, and z = -20.
fn build_room() -> Result<Vec<Wall>, SimulationError> {
    Ok(vec![
        // Floor, normal up
        Wall::new(
            (0.0, 0.0, 0.0),
            (20.0, 20.0, 0.0),
            (0.0, 0.0, 0.0),
            Quaternion::from_axis_angle((1.0, 0.0, 0.0), -FRAC_PI_2),
        )?,
        // Left wall, normal +x
        Wall::new(
            (0.0, 0.0, 0.0),
            (20.0, 10.0, 0.0),
            (0.0, 0.0, 0.0),
            Quaternion::from_axis_angle((0.0, 1.0, 0.0), FRAC_PI_2),
        )?,
        // Right wall, normal -x
        Wall::new(
            (-20.0, 0.0, 0.0),
            (0.0, 10.0, 0.0),
            (20.0, 0.0, 0.0),
            Quaternion::from_axis_angle((0.0, 1.0, 0.0), -FRAC_PI_2),
        )?,
        // Near wall, normal -z
        Wall::new(
            (-20.0, 0.0, 0.0),
            (0.0, 10.0, 0.0),
            (0.0, 0.0, 0.0),
            Quaternion::from_axis_angle((0.0, 1.0, 0.0), PI),
        )?,
        // Far wall, normal +z
        Wall::new(
            (0.0, 0.0, 0.0),
            (20.0, 10.0, 0.0),
            (0.0, 0.0, -20.0),
            Quaternion::identity(),
        )?,
    ])
}

fn main() -> Result<(), SimulationError> {
    env_logger::init();

    let mut generator = rng();
    let mut balls = Vec::new();
    for i in 0..3 {
        let mut ball = Ball::new(
            (4.0 + 5.0 * i as f64, 2.0, -5.0 - 3.0 * i as f64),
            1.0,
            (
                generator.random_range(-6.0..6.0),
                0.0,
                generator.random_range(-6.0..6.0),
            ),
        )?;
        ball.motion.acceleration = (0.0, -4.9, 0.0);
        balls.push(ball);
    }

    let mut blocks = vec![
        Block::new((8.0, 0.0, -14.0), (10.0, 2.0, -12.0), (2.0, 0.0, 1.5))?,
        Block::new((14.0, 0.0, -8.0), (16.0, 2.0, -6.0), (-2.5, 0.0, 0.0))?,
    ];
    for block in &mut blocks {
        block.motion.acceleration = (0.0, -4.9, 0.0);
    }

    let mut world = World::new(build_room()?, balls, blocks);
    let mut pipeline = CollisionPipeline::new(&world, SimulationTuning::default());

    let dt = 0.02;
    for frame in 0..=150 {
        if frame % 25 == 0 {
            println!("t = {:>5.2}s", frame as f64 * dt);
            for (i, ball) in world.balls.iter().enumerate() {
                let center = ball.shape.center;
                let velocity = ball.motion.velocity;
                println!(
                    "  ball {}: pos ({:6.2}, {:5.2}, {:6.2})  vel ({:6.2}, {:5.2}, {:6.2})",
                    i, center.0, center.1, center.2, velocity.0, velocity.1, velocity.2
                );
            }
            for (i, block) in world.blocks.iter().enumerate() {
                let center = block.center();
                println!(
                    "  block {}: center ({:6.2}, {:5.2}, {:6.2})",
                    i, center.0, center.1, center.2
                );
            }
        }

        world.apply_acceleration(dt);
        pipeline.advance(&mut world, dt);
        world.advance_rolling(dt);
    }

    Ok(())
}
