use crate::models::{Ball, Block, Wall};

/// Owned snapshot of every simulated object.
///
/// The arrays are populated once before simulation begins and persist for
/// its lifetime; the collision pipeline mutates positions and velocities in
/// place but never adds or removes objects. There is no ambient state; the
/// world is passed explicitly wherever it is needed.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub walls: Vec<Wall>,
    pub balls: Vec<Ball>,
    pub blocks: Vec<Block>,
}

impl World {
    pub fn new(walls: Vec<Wall>, balls: Vec<Ball>, blocks: Vec<Block>) -> Self {
        World {
            walls,
            balls,
            blocks,
        }
    }

    /// Folds each object's acceleration into its velocity for the coming
    /// step. Called once per frame before the collision pipeline runs.
    pub fn apply_acceleration(&mut self, dt: f64) {
        for ball in &mut self.balls {
            ball.motion.velocity.0 += ball.motion.acceleration.0 * dt;
            ball.motion.velocity.1 += ball.motion.acceleration.1 * dt;
            ball.motion.velocity.2 += ball.motion.acceleration.2 * dt;
        }
        for block in &mut self.blocks {
            block.motion.velocity.0 += block.motion.acceleration.0 * dt;
            block.motion.velocity.1 += block.motion.acceleration.1 * dt;
            block.motion.velocity.2 += block.motion.acceleration.2 * dt;
        }
    }

    /// Advances every ball's cosmetic roll animation. Renderers call this
    /// once per drawn frame; the physics step does not depend on it.
    pub fn advance_rolling(&mut self, dt: f64) {
        for ball in &mut self.balls {
            ball.advance_roll(dt);
        }
    }
}
