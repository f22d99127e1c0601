use log::{debug, warn};

use crate::interactions::{
    closest_point_on_segment, exchange_normal_components, exchange_with_tangential,
    intersect_box_box, intersect_box_plane, intersect_sphere_box, intersect_sphere_plane,
    intersect_sphere_sphere, is_box_on_wall, is_sphere_on_wall, reflect_off_surface,
    ContactFeature,
};
use crate::utils::{cross_product, dot_product, normalize_vector, SimulationTuning};
use crate::world::World;

/// A contact scheduled for response, tagged by the kind of pair that
/// produced it. Indices refer into the world's object arrays. Ball-block
/// contacts also carry the struck triangle (and feature) because the
/// response needs its geometry after the objects have moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    BallBall {
        first: usize,
        second: usize,
    },
    BallWall {
        ball: usize,
        wall: usize,
    },
    BlockWall {
        block: usize,
        wall: usize,
    },
    BlockBlock {
        first: usize,
        second: usize,
    },
    BallBlock {
        ball: usize,
        block: usize,
        triangle: [(f64, f64, f64); 3],
        feature: ContactFeature,
    },
}

/// Per-frame collision scheduler.
///
/// Each frame is allotted a normalized time budget of 1. A pass sweeps every
/// applicable pair, keeping the earliest contact time and every contact
/// within `contact_epsilon` of it (those are simultaneous; a ball wedged
/// into a corner hits both walls in the same pass). The world then advances
/// to that time, the collected contacts get their responses, and the
/// remaining budget shrinks by the consumed slice. Re-testing after each
/// partial advance is what catches a second collision caused by the first
/// response; a single full-frame sweep would miss it. When a pass finds
/// nothing, the remaining budget is integrated in one go.
///
/// Contacts are discovered in a fixed order (ball-ball, ball-wall,
/// block-wall, block-block, ball-block, ascending indices within each), so
/// the simultaneous grouping and the response order are deterministic.
pub struct CollisionPipeline {
    tuning: SimulationTuning,
    /// Scratch list of this pass's simultaneous contacts, allocated once
    /// with room for one contact per movable object.
    contacts: Vec<Contact>,
    /// Earliest contact time seen this pass.
    min_time: f64,
    /// Unconsumed fraction of the current frame.
    t_left: f64,
}

impl CollisionPipeline {
    pub fn new(world: &World, tuning: SimulationTuning) -> Self {
        CollisionPipeline {
            tuning,
            contacts: Vec::with_capacity(world.balls.len() + world.blocks.len()),
            min_time: 0.0,
            t_left: 0.0,
        }
    }

    /// Frame entry point: runs the slicing loop until the frame's time
    /// budget is spent, leaving the world's positions and velocities at
    /// their end-of-frame state. `elapsed` is the wall-clock duration of
    /// the frame; displacements inside the pass are `velocity * elapsed`.
    pub fn advance(&mut self, world: &mut World, elapsed: f64) {
        self.t_left = 1.0;
        let mut passes = 0;

        while self.t_left > 0.0 {
            if passes >= self.tuning.max_passes {
                warn!(
                    "pass cap {} hit; integrating remaining {:.4} frame fraction untested",
                    self.tuning.max_passes, self.t_left
                );
                Self::advance_objects(world, elapsed * self.t_left);
                self.t_left = 0.0;
                break;
            }
            passes += 1;

            self.min_time = f64::MAX;
            self.contacts.clear();

            self.test_ball_ball(world, elapsed);
            self.test_ball_wall(world, elapsed);
            self.test_block_wall(world, elapsed);
            self.test_block_block(world, elapsed);
            self.test_ball_block(world, elapsed);

            if self.contacts.is_empty() {
                // No contact inside the budget: drain the frame
                Self::advance_objects(world, elapsed * self.t_left);
                self.t_left = 0.0;
            } else {
                debug!(
                    "{} simultaneous contact(s) at t = {:.4}, {:.4} of frame left",
                    self.contacts.len(),
                    self.min_time,
                    self.t_left
                );

                Self::advance_objects(world, elapsed * self.min_time);
                for i in 0..self.contacts.len() {
                    let contact = self.contacts[i];
                    self.respond(world, &contact);
                }
                self.t_left -= self.min_time;
            }
        }
    }

    /// Moves every object forward by its velocity over the given scaled
    /// time.
    fn advance_objects(world: &mut World, step: f64) {
        for ball in &mut world.balls {
            ball.shape.center.0 += ball.motion.velocity.0 * step;
            ball.shape.center.1 += ball.motion.velocity.1 * step;
            ball.shape.center.2 += ball.motion.velocity.2 * step;
        }
        for block in &mut world.blocks {
            let velocity = block.motion.velocity;
            block.bounds.translate((
                velocity.0 * step,
                velocity.1 * step,
                velocity.2 * step,
            ));
        }
    }

    /// Files a candidate contact: rejected outside `[0, t_left]`, appended
    /// when simultaneous with the current minimum, and otherwise replacing
    /// the whole set when strictly earlier.
    fn record(&mut self, time: f64, contact: Contact) {
        if time < 0.0 || time > self.t_left {
            return;
        }

        if (time - self.min_time).abs() <= self.tuning.contact_epsilon {
            self.contacts.push(contact);
        } else if time < self.min_time {
            self.min_time = time;
            self.contacts.clear();
            self.contacts.push(contact);
        }
    }

    fn displacement(velocity: (f64, f64, f64), elapsed: f64) -> (f64, f64, f64) {
        (
            velocity.0 * elapsed,
            velocity.1 * elapsed,
            velocity.2 * elapsed,
        )
    }

    //==========================================================================
    // PAIRWISE SWEEPS
    //==========================================================================

    fn test_ball_ball(&mut self, world: &World, elapsed: f64) {
        for first in 0..world.balls.len() {
            let a = &world.balls[first];
            for second in (first + 1)..world.balls.len() {
                let b = &world.balls[second];
                let time = intersect_sphere_sphere(
                    a.shape.center,
                    a.shape.radius,
                    Self::displacement(a.motion.velocity, elapsed),
                    b.shape.center,
                    b.shape.radius,
                    Self::displacement(b.motion.velocity, elapsed),
                );
                self.record(time, Contact::BallBall { first, second });
            }
        }
    }

    fn test_ball_wall(&mut self, world: &World, elapsed: f64) {
        for (wall_id, wall) in world.walls.iter().enumerate() {
            for (ball_id, ball) in world.balls.iter().enumerate() {
                // A wall whose finite footprint the ball never crosses is
                // skipped for this pair
                if !is_sphere_on_wall(ball.shape.center, wall) {
                    continue;
                }
                let time = intersect_sphere_plane(
                    ball.shape.center,
                    ball.shape.radius,
                    Self::displacement(ball.motion.velocity, elapsed),
                    wall.plane.point,
                    wall.plane.normal,
                );
                self.record(
                    time,
                    Contact::BallWall {
                        ball: ball_id,
                        wall: wall_id,
                    },
                );
            }
        }
    }

    fn test_block_wall(&mut self, world: &World, elapsed: f64) {
        for (block_id, block) in world.blocks.iter().enumerate() {
            for (wall_id, wall) in world.walls.iter().enumerate() {
                if !is_box_on_wall(&block.bounds, wall) {
                    continue;
                }
                let time = intersect_box_plane(
                    block.bounds.minv,
                    block.bounds.maxv,
                    Self::displacement(block.motion.velocity, elapsed),
                    wall.plane.point,
                    wall.plane.normal,
                );
                self.record(
                    time,
                    Contact::BlockWall {
                        block: block_id,
                        wall: wall_id,
                    },
                );
            }
        }
    }

    fn test_block_block(&mut self, world: &World, elapsed: f64) {
        for first in 0..world.blocks.len() {
            let a = &world.blocks[first];
            for second in (first + 1)..world.blocks.len() {
                let b = &world.blocks[second];
                let time = intersect_box_box(
                    a.bounds.minv,
                    a.bounds.maxv,
                    Self::displacement(a.motion.velocity, elapsed),
                    b.bounds.minv,
                    b.bounds.maxv,
                    Self::displacement(b.motion.velocity, elapsed),
                );
                self.record(time, Contact::BlockBlock { first, second });
            }
        }
    }

    fn test_ball_block(&mut self, world: &World, elapsed: f64) {
        for (block_id, block) in world.blocks.iter().enumerate() {
            for (ball_id, ball) in world.balls.iter().enumerate() {
                let contact = intersect_sphere_box(
                    ball.shape.center,
                    ball.shape.radius,
                    Self::displacement(ball.motion.velocity, elapsed),
                    &block.bounds,
                    Self::displacement(block.motion.velocity, elapsed),
                    1.0,
                );
                self.record(
                    contact.time,
                    Contact::BallBlock {
                        ball: ball_id,
                        block: block_id,
                        triangle: contact.triangle,
                        feature: contact.feature,
                    },
                );
            }
        }
    }

    //==========================================================================
    // RESPONSES
    //==========================================================================

    fn respond(&self, world: &mut World, contact: &Contact) {
        match *contact {
            Contact::BallBall { first, second } => {
                let (new_first, new_second) = exchange_normal_components(
                    world.balls[first].motion.velocity,
                    world.balls[first].shape.center,
                    world.balls[second].motion.velocity,
                    world.balls[second].shape.center,
                );
                world.balls[first].motion.velocity = new_first;
                world.balls[first].align_spin_axis();
                world.balls[second].motion.velocity = new_second;
                world.balls[second].align_spin_axis();
            }
            Contact::BallWall { ball, wall } => {
                let reflected = reflect_off_surface(
                    world.balls[ball].motion.velocity,
                    world.walls[wall].plane.normal,
                    self.tuning.restitution,
                );
                world.balls[ball].motion.velocity = reflected;
                world.balls[ball].align_spin_axis();
            }
            Contact::BlockWall { block, wall } => {
                world.blocks[block].motion.velocity = reflect_off_surface(
                    world.blocks[block].motion.velocity,
                    world.walls[wall].plane.normal,
                    self.tuning.restitution,
                );
            }
            Contact::BlockBlock { first, second } => {
                let (new_first, new_second) = exchange_with_tangential(
                    world.blocks[first].motion.velocity,
                    world.blocks[first].center(),
                    world.blocks[second].motion.velocity,
                    world.blocks[second].center(),
                );
                world.blocks[first].motion.velocity = new_first;
                world.blocks[second].motion.velocity = new_second;
            }
            Contact::BallBlock {
                ball,
                block,
                triangle,
                feature,
            } => match feature {
                ContactFeature::Edge { start, end } => {
                    self.respond_ball_block_edge(world, ball, block, start, end);
                }
                ContactFeature::Face => {
                    self.respond_ball_block_face(world, ball, block, &triangle);
                }
            },
        }
    }

    /// Edge and vertex hits: the face normal is wrong here, so the contact
    /// normal is recomputed from the sphere center to its closest point on
    /// the struck edge. Both objects are nudged apart along it to keep the
    /// same contact from re-triggering next pass, and each velocity is
    /// reflected only while still closing.
    fn respond_ball_block_edge(
        &self,
        world: &mut World,
        ball: usize,
        block: usize,
        edge_start: (f64, f64, f64),
        edge_end: (f64, f64, f64),
    ) {
        let bias = self.tuning.separation_bias;

        let center = world.balls[ball].shape.center;
        let edge_point = closest_point_on_segment(center, edge_start, edge_end);
        let normal = normalize_vector((
            center.0 - edge_point.0,
            center.1 - edge_point.1,
            center.2 - edge_point.2,
        ));

        {
            let ball = &mut world.balls[ball];
            ball.shape.center.0 += normal.0 * bias;
            ball.shape.center.1 += normal.1 * bias;
            ball.shape.center.2 += normal.2 * bias;

            let closing = dot_product(ball.motion.velocity, normal);
            if closing < 0.0 {
                ball.motion.velocity.0 += -2.0 * closing * normal.0;
                ball.motion.velocity.1 += -2.0 * closing * normal.1;
                ball.motion.velocity.2 += -2.0 * closing * normal.2;
            }
        }

        let normal = (-normal.0, -normal.1, -normal.2);
        let block = &mut world.blocks[block];
        block
            .bounds
            .translate((normal.0 * bias, normal.1 * bias, normal.2 * bias));

        let closing = dot_product(block.motion.velocity, normal);
        if closing < 0.0 {
            block.motion.velocity.0 += -2.0 * closing * normal.0;
            block.motion.velocity.1 += -2.0 * closing * normal.1;
            block.motion.velocity.2 += -2.0 * closing * normal.2;
        }
    }

    /// Face hits behave like a ball-ball collision against a virtual sphere
    /// centered at the projection of the ball's center onto the struck
    /// face, which puts the exchange axis exactly along the face normal.
    fn respond_ball_block_face(
        &self,
        world: &mut World,
        ball: usize,
        block: usize,
        triangle: &[(f64, f64, f64); 3],
    ) {
        let edge1 = (
            triangle[0].0 - triangle[1].0,
            triangle[0].1 - triangle[1].1,
            triangle[0].2 - triangle[1].2,
        );
        let edge2 = (
            triangle[1].0 - triangle[2].0,
            triangle[1].1 - triangle[2].1,
            triangle[1].2 - triangle[2].2,
        );
        let normal = normalize_vector(cross_product(edge1, edge2));

        let center1 = world.balls[ball].shape.center;
        let offset = (
            center1.0 - triangle[0].0,
            center1.1 - triangle[0].1,
            center1.2 - triangle[0].2,
        );
        let height = dot_product(normal, offset);
        let center2 = (
            center1.0 - normal.0 * height,
            center1.1 - normal.1 * height,
            center1.2 - normal.2 * height,
        );

        let (new_ball, new_block) = exchange_normal_components(
            world.balls[ball].motion.velocity,
            center1,
            world.blocks[block].motion.velocity,
            center2,
        );
        world.balls[ball].motion.velocity = new_ball;
        world.balls[ball].align_spin_axis();
        world.blocks[block].motion.velocity = new_block;
    }
}
