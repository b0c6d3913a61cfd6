//! The physics world: owns all bodies and advances them step by step.

use glam::Vec2;

use crate::{
    body::{Body, BodyHandle},
    collision,
};

/// Owner of the simulation state.
///
/// Bodies are appended before the step loop begins and live for the
/// simulation's lifetime; [`BodyHandle`]s stay valid throughout. The world
/// is stepped synchronously, once per frame, by the driving loop.
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    gravity: Vec2,
}

impl World {
    /// Creates an empty world with a global gravity vector
    /// (acceleration, applied as `mass * gravity` per body).
    pub fn new(gravity: Vec2) -> Self {
        Self {
            bodies: Vec::new(),
            gravity,
        }
    }

    /// Appends a body and returns its stable handle.
    ///
    /// Values are taken as given: mass and restitution are not
    /// range-checked, that is the caller's contract. A `mass` of zero
    /// makes the body an immovable anchor.
    pub fn add_body(
        &mut self,
        position: Vec2,
        mass: f32,
        radius: f32,
        restitution: f32,
    ) -> BodyHandle {
        self.bodies.push(Body::new(position, mass, radius, restitution));
        BodyHandle(self.bodies.len() - 1)
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// In order: gravity is applied as a force (`mass * gravity`, so every
    /// movable body accelerates identically), every body integrates, then
    /// one pairwise collision pass runs over the end-of-step state.
    ///
    /// `dt` is not clamped here; capping it on frame hitches is the
    /// driver's job.
    pub fn step(&mut self, dt: f32) {
        for body in &mut self.bodies {
            if body.inv_mass() > 0.0 {
                let gravity_force = self.gravity * body.mass();
                body.apply_force(gravity_force);
            }
        }

        for body in &mut self.bodies {
            body.integrate(dt);
        }

        collision::resolve_pairs(&mut self.bodies);
    }

    pub fn body(&self, handle: BodyHandle) -> &Body {
        &self.bodies[handle.0]
    }

    /// Mutable access to a body, for driver-level resets (respawn) that
    /// intentionally bypass the physics step.
    pub fn body_mut(&mut self, handle: BodyHandle) -> &mut Body {
        &mut self.bodies[handle.0]
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_handles_are_stable_indices() {
        let mut world = World::new(Vec2::ZERO);
        let a = world.add_body(Vec2::new(1.0, 0.0), 1.0, 1.0, 0.5);
        let b = world.add_body(Vec2::new(2.0, 0.0), 1.0, 1.0, 0.5);

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(world.body(a).position.x, 1.0);
        assert_eq!(world.body(b).position.x, 2.0);
    }

    #[test]
    fn test_free_fall_single_step() {
        let mut world = World::new(Vec2::new(0.0, 500.0));
        let ball = world.add_body(Vec2::new(100.0, 100.0), 1.0, 10.0, 0.8);

        world.step(1.0);

        // Semi-implicit Euler: the fresh velocity moves the position in
        // the same step.
        let body = world.body(ball);
        assert!((body.velocity.y - 500.0).abs() < 1e-3);
        assert!((body.position.y - 600.0).abs() < 1e-3);
        assert!(body.velocity.x.abs() < 1e-6);
    }

    #[test]
    fn test_gravity_is_mass_independent() {
        let mut world = World::new(Vec2::new(0.0, 500.0));
        let light = world.add_body(Vec2::new(0.0, 0.0), 0.5, 1.0, 0.5);
        let heavy = world.add_body(Vec2::new(1000.0, 0.0), 50.0, 1.0, 0.5);

        world.step(0.016);

        // force = mass * gravity, so acceleration is gravity for both.
        let dv_light = world.body(light).velocity;
        let dv_heavy = world.body(heavy).velocity;
        assert!((dv_light.y - dv_heavy.y).abs() < 1e-4);
    }

    #[test]
    fn test_anchor_invariance_over_steps() {
        let mut world = World::new(Vec2::new(0.0, 500.0));
        let anchor = world.add_body(Vec2::new(400.0, 550.0), 0.0, 100.0, 0.2);

        for _ in 0..200 {
            world.step(0.016);
        }

        let body = world.body(anchor);
        assert_eq!(body.position, Vec2::new(400.0, 550.0));
        assert_eq!(body.inv_mass(), 0.0);
    }

    #[test]
    fn test_force_accum_zero_after_every_step() {
        let mut world = World::new(Vec2::new(0.0, 500.0));
        let ball = world.add_body(Vec2::ZERO, 2.0, 5.0, 0.5);
        let anchor = world.add_body(Vec2::new(500.0, 500.0), 0.0, 5.0, 0.5);

        for _ in 0..10 {
            world.step(0.016);
            assert_eq!(world.body(ball).force_accum(), Vec2::ZERO);
            assert_eq!(world.body(anchor).force_accum(), Vec2::ZERO);
        }
    }

    #[test]
    fn test_respawn_bypass() {
        let mut world = World::new(Vec2::new(0.0, 500.0));
        let ball = world.add_body(Vec2::new(400.0, 900.0), 1.0, 20.0, 0.8);
        world.step(0.016);

        // Driver-level reset, outside the step.
        let body = world.body_mut(ball);
        body.position = Vec2::new(400.0, 50.0);
        body.velocity = Vec2::ZERO;

        assert_eq!(world.body(ball).position, Vec2::new(400.0, 50.0));
        assert_eq!(world.body(ball).velocity, Vec2::ZERO);
    }

    #[test]
    fn test_ball_bounces_off_anchor_ground() {
        // The original demo scene: falling ball over an immovable ground
        // disc. The ball drops monotonically until the circles overlap,
        // then its vertical velocity flips sign.
        let mut world = World::new(Vec2::new(0.0, 500.0));
        let ball = world.add_body(Vec2::new(400.0, 50.0), 1.0, 20.0, 0.8);
        let ground = world.add_body(Vec2::new(400.0, 550.0), 0.0, 100.0, 0.2);

        let min_distance = 120.0;
        let mut bounced = false;
        let mut prev_y = world.body(ball).position.y;

        for _ in 0..2000 {
            let pre_step_distance = world
                .body(ball)
                .position
                .distance(world.body(ground).position);
            let pre_step_vy = world.body(ball).velocity.y;

            world.step(0.016);
            let body = world.body(ball);

            if body.velocity.y < 0.0 {
                // The sign flip happens exactly on the first step whose
                // integrated position overlaps the ground; the pass then
                // corrects the pair back to the radius sum.
                let travel = (pre_step_vy + 500.0 * 0.016) * 0.016;
                assert!(
                    pre_step_distance - travel < min_distance,
                    "bounced without reaching the ground, distance = {}",
                    pre_step_distance
                );
                let post_distance =
                    body.position.distance(world.body(ground).position);
                assert!(
                    (post_distance - min_distance).abs() < 1e-2,
                    "post-correction distance = {}",
                    post_distance
                );
                bounced = true;
                break;
            }

            // Falling: y grows monotonically until the bounce.
            assert!(body.position.y >= prev_y);
            prev_y = body.position.y;
        }

        assert!(bounced, "ball never bounced");
    }
}
