use glam::Vec2;

/// Stable handle to a body inside a [`World`](crate::world::World).
///
/// Handles are plain indices into the world's append-only body list, so
/// they stay valid for the lifetime of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub(crate) usize);

impl BodyHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A circular mass-point.
///
/// A body with `mass == 0` is an *anchor*: its inverse mass is zero, it
/// accumulates no acceleration and never integrates. That is the only
/// static-body mechanism, there is no separate flag.
#[derive(Debug, Clone)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    force_accum: Vec2,
    mass: f32,
    inv_mass: f32,
    pub radius: f32,
    pub restitution: f32,
}

impl Body {
    pub fn new(position: Vec2, mass: f32, radius: f32, restitution: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            force_accum: Vec2::ZERO,
            mass,
            inv_mass: if mass > 0.0 { 1.0 / mass } else { 0.0 },
            radius,
            restitution,
        }
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Whether this body is immovable (`inv_mass == 0`).
    pub fn is_anchor(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Force accumulated since the last integration.
    pub fn force_accum(&self) -> Vec2 {
        self.force_accum
    }

    /// Accumulates a force to be applied at the next integration.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force_accum += force;
    }

    /// Advances the body by `dt` seconds using semi-implicit Euler:
    /// velocity picks up the current step's acceleration before the
    /// position update. Anchors are a no-op.
    ///
    /// The force accumulator is cleared afterwards, so each step is
    /// stateless with respect to applied forces. `dt` must be >= 0.
    pub fn integrate(&mut self, dt: f32) {
        if self.inv_mass == 0.0 {
            return;
        }

        self.acceleration = self.force_accum * self.inv_mass;
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
        self.force_accum = Vec2::ZERO;
    }
}
