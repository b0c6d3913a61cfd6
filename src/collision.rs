//! Pairwise circle collision detection and resolution.
//!
//! Every unordered pair is visited exactly once per step, in `i < j`
//! order, with no relaxation passes: chained overlaps may keep some
//! residual penetration until the next step.
//!
//! The velocity resolution reflects each body's *own* velocity along the
//! contact normal, scaled by the averaged restitution. There is no
//! relative-velocity term and no inverse-mass weighting. This is an
//! intentional simplification inherited from the reference behavior; the
//! tests pin it down, so don't swap in a textbook impulse without
//! rewriting them.

use glam::Vec2;

use crate::body::Body;

/// Runs one detection/resolution pass over every distinct pair.
pub(crate) fn resolve_pairs(bodies: &mut [Body]) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (head, tail) = bodies.split_at_mut(j);
            resolve_pair(&mut head[i], &mut tail[0]);
        }
    }
}

fn resolve_pair(a: &mut Body, b: &mut Body) {
    let delta = b.position - a.position;
    let distance = delta.length();
    let min_distance = a.radius + b.radius;

    // Strict overlap test: touching circles are not colliding.
    if distance >= min_distance {
        return;
    }

    // Coincident centers degenerate to a zero normal: no push, zero
    // reflection magnitude.
    let normal = delta.normalize_or(Vec2::ZERO);

    // Symmetric positional correction, independent of mass. Anchors get
    // pushed too; integration just never moves them further.
    let overlap = min_distance - distance;
    let correction = normal * (overlap * 0.5);
    a.position -= correction;
    b.position += correction;

    let restitution = (a.restitution + b.restitution) * 0.5;
    reflect(&mut a.velocity, normal, restitution);
    reflect(&mut b.velocity, normal, restitution);
}

/// Removes `(1 + restitution)` times the velocity component along
/// `normal`, leaving the tangential component untouched.
fn reflect(velocity: &mut Vec2, normal: Vec2, restitution: f32) {
    *velocity -= normal * ((1.0 + restitution) * velocity.dot(normal));
}
