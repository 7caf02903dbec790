//! Collision detection and response
//!
//! Cushions are axis-aligned, so each axis bounces independently. Ball pairs
//! are equal-mass discs: the normal components of their velocities are
//! exchanged (scaled by restitution), the tangential components are kept.

use glam::Vec2;

use super::state::Ball;

/// Overlap between two balls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the first ball's centre to the second's
    pub normal: Vec2,
    /// How far the balls overlap (for position correction)
    pub penetration: f32,
}

/// Keep one coordinate inside `[-limit, limit]`, reflecting its velocity on contact
///
/// Returns true if the cushion was hit.
#[inline]
pub fn bounce_axis(pos: &mut f32, vel: &mut f32, limit: f32, restitution: f32) -> bool {
    if *pos < -limit {
        *pos = -limit;
        *vel = -*vel * restitution;
        true
    } else if *pos > limit {
        *pos = limit;
        *vel = -*vel * restitution;
        true
    } else {
        false
    }
}

/// Check whether two centres are closer than `min_dist`
///
/// Coincident centres have no usable normal and report no contact.
pub fn ball_pair_contact(a: Vec2, b: Vec2, min_dist: f32) -> Option<Contact> {
    let delta = b - a;
    let dist_sq = delta.length_squared();
    if dist_sq <= 0.0 || dist_sq >= min_dist * min_dist {
        return None;
    }

    let dist = dist_sq.sqrt();
    Some(Contact {
        normal: delta / dist,
        penetration: min_dist - dist,
    })
}

/// Push two overlapping balls apart and exchange their normal velocities
pub fn resolve_pair(a: &mut Ball, b: &mut Ball, contact: &Contact, restitution: f32) {
    let n = contact.normal;

    // Split the correction evenly
    let half = contact.penetration * 0.5;
    a.pos -= n * half;
    b.pos += n * half;

    let va = a.vel.dot(n);
    let vb = b.vel.dot(n);
    a.vel += n * ((vb - va) * restitution);
    b.vel += n * ((va - vb) * restitution);
}
