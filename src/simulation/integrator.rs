//! Fixed-step per-frame update for the bouncing-squares system
//!
//! Advances every body by one unit time step:
//! - apply gravity and air resistance to the velocity,
//! - integrate the position (explicit Euler),
//! - resolve contact against the four playfield walls
//!
//! Boundary tests all use the post-integration position. They are
//! independent boolean tests, so several can be true in the same frame (a
//! body at least as large as the playfield touches opposite walls at once)
//! and every matching correction is applied, in wall -> floor -> ceiling
//! order.

use rand::Rng;

use super::params::{Bounds, WorldParams};
use super::random::random_color;
use super::states::{Body, NVec2, System};

/// Advance a single body by one frame, in-place.
pub fn step_body(body: &mut Body, params: &WorldParams, bounds: &Bounds, rng: &mut impl Rng) {
    // Apply gravity (y grows downward on screen)
    body.apply_gravity(params.gravity);
    // Apply air resistance to horizontal movement
    body.apply_air_resistance(params.air_resistance);

    // Advance position by the updated velocity
    body.integrate();

    // Classify contact from the post-integration position
    let on_right_wall = body.position.x >= bounds.width - body.size.x;
    let on_left_wall = body.position.x <= 0.0;
    let on_wall = on_right_wall || on_left_wall;
    let on_floor = body.position.y >= bounds.height - body.size.y;
    let on_ceiling = body.position.y <= 0.0;

    if on_wall {
        // Push the body back inside, left clamp before right clamp, so the
        // right clamp wins when both tests fire
        if on_left_wall {
            body.position.x = 0.0;
        }
        if on_right_wall {
            body.position.x = bounds.width - body.size.x;
        }
        // Bounce off the wall with some energy loss
        body.damp_x(params.damping);
        // Change to a random color
        body.color = random_color(rng);
    }

    if on_floor {
        body.position.y = bounds.height - body.size.y;
        // Only bounce if falling fast enough; the comparison is strict, so a
        // vertical speed of exactly 0.5 counts as resting contact
        if body.velocity.y > WorldParams::BOUNCE_THRESHOLD {
            body.damp_y(params.damping);
            body.color = random_color(rng);
        } else {
            // Ground friction: bleed horizontal speed, zero vertical speed
            body.velocity = NVec2::new(body.velocity.x * WorldParams::GROUND_FRICTION, 0.0);
        }
    }

    if on_ceiling {
        body.position.y = 0.0;
        body.damp_y(params.damping);
        body.color = random_color(rng);
    }
}

/// Advance the whole system by one frame. Bodies never interact, so each is
/// stepped independently, in collection order.
pub fn step_system(system: &mut System, params: &WorldParams, bounds: &Bounds, rng: &mut impl Rng) {
    for body in system.bodies.iter_mut() {
        step_body(body, params, bounds, rng);
    }
}
