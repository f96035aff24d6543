//! Random draws for body spawning and bounce recoloring
//!
//! The random source is threaded in as `&mut impl Rng` so the app can pass
//! the OS-seeded `rand::thread_rng()` while tests drive a seeded `StdRng`.

use rand::Rng;

use super::states::{Color, NVec2};

/// Velocity components are drawn from the closed range `[-VELOCITY_RANGE, VELOCITY_RANGE]`
pub const VELOCITY_RANGE: i32 = 20;

/// Uniform opaque color: each color channel drawn independently from [0, 255]
pub fn random_color(rng: &mut impl Rng) -> Color {
    Color::rgb(
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
    )
}

/// Uniform velocity with integer-valued components in [-20, 20]
pub fn random_velocity(rng: &mut impl Rng) -> NVec2 {
    NVec2::new(
        rng.gen_range(-VELOCITY_RANGE..=VELOCITY_RANGE) as f64,
        rng.gen_range(-VELOCITY_RANGE..=VELOCITY_RANGE) as f64,
    )
}
