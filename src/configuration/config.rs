//! Fixed scene settings for the simulation
//!
//! This module defines the settings bundle the runtime scenario is built
//! from:
//!
//! - [`SceneConfig`] – playfield/window dimensions, body count and size,
//!   frame delay, window title
//!
//! These are fixed at startup: there is no file format and no CLI surface
//! for them, and the physics constants live separately in
//! [`WorldParams`](crate::simulation::params::WorldParams) with their own
//! defaults.

/// Fixed settings mapped into the runtime scenario at startup
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub width: u32, // window/playfield width in pixels
    pub height: u32, // window/playfield height in pixels
    pub body_count: usize, // squares spawned at startup and on each reset
    pub body_size: f64, // side length of each spawned square
    pub frame_delay_ms: u64, // per-frame sleep budget
    pub title: String, // window title
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            body_count: 4,
            body_size: 100.0,
            frame_delay_ms: 15,
            title: "Gravity Squares".to_string(),
        }
    }
}
