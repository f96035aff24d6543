//! Build and reset the runtime simulation scenario
//!
//! Takes a [`SceneConfig`] and produces the runtime bundle consumed by the
//! visualization systems:
//! - world constants (`WorldParams`) and playfield (`Bounds`)
//! - system state (`System` with freshly spawned bodies)
//! - fixed render settings (background color, frame delay, window title)
//!
//! The scenario is inserted into Bevy as a `Resource` and owned by the
//! driver loop for the whole run.

use std::time::Duration;

use bevy::prelude::Resource;
use rand::Rng;

use crate::configuration::config::SceneConfig;
use crate::simulation::params::{Bounds, WorldParams};
use crate::simulation::random::{random_color, random_velocity};
use crate::simulation::states::{Body, Color, NVec2, System};

/// Bevy resource representing the fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`SceneConfig`]: it
/// contains the world constants, the playfield bounds, the current system
/// state, and the fixed render settings
///
/// In Bevy terms, this is inserted as a `Resource` and then read by the
/// systems responsible for input, integration, and sprite syncing
#[derive(Resource)]
pub struct Scenario {
    pub params: WorldParams,
    pub bounds: Bounds,
    pub system: System,
    pub background: Color,
    pub body_count: usize,
    pub body_size: f64,
    pub frame_delay: Duration,
    pub title: String,
}

impl Scenario {
    pub fn build_scenario(cfg: SceneConfig, rng: &mut impl Rng) -> Self {
        let mut scenario = Self {
            params: WorldParams::default(),
            bounds: Bounds {
                width: cfg.width as f64,
                height: cfg.height as f64,
            },
            system: System { bodies: Vec::new() },
            background: Color::default(),
            body_count: cfg.body_count,
            body_size: cfg.body_size,
            frame_delay: Duration::from_millis(cfg.frame_delay_ms),
            title: cfg.title,
        };
        scenario.respawn(rng);
        scenario
    }

    /// Discard every body and spawn a fresh set: fixed size, top-left corner
    /// at the screen-center point, freshly randomized velocity and color.
    pub fn respawn(&mut self, rng: &mut impl Rng) {
        let spawn = NVec2::new(self.bounds.width / 2.0, self.bounds.height / 2.0);
        let size = NVec2::new(self.body_size, self.body_size);

        let bodies: Vec<Body> = (0..self.body_count)
            .map(|_| Body {
                size,
                position: spawn,
                velocity: random_velocity(rng),
                color: random_color(rng),
            })
            .collect();

        // Replace the collection wholesale; nothing retains a reference to
        // the old bodies across the swap
        self.system = System { bodies };
    }
}
