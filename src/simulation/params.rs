//! Physical constants for the simulation world
//!
//! `WorldParams` holds the fixed per-run constants:
//! - gravity acceleration per frame,
//! - damping factor kept on a bounce,
//! - horizontal air resistance
//!
//! `Bounds` is the playfield rectangle the bodies bounce inside.

#[derive(Debug, Clone)]
pub struct WorldParams {
    pub gravity: f64, // vertical acceleration per frame
    pub damping: f64, // fraction of speed kept on a bounce
    pub air_resistance: f64, // per-frame multiplicative horizontal decay
}

impl WorldParams {
    /// Vertical speed at or below which floor contact is resting, not a bounce
    pub const BOUNCE_THRESHOLD: f64 = 0.5;

    /// Horizontal decay applied while resting on the floor
    pub const GROUND_FRICTION: f64 = 0.95;
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            damping: 0.9,
            air_resistance: 0.995,
        }
    }
}

/// Playfield rectangle in simulation coordinates (top-left origin, y down)
#[derive(Debug, Clone)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}
