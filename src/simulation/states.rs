//! Core state types for the bouncing-squares simulation.
//!
//! Defines the body/system structs:
//! - `Body`   a colored rectangle with position and velocity
//! - `System` the collection of bodies advanced each frame
//!
//! Positions are in screen coordinates: origin at the top-left corner of the
//! playfield, y grows downward. A body's `position` is its top-left corner.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// RGBA color with 8-bit channels. Defaults to opaque white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from the three color channels
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Color from all four channels
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0xff, 0xff, 0xff)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub size: NVec2, // width/height, constant for the body's lifetime
    pub position: NVec2, // top-left corner
    pub velocity: NVec2, // displacement per frame
    pub color: Color,
}

impl Body {
    /// Accelerate downward: `velocity.y += gravity`
    pub fn apply_gravity(&mut self, gravity: f64) {
        self.velocity.y += gravity;
    }

    /// Horizontal drag, applied unconditionally every frame:
    /// `velocity.x *= air_resistance`
    pub fn apply_air_resistance(&mut self, air_resistance: f64) {
        self.velocity.x *= air_resistance;
    }

    /// Horizontal bounce: flip `velocity.x` and keep `damping` of the energy
    pub fn damp_x(&mut self, damping: f64) {
        self.velocity.x *= -damping;
    }

    /// Vertical bounce: flip `velocity.y` and keep `damping` of the energy
    pub fn damp_y(&mut self, damping: f64) {
        self.velocity.y *= -damping;
    }

    /// Explicit Euler step with a unit time step: `position += velocity`
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }
}

impl Default for Body {
    /// A 10x10 white square at rest at the origin
    fn default() -> Self {
        Self {
            size: NVec2::new(10.0, 10.0),
            position: NVec2::zeros(),
            velocity: NVec2::zeros(),
            color: Color::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, each evolves independently
}
