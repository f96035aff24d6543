pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, Color, NVec2, System};
pub use simulation::params::{Bounds, WorldParams};
pub use simulation::random::{random_color, random_velocity};
pub use simulation::integrator::{step_body, step_system};
pub use simulation::scenario::Scenario;

pub use configuration::config::SceneConfig;

pub use visualization::vis2d::run_2d;
