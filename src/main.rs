use gravity_squares::{run_2d, SceneConfig, Scenario};

use anyhow::Result;
use rand::thread_rng;

fn main() -> Result<()> {
    let cfg = SceneConfig::default();
    let scenario = Scenario::build_scenario(cfg, &mut thread_rng());

    run_2d(scenario);

    Ok(())
}
