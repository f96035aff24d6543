//! Bevy 2D viewer for the bouncing-squares scenario
//!
//! Owns the window, one sprite per body, and the per-frame driver systems.
//! The four phases run strictly chained within a frame:
//! input -> physics -> sprite sync -> frame pacing.

use std::time::{Duration, Instant};

use bevy::prelude::*;
use bevy::app::AppExit;
use bevy::window::PresentMode;

use rand::thread_rng;

use crate::simulation::integrator::step_system;
use crate::simulation::params::Bounds;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, Color as SimColor};

#[derive(Component)]
struct BodyIndex(pub usize);

/// Tracks the start of the current frame so the pacing system can sleep out
/// the remainder of the fixed frame budget.
#[derive(Resource)]
struct FramePacer {
    target: Duration,
    frame_start: Instant,
}

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    let window = Window {
        title: scenario.title.clone(),
        resolution: (scenario.bounds.width as f32, scenario.bounds.height as f32).into(),
        resizable: false,
        // Pacing is explicit (FramePacer), not tied to the display refresh
        present_mode: PresentMode::AutoNoVsync,
        ..Default::default()
    };

    App::new()
        .insert_resource(ClearColor(to_bevy_color(scenario.background)))
        .insert_resource(FramePacer {
            target: scenario.frame_delay,
            frame_start: Instant::now(),
        })
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                input_system,
                physics_step_system,
                sync_sprites_system,
                frame_pacing_system,
            )
                .chain(),
        )
        .run();
}

fn to_bevy_color(color: SimColor) -> Color {
    Color::rgba_u8(color.r, color.g, color.b, color.a)
}

/// Simulation coordinates are top-left origin with y down; sprite transforms
/// are playfield-centered with y up, positioned at the sprite's center.
fn to_translation(body: &Body, bounds: &Bounds) -> Vec3 {
    let x = body.position.x + body.size.x / 2.0 - bounds.width / 2.0;
    let y = bounds.height / 2.0 - (body.position.y + body.size.y / 2.0);
    Vec3::new(x as f32, y as f32, 0.0)
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: to_bevy_color(body.color),
                    custom_size: Some(Vec2::new(body.size.x as f32, body.size.y as f32)),
                    ..Default::default()
                },
                transform: Transform::from_translation(to_translation(body, &scenario.bounds)),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Space respawns the body set, Escape quits. Closing the window quits
/// through Bevy's default behavior.
fn input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Space) {
        scenario.respawn(&mut thread_rng());
        info!("respawned {} bodies", scenario.system.bodies.len());
    }
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit);
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        params,
        bounds,
        ..
    } = &mut *scenario;

    step_system(system, params, bounds, &mut thread_rng());
}

fn sync_sprites_system(
    scenario: Res<Scenario>,
    mut query: Query<(&BodyIndex, &mut Transform, &mut Sprite)>,
) {
    for (BodyIndex(i), mut transform, mut sprite) in &mut query {
        if let Some(body) = scenario.system.bodies.get(*i) {
            transform.translation = to_translation(body, &scenario.bounds);
            sprite.color = to_bevy_color(body.color);
        }
    }
}

/// Sleep out whatever remains of the fixed frame budget, then restart the
/// clock for the next frame.
fn frame_pacing_system(mut pacer: ResMut<FramePacer>) {
    let elapsed = pacer.frame_start.elapsed();
    if elapsed < pacer.target {
        spin_sleep::sleep(pacer.target - elapsed);
    }
    pacer.frame_start = Instant::now();
}
