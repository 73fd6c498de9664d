//! Kinema2D main entry point.
//!
//! A headless, tick-driven demo of the motion model using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for 2D vector math
//!
//! The demo runs a fixed number of ticks. A spawn timer periodically emits
//! bubbles that rise from the bottom of the world; a bounds pass after the
//! movement system demonstrates deferred collision correction by halting
//! entities at the world edge and rolling them back to their pre-advancement
//! position.
//!
//! # Main Loop
//!
//! 1. Parse CLI arguments and load the motion configuration
//! 2. Build the ECS world, register the spawn observer
//! 3. Per tick: update world time, run spawn timers, run movement, then
//!    apply the bounds correction pass
//! 4. Log a summary of final entity positions
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --ticks 600 --spawn-interval 0.5
//! ```

use kinema2d::components::mapposition::MapPosition;
use kinema2d::components::motion::{Direction, MotionApplier};
use kinema2d::components::spawntimer::SpawnTimer;
use kinema2d::events::spawntimer::SpawnTimerEvent;
use kinema2d::resources::motionconfig::MotionConfig;
use kinema2d::resources::worldtime::WorldTime;
use kinema2d::systems::movement::movement;
use kinema2d::systems::spawntimer::spawn_timer;
use kinema2d::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

const WORLD_WIDTH: f32 = 640.0;
const WORLD_HEIGHT: f32 = 360.0;

/// Kinema2D headless motion demo
#[derive(Parser)]
#[command(version, about = "Tick-driven demo of the Kinema2D motion model")]
struct Cli {
    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Ticks per second, used to derive the frame delta for the timers.
    #[arg(long, default_value_t = 60.0)]
    tick_rate: f32,

    /// Seconds between bubble spawns.
    #[arg(long, default_value_t = 1.0)]
    spawn_interval: f32,

    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for deterministic spawn randomness.
    #[arg(long)]
    seed: Option<u64>,
}

/// Observer that spawns a rising bubble whenever a "bubble" spawn request fires.
fn spawn_bubble_observer(
    trigger: On<SpawnTimerEvent>,
    config: Res<MotionConfig>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if event.tag != "bubble" {
        return;
    }

    let x = fastrand::f32() * WORLD_WIDTH;
    let speed = 1.0 + fastrand::f32() * 4.0;
    let wobble = fastrand::f32() * 30.0 - 15.0;

    let mut motion = MotionApplier::new();
    config.apply_to(&mut motion);
    motion.set_motion_towards(speed, Direction::Up);
    motion.change_direction(wobble);

    log::debug!(
        "Spawning bubble at x={:.1} with speed={:.2} bearing={:.1}",
        x,
        speed,
        motion.direction()
    );
    commands.spawn((MapPosition::new(x, 0.0), motion));
}

/// Deferred collision correction pass, run after movement each tick.
///
/// Entities that crossed the world edge are stopped and rolled back to the
/// position recorded before the tick's advancement. The one-shot halted
/// signal is consumed here for logging.
fn apply_world_bounds(world: &mut World) {
    let mut query = world.query::<(Entity, &mut MapPosition, &mut MotionApplier)>();
    for (entity, mut position, mut motion) in query.iter_mut(world) {
        let p = position.pos;
        if p.x < 0.0 || p.x > WORLD_WIDTH || p.y < 0.0 || p.y > WORLD_HEIGHT {
            motion.set_speed(0.0);
            if let Some(previous) = motion.previous_location() {
                position.pos = previous;
            }
            if motion.is_halted() {
                log::debug!("Entity {:?} halted at the world edge", entity);
                motion.set_halted(false);
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Some(seed) = cli.seed {
        fastrand::seed(seed);
    }

    let mut config = match &cli.config {
        Some(path) => MotionConfig::with_path(path),
        None => MotionConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(config);

    world.add_observer(spawn_bubble_observer);
    world.flush();

    // A diver drifting right, plus the bubble spawner.
    let mut diver_motion = MotionApplier::new();
    diver_motion.set_motion_towards(2.0, Direction::Right);
    world.spawn((
        MapPosition::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0),
        diver_motion,
    ));
    world.spawn((SpawnTimer::new(cli.spawn_interval, "bubble"),));

    let mut update = Schedule::default();
    update.add_systems(spawn_timer);
    update.add_systems(movement.after(spawn_timer));
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    log::info!(
        "Running {} ticks at {} ticks/second",
        cli.ticks,
        cli.tick_rate
    );

    // --------------- Main loop ---------------
    let dt = 1.0 / cli.tick_rate;
    for _ in 0..cli.ticks {
        update_world_time(&mut world, dt);
        update.run(&mut world);
        apply_world_bounds(&mut world);
        world.clear_trackers();
    }

    // --------------- Summary ---------------
    let mut query = world.query::<(Entity, &MapPosition, &MotionApplier)>();
    for (entity, position, motion) in query.iter(&world) {
        log::info!(
            "Entity {:?} at ({:.1}, {:.1}) speed={:.2} bearing={:.1}",
            entity,
            position.pos.x,
            position.pos.y,
            motion.speed(),
            motion.direction()
        );
    }
}
