pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the hoop-bounce simulation by one frame.
///
/// Single-threaded and frame-tick driven: inputs and collision triggers
/// queued since the last call are consumed here, timed effects come due,
/// and the countdown advances. Once the round has ended the step is a
/// no-op apart from draining stale queues.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    round: &mut Round,
    score: &mut Score,
    events: &mut Events,
    hud: &mut Hud,
    inputs: &mut InputQueue,
    triggers: &mut TriggerQueue,
    delays: &mut DelayQueue,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let dt = time.dt.min(Params::MAX_DT);

    events.clear();

    if round.ended {
        // Frozen: drop queued noise, mutate nothing
        inputs.take();
        triggers.drain();
        return;
    }

    let step_time = Time { dt, now: time.now };

    // 1. Timed effects come due before anything reacts this frame
    run_delays(world, delays, hud, &step_time);

    // 2. Jump input
    ingest_jumps(world, inputs, config);

    // 3. Move the ball (gravity only once launched)
    move_ball(world, &step_time, config);

    // 4. Cosmetic shadow follower
    follow_ball(world);

    // 5. Collision triggers: poll geometry, then handle hoops and walls
    detect_triggers(world, round, config, triggers);
    let fired = triggers.drain();
    handle_hoop_triggers(
        world, &fired, round, score, events, hud, delays, rng, config, &step_time,
    );
    handle_wall_triggers(world, &fired, round, events, delays, config, &step_time);

    // 6. Round countdown
    countdown(round, &step_time, score, hud, events);

    // 7. Keep hoop entities mirroring the round
    sync_hoops(world, round);

    // Update time
    time.now += dt;
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World) -> hecs::Entity {
    world.spawn((Ball::new(),))
}

/// Helper to create both hoop entities (inactive until synced)
pub fn create_hoops(world: &mut World) -> (hecs::Entity, hecs::Entity) {
    let left = world.spawn((Hoop::new(Side::Left),));
    let right = world.spawn((Hoop::new(Side::Right),));
    (left, right)
}

/// Helper to create the decorative shadow entity
pub fn create_shadow(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Shadow::new(config.shadow_y),))
}

/// Build the starting scene: ball, both hoops, shadow, with the hoop
/// entities matching the round's opening state
pub fn setup_world(world: &mut World, round: &Round, config: &Config) {
    create_ball(world);
    create_hoops(world);
    create_shadow(world, config);
    sync_hoops(world, round);
}
