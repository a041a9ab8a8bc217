use hecs::World;

use crate::{
    Ball, Config, DelayQueue, DelayedAction, Events, Round, Side, Time, Trigger, WallPolicy,
};

/// Handle wall trigger events according to the configured policy:
/// teleport to the opposite wall behind a short debounce, or end the round.
pub fn handle_wall_triggers(
    world: &mut World,
    fired: &[Trigger],
    round: &mut Round,
    events: &mut Events,
    delays: &mut DelayQueue,
    config: &Config,
    time: &Time,
) {
    for trigger in fired {
        let Trigger::Wall(side) = *trigger else {
            continue;
        };
        if round.ended {
            return;
        }
        events.hit_wall = true;

        match config.wall_policy {
            WallPolicy::Teleport => {
                for (_entity, ball) in world.query_mut::<&mut Ball>() {
                    if ball.teleport_locked {
                        continue;
                    }
                    // Reappear just inside the opposite wall, still moving the
                    // same way, so the ball drifts back into the arena
                    let target_wall = config.wall_x(side.opposite());
                    ball.pos.x = match side.opposite() {
                        Side::Left => target_wall + config.ball_radius,
                        Side::Right => target_wall - config.ball_radius,
                    };
                    ball.teleport_locked = true;
                    delays.schedule(
                        time.now + config.teleport_cooldown,
                        DelayedAction::ClearTeleportLock,
                    );
                    events.teleported = true;
                    log::debug!("hit {side:?} wall, teleported to x {:.2}", ball.pos.x);
                }
            }
            WallPolicy::EndGame => {
                if round.end_game() {
                    events.game_over = true;
                    log::info!("hit {side:?} wall, round over");
                }
            }
        }
    }
}
