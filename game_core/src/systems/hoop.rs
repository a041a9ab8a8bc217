use hecs::World;

use crate::{
    Ball, Config, DelayQueue, DelayedAction, Events, GameRng, Hoop, Hud, Round, Score, Time,
    Trigger,
};

/// Handle hoop trigger events: judge the shot, award points, flip the
/// direction flag exactly once, and hand the score to the round.
#[allow(clippy::too_many_arguments)]
pub fn handle_hoop_triggers(
    world: &mut World,
    fired: &[Trigger],
    round: &mut Round,
    score: &mut Score,
    events: &mut Events,
    hud: &mut Hud,
    delays: &mut DelayQueue,
    rng: &mut GameRng,
    config: &Config,
    time: &Time,
) {
    for trigger in fired {
        let Trigger::Hoop(side) = *trigger else {
            continue;
        };
        if round.ended {
            return;
        }

        let mut scored = false;
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            if ball.teleport_locked {
                continue;
            }

            // Kill the horizontal component; the shot is judged on what remains
            ball.vel.x = 0.0;
            let speed = ball.vel.length();

            if speed >= config.perfect_shot_speed {
                score.add(config.perfect_points);
                score.perfect_streak += 1;
                events.perfect = true;

                // Flash the screen, auto-clearing after a short delay
                hud.flash_on = true;
                delays.schedule(time.now + config.flash_duration, DelayedAction::ClearFlash);

                if score.perfect_streak >= config.trail_streak {
                    hud.trail_on = true;
                }
                log::debug!("perfect shot at speed {speed:.2}, streak {}", score.perfect_streak);
            } else {
                score.add(config.normal_points);
                score.perfect_streak = 0;
                hud.trail_on = false;
            }

            hud.set_score(score.points);
            ball.moving_right = !ball.moving_right;
            scored = true;
        }

        if scored {
            events.scored = true;
            round.on_hoop_scored(side, rng, config);
            log::debug!(
                "scored on {side:?}, next hoop {:?} at height {:.2}",
                round.active_side,
                round.hoop_height
            );
        }
    }
}

/// Mirror the round's active side and sampled height onto the hoop entities
pub fn sync_hoops(world: &mut World, round: &Round) {
    for (_entity, hoop) in world.query_mut::<&mut Hoop>() {
        hoop.active = hoop.side == round.active_side;
        if hoop.active {
            hoop.y = round.hoop_height;
        }
    }
}
