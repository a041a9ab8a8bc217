use hecs::World;

use crate::{Ball, Config, Round, Side, Trigger, TriggerQueue};

/// Poll geometry for trigger-enter events the way an engine collision layer
/// would deliver them. While the teleport lock is set, nothing fires.
pub fn detect_triggers(world: &World, round: &Round, config: &Config, triggers: &mut TriggerQueue) {
    let ball = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => *ball,
            None => return,
        }
    };

    if ball.teleport_locked {
        return;
    }

    // Active hoop: a small square trigger zone at the hoop position
    let hoop_x = config.hoop_x(round.active_side);
    let reach = config.hoop_radius + config.ball_radius;
    if (ball.pos.x - hoop_x).abs() <= reach && (ball.pos.y - round.hoop_height).abs() <= reach {
        triggers.push(Trigger::Hoop(round.active_side));
    }

    // Walls: fires once the ball penetrates past the wall plane
    if ball.pos.x - config.ball_radius < config.left_wall_x {
        triggers.push(Trigger::Wall(Side::Left));
    } else if ball.pos.x + config.ball_radius > config.right_wall_x {
        triggers.push(Trigger::Wall(Side::Right));
    }
}
