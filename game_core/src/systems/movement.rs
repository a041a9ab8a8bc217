use hecs::World;

use crate::{Ball, Config, Time};

/// Apply gravity and integrate ball position.
/// Gravity only acts once the ball has launched; before that it floats.
pub fn move_ball(world: &mut World, time: &Time, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.launched {
            ball.vel.y -= config.gravity * time.dt;
        }
        ball.pos += ball.vel * time.dt;
    }
}
