use hecs::World;

use crate::{Ball, Config, InputQueue};

/// Apply queued jump presses to the ball.
/// The first press ends the pre-launch float by enabling gravity; every
/// press sets the velocity to (±directional_velocity, jump_force).
pub fn ingest_jumps(world: &mut World, queue: &mut InputQueue, config: &Config) {
    let presses = queue.take();
    if presses == 0 {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.launched {
            ball.launched = true;
            log::debug!("gravity enabled, game started");
        }

        let horizontal = if ball.moving_right {
            config.directional_velocity
        } else {
            -config.directional_velocity
        };
        ball.vel = glam::Vec2::new(horizontal, config.jump_force);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;

    #[test]
    fn test_first_jump_launches_ball() {
        let mut world = World::new();
        let config = Config::new();
        let mut queue = InputQueue::new();
        create_ball(&mut world);

        queue.press_jump();
        ingest_jumps(&mut world, &mut queue, &config);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert!(ball.launched, "First press must enable gravity");
            assert_eq!(ball.vel.x, config.directional_velocity);
            assert_eq!(ball.vel.y, config.jump_force);
        }
    }

    #[test]
    fn test_jump_direction_follows_flag() {
        let mut world = World::new();
        let config = Config::new();
        let mut queue = InputQueue::new();
        let entity = create_ball(&mut world);

        world.get::<&mut Ball>(entity).unwrap().moving_right = false;
        queue.press_jump();
        ingest_jumps(&mut world, &mut queue, &config);

        let ball = *world.get::<&Ball>(entity).unwrap();
        assert_eq!(
            ball.vel.x, -config.directional_velocity,
            "Left-moving ball jumps toward the left wall"
        );
    }

    #[test]
    fn test_no_press_no_change() {
        let mut world = World::new();
        let config = Config::new();
        let mut queue = InputQueue::new();
        let entity = create_ball(&mut world);

        ingest_jumps(&mut world, &mut queue, &config);

        let ball = *world.get::<&Ball>(entity).unwrap();
        assert!(!ball.launched);
        assert_eq!(ball.vel, glam::Vec2::ZERO);
    }
}
