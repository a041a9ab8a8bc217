use hecs::World;

use crate::{Ball, Shadow};

/// Pin the shadow under the ball: its x follows, its y stays fixed.
/// Pure cosmetics, no game logic.
pub fn follow_ball(world: &mut World) {
    let ball_x = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.pos.x)
    };

    if let Some(x) = ball_x {
        for (_entity, shadow) in world.query_mut::<&mut Shadow>() {
            shadow.x = x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_shadow, Config};

    #[test]
    fn test_shadow_tracks_ball_x_only() {
        let mut world = World::new();
        let config = Config::new();
        let ball_entity = create_ball(&mut world);
        let shadow_entity = create_shadow(&mut world, &config);
        world.get::<&mut Ball>(ball_entity).unwrap().pos = glam::Vec2::new(3.2, 1.5);

        follow_ball(&mut world);

        let shadow = *world.get::<&Shadow>(shadow_entity).unwrap();
        assert_eq!(shadow.x, 3.2);
        assert_eq!(shadow.y, config.shadow_y, "Shadow height never changes");
    }

    #[test]
    fn test_no_ball_no_panic() {
        let mut world = World::new();
        let config = Config::new();
        create_shadow(&mut world, &config);

        follow_ball(&mut world);
    }
}
