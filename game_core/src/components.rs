use glam::Vec2;

/// Which side of the arena a wall or hoop sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Ball component - the player-controlled ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Direction flag: which wall the next jump pushes toward
    pub moving_right: bool,
    /// False until the first jump; gravity is off while floating pre-launch
    pub launched: bool,
    /// Debounce flag set right after a wall teleport; triggers are ignored while set
    pub teleport_locked: bool,
}

impl Ball {
    /// Ball starts floating at the origin, aimed at the right wall
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            moving_right: true,
            launched: false,
            teleport_locked: false,
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Hoop component - one per side, exactly one active at a time
#[derive(Debug, Clone, Copy)]
pub struct Hoop {
    pub side: Side,
    pub y: f32,
    pub active: bool,
}

impl Hoop {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            y: 0.0,
            active: false,
        }
    }
}

/// Shadow component - decorative follower pinned to a fixed height.
/// Tracks the ball's x, carries no game logic.
#[derive(Debug, Clone, Copy)]
pub struct Shadow {
    pub x: f32,
    pub y: f32,
}

impl Shadow {
    pub fn new(y: f32) -> Self {
        Self { x: 0.0, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn test_ball_starts_floating() {
        let ball = Ball::new();
        assert_eq!(ball.pos, Vec2::ZERO);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert!(ball.moving_right, "Ball should start moving right");
        assert!(!ball.launched, "Gravity should be off before the first jump");
        assert!(!ball.teleport_locked);
    }
}
