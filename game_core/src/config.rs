use crate::params::Params;

/// What happens when the ball runs into a wall.
/// Two variants shipped in different builds of the original game; the choice
/// is explicit here and never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallPolicy {
    /// Move the ball to the opposite wall and debounce re-triggers briefly
    #[default]
    Teleport,
    /// End the round on the spot
    EndGame,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub left_wall_x: f32,
    pub right_wall_x: f32,
    pub ball_radius: f32,
    pub hoop_inset: f32,
    pub hoop_radius: f32,
    pub hoop_height_min: f32,
    pub hoop_height_max: f32,
    pub jump_force: f32,
    pub directional_velocity: f32,
    pub gravity: f32,
    pub perfect_shot_speed: f32,
    pub perfect_points: u32,
    pub normal_points: u32,
    pub trail_streak: u32,
    pub time_limit_start: f32,
    pub time_limit_decrement: f32,
    pub time_limit_floor: f32,
    pub teleport_cooldown: f32,
    pub flash_duration: f32,
    pub shadow_y: f32,
    pub wall_policy: WallPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left_wall_x: Params::LEFT_WALL_X,
            right_wall_x: Params::RIGHT_WALL_X,
            ball_radius: Params::BALL_RADIUS,
            hoop_inset: Params::HOOP_INSET,
            hoop_radius: Params::HOOP_RADIUS,
            hoop_height_min: Params::HOOP_HEIGHT_MIN,
            hoop_height_max: Params::HOOP_HEIGHT_MAX,
            jump_force: Params::JUMP_FORCE,
            directional_velocity: Params::DIRECTIONAL_VELOCITY,
            gravity: Params::GRAVITY,
            perfect_shot_speed: Params::PERFECT_SHOT_SPEED,
            perfect_points: Params::PERFECT_POINTS,
            normal_points: Params::NORMAL_POINTS,
            trail_streak: Params::TRAIL_STREAK,
            time_limit_start: Params::TIME_LIMIT_START,
            time_limit_decrement: Params::TIME_LIMIT_DECREMENT,
            time_limit_floor: Params::TIME_LIMIT_FLOOR,
            teleport_cooldown: Params::TELEPORT_COOLDOWN,
            flash_duration: Params::FLASH_DURATION,
            shadow_y: Params::SHADOW_Y,
            wall_policy: WallPolicy::Teleport,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of the wall on the given side
    pub fn wall_x(&self, side: crate::Side) -> f32 {
        match side {
            crate::Side::Left => self.left_wall_x,
            crate::Side::Right => self.right_wall_x,
        }
    }

    /// X position of the hoop on the given side
    pub fn hoop_x(&self, side: crate::Side) -> f32 {
        match side {
            crate::Side::Left => self.left_wall_x + self.hoop_inset,
            crate::Side::Right => self.right_wall_x - self.hoop_inset,
        }
    }

    /// Reject malformed configuration before the round starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hoop_height_min > self.hoop_height_max {
            return Err(ConfigError::HoopHeightRange {
                min: self.hoop_height_min,
                max: self.hoop_height_max,
            });
        }
        if self.left_wall_x >= self.right_wall_x {
            return Err(ConfigError::WallOrder {
                left: self.left_wall_x,
                right: self.right_wall_x,
            });
        }
        if self.time_limit_floor > self.time_limit_start {
            return Err(ConfigError::FloorAboveLimit {
                floor: self.time_limit_floor,
                limit: self.time_limit_start,
            });
        }
        for (name, value) in [
            ("time_limit_start", self.time_limit_start),
            ("teleport_cooldown", self.teleport_cooldown),
            ("flash_duration", self.flash_duration),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveTiming { name, value });
            }
        }
        Ok(())
    }
}

/// Configuration rejected at initialization
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    HoopHeightRange { min: f32, max: f32 },
    WallOrder { left: f32, right: f32 },
    FloorAboveLimit { floor: f32, limit: f32 },
    NonPositiveTiming { name: &'static str, value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::HoopHeightRange { min, max } => {
                write!(f, "hoop height min {min} is above max {max}")
            }
            ConfigError::WallOrder { left, right } => {
                write!(f, "left wall {left} is not left of right wall {right}")
            }
            ConfigError::FloorAboveLimit { floor, limit } => {
                write!(f, "time limit floor {floor} is above the starting limit {limit}")
            }
            ConfigError::NonPositiveTiming { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_hoop_x_positions() {
        let config = Config::new();
        assert_eq!(config.hoop_x(Side::Left), -4.0, "Left hoop X position");
        assert_eq!(config.hoop_x(Side::Right), 4.0, "Right hoop X position");
    }

    #[test]
    fn test_inverted_hoop_height_range_rejected() {
        let mut config = Config::new();
        config.hoop_height_min = 3.0;
        config.hoop_height_max = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::HoopHeightRange { min: 3.0, max: -1.0 })
        );
    }

    #[test]
    fn test_wall_order_rejected() {
        let mut config = Config::new();
        config.left_wall_x = 5.0;
        config.right_wall_x = -5.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WallOrder { .. })
        ));
    }

    #[test]
    fn test_floor_above_limit_rejected() {
        let mut config = Config::new();
        config.time_limit_floor = 20.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FloorAboveLimit { .. })
        ));
    }

    #[test]
    fn test_non_positive_timing_rejected() {
        let mut config = Config::new();
        config.teleport_cooldown = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveTiming {
                name: "teleport_cooldown",
                ..
            })
        ));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::HoopHeightRange { min: 3.0, max: -1.0 };
        assert_eq!(err.to_string(), "hoop height min 3 is above max -1");
    }
}
