/// Game tuning parameters for the hoop-bounce loop
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const LEFT_WALL_X: f32 = -5.0;
    pub const RIGHT_WALL_X: f32 = 5.0;
    pub const BALL_RADIUS: f32 = 0.25;

    // Hoops sit just inside their wall; the trigger is a small square zone
    pub const HOOP_INSET: f32 = 1.0;
    pub const HOOP_RADIUS: f32 = 0.5;
    pub const HOOP_HEIGHT_MIN: f32 = -4.0;
    pub const HOOP_HEIGHT_MAX: f32 = 2.0;

    // Ball
    pub const JUMP_FORCE: f32 = 10.0;
    pub const DIRECTIONAL_VELOCITY: f32 = 2.0;
    pub const GRAVITY: f32 = 19.62; // 2x standard gravity

    // Scoring
    pub const PERFECT_SHOT_SPEED: f32 = 7.0;
    pub const PERFECT_POINTS: u32 = 3;
    pub const NORMAL_POINTS: u32 = 1;
    pub const TRAIL_STREAK: u32 = 3;

    // Round timer
    pub const TIME_LIMIT_START: f32 = 10.0;
    pub const TIME_LIMIT_DECREMENT: f32 = 1.0;
    pub const TIME_LIMIT_FLOOR: f32 = 3.0;

    // Timed effects
    pub const TELEPORT_COOLDOWN: f32 = 0.1;
    pub const FLASH_DURATION: f32 = 0.1;

    // Cosmetics
    pub const SHADOW_Y: f32 = -4.75;

    // Physics
    pub const MAX_DT: f32 = 0.1;
}
