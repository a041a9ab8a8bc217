use glam::Vec3;

use crate::components::Side;
use crate::config::Config;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.016, now: 0.0 }
    }
}

/// Round state: which hoop is active, the countdown, and the ended flag
#[derive(Debug, Clone, Copy)]
pub struct Round {
    pub active_side: Side,
    pub hoop_height: f32,
    pub time_limit: f32,
    pub time_remaining: f32,
    pub ended: bool,
}

impl Round {
    /// Start a round with the right hoop active, like the original scene
    pub fn new(config: &Config, rng: &mut GameRng) -> Self {
        let mut round = Self {
            active_side: Side::Right,
            hoop_height: 0.0,
            time_limit: config.time_limit_start,
            time_remaining: config.time_limit_start,
            ended: false,
        };
        round.activate_hoop(Side::Right, rng, config);
        round
    }

    /// Activate one hoop (the other goes inactive) at a fresh random height
    /// and restart the countdown at the current time limit
    pub fn activate_hoop(&mut self, side: Side, rng: &mut GameRng, config: &Config) {
        use rand::Rng;
        self.active_side = side;
        self.hoop_height = rng
            .0
            .gen_range(config.hoop_height_min..=config.hoop_height_max);
        self.time_remaining = self.time_limit;
    }

    /// Score on `side`: shrink the time limit toward the floor, then flip
    /// to the opposite hoop
    pub fn on_hoop_scored(&mut self, side: Side, rng: &mut GameRng, config: &Config) {
        self.time_limit =
            (self.time_limit - config.time_limit_decrement).max(config.time_limit_floor);
        self.activate_hoop(side.opposite(), rng, config);
    }

    /// End the round. Returns true only the first time.
    pub fn end_game(&mut self) -> bool {
        if self.ended {
            return false;
        }
        self.ended = true;
        true
    }
}

/// Score and perfect-shot streak tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub points: u32,
    pub perfect_streak: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, points: u32) {
        self.points += points;
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub scored: bool,
    pub perfect: bool,
    pub hit_wall: bool,
    pub teleported: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Display sink. The core only writes values here; a frontend renders them.
#[derive(Debug, Clone)]
pub struct Hud {
    pub score_text: String,
    pub timer_fill: f32,
    pub timer_color: Vec3,
    pub trail_on: bool,
    pub flash_on: bool,
}

impl Hud {
    pub const TIMER_LOW_COLOR: Vec3 = Vec3::new(0.9, 0.15, 0.1);
    pub const TIMER_FULL_COLOR: Vec3 = Vec3::new(0.2, 0.85, 0.3);

    pub fn new() -> Self {
        Self {
            score_text: "0".to_string(),
            timer_fill: 1.0,
            timer_color: Self::TIMER_FULL_COLOR,
            trail_on: false,
            flash_on: false,
        }
    }

    pub fn set_score(&mut self, points: u32) {
        self.score_text = points.to_string();
    }

    /// Set the timer bar fill and lerp its color between low and full
    pub fn set_timer(&mut self, fill: f32) {
        let fill = fill.clamp(0.0, 1.0);
        self.timer_fill = fill;
        self.timer_color = Self::TIMER_LOW_COLOR.lerp(Self::TIMER_FULL_COLOR, fill);
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Queued discrete jump presses from whatever input source the frontend uses
#[derive(Debug, Clone, Copy, Default)]
pub struct InputQueue {
    presses: u32,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_jump(&mut self) {
        self.presses += 1;
    }

    /// Drain queued presses
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.presses)
    }
}

/// A trigger-enter event, tagged the way an engine collision layer tags them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Hoop(Side),
    Wall(Side),
}

/// Collision-event interface. The built-in overlap check fills this each
/// step; an embedding engine may push its own events instead.
#[derive(Debug, Clone, Default)]
pub struct TriggerQueue {
    pub events: Vec<Trigger>,
}

impl TriggerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, trigger: Trigger) {
        self.events.push(trigger);
    }

    pub fn drain(&mut self) -> Vec<Trigger> {
        std::mem::take(&mut self.events)
    }
}

/// An action fired after a fixed delay, replacing engine-style deferred invokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayedAction {
    ClearFlash,
    ClearTeleportLock,
}

#[derive(Debug, Clone, Copy)]
pub struct Delayed {
    pub fire_at: f32,
    pub action: DelayedAction,
}

/// Delay queue owned by the simulation loop, checked each tick
#[derive(Debug, Clone, Default)]
pub struct DelayQueue {
    pub pending: Vec<Delayed>,
}

impl DelayQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, fire_at: f32, action: DelayedAction) {
        self.pending.push(Delayed { fire_at, action });
    }

    /// Remove and return every action due at `now`
    pub fn fire_due(&mut self, now: f32) -> Vec<DelayedAction> {
        let mut due = Vec::new();
        self.pending.retain(|d| {
            if d.fire_at <= now {
                due.push(d.action);
                false
            } else {
                true
            }
        });
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_height_config(height: f32) -> Config {
        let mut config = Config::new();
        config.hoop_height_min = height;
        config.hoop_height_max = height;
        config
    }

    #[test]
    fn test_round_starts_with_right_hoop() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let round = Round::new(&config, &mut rng);
        assert_eq!(round.active_side, Side::Right);
        assert!(!round.ended);
        assert_eq!(round.time_remaining, config.time_limit_start);
    }

    #[test]
    fn test_activate_hoop_samples_height_in_range() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut round = Round::new(&config, &mut rng);
        for _ in 0..100 {
            round.activate_hoop(round.active_side.opposite(), &mut rng, &config);
            assert!(
                round.hoop_height >= config.hoop_height_min
                    && round.hoop_height <= config.hoop_height_max,
                "Hoop height {} out of range",
                round.hoop_height
            );
        }
    }

    #[test]
    fn test_score_flips_side_and_decrements_limit() {
        let config = fixed_height_config(1.0);
        let mut rng = GameRng::new(1);
        let mut round = Round::new(&config, &mut rng);

        round.on_hoop_scored(Side::Right, &mut rng, &config);
        assert_eq!(round.active_side, Side::Left);
        assert_eq!(round.time_limit, 9.0);
        assert_eq!(round.time_remaining, 9.0, "Timer restarts at the new limit");
    }

    #[test]
    fn test_time_limit_clamped_to_floor() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut round = Round::new(&config, &mut rng);

        // Scenario from the tuning sheet: limit 10, decrement 1, floor 3
        for _ in 0..8 {
            let side = round.active_side;
            round.on_hoop_scored(side, &mut rng, &config);
        }
        assert_eq!(round.time_limit, 3.0, "After 8 scores the limit sits at the floor");

        round.on_hoop_scored(round.active_side, &mut rng, &config);
        assert_eq!(round.time_limit, 3.0, "Limit never drops below the floor");
    }

    #[test]
    fn test_end_game_is_idempotent() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut round = Round::new(&config, &mut rng);
        assert!(round.end_game());
        assert!(!round.end_game(), "Second call must be a no-op");
        assert!(round.ended);
    }

    #[test]
    fn test_hud_timer_color_lerp() {
        let mut hud = Hud::new();
        hud.set_timer(1.0);
        assert_eq!(hud.timer_color, Hud::TIMER_FULL_COLOR);
        hud.set_timer(0.0);
        assert_eq!(hud.timer_color, Hud::TIMER_LOW_COLOR);
        hud.set_timer(0.5);
        let mid = Hud::TIMER_LOW_COLOR.lerp(Hud::TIMER_FULL_COLOR, 0.5);
        assert_eq!(hud.timer_color, mid);
    }

    #[test]
    fn test_hud_timer_fill_clamped() {
        let mut hud = Hud::new();
        hud.set_timer(1.5);
        assert_eq!(hud.timer_fill, 1.0);
        hud.set_timer(-0.2);
        assert_eq!(hud.timer_fill, 0.0);
    }

    #[test]
    fn test_input_queue_take_drains() {
        let mut queue = InputQueue::new();
        queue.press_jump();
        queue.press_jump();
        assert_eq!(queue.take(), 2);
        assert_eq!(queue.take(), 0);
    }

    #[test]
    fn test_delay_queue_fires_only_due_actions() {
        let mut delays = DelayQueue::new();
        delays.schedule(1.0, DelayedAction::ClearFlash);
        delays.schedule(2.0, DelayedAction::ClearTeleportLock);

        assert!(delays.fire_due(0.5).is_empty());
        assert_eq!(delays.fire_due(1.0), vec![DelayedAction::ClearFlash]);
        assert_eq!(delays.pending.len(), 1);
        assert_eq!(delays.fire_due(5.0), vec![DelayedAction::ClearTeleportLock]);
        assert!(delays.pending.is_empty());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.scored = true;
        events.game_over = true;
        events.clear();
        assert!(!events.scored);
        assert!(!events.game_over);
    }
}
