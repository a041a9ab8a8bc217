//! Headless frontend: drives the simulation at a fixed timestep with a
//! scripted jumper and prints the HUD values the core exposes.

mod fsm;
mod overlay;

use fsm::{SceneAction, SceneFsm};
use game_core::{
    setup_world, step, Ball, Config, DelayQueue, Events, GameRng, Hud, InputQueue, Round, Score,
    Time, TriggerQueue,
};
use hecs::World;
use overlay::{GameOverScreen, MainMenu};

const DT: f32 = 1.0 / 60.0;
const MAX_TICKS: u32 = 60 * 120; // two minutes, in case the round never ends

fn main() {
    env_logger::init();

    let config = Config::new();
    if let Err(err) = config.validate() {
        eprintln!("invalid config: {err}");
        std::process::exit(1);
    }

    let mut fsm = SceneFsm::new();
    MainMenu::show();
    fsm.transition(SceneAction::Start);

    let final_score = run_round(&config, 42);
    fsm.transition(SceneAction::GameOver);
    GameOverScreen::show(final_score);

    // Exercise the replay path once, then leave through the menu
    if fsm.transition(SceneAction::PlayAgain) {
        let replay_score = run_round(&config, 1337);
        fsm.transition(SceneAction::GameOver);
        GameOverScreen::show(replay_score);
    }
    fsm.transition(SceneAction::QuitToMenu);
}

/// Run one round to completion with a scripted jumper, returning the
/// final score for the overlay.
fn run_round(config: &Config, seed: u64) -> u32 {
    let mut world = World::new();
    let mut rng = GameRng::new(seed);
    let mut round = Round::new(config, &mut rng);
    setup_world(&mut world, &round, config);

    let mut time = Time::new(DT, 0.0);
    let mut score = Score::new();
    let mut events = Events::new();
    let mut hud = Hud::new();
    let mut inputs = InputQueue::new();
    let mut triggers = TriggerQueue::new();
    let mut delays = DelayQueue::new();

    let mut ticks = 0;
    while !round.ended && ticks < MAX_TICKS {
        if wants_jump(&world, &round) {
            inputs.press_jump();
        }

        step(
            &mut world,
            &mut time,
            config,
            &mut round,
            &mut score,
            &mut events,
            &mut hud,
            &mut inputs,
            &mut triggers,
            &mut delays,
            &mut rng,
        );

        if events.scored {
            println!(
                "score {:>3}  streak {}  timer {:>4.1}s{}",
                hud.score_text,
                score.perfect_streak,
                round.time_remaining,
                if events.perfect { "  PERFECT" } else { "" }
            );
        }
        ticks += 1;
    }

    score.points
}

/// Scripted jumper: launch immediately, then hop whenever the ball starts
/// falling below the active hoop's height.
fn wants_jump(world: &World, round: &Round) -> bool {
    let mut query = world.query::<&Ball>();
    match query.iter().next() {
        Some((_e, ball)) => {
            !ball.launched || (ball.vel.y < 0.0 && ball.pos.y < round.hoop_height)
        }
        None => false,
    }
}
