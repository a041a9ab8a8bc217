use crate::{Events, Hud, Round, Score, Time};

/// Advance the countdown, refresh the HUD timer bar, and end the round
/// when the timer runs out.
pub fn countdown(round: &mut Round, time: &Time, score: &Score, hud: &mut Hud, events: &mut Events) {
    if round.ended {
        return;
    }

    round.time_remaining = (round.time_remaining - time.dt).max(0.0);

    let fill = if round.time_limit > 0.0 {
        round.time_remaining / round.time_limit
    } else {
        0.0
    };
    hud.set_timer(fill);

    if round.time_remaining <= 0.0 && round.end_game() {
        events.game_over = true;
        log::info!("time up, final score {}", score.points);
    }
}
