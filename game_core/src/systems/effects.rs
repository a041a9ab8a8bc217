use hecs::World;

use crate::{Ball, DelayQueue, DelayedAction, Hud, Time};

/// Fire due delayed actions: the screen flash clears itself and the
/// teleport debounce expires.
pub fn run_delays(world: &mut World, delays: &mut DelayQueue, hud: &mut Hud, time: &Time) {
    for action in delays.fire_due(time.now) {
        match action {
            DelayedAction::ClearFlash => hud.flash_on = false,
            DelayedAction::ClearTeleportLock => {
                for (_entity, ball) in world.query_mut::<&mut Ball>() {
                    ball.teleport_locked = false;
                }
            }
        }
    }
}
