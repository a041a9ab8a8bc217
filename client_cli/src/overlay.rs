//! Text stand-ins for the game-over overlay and the main menu.
//! Display only; the scene FSM owns the actual flow.

/// Game-over overlay, shown with the final score
pub struct GameOverScreen;

impl GameOverScreen {
    pub fn show(final_score: u32) {
        println!();
        println!("==================");
        println!("    GAME OVER");
        println!("  {final_score} POINTS");
        println!("==================");
        println!("  [play again] [main menu]");
    }
}

/// Main menu stub
pub struct MainMenu;

impl MainMenu {
    pub fn show() {
        println!("HOOPBOUNCE");
        println!("  [start game] [options]");
    }
}
