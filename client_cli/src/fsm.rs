//! Scene state machine: main menu, a running round, and the game-over
//! overlay with its replay / back-to-menu choices.

/// Scene states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    Menu,
    Playing,
    GameOver,
}

/// Actions that trigger scene transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneAction {
    Start,
    GameOver,
    PlayAgain,
    QuitToMenu,
}

/// Scene flow FSM
pub struct SceneFsm {
    state: SceneState,
}

impl SceneFsm {
    pub fn new() -> Self {
        Self {
            state: SceneState::Menu,
        }
    }

    /// Get current state
    pub fn state(&self) -> SceneState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: SceneAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition; returns false and stays put if invalid
    pub fn transition(&mut self, action: SceneAction) -> bool {
        match self.next_state(action) {
            Some(next) => {
                log::debug!("scene {:?} -> {next:?} on {action:?}", self.state);
                self.state = next;
                true
            }
            None => false,
        }
    }

    fn next_state(&self, action: SceneAction) -> Option<SceneState> {
        use SceneAction::*;
        use SceneState::*;
        match (self.state, action) {
            (Menu, Start) => Some(Playing),
            (Playing, SceneAction::GameOver) => Some(SceneState::GameOver),
            (SceneState::GameOver, PlayAgain) => Some(Playing),
            (SceneState::GameOver, QuitToMenu) => Some(Menu),
            _ => None,
        }
    }
}

impl Default for SceneFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut fsm = SceneFsm::new();
        assert_eq!(fsm.state(), SceneState::Menu);
        assert!(fsm.transition(SceneAction::Start));
        assert_eq!(fsm.state(), SceneState::Playing);
        assert!(fsm.transition(SceneAction::GameOver));
        assert!(fsm.transition(SceneAction::PlayAgain));
        assert_eq!(fsm.state(), SceneState::Playing);
    }

    #[test]
    fn test_back_to_menu() {
        let mut fsm = SceneFsm::new();
        fsm.transition(SceneAction::Start);
        fsm.transition(SceneAction::GameOver);
        assert!(fsm.transition(SceneAction::QuitToMenu));
        assert_eq!(fsm.state(), SceneState::Menu);
    }

    #[test]
    fn test_invalid_transition_stays_put() {
        let mut fsm = SceneFsm::new();
        assert!(!fsm.can_transition(SceneAction::PlayAgain));
        assert!(!fsm.transition(SceneAction::GameOver));
        assert_eq!(fsm.state(), SceneState::Menu);
    }
}
