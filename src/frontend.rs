//! The boundary between the game core and whatever drives it.
//!
//! The interactive console, the headless simulator, and the test scripts
//! all implement this trait; the core never touches stdin or stdout.

use crate::combat::{CombatEvent, Enemy, PlayerAction};
use crate::levels::LevelEvent;
use crate::player::Player;

pub trait Frontend {
    /// A level's enemy sequence is about to begin.
    fn level_started(&mut self, number: u32);

    /// A fresh enemy has appeared and a battle is about to begin.
    fn battle_started(&mut self, player: &Player, enemy: &Enemy);

    /// One decision per battle turn. Implementations resolve
    /// unrecognized input to `PlayerAction::Pass` rather than
    /// re-prompting.
    fn choose_battle_action(&mut self, player: &Player, enemy: &Enemy) -> PlayerAction;

    /// Asked after a successful flee (and its penalty): keep going, or
    /// abandon the level? Anything but an explicit yes means abandon.
    fn continue_level_after_flee(&mut self, player: &Player, level: u32) -> bool;

    /// Asked between levels: descend into the next one?
    fn enter_next_level(&mut self, level: u32) -> bool;

    fn combat_event(&mut self, event: &CombatEvent);

    fn level_event(&mut self, event: &LevelEvent);
}

#[cfg(test)]
pub mod stub {
    use super::Frontend;
    use crate::combat::{CombatEvent, Enemy, PlayerAction};
    use crate::levels::LevelEvent;
    use crate::player::Player;
    use std::collections::VecDeque;

    /// Test front end: replays a fixed action script (falling back to a
    /// default once exhausted), answers prompts from fixed flags, and
    /// records everything it is shown.
    pub struct ScriptedFrontend {
        pub actions: VecDeque<PlayerAction>,
        pub fallback: PlayerAction,
        pub press_on_after_flee: bool,
        pub enter_next: bool,
        pub battles_started: u32,
        pub next_level_prompts: u32,
        pub combat_events: Vec<CombatEvent>,
        pub level_events: Vec<LevelEvent>,
    }

    impl ScriptedFrontend {
        /// A front end that answers every battle prompt with `action`
        /// and says yes to every level prompt.
        pub fn always(action: PlayerAction) -> Self {
            Self::with_script(&[], action)
        }

        pub fn with_script(actions: &[PlayerAction], fallback: PlayerAction) -> Self {
            Self {
                actions: actions.iter().copied().collect(),
                fallback,
                press_on_after_flee: true,
                enter_next: true,
                battles_started: 0,
                next_level_prompts: 0,
                combat_events: Vec::new(),
                level_events: Vec::new(),
            }
        }
    }

    impl Frontend for ScriptedFrontend {
        fn level_started(&mut self, _number: u32) {}

        fn battle_started(&mut self, _player: &Player, _enemy: &Enemy) {
            self.battles_started += 1;
        }

        fn choose_battle_action(&mut self, _player: &Player, _enemy: &Enemy) -> PlayerAction {
            self.actions.pop_front().unwrap_or(self.fallback)
        }

        fn continue_level_after_flee(&mut self, _player: &Player, _level: u32) -> bool {
            self.press_on_after_flee
        }

        fn enter_next_level(&mut self, _level: u32) -> bool {
            self.next_level_prompts += 1;
            self.enter_next
        }

        fn combat_event(&mut self, event: &CombatEvent) {
            self.combat_events.push(*event);
        }

        fn level_event(&mut self, event: &LevelEvent) {
            self.level_events.push(*event);
        }
    }
}
