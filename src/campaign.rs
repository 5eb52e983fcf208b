//! Campaign controller: strings levels together into one ending.

use crate::dice::Dice;
use crate::frontend::Frontend;
use crate::levels::{run_level, LevelResult};
use crate::player::Player;

/// How the whole adventure ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The final level was survived, cleared or not.
    Victory,
    /// Death, tagged with the level it happened on.
    Defeat { level: u32 },
    /// The player survived level 1 but declined to descend.
    Retired { level: u32 },
}

/// Plays the campaign front to back. Death is checked after each level
/// regardless of how it exited, since the flee penalty can leave an
/// abandoning player at zero HP. Any survivor of level 1, cleared or
/// abandoned, is offered the descent; retiring on the final level still
/// counts as victory because there is nothing left to face.
pub fn run_campaign(
    player: &mut Player,
    frontend: &mut impl Frontend,
    dice: &mut impl Dice,
) -> Ending {
    match run_level(player, 1, frontend, dice) {
        LevelResult::PlayerDied => return Ending::Defeat { level: 1 },
        LevelResult::Cleared | LevelResult::Abandoned => {
            if !player.is_alive() {
                return Ending::Defeat { level: 1 };
            }
        }
    }

    if !frontend.enter_next_level(2) {
        return Ending::Retired { level: player.level };
    }

    match run_level(player, 2, frontend, dice) {
        LevelResult::PlayerDied => Ending::Defeat { level: 2 },
        LevelResult::Cleared | LevelResult::Abandoned => {
            if player.is_alive() {
                Ending::Victory
            } else {
                Ending::Defeat { level: 2 }
            }
        }
    }
}
