//! Level definitions and the per-level encounter loop.
//!
//! Each level is a fixed-size sequence of encounters described by a
//! config table; clearing the whole sequence advances the player's
//! stats. Nothing in the battle engine branches on the level number, so
//! new levels are new table rows.

use crate::combat::{run_battle, BattleOutcome, Enemy};
use crate::constants::{
    FLEE_PENALTY_MAX, FLEE_PENALTY_MIN, VICTORY_HEAL_MAX, VICTORY_HEAL_MIN,
};
use crate::dice::Dice;
use crate::frontend::Frontend;
use crate::player::Player;

/// Per-level tuning.
#[derive(Debug, Clone, Copy)]
pub struct LevelSpec {
    pub species: &'static str,
    pub enemy_count: usize,
    /// Inclusive HP range for spawned enemies.
    pub enemy_hp: (u32, u32),
    /// Inclusive attack range for spawned enemies.
    pub enemy_attack: (u32, u32),
    /// Chance (in percent) of finding a potion after a win.
    pub potion_find_percent: u32,
    /// Stat growth granted when the level is cleared.
    pub clear_max_hp_bonus: u32,
    pub clear_attack_bonus: u32,
}

pub const LEVELS: [LevelSpec; 2] = [
    LevelSpec {
        species: "Goblin",
        enemy_count: 3,
        enemy_hp: (10, 20),
        enemy_attack: (3, 6),
        potion_find_percent: 40,
        clear_max_hp_bonus: 5,
        clear_attack_bonus: 1,
    },
    LevelSpec {
        species: "Orc",
        enemy_count: 4,
        enemy_hp: (18, 32),
        enemy_attack: (5, 9),
        potion_find_percent: 25,
        clear_max_hp_bonus: 8,
        clear_attack_bonus: 2,
    },
];

/// Looks up a level's table row. Level numbers are 1-indexed; anything
/// past the table clamps to the last row.
pub fn level_spec(number: u32) -> &'static LevelSpec {
    let index = (number.saturating_sub(1) as usize).min(LEVELS.len() - 1);
    &LEVELS[index]
}

/// Rolls a fresh enemy for the given level and its position within the
/// level's sequence (0-based; the display ordinal is 1-based).
pub fn spawn_enemy(number: u32, index: usize, dice: &mut impl Dice) -> Enemy {
    let spec = level_spec(number);
    let (hp_low, hp_high) = spec.enemy_hp;
    let (attack_low, attack_high) = spec.enemy_attack;
    Enemy::new(
        format!("{} #{}", spec.species, index + 1),
        dice.roll(hp_low, hp_high),
        dice.roll(attack_low, attack_high),
    )
}

/// Terminal result of one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelResult {
    /// Every enemy in the sequence went down.
    Cleared,
    /// The player retreated after a flee; a voluntary exit, distinct
    /// from death.
    Abandoned,
    PlayerDied,
}

/// Narration events emitted between battles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelEvent {
    FleePenalty { damage: u32 },
    PotionFound,
    VictoryHeal { healed: u32 },
    LevelCleared { number: u32, new_level: u32, max_hp: u32, attack: u32 },
}

/// Runs one level's fixed enemy sequence to a terminal result.
pub fn run_level(
    player: &mut Player,
    number: u32,
    frontend: &mut impl Frontend,
    dice: &mut impl Dice,
) -> LevelResult {
    let spec = level_spec(number);
    frontend.level_started(number);

    for index in 0..spec.enemy_count {
        let enemy = spawn_enemy(number, index, dice);
        frontend.battle_started(player, &enemy);

        match run_battle(player, enemy, frontend, dice) {
            BattleOutcome::Lost => return LevelResult::PlayerDied,
            BattleOutcome::Fled => {
                let damage = dice.roll(FLEE_PENALTY_MIN, FLEE_PENALTY_MAX);
                player.take_damage(damage);
                frontend.level_event(&LevelEvent::FleePenalty { damage });
                if !frontend.continue_level_after_flee(player, number) {
                    return LevelResult::Abandoned;
                }
                // The fled enemy is gone for good; the next index spawns
                // fresh.
            }
            BattleOutcome::Won => {
                let healed = player.heal(dice.roll(VICTORY_HEAL_MIN, VICTORY_HEAL_MAX));
                if dice.percent() <= spec.potion_find_percent {
                    player.potions += 1;
                    frontend.level_event(&LevelEvent::PotionFound);
                }
                frontend.level_event(&LevelEvent::VictoryHeal { healed });
            }
        }

        // Only the flee penalty can leave the player at zero here; a
        // lost battle already returned above.
        if !player.is_alive() {
            return LevelResult::PlayerDied;
        }
    }

    player.level += 1;
    player.max_hp += spec.clear_max_hp_bonus;
    player.attack += spec.clear_attack_bonus;
    player.hp = player.max_hp;
    frontend.level_event(&LevelEvent::LevelCleared {
        number,
        new_level: player.level,
        max_hp: player.max_hp,
        attack: player.attack,
    });
    LevelResult::Cleared
}
