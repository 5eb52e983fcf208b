//! Battle resolution: a turn-by-turn state machine over one
//! player/enemy pair.

use crate::constants::{
    ENEMY_DAMAGE_BONUS, FLEE_SUCCESS_PERCENT, PLAYER_DAMAGE_BONUS, POTION_HEAL_MAX,
    POTION_HEAL_MIN,
};
use crate::dice::Dice;
use crate::frontend::Frontend;
use crate::player::Player;

use super::types::{BattleOutcome, CombatEvent, Enemy, PlayerAction};

/// State machine for a single encounter. Starts ongoing; `resolve_turn`
/// drives it to exactly one terminal outcome.
#[derive(Debug)]
pub struct Battle {
    enemy: Enemy,
    outcome: Option<BattleOutcome>,
}

impl Battle {
    pub fn new(enemy: Enemy) -> Self {
        Self {
            enemy,
            outcome: None,
        }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// The terminal outcome, once one has been reached.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    /// Resolves one full turn: the player's action, then the enemy's
    /// retaliation if it is still standing. Returns the events in the
    /// order they happened.
    pub fn resolve_turn(
        &mut self,
        player: &mut Player,
        action: PlayerAction,
        dice: &mut impl Dice,
    ) -> Vec<CombatEvent> {
        debug_assert!(self.outcome.is_none(), "turn resolved on a finished battle");
        let mut events = Vec::new();

        match action {
            PlayerAction::Attack => {
                let damage = attack_damage(player.attack, dice);
                self.enemy.take_damage(damage);
                events.push(CombatEvent::PlayerHit { damage });
            }
            PlayerAction::UsePotion => {
                if player.potions == 0 {
                    events.push(CombatEvent::NoPotions);
                } else {
                    let healed = player.heal(dice.roll(POTION_HEAL_MIN, POTION_HEAL_MAX));
                    player.potions -= 1;
                    events.push(CombatEvent::PotionDrunk {
                        healed,
                        remaining: player.potions,
                    });
                }
            }
            PlayerAction::Flee => {
                if dice.percent() <= FLEE_SUCCESS_PERCENT {
                    self.outcome = Some(BattleOutcome::Fled);
                    events.push(CombatEvent::FleeSucceeded);
                    return events;
                }
                // A failed flee does not protect the player: the enemy
                // still gets its swing below.
                events.push(CombatEvent::FleeFailed);
            }
            PlayerAction::Pass => events.push(CombatEvent::TurnWasted),
        }

        if self.enemy.is_alive() {
            let damage = retaliation_damage(self.enemy.attack, dice);
            player.take_damage(damage);
            events.push(CombatEvent::EnemyHit { damage });
        }

        if !player.is_alive() {
            self.outcome = Some(BattleOutcome::Lost);
        } else if !self.enemy.is_alive() {
            self.outcome = Some(BattleOutcome::Won);
        }
        events
    }
}

/// Player swing: `attack-1 ..= attack+2`, floored at 1.
pub fn attack_damage(attack: u32, dice: &mut impl Dice) -> u32 {
    dice.roll(attack.saturating_sub(1), attack + PLAYER_DAMAGE_BONUS)
        .max(1)
}

/// Enemy swing: `attack-1 ..= attack+1`, floored at 1.
pub fn retaliation_damage(attack: u32, dice: &mut impl Dice) -> u32 {
    dice.roll(attack.saturating_sub(1), attack + ENEMY_DAMAGE_BONUS)
        .max(1)
}

/// Runs one battle to completion, sourcing actions from the front end.
pub fn run_battle(
    player: &mut Player,
    enemy: Enemy,
    frontend: &mut impl Frontend,
    dice: &mut impl Dice,
) -> BattleOutcome {
    let mut battle = Battle::new(enemy);
    loop {
        let action = frontend.choose_battle_action(player, battle.enemy());
        for event in battle.resolve_turn(player, action, dice) {
            frontend.combat_event(&event);
        }
        if let Some(outcome) = battle.outcome() {
            return outcome;
        }
    }
}
