//! Combat system types.

/// One opponent, rolled fresh per encounter and discarded when the
/// battle ends. Stats are drawn once at creation and never regenerated
/// mid-battle.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub name: String,
    pub hp: u32,
    pub attack: u32,
}

impl Enemy {
    pub fn new(name: String, hp: u32, attack: u32) -> Self {
        Self { name, hp, attack }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

/// One player decision per battle turn.
///
/// `Pass` is the explicit wasted-turn resolution of unrecognized input:
/// no damage, no healing, no flee attempt, but the enemy still acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    UsePotion,
    Flee,
    Pass,
}

/// Terminal result of one battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Won,
    Lost,
    Fled,
}

/// What happened during one battle turn, for the front end to narrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerHit { damage: u32 },
    EnemyHit { damage: u32 },
    PotionDrunk { healed: u32, remaining: u32 },
    NoPotions,
    FleeSucceeded,
    FleeFailed,
    TurnWasted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_creation() {
        let enemy = Enemy::new("Goblin #1".to_string(), 15, 4);
        assert_eq!(enemy.name, "Goblin #1");
        assert_eq!(enemy.hp, 15);
        assert_eq!(enemy.attack, 4);
        assert!(enemy.is_alive());
    }

    #[test]
    fn test_enemy_take_damage() {
        let mut enemy = Enemy::new("Goblin #1".to_string(), 15, 4);
        enemy.take_damage(6);
        assert_eq!(enemy.hp, 9);
        assert!(enemy.is_alive());

        enemy.take_damage(9);
        assert_eq!(enemy.hp, 0);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_enemy_take_damage_no_underflow() {
        let mut enemy = Enemy::new("Goblin #1".to_string(), 15, 4);
        enemy.take_damage(100);
        assert_eq!(enemy.hp, 0);
    }
}
