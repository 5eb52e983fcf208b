//! The player character and its HP and potion bookkeeping.

use crate::constants::{DEFAULT_NAME, STARTING_ATTACK, STARTING_MAX_HP, STARTING_POTIONS};

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub level: u32,
    pub max_hp: u32,
    pub hp: u32,
    pub attack: u32,
    pub potions: u32,
}

impl Player {
    /// Creates a fresh level-1 character. A blank name falls back to
    /// "Hero".
    pub fn new(name: &str) -> Self {
        let name = name.trim();
        let name = if name.is_empty() { DEFAULT_NAME } else { name };
        Self {
            name: name.to_string(),
            level: 1,
            max_hp: STARTING_MAX_HP,
            hp: STARTING_MAX_HP,
            attack: STARTING_ATTACK,
            potions: STARTING_POTIONS,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Heals up to `amount`, clamped to max HP. Returns the HP actually
    /// gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - before
    }
}
