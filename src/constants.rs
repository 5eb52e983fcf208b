// Starting character sheet
pub const STARTING_MAX_HP: u32 = 40;
pub const STARTING_ATTACK: u32 = 6;
pub const STARTING_POTIONS: u32 = 2;
pub const DEFAULT_NAME: &str = "Hero";

// Battle tuning. The player swings with a wider upper spread (+2) than
// enemies (+1); the asymmetry is deliberate balance, not an accident.
pub const PLAYER_DAMAGE_BONUS: u32 = 2;
pub const ENEMY_DAMAGE_BONUS: u32 = 1;

// Potions
pub const POTION_HEAL_MIN: u32 = 8;
pub const POTION_HEAL_MAX: u32 = 15;

// Fleeing
pub const FLEE_SUCCESS_PERCENT: u32 = 50;
pub const FLEE_PENALTY_MIN: u32 = 2;
pub const FLEE_PENALTY_MAX: u32 = 5;

// Post-victory recovery
pub const VICTORY_HEAL_MIN: u32 = 2;
pub const VICTORY_HEAL_MAX: u32 = 6;
