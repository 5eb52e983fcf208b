//! Dungeon Runner: a small turn-based dungeon crawl.
//!
//! The game core (combat, levels, campaign) is pure logic behind two
//! seams: [`dice::Dice`] supplies randomness and [`frontend::Frontend`]
//! supplies decisions and narration. The interactive console and the
//! headless balance simulator are just two implementations of the
//! latter.

pub mod campaign;
pub mod combat;
pub mod console;
pub mod constants;
pub mod dice;
pub mod frontend;
pub mod levels;
pub mod player;
pub mod simulator;
