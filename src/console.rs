//! Interactive console front end.
//!
//! Owns all terminal I/O for the playable game: prompts, narration, and
//! screen clearing. Malformed input never re-prompts; it resolves to the
//! safe default (a wasted turn in battle, "no" at yes/no prompts).

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::combat::{CombatEvent, Enemy, PlayerAction};
use crate::frontend::Frontend;
use crate::levels::LevelEvent;
use crate::player::Player;

/// Console-driven [`Frontend`]. Remembers the names of the current
/// matchup so turn narration can refer to both sides.
pub struct Console {
    player_name: String,
    enemy_name: String,
    // Potion finds arrive before the victory heal; hold the line so the
    // post-battle block prints in one piece.
    potion_found: bool,
}

impl Console {
    pub fn new() -> Self {
        Self {
            player_name: String::new(),
            enemy_name: String::new(),
            potion_found: false,
        }
    }

    /// Clears the terminal. Failures are ignored; a cluttered screen is
    /// not worth aborting the game over.
    pub fn clear_screen(&self) {
        let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }

    /// Reads one line from stdin, trimmed. EOF and read errors come
    /// back as an empty string so every prompt falls to its default.
    pub fn read_line(&self) -> String {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => line.trim().to_string(),
            Err(_) => String::new(),
        }
    }

    fn prompt(&self, text: &str) -> String {
        print!("{}", text);
        let _ = io::stdout().flush();
        self.read_line()
    }

    pub fn pause(&self) {
        self.prompt("\nPress Enter to continue...");
    }

    fn show_status(&self, player: &Player) {
        println!("\n=== {} ===", player.name);
        println!(
            "HP: {}/{}   Attack: {}   Potions: {}   Level: {}",
            player.hp, player.max_hp, player.attack, player.potions, player.level
        );
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for Console {
    fn level_started(&mut self, number: u32) {
        println!("\n=== Entering Level {} ===", number);
        self.pause();
    }

    fn battle_started(&mut self, player: &Player, enemy: &Enemy) {
        self.clear_screen();
        self.player_name = player.name.clone();
        self.enemy_name = enemy.name.clone();
        println!(
            "You encounter {} (HP: {}, Attack: {})",
            enemy.name, enemy.hp, enemy.attack
        );
        println!("\n--- Battle Start: {} vs {} ---", player.name, enemy.name);
    }

    fn choose_battle_action(&mut self, player: &Player, enemy: &Enemy) -> PlayerAction {
        self.show_status(player);
        println!("{}: {} HP | {}: {} HP", player.name, player.hp, enemy.name, enemy.hp);
        let answer = self.prompt(
            "\nChoose action:\n1) Attack\n2) Use Potion\n3) Try to Flee (50% chance)\nEnter choice: ",
        );
        match answer.parse::<u32>() {
            Ok(1) => PlayerAction::Attack,
            Ok(2) => PlayerAction::UsePotion,
            Ok(3) => PlayerAction::Flee,
            _ => PlayerAction::Pass,
        }
    }

    fn continue_level_after_flee(&mut self, _player: &Player, _level: u32) -> bool {
        let answer = self.prompt(
            "Do you want to continue this level? 1) Yes  2) No (retreat to camp)\nChoice: ",
        );
        if matches!(answer.parse::<u32>(), Ok(1)) {
            true
        } else {
            println!("You retreated to camp and skip remaining enemies.");
            false
        }
    }

    fn enter_next_level(&mut self, level: u32) -> bool {
        self.clear_screen();
        let answer = self.prompt(&format!(
            "\nDo you want to enter Level {} (harder)?\n1) Yes\n2) No (End game with current progress)\nChoice: ",
            level
        ));
        matches!(answer.parse::<u32>(), Ok(1))
    }

    fn combat_event(&mut self, event: &CombatEvent) {
        match event {
            CombatEvent::PlayerHit { damage } => {
                println!(
                    "{} attacks {} for {} damage!",
                    self.player_name, self.enemy_name, damage
                );
            }
            CombatEvent::EnemyHit { damage } => {
                println!(
                    "{} hits {} for {} damage!",
                    self.enemy_name, self.player_name, damage
                );
            }
            CombatEvent::PotionDrunk { healed, .. } => {
                println!("{} uses a potion and heals {} HP!", self.player_name, healed);
            }
            CombatEvent::NoPotions => println!("No potions left!"),
            CombatEvent::FleeSucceeded => {
                println!("{} successfully fled!", self.player_name);
            }
            CombatEvent::FleeFailed => println!("Flee failed!"),
            CombatEvent::TurnWasted => println!("Invalid option, you lose your turn!"),
        }
    }

    fn level_event(&mut self, event: &LevelEvent) {
        match event {
            LevelEvent::FleePenalty { damage } => {
                println!("While fleeing you lost {} HP.", damage);
            }
            LevelEvent::PotionFound => self.potion_found = true,
            LevelEvent::VictoryHeal { healed } => {
                println!("\n{} defeated {}!", self.player_name, self.enemy_name);
                if self.potion_found {
                    println!("You found a potion!");
                    self.potion_found = false;
                }
                println!("You recover {} HP after the fight.", healed);
                self.pause();
            }
            LevelEvent::LevelCleared { number, new_level, max_hp, attack } => {
                println!("\nLevel {} cleared!", number);
                println!(
                    "You leveled up! Now Level {}. Max HP: {}, Attack: {}",
                    new_level, max_hp, attack
                );
                self.pause();
            }
        }
    }
}
