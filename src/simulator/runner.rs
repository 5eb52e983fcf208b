//! Simulation runner: plays full campaigns under an autopilot.
//!
//! Each run gets its own seeded RNG so a batch is reproducible from a
//! single base seed. Statistics are tallied inside the autopilot front
//! end from the same events the interactive console narrates.

use super::config::SimConfig;
use super::report::SimReport;
use crate::campaign::{run_campaign, Ending};
use crate::combat::{CombatEvent, Enemy, PlayerAction};
use crate::frontend::Frontend;
use crate::levels::LevelEvent;
use crate::player::Player;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Outcome of one simulated campaign.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub ending: Ending,
    pub final_level: u32,
    pub final_hp: u32,
    pub final_max_hp: u32,
    pub battles: u32,
    pub potions_found: u32,
    pub potions_drunk: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
}

/// Headless front end: always attacks unless low on HP with a potion in
/// hand, never flees, always descends. Tallies what it sees.
struct AutoPilot {
    potion_percent: u32,
    battles: u32,
    potions_found: u32,
    potions_drunk: u32,
    damage_dealt: u64,
    damage_taken: u64,
}

impl AutoPilot {
    fn new(potion_percent: u32) -> Self {
        Self {
            potion_percent,
            battles: 0,
            potions_found: 0,
            potions_drunk: 0,
            damage_dealt: 0,
            damage_taken: 0,
        }
    }
}

impl Frontend for AutoPilot {
    fn level_started(&mut self, _number: u32) {}

    fn battle_started(&mut self, _player: &Player, _enemy: &Enemy) {
        self.battles += 1;
    }

    fn choose_battle_action(&mut self, player: &Player, _enemy: &Enemy) -> PlayerAction {
        if player.potions > 0 && player.hp * 100 < player.max_hp * self.potion_percent {
            PlayerAction::UsePotion
        } else {
            PlayerAction::Attack
        }
    }

    fn continue_level_after_flee(&mut self, _player: &Player, _level: u32) -> bool {
        true
    }

    fn enter_next_level(&mut self, _level: u32) -> bool {
        true
    }

    fn combat_event(&mut self, event: &CombatEvent) {
        match event {
            CombatEvent::PlayerHit { damage } => self.damage_dealt += u64::from(*damage),
            CombatEvent::EnemyHit { damage } => self.damage_taken += u64::from(*damage),
            CombatEvent::PotionDrunk { .. } => self.potions_drunk += 1,
            _ => {}
        }
    }

    fn level_event(&mut self, event: &LevelEvent) {
        match event {
            LevelEvent::FleePenalty { damage } => self.damage_taken += u64::from(*damage),
            LevelEvent::PotionFound => self.potions_found += 1,
            _ => {}
        }
    }
}

/// Run the full batch and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + u64::from(run_idx)),
            None => ChaCha8Rng::from_entropy(),
        };

        let record = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {:?}, Level {}, Battles {}, Potions {}/{}",
                run_idx + 1,
                config.num_runs,
                record.ending,
                record.final_level,
                record.battles,
                record.potions_drunk,
                record.potions_found
            );
        }

        all_runs.push(record);
    }

    SimReport::from_runs(all_runs)
}

fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunRecord {
    let mut player = Player::new("SimHero");
    let mut pilot = AutoPilot::new(config.potion_percent);

    let ending = run_campaign(&mut player, &mut pilot, rng);

    RunRecord {
        ending,
        final_level: player.level,
        final_hp: player.hp,
        final_max_hp: player.max_hp,
        battles: pilot.battles,
        potions_found: pilot.potions_found,
        potions_drunk: pilot.potions_drunk,
        damage_dealt: pilot.damage_dealt,
        damage_taken: pilot.damage_taken,
    }
}
