//! End-to-end campaign tests: whole playthroughs driven by scripted
//! decisions and controlled dice.

use std::collections::VecDeque;

use dungeon_runner::campaign::{run_campaign, Ending};
use dungeon_runner::combat::{CombatEvent, Enemy, PlayerAction};
use dungeon_runner::dice::Dice;
use dungeon_runner::frontend::Frontend;
use dungeon_runner::levels::LevelEvent;
use dungeon_runner::player::Player;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Dice that always land on the low end of the range.
struct MinDice;

impl Dice for MinDice {
    fn roll(&mut self, low: u32, _high: u32) -> u32 {
        low
    }
}

/// Front end that replays a fixed action script (falling back to a
/// default once exhausted) and answers prompts from fixed flags.
struct ScriptedFrontend {
    actions: VecDeque<PlayerAction>,
    fallback: PlayerAction,
    press_on_after_flee: bool,
    enter_next: bool,
    battles_started: u32,
    next_level_prompts: u32,
    potions_found: u32,
}

impl ScriptedFrontend {
    fn always(action: PlayerAction) -> Self {
        Self {
            actions: VecDeque::new(),
            fallback: action,
            press_on_after_flee: true,
            enter_next: true,
            battles_started: 0,
            next_level_prompts: 0,
            potions_found: 0,
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

    fn combat_event(&mut self, _event: &CombatEvent) {}

    fn level_event(&mut self, event: &LevelEvent) {
        if matches!(event, LevelEvent::PotionFound) {
            self.potions_found += 1;
        }
    }
}

#[test]
fn test_all_out_attacker_wins_with_min_rolls() {
    // Low rolls everywhere: weak enemies, weak hits, guaranteed potion
    // finds. Three goblins at two swings each, four orcs at three.
    let mut dice = MinDice;
    let mut player = Player::new("Tester");
    let mut frontend = ScriptedFrontend::always(PlayerAction::Attack);

    let ending = run_campaign(&mut player, &mut frontend, &mut dice);

    assert_eq!(ending, Ending::Victory);
    assert_eq!(frontend.battles_started, 7);
    assert_eq!(frontend.potions_found, 7);
    assert_eq!(player.level, 3);
    assert_eq!(player.max_hp, 53);
    assert_eq!(player.attack, 9);
    assert_eq!(player.hp, player.max_hp);
    assert_eq!(player.potions, 9);
}

#[test]
fn test_pacifist_dies_to_the_first_goblin() {
    let mut dice = MinDice;
    let mut player = Player::new("Tester");
    let mut frontend = ScriptedFrontend::always(PlayerAction::Pass);

    let ending = run_campaign(&mut player, &mut frontend, &mut dice);

    assert_eq!(ending, Ending::Defeat { level: 1 });
    assert_eq!(frontend.battles_started, 1);
    assert_eq!(player.hp, 0);
    assert_eq!(player.level, 1);
}

#[test]
fn test_fleeing_and_retreating_retires_on_level_one() {
    // MinDice: flee roll of 1 succeeds, penalty of 2 lands. Still
    // standing, the player is offered level 2 and turns it down.
    let mut dice = MinDice;
    let mut player = Player::new("Tester");
    let mut frontend = ScriptedFrontend::always(PlayerAction::Flee);
    frontend.press_on_after_flee = false;
    frontend.enter_next = false;

    let ending = run_campaign(&mut player, &mut frontend, &mut dice);

    assert_eq!(frontend.next_level_prompts, 1);
    assert_eq!(ending, Ending::Retired { level: 1 });
    assert_eq!(player.hp, 38);
    assert_eq!(player.max_hp, 40);
}

#[test]
fn test_surviving_an_abandoned_level_one_is_offered_level_two() {
    // A retreat from level 1 with HP left does not end the campaign on
    // its own: the descent prompt still fires, and accepting it drops
    // the player into level 2 without level 1's clear rewards.
    let mut dice = MinDice;
    let mut player = Player::new("Tester");
    let mut frontend = ScriptedFrontend::always(PlayerAction::Flee);
    frontend.press_on_after_flee = false;

    let ending = run_campaign(&mut player, &mut frontend, &mut dice);

    assert_eq!(frontend.next_level_prompts, 1);
    assert_eq!(frontend.battles_started, 2);
    // Fled out of level 2 alive as well: surviving the final level wins.
    assert_eq!(ending, Ending::Victory);
    assert_eq!(player.level, 1);
    assert_eq!(player.hp, 36);
}

#[test]
fn test_retreating_at_zero_hp_ends_in_defeat() {
    // The flee penalty lands before the retreat prompt; retreating at
    // zero HP is read as death, never as retirement.
    let mut dice = MinDice;
    let mut player = Player::new("Tester");
    player.hp = 1;
    let mut frontend = ScriptedFrontend::always(PlayerAction::Flee);
    frontend.press_on_after_flee = false;

    let ending = run_campaign(&mut player, &mut frontend, &mut dice);

    assert_eq!(ending, Ending::Defeat { level: 1 });
    assert_eq!(frontend.next_level_prompts, 0);
    assert_eq!(player.hp, 0);
}

#[test]
fn test_same_seed_replays_the_same_campaign() {
    let play = |seed: u64| {
        let mut dice = ChaCha8Rng::seed_from_u64(seed);
        let mut player = Player::new("Tester");
        let mut frontend = ScriptedFrontend::always(PlayerAction::Attack);
        let ending = run_campaign(&mut player, &mut frontend, &mut dice);
        (ending, player.level, player.hp, player.potions, frontend.battles_started)
    };

    assert_eq!(play(424242), play(424242));
}

#[test]
fn test_every_seed_lands_on_a_consistent_ending() {
    // An attack-only front end never flees and never declines, so the
    // only endings are victory with a full heal or death at zero HP.
    for seed in 0..40u64 {
        let mut dice = ChaCha8Rng::seed_from_u64(seed);
        let mut player = Player::new("Tester");
        let mut frontend = ScriptedFrontend::always(PlayerAction::Attack);

        let ending = run_campaign(&mut player, &mut frontend, &mut dice);

        match ending {
            Ending::Victory => {
                assert_eq!(player.level, 3);
                assert_eq!(player.hp, player.max_hp);
                assert_eq!(player.max_hp, 53);
            }
            Ending::Defeat { level: 1 } => {
                assert_eq!(player.level, 1);
                assert_eq!(player.hp, 0);
            }
            Ending::Defeat { level: 2 } => {
                assert_eq!(player.level, 2);
                assert_eq!(player.hp, 0);
            }
            other => panic!("unexpected ending for seed {}: {:?}", seed, other),
        }
    }
}
