use dungeon_runner::campaign::{run_campaign, Ending};
use dungeon_runner::console::Console;
use dungeon_runner::player::Player;

fn main() {
    let mut console = Console::new();
    console.clear_screen();

    println!("Welcome to Dungeon Runner (2 levels)!");
    print!("\nEnter your hero name: ");
    use std::io::Write;
    let _ = std::io::stdout().flush();
    let name = console.read_line();
    let mut player = Player::new(&name);

    println!("\nHello {}! Prepare for adventure.", player.name);
    console.pause();

    let mut dice = rand::thread_rng();
    let ending = run_campaign(&mut player, &mut console, &mut dice);

    match ending {
        Ending::Victory => {
            println!(
                "\nCongratulations {}! You finished the 2 levels of Dungeon Runner.",
                player.name
            );
            println!(
                "Final stats: Level {} | Max HP {} | Attack {} | Potions {}",
                player.level, player.max_hp, player.attack, player.potions
            );
        }
        Ending::Defeat { level } => {
            println!("\nGame Over. You reached level {}.", level);
            if level == 1 {
                println!("{}'s journey ends here. Try again!", player.name);
            } else {
                println!("{} fought bravely. Game Over.", player.name);
            }
        }
        Ending::Retired { level } => {
            println!("\nYou chose to end your adventure. Final Level: {}", level);
        }
    }
}
