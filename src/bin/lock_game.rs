//! Decide the reference two-color lock: 4 holes, hand of 2.

use lock_games::core::LockConfig;
use lock_games::lock::LockGame;

fn main() {
    lock_games::log();
    println!("Starting...");

    let game = match LockGame::binary(LockConfig::binary(4, 2)) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("invalid lock: {e}");
            std::process::exit(1);
        }
    };
    println!("Game graph initialized. Proceeding to calculate existence of winning strategy...");

    let can_player_win = game.can_player_win();
    println!("{can_player_win}");
    if can_player_win {
        println!("Winning space for the adversary is empty. A winning strategy may exist for the player.");
    } else {
        println!("Winning space for the adversary is non-empty. The player cannot surely win.");
    }
}
