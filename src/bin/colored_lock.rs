//! Build and solve a three-color lock: 3 holes, hand of 2.

use lock_games::core::LockConfig;
use lock_games::lock::LockGame;

fn main() {
    lock_games::log();

    let config = LockConfig::colored(3, 2, 3);
    let game = match LockGame::colored(config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("invalid lock: {e}");
            std::process::exit(1);
        }
    };

    let (winning, stats) = game.solve();
    log::info!(
        "{} locations, {} transitions, winning set {} after {} iterations ({} us)",
        game.graph().len(),
        game.graph().transition_count(),
        winning.len(),
        stats.iterations,
        stats.time_us
    );
    log::info!(
        "pruned {} target locations, {:.1} us per iteration",
        stats.pruned(),
        stats.avg_iteration_us()
    );
    println!("Done.");
}
