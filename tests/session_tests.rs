//! Live sessions played against the k-color game graph.

use lock_games::core::{LockConfig, LockRng, LockSession, LockState, Phase, Selection};
use lock_games::graph::Action;
use lock_games::lock::{LockGame, LockLocation};

fn play_turn(session: &mut LockSession, holes: &[usize], cycles: &[usize]) -> Option<usize> {
    for &hole in holes {
        assert!(session.select(hole));
    }
    for &hole in cycles {
        assert!(session.cycle(hole));
    }
    if session.phase() == Phase::Victory {
        return None;
    }
    assert!(session.commit());
    session.adversary_turn()
}

#[test]
fn test_session_turn_is_a_graph_transition() {
    let config = LockConfig::colored(4, 2, 3);
    let game = LockGame::colored(config.clone()).unwrap();
    let graph = game.graph();

    let start = LockState::new([0, 1, 2, 0], 3);
    let mut session = LockSession::with_state(start.clone(), 2, LockRng::new(5));

    // The hand picked on one turn is recolored after the adversary's
    // rotation, at the start of the next turn. Clicked out of order; the
    // graph stores hands sorted.
    let amount = play_turn(&mut session, &[3, 1], &[]).unwrap();
    assert!(session.select(1));
    assert!(session.select(3));
    assert!(session.cycle(1));

    let from = LockLocation::new(start.to_coloring(), Selection::from_holes(&[1, 3]));
    let action = Action(amount as u16);
    for next in Selection::combinations(4, 2) {
        let to = LockLocation::new(session.state().to_coloring(), next);
        assert!(graph.contains_transition(&from, action, &to));
    }
}

#[test]
fn test_session_state_is_a_graph_location() {
    let config = LockConfig::colored(3, 1, 3).with_seed(9);
    let game = LockGame::colored(config.clone()).unwrap();
    let session = LockSession::new(&config).unwrap();
    assert!(game.graph().id_of(&session.state().to_location()).is_some());
}

#[test]
fn test_same_seed_same_adversary() {
    let config = LockConfig::colored(5, 2, 2).with_seed(77);
    let mut a = LockSession::new(&config).unwrap();
    let mut b = LockSession::new(&config).unwrap();

    for _ in 0..5 {
        if a.phase() == Phase::Victory {
            break;
        }
        let ra = play_turn(&mut a, &[0, 2], &[]);
        let rb = play_turn(&mut b, &[0, 2], &[]);
        assert_eq!(ra, rb);
        assert_eq!(a.state(), b.state());
    }
}

#[test]
fn test_solver_verdict_for_single_hand() {
    // With one hole per turn on three holes the adversary can always keep a
    // mixed ring mixed, so every mixed starting location is losing.
    let game = LockGame::colored(LockConfig::colored(3, 1, 3)).unwrap();
    let w = game.compute_winning_set();
    let start = LockState::new([0, 1, 2], 3).to_location();
    let id = game.graph().id_of(&start).unwrap();
    assert!(w.contains(id));
}

#[test]
fn test_state_json_round_trip() {
    let state = LockState::new([2, 0, 1, 1], 3);
    let json = serde_json::to_string(&state).unwrap();
    let restored: LockState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn test_rng_state_resumes_adversary() {
    let mut rng = LockRng::new(3);
    let _ = rng.gen_range_usize(0..10);
    let saved = rng.state();
    let json = serde_json::to_string(&saved).unwrap();

    let mut resumed = LockRng::from_state(&serde_json::from_str(&json).unwrap());
    for _ in 0..10 {
        assert_eq!(rng.gen_range_usize(0..100), resumed.gen_range_usize(0..100));
    }
}
