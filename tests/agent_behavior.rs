//! Move selection priorities and value learning of the Q-learning agent

use noughts::{
    AgentConfig, Error,
    q_learning::{QLearningAgent, Strategy},
    tictactoe::{BoardState, Player},
};

fn board(s: &str) -> BoardState {
    BoardState::from_string(s).unwrap()
}

fn agent_o() -> QLearningAgent {
    QLearningAgent::new(AgentConfig::new(Player::O).with_seed(11)).unwrap()
}

fn decide(agent: &mut QLearningAgent, state: &BoardState, explore: bool) -> (usize, Strategy) {
    let decision = agent
        .decide(state, &state.empty_positions(), explore)
        .unwrap();
    (decision.action, decision.strategy)
}

#[test]
fn empty_board_takes_the_center() {
    let mut agent = agent_o();
    assert_eq!(
        decide(&mut agent, &BoardState::new(), false),
        (4, Strategy::Opening)
    );
}

#[test]
fn blocks_an_opponent_line() {
    let mut agent = agent_o();
    assert_eq!(
        decide(&mut agent, &board("XX.O....."), false),
        (2, Strategy::Block)
    );
}

#[test]
fn completes_its_own_line() {
    let mut agent = agent_o();
    assert_eq!(
        decide(&mut agent, &board("OO.X....."), false),
        (2, Strategy::WinNow)
    );
}

#[test]
fn winning_beats_blocking() {
    let mut agent = agent_o();
    assert_eq!(
        decide(&mut agent, &board("OO.XX...."), false),
        (2, Strategy::WinNow)
    );
}

#[test]
fn blocking_beats_the_center() {
    let mut agent = agent_o();
    assert_eq!(
        decide(&mut agent, &board("XX......."), true),
        (2, Strategy::Block)
    );
}

#[test]
fn blocking_beats_learned_values() {
    let mut agent = agent_o();
    let state = board("XX..O....");
    let mut values = [0.0; 9];
    values[8] = 10.0;
    agent.table_mut().insert(state, values);

    assert_eq!(decide(&mut agent, &state, false), (2, Strategy::Block));
}

#[test]
fn learned_values_pick_the_best_legal_cell() {
    let mut agent = agent_o();
    let state = board("X...O....");
    let mut values = [0.0; 9];
    values[0] = 5.0; // occupied, never chosen
    values[8] = 0.5;
    values[3] = -1.0;
    agent.table_mut().insert(state, values);

    for _ in 0..10 {
        assert_eq!(decide(&mut agent, &state, false), (8, Strategy::Learned));
    }
}

#[test]
fn learned_ties_stay_within_the_maximizers() {
    let mut agent = agent_o();
    let state = board("X...O....");
    let mut values = [0.0; 9];
    values[3] = 0.25;
    values[7] = 0.25;
    agent.table_mut().insert(state, values);

    for _ in 0..20 {
        let (action, strategy) = decide(&mut agent, &state, false);
        assert!(action == 3 || action == 7, "picked {action}");
        assert_eq!(strategy, Strategy::Learned);
    }
}

#[test]
fn unseen_state_is_added_with_zero_values() {
    let mut agent = agent_o();
    let state = board("X...O....");
    decide(&mut agent, &state, false);
    assert_eq!(agent.table().get(&state), Some(&[0.0; 9]));
}

#[test]
fn exploration_only_when_enabled() {
    let config = AgentConfig::new(Player::O)
        .with_exploration_rate(1.0)
        .with_seed(3);
    let mut agent = QLearningAgent::new(config).unwrap();
    let state = board("X...O....");
    let legal = state.empty_positions();

    for _ in 0..20 {
        let decision = agent.decide(&state, &legal, true).unwrap();
        assert_eq!(decision.strategy, Strategy::Explore);
        assert!(legal.contains(&decision.action));
    }
    let decision = agent.decide(&state, &legal, false).unwrap();
    assert_eq!(decision.strategy, Strategy::Learned);
}

#[test]
fn exploration_never_overrides_tactics() {
    let config = AgentConfig::new(Player::O)
        .with_exploration_rate(1.0)
        .with_seed(3);
    let mut agent = QLearningAgent::new(config).unwrap();
    assert_eq!(
        decide(&mut agent, &BoardState::new(), true),
        (4, Strategy::Opening)
    );
}

#[test]
fn same_seed_same_choices() {
    let config = AgentConfig::new(Player::O)
        .with_exploration_rate(0.5)
        .with_seed(99);
    let mut a = QLearningAgent::new(config.clone()).unwrap();
    let mut b = QLearningAgent::new(config).unwrap();
    let state = board("X...O....");
    let legal = state.empty_positions();

    for _ in 0..30 {
        assert_eq!(
            a.choose_action(&state, &legal, true).unwrap(),
            b.choose_action(&state, &legal, true).unwrap()
        );
    }
}

#[test]
fn no_available_actions_is_an_error() {
    let mut agent = agent_o();
    let result = agent.choose_action(&board("XOXXOOOXX"), &[], false);
    assert!(matches!(result, Err(Error::NoValidMoves)));
}

#[test]
fn repeated_terminal_updates_approach_the_reward() {
    let mut agent = agent_o();
    let state = board("XX.OO....");
    let next = board("XX.OOO...");

    let mut previous = 0.0;
    for _ in 0..50 {
        agent.update(&state, 5, 1.0, &next, true);
        let value = agent.table().value(&state, 5);
        assert!(value > previous);
        assert!(value <= 1.0);
        previous = value;
    }
    assert!((1.0 - previous) < 0.01);
}

#[test]
fn zero_learning_rate_leaves_values_unchanged() {
    let config = AgentConfig::new(Player::O).with_learning_rate(0.0);
    let mut agent = QLearningAgent::new(config).unwrap();
    let state = board("X........");
    let next = board("X...O....");

    agent.update(&state, 4, 1.0, &next, true);
    agent.update(&state, 4, 0.0, &next, false);
    assert_eq!(agent.table().value(&state, 4), 0.0);
}

#[test]
fn non_terminal_target_discounts_the_best_next_value() {
    let config = AgentConfig::new(Player::O)
        .with_learning_rate(1.0)
        .with_discount_factor(0.9);
    let mut agent = QLearningAgent::new(config).unwrap();
    let state = board("X........");
    let next = board("X...O....");
    let mut next_values = [0.0; 9];
    next_values[8] = 0.5;
    next_values[2] = -0.2;
    agent.table_mut().insert(next, next_values);

    agent.update(&state, 4, 0.0, &next, false);
    assert!((agent.table().value(&state, 4) - 0.45).abs() < 1e-12);
}

#[test]
fn out_of_range_update_is_ignored() {
    let mut agent = agent_o();
    let state = board("X........");
    agent.update(&state, 9, 1.0, &state, true);
    assert!(agent.table().is_empty());
}

#[test]
fn invalid_config_is_rejected() {
    let config = AgentConfig::new(Player::O).with_learning_rate(1.5);
    assert!(QLearningAgent::new(config).is_err());
    let config = AgentConfig::new(Player::O).with_exploration_rate(f64::NAN);
    assert!(QLearningAgent::new(config).is_err());
}
