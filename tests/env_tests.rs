//! Environment flow tests.
//!
//! These drive `WizardsEnv` through whole episodes and check the reset/step
//! contract: dealing, auto-play of scripted seats, scoring and termination.

use wizards_env::cards::Card;
use wizards_env::core::{SeatId, WizardsConfig};
use wizards_env::env::{Environment, WizardsEnv};
use wizards_env::policy::{LeftmostLegal, OpponentPolicy};
use wizards_env::rules::card_value;

fn env(suits: u8, max_rank: u8, players: usize, seed: u64) -> WizardsEnv {
    WizardsEnv::with_seed(WizardsConfig::new(suits, max_rank, players).unwrap(), seed)
}

/// Two suits, two ranks, two players: replay one trick by hand.
#[test]
fn test_minimal_table_first_trick() {
    let mut env = env(2, 2, 2, 2024);
    let obs = env.reset(None);

    let mut dealt: Vec<Card> = env.hands().values().flat_map(|h| h.remaining()).collect();
    dealt.sort_by_key(|c| (c.rank, c.suit));
    assert_eq!(
        dealt,
        vec![Card::new(1, 1), Card::new(1, 2), Card::new(2, 1), Card::new(2, 2)]
    );

    // The agent leads the first trick.
    assert_eq!(obs.trick, vec![Card::EMPTY; 2]);
    let action = 0;
    let agent_card = obs.hand[action];
    let opponent_hand = env.hands()[SeatId::new(1)].clone();

    let opponent_slot = LeftmostLegal
        .choose_slot(&opponent_hand, Some(agent_card.suit))
        .unwrap();
    let opponent_card = opponent_hand.get(opponent_slot).unwrap();

    let agent_wins = card_value(agent_card, agent_card.suit, 2)
        > card_value(opponent_card, agent_card.suit, 2);

    let result = env.step(action).unwrap();

    assert_eq!(result.info.tricks.len(), 1);
    let record = &result.info.tricks[0];
    assert_eq!(record.leader, SeatId::AGENT);
    assert_eq!(record.called_suit, agent_card.suit);
    assert_eq!(record.cards, vec![agent_card, opponent_card]);

    let expected_winner = if agent_wins { SeatId::AGENT } else { SeatId::new(1) };
    assert_eq!(record.winner, expected_winner);
    assert_eq!(result.reward, i64::from(agent_wins));
    assert!(!result.done);

    if agent_wins {
        assert_eq!(result.observation.trick, vec![Card::EMPTY; 2]);
    } else {
        // The opponent led the next trick with its remaining card.
        let led = env.hands()[SeatId::new(1)].remaining().count();
        assert_eq!(led, 0);
        assert!(!result.observation.trick[0].is_empty());
        assert_eq!(result.observation.trick[1], Card::EMPTY);
    }
}

/// The episode ends on exactly the step that plays the agent's last card.
#[test]
fn test_done_exactly_when_hand_exhausted() {
    for seed in 0..20 {
        let mut env = env(4, 6, 3, seed);
        let slots = env.config().cards_per_player();

        for step in 1..=slots {
            let action = env.legal_actions()[0];
            let result = env.step(action).unwrap();
            assert_eq!(result.done, step == slots, "seed {seed} step {step}");
            assert!(result.info.reason.is_none());
        }

        let scores: u32 = env.scores().values().sum();
        assert_eq!(scores as usize, slots);
        assert!(env.legal_actions().is_empty());
    }
}

/// Scripted seats ahead of the agent have played when control returns.
#[test]
fn test_seats_before_agent_have_played() {
    for seed in 0..20 {
        let mut env = env(4, 6, 4, seed);

        while !env.is_finished() {
            let trick = env.trick();
            match trick.leader() {
                None => assert!(trick.cards().values().all(|c| c.is_empty())),
                Some(leader) => {
                    assert!(!leader.is_agent());
                    for seat in SeatId::all(4) {
                        assert_eq!(trick.has_played(seat), seat >= leader, "seed {seed}");
                    }
                }
            }

            let action = env.legal_actions()[0];
            env.step(action).unwrap();
        }
    }
}

/// Observation trick state starts at the seat that led.
#[test]
fn test_observation_trick_rotation() {
    let mut found = false;

    for seed in 0..50 {
        let mut env = env(4, 6, 3, seed);
        while !env.is_finished() {
            let action = env.legal_actions()[0];
            let result = env.step(action).unwrap();
            if let Some(leader) = env.trick().leader() {
                let obs = &result.observation;
                assert_eq!(obs.trick[0], env.trick().cards()[leader]);
                assert_eq!(obs.trick.last(), Some(&Card::EMPTY));
                found = true;
            }
        }
    }

    assert!(found, "no trick was led by a scripted seat");
}

/// Same seed and same actions give the same trajectory.
#[test]
fn test_deterministic_replay() {
    let mut a = env(3, 4, 3, 77);
    let mut b = env(3, 4, 3, 77);

    while !a.is_finished() {
        let action = *a.legal_actions().last().unwrap();
        let ra = a.step(action).unwrap();
        let rb = b.step(action).unwrap();
        assert_eq!(ra, rb);
    }
    assert!(b.is_finished());
}

/// Reset after a finished episode deals a fresh one.
#[test]
fn test_reset_after_finish() {
    let mut env = env(2, 5, 2, 3);
    while !env.is_finished() {
        let action = env.legal_actions()[0];
        env.step(action).unwrap();
    }

    let obs = env.reset(Some(3));
    assert!(!env.is_finished());
    assert_eq!(obs.scores, vec![0, 0]);
    assert!(obs.hand.iter().all(|c| !c.is_empty()));
    assert!(env.observation_space().contains(&obs));
}

/// Observations always fit the declared observation space.
#[test]
fn test_observations_within_space() {
    let mut env = env(4, 13, 4, 8);
    let space = env.observation_space();
    assert_eq!(env.action_space().n, 13);

    while !env.is_finished() {
        let action = env.legal_actions()[0];
        let result = env.step(action).unwrap();
        assert!(space.contains(&result.observation));
    }
}

/// A single-seat table: the agent wins every trick.
#[test]
fn test_single_player_table() {
    let mut env = env(1, 3, 1, 0);
    for expected in 1..=3 {
        let result = env.step(expected as usize - 1).unwrap();
        assert_eq!(result.reward, expected);
    }
    assert!(env.is_finished());
}
