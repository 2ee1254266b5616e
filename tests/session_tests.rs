//! Full-game integration tests.
//!
//! Hand-built tables exercise single deterministic paths through the
//! turn loop; builder-dealt tables exercise the whole pipeline with an
//! always-draw script. Tests that shuffle never assert on deck order
//! afterwards.

use kitten_rules::core::{Card, GameState, PlayerId};
use kitten_rules::io::{Prompt, RecordingOutput, ScriptedInput};
use kitten_rules::session::{GameOutcome, GameSession, TableBuilder};

fn position(messages: &[String], needle: &str) -> usize {
    messages
        .iter()
        .position(|m| m == needle)
        .unwrap_or_else(|| panic!("message not found: {}", needle))
}

// =============================================================================
// Deterministic Scenarios
// =============================================================================

/// A defused kitten put back on top claims the next player.
#[test]
fn test_defused_kitten_on_top_claims_the_next_player() {
    let mut state = GameState::new(2, 42);
    state.set_deck(vec![Card::BeardCat, Card::ExplodingKitten]);
    state.add_to_hand(PlayerId::new(0), Card::Defuse);
    let mut input = ScriptedInput::new().with_integers([0]);
    let mut output = RecordingOutput::new();

    let mut session = GameSession::new(state, &mut input, &mut output);
    let outcome = session.run();
    let state = session.state().clone();

    assert_eq!(outcome, GameOutcome::Winner(PlayerId::new(0)));
    assert!(state.hand(PlayerId::new(0)).is_empty());
    // The hand held no action cards, so the only prompt in the whole
    // game is the insert position.
    assert_eq!(
        input.prompts(),
        &[Prompt::Integer {
            text: "Choose position to insert Exploding Kitten (0-1): ".to_string(),
            min: 0,
            max: 1,
        }]
    );
    let messages = output.messages();
    let defused = position(messages, "Player 0 defused the Exploding Kitten.");
    let exploded = position(messages, "Player 1 exploded.");
    assert!(defused < exploded);
    assert!(output.contains("Player 0 wins!"));
}

/// A vetoed Shuffle is still spent, asks no pass count, and leaves the
/// pile order alone.
#[test]
fn test_vetoed_shuffle_is_spent_and_changes_nothing() {
    let mut state = GameState::new(2, 42);
    state.set_deck(vec![Card::TacoCat, Card::BeardCat]);
    state.add_to_hand(PlayerId::new(0), Card::Shuffle);
    state.add_to_hand(PlayerId::new(1), Card::Nope);
    let mut input = ScriptedInput::new().with_integers([1]).with_answers([true]);
    let mut output = RecordingOutput::new();

    let mut session = GameSession::new(state, &mut input, &mut output).with_max_turns(1);
    let outcome = session.run();
    let state = session.state().clone();

    assert_eq!(outcome, GameOutcome::TurnLimit);
    // Menu, then the veto question. Never a pass count.
    assert_eq!(
        input.prompts(),
        &[
            Prompt::Integer {
                text: "Player 0: 0 = draw, 1 = play Shuffle: ".to_string(),
                min: 0,
                max: 1,
            },
            Prompt::YesNo {
                text: "Player 1 has a NOPE. Play it? (y/n): ".to_string(),
            },
        ]
    );
    // Shuffle spent, Nope spent, ending draw took the old top card.
    assert_eq!(state.hand(PlayerId::new(0)), &[Card::BeardCat]);
    assert!(state.hand(PlayerId::new(1)).is_empty());
    assert_eq!(state.deck(), &[Card::TacoCat]);
    assert!(output.contains("Player 1 played NOPE."));
    assert!(output.contains("Action was cancelled by NOPE."));
}

/// A bottom draw that surfaces the kitten ends the turn after the
/// defuse, with no second ending draw.
#[test]
fn test_bottom_draw_surfaces_the_kitten_and_ends_the_turn() {
    let mut state = GameState::new(2, 42);
    state.set_deck(vec![Card::ExplodingKitten, Card::TacoCat]);
    state.add_to_hand(PlayerId::new(0), Card::DrawFromBottom);
    state.add_to_hand(PlayerId::new(0), Card::Defuse);
    let mut input = ScriptedInput::new().with_integers([1, 1]);
    let mut output = RecordingOutput::new();

    let mut session = GameSession::new(state, &mut input, &mut output);
    let outcome = session.run();

    // Turn one asks exactly twice: the menu, then the insert position.
    // Burying the kitten at the bottom dooms player 0 two turns later.
    assert_eq!(
        input.prompts(),
        &[
            Prompt::Integer {
                text: "Player 0: 0 = draw, 1 = play Draw From Bottom: ".to_string(),
                min: 0,
                max: 1,
            },
            Prompt::Integer {
                text: "Choose position to insert Exploding Kitten (0-1): ".to_string(),
                min: 0,
                max: 1,
            },
        ]
    );
    assert_eq!(outcome, GameOutcome::Winner(PlayerId::new(1)));
    let messages = output.messages();
    let drew = position(messages, "Drew from the bottom: Exploding Kitten");
    let defused = position(messages, "Player 0 defused the Exploding Kitten.");
    let exploded = position(messages, "Player 0 exploded.");
    assert!(drew < defused);
    assert!(defused < exploded);
    assert!(input.is_exhausted());
}

/// An elimination mid-game keeps the session going until one player is
/// left, skipping the dead seat.
#[test]
fn test_play_continues_past_an_elimination() {
    let mut state = GameState::new(3, 42);
    // Bottom to top: player 0 draws a cat, player 1 explodes, player 2
    // draws a cat, player 0 explodes, player 2 wins.
    state.set_deck(vec![
        Card::BeardCat,
        Card::ExplodingKitten,
        Card::TacoCat,
        Card::ExplodingKitten,
        Card::TacoCat,
    ]);
    let mut input = ScriptedInput::new();
    let mut output = RecordingOutput::new();

    let mut session = GameSession::new(state, &mut input, &mut output);
    let outcome = session.run();
    let state = session.state().clone();

    assert_eq!(outcome, GameOutcome::Winner(PlayerId::new(2)));
    assert!(state.is_player_dead(PlayerId::new(0)));
    assert!(state.is_player_dead(PlayerId::new(1)));
    assert_eq!(state.living_player_count(), 1);
    let messages = output.messages();
    let first = position(messages, "Player 1 exploded.");
    let second = position(messages, "Player 0 exploded.");
    assert!(first < second);
}

// =============================================================================
// Dealt Tables
// =============================================================================

/// A builder-dealt game driven by an always-draw script runs to a
/// single survivor. Kittens defused onto the top cascade until the
/// Defuses run out.
#[test]
fn test_dealt_table_runs_to_a_single_survivor() {
    let state = TableBuilder::new().player_count(3).build(7);
    let mut input = ScriptedInput::new().with_integers(vec![0; 500]);
    let mut output = RecordingOutput::new();

    let mut session = GameSession::new(state, &mut input, &mut output);
    let outcome = session.run();
    let state = session.state().clone();

    let GameOutcome::Winner(winner) = outcome else {
        panic!("an always-draw game must end in a winner, got {:?}", outcome);
    };
    assert_eq!(state.living_player_count(), 1);
    assert!(!state.is_player_dead(winner));
    assert!(output.contains(&format!("{} wins!", winner)));
}

/// The always-draw run is deterministic for a fixed seed.
#[test]
fn test_dealt_table_outcome_is_reproducible() {
    let run = |seed: u64| {
        let state = TableBuilder::new().player_count(4).build(seed);
        let mut input = ScriptedInput::new().with_integers(vec![0; 500]);
        let mut output = RecordingOutput::new();
        let outcome = GameSession::new(state, &mut input, &mut output).run();
        (outcome, output.messages().to_vec())
    };

    assert_eq!(run(11), run(11));
}

// =============================================================================
// Outcome Serialization
// =============================================================================

/// Outcomes serialize for match records.
#[test]
fn test_outcome_serde_round_trip() {
    let outcome = GameOutcome::Winner(PlayerId::new(2));
    let json = serde_json::to_string(&outcome).unwrap();
    let back: GameOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(outcome, back);

    let json = serde_json::to_string(&GameOutcome::TurnLimit).unwrap();
    let cap: GameOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(cap, GameOutcome::TurnLimit);
}
