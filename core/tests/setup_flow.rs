//! Setup and initialization tests: archetype selection and the turn-0 seed.

mod common;

use common::{sample_setup, sample_turn, ScriptedGenerator};
use tycoon_core::error::GameError;
use tycoon_core::orchestrator::{GamePhase, TurnOrchestrator};
use tycoon_core::state::PersonalFinance;

/// The turn-0 state handed to the generator seeds corporate cash and
/// valuation from the chosen archetype, with the personal ledger zeroed,
/// before any response is merged.
#[test]
fn initialize_seeds_capital_from_archetype() {
    let mut orchestrator =
        TurnOrchestrator::new(ScriptedGenerator::with_turns(vec![Ok(sample_turn())]));
    orchestrator.fetch_setup().unwrap();
    orchestrator.initialize("hacker", "Rafael", "Garagem Ltda").unwrap();

    let generator = orchestrator.generator();
    let seen = generator.seen_states.borrow();
    let seed = &seen[0];
    assert_eq!(seed.turn, 0);
    assert_eq!(seed.corporate.cash, 10_000.0);
    assert_eq!(seed.corporate.valuation, 10_000.0);
    assert_eq!(seed.personal, PersonalFinance::zeroed());
    assert!(seed.narrative_log.is_empty());
    assert_eq!(seed.market_mood, "Bull Market");
    assert!(seed.rival.is_some());
    // First turn carries no decision.
    assert!(generator.seen_decisions.borrow()[0].is_none());
}

/// Round trip: setup, pick "Hacker de Garagem" (capital 10 000), start.
/// The first merged state is turn 1 with a single month-1 log entry.
#[test]
fn round_trip_hacker_de_garagem() {
    let mut orchestrator =
        TurnOrchestrator::new(ScriptedGenerator::with_turns(vec![Ok(sample_turn())]));
    let setup = orchestrator.fetch_setup().unwrap();
    assert_eq!(setup.archetypes.len(), 3);
    let chosen = setup
        .archetypes
        .iter()
        .find(|a| a.name == "Hacker de Garagem")
        .unwrap();
    assert_eq!(chosen.starting_capital, 10_000.0);
    let id = chosen.id.clone();

    let state = orchestrator.initialize(&id, "Rafael", "Garagem Ltda").unwrap();
    assert_eq!(state.turn, 1);
    assert_eq!(state.narrative_log.len(), 1);
    assert_eq!(state.narrative_log[0].month, 1);
    assert_eq!(orchestrator.phase(), GamePhase::Playing);
}

/// Archetype offers keep the presentation order of the setup payload.
#[test]
fn archetypes_keep_presentation_order() {
    let mut orchestrator = TurnOrchestrator::new(ScriptedGenerator::with_turns(vec![]));
    let setup = orchestrator.fetch_setup().unwrap();
    let ids: Vec<&str> = setup.archetypes.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["hacker", "herdeira", "consultor"]);
}

/// A setup fetch failure leaves the orchestrator in Setup with nothing held.
#[test]
fn setup_failure_retains_nothing() {
    let mut orchestrator = TurnOrchestrator::new(ScriptedGenerator::new(None, vec![]));
    let err = orchestrator.fetch_setup().unwrap_err();
    assert!(err.is_connectivity(), "got {err:?}");
    assert_eq!(orchestrator.phase(), GamePhase::Setup);
    assert!(orchestrator.state().is_none());
    assert!(orchestrator.setup().is_none());
}

/// A failed first turn retains no partial state; a retry can then succeed.
#[test]
fn first_turn_failure_retains_nothing() {
    let mut orchestrator = TurnOrchestrator::new(ScriptedGenerator::with_turns(vec![
        Err(GameError::EmptyResponse),
        Ok(sample_turn()),
    ]));
    orchestrator.fetch_setup().unwrap();

    let err = orchestrator.initialize("hacker", "Rafael", "Garagem Ltda").unwrap_err();
    assert!(matches!(err, GameError::EmptyResponse), "got {err:?}");
    assert!(orchestrator.state().is_none(), "no partial state after a failed start");
    assert_eq!(orchestrator.phase(), GamePhase::Setup);

    // Full restart of the same session succeeds.
    let state = orchestrator.initialize("hacker", "Rafael", "Garagem Ltda").unwrap();
    assert_eq!(state.turn, 1);
}

/// Choosing an id outside the offered archetypes never reaches the network.
#[test]
fn unknown_archetype_is_rejected_locally() {
    let mut orchestrator = TurnOrchestrator::new(ScriptedGenerator::with_turns(vec![]));
    orchestrator.fetch_setup().unwrap();
    let err = orchestrator.initialize("barão", "Rafael", "Garagem Ltda").unwrap_err();
    assert!(matches!(err, GameError::UnknownArchetype(_)), "got {err:?}");
    assert!(orchestrator.generator().seen_states.borrow().is_empty());
}

/// Initialize before a successful setup fetch is rejected.
#[test]
fn initialize_requires_setup() {
    let mut orchestrator = TurnOrchestrator::new(ScriptedGenerator::with_turns(vec![]));
    let err = orchestrator.initialize("hacker", "Rafael", "Garagem Ltda").unwrap_err();
    assert!(matches!(err, GameError::NotReady(_)), "got {err:?}");
}

/// Setup has one shot per session: once play started it is not refetched.
#[test]
fn setup_not_refetched_after_start() {
    let mut orchestrator =
        TurnOrchestrator::new(ScriptedGenerator::with_turns(vec![Ok(sample_turn())]));
    orchestrator.fetch_setup().unwrap();
    orchestrator.initialize("hacker", "Rafael", "Garagem Ltda").unwrap();
    let err = orchestrator.fetch_setup().unwrap_err();
    assert!(matches!(err, GameError::NotReady(_)), "got {err:?}");
}

/// The sample setup used across these tests matches the wire contract.
#[test]
fn sample_setup_has_three_archetypes_and_a_rival() {
    let setup = sample_setup();
    assert_eq!(setup.archetypes.len(), 3);
    assert!(!setup.rival.name.is_empty());
}
