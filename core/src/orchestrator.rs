//! Turn orchestrator: the one component that owns game state.
//!
//! Phase machine:
//!   Setup -> Playing -> GameOver | Victory
//!
//! RULES:
//!   - At most one generator call is in flight at a time.
//!   - A failed call never mutates the held state.
//!   - Terminal phases are absorbing: advance() is rejected there.
//!   - The narrative log is append-only and its length equals the turn
//!     counter once play has started.

use crate::error::{GameError, GameResult};
use crate::generator::{NarrativeGenerator, SetupResponse, TurnResponse};
use crate::state::{Decision, GameState, NarrativeEntry};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Setup,
    Playing,
    GameOver,
    Victory,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

pub struct TurnOrchestrator<G: NarrativeGenerator> {
    session_id: String,
    generator: G,
    phase: GamePhase,
    setup: Option<SetupResponse>,
    state: Option<GameState>,
    in_flight: bool,
}

impl<G: NarrativeGenerator> TurnOrchestrator<G> {
    pub fn new(generator: G) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            generator,
            phase: GamePhase::Setup,
            setup: None,
            state: None,
            in_flight: false,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn setup(&self) -> Option<&SetupResponse> {
        self.setup.as_ref()
    }

    /// The generator behind this session. Used by tests and tooling to
    /// inspect scripted implementations.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Request the setup payload and hold it for archetype selection.
    /// A failure here is fatal for the session: there is no game without
    /// the generator reachable.
    pub fn fetch_setup(&mut self) -> GameResult<&SetupResponse> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::NotReady("setup is already complete"));
        }
        if self.in_flight {
            return Err(GameError::TurnInFlight);
        }

        self.in_flight = true;
        let result = self.generator.fetch_setup();
        self.in_flight = false;

        let setup = result?;
        log::info!(
            "session={} setup received: {} archetypes, mood={}, rival={}",
            self.session_id,
            setup.archetypes.len(),
            setup.market_mood,
            setup.rival.name,
        );
        self.setup = Some(setup);
        Ok(self.setup.as_ref().expect("setup stored above"))
    }

    /// Build the turn-0 state from the chosen archetype and immediately
    /// request the first turn (no decision attached). On success the phase
    /// moves to Playing; on failure no partial state is retained.
    pub fn initialize(
        &mut self,
        archetype_id: &str,
        player_name: &str,
        company_name: &str,
    ) -> GameResult<&GameState> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::NotReady("game already started"));
        }
        let setup = self
            .setup
            .as_ref()
            .ok_or(GameError::NotReady("fetch_setup must succeed first"))?;
        let archetype = setup
            .archetypes
            .iter()
            .find(|a| a.id == archetype_id)
            .ok_or_else(|| GameError::UnknownArchetype(archetype_id.to_string()))?;

        let initial = GameState::initial(
            archetype,
            player_name,
            company_name,
            &setup.market_mood,
            Some(setup.rival.clone()),
        );

        if self.in_flight {
            return Err(GameError::TurnInFlight);
        }
        self.in_flight = true;
        let result = self.generator.process_turn(&initial, None);
        self.in_flight = false;

        let response = result?;
        self.warn_on_violations(&response);

        log::info!(
            "session={} initialized: archetype={} capital={}",
            self.session_id,
            archetype_id,
            archetype.starting_capital,
        );

        let next = apply_turn(&initial, &response, None);
        self.enter(next);
        Ok(self.state.as_ref().expect("state set on enter"))
    }

    /// Resolve one turn with the player's decision. On failure the prior
    /// state is preserved unchanged and the caller may resubmit.
    pub fn advance(&mut self, decision: Decision) -> GameResult<&GameState> {
        match self.phase {
            GamePhase::Setup => return Err(GameError::NotReady("game has not started")),
            GamePhase::GameOver | GamePhase::Victory => return Err(GameError::TerminalState),
            GamePhase::Playing => {}
        }
        if self.in_flight {
            return Err(GameError::TurnInFlight);
        }

        self.in_flight = true;
        let current = self.state.as_ref().expect("playing phase holds a state");
        let result = self.generator.process_turn(current, Some(&decision));
        self.in_flight = false;

        let response = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!(
                    "session={} turn {} failed: {e}",
                    self.session_id,
                    self.state.as_ref().map(|s| s.turn).unwrap_or(0),
                );
                return Err(e);
            }
        };
        self.warn_on_violations(&response);

        let prev = self.state.as_ref().expect("playing phase holds a state");
        let next = apply_turn(prev, &response, Some(&decision));
        log::debug!(
            "session={} turn {} -> {} mood={} game_over={}",
            self.session_id,
            prev.turn,
            next.turn,
            next.market_mood,
            next.is_game_over,
        );
        self.enter(next);
        Ok(self.state.as_ref().expect("state set on enter"))
    }

    fn enter(&mut self, next: GameState) {
        self.phase = if next.is_game_over {
            if next.is_victory == Some(true) {
                GamePhase::Victory
            } else {
                GamePhase::GameOver
            }
        } else {
            GamePhase::Playing
        };
        self.state = Some(next);
    }

    fn warn_on_violations(&self, response: &TurnResponse) {
        for violation in response.contract_violations() {
            log::warn!("session={} contract violation: {violation}", self.session_id);
        }
    }
}

/// Merge a turn response into the previous snapshot.
///
/// Turn counter + 1; exactly one narrative entry appended with month equal
/// to the new turn; indicators and both ledgers replaced wholesale; the
/// dilemma, headlines and options replaced, never merged. A terminal
/// response clears the options: a finished game offers no further choices.
pub fn apply_turn(prev: &GameState, response: &TurnResponse, decision: Option<&Decision>) -> GameState {
    let month = prev.turn + 1;

    let mut narrative_log = prev.narrative_log.clone();
    narrative_log.push(NarrativeEntry {
        month,
        text: response.narrative.clone(),
        event_summary: response.event.clone(),
        decision_made: decision
            .map(|d| format!("Opção {} | Excedente: {}", d.choice_id, d.surplus_allocation)),
        outcome_summary: None,
    });

    let current_options = if response.is_game_over {
        Vec::new()
    } else {
        response.options.clone()
    };

    GameState {
        turn: month,
        player_name: prev.player_name.clone(),
        company_name: prev.company_name.clone(),
        archetype_id: prev.archetype_id.clone(),
        rival: prev.rival.clone(),
        inflation_rate: response.inflation_rate,
        interest_rate: response.interest_rate,
        market_mood: response.market_context.clone(),
        narrative_log,
        corporate: response.corporate_updates.clone(),
        personal: response.personal_updates.clone(),
        current_event: Some(response.event.clone()),
        headlines: Some(response.headlines.clone()),
        current_options,
        is_game_over: response.is_game_over,
        game_over_reason: response.game_over_reason.clone(),
        is_victory: response.is_victory,
    }
}
