//! Narrative generator interface and payload envelope handling.
//!
//! RULE: the client runs no simulation of its own. Every number and every
//! sentence in a response is authoritative. A turn either deserializes
//! completely and replaces state wholesale, or it is discarded entirely.

use crate::error::{GameError, GameResult};
use crate::state::{
    Archetype, CorporateFinance, Decision, GameOption, GameState, PersonalFinance, Rival,
    MAX_STRESS,
};
use crate::types::Rate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The external service that produces every game state fragment.
/// Implemented over HTTP in production and scripted in tests.
pub trait NarrativeGenerator {
    /// Setup request: introduction, initial market mood, exactly three
    /// archetype offers (in presentation order) and a generated rival.
    fn fetch_setup(&self) -> GameResult<SetupResponse>;

    /// Turn request. The first turn carries no decision; every later turn
    /// carries the full current state plus the player's decision.
    fn process_turn(
        &self,
        state: &GameState,
        decision: Option<&Decision>,
    ) -> GameResult<TurnResponse>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupResponse {
    pub intro: String,
    pub market_mood: String,
    pub archetypes: Vec<Archetype>,
    pub rival: Rival,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    pub narrative: String,
    /// Updated market-mood label.
    pub market_context: String,
    pub inflation_rate: Rate,
    pub interest_rate: Rate,
    /// 3 to 5 short fictional news items.
    #[serde(default)]
    pub headlines: Vec<String>,
    /// Full replacement corporate ledger.
    pub corporate_updates: CorporateFinance,
    /// Full replacement personal ledger, investments list included. The
    /// generator carries holdings forward; the client never reconciles.
    pub personal_updates: PersonalFinance,
    /// The next dilemma.
    pub event: String,
    pub options: Vec<GameOption>,
    pub is_game_over: bool,
    #[serde(default)]
    pub game_over_reason: Option<String>,
    #[serde(default)]
    pub is_victory: Option<bool>,
}

impl TurnResponse {
    /// Data-contract checks beyond what the schema can express. The
    /// generator owns clamping and dedup; the client only flags drift so
    /// it shows up in logs and tests.
    pub fn contract_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        let stress = self.personal_updates.stress;
        if !(0.0..=MAX_STRESS).contains(&stress) {
            violations.push(format!("stress {stress} outside [0, {MAX_STRESS}]"));
        }

        if self.options.len() > 3 {
            violations.push(format!("{} options offered, at most 3 allowed", self.options.len()));
        }

        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].iter().any(|o| o.id == option.id) {
                violations.push(format!("duplicate option id {}", option.id));
            }
        }

        if !self.is_game_over && self.options.is_empty() {
            violations.push("no options offered for a non-terminal turn".to_string());
        }

        violations
    }
}

/// Strip an optional Markdown code-fence wrapper from a payload.
/// Accepts ```json ... ``` as well as a bare ``` pair.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Parse a generator payload after fence stripping. An empty payload and
/// unparsable JSON are distinct failures so the caller can report them
/// under the right category.
pub fn parse_payload<T: DeserializeOwned>(text: &str) -> GameResult<T> {
    let cleaned = strip_code_fence(text);
    if cleaned.is_empty() {
        return Err(GameError::EmptyResponse);
    }
    serde_json::from_str(cleaned).map_err(|e| {
        log::error!("failed to parse generator payload: {e}; payload starts: {}", snippet(cleaned));
        GameError::MalformedResponse {
            reason: format!("{e} (payload starts: {})", snippet(cleaned)),
        }
    })
}

fn snippet(text: &str) -> String {
    const LIMIT: usize = 120;
    if text.len() <= LIMIT {
        text.to_string()
    } else {
        let mut end = LIMIT;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}
