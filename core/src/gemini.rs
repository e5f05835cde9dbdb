//! Gemini-backed implementation of the narrative generator.
//!
//! One blocking HTTP call per request. The caller is single-threaded and
//! never issues a second request while one is outstanding, so a blocking
//! client is the whole concurrency story. Retries are not performed here;
//! each failure is reported once with its category.

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::generator::{parse_payload, NarrativeGenerator, SetupResponse, TurnResponse};
use crate::prompt::{setup_prompt, turn_prompt, SYSTEM_INSTRUCTION, TURN_THINKING_BUDGET};
use crate::schema::{setup_schema, turn_schema};
use crate::state::{Decision, GameState};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

pub struct GeminiGenerator {
    http: reqwest::blocking::Client,
    config: GameConfig,
}

// Response envelope of the generateContent API. Only the fields the
// client reads are declared.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiGenerator {
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Issue one generateContent call and return the candidate text.
    fn generate(
        &self,
        prompt: &str,
        response_schema: Value,
        thinking_budget: Option<u32>,
    ) -> GameResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let mut generation_config = json!({
            "responseMimeType": "application/json",
            "responseSchema": response_schema,
        });
        if let Some(budget) = thinking_budget {
            generation_config["thinkingConfig"] = json!({ "thinkingBudget": budget });
        }

        let body = json!({
            "systemInstruction": { "parts": [ { "text": SYSTEM_INSTRUCTION } ] },
            "contents": [ { "role": "user", "parts": [ { "text": prompt } ] } ],
            "generationConfig": generation_config,
        });

        log::debug!("generator call: model={} prompt_len={}", self.config.model, prompt.len());

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        let raw = response.text()?;
        if !status.is_success() {
            return Err(GameError::Api {
                status: status.as_u16(),
                body: truncate(&raw),
            });
        }

        let envelope: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|e| GameError::MalformedResponse {
                reason: format!("unreadable response envelope: {e}"),
            })?;

        envelope
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .find(|t| !t.trim().is_empty())
            .ok_or(GameError::EmptyResponse)
    }
}

impl NarrativeGenerator for GeminiGenerator {
    fn fetch_setup(&self) -> GameResult<SetupResponse> {
        let text = self.generate(&setup_prompt(), setup_schema(), None)?;
        parse_payload(&text)
    }

    fn process_turn(
        &self,
        state: &GameState,
        decision: Option<&Decision>,
    ) -> GameResult<TurnResponse> {
        let prompt = turn_prompt(state, decision)?;
        let text = self.generate(&prompt, turn_schema(), Some(TURN_THINKING_BUDGET))?;
        parse_payload(&text)
    }
}

fn truncate(text: &str) -> String {
    const LIMIT: usize = 200;
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
