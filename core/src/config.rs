//! Runtime configuration for the generator transport.
//!
//! Layering: optional JSON config file first, then environment overrides.
//! The API key comes from the environment only and never lives in a file.

use crate::error::{GameError, GameResult};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable holding the API key. Mandatory.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Optional environment override for the model name.
pub const MODEL_VAR: &str = "TYCOON_MODEL";

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    model: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl GameConfig {
    /// Load configuration, optionally merging a JSON file at `path`.
    /// A missing API key is a configuration error, reported before any
    /// network call is attempted.
    pub fn load(path: Option<&Path>) -> GameResult<Self> {
        let file = match path {
            Some(p) => {
                let raw = fs::read_to_string(p).map_err(|e| {
                    GameError::Config(format!("cannot read {}: {e}", p.display()))
                })?;
                serde_json::from_str::<ConfigFile>(&raw).map_err(|e| {
                    GameError::Config(format!("invalid config {}: {e}", p.display()))
                })?
            }
            None => ConfigFile::default(),
        };

        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GameError::Config(format!("{API_KEY_VAR} is not set")))?;

        let model = env::var(MODEL_VAR)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .or(file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = file
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout_secs: file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}
