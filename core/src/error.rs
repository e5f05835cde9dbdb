use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// The generator could not be reached at all (DNS, TLS, timeout).
    #[error("Generator unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The generator answered with a non-success HTTP status.
    #[error("Generator returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The generator answered but the payload carried no text at all.
    #[error("Empty response from generator")]
    EmptyResponse,

    /// The payload text could not be parsed as the declared schema,
    /// even after stripping an optional code-fence wrapper.
    #[error("Malformed generator payload: {reason}")]
    MalformedResponse { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Game is over, no further turns accepted")]
    TerminalState,

    #[error("A turn is already in flight")]
    TurnInFlight,

    #[error("Orchestrator not ready: {0}")]
    NotReady(&'static str),

    #[error("Unknown archetype id '{0}'")]
    UnknownArchetype(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GameError {
    /// Connectivity-class failures, as opposed to payload-class ones.
    /// The runner picks its user-facing message per category.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            GameError::Transport(_) | GameError::Api { .. } | GameError::EmptyResponse
        )
    }
}

pub type GameResult<T> = Result<T, GameError>;
