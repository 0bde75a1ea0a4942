//! Error types.
//!
//! Adapter failures and configuration problems surface as [`GameError`] and
//! end the session; registry misses are [`CastError`] so the loop can keep
//! going.

/// Registry lookup misses from [`crate::sim::Cast::remove_actor`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    #[error("group not found: {0}")]
    GroupNotFound(String),
    #[error("actor {actor} not found in group {group}")]
    ActorNotFound { group: String, actor: usize },
}

/// Top-level error for the game session
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("render error: {0}")]
    Render(String),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("cast has no actor in group {0}")]
    MissingActor(&'static str),
    #[error(transparent)]
    Cast(#[from] CastError),
}
