// Error taxonomy for agent calls and mode changes

use thiserror::Error;

/// Failure talking to the bonding agent CLI. Never fatal to the server:
/// handlers turn these into degraded payloads or a JSON error body.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("failed to start agent CLI: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("agent CLI timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("agent CLI exited with {code:?}: {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },

    #[error("malformed agent output: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

/// Failure of `POST /api/change-mode`.
#[derive(Debug, Error)]
pub enum ModeError {
    /// Rejected before the agent is invoked (HTTP 400).
    #[error("Invalid mode. Must be 'speed', 'streaming', or 'redundant'")]
    Invalid,

    /// The agent refused or failed the command (HTTP 500).
    #[error("{0}")]
    Command(#[source] AgentError),
}

impl ModeError {
    /// Message returned to the client. Non-zero exits carry the agent's stderr verbatim.
    pub fn client_message(&self) -> String {
        match self {
            ModeError::Invalid => self.to_string(),
            ModeError::Command(AgentError::NonZeroExit { stderr, .. }) => {
                format!("CLI error: {}", stderr)
            }
            ModeError::Command(e) => e.to_string(),
        }
    }
}
