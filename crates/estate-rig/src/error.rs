//! Error types for estate-rig.

use estate_core::ErrorKind;

/// Result type alias for tool calls.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned to the agent by a tool call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying client call failed.
    #[error("tool error: {tool}: {source}")]
    Tool {
        tool: &'static str,
        source: estate_core::Error,
    },
}

impl Error {
    /// Wraps a client error raised while running `tool`.
    pub fn tool(tool: &'static str, source: estate_core::Error) -> Self {
        Self::Tool { tool, source }
    }

    /// Returns the name of the tool that failed.
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::Tool { tool, .. } => tool,
        }
    }

    /// Returns the kind of the underlying client error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Tool { source, .. } => source.kind(),
        }
    }
}
