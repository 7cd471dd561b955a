use std::path::PathBuf;

use thiserror::Error;

use crate::config::DocstringStyle;

/// Policy problems. Always surfaced eagerly, never suppressed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown error code `{0}`")]
    UnknownCode(String),

    #[error("no documentation parser registered for the {0} style")]
    UnsupportedStyle(DocstringStyle),

    #[error("malformed message template at byte {offset}: {reason}")]
    MalformedTemplate { offset: usize, reason: String },

    #[error("unknown placeholder `{{{0}}}` in message template")]
    UnknownPlaceholder(String),

    #[error("verbosity must be between 1 and 3, got {0}")]
    InvalidVerbosity(u8),

    #[error("worker pool needs at least one thread")]
    NoWorkers,

    #[error("invalid ignore_names pattern `{pattern}`: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fault raised by a documentation parser while building a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed docstring: {0}")]
    Malformed(String),

    #[error("no documentation view for `{name}` at line {line}")]
    MissingView { name: String, line: u32 },
}
