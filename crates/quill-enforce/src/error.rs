use thiserror::Error;

use quill_core::{ConfigError, ParseError};

/// A unit whose documentation could not be turned into a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to read the docstring of `{unit}` (line {line}): {error}")]
pub struct RunFault {
    pub unit: String,
    pub line: u32,
    #[source]
    pub error: ParseError,
}

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("checker is finalized; no more units can be scheduled")]
    Closed,

    #[error("failed to start the worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Fault(#[from] RunFault),
}
