use std::fmt;
use std::sync::Arc;

use quill_core::template::MessageTemplate;
use quill_core::{ConfigError, Finding};

use crate::human::HumanFormatter;
use crate::ReportFormatter;

/// How much context each report line carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Terse message only.
    Low,
    /// General message plus the terse message.
    #[default]
    Medium,
    /// Medium, plus the docstring excerpt and a fix hint.
    High,
}

impl Verbosity {
    pub fn level(&self) -> u8 {
        match self {
            Verbosity::Low => 1,
            Verbosity::Medium => 2,
            Verbosity::High => 3,
        }
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Verbosity::Low),
            2 => Ok(Verbosity::Medium),
            3 => Ok(Verbosity::High),
            other => Err(ConfigError::InvalidVerbosity(other)),
        }
    }
}

/// Finalized, sorted findings for one source, ready to render.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    findings: Arc<[Finding]>,
    verbosity: Verbosity,
    source: String,
    template: MessageTemplate,
}

impl ErrorReport {
    /// `findings` must already be in report order.
    pub fn new(
        findings: Arc<[Finding]>,
        verbosity: Verbosity,
        source: &str,
        template: Option<MessageTemplate>,
    ) -> Self {
        Self {
            findings,
            verbosity,
            source: source.to_string(),
            template: template.unwrap_or_default(),
        }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn template(&self) -> &MessageTemplate {
        &self.template
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&HumanFormatter.format_report(self))
    }
}
