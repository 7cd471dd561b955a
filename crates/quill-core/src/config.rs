//! Configuration file loading for quill.
//!
//! Reads a JSON policy file (conventionally `quill.json`) and provides typed
//! access to all settings. A missing file means defaults; a malformed one is
//! an error, since policy problems must never be silently ignored.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codes::ErrorCode;
use crate::error::ConfigError;
use crate::template::MessageTemplate;

/// Documentation dialect; selects the parser collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocstringStyle {
    #[default]
    Google,
    Sphinx,
    Numpy,
}

impl DocstringStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocstringStyle::Google => "google",
            DocstringStyle::Sphinx => "sphinx",
            DocstringStyle::Numpy => "numpy",
        }
    }

    /// Only Sphinx docstrings carry a Variables (`:var x:`) section.
    pub fn supports_variables(&self) -> bool {
        matches!(self, DocstringStyle::Sphinx)
    }
}

impl fmt::Display for DocstringStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much documentation is required before full checking applies.
/// Ordered from most lenient to strictest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Strictness {
    /// A one-line summary is enough.
    #[serde(rename = "short", alias = "any", alias = "short_description")]
    ShortDescription,
    /// A summary plus free text is enough.
    #[serde(rename = "long", alias = "long_description")]
    LongDescription,
    #[default]
    #[serde(rename = "full", alias = "full_description")]
    FullDescription,
}

/// Top-level quill configuration. One value per checker; never global.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub style: DocstringStyle,
    #[serde(default)]
    pub strictness: Strictness,
    /// Codes never reported.
    #[serde(default)]
    pub ignore: BTreeSet<ErrorCode>,
    /// Exception names that never need documenting.
    #[serde(default)]
    pub ignore_raise: BTreeSet<String>,
    /// Glob patterns on unit names; matching units are not checked.
    #[serde(default)]
    pub ignore_names: Vec<String>,
    #[serde(default)]
    pub message_template: Option<String>,
    /// Overrides whether the Variables check runs for this style.
    #[serde(default)]
    pub check_variables: Option<bool>,
    /// Propagate parser faults out of finalize instead of swallowing them.
    #[serde(default)]
    pub raise_errors: bool,
    /// Worker pool size. Defaults to the available parallelism.
    #[serde(default)]
    pub workers: Option<usize>,
}

impl QuillConfig {
    /// Load configuration from `path`.
    /// Returns defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// True when `code` is globally silenced by this policy.
    pub fn is_ignored(&self, code: ErrorCode) -> bool {
        self.ignore.contains(&code)
    }

    pub fn variables_checked(&self) -> bool {
        self.check_variables
            .unwrap_or_else(|| self.style.supports_variables())
    }

    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }

    /// Parsed message template, if one is configured.
    pub fn template(&self) -> Result<Option<MessageTemplate>, ConfigError> {
        self.message_template
            .as_deref()
            .map(MessageTemplate::parse)
            .transpose()
    }

    /// Eager validation of everything that can be checked without a parser.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_count() == 0 {
            return Err(ConfigError::NoWorkers);
        }
        self.template()?;
        self.ignore_name_set()?;
        Ok(())
    }

    /// Compiled `ignore_names` patterns, or `None` when there are none.
    pub fn ignore_name_set(&self) -> Result<Option<globset::GlobSet>, ConfigError> {
        if self.ignore_names.is_empty() {
            return Ok(None);
        }
        let mut builder = globset::GlobSetBuilder::new();
        for pattern in &self.ignore_names {
            let glob = globset::Glob::new(pattern).map_err(|source| ConfigError::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        builder
            .build()
            .map(Some)
            .map_err(|source| ConfigError::InvalidGlob {
                pattern: self.ignore_names.join(","),
                source,
            })
    }
}
