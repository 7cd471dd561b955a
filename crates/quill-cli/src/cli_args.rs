use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use quill_core::{DocstringStyle, Strictness};

#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Docstring integrity checking")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Raise the log level (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check extracted units against their parsed docstrings
    Check {
        /// Collaborator output files (JSON)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Policy file
        #[arg(long, default_value = "quill.json")]
        config: PathBuf,
        /// Documentation style
        #[arg(long, value_enum)]
        style: Option<StyleArg>,
        /// Minimum documentation before full checking applies
        #[arg(long, value_enum)]
        strictness: Option<StrictnessArg>,
        /// Comma-separated error codes to ignore (e.g. DAR101,DAR402)
        #[arg(long, value_delimiter = ',')]
        ignore: Vec<String>,
        /// Message detail: 1 terse, 2 full, 3 full with context
        #[arg(long, default_value = "2")]
        verbosity: u8,
        /// Report line template, e.g. "{path}:{line}: {msg_id}"
        #[arg(long)]
        message_template: Option<String>,
        /// Fail on unreadable docstrings instead of skipping them
        #[arg(long)]
        raise_errors: bool,
        /// Worker pool size
        #[arg(long)]
        workers: Option<usize>,
    },

    /// List every error code with its meaning
    Codes,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StyleArg {
    Google,
    Sphinx,
    Numpy,
}

impl From<StyleArg> for DocstringStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Google => DocstringStyle::Google,
            StyleArg::Sphinx => DocstringStyle::Sphinx,
            StyleArg::Numpy => DocstringStyle::Numpy,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StrictnessArg {
    #[value(alias = "any")]
    Short,
    Long,
    Full,
}

impl From<StrictnessArg> for Strictness {
    fn from(arg: StrictnessArg) -> Self {
        match arg {
            StrictnessArg::Short => Strictness::ShortDescription,
            StrictnessArg::Long => Strictness::LongDescription,
            StrictnessArg::Full => Strictness::FullDescription,
        }
    }
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
