//! Integrity checking engine for quill.
//!
//! Compares each documented unit against its parsed docstring and produces
//! findings:
//! - DAR101/DAR102: missing / excess parameter
//! - DAR103/DAR104: parameter type mismatch / missing parameter type
//! - DAR201/DAR202/DAR203: missing / excess return, return type mismatch
//! - DAR301/DAR302: missing / excess yield
//! - DAR401/DAR402: missing / excess raise
//! - DAR501: excess variable
//! - DAR0xx: style findings reported by the parser

pub mod checker;
pub mod checks;
pub mod checks_extended;
pub mod checks_util;
pub mod collection;
pub mod error;
pub mod suppress;

pub use checker::IntegrityChecker;
pub use checks_util::{Check, CheckContext};
pub use error::{CheckerError, RunFault};
pub use suppress::Suppression;
