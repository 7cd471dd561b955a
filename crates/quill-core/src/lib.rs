//! Core types, error codes, and configuration for quill.
//!
//! This crate provides the data model shared by all quill crates:
//! - [`types`]: Units, line ranges, and findings
//! - [`docview`]: The structured documentation view produced by parsers
//! - [`codes`]: The closed `DARxxx` error taxonomy
//! - [`config`]: Policy loading from `quill.json`
//! - [`template`]: Report message templates
//! - [`parser`]: The [`DocstringParser`](parser::DocstringParser) collaborator seam
//! - [`error`]: Configuration and parser error types

pub mod codes;
pub mod config;
pub mod docview;
pub mod error;
pub mod parser;
pub mod template;
pub mod types;

pub use codes::ErrorCode;
pub use config::{DocstringStyle, QuillConfig, Strictness};
pub use docview::{DocItem, DocSection, DocShape, DocView, NoqaIndex, StyleFinding};
pub use error::{ConfigError, ParseError};
pub use types::{Finding, LineRange, Parameter, Unit};
