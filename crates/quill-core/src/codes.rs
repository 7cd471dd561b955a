use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// Every finding quill can report, keyed by a stable `DARxxx` code.
///
/// Codes in the `DAR0xx` range are style violations detected by the
/// documentation parser and passed through verbatim. The remaining ranges
/// group by concern: parameters (1xx), returns (2xx), yields (3xx),
/// raises (4xx), and variables (5xx).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCode {
    GenericSyntax,
    EmptyDescription,
    Indentation,
    ExcessBlankLine,
    EmptyType,
    MissingParameter,
    ExcessParameter,
    ParameterTypeMismatch,
    ParameterTypeMissing,
    MissingReturn,
    ExcessReturn,
    ReturnTypeMismatch,
    MissingYield,
    ExcessYield,
    MissingRaise,
    ExcessRaise,
    ExcessVariable,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 17] = [
        ErrorCode::GenericSyntax,
        ErrorCode::EmptyDescription,
        ErrorCode::Indentation,
        ErrorCode::ExcessBlankLine,
        ErrorCode::EmptyType,
        ErrorCode::MissingParameter,
        ErrorCode::ExcessParameter,
        ErrorCode::ParameterTypeMismatch,
        ErrorCode::ParameterTypeMissing,
        ErrorCode::MissingReturn,
        ErrorCode::ExcessReturn,
        ErrorCode::ReturnTypeMismatch,
        ErrorCode::MissingYield,
        ErrorCode::ExcessYield,
        ErrorCode::MissingRaise,
        ErrorCode::ExcessRaise,
        ErrorCode::ExcessVariable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::GenericSyntax => "DAR001",
            ErrorCode::EmptyDescription => "DAR002",
            ErrorCode::Indentation => "DAR003",
            ErrorCode::ExcessBlankLine => "DAR004",
            ErrorCode::EmptyType => "DAR005",
            ErrorCode::MissingParameter => "DAR101",
            ErrorCode::ExcessParameter => "DAR102",
            ErrorCode::ParameterTypeMismatch => "DAR103",
            ErrorCode::ParameterTypeMissing => "DAR104",
            ErrorCode::MissingReturn => "DAR201",
            ErrorCode::ExcessReturn => "DAR202",
            ErrorCode::ReturnTypeMismatch => "DAR203",
            ErrorCode::MissingYield => "DAR301",
            ErrorCode::ExcessYield => "DAR302",
            ErrorCode::MissingRaise => "DAR401",
            ErrorCode::ExcessRaise => "DAR402",
            ErrorCode::ExcessVariable => "DAR501",
        }
    }

    /// True for the parser-detected style violations (`DAR0xx`).
    pub fn is_style(&self) -> bool {
        matches!(
            self,
            ErrorCode::GenericSyntax
                | ErrorCode::EmptyDescription
                | ErrorCode::Indentation
                | ErrorCode::ExcessBlankLine
                | ErrorCode::EmptyType
        )
    }

    /// One-line description of the whole error class.
    pub fn general_message(&self) -> &'static str {
        match self {
            ErrorCode::GenericSyntax => "Syntax error",
            ErrorCode::EmptyDescription => "Empty description",
            ErrorCode::Indentation => "Incorrect indentation",
            ErrorCode::ExcessBlankLine => "Excess blank lines",
            ErrorCode::EmptyType => "Empty type",
            ErrorCode::MissingParameter => "Missing parameter(s) in Docstring",
            ErrorCode::ExcessParameter => "Excess parameter(s) in Docstring",
            ErrorCode::ParameterTypeMismatch => {
                "Expected type for parameter does not match the documented type"
            }
            ErrorCode::ParameterTypeMissing => "Missing parameter type(s) in Docstring",
            ErrorCode::MissingReturn => "Missing \"Returns\" in Docstring",
            ErrorCode::ExcessReturn => "Excess \"Returns\" in Docstring",
            ErrorCode::ReturnTypeMismatch => "Return type mismatch",
            ErrorCode::MissingYield => "Missing \"Yields\" in Docstring",
            ErrorCode::ExcessYield => "Excess \"Yields\" in Docstring",
            ErrorCode::MissingRaise => "Missing exception(s) in Raises section",
            ErrorCode::ExcessRaise => "Excess exception(s) in Raises section",
            ErrorCode::ExcessVariable => "Excess variable description",
        }
    }

    /// Generic remediation shown at high verbosity.
    pub fn fix_hint(&self) -> &'static str {
        match self {
            ErrorCode::GenericSyntax => "rewrite the docstring so the parser can read it",
            ErrorCode::EmptyDescription => "add a description after the item's colon",
            ErrorCode::Indentation => "indent item continuations past the item name",
            ErrorCode::ExcessBlankLine => "remove blank lines inside the section",
            ErrorCode::EmptyType => "fill in the type or drop the empty parentheses",
            ErrorCode::MissingParameter => "document the parameter in the arguments section",
            ErrorCode::ExcessParameter => "remove the parameter or add it to the signature",
            ErrorCode::ParameterTypeMismatch => "make the documented type match the annotation",
            ErrorCode::ParameterTypeMissing => "add a type to the documented parameter",
            ErrorCode::MissingReturn => "add a returns section",
            ErrorCode::ExcessReturn => "remove the returns section",
            ErrorCode::ReturnTypeMismatch => "make the documented return type match the annotation",
            ErrorCode::MissingYield => "add a yields section",
            ErrorCode::ExcessYield => "remove the yields section",
            ErrorCode::MissingRaise => "document the exception in the raises section",
            ErrorCode::ExcessRaise => "remove the exception or raise it explicitly",
            ErrorCode::ExcessVariable => "remove the variable or define it in the body",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownCode(wanted.to_string()))
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
