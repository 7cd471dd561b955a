//! Message templates for report lines, e.g. `{path}:{obj}:{line}: {msg_id}: {msg}`.
//!
//! Templates are parsed once, when the checker is built. Unknown
//! placeholders and unbalanced braces are configuration errors; `{{` and
//! `}}` render literal braces.

use crate::error::ConfigError;

pub const DEFAULT_TEMPLATE: &str = "{path}:{obj}:{line}: {msg_id}: {msg}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Path,
    Obj,
    Line,
    EndLine,
    MsgId,
    Msg,
    Name,
    Expected,
    Actual,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "path" => Field::Path,
            "obj" => Field::Obj,
            "line" => Field::Line,
            "end_line" => Field::EndLine,
            "msg_id" => Field::MsgId,
            "msg" => Field::Msg,
            "name" => Field::Name,
            "expected" => Field::Expected,
            "actual" => Field::Actual,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// Values substituted into a template for one finding.
#[derive(Debug, Clone, Default)]
pub struct TemplateValues<'a> {
    pub path: &'a str,
    pub obj: &'a str,
    pub line: u32,
    pub end_line: u32,
    pub msg_id: &'a str,
    pub msg: &'a str,
    pub name: Option<&'a str>,
    pub expected: Option<&'a str>,
    pub actual: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
            segments: vec![
                Segment::Field(Field::Path),
                Segment::Literal(":".into()),
                Segment::Field(Field::Obj),
                Segment::Literal(":".into()),
                Segment::Field(Field::Line),
                Segment::Literal(": ".into()),
                Segment::Field(Field::MsgId),
                Segment::Literal(": ".into()),
                Segment::Field(Field::Msg),
            ],
        }
    }
}

impl MessageTemplate {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, n) in chars.by_ref() {
                        if n == '}' {
                            closed = true;
                            break;
                        }
                        name.push(n);
                    }
                    if !closed {
                        return Err(ConfigError::MalformedTemplate {
                            offset,
                            reason: "unclosed `{`".into(),
                        });
                    }
                    let field = Field::from_name(name.trim())
                        .ok_or_else(|| ConfigError::UnknownPlaceholder(name.trim().to_string()))?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
                '}' => {
                    return Err(ConfigError::MalformedTemplate {
                        offset,
                        reason: "unmatched `}`".into(),
                    });
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn render(&self, values: &TemplateValues<'_>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => match field {
                    Field::Path => out.push_str(values.path),
                    Field::Obj => out.push_str(values.obj),
                    Field::Line => out.push_str(&values.line.to_string()),
                    Field::EndLine => out.push_str(&values.end_line.to_string()),
                    Field::MsgId => out.push_str(values.msg_id),
                    Field::Msg => out.push_str(values.msg),
                    Field::Name => out.push_str(values.name.unwrap_or_default()),
                    Field::Expected => out.push_str(values.expected.unwrap_or_default()),
                    Field::Actual => out.push_str(values.actual.unwrap_or_default()),
                },
            }
        }
        out
    }
}
