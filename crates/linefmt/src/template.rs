//! `{`-style template strings for rendering records to text.
//!
//! A template mixes literal text with `{name}` or `{name:spec}` placeholders,
//! where `spec` is `[[fill]align][width][.precision]`:
//!
//! - `align`: `<` left (default), `>` right, `^` center
//! - `fill`: any character placed immediately before an align character
//! - `width`: minimum printed width, padded per the alignment
//! - `.precision`: maximum width, truncated from the right (no ellipsis)
//!
//! `{{` and `}}` render literal braces. A placeholder with an empty name is
//! positional and only valid in single-value templates rendered through
//! [`Template::render_value`].
//!
//! Widths and truncation count characters, not bytes, so multibyte text is
//! never split mid-sequence.

use crate::error::{FormatError, Result};
use crate::types::LogRecord;

/// Text alignment within a padded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Align {
    /// Pad on the right
    #[default]
    Left,
    /// Pad on the left
    Right,
    /// Pad on both sides, extra fill on the right
    Center,
}

/// Parsed format spec for one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSpec {
    fill: char,
    align: Align,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: Align::Left,
            width: None,
            precision: None,
        }
    }
}

impl FieldSpec {
    /// Truncates to `precision` characters, then pads to `width`.
    fn apply(&self, value: &str) -> String {
        let truncated: String = match self.precision {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        };

        let len = truncated.chars().count();
        let Some(width) = self.width else {
            return truncated;
        };
        if len >= width {
            return truncated;
        }

        let pad = width - len;
        let mut out = String::with_capacity(truncated.len() + pad);
        match self.align {
            Align::Left => {
                out.push_str(&truncated);
                out.extend(std::iter::repeat_n(self.fill, pad));
            }
            Align::Right => {
                out.extend(std::iter::repeat_n(self.fill, pad));
                out.push_str(&truncated);
            }
            Align::Center => {
                let left = pad / 2;
                out.extend(std::iter::repeat_n(self.fill, left));
                out.push_str(&truncated);
                out.extend(std::iter::repeat_n(self.fill, pad - left));
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder { name: String, spec: FieldSpec },
}

/// A parsed template, ready to render records or single values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template string.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Template`] for unmatched braces, malformed
    /// format specs, or placeholder names containing characters outside
    /// `[A-Za-z0-9_]`.
    pub fn parse(input: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '{' => {
                    if chars.peek() == Some(&'{') {
                        chars.next();
                        literal.push('{');
                        continue;
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(parse_placeholder(&mut chars)?);
                }
                '}' => {
                    if chars.peek() == Some(&'}') {
                        chars.next();
                        literal.push('}');
                    } else {
                        return Err(FormatError::Template(
                            "single '}' outside a placeholder".to_string(),
                        ));
                    }
                }
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Returns the number of placeholders in this template.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Placeholder { .. }))
            .count()
    }

    /// Renders the template against a record.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnknownField`] if a placeholder names a field
    /// the record does not have, or [`FormatError::Template`] if the template
    /// contains a positional (empty-name) placeholder.
    pub fn render(&self, record: &LogRecord) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { name, spec } => {
                    if name.is_empty() {
                        return Err(FormatError::Template(
                            "positional placeholder requires a single value".to_string(),
                        ));
                    }
                    let value = record
                        .field(name)
                        .ok_or_else(|| FormatError::UnknownField(name.clone()))?;
                    out.push_str(&spec.apply(&value));
                }
            }
        }
        Ok(out)
    }

    /// Renders a single-placeholder template against one value.
    ///
    /// The placeholder may be positional (`{}`) or named; the name is
    /// ignored and the value substituted directly.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Template`] unless the template has exactly one
    /// placeholder.
    pub fn render_value(&self, value: &str) -> Result<String> {
        if self.placeholder_count() != 1 {
            return Err(FormatError::Template(format!(
                "expected exactly one placeholder, found {}",
                self.placeholder_count()
            )));
        }
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { spec, .. } => out.push_str(&spec.apply(value)),
            }
        }
        Ok(out)
    }
}

impl std::str::FromStr for Template {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parses one placeholder body after the opening `{`.
fn parse_placeholder(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Result<Segment> {
    let mut body = String::new();
    loop {
        match chars.next() {
            Some('}') => break,
            Some('{') => {
                return Err(FormatError::Template(
                    "nested '{' inside a placeholder".to_string(),
                ));
            }
            Some(ch) => body.push(ch),
            None => {
                return Err(FormatError::Template(
                    "unterminated placeholder, missing '}'".to_string(),
                ));
            }
        }
    }

    let (name, spec_text) = match body.split_once(':') {
        Some((name, spec)) => (name, Some(spec)),
        None => (body.as_str(), None),
    };

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(FormatError::Template(format!(
            "invalid placeholder name: {name:?}"
        )));
    }

    let spec = match spec_text {
        Some(text) => parse_spec(text)?,
        None => FieldSpec::default(),
    };

    Ok(Segment::Placeholder {
        name: name.to_string(),
        spec,
    })
}

/// Parses a `[[fill]align][width][.precision]` spec.
fn parse_spec(text: &str) -> Result<FieldSpec> {
    let mut spec = FieldSpec::default();
    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    let align_of = |c: char| match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        _ => None,
    };

    // Fill requires an explicit align character after it
    if chars.len() >= 2 {
        if let Some(align) = align_of(chars[1]) {
            spec.fill = chars[0];
            spec.align = align;
            pos = 2;
        }
    }
    if pos == 0 && !chars.is_empty() {
        if let Some(align) = align_of(chars[0]) {
            spec.align = align;
            pos = 1;
        }
    }

    let digits = |chars: &[char], pos: &mut usize| -> Option<usize> {
        let start = *pos;
        while *pos < chars.len() && chars[*pos].is_ascii_digit() {
            *pos += 1;
        }
        if *pos == start {
            return None;
        }
        chars[start..*pos]
            .iter()
            .collect::<String>()
            .parse()
            .ok()
    };

    spec.width = digits(&chars, &mut pos);

    if pos < chars.len() && chars[pos] == '.' {
        pos += 1;
        spec.precision = Some(digits(&chars, &mut pos).ok_or_else(|| {
            FormatError::Template(format!("missing precision digits in spec: {text:?}"))
        })?);
    }

    if pos < chars.len() {
        return Err(FormatError::Template(format!(
            "unrecognized format spec: {text:?}"
        )));
    }

    Ok(spec)
}
