//! Formatter that attaches derived display fields before rendering.
//!
//! The derived fields are:
//!
//! - `file_and_line`: `file:line`, so the two can be justified together
//! - `short_function`: the function name padded or truncated to a fixed width
//! - `short_level`: the single-character level code, for very compact output

use crate::error::{FormatError, Result};
use crate::template::Template;
use crate::traits::RecordFormatter;
use crate::types::LogRecord;

/// Default width of the `short_function` field.
pub const DEFAULT_FUNC_WIDTH: usize = 15;

/// Formatter that computes derived fields and delegates to a base template.
///
/// The base template may reference any record field, including the three
/// derived ones attached by this formatter.
#[derive(Debug, Clone)]
pub struct DerivedFieldsFormatter {
    template: Template,
    func_width: usize,
}

impl DerivedFieldsFormatter {
    /// Creates a formatter with the default function-name width.
    #[must_use]
    pub fn new(template: Template) -> Self {
        Self {
            template,
            func_width: DEFAULT_FUNC_WIDTH,
        }
    }

    /// Creates a formatter with a custom function-name width.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Config`] if `func_width` is zero.
    pub fn with_func_width(template: Template, func_width: usize) -> Result<Self> {
        if func_width == 0 {
            return Err(FormatError::Config(
                "func_width must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            template,
            func_width,
        })
    }

    /// Returns the configured function-name width.
    #[must_use]
    pub const fn func_width(&self) -> usize {
        self.func_width
    }

    /// Truncates to at most `func_width` characters, then right-pads with
    /// spaces to exactly `func_width`.
    fn pad_or_truncate(&self, name: &str) -> String {
        let mut out: String = name.chars().take(self.func_width).collect();
        let len = out.chars().count();
        for _ in len..self.func_width {
            out.push(' ');
        }
        out
    }
}

impl RecordFormatter for DerivedFieldsFormatter {
    fn format(&self, record: &mut LogRecord) -> Result<String> {
        let file_and_line = format!("{}:{}", record.file, record.line);
        let short_function = self.pad_or_truncate(&record.function);
        let short_level = record.level.short_code().to_string();

        record.set_field("file_and_line", file_and_line);
        record.set_field("short_function", short_function);
        record.set_field("short_level", short_level);

        self.template.render(record)
    }
}
