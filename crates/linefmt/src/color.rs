//! Level-dependent color and highlight decoration for rendered lines.

use crate::ansi::{self, Color};
use crate::error::{FormatError, Result};
use crate::template::Template;
use crate::traits::RecordFormatter;
use crate::types::LogRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-level color configuration.
///
/// `colorize` maps a level name to a foreground color applied to the
/// `color_level` field only; `highlight` maps a level name to a background
/// color applied to the whole rendered line. Level names absent from a map
/// get no decoration of that kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Level name to levelname-field foreground color
    #[serde(default)]
    pub colorize: HashMap<String, Color>,
    /// Level name to whole-line highlight color
    #[serde(default)]
    pub highlight: HashMap<String, Color>,
}

impl Default for ColorConfig {
    fn default() -> Self {
        let colorize = HashMap::from([
            ("DEBUG".to_string(), Color::Cyan),
            ("INFO".to_string(), Color::White),
        ]);
        let highlight = HashMap::from([
            ("CRITICAL".to_string(), Color::Red),
            ("ERROR".to_string(), Color::Red),
            ("WARNING".to_string(), Color::Yellow),
        ]);
        Self {
            colorize,
            highlight,
        }
    }
}

/// Formatter that decorates output with ANSI colors per level.
///
/// The level name is justified through `level_template` BEFORE any escape
/// sequence is added, because escapes are non-printing and would otherwise
/// count toward the justification width. The result is attached to the
/// record as the `color_level` field for the base template to place.
#[derive(Debug, Clone)]
pub struct ColorFormatter {
    level_template: Template,
    template: Template,
    colors: ColorConfig,
}

impl ColorFormatter {
    /// Creates a formatter.
    ///
    /// `level_template` is the justification template for the level name,
    /// e.g. `"{:<8}"`. It must contain exactly one placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Config`] if `level_template` does not contain
    /// exactly one placeholder.
    pub fn new(level_template: Template, template: Template, colors: ColorConfig) -> Result<Self> {
        let slots = level_template.placeholder_count();
        if slots != 1 {
            return Err(FormatError::Config(format!(
                "level template must contain exactly one placeholder, found {slots}"
            )));
        }
        Ok(Self {
            level_template,
            template,
            colors,
        })
    }

    /// Returns the color configuration.
    #[must_use]
    pub const fn colors(&self) -> &ColorConfig {
        &self.colors
    }
}

impl RecordFormatter for ColorFormatter {
    /// Renders the record with per-level decoration.
    ///
    /// Quirk kept from long-standing behavior: a level name absent from the
    /// colorize map is attached raw, without the level-template
    /// justification. Changing this would shift visible alignment for
    /// uncolored levels.
    fn format(&self, record: &mut LogRecord) -> Result<String> {
        let level_name = record.level.name();

        let color_level = match self.colors.colorize.get(level_name) {
            Some(&color) => {
                let adjusted = self.level_template.render_value(level_name)?;
                format!("{}{}{}", ansi::fg(color), adjusted, ansi::RESET)
            }
            None => level_name.to_string(),
        };
        record.set_field("color_level", color_level);

        let line = self.template.render(record)?;

        match self.colors.highlight.get(level_name) {
            Some(&color) => {
                let hl = ansi::bg(color);
                // Re-assert the highlight after any embedded reset so nested
                // coloring does not cut the highlight short. Literal
                // replacement, not regex.
                let line = line.replace(ansi::RESET, &format!("{}{}", ansi::RESET, hl));
                Ok(format!("{}{}{}", hl, line, ansi::RESET))
            }
            None => Ok(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LogLevel;
    use chrono::Utc;

    fn make_record(level: LogLevel, message: &str) -> LogRecord {
        LogRecord::builder()
            .timestamp(Utc::now())
            .level(level)
            .message(message)
            .file("worker.rs")
            .line(99)
            .function("poll")
            .build()
            .expect("should build")
    }

    fn make_formatter(level_template: &str, template: &str) -> ColorFormatter {
        ColorFormatter::new(
            Template::parse(level_template).expect("parse level template"),
            Template::parse(template).expect("parse template"),
            ColorConfig::default(),
        )
        .expect("valid formatter")
    }

    /// Strips `\x1b[..m` escape sequences.
    fn strip_escapes(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(ch) = chars.next() {
            if ch == '\x1b' {
                for esc in chars.by_ref() {
                    if esc == 'm' {
                        break;
                    }
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    // ===========================================
    // Construction Tests
    // ===========================================

    #[test]
    fn rejects_level_template_without_placeholder() {
        let err = ColorFormatter::new(
            Template::parse("no slots").expect("parse"),
            Template::parse("{message}").expect("parse"),
            ColorConfig::default(),
        )
        .expect_err("should fail");
        assert!(matches!(err, FormatError::Config(_)));
    }

    #[test]
    fn rejects_level_template_with_two_placeholders() {
        let err = ColorFormatter::new(
            Template::parse("{level} {level}").expect("parse"),
            Template::parse("{message}").expect("parse"),
            ColorConfig::default(),
        )
        .expect_err("should fail");
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn default_color_tables() {
        let config = ColorConfig::default();
        assert_eq!(config.colorize.get("DEBUG"), Some(&Color::Cyan));
        assert_eq!(config.colorize.get("INFO"), Some(&Color::White));
        assert_eq!(config.colorize.get("WARNING"), None);

        assert_eq!(config.highlight.get("CRITICAL"), Some(&Color::Red));
        assert_eq!(config.highlight.get("ERROR"), Some(&Color::Red));
        assert_eq!(config.highlight.get("WARNING"), Some(&Color::Yellow));
        assert_eq!(config.highlight.get("DEBUG"), None);
    }

    #[test]
    fn color_config_serde_roundtrip() {
        let config = ColorConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        let parsed: ColorConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(config, parsed);
    }

    // ===========================================
    // Colorize Tests
    // ===========================================

    #[test]
    fn colorized_level_is_justified_then_wrapped() {
        let formatter = make_formatter("{:<8}", "{color_level}");
        let mut record = make_record(LogLevel::Debug, "x=1");

        let line = formatter.format(&mut record).expect("format");
        assert_eq!(line, "\x1b[1;36mDEBUG   \x1b[0m");
        assert_eq!(strip_escapes(&line), "DEBUG   ");
    }

    #[test]
    fn info_colorized_white() {
        let formatter = make_formatter("{:<8}", "{color_level}");
        let mut record = make_record(LogLevel::Info, "up");

        let line = formatter.format(&mut record).expect("format");
        assert_eq!(line, "\x1b[1;37mINFO    \x1b[0m");
    }

    #[test]
    fn unmapped_level_skips_justification() {
        // Deliberate quirk: WARNING is not in the default colorize map, so
        // the field is the raw level name, not the 8-wide justified form.
        let formatter = make_formatter("{:<8}", "{color_level}");
        let mut record = make_record(LogLevel::Warning, "disk low");

        let line = formatter.format(&mut record).expect("format");
        assert_eq!(strip_escapes(&line), "WARNING");
    }

    // ===========================================
    // Highlight Tests
    // ===========================================

    #[test]
    fn warning_line_is_highlighted_yellow() {
        let formatter = make_formatter("{:<8}", "{color_level} {message}");
        let mut record = make_record(LogLevel::Warning, "disk low");

        let line = formatter.format(&mut record).expect("format");
        assert_eq!(line, "\x1b[1;43mWARNING disk low\x1b[0m");
        assert!(line.starts_with("\x1b[1;43m"));
        assert!(line.ends_with("\x1b[0m"));
    }

    #[test]
    fn error_highlight_reasserts_after_inner_reset() {
        let config = ColorConfig {
            colorize: HashMap::from([("ERROR".to_string(), Color::White)]),
            ..ColorConfig::default()
        };
        let formatter = ColorFormatter::new(
            Template::parse("{:<8}").expect("parse"),
            Template::parse("{color_level} {message}").expect("parse"),
            config,
        )
        .expect("valid formatter");
        let mut record = make_record(LogLevel::Error, "boom");

        let line = formatter.format(&mut record).expect("format");

        // Inner colorize reset must be re-followed by the red highlight so
        // the message text after it stays highlighted.
        assert_eq!(
            line,
            "\x1b[1;41m\x1b[1;37mERROR   \x1b[0m\x1b[1;41m boom\x1b[0m"
        );

        // Every interior reset is immediately followed by the highlight
        let interior = &line[..line.len() - ansi::RESET.len()];
        for (idx, _) in interior.match_indices(ansi::RESET) {
            let after = &interior[idx + ansi::RESET.len()..];
            assert!(after.starts_with("\x1b[1;41m"));
        }
        assert_eq!(strip_escapes(&line), "ERROR    boom");
    }

    #[test]
    fn debug_line_is_not_highlighted() {
        let formatter = make_formatter("{:<8}", "{color_level} {message}");
        let mut record = make_record(LogLevel::Debug, "x=1");

        let line = formatter.format(&mut record).expect("format");
        assert!(line.starts_with("\x1b[1;36m"));
        assert!(!line.contains("\x1b[1;4"));
    }

    #[test]
    fn custom_tables_override_defaults() {
        let config = ColorConfig {
            colorize: HashMap::from([("WARNING".to_string(), Color::Magenta)]),
            highlight: HashMap::new(),
        };
        let formatter = ColorFormatter::new(
            Template::parse("{:<8}").expect("parse"),
            Template::parse("{color_level}").expect("parse"),
            config,
        )
        .expect("valid formatter");
        let mut record = make_record(LogLevel::Warning, "disk low");

        let line = formatter.format(&mut record).expect("format");
        assert_eq!(line, "\x1b[1;35mWARNING \x1b[0m");
    }

    #[test]
    fn template_errors_propagate() {
        let formatter = make_formatter("{:<8}", "{missing}");
        let mut record = make_record(LogLevel::Info, "up");

        let err = formatter.format(&mut record).expect_err("should fail");
        assert!(matches!(err, FormatError::UnknownField(_)));
    }

    #[test]
    fn record_gains_color_level_field() {
        let formatter = make_formatter("{:<8}", "{message}");
        let mut record = make_record(LogLevel::Info, "up");

        formatter.format(&mut record).expect("format");
        assert!(record.fields.contains_key("color_level"));
    }

    // ===========================================
    // End-to-End Scenarios
    // ===========================================

    #[test]
    fn end_to_end_warning_highlight() {
        // WARNING is unmapped in colorize, so the level field is the plain
        // unjustified name; the whole line gets the yellow highlight.
        let formatter = make_formatter("{:<8}", "{color_level} {message}");
        let mut record = make_record(LogLevel::Warning, "disk low");

        let line = formatter.format(&mut record).expect("format");
        assert_eq!(line, "\x1b[1;43mWARNING disk low\x1b[0m");
    }

    #[test]
    fn end_to_end_debug_colorize_only() {
        let formatter = make_formatter("{:<8}", "{color_level} {message}");
        let mut record = make_record(LogLevel::Debug, "x=1");

        let line = formatter.format(&mut record).expect("format");
        assert_eq!(line, "\x1b[1;36mDEBUG   \x1b[0m x=1");
    }
}
