//! # linefmt
//!
//! Log record formatting with derived display fields and ANSI color
//! decoration.
//!
//! This crate provides:
//!
//! - [`LogRecord`]: Structured log events with source location metadata
//! - [`LogLevel`]: Severity levels (Debug, Info, Warning, Error, Critical)
//! - [`Template`]: `{`-style format strings with width/alignment/truncation
//! - [`DerivedFieldsFormatter`]: Attaches `file_and_line`, `short_function`,
//!   and `short_level` display fields before rendering
//! - [`ColorFormatter`]: Per-level foreground coloring of the level name and
//!   whole-line background highlighting, with nested-reset re-assertion
//! - [`RecordFormatter`]: The common "format a record into a line" contract
//!
//! ## Example
//!
//! ```rust
//! use linefmt::{
//!     ColorConfig, ColorFormatter, LogLevel, LogRecord, RecordFormatter, Template,
//! };
//! use chrono::Utc;
//!
//! # fn main() -> linefmt::Result<()> {
//! let formatter = ColorFormatter::new(
//!     Template::parse("{:<8}")?,
//!     Template::parse("{color_level} {message}")?,
//!     ColorConfig::default(),
//! )?;
//!
//! let mut record = LogRecord::builder()
//!     .timestamp(Utc::now())
//!     .level(LogLevel::Warning)
//!     .message("disk low")
//!     .file("monitor.rs")
//!     .line(57)
//!     .function("check_disk")
//!     .build()?;
//!
//! // WARNING is highlighted: the whole line is wrapped in a yellow
//! // background escape and a trailing reset.
//! let line = formatter.format(&mut record)?;
//! assert!(line.starts_with("\x1b[1;43m"));
//! assert!(line.ends_with("\x1b[0m"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ansi;
pub mod color;
pub mod derived;
pub mod error;
pub mod template;
pub mod traits;
pub mod types;

// Re-export main types
pub use ansi::{Color, BOLD, RESET};
pub use color::{ColorConfig, ColorFormatter};
pub use derived::{DerivedFieldsFormatter, DEFAULT_FUNC_WIDTH};
pub use error::{FormatError, Result};
pub use template::Template;
pub use traits::RecordFormatter;
pub use types::{LogLevel, LogRecord, LogRecordBuilder};
