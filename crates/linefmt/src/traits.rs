//! The common record-formatting contract.

use crate::error::Result;
use crate::types::LogRecord;

/// Trait for components that format a record into a line of text.
///
/// Formatters may attach derived display fields to the record; they never
/// remove existing fields. The record is assumed to be exclusively held by
/// the caller for the duration of the call, so implementations perform no
/// internal synchronization.
pub trait RecordFormatter: Send + Sync {
    /// Formats the record into its final text form.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying template references a field the
    /// record does not have.
    fn format(&self, record: &mut LogRecord) -> Result<String>;
}
