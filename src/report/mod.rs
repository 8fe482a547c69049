use crate::error::ConvertError;
use serde_json::Value;

/// An entry that could not be converted
#[derive(Debug)]
pub struct EntryFailure {
    /// Position of the entry in the export
    pub index: usize,
    /// The entry exactly as it appeared in the export
    pub raw: Value,
    pub error: ConvertError,
}

impl EntryFailure {
    /// One-line warning text including the offending record
    pub fn describe(&self) -> String {
        format!("entry #{} skipped: {}\n{}", self.index, self.error, self.raw)
    }
}

/// Outcome of converting every entry of an export
#[derive(Debug)]
pub struct ConversionReport<T> {
    /// Successfully converted entries, in export order
    pub converted: Vec<T>,
    pub failures: Vec<EntryFailure>,
}

impl<T> Default for ConversionReport<T> {
    fn default() -> Self {
        Self {
            converted: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> ConversionReport<T> {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// e.g. "converted 9 of 10 entries, 1 skipped"
    pub fn summary(&self) -> String {
        format!(
            "converted {} of {} entries, {} skipped",
            self.converted.len(),
            self.total(),
            self.failures.len()
        )
    }
}
