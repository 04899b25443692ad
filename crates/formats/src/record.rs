//! Row data structure for tabular sources

/// A single data row from a tabular source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Field values in header order
    pub fields: Vec<String>,
    /// 1-based record number within the source (header excluded)
    pub line: u64,
}

impl Row {
    /// Create a new row
    pub fn new(fields: Vec<String>, line: u64) -> Self {
        Self { fields, line }
    }

    /// Get the value at a field position, if present
    pub fn get(&self, position: usize) -> Option<&str> {
        self.fields.get(position).map(String::as_str)
    }
}
