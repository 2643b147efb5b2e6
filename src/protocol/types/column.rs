//! Field name lookup.
//!
//! Names follow SQL identifier rules: a delimited name (`"MyCol"`) must
//! match exactly; an undelimited one matches case-insensitively, first
//! match wins.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::{Error, Result};

/// Decoded field names of one row shape, with a lookup cache.
#[derive(Debug, Default)]
pub struct FieldNames {
    names: Vec<String>,
    /// Exact name -> first index carrying it.
    exact: HashMap<String, usize>,
    /// Undelimited lookups resolved by case-insensitive scan.
    folded: Mutex<HashMap<String, usize>>,
}

impl FieldNames {
    /// Create the lookup for names in field order.
    pub fn new(names: Vec<String>) -> Self {
        let mut exact = HashMap::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            exact.entry(name.clone()).or_insert(index);
        }
        Self {
            names,
            exact,
            folded: Mutex::new(HashMap::new()),
        }
    }

    /// Get the number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if there are no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get name by index (0-based).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Find a field (0-based index) by name.
    ///
    /// Returns `Err(Error::ColumnNotFound)` on a miss.
    pub fn find(&self, name: &str) -> Result<usize> {
        let not_found = || Error::ColumnNotFound {
            name: name.to_string(),
        };

        if let Some(delimited) = strip_delimiters(name) {
            return self.exact.get(&delimited).copied().ok_or_else(not_found);
        }

        if let Some(&index) = self.exact.get(name) {
            return Ok(index);
        }
        let upper = name.to_uppercase();
        if let Some(&index) = self.exact.get(&upper) {
            return Ok(index);
        }

        let mut folded = self.folded.lock();
        if let Some(&index) = folded.get(name) {
            return Ok(index);
        }
        let index = self
            .names
            .iter()
            .position(|candidate| candidate.to_uppercase() == upper)
            .ok_or_else(not_found)?;
        folded.insert(name.to_string(), index);
        Ok(index)
    }
}

/// Inner text of a `"delimited"` identifier, with `""` unescaped.
fn strip_delimiters(name: &str) -> Option<String> {
    let inner = name.strip_prefix('"')?.strip_suffix('"')?;
    Some(inner.replace("\"\"", "\""))
}
