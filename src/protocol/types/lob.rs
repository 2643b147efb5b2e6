//! LOB locator bookkeeping.
//!
//! A locator field carries a 4-byte handle naming a large object held by
//! the server. Reading or writing the object itself goes through a
//! separate streaming request; this module only tracks the handle, the
//! declared maximum size, and data staged for the next write.

use crate::protocol::constants::NO_LOCATOR;

/// Data staged for a locator until the streaming layer sends it.
#[derive(Debug, Clone, PartialEq)]
pub enum LobData {
    /// Character data (CLOB/DBCLOB locators).
    Text(String),
    /// Binary data (BLOB locators).
    Bytes(Vec<u8>),
}

impl LobData {
    /// Length in characters (text) or bytes (binary).
    pub fn len(&self) -> usize {
        match self {
            LobData::Text(s) => s.chars().count(),
            LobData::Bytes(b) => b.len(),
        }
    }

    /// Check if there is no data.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LOB locator handle returned by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct LobLocator {
    handle: u32,
    /// Maximum LOB length in characters (CLOB/DBCLOB) or bytes (BLOB).
    max_size: usize,
    pending: Option<LobData>,
}

impl LobLocator {
    /// Create a locator.
    pub fn new(handle: u32, max_size: usize) -> Self {
        Self {
            handle,
            max_size,
            pending: None,
        }
    }

    /// Locator handle.
    pub fn handle(&self) -> u32 {
        self.handle
    }

    /// Declared maximum size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Whether the handle names a server object.
    pub fn is_valid(&self) -> bool {
        self.handle != NO_LOCATOR
    }

    /// Point at a different server object. Staged data is dropped.
    pub fn set_handle(&mut self, handle: u32) {
        self.handle = handle;
        self.pending = None;
    }

    /// Stage data for writing, cut to the maximum size (0 = unlimited).
    ///
    /// Returns the number of characters or bytes cut off.
    pub fn stage(&mut self, data: LobData) -> usize {
        let length = data.len();
        if self.max_size == 0 || length <= self.max_size {
            self.pending = Some(data);
            return 0;
        }
        let cut = match data {
            LobData::Text(s) => LobData::Text(s.chars().take(self.max_size).collect()),
            LobData::Bytes(mut b) => {
                b.truncate(self.max_size);
                LobData::Bytes(b)
            }
        };
        self.pending = Some(cut);
        length - self.max_size
    }

    /// Data staged for the next write.
    pub fn pending(&self) -> Option<&LobData> {
        self.pending.as_ref()
    }

    /// Take the staged data, leaving nothing pending.
    pub fn take_pending(&mut self) -> Option<LobData> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lob_locator_new() {
        let locator = LobLocator::new(0x0102_0304, 1000);
        assert_eq!(locator.handle(), 0x0102_0304);
        assert_eq!(locator.max_size(), 1000);
        assert!(locator.is_valid());
        assert!(!LobLocator::new(NO_LOCATOR, 0).is_valid());
    }

    #[test]
    fn test_stage_truncates_to_max_size() {
        let mut locator = LobLocator::new(7, 4);
        assert_eq!(locator.stage(LobData::Text("abcdef".to_string())), 2);
        assert_eq!(locator.pending(), Some(&LobData::Text("abcd".to_string())));

        assert_eq!(locator.stage(LobData::Bytes(vec![1, 2, 3])), 0);
        assert_eq!(locator.take_pending(), Some(LobData::Bytes(vec![1, 2, 3])));
        assert!(locator.pending().is_none());
    }

    #[test]
    fn test_set_handle_drops_staged_data() {
        let mut locator = LobLocator::new(7, 0);
        locator.stage(LobData::Bytes(vec![0; 10_000]));
        locator.set_handle(8);
        assert_eq!(locator.handle(), 8);
        assert!(locator.pending().is_none());
    }
}
