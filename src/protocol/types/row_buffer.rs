//! Raw row data as received from the server.
//!
//! A buffer holds one or more rows of field data plus an indicator per
//! field per row. Rows are either fixed length (every field occupies its
//! declared length) or compressed (variable-length fields only occupy what
//! their prefix says), in which case the server supplies each row's start.

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::protocol::buffer;

/// Row data plus null indicators.
#[derive(Debug, Clone)]
pub struct RowBuffer {
    data: Bytes,
    offsets: Vec<usize>,
    compressed: bool,
    field_count: usize,
    indicators: Vec<i16>,
}

impl RowBuffer {
    /// Rows of `row_length` bytes each, back to back.
    pub fn fixed(data: impl Into<Bytes>, row_length: usize, row_count: usize) -> Self {
        Self {
            data: data.into(),
            offsets: (0..row_count).map(|row| row * row_length).collect(),
            compressed: false,
            field_count: 0,
            indicators: Vec::new(),
        }
    }

    /// Compressed rows starting at the given offsets.
    pub fn compressed(data: impl Into<Bytes>, offsets: Vec<usize>) -> Self {
        Self {
            data: data.into(),
            offsets,
            compressed: true,
            field_count: 0,
            indicators: Vec::new(),
        }
    }

    /// Attach indicators, `field_count` per row in row order.
    ///
    /// Without indicators every field is treated as non-null.
    pub fn with_indicators(mut self, field_count: usize, indicators: Vec<i16>) -> Result<Self> {
        let expected = field_count * self.offsets.len();
        if indicators.len() != expected {
            return Err(Error::protocol(format!(
                "expected {} indicators, got {}",
                expected,
                indicators.len()
            )));
        }
        self.field_count = field_count;
        self.indicators = indicators;
        Ok(self)
    }

    /// Attach indicators from their wire form (2-byte big-endian each).
    pub fn with_indicator_bytes(self, field_count: usize, raw: &[u8]) -> Result<Self> {
        if raw.len() % 2 != 0 {
            return Err(Error::protocol(format!(
                "indicator block has odd length {}",
                raw.len()
            )));
        }
        let indicators = (0..raw.len() / 2)
            .map(|i| buffer::read_i16(raw, i * 2))
            .collect::<Result<Vec<_>>>()?;
        self.with_indicators(field_count, indicators)
    }

    /// Fields per row the indicators were attached for, if any were.
    pub fn indicator_field_count(&self) -> Option<usize> {
        (self.field_count > 0).then_some(self.field_count)
    }

    pub fn row_count(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Start of a row (0-based) in [`RowBuffer::data`].
    pub fn row_offset(&self, row: usize) -> Result<usize> {
        self.offsets
            .get(row)
            .copied()
            .ok_or(Error::RowIndexInvalid {
                index: row,
                count: self.offsets.len(),
            })
    }

    /// Indicator for a field (both 0-based); 0 when none were attached.
    pub fn indicator(&self, row: usize, field: usize) -> i16 {
        if self.field_count == 0 {
            return 0;
        }
        self.indicators
            .get(row * self.field_count + field)
            .copied()
            .unwrap_or(0)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::{INDICATOR_DATA_MAPPING_ERROR, INDICATOR_NULL};

    #[test]
    fn test_fixed_offsets() {
        let rows = RowBuffer::fixed(vec![0u8; 30], 10, 3);
        assert_eq!(rows.row_count(), 3);
        assert!(!rows.is_compressed());
        assert_eq!(rows.row_offset(2).unwrap(), 20);
        assert!(matches!(
            rows.row_offset(3),
            Err(Error::RowIndexInvalid { index: 3, count: 3 })
        ));
    }

    #[test]
    fn test_indicators() {
        let rows = RowBuffer::compressed(vec![0u8; 8], vec![0, 4])
            .with_indicators(2, vec![0, INDICATOR_NULL, INDICATOR_DATA_MAPPING_ERROR, 0])
            .unwrap();
        assert!(rows.is_compressed());
        assert_eq!(rows.indicator(0, 1), INDICATOR_NULL);
        assert_eq!(rows.indicator(1, 0), INDICATOR_DATA_MAPPING_ERROR);
        assert_eq!(rows.indicator_field_count(), Some(2));

        let plain = RowBuffer::fixed(vec![0u8; 4], 4, 1);
        assert_eq!(plain.indicator(0, 0), 0);
        assert_eq!(plain.indicator_field_count(), None);
    }

    #[test]
    fn test_indicator_bytes() {
        let rows = RowBuffer::fixed(vec![0u8; 4], 2, 2)
            .with_indicator_bytes(1, &[0xFF, 0xFF, 0x00, 0x00])
            .unwrap();
        assert_eq!(rows.indicator(0, 0), -1);
        assert_eq!(rows.indicator(1, 0), 0);

        assert!(matches!(
            RowBuffer::fixed(vec![0u8; 4], 2, 2).with_indicators(2, vec![0; 3]),
            Err(Error::Protocol { .. })
        ));
    }
}
