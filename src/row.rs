//! Row marshaling over one result-set shape.
//!
//! A [`ServerRow`] is shaped once from the field descriptors, then fed row
//! buffers and positioned on rows. Field values are translated lazily: the
//! first read of a field at a row position decodes it, later reads at the
//! same position return the already decoded value.
//!
//! ```text
//! Unshaped --set_format--> Shaped --set_row_buffer + set_row_index--> Positioned
//!                            ^                                           |
//!                            +------------- set_row_buffer --------------+
//! ```
//!
//! A `ServerRow` is not meant to be shared between threads; the conversion
//! table cache it draws from is.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::ConversionSettings;
use crate::conv::{BidiStringType, ConvTable, ConvTableCache};
use crate::error::{Error, Result};
use crate::protocol::buffer::{self, PrefixWidth};
use crate::protocol::constants::{
    base_native_type, INDICATOR_DATA_MAPPING_ERROR, INDICATOR_NULL, NATIVE_DATALINK,
    NATIVE_LONGVARCHAR, NATIVE_LONGVARGRAPHIC, NATIVE_VARBINARY, NATIVE_VARCHAR,
    NATIVE_VARGRAPHIC,
};
use crate::protocol::types::{FieldFormat, FieldNames, RowBuffer, SqlData};

/// Common view of a row of fields, shared by result rows and parameter rows.
///
/// Field indexes are 1-based.
pub trait Row {
    /// Number of fields.
    fn field_count(&self) -> usize;

    /// Descriptor of a field.
    fn field_format(&self, index: usize) -> Result<&FieldFormat>;

    /// Characters or bytes lost by the latest read or set of a field.
    fn truncation(&self, index: usize) -> Result<usize>;

    /// Byte length of an uncompressed row.
    fn row_length(&self) -> usize;

    /// Convert a 1-based index to a slot, or fail with
    /// `Error::DescriptorIndexInvalid`.
    fn check_index(&self, index: usize) -> Result<usize> {
        let count = self.field_count();
        if index == 0 || index > count {
            return Err(Error::DescriptorIndexInvalid { index, count });
        }
        Ok(index - 1)
    }
}

/// Conversion tables used by one row shape, keyed by CCSID.
///
/// Bidi tables get the session's reordering flags applied once here rather
/// than on every conversion.
#[derive(Debug)]
pub(crate) struct ShapeTables {
    cache: Arc<ConvTableCache>,
    implicit_reordering: bool,
    numeric_ordering: bool,
    tables: HashMap<u32, Arc<ConvTable>>,
}

impl ShapeTables {
    pub(crate) fn new(cache: Arc<ConvTableCache>, settings: &ConversionSettings) -> Self {
        Self {
            cache,
            implicit_reordering: settings.bidi_implicit_reordering,
            numeric_ordering: settings.bidi_numeric_ordering,
            tables: HashMap::new(),
        }
    }

    pub(crate) fn get(&mut self, ccsid: u32) -> Result<Arc<ConvTable>> {
        if let Some(table) = self.tables.get(&ccsid) {
            return Ok(Arc::clone(table));
        }
        let shared = self.cache.get(ccsid)?;
        let table = if shared.bidi_rule().is_some() {
            Arc::new(shared.with_bidi_flags(self.implicit_reordering, self.numeric_ordering))
        } else {
            shared
        };
        self.tables.insert(ccsid, Arc::clone(&table));
        Ok(table)
    }

    pub(crate) fn clear(&mut self) {
        self.tables.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    /// Not yet decoded at the current row position.
    Stale,
    /// Decoded (or set NULL) at the current row position.
    Fresh,
}

#[derive(Debug)]
struct FieldSlot {
    data: SqlData,
    state: FieldState,
    translations: u64,
}

/// Result rows of one shape, decoded on demand.
#[derive(Debug)]
pub struct ServerRow {
    settings: ConversionSettings,
    tables: ShapeTables,
    formats: Vec<FieldFormat>,
    fields: Vec<FieldSlot>,
    names: FieldNames,
    /// Offsets within an uncompressed row.
    fixed_offsets: Vec<usize>,
    /// Absolute offsets in the row buffer for the current row.
    offsets: Vec<usize>,
    row_length: usize,
    rows: Option<RowBuffer>,
    row_index: Option<usize>,
}

impl ServerRow {
    /// Create an unshaped row.
    pub fn new(cache: Arc<ConvTableCache>, settings: ConversionSettings) -> Self {
        Self {
            tables: ShapeTables::new(cache, &settings),
            settings,
            formats: Vec::new(),
            fields: Vec::new(),
            names: FieldNames::default(),
            fixed_offsets: Vec::new(),
            offsets: Vec::new(),
            row_length: 0,
            rows: None,
            row_index: None,
        }
    }

    /// Install a row shape, replacing any previous one.
    ///
    /// Builds one value holder per field. Fails with an internal error when
    /// a field carries a native type this library does not know, or when a
    /// field name is in an unsupported CCSID.
    pub fn set_format(&mut self, formats: Vec<FieldFormat>) -> Result<()> {
        self.tables.clear();
        let mut fields = Vec::with_capacity(formats.len());
        let mut names = Vec::with_capacity(formats.len());
        let mut fixed_offsets = Vec::with_capacity(formats.len());
        let mut offset = 0;

        for format in &formats {
            let data = SqlData::for_native(format.native_type, format.shape(), &self.settings)?;
            fields.push(FieldSlot {
                data,
                state: FieldState::Stale,
                translations: 0,
            });
            names.push(self.decode_name(format)?);
            fixed_offsets.push(offset);
            offset += format.length;
        }

        debug!(fields = formats.len(), row_length = offset, "row format installed");

        self.offsets = fixed_offsets.clone();
        self.fixed_offsets = fixed_offsets;
        self.row_length = offset;
        self.names = FieldNames::new(names);
        self.fields = fields;
        self.formats = formats;
        self.rows = None;
        self.row_index = None;
        Ok(())
    }

    fn decode_name(&mut self, format: &FieldFormat) -> Result<String> {
        if format.name.is_empty() {
            return Ok(String::new());
        }
        let table = self.tables.get(format.name_ccsid)?;
        let name = table.decode(&format.name, BidiStringType::Default)?;
        Ok(name.trim_end().to_string())
    }

    /// Replace the row buffer. No row is positioned afterwards.
    ///
    /// Fails with `Error::Protocol`, leaving no buffer installed, when the
    /// buffer carries indicators for a different number of fields than the
    /// shape has.
    pub fn set_row_buffer(&mut self, rows: RowBuffer) -> Result<()> {
        self.rows = None;
        self.row_index = None;
        self.mark_stale();
        if let Some(count) = rows.indicator_field_count() {
            if count != self.field_count() {
                return Err(Error::protocol(format!(
                    "row buffer has indicators for {} fields, shape has {}",
                    count,
                    self.field_count()
                )));
            }
        }
        self.rows = Some(rows);
        Ok(())
    }

    /// Position on a row (0-based) of the current buffer.
    ///
    /// Recomputes field offsets. Under variable-length field compression
    /// each variable-length field occupies its prefix plus the data the
    /// prefix announces; otherwise the fixed layout applies.
    pub fn set_row_index(&mut self, index: usize) -> Result<()> {
        let rows = self.rows.as_ref().ok_or(Error::NoCurrentRow)?;
        let start = rows.row_offset(index)?;

        if rows.is_compressed() {
            let data = rows.data();
            let mut offset = start;
            for (slot, format) in self.offsets.iter_mut().zip(&self.formats) {
                *slot = offset;
                offset += compressed_length(format, data, offset)?;
            }
        } else {
            for (slot, fixed) in self.offsets.iter_mut().zip(&self.fixed_offsets) {
                *slot = start + fixed;
            }
        }

        self.row_index = Some(index);
        self.mark_stale();
        Ok(())
    }

    fn mark_stale(&mut self) {
        for field in &mut self.fields {
            field.state = FieldState::Stale;
        }
    }

    /// Current row position, if any.
    pub fn row_index(&self) -> Option<usize> {
        self.row_index
    }

    fn positioned(&self) -> Result<(&RowBuffer, usize)> {
        match (&self.rows, self.row_index) {
            (Some(rows), Some(row)) => Ok((rows, row)),
            _ => Err(Error::NoCurrentRow),
        }
    }

    /// Value holder of a field at the current row, decoded on first access.
    ///
    /// A field whose indicator marks it NULL is set NULL without looking
    /// at its bytes.
    pub fn get_field_value(&mut self, index: usize) -> Result<&SqlData> {
        let i = self.check_index(index)?;
        let (rows, row) = match (&self.rows, self.row_index) {
            (Some(rows), Some(row)) => (rows, row),
            _ => return Err(Error::NoCurrentRow),
        };

        let slot = &mut self.fields[i];
        if slot.state == FieldState::Stale {
            if rows.indicator(row, i) == INDICATOR_NULL {
                slot.data.set_null();
            } else {
                let table = self.tables.get(slot.data.table_ccsid())?;
                slot.data
                    .convert_from_raw_bytes(rows.data(), self.offsets[i], &table)?;
                slot.translations += 1;
                trace!(field = index, row, offset = self.offsets[i], "field translated");
            }
            slot.state = FieldState::Fresh;
        }
        Ok(&self.fields[i].data)
    }

    /// Whether a field is NULL at the current row.
    pub fn is_null(&self, index: usize) -> Result<bool> {
        let i = self.check_index(index)?;
        let (rows, row) = self.positioned()?;
        Ok(rows.indicator(row, i) == INDICATOR_NULL)
    }

    /// Whether the server flagged a data mapping error for a field at the
    /// current row. Such a field still has a value.
    pub fn is_data_mapping_error(&self, index: usize) -> Result<bool> {
        let i = self.check_index(index)?;
        let (rows, row) = self.positioned()?;
        Ok(rows.indicator(row, i) == INDICATOR_DATA_MAPPING_ERROR)
    }

    /// Find a field (1-based) by name.
    pub fn find_field_index(&self, name: &str) -> Result<usize> {
        Ok(self.names.find(name)? + 1)
    }

    /// Decoded name of a field.
    pub fn field_name(&self, index: usize) -> Result<&str> {
        let i = self.check_index(index)?;
        Ok(self.names.get(i).unwrap_or_default())
    }

    /// Byte offset of a field in the row buffer at the current row.
    pub fn field_offset(&self, index: usize) -> Result<usize> {
        let i = self.check_index(index)?;
        self.positioned()?;
        Ok(self.offsets[i])
    }

    /// Number of times a field has been decoded from a row buffer.
    pub fn translation_count(&self, index: usize) -> Result<u64> {
        let i = self.check_index(index)?;
        Ok(self.fields[i].translations)
    }
}

impl Row for ServerRow {
    fn field_count(&self) -> usize {
        self.formats.len()
    }

    fn field_format(&self, index: usize) -> Result<&FieldFormat> {
        let i = self.check_index(index)?;
        Ok(&self.formats[i])
    }

    fn truncation(&self, index: usize) -> Result<usize> {
        let i = self.check_index(index)?;
        Ok(self.fields[i].data.truncated())
    }

    fn row_length(&self) -> usize {
        self.row_length
    }
}

/// Bytes a field occupies in a compressed row starting at `offset`.
fn compressed_length(format: &FieldFormat, data: &[u8], offset: usize) -> Result<usize> {
    let prefix = PrefixWidth::Short;
    match base_native_type(format.native_type) {
        NATIVE_VARCHAR | NATIVE_LONGVARCHAR | NATIVE_VARBINARY | NATIVE_DATALINK => {
            Ok(prefix.size() + buffer::read_length_prefix(data, offset, prefix)?)
        }
        NATIVE_VARGRAPHIC | NATIVE_LONGVARGRAPHIC => {
            Ok(prefix.size() + 2 * buffer::read_length_prefix(data, offset, prefix)?)
        }
        _ => Ok(format.length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::{NATIVE_CHAR, NATIVE_INTEGER};

    fn shaped(formats: Vec<FieldFormat>) -> ServerRow {
        let mut row = ServerRow::new(Arc::new(ConvTableCache::new()), ConversionSettings::default());
        row.set_format(formats).unwrap();
        row
    }

    #[test]
    fn test_fixed_offsets() {
        let mut row = shaped(vec![
            FieldFormat::new(NATIVE_CHAR, 3).with_ccsid(37),
            FieldFormat::new(NATIVE_INTEGER, 4),
        ]);
        assert_eq!(row.row_length(), 7);
        row.set_row_buffer(RowBuffer::fixed(vec![0u8; 14], 7, 2)).unwrap();
        row.set_row_index(1).unwrap();
        assert_eq!(row.field_offset(1).unwrap(), 7);
        assert_eq!(row.field_offset(2).unwrap(), 10);
    }

    #[test]
    fn test_compressed_graphic_counts_characters() {
        let mut row = shaped(vec![
            FieldFormat::new(NATIVE_VARGRAPHIC, 22).with_ccsid(13488),
            FieldFormat::new(NATIVE_INTEGER, 4),
        ]);
        let data = vec![0x00, 0x01, 0x00, 0x41, 0x00, 0x00, 0x00, 0x07];
        row.set_row_buffer(RowBuffer::compressed(data, vec![0])).unwrap();
        row.set_row_index(0).unwrap();
        assert_eq!(row.field_offset(2).unwrap(), 4);
        assert_eq!(row.get_field_value(2).unwrap().get_i32().unwrap(), Some(7));
    }

    #[test]
    fn test_reads_need_a_position() {
        let mut row = shaped(vec![FieldFormat::new(NATIVE_INTEGER, 4)]);
        assert!(matches!(row.get_field_value(1), Err(Error::NoCurrentRow)));
        assert!(matches!(row.set_row_index(0), Err(Error::NoCurrentRow)));
        row.set_row_buffer(RowBuffer::fixed(vec![0u8; 4], 4, 1)).unwrap();
        assert!(matches!(row.is_null(1), Err(Error::NoCurrentRow)));
        assert!(matches!(
            row.set_row_index(1),
            Err(Error::RowIndexInvalid { index: 1, count: 1 })
        ));
    }

    #[test]
    fn test_index_bounds() {
        let mut row = shaped(vec![FieldFormat::new(NATIVE_INTEGER, 4)]);
        row.set_row_buffer(RowBuffer::fixed(vec![0u8; 4], 4, 1)).unwrap();
        row.set_row_index(0).unwrap();
        assert!(matches!(
            row.get_field_value(0),
            Err(Error::DescriptorIndexInvalid { index: 0, count: 1 })
        ));
        assert!(matches!(
            row.get_field_value(2),
            Err(Error::DescriptorIndexInvalid { index: 2, count: 1 })
        ));
    }

    #[test]
    fn test_unknown_native_type_fails_shape() {
        let mut row = ServerRow::new(Arc::new(ConvTableCache::new()), ConversionSettings::default());
        let err = row.set_format(vec![FieldFormat::new(1, 4)]).unwrap_err();
        assert!(err.is_internal());
    }
}
