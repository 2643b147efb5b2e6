//! Parameter binding: values in, row bytes out.

use std::sync::Arc;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::config::ConversionSettings;
use crate::conv::{ConvTable, ConvTableCache};
use crate::error::Result;
use crate::protocol::constants::INDICATOR_NULL;
use crate::protocol::types::{FieldFormat, SqlData, SqlValue};
use crate::row::{Row, ShapeTables};

#[derive(Debug)]
struct ParameterSlot {
    data: SqlData,
    table: Arc<ConvTable>,
    offset: usize,
    set: bool,
}

/// One row of parameter values for a statement's parameter markers.
///
/// Values are coerced to their field type when set and serialized into a
/// single fixed-layout row by [`ParameterRow::to_bytes`]. Fields never set
/// are sent as NULL.
#[derive(Debug)]
pub struct ParameterRow {
    formats: Vec<FieldFormat>,
    slots: Vec<ParameterSlot>,
    row_length: usize,
}

impl ParameterRow {
    /// Build the parameter row for the given descriptors.
    pub fn new(
        cache: Arc<ConvTableCache>,
        settings: ConversionSettings,
        formats: Vec<FieldFormat>,
    ) -> Result<Self> {
        let mut tables = ShapeTables::new(cache, &settings);
        let mut slots = Vec::with_capacity(formats.len());
        let mut offset = 0;
        for format in &formats {
            let data = SqlData::for_native(format.native_type, format.shape(), &settings)?;
            let table = tables.get(data.table_ccsid())?;
            slots.push(ParameterSlot {
                data,
                table,
                offset,
                set: false,
            });
            offset += format.length;
        }
        debug!(parameters = formats.len(), row_length = offset, "parameter row built");
        Ok(Self {
            formats,
            slots,
            row_length: offset,
        })
    }

    /// Set a parameter (1-based).
    pub fn set(&mut self, index: usize, value: impl Into<SqlValue>) -> Result<()> {
        self.set_with_scale(index, value.into(), None)
    }

    /// Set a parameter, truncating numeric input to `scale` fraction digits
    /// first.
    pub fn set_with_scale(&mut self, index: usize, value: SqlValue, scale: Option<u32>) -> Result<()> {
        let i = self.check_index(index)?;
        let slot = &mut self.slots[i];
        slot.data.set(value, scale)?;
        slot.set = true;
        Ok(())
    }

    /// Whether a parameter has been set since the last clear.
    pub fn is_set(&self, index: usize) -> Result<bool> {
        let i = self.check_index(index)?;
        Ok(self.slots[i].set)
    }

    /// Value holder of a parameter.
    pub fn field(&self, index: usize) -> Result<&SqlData> {
        let i = self.check_index(index)?;
        Ok(&self.slots[i].data)
    }

    /// Unset every parameter.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.data.set_null();
            slot.set = false;
        }
    }

    /// Indicator per parameter: `-1` for NULL or unset, `0` otherwise.
    pub fn indicators(&self) -> Vec<i16> {
        self.slots
            .iter()
            .map(|slot| {
                if slot.set && !slot.data.is_null() {
                    0
                } else {
                    INDICATOR_NULL
                }
            })
            .collect()
    }

    /// Indicators in wire form, 2 bytes each.
    pub fn indicator_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.slots.len() * 2);
        for indicator in self.indicators() {
            buf.put_i16(indicator);
        }
        buf.freeze()
    }

    /// Serialize all parameters into one row.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let mut buf = BytesMut::zeroed(self.row_length);
        for slot in &self.slots {
            slot.data.convert_to_raw_bytes(&mut buf, slot.offset, &slot.table)?;
        }
        Ok(buf.freeze())
    }
}

impl Row for ParameterRow {
    fn field_count(&self) -> usize {
        self.formats.len()
    }

    fn field_format(&self, index: usize) -> Result<&FieldFormat> {
        let i = self.check_index(index)?;
        Ok(&self.formats[i])
    }

    fn truncation(&self, index: usize) -> Result<usize> {
        let i = self.check_index(index)?;
        Ok(self.slots[i].data.truncated())
    }

    fn row_length(&self) -> usize {
        self.row_length
    }
}
