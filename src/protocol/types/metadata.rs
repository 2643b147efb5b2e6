//! Field format descriptors from the server's row description.
//!
//! One [`FieldFormat`] per field, created once per result set shape (or
//! parameter marker list) and immutable afterwards.

use crate::protocol::constants::{CCSID_UTF8, NO_LOCATOR};

/// Parameter direction byte, meaningful for stored procedure calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterDirection {
    #[default]
    Input,
    Output,
    InputOutput,
}

impl ParameterDirection {
    /// Map the direction byte (`0xF0` in, `0xF1` out, `0xF2` in/out).
    ///
    /// Unknown bytes are treated as input.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0xF1 => ParameterDirection::Output,
            0xF2 => ParameterDirection::InputOutput,
            _ => ParameterDirection::Input,
        }
    }

    /// Whether a value is sent for this parameter.
    pub fn is_input(self) -> bool {
        matches!(self, ParameterDirection::Input | ParameterDirection::InputOutput)
    }
}

/// Size attributes a field type is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldShape {
    /// Byte length on the wire, including any length prefix.
    pub length: usize,
    pub precision: u32,
    pub scale: u32,
    pub ccsid: u32,
    /// Locator handle for parameter locators (`NO_LOCATOR` otherwise).
    pub lob_locator: u32,
    /// Maximum LOB size in characters or bytes.
    pub lob_max_size: usize,
}

impl FieldShape {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn with_precision(mut self, precision: u32, scale: u32) -> Self {
        self.precision = precision;
        self.scale = scale;
        self
    }

    pub fn with_ccsid(mut self, ccsid: u32) -> Self {
        self.ccsid = ccsid;
        self
    }

    pub fn with_lob(mut self, locator: u32, max_size: usize) -> Self {
        self.lob_locator = locator;
        self.lob_max_size = max_size;
        self
    }
}

/// Server description of one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFormat {
    /// Field name bytes, encoded in `name_ccsid`.
    pub name: Vec<u8>,
    pub name_ccsid: u32,
    /// Native type id; the low bit marks a nullable field.
    pub native_type: u16,
    /// Byte length on the wire, including any length prefix.
    pub length: usize,
    pub precision: u32,
    pub scale: u32,
    pub ccsid: u32,
    pub nullable: bool,
    pub direction: ParameterDirection,
    /// LOB locator handle, or `NO_LOCATOR`.
    pub lob_locator: u32,
    pub lob_max_size: usize,
}

impl FieldFormat {
    /// Create a format with the given type and length and no name.
    ///
    /// Nullability follows the low bit of `native_type`.
    pub fn new(native_type: u16, length: usize) -> Self {
        Self {
            name: Vec::new(),
            name_ccsid: CCSID_UTF8,
            native_type,
            length,
            precision: 0,
            scale: 0,
            ccsid: 0,
            nullable: native_type & 1 == 1,
            direction: ParameterDirection::Input,
            lob_locator: NO_LOCATOR,
            lob_max_size: 0,
        }
    }

    /// Name as UTF-8 text.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.as_bytes().to_vec();
        self.name_ccsid = CCSID_UTF8;
        self
    }

    /// Name as raw bytes in the server's naming CCSID.
    pub fn with_raw_name(mut self, name: Vec<u8>, ccsid: u32) -> Self {
        self.name = name;
        self.name_ccsid = ccsid;
        self
    }

    pub fn with_precision(mut self, precision: u32, scale: u32) -> Self {
        self.precision = precision;
        self.scale = scale;
        self
    }

    pub fn with_ccsid(mut self, ccsid: u32) -> Self {
        self.ccsid = ccsid;
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_direction(mut self, direction: ParameterDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_lob_locator(mut self, locator: u32, max_size: usize) -> Self {
        self.lob_locator = locator;
        self.lob_max_size = max_size;
        self
    }

    /// Size attributes for building the field's data holder.
    pub fn shape(&self) -> FieldShape {
        FieldShape {
            length: self.length,
            precision: self.precision,
            scale: self.scale,
            ccsid: self.ccsid,
            lob_locator: self.lob_locator,
            lob_max_size: self.lob_max_size,
        }
    }
}
