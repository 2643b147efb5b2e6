//! Session-wide conversion settings.

use crate::conv::BidiStringType;
use crate::error::{Error, Result};
use crate::protocol::constants::{CCSID_DEFAULT, VRM_V7R1M0};

/// Settings that shape how fields convert, shared by every row of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSettings {
    /// Bidi string type override (Default = use each table's own rule).
    pub bidi_string_type: BidiStringType,
    /// Return DECIMAL/NUMERIC values as exact decimals rather than doubles.
    pub prefer_exact_decimal: bool,
    /// Truncate character and binary values to this many characters/bytes
    /// on read (0 = unlimited).
    pub max_field_size: usize,
    /// Treat CCSID 65535 character data as text instead of bytes.
    pub translate_binary: bool,
    /// Reorder bidi text between visual and logical order.
    pub bidi_implicit_reordering: bool,
    /// Keep digits in left-to-right order inside RTL runs.
    pub bidi_numeric_ordering: bool,
    /// Server version as 0x00VVRRMM.
    pub server_vrm: u32,
    /// CCSID used for 65535 text when `translate_binary` is set.
    pub default_ccsid: u32,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            bidi_string_type: BidiStringType::Default,
            prefer_exact_decimal: true,
            max_field_size: 0,
            translate_binary: false,
            bidi_implicit_reordering: true,
            bidi_numeric_ordering: false,
            server_vrm: VRM_V7R1M0,
            default_ccsid: CCSID_DEFAULT,
        }
    }
}

impl ConversionSettings {
    /// Create settings with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bidi_string_type(mut self, string_type: BidiStringType) -> Self {
        self.bidi_string_type = string_type;
        self
    }

    pub fn with_prefer_exact_decimal(mut self, prefer: bool) -> Self {
        self.prefer_exact_decimal = prefer;
        self
    }

    pub fn with_max_field_size(mut self, size: usize) -> Self {
        self.max_field_size = size;
        self
    }

    pub fn with_translate_binary(mut self, translate: bool) -> Self {
        self.translate_binary = translate;
        self
    }

    pub fn with_bidi_implicit_reordering(mut self, reorder: bool) -> Self {
        self.bidi_implicit_reordering = reorder;
        self
    }

    pub fn with_bidi_numeric_ordering(mut self, numeric: bool) -> Self {
        self.bidi_numeric_ordering = numeric;
        self
    }

    /// Set the server version.
    ///
    /// # Example
    ///
    /// ```
    /// use ibmi_datastream_rs::ConversionSettings;
    ///
    /// let settings = ConversionSettings::new().with_server_vrm(5, 2, 0);
    /// assert_eq!(settings.server_vrm, 0x0005_0200);
    /// ```
    pub fn with_server_vrm(mut self, version: u8, release: u8, modification: u8) -> Self {
        self.server_vrm =
            (u32::from(version) << 16) | (u32::from(release) << 8) | u32::from(modification);
        self
    }

    pub fn with_default_ccsid(mut self, ccsid: u32) -> Self {
        self.default_ccsid = ccsid;
        self
    }

    /// Parse a property string like
    /// `"translate binary=true;bidi string type=5;maximum field size=100"`.
    ///
    /// Keys are case-insensitive; empty segments are ignored.
    pub fn parse(props: &str) -> Result<Self> {
        let mut settings = Self::default();
        for segment in props.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, value) = segment.split_once('=').ok_or_else(|| Error::InvalidProperty {
                name: segment.to_string(),
                value: String::new(),
            })?;
            settings.apply(key.trim(), value.trim())?;
        }
        Ok(settings)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || Error::InvalidProperty {
            name: key.to_string(),
            value: value.to_string(),
        };
        let flag = || match value.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(invalid()),
        };
        match key.to_ascii_lowercase().as_str() {
            "bidi string type" => {
                let code = value.parse::<u8>().map_err(|_| invalid())?;
                self.bidi_string_type = BidiStringType::from_code(code).map_err(|_| invalid())?;
            }
            "prefer exact decimal" => self.prefer_exact_decimal = flag()?,
            "maximum field size" => {
                self.max_field_size = value.parse().map_err(|_| invalid())?;
            }
            "translate binary" => self.translate_binary = flag()?,
            "bidi implicit reordering" => self.bidi_implicit_reordering = flag()?,
            "bidi numeric ordering" => self.bidi_numeric_ordering = flag()?,
            "server vrm" => {
                let digits = value.trim_start_matches("0x");
                self.server_vrm = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
            }
            "default ccsid" => self.default_ccsid = value.parse().map_err(|_| invalid())?,
            _ => return Err(invalid()),
        }
        Ok(())
    }
}
