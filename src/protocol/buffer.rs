//! Binary codec: fixed-width big-endian values at byte offsets.
//!
//! The host sends everything in network byte order. All readers and writers
//! here take an absolute offset and fail with [`Error::BufferTooSmall`] when
//! the value would run past the end of the slice.

use crate::error::{Error, Result};
use crate::protocol::constants::{LOB_LENGTH_PREFIX, VARIABLE_LENGTH_PREFIX};

/// Width of a length prefix in front of variable-length data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixWidth {
    /// 2-byte prefix (VARCHAR, VARBINARY, VARGRAPHIC, DATALINK, ROWID).
    Short,
    /// 4-byte prefix (inline LOBs).
    Long,
}

impl PrefixWidth {
    /// Number of bytes the prefix occupies.
    pub fn size(self) -> usize {
        match self {
            PrefixWidth::Short => VARIABLE_LENGTH_PREFIX,
            PrefixWidth::Long => LOB_LENGTH_PREFIX,
        }
    }
}

#[track_caller]
fn check(buf_len: usize, offset: usize, width: usize) -> Result<()> {
    if offset.checked_add(width).map_or(true, |end| end > buf_len) {
        return Err(Error::BufferTooSmall {
            needed: offset.saturating_add(width),
            available: buf_len,
            location: std::panic::Location::caller(),
        });
    }
    Ok(())
}

/// Borrow `len` bytes at `offset`.
#[track_caller]
pub fn slice(buf: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    check(buf.len(), offset, len)?;
    Ok(&buf[offset..offset + len])
}

/// Mutably borrow `len` bytes at `offset`.
#[track_caller]
pub fn slice_mut(buf: &mut [u8], offset: usize, len: usize) -> Result<&mut [u8]> {
    check(buf.len(), offset, len)?;
    Ok(&mut buf[offset..offset + len])
}

#[track_caller]
fn array<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N]> {
    check(buf.len(), offset, N)?;
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(&buf[offset..offset + N]);
    Ok(bytes)
}

#[track_caller]
fn put<const N: usize>(buf: &mut [u8], offset: usize, bytes: [u8; N]) -> Result<()> {
    check(buf.len(), offset, N)?;
    buf[offset..offset + N].copy_from_slice(&bytes);
    Ok(())
}

/// Read a big-endian i16.
#[track_caller]
pub fn read_i16(buf: &[u8], offset: usize) -> Result<i16> {
    Ok(i16::from_be_bytes(array(buf, offset)?))
}

/// Read a big-endian u16.
#[track_caller]
pub fn read_u16(buf: &[u8], offset: usize) -> Result<u16> {
    Ok(u16::from_be_bytes(array(buf, offset)?))
}

/// Read a big-endian i32.
#[track_caller]
pub fn read_i32(buf: &[u8], offset: usize) -> Result<i32> {
    Ok(i32::from_be_bytes(array(buf, offset)?))
}

/// Read a big-endian u32.
#[track_caller]
pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32> {
    Ok(u32::from_be_bytes(array(buf, offset)?))
}

/// Read a big-endian i64.
#[track_caller]
pub fn read_i64(buf: &[u8], offset: usize) -> Result<i64> {
    Ok(i64::from_be_bytes(array(buf, offset)?))
}

/// Read a big-endian u64.
#[track_caller]
pub fn read_u64(buf: &[u8], offset: usize) -> Result<u64> {
    Ok(u64::from_be_bytes(array(buf, offset)?))
}

/// Read a big-endian IEEE single.
#[track_caller]
pub fn read_f32(buf: &[u8], offset: usize) -> Result<f32> {
    Ok(f32::from_be_bytes(array(buf, offset)?))
}

/// Read a big-endian IEEE double.
#[track_caller]
pub fn read_f64(buf: &[u8], offset: usize) -> Result<f64> {
    Ok(f64::from_be_bytes(array(buf, offset)?))
}

/// Write a big-endian i16.
#[track_caller]
pub fn write_i16(buf: &mut [u8], offset: usize, val: i16) -> Result<()> {
    put(buf, offset, val.to_be_bytes())
}

/// Write a big-endian u16.
#[track_caller]
pub fn write_u16(buf: &mut [u8], offset: usize, val: u16) -> Result<()> {
    put(buf, offset, val.to_be_bytes())
}

/// Write a big-endian i32.
#[track_caller]
pub fn write_i32(buf: &mut [u8], offset: usize, val: i32) -> Result<()> {
    put(buf, offset, val.to_be_bytes())
}

/// Write a big-endian u32.
#[track_caller]
pub fn write_u32(buf: &mut [u8], offset: usize, val: u32) -> Result<()> {
    put(buf, offset, val.to_be_bytes())
}

/// Write a big-endian i64.
#[track_caller]
pub fn write_i64(buf: &mut [u8], offset: usize, val: i64) -> Result<()> {
    put(buf, offset, val.to_be_bytes())
}

/// Write a big-endian u64.
#[track_caller]
pub fn write_u64(buf: &mut [u8], offset: usize, val: u64) -> Result<()> {
    put(buf, offset, val.to_be_bytes())
}

/// Write a big-endian IEEE single.
#[track_caller]
pub fn write_f32(buf: &mut [u8], offset: usize, val: f32) -> Result<()> {
    put(buf, offset, val.to_be_bytes())
}

/// Write a big-endian IEEE double.
#[track_caller]
pub fn write_f64(buf: &mut [u8], offset: usize, val: f64) -> Result<()> {
    put(buf, offset, val.to_be_bytes())
}

/// Read an unsigned length prefix.
#[track_caller]
pub fn read_length_prefix(buf: &[u8], offset: usize, width: PrefixWidth) -> Result<usize> {
    match width {
        PrefixWidth::Short => read_u16(buf, offset).map(usize::from),
        PrefixWidth::Long => read_u32(buf, offset).map(|v| v as usize),
    }
}

/// Write an unsigned length prefix.
#[track_caller]
pub fn write_length_prefix(
    buf: &mut [u8],
    offset: usize,
    width: PrefixWidth,
    len: usize,
) -> Result<()> {
    match width {
        PrefixWidth::Short => {
            let val = u16::try_from(len)
                .map_err(|_| Error::out_of_range(format!("length {} exceeds 2-byte prefix", len)))?;
            write_u16(buf, offset, val)
        }
        PrefixWidth::Long => {
            let val = u32::try_from(len)
                .map_err(|_| Error::out_of_range(format!("length {} exceeds 4-byte prefix", len)))?;
            write_u32(buf, offset, val)
        }
    }
}
