use crate::error::{Error, Result};

/// Decodes a big-endian unsigned integer from a 1, 2, 4 or 8 byte buffer.
///
/// Any other length is a format violation rather than a wider or narrower
/// number, so it's rejected outright.
pub fn buf_to_number(buf: &[u8]) -> Result<u64> {
    match *buf {
        [a] => Ok(u64::from(a)),
        [a, b] => Ok(u64::from(u16::from_be_bytes([a, b]))),
        [a, b, c, d] => Ok(u64::from(u32::from_be_bytes([a, b, c, d]))),
        [a, b, c, d, e, f, g, h] => Ok(u64::from_be_bytes([a, b, c, d, e, f, g, h])),
        _ => Err(Error::NumberLength(buf.len())),
    }
}
