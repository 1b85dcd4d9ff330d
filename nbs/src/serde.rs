//! Deserialization of the primitives NBS files are built from
//!
//! Everything in the format is little-endian, two's-complement and packed
//! without padding. Reads are strictly sequential; no part of the format
//! requires seeking.

use std::io::{self, Read};
use thiserror::Error;

/// Read an exact number of bytes from an I/O reader
pub fn read_bytes<const N: usize, R>(mut reader: R) -> Result<[u8; N], ReadError>
where
    R: Read,
{
    let mut bytes = [0; N];
    reader.read_exact(bytes.as_mut_slice())?;

    Ok(bytes)
}

/// Read a signed byte
pub fn read_i8<R>(reader: R) -> Result<i8, ReadError>
where
    R: Read,
{
    let [byte] = read_bytes(reader)?;
    Ok(byte as i8)
}

/// Read a signed 16-bit little-endian integer
pub fn read_i16<R>(reader: R) -> Result<i16, ReadError>
where
    R: Read,
{
    Ok(i16::from_le_bytes(read_bytes(reader)?))
}

/// Read a signed 32-bit little-endian integer
pub fn read_i32<R>(reader: R) -> Result<i32, ReadError>
where
    R: Read,
{
    Ok(i32::from_le_bytes(read_bytes(reader)?))
}

/// Read a length-prefixed string
///
/// The prefix is a signed 32-bit length. Zero or negative means the string
/// is absent and no payload bytes follow, in which case [`None`] is
/// returned. Invalid UTF-8 sequences in the payload are substituted with
/// the replacement character rather than rejected.
pub fn read_string<R>(mut reader: R) -> Result<Option<String>, ReadError>
where
    R: Read,
{
    let length = read_i32(&mut reader)?;
    if length <= 0 {
        return Ok(None);
    }

    let mut bytes = vec![0; length as usize];
    reader.read_exact(bytes.as_mut_slice())?;

    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

/// An error describing what could go wrong reading NBS primitives from I/O
#[derive(Debug, Error)]
pub enum ReadError {
    /// The reader ran out of bytes in the middle of a field. The format
    /// carries no length markers up front, so this is how a truncated file
    /// shows up.
    #[error("The file ended in the middle of a field")]
    ShortRead(#[source] io::Error),

    /// Any other failure that has to do with I/O
    #[error("Something failed with I/O")]
    Io(#[source] io::Error),
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::ShortRead(err),
            _ => Self::Io(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn integers() {
        let mut cursor = Cursor::new([0xFF, 0x2C, 0x01, 0xF4, 0x01, 0xD6, 0xFF, 0xFF, 0xFF]);

        assert_eq!(read_i8(&mut cursor).unwrap(), -1);
        assert_eq!(read_i16(&mut cursor).unwrap(), 300);
        assert_eq!(read_i16(&mut cursor).unwrap(), 500);
        assert_eq!(read_i32(&mut cursor).unwrap(), -42);
    }

    #[test]
    fn string() {
        let mut cursor = Cursor::new([5, 0, 0, 0, b'H', b'e', b'l', b'l', b'o']);

        assert_eq!(
            read_string(&mut cursor).unwrap(),
            Some(String::from("Hello"))
        );
    }

    #[test]
    fn absent_string() {
        // A zero length prefix carries no payload; the next field follows directly
        let mut cursor = Cursor::new([0, 0, 0, 0, 0x2A, 0x00]);

        assert_eq!(read_string(&mut cursor).unwrap(), None);
        assert_eq!(read_i16(&mut cursor).unwrap(), 42);
    }

    #[test]
    fn negative_length_string() {
        let cursor = Cursor::new((-1_i32).to_le_bytes());

        assert_eq!(read_string(cursor).unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_substituted() {
        let cursor = Cursor::new([3, 0, 0, 0, b'a', 0xFF, b'b']);

        assert_eq!(
            read_string(cursor).unwrap(),
            Some(String::from("a\u{FFFD}b"))
        );
    }

    #[test]
    fn short_read() {
        let cursor = Cursor::new([0x01]);

        assert!(matches!(
            read_i16(cursor),
            Err(ReadError::ShortRead(_))
        ));
    }

    #[test]
    fn short_string_payload() {
        // Length prefix promises more bytes than the file has left
        let cursor = Cursor::new([10, 0, 0, 0, b'a', b'b']);

        assert!(matches!(
            read_string(cursor),
            Err(ReadError::ShortRead(_))
        ));
    }
}
