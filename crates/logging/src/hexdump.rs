//! crates/logging/src/hexdump.rs
//! Hex rendering of raw byte buffers.

use std::fmt;
use std::io::{self, Write};

/// Lowercase hex digits.
const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Displays a byte slice as `"xx "` per byte, in order.
///
/// The rendering is exactly `3 * len` bytes long and carries no terminator;
/// the sink appends the newline.
///
/// ```
/// use logging::HexDump;
///
/// assert_eq!(HexDump(&[0x00, 0xff, 0x1a]).to_string(), "00 ff 1a ");
/// assert_eq!(HexDump(&[]).to_string(), "");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HexDump<'a>(pub &'a [u8]);

impl HexDump<'_> {
    /// Number of bytes the rendering occupies.
    #[must_use]
    pub const fn rendered_len(&self) -> usize {
        self.0.len() * 3
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x} ")?;
        }
        Ok(())
    }
}

/// Streams the hex rendering of `data` into `writer`.
///
/// Bytes are encoded in fixed-size chunks so large buffers do not need an
/// intermediate allocation.
pub fn write_hex_dump<W: Write + ?Sized>(writer: &mut W, data: &[u8]) -> io::Result<()> {
    let mut chunk = [0u8; 3 * 32];
    for block in data.chunks(32) {
        let mut used = 0;
        for &byte in block {
            chunk[used] = DIGITS[usize::from(byte >> 4)];
            chunk[used + 1] = DIGITS[usize::from(byte & 0x0f)];
            chunk[used + 2] = b' ';
            used += 3;
        }
        writer.write_all(&chunk[..used])?;
    }
    Ok(())
}
