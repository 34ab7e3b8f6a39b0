use std::io::{self, Read, Seek, SeekFrom};

use crate::constants::BOM_WINDOW;
use crate::Encoding;

/// Classifies the stream by its byte-order mark.
///
/// Reads at most four bytes, one at a time, and stops as soon as a BOM is
/// recognized, leaving the reader just past it. When nothing matches the
/// reader is rewound to where sniffing began so the bytes are read again as
/// data.
pub fn sniff<R: Read + Seek>(reader: &mut R) -> io::Result<Encoding> {
    let start = reader.stream_position()?;
    let mut window = [0u8; BOM_WINDOW];
    let mut read = 0;
    while read < BOM_WINDOW {
        match reader.read(&mut window[read..=read]) {
            Ok(0) => break,
            Ok(_) => read += 1,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
        if let Some(encoding) = match_bom(&window[..read]) {
            return Ok(encoding);
        }
    }
    reader.seek(SeekFrom::Start(start))?;
    Ok(Encoding::Unspecified)
}

/// Same decision as [`sniff`] over an in-memory buffer. Returns the encoding
/// and the number of leading bytes to skip.
pub fn sniff_bytes(bytes: &[u8]) -> (Encoding, usize) {
    let window = bytes.len().min(BOM_WINDOW);
    for end in 1..=window {
        if let Some(encoding) = match_bom(&bytes[..end]) {
            return (encoding, end);
        }
    }
    (Encoding::Unspecified, 0)
}

fn match_bom(prefix: &[u8]) -> Option<Encoding> {
    match prefix {
        [0xFF, 0xFE] => Some(Encoding::Utf16Le),
        [0xFE, 0xFF] => Some(Encoding::Utf16Be),
        [0xEF, 0xBB, 0xBF] => Some(Encoding::Utf8),
        _ => None,
    }
}
