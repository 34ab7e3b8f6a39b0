use std::fmt;

use serde::Serialize;

use crate::constants::{UTF16_BE_BOM, UTF16_LE_BOM, UTF8_BOM};

/// Text encoding of an input stream, as announced by its byte-order mark.
///
/// Only the encodings the sniffer can recognize are represented. Input
/// without a BOM is [`Encoding::Unspecified`] and is decoded with the
/// configured [`DefaultCodec`](crate::DefaultCodec).
///
/// # Examples
/// ```
/// use tinyini::Encoding;
///
/// assert_eq!(Encoding::Utf16Le.bom(), &[0xFF, 0xFE]);
/// assert_eq!(Encoding::Unspecified.bom(), &[] as &[u8]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Encoding {
    #[default]
    Unspecified,
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl Encoding {
    /// Byte-order mark announcing this encoding.
    pub const fn bom(self) -> &'static [u8] {
        match self {
            Encoding::Unspecified => &[],
            Encoding::Utf8 => &UTF8_BOM,
            Encoding::Utf16Le => &UTF16_LE_BOM,
            Encoding::Utf16Be => &UTF16_BE_BOM,
        }
    }

    /// Width in bytes of one code unit.
    ///
    /// # Examples
    /// ```
    /// use tinyini::Encoding;
    ///
    /// assert_eq!(Encoding::Utf8.unit_width(), 1);
    /// assert_eq!(Encoding::Utf16Be.unit_width(), 2);
    /// ```
    pub const fn unit_width(self) -> usize {
        match self {
            Encoding::Unspecified | Encoding::Utf8 => 1,
            Encoding::Utf16Le | Encoding::Utf16Be => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Encoding::Unspecified => "unspecified",
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
