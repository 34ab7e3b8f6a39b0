use std::borrow::Cow;

use smallvec::SmallVec;

use crate::constants::is_blank_unit;
use crate::text::string::trim;
use crate::{DefaultCodec, Encoding};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedLine {
    /// A UTF-16 line with a dangling byte that cannot form a code unit.
    OddLength,
}

/// A raw line after transcoding and trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Blank,
    Malformed(MalformedLine),
    Text(String),
}

/// Transcodes one raw line into trimmed text.
///
/// Blank lines are recognized on raw code units before any decoding work.
/// `codec` only applies to [`Encoding::Unspecified`].
pub fn normalize(raw: &[u8], encoding: Encoding, codec: DefaultCodec) -> Normalized {
    if raw.is_empty() {
        return Normalized::Blank;
    }
    match encoding {
        Encoding::Unspecified => normalize_narrow(raw, codec),
        Encoding::Utf8 => normalize_narrow(raw, DefaultCodec::Utf8),
        Encoding::Utf16Le => normalize_wide(raw, u16::from_le_bytes),
        Encoding::Utf16Be => normalize_wide(raw, u16::from_be_bytes),
    }
}

fn normalize_narrow(raw: &[u8], codec: DefaultCodec) -> Normalized {
    if raw.iter().all(|&byte| is_blank_unit(u16::from(byte))) {
        return Normalized::Blank;
    }
    // Only the first stray NUL is padding; later ones are content.
    let raw = raw.strip_prefix(&[0]).unwrap_or(raw);
    let text = match codec {
        DefaultCodec::Utf8 => String::from_utf8_lossy(raw),
        DefaultCodec::Latin1 => Cow::Owned(raw.iter().copied().map(char::from).collect()),
    };
    finish(text)
}

fn normalize_wide(raw: &[u8], combine: fn([u8; 2]) -> u16) -> Normalized {
    if raw.len() % 2 != 0 {
        return Normalized::Malformed(MalformedLine::OddLength);
    }
    let units: SmallVec<[u16; 128]> = raw
        .chunks_exact(2)
        .map(|pair| combine([pair[0], pair[1]]))
        .collect();
    if units.iter().all(|&unit| is_blank_unit(unit)) {
        return Normalized::Blank;
    }
    let text: String = char::decode_utf16(units.iter().copied())
        .map(|decoded| decoded.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    finish(Cow::Owned(text))
}

fn finish(text: Cow<'_, str>) -> Normalized {
    let trimmed = trim(&text);
    if trimmed.is_empty() {
        return Normalized::Blank;
    }
    if trimmed.len() == text.len() {
        return Normalized::Text(text.into_owned());
    }
    Normalized::Text(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_le_bytes).collect()
    }

    fn utf16be(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_be_bytes).collect()
    }

    fn text(value: &str) -> Normalized {
        Normalized::Text(value.to_string())
    }

    #[rstest::rstest]
    #[case(b"", Normalized::Blank)]
    #[case(b" \t\r", Normalized::Blank)]
    #[case(b"\0", Normalized::Blank)]
    #[case(b"\0 \0", Normalized::Blank)]
    #[case(b"  key = value \r", text("key = value"))]
    #[case(b"\0[A]", text("[A]"))]
    fn test_narrow(#[case] raw: &[u8], #[case] expected: Normalized) {
        assert_eq!(normalize(raw, Encoding::Utf8, DefaultCodec::Utf8), expected);
        assert_eq!(
            normalize(raw, Encoding::Unspecified, DefaultCodec::Utf8),
            expected
        );
    }

    #[rstest::rstest]
    fn test_narrow_strips_only_one_leading_nul() {
        assert_eq!(
            normalize(b"\0\0k=v", Encoding::Utf8, DefaultCodec::Utf8),
            text("\0k=v")
        );
    }

    #[rstest::rstest]
    fn test_narrow_invalid_utf8_is_replaced() {
        assert_eq!(
            normalize(b"k=\xFF", Encoding::Utf8, DefaultCodec::Utf8),
            text("k=\u{FFFD}")
        );
    }

    #[rstest::rstest]
    fn test_latin1_fallback_only_without_bom() {
        assert_eq!(
            normalize(b"name=caf\xE9", Encoding::Unspecified, DefaultCodec::Latin1),
            text("name=café")
        );
        assert_eq!(
            normalize(b"name=caf\xE9", Encoding::Utf8, DefaultCodec::Latin1),
            text("name=caf\u{FFFD}")
        );
    }

    #[rstest::rstest]
    fn test_utf16_both_byte_orders() {
        let le = normalize(&utf16le(" [Grüße] \r"), Encoding::Utf16Le, DefaultCodec::Utf8);
        let be = normalize(&utf16be(" [Grüße] \r"), Encoding::Utf16Be, DefaultCodec::Utf8);
        assert_eq!(le, text("[Grüße]"));
        assert_eq!(be, le);
    }

    #[rstest::rstest]
    fn test_utf16_surrogate_pairs() {
        assert_eq!(
            normalize(&utf16le("emoji=😀"), Encoding::Utf16Le, DefaultCodec::Utf8),
            text("emoji=😀")
        );
    }

    #[rstest::rstest]
    fn test_utf16_lone_surrogate_is_replaced() {
        let raw = [b'k', 0x00, b'=', 0x00, 0x00, 0xD8];
        assert_eq!(
            normalize(&raw, Encoding::Utf16Le, DefaultCodec::Utf8),
            text("k=\u{FFFD}")
        );
    }

    #[rstest::rstest]
    fn test_utf16_odd_length_is_malformed() {
        let raw = [b'k', 0x00, b'='];
        assert_eq!(
            normalize(&raw, Encoding::Utf16Le, DefaultCodec::Utf8),
            Normalized::Malformed(MalformedLine::OddLength)
        );
    }

    #[rstest::rstest]
    fn test_utf16_blank_checked_per_unit() {
        assert_eq!(
            normalize(&utf16le(" \t\r"), Encoding::Utf16Le, DefaultCodec::Utf8),
            Normalized::Blank
        );
        // U+0920 is made of blank bytes but is a letter.
        assert_eq!(
            normalize(&[0x20, 0x09], Encoding::Utf16Le, DefaultCodec::Utf8),
            text("\u{0920}")
        );
    }

    #[rstest::rstest]
    fn test_unicode_whitespace_only_is_blank() {
        assert_eq!(
            normalize("\u{3000}".as_bytes(), Encoding::Utf8, DefaultCodec::Utf8),
            Normalized::Blank
        );
    }
}
