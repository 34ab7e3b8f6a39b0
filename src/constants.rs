pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];

pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Longest prefix the sniffer inspects before giving up on a BOM.
pub const BOM_WINDOW: usize = 4;

pub const COMMENT_PREFIXES: &[char] = &[';', '#'];

pub const SECTION_OPEN: char = '[';

pub const SECTION_CLOSE: char = ']';

pub const KEY_VALUE_SEPARATOR: char = '=';

#[inline]
pub fn is_comment_prefix(ch: char) -> bool {
    COMMENT_PREFIXES.contains(&ch)
}

/// Raw code unit that may appear in a line without making it non-blank.
/// NUL counts because narrow/wide mismatches leave stray zero units behind.
#[inline]
pub fn is_blank_unit(unit: u16) -> bool {
    matches!(unit, 0x00 | 0x09 | 0x0A | 0x0B | 0x0C | 0x0D | 0x20)
}
