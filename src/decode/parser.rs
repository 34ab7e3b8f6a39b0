use smol_str::SmolStr;

use crate::constants::{is_comment_prefix, KEY_VALUE_SEPARATOR, SECTION_CLOSE, SECTION_OPEN};
use crate::decode::report::SkipReason;
use crate::text::string::{split_trimmed, trim};
use crate::IniDocument;

/// Name of the section that key/value lines currently land in.
///
/// Starts empty, meaning no section header has been seen yet. An empty
/// header (`[]`) also leaves the cursor inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionCursor {
    name: SmolStr,
}

impl SectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        if self.is_active() {
            Some(self.name.as_str())
        } else {
            None
        }
    }

    pub fn is_active(&self) -> bool {
        !self.name.is_empty()
    }
}

/// What [`parse_line`] did with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Section { created: bool },
    MalformedHeader,
    Entry,
    DuplicateKey,
    Orphan,
    MissingSeparator,
}

impl LineKind {
    /// Reason to report for a line that carried content but changed nothing.
    pub fn skip_reason(self) -> Option<SkipReason> {
        match self {
            LineKind::MalformedHeader => Some(SkipReason::MalformedHeader),
            LineKind::DuplicateKey => Some(SkipReason::DuplicateKey),
            LineKind::Orphan => Some(SkipReason::Orphan),
            LineKind::MissingSeparator => Some(SkipReason::MissingSeparator),
            LineKind::Blank | LineKind::Comment | LineKind::Section { .. } | LineKind::Entry => {
                None
            }
        }
    }
}

/// Applies one normalized line to `document`, moving `cursor` on section
/// headers. Lines that do not fit the grammar are skipped, never fatal.
pub fn parse_line(cursor: &mut SectionCursor, line: &str, document: &mut IniDocument) -> LineKind {
    let line = trim(line);
    let Some(first) = line.chars().next() else {
        return LineKind::Blank;
    };
    if is_comment_prefix(first) {
        return LineKind::Comment;
    }
    if first == SECTION_OPEN {
        return parse_section_header(cursor, line, document);
    }
    parse_entry(cursor, line, document)
}

fn parse_section_header(
    cursor: &mut SectionCursor,
    line: &str,
    document: &mut IniDocument,
) -> LineKind {
    let Some(inner) = line[SECTION_OPEN.len_utf8()..].strip_suffix(SECTION_CLOSE) else {
        return LineKind::MalformedHeader;
    };
    let name = trim(inner);
    let (_, created) = document.section_entry(name);
    cursor.name = SmolStr::new(name);
    LineKind::Section { created }
}

fn parse_entry(cursor: &SectionCursor, line: &str, document: &mut IniDocument) -> LineKind {
    if !cursor.is_active() {
        return LineKind::Orphan;
    }
    let Some((key, value)) = split_trimmed(line, KEY_VALUE_SEPARATOR) else {
        return LineKind::MissingSeparator;
    };
    let (section, _) = document.section_entry(&cursor.name);
    if section.insert_if_absent(SmolStr::new(key), value.to_owned()) {
        LineKind::Entry
    } else {
        LineKind::DuplicateKey
    }
}
