use std::fmt;

use serde::Serialize;

use crate::{Encoding, IniDocument};

/// Why a line with content left the document unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    MalformedHeader,
    MissingSeparator,
    Orphan,
    DuplicateKey,
    OddLength,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::MalformedHeader => "section header without closing bracket",
            SkipReason::MissingSeparator => "no '=' in entry",
            SkipReason::Orphan => "entry outside any section",
            SkipReason::DuplicateKey => "duplicate key ignored",
            SkipReason::OddLength => "dangling byte in utf-16 line",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based, counting blank lines.
    pub line: usize,
    pub reason: SkipReason,
}

/// A parsed document together with what the parser had to ignore.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseReport {
    pub document: IniDocument,
    pub encoding: Encoding,
    pub lines: usize,
    pub skipped: Vec<SkippedLine>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
