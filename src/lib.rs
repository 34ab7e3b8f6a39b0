pub mod constants;
pub mod decode;
pub mod error;
pub mod options;
pub mod types;

mod text;

use std::io::{Read, Seek};
use std::path::Path;

use serde::de::DeserializeOwned;

pub use crate::decode::normalize::{normalize, MalformedLine, Normalized};
pub use crate::decode::parser::{parse_line, LineKind, SectionCursor};
pub use crate::decode::report::{ParseReport, SkipReason, SkippedLine};
pub use crate::decode::sniff::{sniff, sniff_bytes};
pub use crate::error::{Error, ErrorKind};
pub use crate::options::{DefaultCodec, ParseOptions};
pub use crate::types::{Encoding, IniDocument, Section, SectionIter};

pub type Result<T> = std::result::Result<T, Error>;

/// Reads the INI file at `path`. A file that cannot be opened or read
/// yields an empty document.
pub fn load(path: impl AsRef<Path>) -> IniDocument {
    load_with_options(path, &ParseOptions::default())
}

pub fn load_with_options(path: impl AsRef<Path>, options: &ParseOptions) -> IniDocument {
    decode::load(path.as_ref(), options)
}

/// Like [`load`], but reports why the file could not be read.
pub fn try_load(path: impl AsRef<Path>) -> Result<IniDocument> {
    try_load_with_options(path, &ParseOptions::default())
}

pub fn try_load_with_options(path: impl AsRef<Path>, options: &ParseOptions) -> Result<IniDocument> {
    decode::try_load(path.as_ref(), options)
}

pub fn report_path(path: impl AsRef<Path>, options: &ParseOptions) -> Result<ParseReport> {
    decode::report_path(path.as_ref(), options)
}

pub fn from_seekable<R: Read + Seek>(reader: &mut R, options: &ParseOptions) -> Result<IniDocument> {
    decode::from_seekable(reader, options)
}

pub fn from_reader<R: Read>(reader: R) -> Result<IniDocument> {
    from_reader_with_options(reader, &ParseOptions::default())
}

pub fn from_reader_with_options<R: Read>(reader: R, options: &ParseOptions) -> Result<IniDocument> {
    decode::from_reader(reader, options)
}

pub fn parse_slice(input: &[u8]) -> IniDocument {
    parse_slice_with_options(input, &ParseOptions::default())
}

pub fn parse_slice_with_options(input: &[u8], options: &ParseOptions) -> IniDocument {
    decode::parse_slice(input, options)
}

pub fn parse_str(input: &str) -> IniDocument {
    parse_slice(input.as_bytes())
}

pub fn parse_report(input: &[u8], options: &ParseOptions) -> ParseReport {
    decode::parse_report(input, options)
}

pub fn from_document<T: DeserializeOwned>(document: &IniDocument) -> Result<T> {
    decode::from_document(document)
}

/// Reads `path` and decodes it into `T`. A missing file decodes like an
/// empty one, so fields with serde defaults still resolve.
pub fn from_path<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    from_document(&load(path))
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    from_document(&parse_slice(input))
}
