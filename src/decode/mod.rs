pub mod normalize;
pub mod parser;
pub mod report;
pub mod scan;
pub mod sniff;

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::{Encoding, Error, IniDocument, ParseOptions, Result};

use normalize::{normalize, MalformedLine, Normalized};
use parser::{parse_line, SectionCursor};
use report::{ParseReport, SkipReason, SkippedLine};
use scan::scan_lines;
use sniff::{sniff, sniff_bytes};

pub fn parse_report(input: &[u8], options: &ParseOptions) -> ParseReport {
    let (encoding, bom_len) = sniff_bytes(input);
    decode_lines(&input[bom_len..], encoding, options)
}

pub fn parse_slice(input: &[u8], options: &ParseOptions) -> IniDocument {
    parse_report(input, options).document
}

pub fn from_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<IniDocument> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|err| Error::io("read failed", &err))?;
    Ok(parse_slice(&buf, options))
}

/// Sniffs the BOM on the stream itself, then reads the rest.
pub fn report_seekable<R: Read + Seek>(
    reader: &mut R,
    options: &ParseOptions,
) -> Result<ParseReport> {
    let encoding = sniff(reader).map_err(|err| Error::io("bom detection failed", &err))?;
    let mut body = Vec::new();
    reader
        .read_to_end(&mut body)
        .map_err(|err| Error::io("read failed", &err))?;
    Ok(decode_lines(&body, encoding, options))
}

pub fn from_seekable<R: Read + Seek>(reader: &mut R, options: &ParseOptions) -> Result<IniDocument> {
    report_seekable(reader, options).map(|report| report.document)
}

pub fn report_path(path: &Path, options: &ParseOptions) -> Result<ParseReport> {
    let file = File::open(path)
        .map_err(|err| Error::io(&format!("open {}", path.display()), &err))?;
    let mut reader = BufReader::new(file);
    report_seekable(&mut reader, options)
}

pub fn try_load(path: &Path, options: &ParseOptions) -> Result<IniDocument> {
    report_path(path, options).map(|report| report.document)
}

/// Missing or unreadable files yield an empty document.
pub fn load(path: &Path, options: &ParseOptions) -> IniDocument {
    match try_load(path, options) {
        Ok(document) => document,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "ini unavailable, using empty document");
            IniDocument::new()
        }
    }
}

/// Decodes a document into `T`. Sections become objects whose values are
/// all strings.
pub fn from_document<T: DeserializeOwned>(document: &IniDocument) -> Result<T> {
    let value = serde_json::to_value(document)
        .map_err(|err| Error::deserialize(format!("convert failed: {err}")))?;
    serde_json::from_value(value)
        .map_err(|err| Error::deserialize(format!("deserialize failed: {err}")))
}

fn decode_lines(body: &[u8], encoding: Encoding, options: &ParseOptions) -> ParseReport {
    debug!(
        %encoding,
        codec = options.default_codec.as_str(),
        bytes = body.len(),
        "decoding ini"
    );
    let mut report = ParseReport {
        encoding,
        ..ParseReport::default()
    };
    let mut cursor = SectionCursor::new();
    for raw in scan_lines(body, encoding) {
        report.lines = raw.number;
        let reason = match normalize(raw.bytes, encoding, options.default_codec) {
            Normalized::Blank => None,
            Normalized::Malformed(MalformedLine::OddLength) => Some(SkipReason::OddLength),
            Normalized::Text(text) => {
                parse_line(&mut cursor, &text, &mut report.document).skip_reason()
            }
        };
        if let Some(reason) = reason {
            trace!(line = raw.number, %reason, "skipped line");
            report.skipped.push(SkippedLine {
                line: raw.number,
                reason,
            });
        }
    }
    debug!(
        sections = report.document.len(),
        entries = report.document.entry_count(),
        skipped = report.skipped.len(),
        "decoded ini"
    );
    report
}
