use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use tinyini::{DefaultCodec, ParseOptions, ParseReport};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tinyini", version, about = "Inspect INI files of any BOM-marked encoding")]
struct Args {
    /// INI file to read. A missing file reads as an empty document.
    input: PathBuf,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Print only this section.
    #[arg(short, long, value_name = "name")]
    section: Option<String>,

    /// Print only this key's raw value (requires --section).
    #[arg(short, long, value_name = "name", requires = "section")]
    key: Option<String>,

    /// Codec for files without a byte-order mark.
    #[arg(long, value_enum, value_name = "codec", default_value_t = CodecArg::Utf8)]
    codec: CodecArg,

    /// JSON indentation size, 0 for compact output (default: 2).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,

    /// List lines the parser skipped; exit with status 1 if there are any.
    #[arg(long)]
    check: bool,

    /// Log parser activity to stderr.
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CodecArg {
    Utf8,
    Latin1,
}

impl From<CodecArg> for DefaultCodec {
    fn from(value: CodecArg) -> Self {
        match value {
            CodecArg::Utf8 => DefaultCodec::Utf8,
            CodecArg::Latin1 => DefaultCodec::Latin1,
        }
    }
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("ERROR  {err}");
            std::process::exit(1);
        }
    }
}

/// Returns false when `--check` found skipped lines.
fn run() -> Result<bool, Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = ParseOptions::new().with_default_codec(args.codec.into());
    let report = read_report(&args, &options)?;

    if args.check {
        with_output_writer(args.output.as_deref(), |writer| {
            write_check(writer, &args, &report)
        })?;
        return Ok(report.is_clean());
    }

    let document = &report.document;
    with_output_writer(args.output.as_deref(), |writer| {
        match (args.section.as_deref(), args.key.as_deref()) {
            (Some(section), Some(key)) => {
                writeln!(writer, "{}", document.value_or_empty(section, key))?;
                Ok(())
            }
            (Some(section), None) => {
                write_json(writer, document.section_or_empty(section), args.indent)
            }
            _ => write_json(writer, document, args.indent),
        }
    })?;
    Ok(true)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_report(args: &Args, options: &ParseOptions) -> Result<ParseReport, Box<dyn Error>> {
    match tinyini::report_path(&args.input, options) {
        Ok(report) => Ok(report),
        Err(err) if err.is_not_found() => {
            tracing::debug!(path = %args.input.display(), "input missing, using empty document");
            Ok(ParseReport::default())
        }
        Err(err) => Err(err.into()),
    }
}

fn write_check(
    writer: &mut dyn Write,
    args: &Args,
    report: &ParseReport,
) -> Result<(), Box<dyn Error>> {
    writeln!(
        writer,
        "{}: {} ({} lines, {} sections)",
        args.input.display(),
        report.encoding,
        report.lines,
        report.document.len()
    )?;
    for skipped in &report.skipped {
        writeln!(writer, "  line {}: {}", skipped.line, skipped.reason)?;
    }
    Ok(())
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_json<T: Serialize>(
    writer: &mut dyn Write,
    value: &T,
    indent: usize,
) -> Result<(), Box<dyn Error>> {
    if indent == 0 {
        serde_json::to_writer(&mut *writer, value)?;
    } else {
        let indent_bytes = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
        let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
        value.serialize(&mut serializer)?;
    }
    writeln!(writer)?;
    Ok(())
}
