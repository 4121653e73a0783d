//! Output formatting utilities
//!
//! Provides text and JSON output formatting for the status report.

use crate::cli::args::OutputFormat;
use crate::domain::StatusReport;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::{self, Write};

const JSON_INDENT: &[u8] = b"    ";

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TextDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, data, format)
}

/// Format output into any writer
pub fn write_output<W: Write, T: Serialize + TextDisplay>(
    writer: &mut W,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(writer, "{}", to_json(data)?)?;
        }
        OutputFormat::Text => {
            let text = data.to_text();
            if !text.is_empty() {
                writeln!(writer, "{}", text)?;
            }
        }
    }

    writer.flush()
}

/// Serialize with four-space indentation
pub fn to_json<T: Serialize>(data: &T) -> io::Result<String> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    data.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Trait for types that can be displayed as plaintext
pub trait TextDisplay {
    /// Format as text, without a trailing newline
    fn to_text(&self) -> String;
}

impl TextDisplay for StatusReport {
    fn to_text(&self) -> String {
        let width = self
            .categories()
            .map(|(code, _)| code.label().len())
            .max()
            .unwrap_or(0);

        self.categories()
            .map(|(code, files)| {
                let label = format!("{}:", code.label());
                let files = files
                    .iter()
                    .map(|f| quote(f))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{:<pad$} {}", label, files, pad = width + 1)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn quote(path: &str) -> String {
    serde_json::to_string(path).unwrap_or_else(|_| format!("\"{}\"", path))
}
