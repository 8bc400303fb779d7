//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use rejoin_engine::DocumentReport;
use std::io::Write;
use std::path::Path;

/// Plain text formatter - outputs one reassembled document per line
///
/// Documents without text (failures under the report policy) produce no line.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, _source: &Path, report: &DocumentReport) -> Result<()> {
        if let Some(text) = &report.text {
            writeln!(self.writer, "{text}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rejoin_engine::DocumentStatus;

    fn report(text: Option<&str>, status: DocumentStatus) -> DocumentReport {
        DocumentReport {
            number: 1,
            status,
            fragments_in: 2,
            fragments_out: 1,
            merges: 1,
            text: text.map(str::to_string),
            error: None,
        }
    }

    #[test]
    fn test_text_keeps_whitespace() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .format_report(Path::new("a.txt"), &report(Some("lame saint! "), DocumentStatus::Done))
            .unwrap();
        formatter
            .format_report(Path::new("a.txt"), &report(None, DocumentStatus::Failed))
            .unwrap();
        formatter
            .format_report(Path::new("a.txt"), &report(Some("abcxyz"), DocumentStatus::Stalled))
            .unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(out, "lame saint! \nabcxyz\n");
    }
}
