//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use rejoin_engine::DocumentReport;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// JSON formatter - outputs document reports as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<ReportRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportRecord {
    /// File the document was read from
    pub file: String,
    /// The document report
    #[serde(flatten)]
    pub report: DocumentReport,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: &Path, report: &DocumentReport) -> Result<()> {
        self.records.push(ReportRecord {
            file: source.display().to_string(),
            report: report.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rejoin_engine::DocumentStatus;

    #[test]
    fn test_json_records() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        let report = DocumentReport {
            number: 2,
            status: DocumentStatus::Done,
            fragments_in: 4,
            fragments_out: 1,
            merges: 3,
            text: Some("O draconian devil! Oh lame saint! ".to_string()),
            error: None,
        };
        formatter
            .format_report(Path::new("short.txt"), &report)
            .unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["file"], "short.txt");
        assert_eq!(value[0]["number"], 2);
        assert_eq!(value[0]["status"], "done");
        assert_eq!(value[0]["merges"], 3);
        assert!(!out.trim_end().contains('\n'));
    }

    #[test]
    fn test_empty_batch_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.into_inner()).unwrap(), "[]\n");
    }
}
