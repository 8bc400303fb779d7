//! Input handling: raw sources, line validation and fragment splitting
//!
//! Every line of the input is one shredded document whose fragments are
//! separated by a single delimiter character. Lines are validated before any
//! reassembly starts, so the core never sees a malformed document.

use crate::error::{EngineError, Result};
use regex::Regex;
use rejoin_core::Fragment;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Raw input source
pub enum Input {
    /// Direct text string
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Bytes to decode as UTF-8 text
    Bytes(Vec<u8>),
    /// Reader stream (for stdin, pipes, etc.)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole input as UTF-8 text
    pub fn to_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path)
                .map_err(|e| EngineError::IoError(format!("Failed to read file {path:?}: {e}"))),
            Input::Bytes(bytes) => String::from_utf8(bytes)
                .map_err(|e| EngineError::EncodingError(format!("Invalid UTF-8: {e}"))),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    EngineError::IoError(format!("Failed to read from stream: {e}"))
                })?;
                String::from_utf8(buffer).map_err(|e| {
                    EngineError::EncodingError(format!("Invalid UTF-8 from stream: {e}"))
                })
            }
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

/// One shredded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// 1-based line number in the source
    pub number: usize,
    /// Fragments in input order
    pub fragments: Vec<Fragment>,
}

/// Delimiter structure checks for a single line
#[derive(Debug, Clone)]
pub struct LineValidator {
    delimiter: char,
    repeated: Regex,
    separated: Regex,
}

impl LineValidator {
    /// Build the checks for `delimiter`
    pub fn new(delimiter: char) -> Self {
        let escaped = regex::escape(&delimiter.to_string());
        // Both patterns are built from an escaped literal
        let repeated = Regex::new(&format!("(?:{escaped}){{2,}}"))
            .unwrap_or_else(|e| unreachable!("escaped delimiter pattern: {e}"));
        let separated = Regex::new(&format!(".(?:{escaped})."))
            .unwrap_or_else(|e| unreachable!("escaped delimiter pattern: {e}"));
        Self {
            delimiter,
            repeated,
            separated,
        }
    }

    /// Reject lines with a delimiter run or without two fragments
    pub fn validate(&self, line: &str, number: usize) -> Result<()> {
        if self.repeated.is_match(line) {
            return Err(EngineError::MalformedInput {
                line: number,
                reason: format!(
                    "found two or more consecutive '{}' delimiters",
                    self.delimiter
                ),
            });
        }
        if !self.separated.is_match(line) {
            return Err(EngineError::MalformedInput {
                line: number,
                reason: format!(
                    "expected at least two fragments separated by '{}'",
                    self.delimiter
                ),
            });
        }
        Ok(())
    }

    /// Validate and split a line into a document
    ///
    /// Empty fragments left by a trailing delimiter are dropped.
    pub fn parse(&self, line: &str, number: usize) -> Result<Document> {
        self.validate(line, number)?;

        let mut fragments: Vec<Fragment> = line.split(self.delimiter).map(Fragment::from).collect();
        while fragments.last().is_some_and(|f| f.is_empty()) {
            fragments.pop();
        }

        Ok(Document { number, fragments })
    }
}

/// Validate and split one line with `delimiter`
pub fn parse_line(line: &str, number: usize, delimiter: char) -> Result<Document> {
    LineValidator::new(delimiter).parse(line, number)
}

/// All documents of one input, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    documents: Vec<Document>,
}

impl DocumentSet {
    /// Parse text with one document per line
    ///
    /// The whole set is rejected on the first malformed line.
    pub fn parse(text: &str, delimiter: char) -> Result<Self> {
        Self::from_lines(text.lines(), delimiter)
    }

    /// Parse documents from an iterator of lines
    pub fn from_lines<'a, I>(lines: I, delimiter: char) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let validator = LineValidator::new(delimiter);
        let documents = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| validator.parse(line, index + 1))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { documents })
    }

    /// Documents in source order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when there are no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
