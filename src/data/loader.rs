use std::fmt;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, EUC_KR, UTF_8};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Source descriptor
// ---------------------------------------------------------------------------

/// Where the CSV bytes come from: a remote HTTP(S) location or a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// Classify a user-entered string. Anything starting with `http://` or
    /// `https://` is a URL; everything else is treated as a file path.
    pub fn from_input(input: &str) -> DataSource {
        let trimmed = input.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(u) => write!(f, "{u}"),
            DataSource::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Text encoding of the source bytes. KBO stat exports are sometimes served
/// in the legacy Korean encoding rather than UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    EucKr,
}

impl TextEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::EucKr => "EUC-KR",
        }
    }

    fn encoding(&self) -> &'static Encoding {
        match self {
            TextEncoding::Utf8 => UTF_8,
            TextEncoding::EucKr => EUC_KR,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum LoadError {
    /// Network failure, non-success HTTP status, or unreadable file.
    #[error("could not read {source_desc}: {reason}")]
    SourceUnavailable { source_desc: String, reason: String },

    /// Malformed CSV text (e.g. ragged rows).
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Raw table – parsed rows keyed by header position
// ---------------------------------------------------------------------------

/// The parsed but unvalidated table: a header row plus string cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Fetch the source bytes, decode them, and parse the CSV into a [`RawTable`].
///
/// The whole load is fatal-or-complete: any failure yields an error and no
/// partial table.
pub fn load_table(source: &DataSource, encoding: TextEncoding) -> Result<RawTable, LoadError> {
    let bytes = match source {
        DataSource::Url(url) => fetch_url(url)?,
        DataSource::File(path) => read_file(path)?,
    };
    let (text, _, _) = encoding.encoding().decode(&bytes);
    parse_csv(&text)
}

fn fetch_url(url: &str) -> Result<Vec<u8>, LoadError> {
    let unavailable = |reason: String| LoadError::SourceUnavailable {
        source_desc: url.to_string(),
        reason,
    };

    let response = reqwest::blocking::get(url)
        .map_err(|e| unavailable(e.to_string()))?
        .error_for_status()
        .map_err(|e| unavailable(e.to_string()))?;

    let bytes = response.bytes().map_err(|e| unavailable(e.to_string()))?;
    Ok(bytes.to_vec())
}

fn read_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    std::fs::read(path).map_err(|e| LoadError::SourceUnavailable {
        source_desc: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn parse_csv(text: &str) -> Result<RawTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_classification() {
        assert_eq!(
            DataSource::from_input("https://example.com/stats.csv"),
            DataSource::Url("https://example.com/stats.csv".to_string())
        );
        assert_eq!(
            DataSource::from_input("  http://example.com/a.csv "),
            DataSource::Url("http://example.com/a.csv".to_string())
        );
        assert_eq!(
            DataSource::from_input("data/batting.csv"),
            DataSource::File(PathBuf::from("data/batting.csv"))
        );
    }

    #[test]
    fn parses_header_and_rows() {
        let table = parse_csv("Name,AVG,HR\nKim,0.310,25\nLee,0.280,9\n").unwrap();
        assert_eq!(table.headers, vec!["Name", "AVG", "HR"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["Kim", "0.310", "25"]);
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let err = parse_csv("Name,AVG\nKim,0.310,25\n").unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let source = DataSource::File(PathBuf::from("/nonexistent/batting.csv"));
        let err = load_table(&source, TextEncoding::Utf8).unwrap_err();
        assert!(matches!(err, LoadError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("/nonexistent/batting.csv"));
    }

    #[test]
    fn euc_kr_bytes_decode() {
        // "기아" encoded as EUC-KR.
        let mut bytes = b"Name,AVG\n".to_vec();
        bytes.extend_from_slice(&[0xB1, 0xE2, 0xBE, 0xC6]);
        bytes.extend_from_slice(b",0.300\n");
        let (text, _, _) = TextEncoding::EucKr.encoding().decode(&bytes);
        let table = parse_csv(&text).unwrap();
        assert_eq!(table.rows[0][0], "기아");
    }
}
