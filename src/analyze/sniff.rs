//! Delimiter/dialect sniffing and column typing
//!
//! The selection strategy scores candidate (delimiter, dialect) pairs by
//! table uniformity: the first pair whose sampled records all carry the
//! same field count claims the parse. Header detection follows afterwards
//! by checking whether the first record fits the types inferred from the
//! remaining records.

use serde::{Deserialize, Serialize};

use super::cell::{CellType, guess_cell};
use super::dialect::{Quoting, ReaderDialect};
use super::error::AnalyzeError;

/// Maximum number of records sampled per candidate combination
const SAMPLE_RECORDS: usize = 100;

/// Declared text encoding of the analyzed content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextEncoding {
    /// Strict UTF-8; invalid sequences are an error
    #[default]
    Utf8,
    /// UTF-8 with invalid sequences replaced
    Utf8Lossy,
    /// ISO 8859-1, decoded byte-for-byte
    Latin1,
}

impl TextEncoding {
    fn decode(self, content: &[u8]) -> Result<String, AnalyzeError> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(content.to_vec())
                .map_err(|e| AnalyzeError::Encoding(e.to_string())),
            TextEncoding::Utf8Lossy => Ok(String::from_utf8_lossy(content).into_owned()),
            TextEncoding::Latin1 => Ok(content.iter().map(|&b| b as char).collect()),
        }
    }
}

/// Guessed name and type tag for one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnGuess {
    /// Column name (header cell or synthesized `field_N`)
    pub name: String,
    /// Free-form type tag (e.g. "string", "integer")
    pub type_tag: String,
}

/// Result of a successful analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Delimiter that claimed the parse
    pub delimiter: u8,
    /// Name of the dialect that claimed the parse
    pub dialect: String,
    /// Ordered column guesses
    pub columns: Vec<ColumnGuess>,
}

/// Analyze delimited content
///
/// Probes every candidate delimiter against every dialect, in order, and
/// returns the first combination that yields a uniform table. A
/// single-column table is accepted only when the delimiter never occurs
/// in the content, so a wrong separator cannot silently collapse a file
/// into one column.
pub fn analyze(
    content: &[u8],
    encoding: TextEncoding,
    dialects: &[ReaderDialect],
    delimiter_candidates: &[u8],
) -> Result<Analysis, AnalyzeError> {
    let text = encoding.decode(content)?;
    if text.trim().is_empty() {
        return Err(AnalyzeError::EmptySource);
    }

    let mut probed = 0;
    for &delimiter in delimiter_candidates {
        for dialect in dialects {
            probed += 1;
            let records = sample_records(&text, delimiter, dialect)?;
            if let Some(width) = uniform_width(&records) {
                if width == 1 && text.contains(delimiter as char) {
                    continue;
                }
                tracing::debug!(
                    delimiter = %(delimiter as char),
                    dialect = %dialect.name,
                    records = records.len(),
                    width,
                    "dialect claimed the parse"
                );
                return Ok(Analysis {
                    delimiter,
                    dialect: dialect.name.clone(),
                    columns: guess_columns(&records, width),
                });
            }
        }
    }

    Err(AnalyzeError::NoDialectMatch { candidates: probed })
}

/// Parse up to [`SAMPLE_RECORDS`] records with the given convention
fn sample_records(
    text: &str,
    delimiter: u8,
    dialect: &ReaderDialect,
) -> Result<Vec<Vec<String>>, AnalyzeError> {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true);
    match dialect.quoting {
        Quoting::Quoted(quote) => {
            builder.quoting(true).quote(quote);
        }
        Quoting::None => {
            builder.quoting(false);
        }
    }

    let mut records = Vec::new();
    for record in builder.from_reader(text.as_bytes()).records() {
        let record = record?;
        records.push(record.iter().map(|cell| cell.to_string()).collect());
        if records.len() >= SAMPLE_RECORDS {
            break;
        }
    }
    Ok(records)
}

/// Field count shared by every sampled record, if any
fn uniform_width(records: &[Vec<String>]) -> Option<usize> {
    let first = records.first()?;
    let width = first.len();
    if records.iter().all(|r| r.len() == width) {
        Some(width)
    } else {
        None
    }
}

/// Derive column names and type tags from a uniform sample
///
/// The first record supplies names when it does not fit the types the
/// remaining records infer; otherwise names are synthesized.
fn guess_columns(records: &[Vec<String>], width: usize) -> Vec<ColumnGuess> {
    let has_header = records.len() > 1 && header_mismatch(records, width);
    let data = if has_header { &records[1..] } else { records };

    (0..width)
        .map(|col| {
            let name = if has_header {
                normalize_name(&records[0][col], col)
            } else {
                format!("field_{}", col + 1)
            };
            ColumnGuess {
                name,
                type_tag: column_type(data, col).tag().to_string(),
            }
        })
        .collect()
}

/// True when some first-record cell cannot widen into the type the data
/// rows agree on
fn header_mismatch(records: &[Vec<String>], width: usize) -> bool {
    (0..width).any(|col| {
        let data_type = column_type(&records[1..], col);
        if data_type == CellType::Text {
            return false;
        }
        match guess_cell(&records[0][col]) {
            Some(first) => first.merge_with(data_type) == CellType::Text,
            None => false,
        }
    })
}

/// Merge the guessed types of every non-empty cell in a column
fn column_type(records: &[Vec<String>], col: usize) -> CellType {
    let mut merged: Option<CellType> = None;
    for record in records {
        if let Some(guess) = record.get(col).and_then(|cell| guess_cell(cell)) {
            merged = Some(match merged {
                Some(t) => t.merge_with(guess),
                None => guess,
            });
        }
    }
    merged.unwrap_or(CellType::Text)
}

/// Trim a header cell and replace inner whitespace with underscores
fn normalize_name(cell: &str, col: usize) -> String {
    let name: String = cell
        .trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    if name.is_empty() {
        format!("field_{}", col + 1)
    } else {
        name
    }
}
