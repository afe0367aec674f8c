//! Delimited-text analysis
//!
//! Given raw file content, a declared text encoding, an ordered set of
//! reader dialects and a list of candidate delimiters, determine which
//! delimiter and dialect the content was written with and guess a name
//! and type tag for every column.
//!
//! ## Example
//!
//! ```rust,ignore
//! use collection_manager_sdk::analyze::{analyze, ReaderDialect, TextEncoding};
//!
//! let analysis = analyze(
//!     b"a,b\n1,2\n",
//!     TextEncoding::Utf8,
//!     &ReaderDialect::defaults(),
//!     &[b','],
//! )?;
//! assert_eq!(analysis.delimiter, b',');
//! assert_eq!(analysis.columns.len(), 2);
//! ```

mod cell;
mod dialect;
mod error;
mod sniff;

pub use cell::{CellType, guess_cell};
pub use dialect::{Quoting, ReaderDialect};
pub use error::AnalyzeError;
pub use sniff::{Analysis, ColumnGuess, TextEncoding, analyze};
