//! Corpus loading and evaluation reports for sakoe.
//!
//! A corpus file holds one series per line: a class label followed by
//! whitespace-separated real numbers.

mod domain;
mod error;
mod parse;
mod reader;
mod writer;

pub use domain::{Corpus, ExperimentName};
pub use error::{IoError, ParseError};
pub use parse::parse_line;
pub use reader::CorpusReader;
pub use writer::{ReportWriter, RunSummary};
