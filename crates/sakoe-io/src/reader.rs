//! Whitespace-separated corpus reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use sakoe_knn::Dimensionality;
use tracing::{debug, info, instrument};

use crate::domain::Corpus;
use crate::parse::parse_line;
use crate::IoError;

/// Reads a labeled time series corpus from a text file.
///
/// Expected format:
/// - One series per line: `<label> <v1> <v2> ... <vk>`
/// - Tokens separated by any whitespace
/// - Blank lines are skipped
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::Read`] | A line cannot be read (e.g. invalid UTF-8) |
/// | [`IoError::Parse`] | A line is malformed |
pub struct CorpusReader {
    path: PathBuf,
    dimensionality: Dimensionality,
}

impl CorpusReader {
    /// Create a reader for the given file, parsing univariate series.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            dimensionality: Dimensionality::Univariate,
        }
    }

    /// Parse each line according to `dimensionality`.
    #[must_use]
    pub fn with_dimensionality(mut self, dimensionality: Dimensionality) -> Self {
        self.dimensionality = dimensionality;
        self
    }

    /// Read and validate the whole file, returning a [`Corpus`] in file order.
    ///
    /// An empty file yields an empty corpus.
    #[instrument(skip(self), fields(path = %self.path.display(), dimensionality = self.dimensionality.name()))]
    pub fn read(&self) -> Result<Corpus, IoError> {
        let file = File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;
        let corpus = self.read_from(BufReader::new(file))?;

        match corpus.length_range() {
            Some((shortest, longest)) => info!(
                n_series = corpus.len(),
                n_classes = corpus.class_counts().len(),
                shortest,
                longest,
                "corpus loaded"
            ),
            None => info!("corpus is empty"),
        }
        Ok(corpus)
    }

    /// Parse a corpus from any buffered source. Errors name this reader's path.
    pub fn read_from<R: BufRead>(&self, source: R) -> Result<Corpus, IoError> {
        let mut series = Vec::new();
        let mut skipped = 0usize;

        for (index, line) in source.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| IoError::Read {
                path: self.path.clone(),
                line: line_number,
                source: e,
            })?;
            if line.trim().is_empty() {
                skipped += 1;
                continue;
            }
            let sample =
                parse_line(&line, self.dimensionality).map_err(|e| IoError::Parse {
                    path: self.path.clone(),
                    line: line_number,
                    source: e,
                })?;
            series.push(sample);
        }

        if skipped > 0 {
            debug!(skipped, "skipped blank lines");
        }
        Ok(Corpus { series })
    }
}
