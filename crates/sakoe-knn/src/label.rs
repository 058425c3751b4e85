use std::fmt;

use crate::error::KnnError;

/// An opaque class label. Compared by equality; ordering only fixes report layout.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassLabel(String);

impl ClassLabel {
    /// Create a label from a non-empty token.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::EmptyLabel`] if `label` is empty.
    pub fn new(label: impl Into<String>) -> Result<Self, KnnError> {
        let label = label.into();
        if label.is_empty() {
            return Err(KnnError::EmptyLabel);
        }
        Ok(Self(label))
    }

    /// Return the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
