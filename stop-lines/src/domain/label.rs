//! Display label type.

use std::fmt;

/// Error returned when constructing an invalid line label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line label: {reason}")]
pub struct InvalidLineLabel {
    reason: &'static str,
}

/// A short human-readable label for a transit line, as shown on the display.
///
/// Labels are typically route numbers ("195", "388") but the provider's
/// naming is not enforced; anything non-empty that fits on the display is
/// acceptable. Non-emptiness matters because the display reserves the empty
/// slot rendering for "no data at all".
///
/// # Examples
///
/// ```
/// use stop_lines::domain::LineLabel;
///
/// let label = LineLabel::new("195".to_string()).unwrap();
/// assert_eq!(label.as_str(), "195");
///
/// assert!(LineLabel::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LineLabel(String);

impl LineLabel {
    /// Create a new label from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidLineLabel> {
        if s.is_empty() {
            return Err(InvalidLineLabel {
                reason: "line label cannot be empty",
            });
        }
        Ok(LineLabel(s))
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineLabel({})", self.0)
    }
}

impl fmt::Display for LineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
