//! Stop point reference type.

use std::fmt;

/// Error returned when constructing an invalid stop point reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop point reference: {reason}")]
pub struct InvalidStopPointRef {
    reason: &'static str,
}

/// The provider's identifier for the physical stop the display serves.
///
/// A mapping table is scoped to exactly one stop; the caller uses this
/// reference to query the real-time feed. Resolution itself never consults
/// it. Like [`LineRef`](super::LineRef), it is opaque and only required to
/// be non-empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopPointRef(String);

impl StopPointRef {
    /// Create a new stop point reference from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidStopPointRef> {
        if s.is_empty() {
            return Err(InvalidStopPointRef {
                reason: "stop point reference cannot be empty",
            });
        }
        Ok(StopPointRef(s))
    }

    /// Returns the stop point reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopPointRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopPointRef({})", self.0)
    }
}

impl fmt::Display for StopPointRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
