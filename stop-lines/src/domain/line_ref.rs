//! Upstream line reference type.

use std::fmt;

/// Error returned when constructing an invalid line reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line reference: {reason}")]
pub struct InvalidLineRef {
    reason: &'static str,
}

/// An opaque line reference assigned by the upstream real-time provider.
///
/// References identify a bus/transit line in the provider's namespace
/// (e.g. `"STIF:Line::C01215:"` for a line in the Île-de-France network).
/// They are exact-match keys: the crate never parses or normalises them.
/// The only validation is that they must be non-empty.
///
/// # Examples
///
/// ```
/// use stop_lines::domain::LineRef;
///
/// let line = LineRef::new("STIF:Line::C01215:".to_string()).unwrap();
/// assert_eq!(line.as_str(), "STIF:Line::C01215:");
///
/// // Empty strings are rejected
/// assert!(LineRef::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LineRef(String);

impl LineRef {
    /// Create a new line reference from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidLineRef> {
        if s.is_empty() {
            return Err(InvalidLineRef {
                reason: "line reference cannot be empty",
            });
        }
        Ok(LineRef(s))
    }

    /// Returns the line reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the LineRef and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineRef({})", self.0)
    }
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_reference() {
        assert!(LineRef::new("STIF:Line::C01215:".to_string()).is_ok());
        assert!(LineRef::new("STIF:Line::C01314:".to_string()).is_ok());
        // References are opaque; any non-empty string is accepted
        assert!(LineRef::new("x".to_string()).is_ok());
        assert!(LineRef::new("not a STIF ref at all".to_string()).is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(LineRef::new("".to_string()).is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let line = LineRef::new("STIF:Line::C01215:".to_string()).unwrap();
        assert_eq!(line.as_str(), "STIF:Line::C01215:");
    }

    #[test]
    fn into_inner() {
        let line = LineRef::new("STIF:Line::C01314:".to_string()).unwrap();
        assert_eq!(line.into_inner(), "STIF:Line::C01314:".to_string());
    }

    #[test]
    fn display() {
        let line = LineRef::new("STIF:Line::C01215:".to_string()).unwrap();
        assert_eq!(format!("{}", line), "STIF:Line::C01215:");
    }

    #[test]
    fn debug() {
        let line = LineRef::new("STIF:Line::C01215:".to_string()).unwrap();
        assert_eq!(format!("{:?}", line), "LineRef(STIF:Line::C01215:)");
    }

    #[test]
    fn equality_is_case_sensitive() {
        let a = LineRef::new("STIF:Line::C01215:".to_string()).unwrap();
        let b = LineRef::new("STIF:Line::C01215:".to_string()).unwrap();
        let c = LineRef::new("stif:line::c01215:".to_string()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(LineRef::new("STIF:Line::C01215:".to_string()).unwrap());
        assert!(set.contains(&LineRef::new("STIF:Line::C01215:".to_string()).unwrap()));
        assert!(!set.contains(&LineRef::new("STIF:Line::C01314:".to_string()).unwrap()));
    }
}
