//! Line reference mapping for a single stop.
//!
//! The real-time feed identifies lines by opaque provider references;
//! the display shows short route numbers. This module provides the lookup
//! from one to the other, for the fixed set of lines serving the stop the
//! display is installed at.

use tracing::debug;

use crate::domain::{LineLabel, LineRef, StopPointRef};

/// Label shown for a line reference with no configured mapping.
///
/// The display renders this placeholder instead of failing: an unknown
/// line still has arrival times worth showing.
pub const UNKNOWN_LABEL: &str = "XXX";

/// One configured (reference, label) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    reference: LineRef,
    label: LineLabel,
}

impl MappingEntry {
    /// Create a new mapping entry.
    pub fn new(reference: LineRef, label: LineLabel) -> Self {
        Self { reference, label }
    }

    /// The upstream reference this entry matches.
    pub fn reference(&self) -> &LineRef {
        &self.reference
    }

    /// The label shown for this entry.
    pub fn label(&self) -> &LineLabel {
        &self.label
    }
}

/// The mapping table for one stop.
///
/// Entries are kept in insertion order and the table is never mutated after
/// construction, so lookups are safe to share across threads without
/// locking. Duplicate references are allowed; the earliest entry wins.
///
/// # Examples
///
/// ```
/// use stop_lines::domain::StopPointRef;
/// use stop_lines::mappings::{LineMappingsBuilder, UNKNOWN_LABEL};
///
/// let stop = StopPointRef::new("STIF:StopPoint:Q:28607:".to_string()).unwrap();
/// let mappings = LineMappingsBuilder::new(stop)
///     .add("STIF:Line::C01215:", "195")
///     .add("STIF:Line::C01314:", "388")
///     .build();
///
/// assert_eq!(mappings.resolve("STIF:Line::C01215:"), "195");
/// assert_eq!(mappings.resolve("STIF:Line::C09999:"), UNKNOWN_LABEL);
/// ```
#[derive(Debug, Clone)]
pub struct LineMappings {
    stop_point: StopPointRef,
    entries: Vec<MappingEntry>,
}

impl LineMappings {
    /// Create a mapping table from already-validated entries.
    ///
    /// Entry order is preserved; it determines which entry wins when
    /// references are duplicated.
    pub fn new(stop_point: StopPointRef, entries: Vec<MappingEntry>) -> Self {
        Self {
            stop_point,
            entries,
        }
    }

    /// The stop this table is scoped to.
    ///
    /// Contextual metadata for the caller (it names the feed to poll);
    /// resolution never consults it.
    pub fn stop_point(&self) -> &StopPointRef {
        &self.stop_point
    }

    /// The configured entries, in insertion order.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Returns the number of configured entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the label for an upstream line reference.
    ///
    /// Comparison is exact and case-sensitive. Entries are scanned in
    /// insertion order and the first match wins. Returns `None` for an
    /// unknown reference.
    pub fn lookup(&self, reference: &str) -> Option<&LineLabel> {
        self.entries
            .iter()
            .find(|entry| entry.reference.as_str() == reference)
            .map(|entry| &entry.label)
    }

    /// Resolve an upstream line reference to a display label.
    ///
    /// Returns [`UNKNOWN_LABEL`] when no entry matches. An unknown
    /// reference is a defined outcome, not an error: any input, including
    /// the empty string, yields a label.
    pub fn resolve(&self, reference: &str) -> &str {
        match self.lookup(reference) {
            Some(label) => label.as_str(),
            None => {
                debug!(reference, "no label configured for line reference");
                UNKNOWN_LABEL
            }
        }
    }
}

/// Builder for a mapping table.
///
/// Mirrors how the table reads in configuration: one stop, then the entries
/// in display-priority order.
#[derive(Debug)]
pub struct LineMappingsBuilder {
    stop_point: StopPointRef,
    entries: Vec<MappingEntry>,
}

impl LineMappingsBuilder {
    /// Create a builder for the given stop.
    pub fn new(stop_point: StopPointRef) -> Self {
        Self {
            stop_point,
            entries: Vec::new(),
        }
    }

    /// Add a mapping entry.
    ///
    /// Pairs with an empty reference or label are skipped.
    pub fn add(mut self, reference: &str, label: &str) -> Self {
        if let (Ok(reference), Ok(label)) = (
            LineRef::new(reference.to_string()),
            LineLabel::new(label.to_string()),
        ) {
            self.entries.push(MappingEntry::new(reference, label));
        }
        self
    }

    /// Build the mapping table.
    pub fn build(self) -> LineMappings {
        LineMappings::new(self.stop_point, self.entries)
    }
}

/// The built-in table for the stop this device is installed at.
///
/// Stop `Q:28607` in the Île-de-France (PRIM) network, served by bus lines
/// 195 and 388. Deployments at another stop provision their table through
/// [`config`](crate::config) instead of editing this list.
pub fn default_mappings() -> LineMappings {
    let stop = StopPointRef::new("STIF:StopPoint:Q:28607:".to_string())
        .expect("built-in stop reference is non-empty");

    LineMappingsBuilder::new(stop)
        .add("STIF:Line::C01215:", "195")
        .add("STIF:Line::C01314:", "388")
        .build()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for a non-empty reference-ish string.
    fn ref_string() -> impl Strategy<Value = String> {
        "[A-Za-z0-9:._-]{1,24}"
    }

    /// Strategy for a small table: a list of (reference, label) pairs.
    fn table_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
        proptest::collection::vec((ref_string(), "[0-9A-Z]{1,6}"), 0..8)
    }

    fn build(pairs: &[(String, String)]) -> LineMappings {
        let stop = StopPointRef::new("STIF:StopPoint:Q:28607:".to_string()).unwrap();
        pairs
            .iter()
            .fold(LineMappingsBuilder::new(stop), |b, (r, l)| b.add(r, l))
            .build()
    }

    proptest! {
        /// A configured reference resolves to the label of the earliest
        /// entry carrying that reference, however the table is shuffled.
        #[test]
        fn configured_reference_resolves_to_earliest_label(
            pairs in table_pairs(),
            index in 0usize..8,
        ) {
            prop_assume!(!pairs.is_empty());
            let index = index % pairs.len();
            let mappings = build(&pairs);

            let query = pairs[index].0.as_str();
            let expected = pairs
                .iter()
                .find(|(r, _)| r == query)
                .map(|(_, l)| l.as_str())
                .unwrap();

            prop_assert_eq!(mappings.resolve(query), expected);
        }

        /// A reference absent from the table always resolves to the sentinel
        #[test]
        fn absent_reference_resolves_to_sentinel(
            pairs in table_pairs(),
            query in ref_string(),
        ) {
            prop_assume!(pairs.iter().all(|(r, _)| r != &query));
            let mappings = build(&pairs);
            prop_assert_eq!(mappings.resolve(&query), UNKNOWN_LABEL);
        }

        /// Resolution never returns an empty label
        #[test]
        fn resolved_label_never_empty(
            pairs in table_pairs(),
            query in ref_string(),
        ) {
            let mappings = build(&pairs);
            prop_assert!(!mappings.resolve(&query).is_empty());
        }

        /// Resolution is a pure function: same input, same output
        #[test]
        fn resolve_is_deterministic(
            pairs in table_pairs(),
            query in ref_string(),
        ) {
            let mappings = build(&pairs);
            let first = mappings.resolve(&query).to_string();
            let second = mappings.resolve(&query).to_string();
            prop_assert_eq!(first, second);
        }
    }
}
