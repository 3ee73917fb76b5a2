//! Stop configuration.
//!
//! A deployment at a different stop provisions its table from a JSON
//! document instead of the built-in one. The recognized shape:
//!
//! ```json
//! {
//!   "stop_identifier": "STIF:StopPoint:Q:28607:",
//!   "mappings": [
//!     { "reference": "STIF:Line::C01215:", "label": "195" },
//!     { "reference": "STIF:Line::C01314:", "label": "388" }
//!   ]
//! }
//! ```
//!
//! Loading happens once at startup; the resulting table is fixed for the
//! process lifetime.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{InvalidStopPointRef, LineLabel, LineRef, StopPointRef};
use crate::mappings::{LineMappings, MappingEntry};

/// Errors from loading or validating a stop configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config document is not valid JSON or has the wrong shape.
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The stop identifier failed validation.
    #[error(transparent)]
    StopIdentifier(#[from] InvalidStopPointRef),

    /// A mapping entry failed validation.
    #[error("mapping entry {index}: {reason}")]
    Entry { index: usize, reason: &'static str },
}

/// One configured mapping, as it appears in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Upstream line reference (exact-match key).
    pub reference: String,

    /// Label to show for that line.
    pub label: String,
}

/// The full configuration document for one stop.
///
/// Field values are raw strings here; [`into_mappings`](Self::into_mappings)
/// validates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopConfig {
    /// The stop the table is scoped to.
    pub stop_identifier: String,

    /// Mapping entries, in display-priority order.
    pub mappings: Vec<MappingConfig>,
}

impl StopConfig {
    /// Parse a configuration document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        debug!(
            path = %path.display(),
            entries = config.mappings.len(),
            "loaded stop configuration"
        );
        Ok(config)
    }

    /// Validate the document and convert it into a mapping table.
    ///
    /// Entry order is preserved, so duplicate references keep the
    /// first-listed-wins behavior of the table. Empty stop identifiers,
    /// references, or labels are rejected with the offending entry's index.
    pub fn into_mappings(self) -> Result<LineMappings, ConfigError> {
        let stop_point = StopPointRef::new(self.stop_identifier)?;

        let mut entries = Vec::with_capacity(self.mappings.len());
        for (index, mapping) in self.mappings.into_iter().enumerate() {
            let reference =
                LineRef::new(mapping.reference).map_err(|_| ConfigError::Entry {
                    index,
                    reason: "reference must be non-empty",
                })?;
            let label = LineLabel::new(mapping.label).map_err(|_| ConfigError::Entry {
                index,
                reason: "label must be non-empty",
            })?;
            entries.push(MappingEntry::new(reference, label));
        }

        Ok(LineMappings::new(stop_point, entries))
    }
}
