#![forbid(unsafe_code)]

//! Save/restore of the selection across host lifecycle events.
//!
//! The persisted record holds the four normalized fields and nothing else.
//! It is restored verbatim: if the host changed the absolute bounds in the
//! meantime, re-applying them is the host's job.
//!
//! With the `state-persistence` feature the record derives serde traits and
//! gains JSON helpers.

#[cfg(feature = "state-persistence")]
use thiserror::Error;

use crate::range::{CommittedRange, NormalizedRange};

/// Persistable selection state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct RangePersistState {
    /// Live MIN position (fraction of the padded track).
    pub normalized_min: f64,
    /// Live MAX position.
    pub normalized_max: f64,
    /// Committed MIN position (fraction of the time track).
    pub normalized_min_time: f64,
    /// Committed MAX position.
    pub normalized_max_time: f64,
}

impl Default for RangePersistState {
    fn default() -> Self {
        Self::from_ranges(NormalizedRange::default(), CommittedRange::default())
    }
}

impl RangePersistState {
    #[must_use]
    pub fn from_ranges(normalized: NormalizedRange, committed: CommittedRange) -> Self {
        Self {
            normalized_min: normalized.min,
            normalized_max: normalized.max,
            normalized_min_time: committed.min,
            normalized_max_time: committed.max,
        }
    }

    #[must_use]
    pub fn normalized(&self) -> NormalizedRange {
        NormalizedRange {
            min: self.normalized_min,
            max: self.normalized_max,
        }
    }

    #[must_use]
    pub fn committed(&self) -> CommittedRange {
        CommittedRange {
            min: self.normalized_min_time,
            max: self.normalized_max_time,
        }
    }
}

/// Failure encoding or decoding a persisted record.
#[cfg(feature = "state-persistence")]
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(feature = "state-persistence")]
impl RangePersistState {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_full_selection() {
        let state = RangePersistState::default();
        assert_eq!(state.normalized(), NormalizedRange { min: 0.0, max: 1.0 });
        assert_eq!(state.committed(), CommittedRange { min: 0.0, max: 1.0 });
    }

    #[test]
    fn splits_back_into_ranges() {
        let state = RangePersistState::from_ranges(
            NormalizedRange { min: 0.1, max: 0.8 },
            CommittedRange {
                min: 0.11,
                max: 0.79,
            },
        );
        assert_eq!(state.normalized_min_time, 0.11);
        assert_eq!(state.normalized().max, 0.8);
        assert_eq!(state.committed().max, 0.79);
    }

    #[cfg(feature = "state-persistence")]
    #[test]
    fn json_uses_field_names() {
        let json = RangePersistState::default().to_json().unwrap();
        assert!(json.contains("\"normalized_min_time\":0.0"));
        assert!(RangePersistState::from_json("{\"normalized_min\":1}").is_err());
    }
}
