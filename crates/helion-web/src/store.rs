// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Helion.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use helion_types::Sample;

use crate::demo;

/// Errors while loading the sample mock
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read sample file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse sample file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// In-memory, read-only collection of samples ordered by timestamp.
///
/// All aggregation works off slices of this store; the core never touches
/// files itself.
#[derive(Debug, Clone)]
pub struct SampleStore {
    samples: Vec<Sample>,
}

impl SampleStore {
    /// Load the JSON mock file (an array of wire-format sample records)
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let samples: Vec<Sample> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        info!(count = samples.len(), path = %path.display(), "sample store loaded");
        Ok(Self::from_samples(samples))
    }

    /// Build a store from already-loaded samples (sorted on the way in)
    #[must_use]
    pub fn from_samples(mut samples: Vec<Sample>) -> Self {
        samples.sort_by_key(|s| s.timestamp);
        Self { samples }
    }

    /// The built-in deterministic demo week, for running without a mock file
    #[must_use]
    pub fn demo() -> Self {
        Self::from_samples(demo::demo_week(demo::demo_week_start()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Every sample, in timestamp order
    #[must_use]
    pub fn all(&self) -> &[Sample] {
        &self.samples
    }

    /// Distinct calendar dates present, in order
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = Vec::new();
        for sample in &self.samples {
            if dates.last() != Some(&sample.date()) {
                dates.push(sample.date());
            }
        }
        dates
    }

    /// The contiguous run of samples belonging to one calendar date
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> &[Sample] {
        let start = self.samples.partition_point(|s| s.date() < date);
        let end = self.samples.partition_point(|s| s.date() <= date);
        &self.samples[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_demo_store_holds_a_full_week() {
        let store = SampleStore::demo();
        assert_eq!(store.len(), 7 * 24);
        assert_eq!(store.dates().len(), 7);
        assert_eq!(store.day(demo::demo_week_start()).len(), 24);
    }

    #[test]
    fn test_day_lookup_misses_cleanly() {
        let store = SampleStore::demo();
        let outside = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
        assert!(store.day(outside).is_empty());
    }

    #[test]
    fn test_json_file_round_trip() {
        let samples = demo::demo_week(demo::demo_week_start());
        let json = serde_json::to_string(&samples).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let store = SampleStore::from_json_file(file.path()).unwrap();
        assert_eq!(store.len(), samples.len());
        assert_eq!(store.all().first(), samples.first());
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let result = SampleStore::from_json_file(Path::new("/nonexistent/mock.json"));
        assert!(matches!(result, Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        let result = SampleStore::from_json_file(file.path());
        assert!(matches!(result, Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_samples_are_sorted_on_load() {
        let mut samples = demo::demo_week(demo::demo_week_start());
        samples.reverse();
        let store = SampleStore::from_samples(samples);
        let timestamps: Vec<_> = store.all().iter().map(|s| s.timestamp).collect();
        let mut sorted = timestamps.clone();
        sorted.sort();
        assert_eq!(timestamps, sorted);
    }
}
