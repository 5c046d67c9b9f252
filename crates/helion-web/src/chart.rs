// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Helion.

//! Chart series payloads. Data only; rendering belongs to the front end.

use serde::{Deserialize, Serialize};

use helion_types::Sample;

use crate::store::SampleStore;

/// Hourly series for one day's chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayChartData {
    /// Time-of-day labels ("08:00")
    pub labels: Vec<String>,
    pub production_kw: Vec<f64>,
    pub consumption_kw: Vec<f64>,
    pub cumulative_production_kwh: Vec<Option<f64>>,
}

impl DayChartData {
    #[must_use]
    pub fn from_samples(samples: &[Sample]) -> Self {
        Self {
            labels: samples
                .iter()
                .map(|s| s.timestamp.format("%H:%M").to_string())
                .collect(),
            production_kw: samples.iter().map(|s| s.production_kw).collect(),
            consumption_kw: samples.iter().map(|s| s.consumption_kw).collect(),
            cumulative_production_kwh: samples
                .iter()
                .map(|s| s.cumulative_production_kwh)
                .collect(),
        }
    }
}

/// Per-day bars for the weekly chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekChartData {
    /// Day labels ("01/09")
    pub labels: Vec<String>,
    pub generation_kwh: Vec<f64>,
    pub consumption_kwh: Vec<f64>,
    pub surplus_hours: Vec<u32>,
}

impl WeekChartData {
    #[must_use]
    pub fn from_store(store: &SampleStore) -> Self {
        let mut labels = Vec::new();
        let mut generation_kwh = Vec::new();
        let mut consumption_kwh = Vec::new();
        let mut surplus_hours = Vec::new();

        for date in store.dates() {
            let samples = store.day(date);
            labels.push(date.format("%d/%m").to_string());
            generation_kwh.push(
                samples
                    .iter()
                    .filter_map(|s| s.cumulative_production_kwh)
                    .fold(0.0, f64::max),
            );
            consumption_kwh.push(
                samples
                    .iter()
                    .filter_map(|s| s.cumulative_consumption_kwh)
                    .fold(0.0, f64::max),
            );
            #[expect(
                clippy::cast_possible_truncation,
                reason = "a day holds at most 24 surplus hours"
            )]
            let surplus = samples.iter().filter(|s| s.is_surplus()).count() as u32;
            surplus_hours.push(surplus);
        }

        Self {
            labels,
            generation_kwh,
            consumption_kwh,
            surplus_hours,
        }
    }
}
