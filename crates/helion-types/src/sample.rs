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

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One hourly (or sub-hourly) plant observation.
///
/// Immutable once recorded. Within a day, timestamps are unique and samples
/// are ordered by timestamp. Cumulative counters reset at midnight and are
/// monotonic within the day; battery telemetry is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SampleRecord", into = "SampleRecord")]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    /// Instantaneous PV production (kW)
    pub production_kw: f64,
    /// Instantaneous household consumption (kW)
    pub consumption_kw: f64,
    /// Production counter since midnight (kWh)
    pub cumulative_production_kwh: Option<f64>,
    /// Consumption counter since midnight (kWh)
    pub cumulative_consumption_kwh: Option<f64>,
    /// Battery state of charge (0-100%)
    pub battery_soc_percent: Option<f64>,
}

impl Sample {
    /// Calendar date this sample belongs to
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// True when instantaneous production exceeds instantaneous consumption
    #[must_use]
    pub fn is_surplus(&self) -> bool {
        self.production_kw > self.consumption_kw
    }
}

/// Wire format of a sample in the JSON mock: a date string and a
/// time-of-day string instead of a combined timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub production_kw: f64,
    pub consumption_kw: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cumulative_production_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cumulative_consumption_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_soc_percent: Option<f64>,
}

impl From<SampleRecord> for Sample {
    fn from(record: SampleRecord) -> Self {
        Self {
            timestamp: NaiveDateTime::new(record.date, record.time),
            production_kw: record.production_kw,
            consumption_kw: record.consumption_kw,
            cumulative_production_kwh: record.cumulative_production_kwh,
            cumulative_consumption_kwh: record.cumulative_consumption_kwh,
            battery_soc_percent: record.battery_soc_percent,
        }
    }
}

impl From<Sample> for SampleRecord {
    fn from(sample: Sample) -> Self {
        Self {
            date: sample.timestamp.date(),
            time: sample.timestamp.time(),
            production_kw: sample.production_kw,
            consumption_kw: sample.consumption_kw,
            cumulative_production_kwh: sample.cumulative_production_kwh,
            cumulative_consumption_kwh: sample.cumulative_consumption_kwh,
            battery_soc_percent: sample.battery_soc_percent,
        }
    }
}
