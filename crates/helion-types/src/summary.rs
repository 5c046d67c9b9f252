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

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Aggregates for a single day of samples. Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Energy produced over the day (kWh)
    pub day_energy_kwh: f64,
    /// Highest instantaneous production seen (kW)
    pub peak_power_kw: f64,
    /// Timestamp of the production peak (absent when the day had no samples
    /// with a production reading)
    pub peak_time: Option<NaiveDateTime>,
    /// Battery state of charge at the first sample (0-100%)
    pub soc_start_percent: f64,
    /// Battery state of charge at the last sample (0-100%)
    pub soc_end_percent: f64,
}

impl DaySummary {
    /// Net change in battery state of charge over the day, in points
    #[must_use]
    pub fn soc_swing_points(&self) -> f64 {
        self.soc_end_percent - self.soc_start_percent
    }
}

/// Date and generation of a week's best or worst day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayExtreme {
    pub date: NaiveDate,
    pub generation_kwh: f64,
}

/// Aggregates for up to seven calendar days of samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    pub total_generation_kwh: f64,
    pub total_consumption_kwh: f64,
    /// Generation as a percentage of consumption (0 when nothing was consumed)
    pub self_sufficiency_percent: f64,
    pub best_day: DayExtreme,
    pub worst_day: DayExtreme,
    /// Mean count per day of hours where production exceeded consumption
    pub avg_surplus_hours_per_day: f64,
    /// Distinct calendar days present in the input
    pub days_analyzed: usize,
}

/// A summary of either granularity, for callers that render reports
/// without caring which one they hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    Day(DaySummary),
    Week(WeekSummary),
}
