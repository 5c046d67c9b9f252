// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Helion.

//! Reduction of ordered sample sequences into day and week summaries.
//!
//! Every function here is a pure transform: missing fields become zeroes or
//! placeholders, empty input becomes `None`, and nothing panics.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use helion_types::{DayExtreme, DaySummary, Sample, WeekSummary};

/// Battery telemetry is not wired into the sample feed yet; day summaries
/// carry these placeholders whenever a day has no SOC readings.
pub const PLACEHOLDER_SOC_START_PERCENT: f64 = 40.0;
pub const PLACEHOLDER_SOC_END_PERCENT: f64 = 85.0;

/// Summarize one day of samples.
///
/// `day_energy_kwh` is the last non-missing cumulative-production reading
/// (the counter is monotonic within a day, so the last reading is the day
/// total). The peak is the first sample holding the maximum instantaneous
/// production; a day that never produced has no peak time. Returns `None`
/// for an empty slice.
#[must_use]
pub fn summarize_day(samples: &[Sample]) -> Option<DaySummary> {
    let first = samples.first()?;
    let last = samples.last()?;

    let day_energy_kwh = samples
        .iter()
        .rev()
        .find_map(|s| s.cumulative_production_kwh)
        .unwrap_or(0.0);

    let mut peak: Option<&Sample> = None;
    for sample in samples {
        if peak.is_none_or(|p| sample.production_kw > p.production_kw) {
            peak = Some(sample);
        }
    }
    let peak_power_kw = peak.map_or(0.0, |p| p.production_kw);
    let peak_time = peak.filter(|p| p.production_kw > 0.0).map(|p| p.timestamp);

    let summary = DaySummary {
        day_energy_kwh,
        peak_power_kw,
        peak_time,
        soc_start_percent: first
            .battery_soc_percent
            .unwrap_or(PLACEHOLDER_SOC_START_PERCENT),
        soc_end_percent: last
            .battery_soc_percent
            .unwrap_or(PLACEHOLDER_SOC_END_PERCENT),
    };

    debug!(
        date = %first.date(),
        energy_kwh = summary.day_energy_kwh,
        peak_kw = summary.peak_power_kw,
        "day summarized"
    );

    Some(summary)
}

/// Per-day accumulator used while grouping a week of samples
#[derive(Debug, Default, Clone, Copy)]
struct DayAccumulator {
    generation_kwh: f64,
    consumption_kwh: f64,
    surplus_hours: u32,
}

/// Summarize up to a week of samples grouped by calendar date.
///
/// Per day, the maximum of each cumulative counter stands in for the
/// end-of-day total, and hours with production above consumption count as
/// surplus hours. Best/worst day ties resolve to the earliest date. Returns
/// `None` for an empty slice; a week without any consumption reports 0%
/// self-sufficiency instead of dividing by zero.
#[must_use]
pub fn summarize_week(samples: &[Sample]) -> Option<WeekSummary> {
    if samples.is_empty() {
        return None;
    }

    let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();
    for sample in samples {
        let acc = days.entry(sample.date()).or_default();
        if let Some(kwh) = sample.cumulative_production_kwh {
            acc.generation_kwh = acc.generation_kwh.max(kwh);
        }
        if let Some(kwh) = sample.cumulative_consumption_kwh {
            acc.consumption_kwh = acc.consumption_kwh.max(kwh);
        }
        if sample.is_surplus() {
            acc.surplus_hours += 1;
        }
    }

    let days_analyzed = days.len();
    let total_generation_kwh: f64 = days.values().map(|d| d.generation_kwh).sum();
    let total_consumption_kwh: f64 = days.values().map(|d| d.consumption_kwh).sum();

    let self_sufficiency_percent = if total_consumption_kwh > 0.0 {
        total_generation_kwh / total_consumption_kwh * 100.0
    } else {
        0.0
    };

    let mut best: Option<DayExtreme> = None;
    let mut worst: Option<DayExtreme> = None;
    for (date, acc) in &days {
        let candidate = DayExtreme {
            date: *date,
            generation_kwh: acc.generation_kwh,
        };
        if best.is_none_or(|b| candidate.generation_kwh > b.generation_kwh) {
            best = Some(candidate);
        }
        if worst.is_none_or(|w| candidate.generation_kwh < w.generation_kwh) {
            worst = Some(candidate);
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "day counts stay far below mantissa precision"
    )]
    let day_count = days_analyzed as f64;
    let avg_surplus_hours_per_day = days
        .values()
        .map(|d| f64::from(d.surplus_hours))
        .sum::<f64>()
        / day_count;

    debug!(
        days = days_analyzed,
        generation_kwh = total_generation_kwh,
        consumption_kwh = total_consumption_kwh,
        "week summarized"
    );

    Some(WeekSummary {
        total_generation_kwh,
        total_consumption_kwh,
        self_sufficiency_percent,
        best_day: best?,
        worst_day: worst?,
        avg_surplus_hours_per_day,
        days_analyzed,
    })
}
