// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Helion.

//! Deterministic demo week used when no mock file is configured.
//!
//! Same shape as the real mock: a parabolic solar arc peaking at 13 h,
//! scaled per day by a fixed factor table so the week has distinct best and
//! worst days, plus a piecewise consumption curve that is heavier in the
//! evening. Cumulative counters run within each day.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use helion_types::Sample;

/// Per-day scaling of the solar arc (cloudy vs. clear days)
const DAY_FACTORS: [f64; 7] = [1.0, 0.85, 0.6, 1.1, 0.95, 0.7, 1.05];

/// First date of the demo week
#[must_use]
pub fn demo_week_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).expect("static demo date is valid")
}

fn hourly_production_kw(hour: u32, factor: f64) -> f64 {
    if !(6..=18).contains(&hour) {
        return 0.0;
    }
    let offset = f64::from(hour) - 13.0;
    (-0.1 * offset * offset + 7.0).max(0.0) * factor
}

fn hourly_consumption_kw(hour: u32) -> f64 {
    if hour < 6 {
        1.5
    } else if hour < 18 {
        2.0
    } else {
        3.5
    }
}

/// Build seven days of hourly samples starting at `start`
#[must_use]
pub fn demo_week(start: NaiveDate) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(7 * 24);

    for (date, factor) in start.iter_days().zip(DAY_FACTORS) {
        let mut cumulative_production = 0.0;
        let mut cumulative_consumption = 0.0;

        for hour in 0u32..24 {
            let production_kw = hourly_production_kw(hour, factor);
            let consumption_kw = hourly_consumption_kw(hour);
            cumulative_production += production_kw;
            cumulative_consumption += consumption_kw;

            let time = NaiveTime::from_hms_opt(hour, 0, 0).expect("hour below 24 is valid");
            samples.push(Sample {
                timestamp: NaiveDateTime::new(date, time),
                production_kw,
                consumption_kw,
                cumulative_production_kwh: Some(cumulative_production),
                cumulative_consumption_kwh: Some(cumulative_consumption),
                battery_soc_percent: None,
            });
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use helion_core::{summarize_day, summarize_week};

    #[test]
    fn test_week_is_deterministic() {
        assert_eq!(demo_week(demo_week_start()), demo_week(demo_week_start()));
    }

    #[test]
    fn test_counters_reset_each_day() {
        let samples = demo_week(demo_week_start());
        let first_hour_day_two = &samples[24];
        assert_eq!(first_hour_day_two.timestamp.time().format("%H:%M").to_string(), "00:00");
        assert_eq!(first_hour_day_two.cumulative_production_kwh, Some(0.0));
    }

    #[test]
    fn test_days_differ_by_factor() {
        let samples = demo_week(demo_week_start());
        let day_one = summarize_day(&samples[0..24]).unwrap();
        let day_three = summarize_day(&samples[48..72]).unwrap();
        // day 3 runs at 0.6x of day 1's arc
        assert!((day_three.day_energy_kwh - day_one.day_energy_kwh * 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_week_has_distinct_extremes() {
        let samples = demo_week(demo_week_start());
        let week = summarize_week(&samples).unwrap();
        assert_eq!(week.days_analyzed, 7);
        assert!(week.best_day.generation_kwh > week.worst_day.generation_kwh);
        assert!(week.self_sufficiency_percent > 100.0);
    }
}
