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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Period over which the analyzed consumption total was accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AdvicePeriod {
    #[default]
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl AdvicePeriod {
    /// Number of days in the period
    #[must_use]
    pub fn days(self) -> u32 {
        match self {
            Self::SevenDays => 7,
            Self::ThirtyDays => 30,
        }
    }

    /// Short wire/display label ("7d", "30d")
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
        }
    }
}

impl fmt::Display for AdvicePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AdvicePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(Self::SevenDays),
            "30d" => Ok(Self::ThirtyDays),
            other => Err(format!("unknown advice period: {other}")),
        }
    }
}

/// Outcome of the capacity-adequacy analysis for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpansionReport {
    pub period: AdvicePeriod,
    /// Consumption accumulated over the period (kWh)
    pub total_consumption_kwh: f64,
    /// Production accumulated over the reference week (kWh)
    pub weekly_production_kwh: f64,
    pub avg_daily_consumption_kwh: f64,
    pub avg_daily_production_kwh: f64,
    /// Inverter capacity inferred from average daily production (kW)
    pub estimated_capacity_kw: f64,
    /// Capacity that average daily consumption would require (kW)
    pub required_capacity_kw: f64,
    /// Energy the system can generate over the period at 80% capacity (kWh)
    pub safe_ceiling_kwh: f64,
    /// True when period consumption exceeds the safe ceiling
    pub expansion_needed: bool,
    /// Smallest catalog inverter rating covering the required capacity;
    /// `None` when even the largest catalog entry falls short
    pub suggested_inverter_kw: Option<f64>,
}

impl ExpansionReport {
    /// Display label for the suggested inverter rating ("15", ">20")
    #[must_use]
    pub fn suggested_inverter_label(&self) -> String {
        match self.suggested_inverter_kw {
            Some(rating) => format!("{rating:.0}"),
            None => ">20".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parsing_and_labels() {
        assert_eq!("7d".parse::<AdvicePeriod>().unwrap(), AdvicePeriod::SevenDays);
        assert_eq!("30d".parse::<AdvicePeriod>().unwrap(), AdvicePeriod::ThirtyDays);
        assert!("14d".parse::<AdvicePeriod>().is_err());
        assert_eq!(AdvicePeriod::SevenDays.days(), 7);
        assert_eq!(AdvicePeriod::ThirtyDays.label(), "30d");
    }

    #[test]
    fn test_period_serde_uses_short_labels() {
        let json = serde_json::to_string(&AdvicePeriod::ThirtyDays).unwrap();
        assert_eq!(json, "\"30d\"");
        let parsed: AdvicePeriod = serde_json::from_str("\"7d\"").unwrap();
        assert_eq!(parsed, AdvicePeriod::SevenDays);
    }
}
