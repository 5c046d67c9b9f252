// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Helion.

//! Display formatting for KPI tiles, pt-BR conventions.

/// Format an energy amount as a pt-BR display string, e.g. `1.234,56 kWh`
#[must_use]
pub fn format_kwh(value: f64) -> String {
    format!("{} kWh", decimal_pt_br(value))
}

/// Format a power amount as a pt-BR display string, e.g. `3,50 kW`
#[must_use]
pub fn format_kw(value: f64) -> String {
    format!("{} kW", decimal_pt_br(value))
}

/// Two decimal places, comma decimal separator, dot thousands grouping
fn decimal_pt_br(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let negative = int_part.starts_with('-');
    let digits = int_part.trim_start_matches('-');

    let reversed: Vec<char> = digits.chars().rev().collect();
    let mut grouped: Vec<char> = Vec::with_capacity(reversed.len() + reversed.len() / 3);
    for (i, c) in reversed.iter().enumerate() {
        if i != 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    let grouped: String = grouped.iter().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{frac_part}")
}
