// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Helion.

//! Capacity-adequacy analysis and the expansion suggestion.

use helion_types::{AdvicePeriod, ExpansionReport};
use tracing::debug;

/// Fixed ascending catalog of inverter ratings (kW)
const INVERTER_CATALOG_KW: [f64; 5] = [3.0, 5.0, 10.0, 15.0, 20.0];

/// Rule-of-thumb equivalent full-power sun hours per day, used to convert
/// between daily energy and inverter capacity
const PEAK_SUN_HOURS_PER_DAY: f64 = 4.0;

/// Fraction of nameplate capacity considered safe for continuous operation
const SAFE_CAPACITY_FACTOR: f64 = 0.8;

/// Judge whether the system needs expansion for the given consumption.
///
/// The estimated capacity derives from average daily production over the
/// reference week; the safe ceiling is what that capacity can generate over
/// the period at 80% utilization. The verdict flips to "needed" exactly when
/// period consumption crosses the ceiling, and the suggestion is the
/// smallest catalog rating covering the required capacity.
#[must_use]
pub fn advise(
    total_consumption_kwh: f64,
    weekly_production_kwh: f64,
    period: AdvicePeriod,
) -> ExpansionReport {
    let days = f64::from(period.days());
    let avg_daily_consumption_kwh = total_consumption_kwh / days;
    let avg_daily_production_kwh = weekly_production_kwh / 7.0;
    let estimated_capacity_kw = avg_daily_production_kwh / PEAK_SUN_HOURS_PER_DAY;
    let safe_ceiling_kwh =
        estimated_capacity_kw * SAFE_CAPACITY_FACTOR * days * PEAK_SUN_HOURS_PER_DAY;
    let expansion_needed = total_consumption_kwh > safe_ceiling_kwh;

    let required_capacity_kw = avg_daily_consumption_kwh / PEAK_SUN_HOURS_PER_DAY;
    let suggested_inverter_kw = INVERTER_CATALOG_KW
        .iter()
        .copied()
        .find(|rating| *rating >= required_capacity_kw);

    debug!(
        period = %period,
        ceiling_kwh = safe_ceiling_kwh,
        expansion_needed,
        "expansion analyzed"
    );

    ExpansionReport {
        period,
        total_consumption_kwh,
        weekly_production_kwh,
        avg_daily_consumption_kwh,
        avg_daily_production_kwh,
        estimated_capacity_kw,
        required_capacity_kw,
        safe_ceiling_kwh,
        expansion_needed,
        suggested_inverter_kw,
    }
}

/// Render the expansion analysis as a Markdown block
#[must_use]
pub fn expansion_report_markdown(report: &ExpansionReport) -> String {
    let period = report.period.label();
    let total = report.total_consumption_kwh;
    let weekly = report.weekly_production_kwh;
    let capacity = report.estimated_capacity_kw;
    let ceiling = report.safe_ceiling_kwh;

    let diagnosis = if report.expansion_needed {
        "Seu consumo está próximo ou excede o limite de geração segura do seu sistema atual."
    } else {
        "Com base no seu consumo atual, seu sistema está operando confortavelmente dentro da capacidade de geração."
    };

    let next_step = if report.expansion_needed {
        format!(
            "Para suportar sua demanda de energia com mais folga, um inversor de pelo menos {} kW seria o mais indicado.",
            report.suggested_inverter_label()
        )
    } else {
        "Nenhuma ação é necessária no momento.".to_owned()
    };

    format!(
        "### Análise de Expansão\n\
         \n\
         - Consumo total analisado: {total:.2} kWh ({period})\n\
         - Produção semanal estimada: {weekly:.2} kWh\n\
         - Potência estimada do seu sistema: {capacity:.2} kW\n\
         - Limite de geração segura (80% da capacidade): {ceiling:.2} kWh no período de {period}.\n\
         - **Diagnóstico:** {diagnosis}\n\
         - **Próximo Passo Sugerido:** {next_step}\n"
    )
}
