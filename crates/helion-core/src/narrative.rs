// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Helion.

//! Deterministic report text generation.
//!
//! Each commentary axis is an ordered rule table: the first predicate that
//! matches the summary selects the clause spliced into the fixed Markdown
//! template. Same summary in, byte-identical text out.

use helion_types::{DaySummary, Summary, WeekSummary};

/// Daily generation above this reads as excellent (kWh)
const EXCELLENT_GENERATION_KWH: f64 = 20.0;
/// A production peak above this reads as full strength (kW)
const STRONG_PEAK_KW: f64 = 3.0;
/// An SOC swing above this counts as heavy battery usage (points)
const HEAVY_BATTERY_SWING_POINTS: f64 = 15.0;
/// Above this the system out-generated its consumption (%)
const SURPLUS_SELF_SUFFICIENCY_PERCENT: f64 = 100.0;
/// Above this the system covered most of its consumption (%)
const GOOD_SELF_SUFFICIENCY_PERCENT: f64 = 70.0;
/// Average daily surplus hours above this support load-shifting advice
const COMFORTABLE_SURPLUS_HOURS: f64 = 4.0;

/// One narrative rule: first matching predicate wins
type Rule<S> = (fn(&S) -> bool, &'static str);

fn select<S>(rules: &[Rule<S>], summary: &S) -> &'static str {
    rules
        .iter()
        .find(|(applies, _)| applies(summary))
        .map_or("", |(_, clause)| *clause)
}

static GENERATION_RULES: [Rule<DaySummary>; 2] = [
    (
        |s| s.day_energy_kwh > EXCELLENT_GENERATION_KWH,
        "excelente. É energia suficiente para alimentar os principais eletrodomésticos da casa por várias horas!",
    ),
    (
        |_| true,
        "moderada. Em dias assim, vale a pena focar o consumo nos horários de pico solar.",
    ),
];

static PEAK_RULES: [Rule<DaySummary>; 2] = [
    (
        |s| s.peak_power_kw > STRONG_PEAK_KW,
        "operando com força total sob o sol.",
    ),
    (
        |_| true,
        "operando com uma potência mais contida, talvez devido à nebulosidade.",
    ),
];

static BATTERY_RULES: [Rule<DaySummary>; 2] = [
    (
        |s| s.soc_swing_points() > HEAVY_BATTERY_SWING_POINTS,
        "aproveitou bem a energia armazenada para uso noturno ou em momentos sem sol.",
    ),
    (
        |_| true,
        "dependeu pouco da bateria hoje, provavelmente porque a geração solar supriu bem o consumo.",
    ),
];

static SELF_SUFFICIENCY_RULES: [Rule<WeekSummary>; 3] = [
    (
        |s| s.self_sufficiency_percent > SURPLUS_SELF_SUFFICIENCY_PERCENT,
        "gerou mais energia do que o necessário, o que é ótimo e reduz significativamente sua dependência da rede elétrica.",
    ),
    (
        |s| s.self_sufficiency_percent > GOOD_SELF_SUFFICIENCY_PERCENT,
        "cobriu a maior parte do seu consumo, um excelente resultado.",
    ),
    (
        |_| true,
        "precisou complementar com a energia da rede. Podemos otimizar isso!",
    ),
];

static OPTIMIZATION_RULES: [Rule<WeekSummary>; 2] = [
    (
        |s| s.avg_surplus_hours_per_day > COMFORTABLE_SURPLUS_HOURS,
        "Você já gera um bom excedente de energia. Para maximizar a economia, tente concentrar o uso de equipamentos pesados (como ar condicionado ou máquina de lavar) nos horários de sol.",
    ),
    (
        |_| true,
        "Para aumentar sua autossuficiência, especialmente à noite, a instalação de baterias seria um excelente próximo passo.",
    ),
];

/// Render the daily report for a summary
#[must_use]
pub fn daily_report(summary: &DaySummary) -> String {
    let energy = summary.day_energy_kwh;
    let peak = summary.peak_power_kw;
    let soc_start = summary.soc_start_percent;
    let soc_end = summary.soc_end_percent;
    let generation_clause = select(&GENERATION_RULES, summary);
    let peak_clause = select(&PEAK_RULES, summary);
    let battery_clause = select(&BATTERY_RULES, summary);

    format!(
        "### Relatório Diário\n\
         \n\
         - Energia do dia: {energy:.2} kWh\n\
         - Pico de potência: {peak:.2} kW\n\
         - Nível da Bateria: Começou o dia com {soc_start:.0}% e terminou com {soc_end:.0}%.\n\
         \n\
         **Interpretação:**\n\
         - **Geração:** Sua geração de {energy:.2} kWh foi {generation_clause}\n\
         - **Pico de Potência:** Seu sistema atingiu um pico de {peak:.2} kW. Isso mostra que ele está {peak_clause}\n\
         - **Uso da Bateria:** A variação no nível da bateria indica que você {battery_clause}\n\
         \n\
         **Recomendações:**\n\
         - Use aparelhos de alto consumo durante as horas de maior geração solar.\n\
         - Programe recarga de veículos elétricos entre 10h e 14h.\n"
    )
}

/// Render the weekly report for a summary
#[must_use]
pub fn weekly_report(summary: &WeekSummary) -> String {
    let total_generation = summary.total_generation_kwh;
    let total_consumption = summary.total_consumption_kwh;
    let self_sufficiency = summary.self_sufficiency_percent;
    let best = summary.best_day;
    let worst = summary.worst_day;
    let best_date = best.date.format("%d/%m/%Y");
    let worst_date = worst.date.format("%d/%m/%Y");
    let best_day_month = best.date.format("%d/%m");
    let worst_day_month = worst.date.format("%d/%m");
    let best_generation = best.generation_kwh;
    let worst_generation = worst.generation_kwh;
    let self_sufficiency_clause = select(&SELF_SUFFICIENCY_RULES, summary);
    let optimization_clause = select(&OPTIMIZATION_RULES, summary);

    format!(
        "### Relatório Semanal\n\
         \n\
         - Total gerado: {total_generation:.2} kWh\n\
         - Total consumido: {total_consumption:.2} kWh\n\
         - Autossuficiência: {self_sufficiency:.1}%\n\
         - Melhor dia: {best_date} ({best_generation:.1} kWh)\n\
         - Pior dia: {worst_date} ({worst_generation:.1} kWh)\n\
         \n\
         **Interpretação:**\n\
         - **Autossuficiência:** Com {self_sufficiency:.1}%, seu sistema {self_sufficiency_clause}\n\
         - **Variação na Geração:** É normal haver variação durante a semana devido às condições do tempo. Sua geração variou entre {worst_generation:.1} kWh (no dia {worst_day_month}) e um pico de {best_generation:.1} kWh (no dia {best_day_month}).\n\
         \n\
         **Recomendações:**\n\
         - **Otimização:** {optimization_clause}\n\
         - Faça manutenção preventiva se a geração cair abaixo da média.\n"
    )
}

/// Render the report matching the summary's granularity
#[must_use]
pub fn generate(summary: &Summary) -> String {
    match summary {
        Summary::Day(day) => daily_report(day),
        Summary::Week(week) => weekly_report(week),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use helion_types::DayExtreme;

    fn day_summary(energy: f64, peak: f64, soc_start: f64, soc_end: f64) -> DaySummary {
        DaySummary {
            day_energy_kwh: energy,
            peak_power_kw: peak,
            peak_time: None,
            soc_start_percent: soc_start,
            soc_end_percent: soc_end,
        }
    }

    fn week_summary(self_sufficiency: f64, surplus_hours: f64) -> WeekSummary {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        WeekSummary {
            total_generation_kwh: 150.0,
            total_consumption_kwh: 200.0,
            self_sufficiency_percent: self_sufficiency,
            best_day: DayExtreme {
                date,
                generation_kwh: 28.4,
            },
            worst_day: DayExtreme {
                date: date.succ_opt().unwrap(),
                generation_kwh: 12.1,
            },
            avg_surplus_hours_per_day: surplus_hours,
            days_analyzed: 7,
        }
    }

    #[test]
    fn test_daily_report_excellent_generation_and_heavy_battery_use() {
        let report = daily_report(&day_summary(25.5, 3.5, 40.0, 85.0));
        assert!(report.starts_with("### Relatório Diário"));
        assert!(report.contains("25.50 kWh"));
        assert!(report.contains("excelente."));
        assert!(report.contains("força total sob o sol"));
        assert!(report.contains("aproveitou bem a energia armazenada"));
    }

    #[test]
    fn test_daily_report_moderate_branches() {
        let report = daily_report(&day_summary(12.0, 2.1, 50.0, 55.0));
        assert!(report.contains("moderada."));
        assert!(report.contains("potência mais contida"));
        assert!(report.contains("dependeu pouco da bateria"));
    }

    #[test]
    fn test_threshold_boundaries_are_strict() {
        // exactly at a threshold falls to the lower branch
        let report = daily_report(&day_summary(20.0, 3.0, 40.0, 55.0));
        assert!(report.contains("moderada."));
        assert!(report.contains("potência mais contida"));
        assert!(report.contains("dependeu pouco da bateria"));
    }

    #[test]
    fn test_weekly_report_branches_at_self_sufficiency_levels() {
        let over = weekly_report(&week_summary(104.2, 2.0));
        assert!(over.contains("reduz significativamente sua dependência"));

        let good = weekly_report(&week_summary(83.0, 2.0));
        assert!(good.contains("cobriu a maior parte do seu consumo"));

        let low = weekly_report(&week_summary(41.0, 2.0));
        assert!(low.contains("Podemos otimizar isso!"));
    }

    #[test]
    fn test_weekly_report_optimization_branch() {
        let comfortable = weekly_report(&week_summary(90.0, 5.5));
        assert!(comfortable.contains("equipamentos pesados"));

        let tight = weekly_report(&week_summary(90.0, 3.0));
        assert!(tight.contains("instalação de baterias"));
    }

    #[test]
    fn test_weekly_report_formats_dates_and_extremes() {
        let report = weekly_report(&week_summary(75.0, 4.5));
        assert!(report.contains("Melhor dia: 01/09/2025 (28.4 kWh)"));
        assert!(report.contains("Pior dia: 02/09/2025 (12.1 kWh)"));
        assert!(report.contains("variou entre 12.1 kWh (no dia 02/09)"));
    }

    #[test]
    fn test_generate_is_referentially_transparent() {
        let day = Summary::Day(day_summary(25.5, 3.5, 40.0, 85.0));
        let week = Summary::Week(week_summary(75.0, 4.5));
        assert_eq!(generate(&day), generate(&day));
        assert_eq!(generate(&week), generate(&week));
        assert_ne!(generate(&day), generate(&week));
    }
}
