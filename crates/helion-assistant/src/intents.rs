// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Helion.

//! Intent dispatch: one pure handler per query in the assistant's menu.
//!
//! Each handler reads the fixed day table and assembles its scripted answer,
//! appending threshold asides the same way every time. No session state.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::day_profile::{best_hour, day_totals};

/// Daily consumption comparable to ~8 hours of air conditioning (kWh)
const AIR_CONDITIONER_RANGE_KWH: RangeInclusive<f64> = 45.0..=55.0;
/// Daily consumption above this reads as unusual (kWh)
const HIGH_CONSUMPTION_KWH: f64 = 60.0;
/// Daily production above this reads as an excellent solar day (kWh)
const EXCELLENT_PRODUCTION_KWH: f64 = 70.0;
/// Daily production below this reads as weather-limited (kWh)
const LOW_PRODUCTION_KWH: f64 = 30.0;
/// Surplus above this is worth storing or charging a vehicle (kWh)
const LARGE_SURPLUS_KWH: f64 = 20.0;
/// Deficit beyond this is called out as significant (kWh)
const SIGNIFICANT_DEFICIT_KWH: f64 = 15.0;

/// The finite menu of queries the assistant answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Launch,
    Production,
    Consumption,
    Balance,
    BestHour,
    Help,
    Stop,
    Fallback,
}

impl Intent {
    /// Wire/CLI identifier for this intent
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Launch => "launch",
            Self::Production => "production",
            Self::Consumption => "consumption",
            Self::Balance => "balance",
            Self::BestHour => "best_hour",
            Self::Help => "help",
            Self::Stop => "stop",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "launch" => Ok(Self::Launch),
            "production" => Ok(Self::Production),
            "consumption" => Ok(Self::Consumption),
            "balance" => Ok(Self::Balance),
            "best_hour" => Ok(Self::BestHour),
            "help" => Ok(Self::Help),
            // the voice platform sends cancel and stop interchangeably
            "stop" | "cancel" => Ok(Self::Stop),
            "fallback" => Ok(Self::Fallback),
            other => Err(format!("unknown intent: {other}")),
        }
    }
}

/// Spoken answer for one intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResponse {
    pub speech: String,
    /// Follow-up question keeping the session open; absent when it ends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<String>,
    #[serde(default)]
    pub end_session: bool,
}

impl IntentResponse {
    fn ask(speech: String, reprompt: &str) -> Self {
        Self {
            speech,
            reprompt: Some(reprompt.to_owned()),
            end_session: false,
        }
    }
}

/// Answer one intent from the fixed day table
#[must_use]
pub fn respond(intent: Intent) -> IntentResponse {
    debug!(intent = %intent, "answering intent");
    match intent {
        Intent::Launch => launch(),
        Intent::Production => production(),
        Intent::Consumption => consumption(),
        Intent::Balance => balance(),
        Intent::BestHour => best_hour_advice(),
        Intent::Help => help(),
        Intent::Stop => stop(),
        Intent::Fallback => fallback(),
    }
}

/// Speech-friendly number: up to two decimals, trailing fraction zeroes dropped
fn speech_number(value: f64) -> String {
    let fixed = format!("{value:.2}");
    match fixed.split_once('.') {
        Some((int_part, frac_part)) => {
            let frac_part = frac_part.trim_end_matches('0');
            if frac_part.is_empty() {
                int_part.to_owned()
            } else {
                format!("{int_part}.{frac_part}")
            }
        }
        None => fixed,
    }
}

fn launch() -> IntentResponse {
    IntentResponse::ask(
        "Olá! Eu sou sua assistente de energia solar.".to_owned(),
        "Quer saber consumo, produção, saldo ou melhor horário?",
    )
}

fn production() -> IntentResponse {
    let totals = day_totals();
    let produced = speech_number(totals.production_kwh);
    let mut speech =
        format!("Sua produção solar hoje rendeu aproximadamente {produced} quilowatts hora.");

    if totals.production_kwh > EXCELLENT_PRODUCTION_KWH {
        speech.push_str(
            " Parabéns, foi um dia excelente de geração solar, quase como um dia de verão ensolarado!",
        );
    }
    if totals.production_kwh < LOW_PRODUCTION_KWH {
        speech.push_str(
            " A produção ficou abaixo da média, provavelmente devido ao clima de hoje.",
        );
    }

    IntentResponse::ask(
        speech,
        "Deseja que eu diga se produziu mais ou menos que consumiu?",
    )
}

fn consumption() -> IntentResponse {
    let totals = day_totals();
    let consumed = speech_number(totals.consumption_kwh);
    let mut speech = format!("Hoje você gastou aproximadamente {consumed} quilowatts hora.");

    if AIR_CONDITIONER_RANGE_KWH.contains(&totals.consumption_kwh) {
        speech.push_str(
            " Isso é parecido com manter um ar condicionado ligado por cerca de 8 horas.",
        );
    }
    if totals.consumption_kwh > HIGH_CONSUMPTION_KWH {
        speech.push_str(
            " Esse consumo está acima do normal, pode ser um bom momento para revisar seus hábitos.",
        );
    }

    IntentResponse::ask(speech, "Quer que eu compare com a produção de energia?")
}

fn balance() -> IntentResponse {
    let totals = day_totals();
    let produced = speech_number(totals.production_kwh);
    let consumed = speech_number(totals.consumption_kwh);

    let mut speech = if totals.balance_kwh >= 0.0 {
        let surplus = speech_number(totals.balance_kwh);
        format!(
            "Boa notícia! Você produziu {produced} quilowatts hora e consumiu {consumed}. \
             Sobraram {surplus} quilowatts hora de energia hoje."
        )
    } else {
        let deficit = speech_number(totals.balance_kwh.abs());
        format!(
            "Atenção: você produziu {produced} quilowatts hora e consumiu {consumed}. \
             Faltaram {deficit} quilowatts hora para equilibrar o dia."
        )
    };

    if totals.balance_kwh > LARGE_SURPLUS_KWH {
        speech.push_str(
            " Esse excedente seria ótimo para carregar um carro elétrico ou armazenar em baterias.",
        );
    } else if totals.balance_kwh < -SIGNIFICANT_DEFICIT_KWH {
        speech.push_str(
            " Esse déficit foi significativo, considere economizar nos horários de pico amanhã.",
        );
    }

    IntentResponse::ask(speech, "Posso sugerir o melhor horário de uso?")
}

fn best_hour_advice() -> IntentResponse {
    let totals = day_totals();
    let hour = best_hour();
    let mut speech = format!("O pico de geração solar hoje foi por volta das {hour} horas.");

    if totals.balance_kwh > 0.0 {
        speech.push_str(
            " Esse é o momento perfeito para ligar aparelhos como máquina de lavar ou carregar seu carro.",
        );
    }
    if totals.balance_kwh < 0.0 {
        speech.push_str(
            " Mesmo com esse pico, sua produção não superou o consumo total do dia. Talvez valha economizar amanhã.",
        );
    }

    IntentResponse::ask(speech, "Deseja ouvir o saldo final de energia?")
}

fn help() -> IntentResponse {
    let text =
        "Você pode me perguntar pelo consumo, produção, saldo ou melhor horário para usar energia. O que deseja?";
    IntentResponse::ask(text.to_owned(), text)
}

fn stop() -> IntentResponse {
    IntentResponse {
        speech: "Até logo! Continue aproveitando bem sua energia solar.".to_owned(),
        reprompt: None,
        end_session: true,
    }
}

fn fallback() -> IntentResponse {
    IntentResponse::ask(
        "Desculpe, não entendi. Você pode perguntar pelo consumo, produção, saldo ou melhor horário."
            .to_owned(),
        "Quer que eu fale do consumo, produção, saldo ou melhor horário?",
    )
}
