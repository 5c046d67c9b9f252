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

mod config;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use helion_assistant::{Intent, respond};
use helion_core::{
    advise, daily_report, expansion_report_markdown, summarize_day, summarize_week, weekly_report,
};
use helion_types::AdvicePeriod;
use helion_web::SampleStore;

#[derive(Parser)]
#[command(name = "helion")]
#[command(author, version, about = "Solar generation insight reports and assistant")]
#[command(
    long_about = "Turns hourly generation/consumption samples into summaries, \
    narrative reports, and expansion advice, and answers the assistant's \
    scripted energy questions.\n\
    \nExamples:\n  \
    helion serve                                # API on the built-in demo week\n  \
    helion report --kind day --date 2025-09-01\n  \
    helion expansion --period 30d --data mock_week.json\n  \
    helion ask best_hour"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the JSON API server
    Serve {
        /// Path to the configuration file
        #[arg(long, default_value = "helion.toml")]
        config: PathBuf,
    },

    /// Print a narrative report for the loaded samples
    Report {
        /// Report granularity
        #[arg(long, value_parser = ["day", "week"], default_value = "week")]
        kind: String,

        /// Day to report on (defaults to the first day in the data)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// JSON mock file (defaults to the built-in demo week)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Print the expansion analysis for the loaded samples
    Expansion {
        /// Consumption accumulation period (7d or 30d)
        #[arg(long, default_value = "7d")]
        period: AdvicePeriod,

        /// JSON mock file (defaults to the built-in demo week)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Ask the assistant one question
    Ask {
        /// Intent name: production, consumption, balance, best_hour, ...
        intent: Intent,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("helion=info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { config } => serve(&config).await,
        Commands::Report { kind, date, data } => print_report(&kind, date, data.as_deref()),
        Commands::Expansion { period, data } => print_expansion(period, data.as_deref()),
        Commands::Ask { intent } => {
            let answer = respond(intent);
            println!("{}", answer.speech);
            if let Some(reprompt) = answer.reprompt {
                println!("{reprompt}");
            }
            Ok(())
        }
    }
}

async fn serve(config_path: &Path) -> Result<()> {
    let config = config::load_config_with_fallback(config_path)?;
    config.validate()?;

    let store = match &config.data.samples_path {
        Some(path) => SampleStore::from_json_file(path)?,
        None => SampleStore::demo(),
    };
    info!(
        samples = store.len(),
        days = store.dates().len(),
        "sample store ready"
    );

    helion_web::start_web_server(
        Arc::new(store),
        &config.server.bind_address,
        config.server.port,
    )
    .await
    .context("web server failed")
}

fn load_store(path: Option<&Path>) -> Result<SampleStore> {
    match path {
        Some(path) => Ok(SampleStore::from_json_file(path)?),
        None => Ok(SampleStore::demo()),
    }
}

fn print_report(kind: &str, date: Option<NaiveDate>, data: Option<&Path>) -> Result<()> {
    let store = load_store(data)?;
    match kind {
        "day" => {
            let date = match date {
                Some(date) => date,
                None => *store.dates().first().context("no samples loaded")?,
            };
            let summary = summarize_day(store.day(date))
                .with_context(|| format!("no samples recorded for {date}"))?;
            println!("{}", daily_report(&summary));
        }
        "week" => {
            let summary = summarize_week(store.all()).context("no samples loaded")?;
            println!("{}", weekly_report(&summary));
        }
        other => bail!("unknown report kind: {other}"),
    }
    Ok(())
}

fn print_expansion(period: AdvicePeriod, data: Option<&Path>) -> Result<()> {
    let store = load_store(data)?;
    let week = summarize_week(store.all()).context("no samples loaded")?;
    let report = advise(week.total_consumption_kwh, week.total_generation_kwh, period);
    println!("{}", expansion_report_markdown(&report));
    Ok(())
}
