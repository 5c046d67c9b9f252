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

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use helion_assistant::{Intent, IntentResponse, respond};
use helion_core::{advise, daily_report, expansion_report_markdown, weekly_report};
use helion_core::{format::format_kwh, summarize_day, summarize_week};
use helion_types::{AdvicePeriod, DaySummary, ExpansionReport, WeekSummary};

use crate::AppState;
use crate::chart::{DayChartData, WeekChartData};

/// Handler-level failures, rendered as JSON error payloads
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no samples recorded for {0}")]
    UnknownDay(NaiveDate),

    #[error("no samples loaded")]
    NoData,

    #[error("invalid period: {0} (expected 7d or 30d)")]
    InvalidPeriod(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UnknownDay(_) | Self::NoData => StatusCode::NOT_FOUND,
            Self::InvalidPeriod(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Distinct calendar dates available in the store
pub async fn days_handler(State(state): State<AppState>) -> Json<Vec<NaiveDate>> {
    Json(state.store.dates())
}

pub async fn day_summary_handler(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<DaySummary>, ApiError> {
    let summary = summarize_day(state.store.day(date)).ok_or(ApiError::UnknownDay(date))?;
    Ok(Json(summary))
}

pub async fn week_summary_handler(
    State(state): State<AppState>,
) -> Result<Json<WeekSummary>, ApiError> {
    let summary = summarize_week(state.store.all()).ok_or(ApiError::NoData)?;
    Ok(Json(summary))
}

/// A rendered narrative report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    pub kind: String,
    pub markdown: String,
}

pub async fn day_report_handler(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<ReportResponse>, ApiError> {
    let summary = summarize_day(state.store.day(date)).ok_or(ApiError::UnknownDay(date))?;
    debug!(%date, "rendering daily report");
    Ok(Json(ReportResponse {
        kind: "day".to_owned(),
        markdown: daily_report(&summary),
    }))
}

pub async fn week_report_handler(
    State(state): State<AppState>,
) -> Result<Json<ReportResponse>, ApiError> {
    let summary = summarize_week(state.store.all()).ok_or(ApiError::NoData)?;
    Ok(Json(ReportResponse {
        kind: "week".to_owned(),
        markdown: weekly_report(&summary),
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct ExpansionQuery {
    pub period: Option<String>,
}

/// Expansion analysis payload: structured report plus rendered text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionResponse {
    pub report: ExpansionReport,
    pub markdown: String,
}

pub async fn expansion_handler(
    State(state): State<AppState>,
    Query(query): Query<ExpansionQuery>,
) -> Result<Json<ExpansionResponse>, ApiError> {
    let period = match query.period.as_deref() {
        None => AdvicePeriod::default(),
        Some(raw) => raw
            .parse::<AdvicePeriod>()
            .map_err(|_| ApiError::InvalidPeriod(raw.to_owned()))?,
    };

    let week = summarize_week(state.store.all()).ok_or(ApiError::NoData)?;
    let report = advise(week.total_consumption_kwh, week.total_generation_kwh, period);
    let markdown = expansion_report_markdown(&report);
    Ok(Json(ExpansionResponse { report, markdown }))
}

/// KPI tile strings, display-formatted the way the dashboard shows them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiResponse {
    pub total_generation: String,
    pub total_consumption: String,
    pub self_sufficiency: String,
    pub best_day_generation: String,
    pub days_analyzed: usize,
}

pub async fn kpis_handler(State(state): State<AppState>) -> Result<Json<KpiResponse>, ApiError> {
    let week = summarize_week(state.store.all()).ok_or(ApiError::NoData)?;
    let self_sufficiency = format!("{:.1}%", week.self_sufficiency_percent).replace('.', ",");
    Ok(Json(KpiResponse {
        total_generation: format_kwh(week.total_generation_kwh),
        total_consumption: format_kwh(week.total_consumption_kwh),
        self_sufficiency,
        best_day_generation: format_kwh(week.best_day.generation_kwh),
        days_analyzed: week.days_analyzed,
    }))
}

pub async fn day_chart_handler(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<DayChartData>, ApiError> {
    let samples = state.store.day(date);
    if samples.is_empty() {
        return Err(ApiError::UnknownDay(date));
    }
    Ok(Json(DayChartData::from_samples(samples)))
}

pub async fn week_chart_handler(
    State(state): State<AppState>,
) -> Result<Json<WeekChartData>, ApiError> {
    if state.store.is_empty() {
        return Err(ApiError::NoData);
    }
    Ok(Json(WeekChartData::from_store(&state.store)))
}

#[derive(Debug, Deserialize)]
pub struct AssistantQuery {
    pub intent: Intent,
}

/// Answer one assistant intent from the fixed day table
pub async fn assistant_handler(Json(query): Json<AssistantQuery>) -> Json<IntentResponse> {
    Json(respond(query.intent))
}
