use crate::aggregate::{detail_counts, hourly_by_channel, overview, snapshot};
use crate::errors::AppError;
use crate::models::{
    DetailChart, DetailQuery, HourlyChart, HourlyQuery, IngestRequest, LogEntry, MessageResponse,
    Overview,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Html,
    Json,
};
use chrono::{FixedOffset, Utc};
use tracing::{error, info};

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

pub async fn ingest(
    State(state): State<AppState>,
    payload: Result<Json<IngestRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let entry = payload.into_entry(Utc::now())?;

    let message = match state.store.append(&entry).await {
        Ok(()) => {
            info!("logged visit channel={} device={}", entry.channel, entry.device);
            "Logged successfully"
        }
        Err(err) => {
            error!("failed to write visit to log store: {err}");
            "Logged (with storage write error)"
        }
    };

    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}

pub async fn query(State(state): State<AppState>) -> Result<Json<Vec<LogEntry>>, AppError> {
    let entries = state.store.read_all().await.map_err(AppError::storage_read)?;
    Ok(Json(entries))
}

pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

pub async fn get_overview(State(state): State<AppState>) -> Result<Json<Overview>, AppError> {
    let entries = state.store.read_all().await.map_err(AppError::storage_read)?;
    Ok(Json(overview(&entries)))
}

pub async fn get_hourly(
    State(state): State<AppState>,
    params: Result<Query<HourlyQuery>, QueryRejection>,
) -> Result<Json<HourlyChart>, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());
    let minutes = params.tz_offset_minutes.unwrap_or(0);
    let offset = minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| AppError::bad_request("tz_offset_minutes is out of range"))?;

    let entries = state.store.read_all().await.map_err(AppError::storage_read)?;
    let entries = snapshot(&entries, params.upto);
    Ok(Json(hourly_by_channel(entries, date, offset)))
}

pub async fn get_detail(
    State(state): State<AppState>,
    params: Result<Query<DetailQuery>, QueryRejection>,
) -> Result<Json<DetailChart>, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let entries = state.store.read_all().await.map_err(AppError::storage_read)?;
    let entries = snapshot(&entries, params.upto);

    let channel = params
        .channel
        .filter(|channel| !channel.is_empty())
        .or_else(|| entries.first().map(|entry| entry.channel.clone()));
    let Some(channel) = channel else {
        return Ok(Json(DetailChart {
            channel: None,
            mode: params.mode,
            labels: Vec::new(),
            series: Vec::new(),
        }));
    };

    let device = params.device.as_deref().filter(|device| *device != "all");
    Ok(Json(detail_counts(entries, &channel, params.mode, device)))
}

fn today_string() -> String {
    Utc::now().date_naive().to_string()
}
