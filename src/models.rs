use crate::errors::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Label used when an entry has no first detail.
pub const NO_DETAIL: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub channel: String,
    #[serde(default)]
    pub details: Vec<String>,
    pub device: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl LogEntry {
    pub fn primary_detail(&self) -> &str {
        self.details
            .first()
            .map(String::as_str)
            .filter(|detail| !detail.is_empty())
            .unwrap_or(NO_DETAIL)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestRequest {
    pub channel: Option<String>,
    pub details: Option<Vec<String>>,
    pub device: Option<String>,
    pub user_agent: Option<String>,
}

impl IngestRequest {
    pub fn into_entry(self, timestamp: DateTime<Utc>) -> Result<LogEntry, AppError> {
        let channel = required(self.channel);
        let device = required(self.device);
        let (Some(channel), Some(device)) = (channel, device) else {
            return Err(AppError::bad_request("Missing required fields"));
        };

        Ok(LogEntry {
            timestamp,
            channel,
            details: self.details.unwrap_or_default(),
            device,
            user_agent: self.user_agent,
        })
    }
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Overview {
    pub total: usize,
    pub channels: Vec<String>,
    pub devices: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HourlySeries {
    pub label: String,
    pub counts: [u64; 24],
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HourlyChart {
    pub date: NaiveDate,
    pub labels: Vec<String>,
    pub series: Vec<HourlySeries>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailMode {
    #[default]
    Total,
    Device,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DetailSeries {
    pub label: String,
    pub counts: Vec<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DetailChart {
    pub channel: Option<String>,
    pub mode: DetailMode,
    pub labels: Vec<String>,
    pub series: Vec<DetailSeries>,
}

#[derive(Debug, Deserialize)]
pub struct HourlyQuery {
    pub date: Option<NaiveDate>,
    pub tz_offset_minutes: Option<i32>,
    /// Only the first `upto` stored entries are considered.
    pub upto: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub channel: Option<String>,
    #[serde(default)]
    pub mode: DetailMode,
    pub device: Option<String>,
    pub upto: Option<usize>,
}
