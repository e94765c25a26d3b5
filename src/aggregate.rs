use crate::models::{
    DetailChart, DetailMode, DetailSeries, HourlyChart, HourlySeries, LogEntry, Overview,
};
use chrono::{FixedOffset, NaiveDate, Timelike};
use std::collections::HashMap;

const ANDROID: &str = "android";
const IOS: &str = "ios";

/// The collection as it stood when it held `upto` entries. Relies on the store being append-only.
pub fn snapshot(entries: &[LogEntry], upto: Option<usize>) -> &[LogEntry] {
    match upto {
        Some(upto) => &entries[..upto.min(entries.len())],
        None => entries,
    }
}

pub fn overview(entries: &[LogEntry]) -> Overview {
    Overview {
        total: entries.len(),
        channels: distinct(entries.iter().map(|entry| entry.channel.as_str())),
        devices: distinct(entries.iter().map(|entry| entry.device.as_str())),
    }
}

/// Counts per `channel/detail` for each hour of `date` (UTC date), bucketed in `offset`.
pub fn hourly_by_channel(entries: &[LogEntry], date: NaiveDate, offset: FixedOffset) -> HourlyChart {
    let mut groups = Groups::<[u64; 24]>::default();

    for entry in entries.iter().filter(|entry| entry.timestamp.date_naive() == date) {
        let key = format!("{}/{}", entry.channel, entry.primary_detail());
        let hour = entry.timestamp.with_timezone(&offset).hour() as usize;
        let counts = groups.slot(&key);
        counts[hour] = counts[hour].saturating_add(1);
    }

    HourlyChart {
        date,
        labels: (0..24).map(|hour| format!("{hour:02}:00")).collect(),
        series: groups
            .into_vec()
            .into_iter()
            .map(|(label, counts)| HourlySeries { label, counts })
            .collect(),
    }
}

/// Per-detail counts for one channel, sorted by descending count.
pub fn detail_counts(
    entries: &[LogEntry],
    channel: &str,
    mode: DetailMode,
    device: Option<&str>,
) -> DetailChart {
    let selected = entries
        .iter()
        .filter(|entry| entry.channel == channel)
        .filter(|entry| device.is_none_or(|device| entry.device == device));

    let (labels, series) = match mode {
        DetailMode::Total => {
            let mut groups = Groups::<u64>::default();
            for entry in selected {
                let count = groups.slot(entry.primary_detail());
                *count = count.saturating_add(1);
            }

            let mut rows = groups.into_vec();
            // stable: ties keep first-seen order
            rows.sort_by(|a, b| b.1.cmp(&a.1));

            let (labels, counts): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
            let label = format!("{channel} ({})", device.unwrap_or("all"));
            (labels, vec![DetailSeries { label, counts }])
        }
        DetailMode::Device => {
            let mut groups = Groups::<(u64, u64)>::default();
            for entry in selected {
                let split = groups.slot(entry.primary_detail());
                match entry.device.as_str() {
                    ANDROID => split.0 = split.0.saturating_add(1),
                    IOS => split.1 = split.1.saturating_add(1),
                    _ => {}
                }
            }

            let mut rows: Vec<_> = groups
                .into_vec()
                .into_iter()
                .filter(|(_, (android, ios))| android + ios > 0)
                .collect();
            rows.sort_by(|a, b| (b.1.0 + b.1.1).cmp(&(a.1.0 + a.1.1)));

            let mut labels = Vec::with_capacity(rows.len());
            let mut android = Vec::with_capacity(rows.len());
            let mut ios = Vec::with_capacity(rows.len());
            for (label, (a, i)) in rows {
                labels.push(label);
                android.push(a);
                ios.push(i);
            }
            let series = vec![
                DetailSeries {
                    label: ANDROID.to_string(),
                    counts: android,
                },
                DetailSeries {
                    label: IOS.to_string(),
                    counts: ios,
                },
            ];
            (labels, series)
        }
    };

    DetailChart {
        channel: Some(channel.to_string()),
        mode,
        labels,
        series,
    }
}

/// Insertion-ordered grouping.
struct Groups<T> {
    index: HashMap<String, usize>,
    rows: Vec<(String, T)>,
}

impl<T> Default for Groups<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            rows: Vec::new(),
        }
    }
}

impl<T: Default> Groups<T> {
    fn slot(&mut self, key: &str) -> &mut T {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                self.rows.push((key.to_string(), T::default()));
                self.index.insert(key.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        &mut self.rows[position].1
    }

    fn into_vec(self) -> Vec<(String, T)> {
        self.rows
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::<String>::new();
    for value in values {
        if !seen.iter().any(|existing| existing == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
