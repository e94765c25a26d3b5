use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/logs.jsonl";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store: StoreKind,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let store = match lookup("APP_STORE").as_deref().map(str::trim) {
            Some(kind) if kind.eq_ignore_ascii_case("memory") => StoreKind::Memory,
            _ => StoreKind::File(
                lookup("APP_DATA_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            ),
        };

        Self { port, store }
    }
}
