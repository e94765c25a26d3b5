use crate::errors::StoreError;
use crate::models::LogEntry;
use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use tokio::{
    fs::{self, File, OpenOptions},
    io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt},
    sync::{Mutex, RwLock},
};
use tracing::warn;

/// Append-only sink for visit entries.
pub struct LogStore {
    backend: Backend,
}

enum Backend {
    /// JSON Lines file, one entry per line.
    File { path: PathBuf, write_lock: Mutex<()> },
    Memory(RwLock<Vec<LogEntry>>),
}

impl LogStore {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: Backend::File {
                path: path.into(),
                write_lock: Mutex::new(()),
            },
        }
    }

    pub fn memory() -> Self {
        Self {
            backend: Backend::Memory(RwLock::new(Vec::new())),
        }
    }

    pub async fn append(&self, entry: &LogEntry) -> Result<(), StoreError> {
        match &self.backend {
            Backend::File { path, write_lock } => {
                let mut line = serde_json::to_vec(entry)?;
                line.push(b'\n');

                let _guard = write_lock.lock().await;
                let mut file = OpenOptions::new()
                    .create(true)
                    .read(true)
                    .append(true)
                    .open(path)
                    .await?;
                // a torn previous write must not swallow this record
                if !ends_with_newline(&mut file).await? {
                    line.insert(0, b'\n');
                }
                file.write_all(&line).await?;
                file.flush().await?;
                Ok(())
            }
            Backend::Memory(entries) => {
                entries.write().await.push(entry.clone());
                Ok(())
            }
        }
    }

    /// Returns every entry in insertion order. A file that was never written reads as empty.
    pub async fn read_all(&self) -> Result<Vec<LogEntry>, StoreError> {
        match &self.backend {
            Backend::File { path, .. } => read_lines(path).await,
            Backend::Memory(entries) => Ok(entries.read().await.clone()),
        }
    }
}

async fn ends_with_newline(file: &mut File) -> Result<bool, StoreError> {
    if file.metadata().await?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1)).await?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last).await?;
    Ok(last[0] == b'\n')
}

async fn read_lines(path: &Path) -> Result<Vec<LogEntry>, StoreError> {
    let contents = match fs::read(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut entries = Vec::new();
    for (index, line) in contents.split(|byte| *byte == b'\n').enumerate() {
        if line.trim_ascii().is_empty() {
            continue;
        }
        match serde_json::from_slice(line) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!("skipping malformed log line {}: {err}", index + 1),
        }
    }
    Ok(entries)
}
