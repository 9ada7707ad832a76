use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use chrono::{DateTime, SecondsFormat, Utc};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt as _;
use tokio::sync::Mutex;

use crate::domain::repository::AuditLog;
use crate::error::RegistryError;

/// Creation audit log backed by a file opened once, in append mode, at startup.
#[derive(Clone)]
pub struct FileAuditLog {
    file: Arc<Mutex<File>>,
    path: PathBuf,
}

impl FileAuditLog {
    pub async fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .with_context(|| format!("open audit log {}", path.display()))?;
        Ok(Self {
            file: Arc::new(Mutex::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditLog for FileAuditLog {
    async fn record_creation(&self, name: &str, at: DateTime<Utc>) -> Result<(), RegistryError> {
        let entry = format_entry(name, at);
        let mut file = self.file.lock().await;
        file.write_all(entry.as_bytes())
            .await
            .context("append audit entry")?;
        file.flush().await.context("flush audit log")?;
        Ok(())
    }
}

/// `"{name} - {timestamp}\n"`. Line breaks inside `name` are flattened so each
/// entry stays on one line.
pub fn format_entry(name: &str, at: DateTime<Utc>) -> String {
    let name = name.replace(['\r', '\n'], " ");
    format!(
        "{name} - {}\n",
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}
