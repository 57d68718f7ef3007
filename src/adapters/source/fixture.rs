//! Implements RecordSource from a read-only JSON fixture.
//!
//! Shape mirrors the screens' records:
//! `{ "alerts": [...], "channels": [...], "resources": [...] }`. Channels carry
//! `lastMessage` / `lastMessageTime` as flat fields that must appear together.
//! Unknown categories fail with `InvalidCategory`. Nothing is ever written back.

use crate::domain::{Channel, DomainError, EmergencyMessage, Resource};
use crate::ports::RecordSource;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::OnceCell;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
struct FixtureData {
    #[serde(default)]
    alerts: Vec<EmergencyMessage>,
    #[serde(default)]
    channels: Vec<Channel>,
    #[serde(default)]
    resources: Vec<Resource>,
}

fn parse_fixture(json: &str) -> Result<FixtureData, DomainError> {
    serde_json::from_str(json).map_err(|e| DomainError::Source(format!("fixture: {}", e)))
}

/// JSON fixture source. The file is read and parsed once; every load serves that snapshot.
pub struct FixtureSource {
    path: PathBuf,
    snapshot: OnceCell<FixtureData>,
}

impl FixtureSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            snapshot: OnceCell::new(),
        }
    }

    async fn snapshot(&self) -> Result<&FixtureData, DomainError> {
        self.snapshot
            .get_or_try_init(|| async {
                let json = fs::read_to_string(&self.path).await.map_err(|e| {
                    DomainError::Source(format!("read {}: {}", self.path.display(), e))
                })?;
                debug!(path = %self.path.display(), bytes = json.len(), "fixture read");
                parse_fixture(&json)
            })
            .await
    }
}

#[async_trait]
impl RecordSource for FixtureSource {
    fn name(&self) -> String {
        format!("fixture:{}", self.path.display())
    }

    async fn load_alerts(&self) -> Result<Vec<EmergencyMessage>, DomainError> {
        Ok(self.snapshot().await?.alerts.clone())
    }

    async fn load_channels(&self) -> Result<Vec<Channel>, DomainError> {
        Ok(self.snapshot().await?.channels.clone())
    }

    async fn load_resources(&self) -> Result<Vec<Resource>, DomainError> {
        Ok(self.snapshot().await?.resources.clone())
    }
}
