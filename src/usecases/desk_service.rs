//! Desk use case: seed the three aggregates from a record source and hold view state.

use crate::domain::DomainError;
use crate::ports::RecordSource;
use crate::usecases::{AlertFeed, ChannelList, ExpansionState, ResourceInventory};
use tracing::info;

/// Everything the screens read from. Owned by the UI loop.
pub struct Desk {
    pub alerts: AlertFeed,
    pub channels: ChannelList,
    pub resources: ResourceInventory,
    pub expansion: ExpansionState,
}

impl Desk {
    /// Load all records. Invalid records (zero quantity, over-allocation, empty channels,
    /// repeated ids) fail the load with `InvalidRecord`.
    pub async fn load(source: &dyn RecordSource) -> Result<Self, DomainError> {
        let alerts = source.load_alerts().await?;
        let channels = source.load_channels().await?;
        let resources = source.load_resources().await?;
        info!(
            source = %source.name(),
            alerts = alerts.len(),
            channels = channels.len(),
            resources = resources.len(),
            "desk loaded"
        );

        Ok(Self {
            alerts: AlertFeed::new(alerts)?,
            channels: ChannelList::new(channels)?,
            resources: ResourceInventory::new(resources)?,
            expansion: ExpansionState::new(),
        })
    }

    /// Toggle an alert card. Unknown ids are rejected so stale view state cannot build up.
    pub fn toggle_alert(&mut self, id: &str) -> Result<bool, DomainError> {
        if self.alerts.get(id).is_none() {
            return Err(DomainError::NotFound(format!("alert {}", id)));
        }
        Ok(self.expansion.toggle(id))
    }
}
