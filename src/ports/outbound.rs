//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Channel, DomainError, EmergencyMessage, Resource};

/// Record source. Seeds the alert feed, channel list and resource inventory.
///
/// Read-only: aggregates never write back through this port.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    /// Short label for logs (e.g. "sample", "fixture:/path/desk.json").
    fn name(&self) -> String;

    async fn load_alerts(&self) -> Result<Vec<EmergencyMessage>, DomainError>;

    async fn load_channels(&self) -> Result<Vec<Channel>, DomainError>;

    async fn load_resources(&self) -> Result<Vec<Resource>, DomainError>;
}
