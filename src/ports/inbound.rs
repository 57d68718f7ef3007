//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the presentation layer drives the desk through this.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive loop (tab menu -> screen -> actions) until the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
