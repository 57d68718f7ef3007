//! Application use cases. Aggregates that own records and guard their transitions.

pub mod alert_feed;
pub mod channel_list;
pub mod desk_service;
pub mod map_view;
pub mod resource_inventory;
pub mod view_state;

pub use alert_feed::AlertFeed;
pub use channel_list::ChannelList;
pub use desk_service::Desk;
pub use map_view::{LocationPins, group_by_location};
pub use resource_inventory::ResourceInventory;
pub use view_state::ExpansionState;

use crate::domain::DomainError;
use std::collections::HashSet;

/// Aggregates address records by id, so a repeated id would make actions hit the wrong record.
fn ensure_unique_ids<'a>(
    kind: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::InvalidRecord(format!("duplicate {} id {}", kind, id)));
        }
    }
    Ok(())
}
