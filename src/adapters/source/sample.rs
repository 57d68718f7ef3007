//! Built-in sample records. Implements RecordSource with no I/O.

use crate::domain::{
    AlertStatus, Channel, ChannelType, DomainError, EmergencyMessage, LastMessage, Priority,
    Resource, ResourceStatus, ResourceType,
};
use crate::ports::RecordSource;
use async_trait::async_trait;

pub fn alerts() -> Vec<EmergencyMessage> {
    vec![
        EmergencyMessage {
            id: "flash-flood".into(),
            priority: Priority::High,
            title: "Flash Flood Warning".into(),
            location: "Downtown District".into(),
            timestamp: "10:45 AM".into(),
            description: "Multiple streets flooded. Immediate evacuation required. \
                          Emergency responders needed for rescue operations."
                .into(),
            status: AlertStatus::New,
            respondents: 8,
        },
        EmergencyMessage {
            id: "power-outage".into(),
            priority: Priority::Medium,
            title: "Power Outage".into(),
            location: "North Station".into(),
            timestamp: "9:20 AM".into(),
            description: "Substation offline. Shelters running on generators.".into(),
            status: AlertStatus::InProgress,
            respondents: 3,
        },
        EmergencyMessage {
            id: "road-closure".into(),
            priority: Priority::Low,
            title: "Road Closure".into(),
            location: "Route 9 Bridge".into(),
            timestamp: "Yesterday".into(),
            description: "Debris cleared, bridge inspection complete.".into(),
            status: AlertStatus::Resolved,
            respondents: 5,
        },
    ]
}

fn channel(
    id: &str,
    name: &str,
    channel_type: ChannelType,
    unread: u32,
    last: (&str, &str),
    participants: u32,
) -> Channel {
    Channel {
        id: id.into(),
        name: name.into(),
        channel_type,
        unread,
        last_message: Some(LastMessage {
            text: last.0.into(),
            time: last.1.into(),
        }),
        participants,
    }
}

pub fn channels() -> Vec<Channel> {
    vec![
        channel(
            "1",
            "Flash Flood Response",
            ChannelType::Emergency,
            5,
            ("Team A deployed to south sector", "2m ago"),
            24,
        ),
        channel(
            "2",
            "Medical Team Alpha",
            ChannelType::Team,
            2,
            ("Supply status updated", "15m ago"),
            12,
        ),
        channel(
            "3",
            "General Updates",
            ChannelType::General,
            0,
            ("Weather forecast for tomorrow", "1h ago"),
            156,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn resource(
    id: &str,
    name: &str,
    resource_type: ResourceType,
    status: ResourceStatus,
    quantity: u32,
    allocated: u32,
    location: &str,
    last_updated: &str,
) -> Resource {
    Resource {
        id: id.into(),
        name: name.into(),
        resource_type,
        status,
        quantity,
        allocated,
        location: location.into(),
        last_updated: last_updated.into(),
    }
}

pub fn resources() -> Vec<Resource> {
    vec![
        resource(
            "1",
            "Emergency Medical Kits",
            ResourceType::Medical,
            ResourceStatus::Low,
            25,
            18,
            "Central Storage",
            "5m ago",
        ),
        resource(
            "2",
            "Rescue Vehicles",
            ResourceType::Vehicle,
            ResourceStatus::Available,
            8,
            3,
            "North Station",
            "15m ago",
        ),
        resource(
            "3",
            "Water Supplies",
            ResourceType::Supplies,
            ResourceStatus::Critical,
            100,
            95,
            "South Warehouse",
            "1h ago",
        ),
        resource(
            "4",
            "Emergency Response Team",
            ResourceType::Personnel,
            ResourceStatus::InUse,
            45,
            38,
            "Multiple Locations",
            "30m ago",
        ),
    ]
}

/// Serves the built-in records.
pub struct SampleSource;

#[async_trait]
impl RecordSource for SampleSource {
    fn name(&self) -> String {
        "sample".to_string()
    }

    async fn load_alerts(&self) -> Result<Vec<EmergencyMessage>, DomainError> {
        Ok(alerts())
    }

    async fn load_channels(&self) -> Result<Vec<Channel>, DomainError> {
        Ok(channels())
    }

    async fn load_resources(&self) -> Result<Vec<Resource>, DomainError> {
        Ok(resources())
    }
}
