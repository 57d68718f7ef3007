//! Domain entities. Pure data structures for the response desk.
//!
//! No terminal/IO types here. Presentation state (expanded cards) lives in
//! `usecases::view_state`, never on the records.

use super::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed category enum with a fixed wire name per variant.
///
/// Parsing an unknown name yields `DomainError::InvalidCategory` tagged with `$field`.
/// Serde goes through the same parser, so fixtures get the same error.
macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(DomainError::invalid_category($field, other)),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> String {
                v.as_str().to_string()
            }
        }
    };
}

category! {
    /// Alert urgency. Fixed at creation.
    Priority, "priority" {
        High => "HIGH",
        Medium => "MEDIUM",
        Low => "LOW",
    }
}

category! {
    /// Alert lifecycle: NEW -> IN_PROGRESS -> RESOLVED.
    AlertStatus, "status" {
        New => "NEW",
        InProgress => "IN_PROGRESS",
        Resolved => "RESOLVED",
    }
}

category! {
    ChannelType, "type" {
        Emergency => "EMERGENCY",
        Team => "TEAM",
        General => "GENERAL",
    }
}

category! {
    ResourceType, "type" {
        Medical => "MEDICAL",
        Vehicle => "VEHICLE",
        Supplies => "SUPPLIES",
        Personnel => "PERSONNEL",
    }
}

category! {
    /// Stored independently of the allocation ratio. See `Resource::status_disagrees_with_usage`.
    ResourceStatus, "status" {
        Available => "AVAILABLE",
        InUse => "IN_USE",
        Low => "LOW",
        Critical => "CRITICAL",
    }
}

impl AlertStatus {
    fn rank(self) -> u8 {
        match self {
            AlertStatus::New => 0,
            AlertStatus::InProgress => 1,
            AlertStatus::Resolved => 2,
        }
    }

    /// Forward moves (including NEW -> RESOLVED) and same-state writes are allowed.
    pub fn can_advance_to(self, next: AlertStatus) -> bool {
        next.rank() >= self.rank()
    }

    /// Next step in the lifecycle, `None` once resolved.
    pub fn next(self) -> Option<AlertStatus> {
        match self {
            AlertStatus::New => Some(AlertStatus::InProgress),
            AlertStatus::InProgress => Some(AlertStatus::Resolved),
            AlertStatus::Resolved => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == AlertStatus::Resolved
    }

    /// Human label: `IN_PROGRESS` -> `IN PROGRESS`.
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }
}

/// An emergency alert on the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyMessage {
    pub id: String,
    pub priority: Priority,
    pub title: String,
    pub location: String,
    pub timestamp: String,
    pub description: String,
    pub status: AlertStatus,
    pub respondents: u32,
}

impl EmergencyMessage {
    /// Move the alert forward. Regressions are rejected and leave the record untouched.
    pub fn advance_status(&mut self, next: AlertStatus) -> Result<(), DomainError> {
        if !self.status.can_advance_to(next) {
            return Err(DomainError::InvalidTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }

    /// A responder joins. Resolved alerts take no further responders.
    pub fn add_respondent(&mut self) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::InvalidRecord(format!(
                "alert {} is resolved; no further responders",
                self.id
            )));
        }
        self.respondents = self.respondents.saturating_add(1);
        Ok(())
    }
}

/// Latest message preview. Text and time only ever travel together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastMessage {
    pub text: String,
    pub time: String,
}

/// A messaging channel.
///
/// On the wire the preview is flat (`lastMessage` + `lastMessageTime`); a half-filled
/// pair is rejected with `InvalidRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ChannelRow", into = "ChannelRow")]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub channel_type: ChannelType,
    pub unread: u32,
    pub last_message: Option<LastMessage>,
    pub participants: u32,
}

/// Flat wire shape of a [`Channel`].
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRow {
    id: String,
    name: String,
    #[serde(rename = "type")]
    channel_type: ChannelType,
    #[serde(default)]
    unread: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_message_time: Option<String>,
    participants: u32,
}

impl TryFrom<ChannelRow> for Channel {
    type Error = DomainError;

    fn try_from(row: ChannelRow) -> Result<Self, Self::Error> {
        let last_message = match (row.last_message, row.last_message_time) {
            (Some(text), Some(time)) => Some(LastMessage { text, time }),
            (None, None) => None,
            _ => {
                return Err(DomainError::InvalidRecord(format!(
                    "channel {}: lastMessage and lastMessageTime must be set together",
                    row.id
                )));
            }
        };
        Ok(Channel {
            id: row.id,
            name: row.name,
            channel_type: row.channel_type,
            unread: row.unread,
            last_message,
            participants: row.participants,
        })
    }
}

impl From<Channel> for ChannelRow {
    fn from(ch: Channel) -> Self {
        let (last_message, last_message_time) = match ch.last_message {
            Some(LastMessage { text, time }) => (Some(text), Some(time)),
            None => (None, None),
        };
        ChannelRow {
            id: ch.id,
            name: ch.name,
            channel_type: ch.channel_type,
            unread: ch.unread,
            last_message,
            last_message_time,
            participants: ch.participants,
        }
    }
}

impl Channel {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.participants == 0 {
            return Err(DomainError::InvalidRecord(format!(
                "channel {} has no participants",
                self.id
            )));
        }
        Ok(())
    }

    pub fn mark_read(&mut self) {
        self.unread = 0;
    }

    /// Record an incoming message: bumps the unread count and replaces the preview.
    pub fn receive(&mut self, text: impl Into<String>, time: impl Into<String>) {
        self.unread = self.unread.saturating_add(1);
        self.last_message = Some(LastMessage {
            text: text.into(),
            time: time.into(),
        });
    }
}

/// An inventory line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub status: ResourceStatus,
    pub quantity: u32,
    pub allocated: u32,
    pub location: String,
    pub last_updated: String,
}

impl Resource {
    /// Checks `quantity > 0` and `allocated <= quantity`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.quantity == 0 {
            return Err(DomainError::InvalidRecord(format!(
                "resource {} has zero quantity",
                self.id
            )));
        }
        if self.allocated > self.quantity {
            return Err(DomainError::InvalidRecord(format!(
                "resource {} allocates {} of {}",
                self.id, self.allocated, self.quantity
            )));
        }
        Ok(())
    }

    pub fn remaining(&self) -> u32 {
        self.quantity.saturating_sub(self.allocated)
    }

    /// Allocate `units` more. Fails without mutating if it would exceed the total.
    pub fn allocate(&mut self, units: u32) -> Result<(), DomainError> {
        match self.allocated.checked_add(units) {
            Some(total) if total <= self.quantity => {
                self.allocated = total;
                Ok(())
            }
            _ => Err(DomainError::InvalidRecord(format!(
                "cannot allocate {} of {}: only {} remaining",
                units,
                self.name,
                self.remaining()
            ))),
        }
    }

    /// Return `units` to the pool. Never goes below zero.
    pub fn release(&mut self, units: u32) {
        self.allocated = self.allocated.saturating_sub(units);
    }

    pub fn usage_fraction(&self) -> Result<f64, DomainError> {
        super::descriptors::usage_fraction(self.allocated, self.quantity)
    }

    /// Diagnostic only: flags labels that plainly contradict the usage bar.
    ///
    /// LOW/CRITICAL under half usage, or AVAILABLE when fully allocated.
    /// The stored status is never rewritten.
    pub fn status_disagrees_with_usage(&self) -> bool {
        let Ok(usage) = self.usage_fraction() else {
            return false;
        };
        match self.status {
            ResourceStatus::Low | ResourceStatus::Critical => usage < 0.5,
            ResourceStatus::Available => usage >= 1.0,
            ResourceStatus::InUse => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Resource {
        Resource {
            id: "3".into(),
            name: "Water Supplies".into(),
            resource_type: ResourceType::Supplies,
            status: ResourceStatus::Critical,
            quantity: 100,
            allocated: 95,
            location: "South Warehouse".into(),
            last_updated: "1h ago".into(),
        }
    }

    fn flood_alert() -> EmergencyMessage {
        EmergencyMessage {
            id: "flood".into(),
            priority: Priority::High,
            title: "Flash Flood Warning".into(),
            location: "Downtown District".into(),
            timestamp: "10:45 AM".into(),
            description: "Multiple streets flooded.".into(),
            status: AlertStatus::New,
            respondents: 8,
        }
    }

    #[test]
    fn test_category_names_parse_back() {
        for p in Priority::ALL {
            assert_eq!(p.as_str().parse::<Priority>().unwrap(), *p);
        }
        for s in AlertStatus::ALL {
            assert_eq!(s.as_str().parse::<AlertStatus>().unwrap(), *s);
        }
        for t in ChannelType::ALL {
            assert_eq!(t.as_str().parse::<ChannelType>().unwrap(), *t);
        }
        for t in ResourceType::ALL {
            assert_eq!(t.as_str().parse::<ResourceType>().unwrap(), *t);
        }
        for s in ResourceStatus::ALL {
            assert_eq!(s.as_str().parse::<ResourceStatus>().unwrap(), *s);
        }
    }

    #[test]
    fn test_unknown_category_is_invalid() {
        let err = "URGENT".parse::<Priority>().unwrap_err();
        assert_eq!(err, DomainError::invalid_category("priority", "URGENT"));
        // Case matters: wire names are upper snake case.
        assert!("high".parse::<Priority>().is_err());
    }

    #[test]
    fn test_serde_rejects_unknown_category() {
        let json = r#"{"id":"1","priority":"SEVERE","title":"t","location":"l",
            "timestamp":"now","description":"d","status":"NEW","respondents":0}"#;
        let err = serde_json::from_str::<EmergencyMessage>(json).unwrap_err();
        assert!(err.to_string().contains("SEVERE"));
    }

    #[test]
    fn test_status_advances_forward_only() {
        let mut alert = flood_alert();
        alert.advance_status(AlertStatus::InProgress).unwrap();
        assert_eq!(alert.status, AlertStatus::InProgress);

        let err = alert.advance_status(AlertStatus::New).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        assert_eq!(alert.status, AlertStatus::InProgress);

        alert.advance_status(AlertStatus::Resolved).unwrap();
        assert!(alert.status.is_terminal());
        assert_eq!(alert.status.next(), None);
    }

    #[test]
    fn test_status_may_skip_to_resolved() {
        let mut alert = flood_alert();
        alert.advance_status(AlertStatus::Resolved).unwrap();
        assert_eq!(alert.status, AlertStatus::Resolved);
    }

    #[test]
    fn test_resolved_alert_takes_no_responders() {
        let mut alert = flood_alert();
        alert.add_respondent().unwrap();
        assert_eq!(alert.respondents, 9);

        alert.advance_status(AlertStatus::Resolved).unwrap();
        assert!(alert.add_respondent().is_err());
        assert_eq!(alert.respondents, 9);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(AlertStatus::InProgress.label(), "IN PROGRESS");
        assert_eq!(AlertStatus::New.label(), "NEW");
    }

    #[test]
    fn test_allocate_respects_quantity() {
        let mut r = water();
        r.allocate(5).unwrap();
        assert_eq!(r.allocated, 100);
        assert!(r.allocate(1).is_err());
        assert_eq!(r.allocated, 100);

        r.release(200);
        assert_eq!(r.allocated, 0);
    }

    #[test]
    fn test_validate_resource() {
        assert!(water().validate().is_ok());

        let mut empty = water();
        empty.quantity = 0;
        empty.allocated = 0;
        assert!(matches!(empty.validate(), Err(DomainError::InvalidRecord(_))));

        let mut over = water();
        over.allocated = 101;
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_status_disagreement() {
        assert!(!water().status_disagrees_with_usage());

        let mut calm = water();
        calm.allocated = 10;
        assert!(calm.status_disagrees_with_usage());
        // Stored status untouched.
        assert_eq!(calm.status, ResourceStatus::Critical);
    }

    #[test]
    fn test_channel_read_and_receive() {
        let mut ch = Channel {
            id: "3".into(),
            name: "General Updates".into(),
            channel_type: ChannelType::General,
            unread: 0,
            last_message: None,
            participants: 156,
        };
        ch.receive("Weather forecast for tomorrow", "1h ago");
        ch.receive("Roads reopened", "just now");
        assert_eq!(ch.unread, 2);
        let last = ch.last_message.as_ref().unwrap();
        assert_eq!(last.text, "Roads reopened");
        assert_eq!(last.time, "just now");

        ch.mark_read();
        assert_eq!(ch.unread, 0);

        ch.participants = 0;
        assert!(ch.validate().is_err());
    }

    #[test]
    fn test_channel_wire_shape_is_flat() {
        let json = r#"{"id":"2","name":"Medical Team Alpha","type":"TEAM","unread":2,
            "lastMessage":"Supply status updated","lastMessageTime":"15m ago","participants":12}"#;
        let ch: Channel = serde_json::from_str(json).unwrap();
        let last = ch.last_message.clone().unwrap();
        assert_eq!(last.text, "Supply status updated");
        assert_eq!(last.time, "15m ago");

        let value = serde_json::to_value(&ch).unwrap();
        assert_eq!(value["lastMessage"], "Supply status updated");
        assert_eq!(value["lastMessageTime"], "15m ago");
        assert_eq!(value["type"], "TEAM");
        assert_eq!(serde_json::from_value::<Channel>(value).unwrap(), ch);
    }

    #[test]
    fn test_channel_unpaired_preview_rejected() {
        let json = r#"{"id":"1","name":"Ops","type":"TEAM","lastMessage":"hello","participants":3}"#;
        let err = serde_json::from_str::<Channel>(json).unwrap_err();
        assert!(err.to_string().contains("must be set together"));

        let quiet = r#"{"id":"1","name":"Ops","type":"TEAM","participants":3}"#;
        let ch: Channel = serde_json::from_str(quiet).unwrap();
        assert!(ch.last_message.is_none());
        assert_eq!(ch.unread, 0);
    }
}
