//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the status engine and navigation descriptors live here. Dependencies flow inward.

pub mod descriptors;
pub mod entities;
pub mod errors;
pub mod navigation;

pub use descriptors::{
    ChannelDescriptor, Color, ColorPair, IconKey, badge_text, badge_text_capped,
    channel_descriptor, priority_descriptor, resource_descriptor, resource_status_descriptor,
    status_color, usage_fraction, usage_percent,
};
pub use entities::{
    AlertStatus, Channel, ChannelType, EmergencyMessage, LastMessage, Priority, Resource,
    ResourceStatus, ResourceType,
};
pub use errors::DomainError;
pub use navigation::{Tab, tab_icon, tab_tint};
