//! Domain status engine. Pure mappings from categorical fields to presentation descriptors.
//!
//! Every mapping is an exhaustive match over a closed enum. Raw category strings are
//! parsed into those enums at the source boundary, where unknown values fail with
//! `InvalidCategory`.

use super::entities::{AlertStatus, ChannelType, Priority, ResourceStatus, ResourceType};
use super::errors::DomainError;
use std::fmt;
use tracing::warn;

/// 24-bit RGB color. Displays as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const fn from_hex(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Ordered gradient (start, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPair {
    pub start: Color,
    pub end: Color,
}

impl ColorPair {
    pub const fn new(start: u32, end: u32) -> Self {
        Self {
            start: Color::from_hex(start),
            end: Color::from_hex(end),
        }
    }
}

/// Icon identifier understood by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconKey(&'static str);

impl IconKey {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Channel color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelDescriptor {
    pub colors: ColorPair,
    pub icon: IconKey,
}

pub fn priority_descriptor(priority: Priority) -> ColorPair {
    match priority {
        Priority::High => ColorPair::new(0xFF416C, 0xFF4B2B),
        Priority::Medium => ColorPair::new(0xF2994A, 0xF2C94C),
        Priority::Low => ColorPair::new(0x56CCF2, 0x2F80ED),
    }
}

/// Single status dot color (not a gradient).
pub fn status_color(status: AlertStatus) -> Color {
    match status {
        AlertStatus::New => Color::from_hex(0xFF4B2B),
        AlertStatus::InProgress => Color::from_hex(0xF2C94C),
        AlertStatus::Resolved => Color::from_hex(0x27AE60),
    }
}

pub fn channel_descriptor(channel_type: ChannelType) -> ChannelDescriptor {
    let (colors, icon) = match channel_type {
        ChannelType::Emergency => (ColorPair::new(0xFF416C, 0xFF4B2B), "warning-icon"),
        ChannelType::Team => (ColorPair::new(0x4776E6, 0x8E54E9), "people-icon"),
        ChannelType::General => (ColorPair::new(0x56CCF2, 0x2F80ED), "chat-icon"),
    };
    ChannelDescriptor {
        colors,
        icon: IconKey::new(icon),
    }
}

pub fn resource_descriptor(resource_type: ResourceType) -> IconKey {
    IconKey::new(match resource_type {
        ResourceType::Medical => "medical-bag",
        ResourceType::Vehicle => "truck-emergency",
        ResourceType::Supplies => "package-variant",
        ResourceType::Personnel => "account-group",
    })
}

pub fn resource_status_descriptor(status: ResourceStatus) -> ColorPair {
    match status {
        ResourceStatus::Available => ColorPair::new(0x27AE60, 0x219653),
        ResourceStatus::InUse => ColorPair::new(0xF2994A, 0xF2C94C),
        ResourceStatus::Low => ColorPair::new(0xFF9800, 0xF57C00),
        ResourceStatus::Critical => ColorPair::new(0xFF416C, 0xFF4B2B),
    }
}

/// `allocated / quantity`, clamped to [0, 1].
///
/// A zero total is an error rather than NaN/inf. Over-allocation is clamped and logged.
pub fn usage_fraction(allocated: u32, quantity: u32) -> Result<f64, DomainError> {
    if quantity == 0 {
        return Err(DomainError::DivisionByZero);
    }
    if allocated > quantity {
        warn!(
            allocated,
            quantity, "allocation exceeds total; clamping usage to 100%"
        );
    }
    let fraction = f64::from(allocated) / f64::from(quantity);
    Ok(fraction.clamp(0.0, 1.0))
}

/// Usage as a bar width in percent. Zero totals render as an empty bar.
pub fn usage_percent(allocated: u32, quantity: u32) -> f64 {
    match usage_fraction(allocated, quantity) {
        Ok(f) => f * 100.0,
        Err(e) => {
            warn!(allocated, quantity, error = %e, "usage bar rendered empty");
            0.0
        }
    }
}

/// Unread badge. `None` when there is nothing unread; the count is not capped.
pub fn badge_text(unread: u32) -> Option<String> {
    (unread > 0).then(|| unread.to_string())
}

/// Like [`badge_text`] but renders `"{cap}+"` above `cap` when one is configured.
pub fn badge_text_capped(unread: u32, cap: Option<u32>) -> Option<String> {
    match cap {
        Some(cap) if unread > cap => Some(format!("{}+", cap)),
        _ => badge_text(unread),
    }
}
