//! Map screen model: alerts and resources grouped by location.

use crate::domain::{EmergencyMessage, Resource};
use std::collections::BTreeMap;

/// Everything sitting at one location.
#[derive(Debug, Default)]
pub struct LocationPins<'a> {
    pub alerts: Vec<&'a EmergencyMessage>,
    pub resources: Vec<&'a Resource>,
}

/// Location name -> pins, sorted by name.
pub fn group_by_location<'a>(
    alerts: &'a [EmergencyMessage],
    resources: &'a [Resource],
) -> BTreeMap<&'a str, LocationPins<'a>> {
    let mut pins: BTreeMap<&str, LocationPins> = BTreeMap::new();
    for a in alerts {
        pins.entry(a.location.as_str()).or_default().alerts.push(a);
    }
    for r in resources {
        pins.entry(r.location.as_str()).or_default().resources.push(r);
    }
    pins
}
