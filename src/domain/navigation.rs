//! Tab bar descriptors: which icon each tab shows and its tint.

use super::descriptors::{Color, IconKey};

/// Top-level screens of the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Emergencies,
    Communications,
    Resources,
    Map,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Emergencies, Tab::Communications, Tab::Resources, Tab::Map];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Emergencies => "Emergencies",
            Tab::Communications => "Communications",
            Tab::Resources => "Resources",
            Tab::Map => "Map",
        }
    }
}

pub const ACTIVE_TINT: Color = Color::from_hex(0x2F80ED);
pub const INACTIVE_TINT: Color = Color::from_hex(0x808080);

/// Focused tabs use the filled glyph, the rest the outline variant.
pub fn tab_icon(tab: Tab, focused: bool) -> IconKey {
    let key = match (tab, focused) {
        (Tab::Emergencies, true) => "warning",
        (Tab::Emergencies, false) => "warning-outline",
        (Tab::Communications, true) => "chatbubbles",
        (Tab::Communications, false) => "chatbubbles-outline",
        (Tab::Resources, true) => "cube",
        (Tab::Resources, false) => "cube-outline",
        (Tab::Map, true) => "map",
        (Tab::Map, false) => "map-outline",
    };
    IconKey::new(key)
}

pub fn tab_tint(focused: bool) -> Color {
    if focused { ACTIVE_TINT } else { INACTIVE_TINT }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_variant_when_unfocused() {
        for tab in Tab::ALL {
            let focused = tab_icon(tab, true).as_str();
            let idle = tab_icon(tab, false).as_str();
            assert_eq!(idle, format!("{}-outline", focused));
        }
        assert_eq!(tab_icon(Tab::Resources, true).as_str(), "cube");
    }

    #[test]
    fn test_tint() {
        assert_eq!(tab_tint(true).to_string(), "#2F80ED");
        assert_eq!(tab_tint(false).to_string(), "#808080");
    }
}
