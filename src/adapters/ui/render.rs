//! Screen rendering. Turns records + descriptors into ANSI-colored text blocks.
//!
//! Pure string building; the TUI loop decides when to print.

use crate::domain::{
    AlertStatus, Channel, Color, ColorPair, EmergencyMessage, Resource, Tab, badge_text_capped,
    channel_descriptor, priority_descriptor, resource_descriptor, resource_status_descriptor,
    status_color, tab_icon, tab_tint, usage_percent,
};
use crate::usecases::LocationPins;
use crossterm::style::{Color as TermColor, Stylize};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Width of the resource usage bar, in cells.
const BAR_WIDTH: usize = 24;
const MUTED: Color = Color::from_hex(0x666666);
const ACTION: Color = Color::from_hex(0x2F80ED);

fn term(color: Color) -> TermColor {
    let (r, g, b) = color.rgb();
    TermColor::Rgb { r, g, b }
}

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

pub fn paint(text: &str, color: Color) -> String {
    text.with(term(color)).to_string()
}

/// Color stop for position `i` of `total` along a gradient.
pub fn gradient_stop(pair: ColorPair, i: usize, total: usize) -> TermColor {
    let t = if total <= 1 {
        0.0
    } else {
        i as f64 / (total - 1) as f64
    };
    let (r, g, b) = lerp_rgb(pair.start.rgb(), pair.end.rgb(), t);
    TermColor::Rgb { r, g, b }
}

/// Badge: white bold text on a left-to-right background gradient.
pub fn gradient_badge(text: &str, pair: ColorPair) -> String {
    let padded = format!(" {} ", text);
    let total = padded.chars().count();
    padded
        .chars()
        .enumerate()
        .map(|(i, c)| {
            c.to_string()
                .white()
                .bold()
                .on(gradient_stop(pair, i, total))
                .to_string()
        })
        .collect()
}

pub fn tab_bar(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|&tab| {
            let focused = tab == active;
            let label = format!("[{}] {}", tab_icon(tab, focused), tab.title());
            if focused {
                label.with(term(tab_tint(true))).bold().to_string()
            } else {
                paint(&label, tab_tint(false))
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn alert_card(alert: &EmergencyMessage, expanded: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}",
        gradient_badge(alert.priority.as_str(), priority_descriptor(alert.priority)),
        paint(&alert.timestamp, MUTED)
    );
    let _ = writeln!(out, "{}", alert.title.as_str().bold());
    let _ = writeln!(out, "{}", paint(&format!("@ {}", alert.location), MUTED));
    if expanded {
        let _ = writeln!(out, "  {}", alert.description);
        let _ = writeln!(
            out,
            "  {} {}    {} Responding",
            "●".with(term(status_color(alert.status))),
            alert.status.label(),
            alert.respondents
        );
    }
    if alert.status != AlertStatus::Resolved {
        let _ = writeln!(out, "{}", paint("[RESPOND]", ACTION));
    }
    out
}

pub fn channel_row(channel: &Channel, badge_cap: Option<u32>) -> String {
    let desc = channel_descriptor(channel.channel_type);
    let mut out = String::new();
    let _ = write!(
        out,
        "{} {}",
        gradient_badge(desc.icon.as_str(), desc.colors),
        channel.name.as_str().bold()
    );
    if let Some(badge) = badge_text_capped(channel.unread, badge_cap) {
        let _ = write!(out, "  {}", badge.white().bold().on(term(ACTION)));
    }
    out.push('\n');
    if let Some(last) = &channel.last_message {
        let _ = writeln!(out, "  {}  {}", last.text, paint(&last.time, MUTED));
    }
    let _ = writeln!(
        out,
        "{}",
        paint(&format!("  {} participants", channel.participants), MUTED)
    );
    out
}

/// Filled cells for a usage bar of `width` cells.
pub fn bar_cells(allocated: u32, quantity: u32, width: usize) -> usize {
    let pct = usage_percent(allocated, quantity);
    ((pct / 100.0) * width as f64).round() as usize
}

pub fn resource_card(resource: &Resource) -> String {
    let colors = resource_status_descriptor(resource.status);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] {}  {}",
        resource_descriptor(resource.resource_type),
        resource.name.as_str().bold(),
        gradient_badge(resource.status.as_str(), colors)
    );
    let _ = writeln!(out, "{}", paint(&format!("@ {}", resource.location), MUTED));
    let _ = writeln!(
        out,
        "Available {:<8} Allocated {}",
        resource.quantity, resource.allocated
    );
    let filled = bar_cells(resource.allocated, resource.quantity, BAR_WIDTH);
    let _ = writeln!(
        out,
        "{}{}  {}",
        "█".repeat(filled).with(term(colors.start)),
        paint(&"░".repeat(BAR_WIDTH - filled), MUTED),
        paint(&format!("Updated {}", resource.last_updated), MUTED)
    );
    out
}

pub fn map_screen(pins: &BTreeMap<&str, LocationPins<'_>>) -> String {
    let mut out = String::new();
    for (location, here) in pins {
        let _ = writeln!(out, "{}", format!("◉ {}", location).bold());
        for a in &here.alerts {
            let _ = writeln!(
                out,
                "    {} {}",
                "●".with(term(priority_descriptor(a.priority).start)),
                a.title
            );
        }
        for r in &here.resources {
            let _ = writeln!(
                out,
                "    [{}] {} ({}/{})",
                resource_descriptor(r.resource_type),
                r.name,
                r.allocated,
                r.quantity
            );
        }
    }
    out
}
