//! Welcome banner: "RESPONSE DESK" in figlet's standard font, painted with the
//! LOW-priority gradient (#56CCF2 -> #2F80ED).

use crate::domain::{Priority, priority_descriptor};
use crossterm::ExecutableCommand;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};
use tracing::debug;

use super::render::gradient_stop;

const TITLE: &str = "RESPONSE DESK";

/// Banner lines, or the plain title when the font cannot render.
fn banner_lines() -> Vec<String> {
    let art = match FIGfont::standard() {
        Ok(font) => font.convert(TITLE).map(|figure| figure.to_string()),
        Err(_) => None,
    };
    match art {
        Some(art) => art.lines().map(str::to_string).collect(),
        None => {
            debug!("figlet font unavailable; plain banner");
            vec![TITLE.to_string()]
        }
    }
}

/// Prints the banner top-to-bottom along the gradient, then the version line.
pub fn print_welcome() {
    let mut out = stdout();
    let pair = priority_descriptor(Priority::Low);
    let lines = banner_lines();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let _ = out.execute(SetForegroundColor(gradient_stop(pair, i, total)));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(gradient_stop(pair, total - 1, total)));
    let _ = out.execute(Print(format!("v{}  emergency coordination\r\n", version)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_has_lines() {
        let lines = banner_lines();
        assert!(!lines.is_empty());
        assert!(lines.iter().any(|l| !l.trim().is_empty()));
    }
}
