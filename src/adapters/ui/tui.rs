//! Implements InputPort. Inquire-based tab menu over the four screens.

use super::render::{alert_card, channel_row, map_screen, paint, resource_card, tab_bar};
use crate::domain::{Color, DomainError, Tab};
use crate::ports::InputPort;
use crate::usecases::{Desk, group_by_location};
use async_trait::async_trait;
use inquire::ui::{Color as UiColor, RenderConfig, Styled};
use inquire::{CustomType, InquireError, Select};
use tokio::sync::Mutex;
use tracing::{info, warn};

const ERROR_RED: Color = Color::from_hex(0xFF4B2B);

/// Applies the desk theme (blue prompt markers) to every inquire prompt.
pub fn apply_theme() {
    let blue = UiColor::Rgb {
        r: 0x2F,
        g: 0x80,
        b: 0xED,
    };
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("▶").with_fg(blue))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(blue));
    inquire::set_global_render_config(config);
}

/// Select one option. `None` when the user backs out (Esc / Ctrl-C).
fn pick(prompt: &str, options: Vec<String>) -> Result<Option<usize>, DomainError> {
    if options.is_empty() {
        return Ok(None);
    }
    match Select::new(prompt, options).raw_prompt() {
        Ok(choice) => Ok(Some(choice.index)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

fn ask_units(prompt: &str) -> Result<Option<u32>, DomainError> {
    match CustomType::<u32>::new(prompt)
        .with_error_message("Enter a whole number of units")
        .prompt()
    {
        Ok(n) => Ok(Some(n)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// Rejected actions are shown to the user and logged; they never end the session.
fn report(result: Result<(), DomainError>) {
    if let Err(e) = result {
        warn!(error = %e, "action rejected");
        println!("{}", paint(&e.to_string(), ERROR_RED));
    }
}

fn header(tab: Tab) {
    println!();
    println!("{}", tab_bar(tab));
    println!();
}

/// TUI adapter. Owns the desk for the lifetime of the session.
pub struct TuiInputPort {
    desk: Mutex<Desk>,
    badge_cap: Option<u32>,
}

impl TuiInputPort {
    pub fn new(desk: Desk, badge_cap: Option<u32>) -> Self {
        Self {
            desk: Mutex::new(desk),
            badge_cap,
        }
    }

    async fn emergencies(&self) -> Result<(), DomainError> {
        let mut desk = self.desk.lock().await;
        loop {
            header(Tab::Emergencies);
            println!("{} open alerts", desk.alerts.open_count());
            let ordered: Vec<(String, String)> = desk
                .alerts
                .by_priority()
                .into_iter()
                .map(|a| (a.id.clone(), a.title.clone()))
                .collect();
            for (id, _) in &ordered {
                if let Some(alert) = desk.alerts.get(id) {
                    println!("{}", alert_card(alert, desk.expansion.is_expanded(id)));
                }
            }

            let actions = ["Show / hide details", "Respond", "Advance status", "Back"];
            let Some(action) = pick("Action", actions.iter().map(|s| s.to_string()).collect())?
            else {
                return Ok(());
            };
            if action == 3 {
                return Ok(());
            }
            let titles = ordered.iter().map(|(_, t)| t.clone()).collect();
            let Some(i) = pick("Which alert?", titles)? else {
                continue;
            };
            let id = ordered[i].0.as_str();
            match action {
                0 => report(desk.toggle_alert(id).map(|_| ())),
                1 => report(desk.alerts.respond(id).map(|_| ())),
                _ => report(desk.alerts.advance(id).map(|_| ())),
            }
        }
    }

    async fn communications(&self) -> Result<(), DomainError> {
        let mut desk = self.desk.lock().await;
        loop {
            header(Tab::Communications);
            println!("{} unread", desk.channels.total_unread());
            for ch in desk.channels.channels() {
                println!("{}", channel_row(ch, self.badge_cap));
            }

            let mut options: Vec<String> = desk
                .channels
                .channels()
                .iter()
                .map(|c| format!("Open {}", c.name))
                .collect();
            options.push("Back".to_string());
            let back = options.len() - 1;
            match pick("Channel", options)? {
                Some(i) if i < back => {
                    let id = desk.channels.channels()[i].id.clone();
                    report(desk.channels.mark_read(&id));
                }
                _ => return Ok(()),
            }
        }
    }

    async fn resources(&self) -> Result<(), DomainError> {
        let mut desk = self.desk.lock().await;
        loop {
            header(Tab::Resources);
            for r in desk.resources.resources() {
                println!("{}", resource_card(r));
            }

            let actions = ["Allocate", "Release", "Back"];
            let Some(action) = pick("Action", actions.iter().map(|s| s.to_string()).collect())?
            else {
                return Ok(());
            };
            if action == 2 {
                return Ok(());
            }
            let names = desk
                .resources
                .resources()
                .iter()
                .map(|r| format!("{} ({} remaining)", r.name, r.remaining()))
                .collect();
            let Some(i) = pick("Which resource?", names)? else {
                continue;
            };
            let Some(units) = ask_units("Units:")? else {
                continue;
            };
            let id = desk.resources.resources()[i].id.clone();
            if action == 0 {
                report(desk.resources.allocate(&id, units).map(|_| ()));
            } else {
                report(desk.resources.release(&id, units).map(|_| ()));
            }
        }
    }

    async fn map(&self) -> Result<(), DomainError> {
        let desk = self.desk.lock().await;
        header(Tab::Map);
        let pins = group_by_location(desk.alerts.alerts(), desk.resources.resources());
        print!("{}", map_screen(&pins));
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let mut options: Vec<String> = Tab::ALL.iter().map(|t| t.title().to_string()).collect();
            options.push("Quit".to_string());
            let tab = match pick("Go to", options)? {
                Some(i) if i < Tab::ALL.len() => Tab::ALL[i],
                _ => break,
            };
            match tab {
                Tab::Emergencies => self.emergencies().await?,
                Tab::Communications => self.communications().await?,
                Tab::Resources => self.resources().await?,
                Tab::Map => self.map().await?,
            }
        }
        info!("session ended");
        Ok(())
    }
}
