//! Alert feed aggregate. Owns the emergency messages and is the boundary where
//! status writes are checked against the lifecycle.

use super::ensure_unique_ids;
use crate::domain::{AlertStatus, DomainError, EmergencyMessage, Priority};
use tracing::{debug, info, warn};

pub struct AlertFeed {
    alerts: Vec<EmergencyMessage>,
}

fn priority_rank(p: Priority) -> u8 {
    match p {
        Priority::High => 0,
        Priority::Medium => 1,
        Priority::Low => 2,
    }
}

impl AlertFeed {
    /// Builds the feed. Alert ids must be unique.
    pub fn new(alerts: Vec<EmergencyMessage>) -> Result<Self, DomainError> {
        ensure_unique_ids("alert", alerts.iter().map(|a| a.id.as_str()))?;
        Ok(Self { alerts })
    }

    pub fn alerts(&self) -> &[EmergencyMessage] {
        &self.alerts
    }

    pub fn get(&self, id: &str) -> Option<&EmergencyMessage> {
        self.alerts.iter().find(|a| a.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut EmergencyMessage, DomainError> {
        self.alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("alert {}", id)))
    }

    /// Highest priority first; feed order is kept within a priority.
    pub fn by_priority(&self) -> Vec<&EmergencyMessage> {
        let mut sorted: Vec<&EmergencyMessage> = self.alerts.iter().collect();
        sorted.sort_by_key(|a| priority_rank(a.priority));
        sorted
    }

    /// Alerts not yet resolved.
    pub fn open_count(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| !a.status.is_terminal())
            .count()
    }

    /// Set the status of one alert. A regression is rejected and the alert keeps its status.
    pub fn set_status(&mut self, id: &str, next: AlertStatus) -> Result<(), DomainError> {
        let alert = self.get_mut(id)?;
        let from = alert.status;
        match alert.advance_status(next) {
            Ok(()) => {
                info!(alert_id = id, %from, to = %next, "alert status updated");
                Ok(())
            }
            Err(e) => {
                warn!(alert_id = id, %from, to = %next, "rejected status regression");
                Err(e)
            }
        }
    }

    /// Step an alert one stage forward. Resolved alerts stay resolved.
    pub fn advance(&mut self, id: &str) -> Result<AlertStatus, DomainError> {
        let current = self.get_mut(id)?.status;
        match current.next() {
            Some(next) => {
                self.set_status(id, next)?;
                Ok(next)
            }
            None => {
                debug!(alert_id = id, "alert already resolved");
                Ok(current)
            }
        }
    }

    /// A responder joins the alert. Returns the new respondent count.
    /// Resolved alerts reject responders.
    pub fn respond(&mut self, id: &str) -> Result<u32, DomainError> {
        let alert = self.get_mut(id)?;
        if let Err(e) = alert.add_respondent() {
            warn!(alert_id = id, "respond on resolved alert rejected");
            return Err(e);
        }
        info!(alert_id = id, respondents = alert.respondents, "responder joined");
        Ok(alert.respondents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: &str, priority: Priority, status: AlertStatus) -> EmergencyMessage {
        EmergencyMessage {
            id: id.into(),
            priority,
            title: format!("alert {}", id),
            location: "Downtown District".into(),
            timestamp: "10:45 AM".into(),
            description: String::new(),
            status,
            respondents: 0,
        }
    }

    fn feed() -> AlertFeed {
        AlertFeed::new(vec![
            alert("a", Priority::Low, AlertStatus::New),
            alert("b", Priority::High, AlertStatus::InProgress),
            alert("c", Priority::Medium, AlertStatus::Resolved),
            alert("d", Priority::High, AlertStatus::New),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = AlertFeed::new(vec![
            alert("a", Priority::High, AlertStatus::New),
            alert("a", Priority::Low, AlertStatus::New),
        ])
        .err()
        .unwrap();
        assert!(matches!(err, DomainError::InvalidRecord(_)));
    }

    #[test]
    fn test_by_priority_is_stable() {
        let feed = feed();
        let ids: Vec<&str> = feed.by_priority().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "c", "a"]);
        assert_eq!(feed.open_count(), 3);
    }

    #[test]
    fn test_set_status_rejects_regression() {
        let mut feed = feed();
        let err = feed.set_status("b", AlertStatus::New).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        assert_eq!(feed.get("b").unwrap().status, AlertStatus::InProgress);

        feed.set_status("b", AlertStatus::Resolved).unwrap();
        assert_eq!(feed.open_count(), 2);
    }

    #[test]
    fn test_advance_walks_lifecycle() {
        let mut feed = feed();
        assert_eq!(feed.advance("a").unwrap(), AlertStatus::InProgress);
        assert_eq!(feed.advance("a").unwrap(), AlertStatus::Resolved);
        assert_eq!(feed.advance("a").unwrap(), AlertStatus::Resolved);
    }

    #[test]
    fn test_respond_and_unknown_id() {
        let mut feed = feed();
        assert_eq!(feed.respond("d").unwrap(), 1);
        assert_eq!(feed.respond("d").unwrap(), 2);
        assert!(matches!(feed.respond("zz"), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_respond_rejected_once_resolved() {
        let mut feed = feed();
        assert!(matches!(
            feed.respond("c"),
            Err(DomainError::InvalidRecord(_))
        ));
        assert_eq!(feed.get("c").unwrap().respondents, 0);
    }
}
