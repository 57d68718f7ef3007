//! Channel list aggregate: read/unread bookkeeping for messaging channels.

use super::ensure_unique_ids;
use crate::domain::{Channel, DomainError};
use tracing::{debug, info};

pub struct ChannelList {
    channels: Vec<Channel>,
}

impl ChannelList {
    /// Builds the list, rejecting channels without participants and repeated ids.
    pub fn new(channels: Vec<Channel>) -> Result<Self, DomainError> {
        for ch in &channels {
            ch.validate()?;
        }
        ensure_unique_ids("channel", channels.iter().map(|c| c.id.as_str()))?;
        Ok(Self { channels })
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn get(&self, id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Channel, DomainError> {
        self.channels
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("channel {}", id)))
    }

    pub fn total_unread(&self) -> u32 {
        self.channels
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.unread))
    }

    /// Opening a channel clears its badge.
    pub fn mark_read(&mut self, id: &str) -> Result<(), DomainError> {
        let ch = self.get_mut(id)?;
        debug!(channel_id = id, cleared = ch.unread, "channel marked read");
        ch.mark_read();
        Ok(())
    }

    pub fn receive(&mut self, id: &str, text: &str, time: &str) -> Result<u32, DomainError> {
        let ch = self.get_mut(id)?;
        ch.receive(text, time);
        info!(channel_id = id, unread = ch.unread, "message received");
        Ok(ch.unread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChannelType, LastMessage};

    fn channel(id: &str, unread: u32, participants: u32) -> Channel {
        Channel {
            id: id.into(),
            name: format!("channel {}", id),
            channel_type: ChannelType::Team,
            unread,
            last_message: Some(LastMessage {
                text: "Supply status updated".into(),
                time: "15m ago".into(),
            }),
            participants,
        }
    }

    #[test]
    fn test_rejects_empty_channel() {
        assert!(ChannelList::new(vec![channel("1", 0, 0)]).is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = ChannelList::new(vec![channel("1", 5, 24), channel("1", 2, 12)])
            .err()
            .unwrap();
        assert!(matches!(err, DomainError::InvalidRecord(_)));
    }

    #[test]
    fn test_unread_flow() {
        let mut list = ChannelList::new(vec![channel("1", 5, 24), channel("2", 2, 12)]).unwrap();
        assert_eq!(list.total_unread(), 7);

        list.mark_read("1").unwrap();
        assert_eq!(list.get("1").unwrap().unread, 0);
        assert_eq!(list.total_unread(), 2);

        assert_eq!(list.receive("1", "Team A deployed", "now").unwrap(), 1);
        assert_eq!(
            list.get("1").unwrap().last_message.as_ref().unwrap().text,
            "Team A deployed"
        );
        assert!(list.mark_read("9").is_err());
    }
}
