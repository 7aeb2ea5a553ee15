//src/events.rs
//! Change notifications for list views. Every successful collection write
//! publishes one event; subscribers re-fetch what they display.
use std::sync::mpsc::{channel, Receiver, Sender};
use strum_macros::{Display, EnumIter};

use crate::store::keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
    Exercises,
    Plans,
    Programs,
    Theme,
}

impl Collection {
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Exercises => keys::EXERCISES,
            Self::Plans => keys::PLANS,
            Self::Programs => keys::PROGRAMS,
            Self::Theme => keys::THEME,
        }
    }

    #[must_use]
    pub fn from_storage_key(key: &str) -> Option<Self> {
        match key {
            keys::EXERCISES => Some(Self::Exercises),
            keys::PLANS => Some(Self::Plans),
            keys::PROGRAMS => Some(Self::Programs),
            keys::THEME => Some(Self::Theme),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Updated(Collection),
    /// Every key was wiped.
    Cleared,
}

#[derive(Debug, Default)]
pub struct ChangeNotifier {
    subscribers: Vec<Sender<StoreEvent>>,
}

impl ChangeNotifier {
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Sends `event` to every live subscriber and drops the ones whose
    /// receiver is gone.
    pub fn publish(&mut self, event: StoreEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
        tracing::debug!(?event, subscribers = self.subscribers.len(), "published store event");
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
