use crate::BlockKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A store mutation with timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockEvent {
    pub timestamp: DateTime<Utc>,
    pub event: EventType,
}

impl BlockEvent {
    /// Create a new event with the current timestamp
    pub fn new(event: EventType) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Mutations the block list can undergo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    BlockAdded {
        id: Ulid,
        kind: BlockKind,
        index: usize,
    },

    BlockUpdated {
        id: Ulid,
        fields: Vec<String>,
    },

    BlockDeleted {
        id: Ulid,
        index: usize,
    },

    BlockMoved {
        id: Ulid,
        from: usize,
        to: usize,
    },
}

impl EventType {
    /// The block the event is about
    pub fn block_id(&self) -> Ulid {
        match self {
            EventType::BlockAdded { id, .. }
            | EventType::BlockUpdated { id, .. }
            | EventType::BlockDeleted { id, .. }
            | EventType::BlockMoved { id, .. } => *id,
        }
    }
}
