use crate::{Block, BlockEvent, BlockKind, BlockPatch, EventType};
use ulid::Ulid;

/// What a drag gesture reported when it ended
///
/// A missing destination means the drop landed outside any valid target and
/// the gesture is treated as cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    pub source: usize,
    pub destination: Option<usize>,
}

impl DragOutcome {
    pub fn dropped(source: usize, destination: usize) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    pub fn cancelled(source: usize) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Ordered list of blocks owned by one editing session
#[derive(Debug, Clone, Default)]
pub struct BlockList {
    /// Blocks in rendering order
    blocks: Vec<Block>,

    /// Event log for history tracking
    events: Vec<BlockEvent>,
}

impl BlockList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Mutations ==========

    /// Append a new block of `kind` seeded with its defaults
    pub fn add(&mut self, kind: BlockKind) -> Ulid {
        let block = Block::new(kind);
        let id = block.id;
        let index = self.blocks.len();

        self.blocks.push(block);
        log::debug!("added {:?} block {} at {}", kind, id, index);
        self.log_event(EventType::BlockAdded { id, kind, index });

        id
    }

    /// Merge `patch` into the block with `id`
    ///
    /// Returns `false` without touching anything when no block matches.
    pub fn update(&mut self, id: Ulid, patch: BlockPatch) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) else {
            log::debug!("update ignored, no block {}", id);
            return false;
        };

        let fields = patch
            .changed_fields()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        block.apply(patch);

        log::trace!("updated block {}: {:?}", id, fields);
        self.log_event(EventType::BlockUpdated { id, fields });

        true
    }

    /// Remove the block with `id`
    ///
    /// Returns `false` when no block matches.
    pub fn delete(&mut self, id: Ulid) -> bool {
        let Some(index) = self.position(id) else {
            log::debug!("delete ignored, no block {}", id);
            return false;
        };

        self.blocks.remove(index);
        log::debug!("deleted block {} from {}", id, index);
        self.log_event(EventType::BlockDeleted { id, index });

        true
    }

    /// Move the block at `from` to `to`, shifting the blocks in between
    ///
    /// A missing or out-of-range destination leaves the list untouched, as
    /// does an out-of-range source. Returns whether anything moved.
    pub fn reorder(&mut self, from: usize, to: Option<usize>) -> bool {
        let Some(to) = to else {
            log::debug!("reorder from {} cancelled, no destination", from);
            return false;
        };
        let len = self.blocks.len();
        if from >= len || to >= len {
            log::debug!("reorder {} -> {} out of range for {} blocks", from, to, len);
            return false;
        }
        if from == to {
            return false;
        }

        let block = self.blocks.remove(from);
        let id = block.id;
        self.blocks.insert(to, block);

        log::debug!("moved block {} from {} to {}", id, from, to);
        self.log_event(EventType::BlockMoved { id, from, to });

        true
    }

    /// Apply a finished drag gesture
    pub fn apply_drag(&mut self, outcome: DragOutcome) -> bool {
        self.reorder(outcome.source, outcome.destination)
    }

    // ========== Queries ==========

    /// All blocks in rendering order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Get a block by ID
    pub fn get(&self, id: Ulid) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Index of the block with `id`
    pub fn position(&self, id: Ulid) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    // ========== Event Logging ==========

    fn log_event(&mut self, event: EventType) {
        self.events.push(BlockEvent::new(event));
    }

    /// Get all events
    pub fn events(&self) -> &[BlockEvent] {
        &self.events
    }

    /// Clear event log
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}
