//! Detail overlay state machine.
//!
//! # Invariants
//! - At most one item is open; opening another item replaces it.
//! - Close and cancel are no-ops when already closed.

use crate::model::item::ItemId;
use serde::Serialize;

/// Detail overlay (lightbox / reading modal) state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum Overlay {
    #[default]
    Closed,
    Open(ItemId),
}

impl Overlay {
    /// Opens `id`, replacing any currently open item.
    pub fn open(&mut self, id: ItemId) {
        *self = Self::Open(id);
    }

    /// Explicit close action.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Escape key or click outside the overlay.
    pub fn cancel(&mut self) {
        self.close();
    }

    pub fn open_id(&self) -> Option<ItemId> {
        match self {
            Self::Closed => None,
            Self::Open(id) => Some(*id),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}
