//! Selection bookkeeping.
//!
//! Each selected identifier carries the sequence number it was selected
//! with. Sequence numbers only grow, so a larger number always means a
//! more recent selection, including after deselect/reselect.
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct Selection {
    order: HashMap<String, u64>,
    next_seq: u64,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns `true` if it is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.order.remove(id).is_some() {
            return false;
        }
        self.next_seq += 1;
        self.order.insert(id.to_string(), self.next_seq);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.order.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sequence number `id` was selected with, if selected.
    pub fn sequence(&self, id: &str) -> Option<u64> {
        self.order.get(id).copied()
    }
}
