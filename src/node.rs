use std::fmt;

use serde::Serialize;

use crate::queue::Rank;

/// A value stored in a queue together with its priority and insertion id.
///
/// The id is handed out by the owning queue and is never changed afterwards;
/// it only exists to order nodes of equal priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node<T> {
    priority: i32,
    value: T,
    id: u64,
}

impl<T> Node<T> {
    pub fn new(priority: i32, value: T, id: u64) -> Self {
        Self {
            priority,
            value,
            id,
        }
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Ordering key of this node, see [`Rank`].
    pub fn rank(&self) -> Rank {
        Rank {
            priority: self.priority,
            id: self.id,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Priority: {}, Value: {}, ID: {}",
            self.priority, self.value, self.id
        )
    }
}
