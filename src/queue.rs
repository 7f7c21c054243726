use std::{cmp::Ordering, fmt, io, slice};

use crate::node::Node;

/// Ordering key of a node.
///
/// `a < b` when `a` has the lower priority, or the same priority and a
/// larger id (it was inserted later). The greatest rank is served first.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Rank {
    pub priority: i32,
    pub id: u64,
}

impl PartialEq for Rank {
    fn eq(&self, other: &Rank) -> bool {
        self.priority == other.priority && self.id == other.id
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Canonical queue order: priority descending, then id ascending.
///
/// `Ordering::Less` means `a` sits closer to the head than `b`. Every queue
/// sorts its nodes with this function.
pub fn compare_nodes<T>(a: &Node<T>, b: &Node<T>) -> Ordering {
    b.rank().cmp(&a.rank())
}

/// Common contract of the queues in this crate.
///
/// Implementers keep `nodes()` sorted by [`compare_nodes`] after every
/// mutation, so the head of the slice is always the next node to pop.
pub trait PriorityQueue<T> {
    /// Adds `value` with `priority`; capacity handling is up to the implementer.
    fn insert(&mut self, priority: i32, value: T);

    /// Removes the head value, or returns `None` when the queue is empty.
    fn pop(&mut self) -> Option<T>;

    /// All nodes, head first, i.e. in pop order.
    fn nodes(&self) -> &[Node<T>];

    fn len(&self) -> usize {
        self.nodes().len()
    }

    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    fn peek(&self) -> Option<&Node<T>> {
        self.nodes().first()
    }

    fn iter(&self) -> slice::Iter<'_, Node<T>> {
        self.nodes().iter()
    }

    /// Writes one line per node in queue order, or `Queue is empty`.
    fn print_queue(&self, out: &mut dyn io::Write) -> io::Result<()>
    where
        T: fmt::Display,
    {
        if self.is_empty() {
            return writeln!(out, "Queue is empty");
        }
        for node in self.iter() {
            writeln!(out, "{node}")?;
        }
        Ok(())
    }
}
