use std::{fmt, mem};

use serde::Serialize;

use crate::{
    config::QueueConfig,
    logger,
    node::Node,
    queue::{compare_nodes, PriorityQueue},
};

/// A priority queue that keeps at most `max_size` nodes.
///
/// At capacity, an insert replaces the lowest ranked node only when its
/// priority is strictly greater; otherwise it is dropped. Ties therefore
/// favour the node that is already queued.
#[derive(Debug, Clone, Serialize)]
pub struct BoundedPriorityQueue<T> {
    max_size: usize,
    nodes: Vec<Node<T>>,
    #[serde(skip)]
    next_id: u64,
}

impl<T> Default for BoundedPriorityQueue<T> {
    fn default() -> Self {
        Self::with_config(QueueConfig::default())
    }
}

impl<T> BoundedPriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self::with_config(QueueConfig::new(max_size))
    }

    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            max_size: config.max_size,
            nodes: Vec::with_capacity(config.prealloc()),
            next_id: 1,
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Changes the capacity, dropping the lowest ranked nodes that no longer fit.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size;
        if self.nodes.len() > max_size {
            let dropped = self.nodes.len() - max_size;
            self.nodes.truncate(max_size);
            logger::log_debug(&format!(
                "max size set to {max_size}, dropped {dropped} nodes"
            ));
        }
    }

    pub fn is_full(&self) -> bool {
        self.nodes.len() >= self.max_size
    }

    /// Removes every node. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Like [`PriorityQueue::pop`], but yields `T::default()` on an empty queue.
    ///
    /// A default value is indistinguishable from a queued one, so check
    /// `is_empty()` first when that matters.
    pub fn pop_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.pop().unwrap_or_default()
    }

    pub fn contains(&self, priority: i32, value: &T) -> bool
    where
        T: PartialEq + fmt::Display,
    {
        match self
            .nodes
            .iter()
            .find(|node| node.priority() == priority && node.value() == value)
        {
            Some(node) => {
                logger::log_notice(&format!("Element found: {node}"));
                true
            }
            None => {
                logger::log_notice("Element not found");
                false
            }
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn sort(&mut self) {
        self.nodes.sort_by(compare_nodes);
    }
}

impl<T> PriorityQueue<T> for BoundedPriorityQueue<T> {
    fn insert(&mut self, priority: i32, value: T) {
        if self.nodes.len() < self.max_size {
            let id = self.next_id();
            self.nodes.push(Node::new(priority, value, id));
            self.sort();
            return;
        }

        let evict = matches!(self.nodes.last(), Some(min) if priority > min.priority());
        if !evict {
            return;
        }
        let node = Node::new(priority, value, self.next_id());
        if let Some(min) = self.nodes.last_mut() {
            let evicted = mem::replace(min, node);
            logger::log_debug(&format!(
                "evicted node {} with priority {}",
                evicted.id(),
                evicted.priority()
            ));
        }
        self.sort();
    }

    fn pop(&mut self) -> Option<T> {
        if self.nodes.is_empty() {
            logger::log_notice("Queue is empty");
            return None;
        }
        Some(self.nodes.remove(0).into_value())
    }

    fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }
}
