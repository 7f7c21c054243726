//! A size-bounded priority queue.
//!
//! Values are served highest priority first, ties in insertion order. Once
//! the queue holds `max_size` nodes, a new value only gets in by evicting the
//! lowest ranked node, and only when its priority is strictly greater.
//!
//! ```
//! use bounded_priority_queue::{BoundedPriorityQueue, PriorityQueue};
//!
//! let mut queue = BoundedPriorityQueue::with_max_size(3);
//! queue.insert(10, 100);
//! queue.insert(5, 50);
//! queue.insert(20, 200);
//! queue.insert(15, 150);
//!
//! assert_eq!(queue.pop(), Some(200));
//! assert_eq!(queue.pop(), Some(150));
//! assert_eq!(queue.pop(), Some(100));
//! assert_eq!(queue.pop(), None);
//! ```
//!
//! The queue is single threaded; wrap it in a lock to share it.

mod bounded_queue;
mod config;
mod error;
mod logger;
mod node;
mod queue;

pub use bounded_queue::BoundedPriorityQueue;
pub use config::{QueueConfig, DEFAULT_MAX_SIZE};
pub use error::{ConfigError, Result};
pub use node::Node;
pub use queue::{compare_nodes, PriorityQueue, Rank};
