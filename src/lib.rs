//! A singly-linked queue of owned strings.
//!
//! [`TextQueue`] accepts values at either end and hands them back from the front, so it serves as a FIFO queue
//! (push back, remove front) or a LIFO stack (push front, remove front). It can also reverse itself in place.
//!
//! Every inserted value is copied into storage owned by the queue. Values leave the queue either as an owned [`String`]
//! through [`TextQueue::pop_front`], or copied into a caller-owned, NUL-terminated byte buffer through [`TextQueue::remove_front`]
//! (see [`bounded`] for the truncation rules).
//!
//! Allocation failure is reported as [`QueueError::AllocationFailure`] instead of aborting, and a failed operation never leaves a queue half-modified.
//!
//! # Examples
//! ```
//! use textqueue::TextQueue;
//!
//! let mut queue = TextQueue::new();
//! queue.push_back("first").unwrap();
//! queue.push_back("second").unwrap();
//! assert_eq!(queue.pop_front().as_deref(), Some("first"));
//!
//! let mut stack = TextQueue::new();
//! stack.push_front("first").unwrap();
//! stack.push_front("second").unwrap();
//! assert_eq!(stack.pop_front().as_deref(), Some("second"));
//! ```
//!
//! The [`handle`] module offers the same operations over an optional queue.

mod alloc;
pub mod bounded;
mod error;
pub mod handle;
mod queue;
mod settings;


pub use error::{QueueError, QueueResult};
pub use queue::TextQueue;
pub use settings::{BackToFront, DropBehavior, FrontToBack};
