//! Operations on a queue that may be absent.
//!
//! These mirror the [`TextQueue`] methods for callers that hold an optional queue and an optional output buffer,
//! such as a foreign-function boundary. An absent queue makes the mutating operations fail with
//! [`QueueError::InvalidArgument`], while [`size`] reports `0` and [`reverse`] and [`destroy`] do nothing.
//!
//! # Examples
//! ```
//! use textqueue::handle;
//!
//! let mut queue = Some(handle::create().unwrap());
//! handle::insert_back(queue.as_deref_mut(), "a").unwrap();
//! handle::insert_front(queue.as_deref_mut(), "b").unwrap();
//! assert_eq!(handle::size(queue.as_deref()), 2);
//!
//! let mut buf = [0u8; 4];
//! assert_eq!(handle::remove_front(queue.as_deref_mut(), Some(&mut buf[..])), Ok(1));
//! assert_eq!(&buf[..2], b"b\0");
//!
//! handle::destroy(queue.take());
//! assert_eq!(handle::size::<textqueue::FrontToBack>(None), 0);
//! ```

use crate::error::{QueueError, QueueResult};
use crate::{DropBehavior, FrontToBack, TextQueue};

const NO_QUEUE: QueueError = QueueError::InvalidArgument("queue is absent");
const NO_BUFFER: QueueError = QueueError::InvalidArgument("output buffer is absent");

/// Allocates a new, empty queue.
///
/// # Errors
/// [`QueueError::AllocationFailure`] if the queue could not be allocated.
pub fn create() -> QueueResult<Box<TextQueue<FrontToBack>>> {
    TextQueue::try_new_boxed()
}

/// Releases the queue along with every value it still holds. Passing `None` does nothing.
pub fn destroy<D: DropBehavior>(queue: Option<Box<TextQueue<D>>>) {
    drop(queue);
}

/// Copies `value` to the front of the queue. An absent queue is [`QueueError::InvalidArgument`].
pub fn insert_front<D: DropBehavior>(
    queue: Option<&mut TextQueue<D>>,
    value: &str,
) -> QueueResult<()> {
    queue.ok_or(NO_QUEUE)?.push_front(value)
}

/// Copies `value` to the back of the queue. An absent queue is [`QueueError::InvalidArgument`].
pub fn insert_back<D: DropBehavior>(
    queue: Option<&mut TextQueue<D>>,
    value: &str,
) -> QueueResult<()> {
    queue.ok_or(NO_QUEUE)?.push_back(value)
}

/// Removes the front value into `out`. See [`TextQueue::remove_front`] for the truncation rules.
///
/// # Errors
/// [`QueueError::InvalidArgument`] if `queue` or `out` is absent, then the errors of [`TextQueue::remove_front`].
pub fn remove_front<D: DropBehavior>(
    queue: Option<&mut TextQueue<D>>,
    out: Option<&mut [u8]>,
) -> QueueResult<usize> {
    let queue = queue.ok_or(NO_QUEUE)?;
    let out = out.ok_or(NO_BUFFER)?;
    queue.remove_front(out)
}

/// Returns the number of values in the queue, or `0` for an absent queue.
pub fn size<D: DropBehavior>(queue: Option<&TextQueue<D>>) -> usize {
    queue.map_or(0, TextQueue::len)
}

/// Reverses the queue in place. An absent queue is left alone.
pub fn reverse<D: DropBehavior>(queue: Option<&mut TextQueue<D>>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}
