//! A [`TextQueue`] is a singly-linked sequence of owned strings with a cached tail.
//! Pushing at the front and popping at the front makes it a stack; pushing at the back and popping at the front makes it a queue.
//! The whole sequence can be reversed in place without touching any value.

use crate::alloc::{try_box, try_copy_str};
use crate::bounded::copy_terminated;
use crate::error::{QueueError, QueueResult};
use crate::{DropBehavior, FrontToBack};
use std::fmt::Debug;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ptr::NonNull;

// Every node is allocated as a `Box`, leaked into its link with `Box::leak`, and rebuilt with `Box::from_raw` exactly once,
// when it is unlinked from the front. All other access goes through the raw links.
type Link = Option<NonNull<Node>>;

struct Node {
    value: String,
    next: Link,
}

/// A singly-linked list of owned strings supporting insertion at both ends and removal at the front.
///
/// Every value is copied into storage owned by the queue on insertion, and released when it is removed or when the queue is dropped.
/// All operations except [`reverse`](TextQueue::reverse) and teardown run in constant time.
///
/// # Examples
/// ```
/// use textqueue::TextQueue;
/// let mut queue = TextQueue::new();
/// queue.push_back("a").unwrap();
/// queue.push_back("b").unwrap();
/// queue.push_front("c").unwrap();
/// assert_eq!(format!("{:?}", queue), r#"["c", "a", "b"]"#);
///
/// queue.reverse();
/// let mut buf = [0u8; 2];
/// assert_eq!(queue.remove_front(&mut buf), Ok(1));
/// assert_eq!(&buf, b"b\0");
/// assert_eq!(queue.len(), 2);
/// ```
///
/// # Drop Order
/// The default drop order is front-to-back. A queue tagged with [`BackToFront`](crate::BackToFront) reverses itself in place before releasing its nodes,
/// so teardown never allocates in either order.
pub struct TextQueue<DropOrder = FrontToBack>
where
    DropOrder: DropBehavior,
{
    head: Link,
    // last node of the chain starting at `head`; `None` exactly when `head` is `None`
    tail: Link,
    len: usize,
    drop_order: DropOrder,
    marker: PhantomData<Box<Node>>,
}

impl TextQueue<FrontToBack> {
    /// Creates a new, empty `TextQueue` that drops its values front to back. Nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use textqueue::TextQueue;
    /// let queue = TextQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    pub const fn new() -> Self {
        TextQueue {
            head: None,
            tail: None,
            len: 0,
            drop_order: FrontToBack,
            marker: PhantomData,
        }
    }

    /// Creates a new, empty `TextQueue` with a specified drop order.
    ///
    /// # Examples
    /// ```
    /// # use textqueue::{BackToFront, TextQueue};
    /// let mut queue = TextQueue::new_with_drop_order::<BackToFront>();
    /// queue.push_back("x").unwrap();
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn new_with_drop_order<D>() -> TextQueue<D>
    where
        D: DropBehavior,
    {
        TextQueue::<D>::empty()
    }
}

impl<DropOrder> TextQueue<DropOrder>
where
    DropOrder: DropBehavior,
{
    fn empty() -> Self {
        TextQueue {
            head: None,
            tail: None,
            len: 0,
            drop_order: DropOrder::default(),
            marker: PhantomData,
        }
    }

    /// Creates a new, empty queue on the heap, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    /// [`QueueError::AllocationFailure`] if the queue itself could not be allocated.
    pub fn try_new_boxed() -> QueueResult<Box<Self>> {
        try_box(Self::empty())
    }

    /// Re-tags the queue with a different drop order. No node is touched.
    pub fn into_drop_order<D>(self) -> TextQueue<D>
    where
        D: DropBehavior,
    {
        let mut this = ManuallyDrop::new(self);
        TextQueue {
            head: this.head.take(),
            tail: this.tail.take(),
            len: this.len,
            drop_order: D::default(),
            marker: PhantomData,
        }
    }

    /// Returns the drop order this queue was created with.
    #[inline]
    pub fn drop_order(&self) -> DropOrder {
        self.drop_order
    }

    /// Returns the number of values in the queue. This never walks the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the value at the front of the queue, if any.
    #[inline]
    pub fn front(&self) -> Option<&str> {
        // SAFETY: `head` is a live node owned by this queue for as long as `&self` is held
        self.head.map(|head| unsafe { (*head.as_ptr()).value.as_str() })
    }

    /// Returns the value at the back of the queue, if any.
    ///
    /// # Examples
    /// ```
    /// # use textqueue::TextQueue;
    /// let mut queue = TextQueue::new();
    /// queue.push_front("b").unwrap();
    /// queue.push_front("a").unwrap();
    /// assert_eq!(queue.front(), Some("a"));
    /// assert_eq!(queue.back(), Some("b"));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&str> {
        // SAFETY: `tail` is a live node owned by this queue for as long as `&self` is held
        self.tail.map(|tail| unsafe { (*tail.as_ptr()).value.as_str() })
    }

    /// Copies `value` into a new node at the front of the queue.
    ///
    /// # Errors
    /// [`QueueError::AllocationFailure`] if the node or the copy of `value` could not be allocated.
    /// The queue is unchanged in that case.
    pub fn push_front(&mut self, value: &str) -> QueueResult<()> {
        let value = try_copy_str(value)?;
        self.link_front(value)
    }

    /// Copies `value` into a new node at the back of the queue.
    ///
    /// # Errors
    /// [`QueueError::AllocationFailure`] if the node or the copy of `value` could not be allocated.
    /// The queue is unchanged in that case.
    pub fn push_back(&mut self, value: &str) -> QueueResult<()> {
        let value = try_copy_str(value)?;
        self.link_back(value)
    }

    fn link_front(&mut self, value: String) -> QueueResult<()> {
        let node = try_box(Node {
            value,
            next: self.head,
        })?;
        let node = NonNull::from(Box::leak(node));
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
        Ok(())
    }

    pub(crate) fn link_back(&mut self, value: String) -> QueueResult<()> {
        let node = try_box(Node { value, next: None })?;
        let node = NonNull::from(Box::leak(node));
        match self.tail {
            // SAFETY: `tail` is a live node owned by this queue and no reference into it is held
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Removes the value at the front of the queue and copies it into `out`.
    ///
    /// `out.len()` is the capacity of the buffer. At most `out.len() - 1` bytes of the value are copied and a `0` terminator
    /// is always written right after them, so longer values are truncated silently.
    /// Returns the number of value bytes written, not counting the terminator.
    ///
    /// # Errors
    /// - [`QueueError::InvalidArgument`] if `out` is empty and cannot hold the terminator.
    /// - [`QueueError::EmptyContainer`] if there is nothing to remove.
    ///
    /// The queue is not modified when an error is returned.
    ///
    /// # Examples
    /// ```
    /// # use textqueue::{TextQueue, bounded::terminated};
    /// let mut queue = TextQueue::new();
    /// queue.push_back("truncated").unwrap();
    /// let mut buf = [0u8; 6];
    /// assert_eq!(queue.remove_front(&mut buf), Ok(5));
    /// assert_eq!(terminated(&buf), b"trunc");
    /// assert!(queue.is_empty());
    /// ```
    pub fn remove_front(&mut self, out: &mut [u8]) -> QueueResult<usize> {
        if out.is_empty() {
            return Err(QueueError::InvalidArgument(
                "output buffer has no room for a terminator",
            ));
        }
        let front = self.front().ok_or(QueueError::EmptyContainer)?;
        let written = copy_terminated(front.as_bytes(), out)?;
        self.pop_front();
        Ok(written)
    }

    /// Removes the value at the front of the queue and hands back its storage.
    ///
    /// # Examples
    /// ```
    /// # use textqueue::TextQueue;
    /// let mut stack = TextQueue::new();
    /// stack.push_front("1").unwrap();
    /// stack.push_front("2").unwrap();
    /// assert_eq!(stack.pop_front().as_deref(), Some("2"));
    /// assert_eq!(stack.pop_front().as_deref(), Some("1"));
    /// assert_eq!(stack.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<String> {
        let head = self.head?;
        // SAFETY: `head` came from `Box::leak` and is reclaimed here exactly once, after which no link refers to it
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        let Node { value, next } = *node;
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(value)
    }

    /// Reverses the order of the queue in place.
    /// Only the links between nodes are rewritten; no node or value is allocated, moved or released.
    ///
    /// # Examples
    /// ```
    /// # use textqueue::TextQueue;
    /// let mut queue = TextQueue::new();
    /// for v in ["1", "2", "3"] {
    ///     queue.push_back(v).unwrap();
    /// }
    /// queue.reverse();
    /// assert_eq!(format!("{:?}", queue), r#"["3", "2", "1"]"#);
    /// ```
    pub fn reverse(&mut self) {
        let mut prev: Link = None;
        let mut curr = self.head;
        // the old front becomes the new back
        self.tail = curr;
        while let Some(node) = curr {
            // SAFETY: every node reachable from `head` is live and owned by this queue
            let next = unsafe { (*node.as_ptr()).next };
            unsafe { (*node.as_ptr()).next = prev };
            prev = Some(node);
            curr = next;
        }
        self.head = prev;
    }

    /// Releases every value front to back, leaving the queue empty.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub(crate) fn values(&self) -> Values<'_> {
        Values {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }
}

pub(crate) struct Values<'a> {
    next: Link,
    remaining: usize,
    marker: PhantomData<&'a Node>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: the queue is borrowed for `'a`, so no node can be unlinked or released while this walks it
        let node = unsafe { &*node.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(node.value.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Values<'_> {}

impl<DropOrder> Drop for TextQueue<DropOrder>
where
    DropOrder: DropBehavior,
{
    fn drop(&mut self) {
        if DropOrder::IS_INVERTED {
            self.reverse();
        }
        self.clear();
    }
}

impl<DropOrder> Default for TextQueue<DropOrder>
where
    DropOrder: DropBehavior,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<DropOrder> Debug for TextQueue<DropOrder>
where
    DropOrder: DropBehavior,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<D1, D2> PartialEq<TextQueue<D2>> for TextQueue<D1>
where
    D1: DropBehavior,
    D2: DropBehavior,
{
    fn eq(&self, other: &TextQueue<D2>) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl<DropOrder> Eq for TextQueue<DropOrder> where DropOrder: DropBehavior {}

#[cfg(feature = "serde")]
impl<DropOrder> serde::Serialize for TextQueue<DropOrder>
where
    DropOrder: DropBehavior,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values())
    }
}

#[cfg(feature = "serde")]
impl<'src, DropOrder> serde::Deserialize<'src> for TextQueue<DropOrder>
where
    DropOrder: DropBehavior,
{
    fn deserialize<D: serde::Deserializer<'src>>(deserializer: D) -> Result<Self, D::Error> {
        let values = <Vec<String> as serde::Deserialize>::deserialize(deserializer)?;
        let mut queue = Self::default();
        for value in values {
            queue
                .link_back(value)
                .map_err(<D::Error as serde::de::Error>::custom)?;
        }
        Ok(queue)
    }
}
