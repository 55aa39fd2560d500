//! Helpers for caller-owned, NUL-terminated output buffers.
//!
//! [`TextQueue::remove_front`](crate::TextQueue::remove_front) hands removed values back through a fixed-size byte buffer.
//! The buffer length is its capacity, and every write leaves a `0` terminator inside that capacity.

use crate::error::{QueueError, QueueResult};

/// Copies as much of `src` as fits into `dst` while leaving room for a terminating `0`, then writes the terminator.
/// At most `dst.len() - 1` bytes of `src` are copied; longer sources are truncated silently.
/// Returns the number of bytes copied, not counting the terminator.
///
/// Bytes of `dst` after the terminator are left untouched.
///
/// # Errors
/// Returns [`QueueError::InvalidArgument`] if `dst` is empty, since it cannot hold the terminator. `dst` is not written in that case.
///
/// # Examples
/// ```
/// # use textqueue::bounded::{copy_terminated, terminated};
/// let mut buf = [0xff; 4];
/// assert_eq!(copy_terminated(b"hello", &mut buf), Ok(3));
/// assert_eq!(&buf, b"hel\0");
/// assert_eq!(terminated(&buf), b"hel");
/// ```
pub fn copy_terminated(src: &[u8], dst: &mut [u8]) -> QueueResult<usize> {
    let Some(room) = dst.len().checked_sub(1) else {
        return Err(QueueError::InvalidArgument(
            "output buffer has no room for a terminator",
        ));
    };
    let n = src.len().min(room);
    dst[..n].copy_from_slice(&src[..n]);
    dst[n] = 0;
    Ok(n)
}

/// Returns the bytes of `buf` before its first `0`, or all of `buf` if there is no terminator.
#[inline]
pub fn terminated(buf: &[u8]) -> &[u8] {
    match buf.iter().position(|&b| b == 0) {
        Some(end) => &buf[..end],
        None => buf,
    }
}
