//! Consumer half of the channel.
//!
//! Receives observe values in send order and learn of termination from
//! the channel itself: a closed, drained channel yields an end-of-stream
//! signal rather than blocking forever.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, TryRecvError};

use super::{ChannelState, Shared};
use crate::error::{Error, Result};

/// Consumer half of a bounded channel.
///
/// Receivers cannot close the channel; they only observe closure.
pub struct Receiver<T> {
    inner: crossbeam_channel::Receiver<T>,
    shared: Arc<Shared>,
}

impl<T> Receiver<T> {
    pub(crate) fn new(inner: crossbeam_channel::Receiver<T>, shared: Arc<Shared>) -> Self {
        Self { inner, shared }
    }

    /// Wraps a receiver that has no producer-side close protocol, such as
    /// a timer channel.
    pub(crate) fn wrap(inner: crossbeam_channel::Receiver<T>) -> Self {
        Self {
            inner,
            shared: Arc::new(Shared::new()),
        }
    }

    pub(crate) fn raw(&self) -> &crossbeam_channel::Receiver<T> {
        &self.inner
    }

    /// Blocking receive.
    ///
    /// Returns `None` only once the channel is closed (or every producer
    /// handle is gone) and the buffer is drained; an open, empty channel
    /// blocks instead.
    pub fn recv(&self) -> Option<T> {
        self.inner.recv().ok()
    }

    /// Non-blocking receive, distinguishing an empty channel from a
    /// terminated one.
    pub fn try_recv(&self) -> Result<T> {
        self.inner.try_recv().map_err(|err| match err {
            TryRecvError::Empty => Error::Empty,
            TryRecvError::Disconnected => self.termination_error(),
        })
    }

    /// Blocking receive with a bounded wait.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<T> {
        self.inner.recv_timeout(timeout).map_err(|err| match err {
            RecvTimeoutError::Timeout => Error::Timeout,
            RecvTimeoutError::Disconnected => self.termination_error(),
        })
    }

    /// Iterates over values until the channel is closed and drained.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.inner.iter()
    }

    /// Current state under the close protocol.
    ///
    /// Producers that merely dropped their handles (without closing) leave
    /// the state `Open`; their departure shows up as [`Receiver::recv`]
    /// returning `None` or [`Error::Disconnected`] from the non-blocking
    /// operations.
    pub fn state(&self) -> ChannelState {
        if !self.shared.is_closed() {
            ChannelState::Open
        } else if self.inner.is_empty() {
            ChannelState::Closed
        } else {
            ChannelState::Closing
        }
    }

    /// Number of values currently buffered.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if no values are buffered.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Buffer capacity fixed at creation.
    pub fn capacity(&self) -> usize {
        self.inner.capacity().unwrap_or(0)
    }

    fn termination_error(&self) -> Error {
        if self.shared.is_closed() {
            Error::ChannelClosed
        } else {
            Error::Disconnected
        }
    }
}

impl<T> fmt::Debug for Receiver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Receiver")
            .field("state", &self.state())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::bounded;

    #[test]
    fn test_try_recv_distinguishes_empty_from_closed() {
        let (tx, rx) = bounded::<u8>(1);
        assert!(matches!(rx.try_recv(), Err(Error::Empty)));

        tx.send(9).unwrap();
        assert_eq!(rx.try_recv().unwrap(), 9);

        tx.close().unwrap();
        assert!(matches!(rx.try_recv(), Err(Error::ChannelClosed)));
    }

    #[test]
    fn test_state_follows_close_and_drain() {
        let (tx, rx) = bounded(2);
        assert_eq!(rx.state(), ChannelState::Open);

        tx.send(1).unwrap();
        tx.close().unwrap();
        assert_eq!(rx.state(), ChannelState::Closing);

        assert_eq!(rx.recv(), Some(1));
        assert_eq!(rx.state(), ChannelState::Closed);
        assert_eq!(rx.recv(), None);
    }

    #[test]
    fn test_recv_timeout_on_a_silent_channel() {
        let (_tx, rx) = bounded::<u8>(1);
        assert!(matches!(
            rx.recv_timeout(Duration::from_millis(10)),
            Err(Error::Timeout)
        ));
    }

    #[test]
    fn test_dropped_producers_end_the_stream() {
        let (tx, rx) = bounded(1);
        tx.send(5).unwrap();
        drop(tx);

        assert_eq!(rx.recv(), Some(5));
        assert_eq!(rx.recv(), None);
        assert!(matches!(rx.try_recv(), Err(Error::Disconnected)));
    }
}
