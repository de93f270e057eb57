//! Producer half of the channel.
//!
//! Handles value submission, backpressure blocking, and the explicit
//! close protocol.

use std::fmt;
use std::sync::Arc;

use crossbeam_channel::TrySendError;
use log::trace;

use super::{ChannelState, Shared};
use crate::error::{Error, Result};

/// Producer half of a bounded channel.
///
/// Cloning yields another producer handle onto the same channel. Closing
/// any handle marks the whole channel closed: subsequent sends from any
/// handle are rejected, and the consumer observes end of stream once the
/// buffer is drained and the remaining handles are released.
pub struct Sender<T> {
    inner: crossbeam_channel::Sender<T>,
    shared: Arc<Shared>,
}

impl<T> Sender<T> {
    pub(crate) fn new(inner: crossbeam_channel::Sender<T>, shared: Arc<Shared>) -> Self {
        Self { inner, shared }
    }

    pub(crate) fn raw(&self) -> &crossbeam_channel::Sender<T> {
        &self.inner
    }

    /// Sends a value, blocking while the buffer is full (or, on a
    /// rendezvous channel, until a receiver is ready to take it).
    ///
    /// Sending on a closed channel is fatal to the operation: the error is
    /// meant to be propagated, not retried.
    pub fn send(&self, value: T) -> Result<()> {
        if self.shared.is_closed() {
            return Err(Error::ChannelClosed);
        }
        self.inner.send(value).map_err(|_| Error::Disconnected)
    }

    /// Attempts a send without blocking.
    pub fn try_send(&self, value: T) -> Result<()> {
        if self.shared.is_closed() {
            return Err(Error::ChannelClosed);
        }
        self.inner.try_send(value).map_err(|err| match err {
            TrySendError::Full(_) => Error::Full,
            TrySendError::Disconnected(_) => Error::Disconnected,
        })
    }

    /// Closes the channel, consuming this handle.
    ///
    /// Only producers close; the consumer learns of the closure by
    /// draining the buffer. Closing an already-closed channel is an error,
    /// never a silent no-op.
    pub fn close(self) -> Result<()> {
        if self.shared.mark_closed() {
            return Err(Error::ChannelClosed);
        }
        trace!("channel closed by producer");
        Ok(())
    }

    /// Current state under the close protocol.
    pub fn state(&self) -> ChannelState {
        if self.shared.is_closed() {
            ChannelState::Closed
        } else {
            ChannelState::Open
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

    /// Returns true if the buffer is at capacity.
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Buffer capacity fixed at creation.
    pub fn capacity(&self) -> usize {
        self.inner.capacity().unwrap_or(0)
    }
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            shared: self.shared.clone(),
        }
    }
}

impl<T> fmt::Debug for Sender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sender")
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
    fn test_send_after_close_is_rejected() {
        let (tx, rx) = bounded(2);
        let other = tx.clone();

        tx.send(1).unwrap();
        tx.close().unwrap();
        assert!(matches!(other.send(2), Err(Error::ChannelClosed)));
        drop(other);

        assert_eq!(rx.recv(), Some(1));
        assert_eq!(rx.recv(), None);
    }

    #[test]
    fn test_double_close_is_rejected() {
        let (tx, _rx) = bounded::<u8>(1);
        let other = tx.clone();

        tx.close().unwrap();
        assert!(matches!(other.close(), Err(Error::ChannelClosed)));
    }

    #[test]
    fn test_state_tracks_close() {
        let (tx, _rx) = bounded::<u8>(1);
        let other = tx.clone();
        assert_eq!(other.state(), ChannelState::Open);

        tx.close().unwrap();
        assert_eq!(other.state(), ChannelState::Closed);
    }
}
