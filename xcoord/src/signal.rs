//! One-shot cooperative cancellation signals.
//!
//! A [`Stop`]/[`StopListener`] pair carries a single quit event from a
//! controller to a task. Cancellation is purely cooperative: the task must
//! observe the listener at its suspension points (typically inside a
//! multiplexed wait); nothing is preempted.

use crate::channel::{self, Receiver, Sender};
use crate::error::{Error, Result};

/// Trigger half of a cancellation signal.
#[derive(Debug)]
pub struct Stop {
    tx: Sender<()>,
}

/// Listener half of a cancellation signal, observed by the task being
/// cancelled.
///
/// A trigger that is dropped without firing also releases the listener:
/// the controller is gone and can never signal, so waiting tasks treat
/// that the same as a fired signal and wind down.
#[derive(Debug)]
pub struct StopListener {
    rx: Receiver<()>,
}

/// Creates a connected trigger/listener pair.
pub fn stop() -> (Stop, StopListener) {
    // One buffered slot so firing never blocks on the listener.
    let (tx, rx) = channel::bounded(1);
    (Stop { tx }, StopListener { rx })
}

impl Stop {
    /// Fires the quit signal, consuming the trigger.
    ///
    /// A listener that has already gone away counts as success: the task
    /// terminated on its own and there is nothing left to cancel.
    pub fn fire(self) -> Result<()> {
        match self.tx.send(()) {
            Err(Error::Disconnected) => Ok(()),
            other => other,
        }
    }
}

impl StopListener {
    pub(crate) fn raw(&self) -> &crossbeam_channel::Receiver<()> {
        self.rx.raw()
    }

    /// Blocks until the signal fires.
    ///
    /// Returns false if the trigger was dropped unfired.
    pub fn wait(&self) -> bool {
        self.rx.recv().is_some()
    }

    /// Non-blocking check for a pending signal.
    pub fn fired(&self) -> bool {
        self.rx.try_recv().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_is_observed() {
        let (stop, listener) = stop();
        assert!(!listener.fired());

        stop.fire().unwrap();
        assert!(listener.wait());
    }

    #[test]
    fn test_dropped_trigger_releases_listener() {
        let (stop, listener) = stop();
        drop(stop);
        assert!(!listener.wait());
    }

    #[test]
    fn test_fire_after_listener_is_gone() {
        let (stop, listener) = stop();
        drop(listener);
        assert!(stop.fire().is_ok());
    }
}
