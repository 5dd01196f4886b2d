//! Coalescing redraw notifications
//!
//! A capacity-1 channel from the materializer to the event loop. Progress
//! notifications are dropped when one is already pending; completion and
//! failure notifications replace whatever is pending, so at least one
//! survives for every completed fill cycle.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// What the materializer has to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Rows were written during the first fill cycle
    Progress,
    /// A fill cycle ended
    FillComplete {
        /// Materialized rows at the end of the cycle
        materialized: usize,
        /// The stream is closed; no further rows will arrive
        drained: bool,
    },
    /// The materializer died; no further rows or notifications will arrive
    Failed,
}

impl Redraw {
    pub fn is_drained(self) -> bool {
        matches!(self, Redraw::FillComplete { drained: true, .. })
    }
}

/// Both ends of the redraw channel
///
/// The sender keeps a receiver clone so it can displace a pending
/// notification.
#[derive(Debug, Clone)]
pub struct RedrawSignal {
    tx: Sender<Redraw>,
    rx: Receiver<Redraw>,
}

impl Default for RedrawSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl RedrawSignal {
    pub fn new() -> Self {
        let (tx, rx) = bounded(1);
        Self { tx, rx }
    }

    /// Receiving end for the event loop
    pub fn receiver(&self) -> Receiver<Redraw> {
        self.rx.clone()
    }

    /// Non-blocking; dropped if a notification is already pending
    pub fn notify_progress(&self) -> bool {
        self.tx.try_send(Redraw::Progress).is_ok()
    }

    /// Non-blocking; replaces a pending notification instead of being dropped
    pub fn notify_complete(&self, materialized: usize, drained: bool) {
        self.replace_pending(Redraw::FillComplete {
            materialized,
            drained,
        });
    }

    /// Non-blocking; replaces a pending notification
    pub fn notify_failed(&self) {
        self.replace_pending(Redraw::Failed);
    }

    fn replace_pending(&self, mut pending: Redraw) {
        loop {
            match self.tx.try_send(pending) {
                Ok(()) | Err(TrySendError::Disconnected(_)) => return,
                Err(TrySendError::Full(signal)) => {
                    pending = signal;
                    // Whatever was queued is older than this one
                    let _ = self.rx.try_recv();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_coalesces() {
        let signal = RedrawSignal::new();
        assert!(signal.notify_progress());
        assert!(!signal.notify_progress());

        let rx = signal.receiver();
        assert_eq!(rx.try_recv(), Ok(Redraw::Progress));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_completion_overwrites_pending_progress() {
        let signal = RedrawSignal::new();
        signal.notify_progress();
        signal.notify_complete(7, true);

        let rx = signal.receiver();
        assert_eq!(
            rx.try_recv(),
            Ok(Redraw::FillComplete {
                materialized: 7,
                drained: true
            })
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_newer_completion_wins() {
        let signal = RedrawSignal::new();
        signal.notify_complete(3, false);
        signal.notify_complete(5, true);

        let rx = signal.receiver();
        let got = rx.try_recv().unwrap();
        assert!(got.is_drained());
        assert_eq!(
            got,
            Redraw::FillComplete {
                materialized: 5,
                drained: true
            }
        );
    }

    #[test]
    fn test_failure_displaces_pending_progress() {
        let signal = RedrawSignal::new();
        signal.notify_progress();
        signal.notify_failed();

        let rx = signal.receiver();
        assert_eq!(rx.try_recv(), Ok(Redraw::Failed));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_progress_does_not_displace_completion() {
        let signal = RedrawSignal::new();
        signal.notify_complete(2, false);
        assert!(!signal.notify_progress());
        assert!(matches!(
            signal.receiver().try_recv(),
            Ok(Redraw::FillComplete { .. })
        ));
    }
}
