//! Trailing-edge debouncer: values submitted within the quiet window coalesce and
//! only the last one is delivered, once the window passes with nothing newer.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::trace;

pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawns the debounce task on the current tokio runtime. The task ends once
    /// every handle is dropped, flushing a pending value first.
    pub fn spawn<F>(quiet: Duration, mut on_settle: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();

        tokio::spawn(async move {
            while let Some(mut pending) = rx.recv().await {
                let mut superseded = 0usize;
                loop {
                    tokio::select! {
                        next = rx.recv() => match next {
                            Some(newer) => {
                                pending = newer;
                                superseded += 1;
                            }
                            None => break,
                        },
                        _ = tokio::time::sleep(quiet) => break,
                    }
                }
                trace!("Debounce settled after superseding {superseded} value(s)");
                on_settle(pending);
            }
        });

        Debouncer { tx }
    }

    /// Queues a value, superseding any pending one. Returns false if the task is gone.
    pub fn submit(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(100);

    fn collecting() -> (Debouncer<u32>, mpsc::UnboundedReceiver<u32>) {
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        let debouncer = Debouncer::spawn(QUIET, move |v| {
            let _ = out_tx.send(v);
        });
        (debouncer, out_rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_submissions_coalesce_to_last_value() {
        let (debouncer, mut out) = collecting();
        for v in 1..=5 {
            assert!(debouncer.submit(v));
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        assert_eq!(out.recv().await, Some(5));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(out.try_recv().is_err(), "only one render expected");
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_submissions_each_render() {
        let (debouncer, mut out) = collecting();
        debouncer.submit(1);
        tokio::time::sleep(Duration::from_millis(250)).await;
        debouncer.submit(2);

        assert_eq!(out.recv().await, Some(1));
        assert_eq!(out.recv().await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_renders_before_quiet_window() {
        let (debouncer, mut out) = collecting();
        debouncer.submit(7);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(out.try_recv().is_err());
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(out.try_recv().ok(), Some(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_flushes_pending_value() {
        let (debouncer, mut out) = collecting();
        debouncer.submit(9);
        drop(debouncer);
        assert_eq!(out.recv().await, Some(9));
        assert_eq!(out.recv().await, None);
    }
}
