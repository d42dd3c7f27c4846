use tokio::sync::mpsc::UnboundedSender;

/// Snapshot reported after each iteration of the background sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Last index added to the sum
    pub index: i32,
    /// Running total `1 + 2 + ... + index`
    pub sum: i64,
}

/// Receiver of progress snapshots
///
/// The sink is moved onto the blocking worker and invoked there synchronously,
/// once per iteration and in increasing index order. Do not assume delivery
/// happens on the caller's task.
///
/// Implemented for plain closures and for tokio unbounded senders:
///
/// ```rust
/// use calculations_core::{Progress, ProgressSink};
///
/// let sink: Box<dyn ProgressSink> = Box::new(|p: Progress| {
///     println!("{} -> {}", p.index, p.sum);
/// });
/// sink.report(Progress { index: 1, sum: 1 });
/// ```
pub trait ProgressSink: Send {
    fn report(&self, progress: Progress);
}

impl<F> ProgressSink for F
where
    F: Fn(Progress) + Send,
{
    fn report(&self, progress: Progress) {
        self(progress)
    }
}

/// Forwards snapshots to an async consumer. A closed receiver only drops the
/// snapshot, the computation keeps going.
impl ProgressSink for UnboundedSender<Progress> {
    fn report(&self, progress: Progress) {
        if self.send(progress).is_err() {
            tracing::trace!(index = progress.index, "progress receiver closed, snapshot dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::sync::mpsc;

    #[test]
    fn test_closure_sink() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let sink = move |p: Progress| seen_clone.lock().unwrap().push(p);

        sink.report(Progress { index: 1, sum: 1 });
        sink.report(Progress { index: 2, sum: 3 });

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Progress { index: 1, sum: 1 }, Progress { index: 2, sum: 3 }]
        );
    }

    #[test]
    fn test_send_only_closure_sink() {
        // Cell makes the closure Send but not Sync
        let running = std::cell::Cell::new(0i64);
        let published = Arc::new(Mutex::new(0i64));
        let published_clone = published.clone();
        let sink: Box<dyn ProgressSink> = Box::new(move |p: Progress| {
            running.set(running.get() + p.sum);
            *published_clone.lock().unwrap() = running.get();
        });

        sink.report(Progress { index: 1, sum: 1 });
        sink.report(Progress { index: 2, sum: 3 });

        assert_eq!(*published.lock().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_channel_sink() {
        let (tx, mut rx) = mpsc::unbounded_channel();

        tx.report(Progress { index: 1, sum: 1 });

        assert_eq!(rx.recv().await, Some(Progress { index: 1, sum: 1 }));
    }

    #[test]
    fn test_channel_sink_with_closed_receiver() {
        let (tx, rx) = mpsc::unbounded_channel::<Progress>();
        drop(rx);

        // Must not panic
        tx.report(Progress { index: 1, sum: 1 });
    }
}
