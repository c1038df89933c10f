//! Progress reporting for streaming transfers.
//!
//! Notifications are coarse: one every `PROGRESS_INTERVAL` bytes, plus a final
//! one when the body has been fully consumed.

/// Bytes between two progress notifications.
pub const PROGRESS_INTERVAL: u64 = 1048 * 50;

/// Receives progress events. Runs on the transferring thread; keep it cheap.
pub trait ProgressListener {
    /// `total` is the expected body size from `Content-Length`.
    fn on_progress(&mut self, total: u64, transferred: u64);

    /// The expected body size is unknown.
    fn on_indeterminate(&mut self);
}

/// Counts received bytes and decides when to notify the listener.
pub(crate) struct ProgressTracker<'a> {
    listener: Option<&'a mut (dyn ProgressListener + Send + 'static)>,
    total: Option<u64>,
    transferred: u64,
    queued: u64,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(listener: Option<&'a mut (dyn ProgressListener + Send + 'static)>) -> Self {
        Self {
            listener,
            total: None,
            transferred: 0,
            queued: 0,
        }
    }

    pub(crate) fn set_total(&mut self, total: Option<u64>) {
        self.total = total;
    }

    pub(crate) fn transferred(&self) -> u64 {
        self.transferred
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.transferred += n as u64;
        self.queued += n as u64;
        if self.queued >= PROGRESS_INTERVAL {
            self.queued = 0;
            self.publish();
        }
    }

    /// Final notification, sent once the body is complete.
    pub(crate) fn finish(&mut self) {
        self.publish();
    }

    fn publish(&mut self) {
        let Some(listener) = self.listener.as_deref_mut() else {
            return;
        };
        match self.total {
            Some(total) => listener.on_progress(total, self.transferred),
            None => listener.on_indeterminate(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Event {
        Progress(u64, u64),
        Indeterminate,
    }

    #[derive(Default)]
    pub(crate) struct Recorder(pub(crate) Vec<Event>);

    impl ProgressListener for Recorder {
        fn on_progress(&mut self, total: u64, transferred: u64) {
            self.0.push(Event::Progress(total, transferred));
        }

        fn on_indeterminate(&mut self) {
            self.0.push(Event::Indeterminate);
        }
    }

    #[test]
    fn notifies_each_interval_and_at_finish() {
        let mut rec = Recorder::default();
        {
            let mut t = ProgressTracker::new(Some(&mut rec));
            t.set_total(Some(120_000));
            for _ in 0..30 {
                t.advance(4000);
            }
            t.finish();
            assert_eq!(t.transferred(), 120_000);
        }
        // 4000 * 14 = 56000 crosses the interval at the 14th chunk, then again 14 chunks later.
        assert_eq!(
            rec.0,
            vec![
                Event::Progress(120_000, 56_000),
                Event::Progress(120_000, 112_000),
                Event::Progress(120_000, 120_000),
            ]
        );
    }

    #[test]
    fn small_body_gets_only_final_notification() {
        let mut rec = Recorder::default();
        {
            let mut t = ProgressTracker::new(Some(&mut rec));
            t.set_total(Some(11));
            t.advance(11);
            t.finish();
        }
        assert_eq!(rec.0, vec![Event::Progress(11, 11)]);
    }

    #[test]
    fn unknown_total_is_indeterminate() {
        let mut rec = Recorder::default();
        {
            let mut t = ProgressTracker::new(Some(&mut rec));
            t.advance(PROGRESS_INTERVAL as usize);
            t.finish();
        }
        assert_eq!(rec.0, vec![Event::Indeterminate, Event::Indeterminate]);
    }

    #[test]
    fn no_listener_is_noop() {
        let mut t = ProgressTracker::new(None);
        t.set_total(Some(10));
        t.advance(PROGRESS_INTERVAL as usize * 3);
        t.finish();
        assert_eq!(t.transferred(), PROGRESS_INTERVAL * 3);
    }
}
