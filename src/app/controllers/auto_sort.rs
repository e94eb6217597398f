use std::collections::HashSet;
use std::time::{Duration, Instant};

/// How long a burst of open events must stay quiet before one sort pass runs.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(200);

/// Coalesces rapid tab-open bursts. Every trigger pushes the deadline
/// forward; once a deadline elapses uninterrupted, the accumulated paths are
/// released as a single batch. Driven entirely by caller-supplied instants;
/// no timer thread.
#[derive(Debug)]
pub struct OpenEventDebouncer {
    pending: HashSet<String>,
    deadline: Option<Instant>,
    delay: Duration,
}

impl OpenEventDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            pending: HashSet::new(),
            deadline: None,
            delay,
        }
    }

    /// Record newly opened paths and reset the deadline. An empty trigger
    /// arms nothing.
    pub fn trigger(&mut self, paths: impl IntoIterator<Item = String>, now: Instant) {
        let mut any = false;
        for path in paths {
            self.pending.insert(path);
            any = true;
        }
        if any {
            self.deadline = Some(now + self.delay);
        }
    }

    /// The accumulated batch, once the current deadline has elapsed. Returns
    /// at most one batch per armed deadline.
    pub fn poll(&mut self, now: Instant) -> Option<HashSet<String>> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(std::mem::take(&mut self.pending))
            }
            _ => None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Owned handle for the auto-sort subscription: while it exists, tab-open
/// events feed the debouncer; dropping it detaches the listener. The
/// dispatcher holds at most one.
#[derive(Debug)]
pub struct AutoSortListener {
    debouncer: OpenEventDebouncer,
}

impl AutoSortListener {
    pub fn new() -> Self {
        Self {
            debouncer: OpenEventDebouncer::new(DEBOUNCE_DELAY),
        }
    }

    /// Feed newly opened text-document paths.
    pub fn tabs_opened(&mut self, paths: impl IntoIterator<Item = String>, now: Instant) {
        self.debouncer.trigger(paths, now);
    }

    /// Batch of paths whose quiet period has elapsed, ready to sort.
    pub fn due(&mut self, now: Instant) -> Option<HashSet<String>> {
        self.debouncer.poll(now)
    }
}
