//! Named timers owned by one logger
//!
//! The table is shared (by handle) with the handlers the logger builds, so a
//! handler can report elapsed time for a label the logger started.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct Timers {
    starts: Arc<RwLock<HashMap<String, Instant>>>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `now` as the start of `label`, restarting it if already running
    pub fn start(&self, label: impl Into<String>) {
        self.starts.write().insert(label.into(), Instant::now());
    }

    /// Time since `label` was started. Timers are not consumed by reading.
    pub fn elapsed(&self, label: &str) -> Option<Duration> {
        self.starts.read().get(label).map(Instant::elapsed)
    }

    pub fn started_at(&self, label: &str) -> Option<Instant> {
        self.starts.read().get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.starts.read().contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.starts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_elapsed() {
        let timers = Timers::new();
        assert!(timers.elapsed("load").is_none());

        timers.start("load");
        std::thread::sleep(Duration::from_millis(5));

        let elapsed = timers.elapsed("load").expect("timer should exist");
        assert!(elapsed >= Duration::from_millis(5));
        assert!(timers.contains("load"), "reading must not remove the timer");
    }

    #[test]
    fn test_clones_share_state() {
        let timers = Timers::new();
        let handle = timers.clone();

        timers.start("a");
        assert!(handle.contains("a"));
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn test_restart_replaces_start() {
        let timers = Timers::new();
        timers.start("a");
        let first = timers.started_at("a").unwrap();
        std::thread::sleep(Duration::from_millis(2));
        timers.start("a");

        assert!(timers.started_at("a").unwrap() > first);
        assert_eq!(timers.len(), 1);
    }
}
