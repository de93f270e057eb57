use std::time::Duration;

use crate::{
    DEFAULT_COLLECT_TIMEOUT, DEFAULT_POLL_BACKOFF, DEFAULT_QUEUE_CAPACITY, DEFAULT_RUN_DURATION,
    DEFAULT_TICK_INTERVAL,
};

pub struct Config {
    pub queue_capacity: usize,
    pub tick_interval: Duration,
    pub run_duration: Duration,
    pub poll_backoff: Duration,
    pub collect_timeout: Duration,
}

impl Config {
    pub fn new() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            tick_interval: DEFAULT_TICK_INTERVAL,
            run_duration: DEFAULT_RUN_DURATION,
            poll_backoff: DEFAULT_POLL_BACKOFF,
            collect_timeout: DEFAULT_COLLECT_TIMEOUT,
        }
    }

    // Shortened intervals for tests and quick demos.
    pub fn fast() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            tick_interval: Duration::from_millis(10),
            run_duration: Duration::from_millis(55),
            poll_backoff: Duration::from_millis(2),
            collect_timeout: Duration::from_millis(100),
        }
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_run_duration(mut self, duration: Duration) -> Self {
        self.run_duration = duration;
        self
    }

    pub fn with_poll_backoff(mut self, backoff: Duration) -> Self {
        self.poll_backoff = backoff;
        self
    }

    pub fn with_collect_timeout(mut self, timeout: Duration) -> Self {
        self.collect_timeout = timeout;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
