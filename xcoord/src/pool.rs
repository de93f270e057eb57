//! Explicit worker-task pool.
//!
//! Tasks are OS threads owned by a pool that the application entry point
//! constructs and shuts down itself; there is no implicit global
//! scheduler. Tasks communicate only through channels and terminate
//! cooperatively — the pool never kills a task, it only joins them.

use std::sync::{Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use log::{debug, warn};

use crate::error::{Error, Result};

struct Task {
    name: String,
    handle: JoinHandle<()>,
}

/// Pool of named worker tasks with explicit shutdown.
pub struct TaskPool {
    name: String,
    tasks: Mutex<Vec<Task>>,
}

impl TaskPool {
    /// Creates an empty pool; `name` prefixes every worker thread name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Spawns a named task on the pool.
    pub fn spawn<F>(&self, name: &str, task: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let thread_name = format!("{}/{}", self.name, name);
        debug!("spawning task {thread_name}");
        let handle = thread::Builder::new().name(thread_name).spawn(task)?;
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Task {
                name: name.to_string(),
                handle,
            });
        Ok(())
    }

    /// Number of tasks spawned and not yet joined.
    pub fn active(&self) -> usize {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Joins every task, consuming the pool.
    ///
    /// All tasks are joined even when some fail; the first panicking task
    /// is then reported as [`Error::TaskPanicked`].
    pub fn shutdown(self) -> Result<()> {
        let tasks = self
            .tasks
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);

        let mut panicked = None;
        for task in tasks {
            if task.handle.join().is_err() {
                warn!("task {} panicked", task.name);
                panicked.get_or_insert(task.name);
            }
        }

        match panicked {
            Some(name) => Err(Error::TaskPanicked(name)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel;

    #[test]
    fn test_shutdown_joins_spawned_tasks() {
        let pool = TaskPool::new("test");
        let (tx, rx) = channel::bounded(0);

        pool.spawn("emitter", move || tx.send(42).unwrap()).unwrap();
        assert_eq!(pool.active(), 1);

        assert_eq!(rx.recv(), Some(42));
        pool.shutdown().unwrap();
    }

    #[test]
    fn test_panicked_task_is_reported() {
        let pool = TaskPool::new("test");
        pool.spawn("bomb", || panic!("boom")).unwrap();

        let result = pool.shutdown();
        assert!(matches!(result, Err(Error::TaskPanicked(name)) if name == "bomb"));
    }
}
