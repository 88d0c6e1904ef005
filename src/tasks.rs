//! Sequential task running that survives individual failures.
//!
//! [`run_sequential`] and [`TaskSequence`] run fallible tasks in order and
//! keep going past an `Err`, recording every outcome instead of stopping
//! at the first failure. Panics are not caught here: tasks carry a
//! first-class `Result` channel for expected failures.

use std::fmt;

type Task<T, E> = Box<dyn FnOnce() -> Result<T, E>>;

/// Outcome of running a sequence of tasks. Results stay in task order,
/// failures included.
#[derive(Debug)]
pub struct SequenceReport<T, E> {
    pub results: Vec<Result<T, E>>,
    pub succeeded: usize,
    pub failed: usize,
}

impl<T, E> SequenceReport<T, E> {
    /// True when every task succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    /// The successful values, in task order.
    pub fn successes(&self) -> Vec<&T> {
        self.results
            .iter()
            .filter_map(|result| result.as_ref().ok())
            .collect()
    }
}

/// Run `tasks` in order, all the way to the end. A failing task is logged
/// at warn and recorded; the tasks after it still run.
///
/// ## Example
///
/// ```
/// use emitter_rust::run_sequential;
///
/// let tasks: Vec<Box<dyn FnOnce() -> Result<i32, String>>> = vec![
///     Box::new(|| Ok(1)),
///     Box::new(|| Err("out of retries".to_string())),
///     Box::new(|| Ok(3)),
/// ];
///
/// let report = run_sequential(tasks);
/// assert_eq!(report.succeeded, 2);
/// assert_eq!(report.failed, 1);
/// assert_eq!(report.successes(), vec![&1, &3]);
/// ```
pub fn run_sequential<T, E, F, I>(tasks: I) -> SequenceReport<T, E>
where
    F: FnOnce() -> Result<T, E>,
    I: IntoIterator<Item = F>,
    E: fmt::Display,
{
    let mut results = Vec::new();
    let mut succeeded = 0;
    let mut failed = 0;

    for (index, task) in tasks.into_iter().enumerate() {
        match task() {
            Ok(value) => {
                succeeded += 1;
                results.push(Ok(value));
            }
            Err(e) => {
                failed += 1;
                log::warn!("task {} failed: {}", index, e);
                results.push(Err(e));
            }
        }
    }

    SequenceReport {
        results,
        succeeded,
        failed,
    }
}

/// Named task pipeline, built by chaining and run as one sequence.
///
/// Names label the warn log when a task fails, which beats a bare index
/// once sequences grow past a couple of steps.
///
/// ## Example
///
/// ```
/// use emitter_rust::TaskSequence;
///
/// let report = TaskSequence::new()
///     .task("fetch", || Ok::<_, String>(1))
///     .task("validate", || Err("bad payload".to_string()))
///     .task("store", || Ok(3))
///     .run();
///
/// assert_eq!(report.succeeded, 2);
/// assert_eq!(report.failed, 1);
/// assert!(report.results[1].is_err());
/// ```
pub struct TaskSequence<T, E> {
    tasks: Vec<(String, Task<T, E>)>,
}

impl<T, E> TaskSequence<T, E> {
    pub fn new() -> Self {
        TaskSequence { tasks: Vec::new() }
    }

    /// Append a named task.
    pub fn task<F>(mut self, name: &str, task: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + 'static,
    {
        self.tasks.push((name.to_string(), Box::new(task)));
        self
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T, E: fmt::Display> TaskSequence<T, E> {
    /// Run every task in order, failures included. Consumes the sequence.
    pub fn run(self) -> SequenceReport<T, E> {
        let mut results = Vec::with_capacity(self.tasks.len());
        let mut succeeded = 0;
        let mut failed = 0;

        for (name, task) in self.tasks {
            match task() {
                Ok(value) => {
                    succeeded += 1;
                    results.push(Ok(value));
                }
                Err(e) => {
                    failed += 1;
                    log::warn!("task '{}' failed: {}", name, e);
                    results.push(Err(e));
                }
            }
        }

        log::debug!("sequence finished: {} succeeded, {} failed", succeeded, failed);
        SequenceReport {
            results,
            succeeded,
            failed,
        }
    }
}

impl<T, E> Default for TaskSequence<T, E> {
    fn default() -> Self {
        Self::new()
    }
}
