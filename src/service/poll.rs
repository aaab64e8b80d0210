//! Periodic refresh of dashboard data.
//!
//! A [`Poller`] owns at most one polling task for one subject (usually a user id). The task
//! fetches immediately, then once per interval, until the poller is stopped, pointed at a
//! different subject, or dropped. Stopping aborts the task synchronously: the abort flag is
//! checked before the task is polled again, so no fetch is started after [`Poller::stop`]
//! returns.
//!
//! The poller does not spawn anything itself. [`Poller::watch`] hands back the task future and
//! the caller runs it on whatever executor the view lives on (the Dioxus scope in the browser,
//! tokio in tests).

use std::{fmt::Debug, future::Future, time::Duration};

use dioxus_logger::tracing;
use futures::future::{AbortHandle, Abortable};

use crate::{config::Config, error::Error, util::time::sleep};

/// What the view shows after a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Replace the list with an empty one.
    #[default]
    ClearOnError,
    /// Keep showing the last successful result.
    KeepLast,
}

/// Configuration for a [`Poller`].
#[derive(Debug, Clone, PartialEq)]
pub struct PollConfig {
    /// Time between the end of one fetch and the start of the next.
    pub interval: Duration,
    pub stale_policy: StalePolicy,
}

impl PollConfig {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            stale_policy: StalePolicy::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            interval: config.poll_interval(),
            stale_policy: config.stale_policy,
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

/// Owner of the polling task for one subject at a time.
pub struct Poller<S> {
    config: PollConfig,
    current: Option<(S, AbortHandle)>,
}

impl<S> Poller<S>
where
    S: Clone + PartialEq + Debug + 'static,
{
    /// Creates a poller in the stopped state.
    pub fn new(config: PollConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// Points the poller at `subject`.
    ///
    /// - `None` stops polling.
    /// - The subject already being polled is a no-op.
    /// - Any other subject stops the current task and starts a new one.
    ///
    /// # Arguments
    /// - `subject` - Whose data to poll, if anyone's
    /// - `fetch` - Loads the data for a subject
    /// - `on_update` - Receives each result; called with an empty list after a failed fetch
    ///   under [`StalePolicy::ClearOnError`]
    ///
    /// # Returns
    /// - `Some(future)` - A new task the caller must spawn
    /// - `None` - Nothing new to run
    pub fn watch<T, F, Fut, U>(
        &mut self,
        subject: Option<S>,
        fetch: F,
        on_update: U,
    ) -> Option<impl Future<Output = ()> + 'static>
    where
        T: 'static,
        F: FnMut(S) -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, Error>> + 'static,
        U: FnMut(Vec<T>) + 'static,
    {
        let Some(subject) = subject else {
            self.stop();
            return None;
        };

        if self.is_running() && self.subject() == Some(&subject) {
            return None;
        }

        self.stop();

        tracing::debug!(
            "Starting poller for {:?} every {} ms",
            subject,
            self.config.interval.as_millis()
        );

        let (handle, registration) = AbortHandle::new_pair();
        let task = Abortable::new(
            poll_loop(subject.clone(), self.config.clone(), fetch, on_update),
            registration,
        );
        self.current = Some((subject, handle));

        Some(async move {
            if task.await.is_err() {
                tracing::debug!("Poller task aborted");
            }
        })
    }

    /// Stops the current task, if any. Idempotent.
    pub fn stop(&mut self) {
        if let Some((subject, handle)) = self.current.take() {
            handle.abort();
            tracing::debug!("Stopped poller for {:?}", subject);
        }
    }

    pub fn is_running(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|(_, handle)| !handle.is_aborted())
    }

    /// The subject currently being polled.
    pub fn subject(&self) -> Option<&S> {
        self.current.as_ref().map(|(subject, _)| subject)
    }
}

impl<S> Drop for Poller<S> {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.current.take() {
            handle.abort();
        }
    }
}

async fn poll_loop<S, T, F, Fut, U>(subject: S, config: PollConfig, mut fetch: F, mut on_update: U)
where
    S: Clone + Debug,
    F: FnMut(S) -> Fut,
    Fut: Future<Output = Result<Vec<T>, Error>>,
    U: FnMut(Vec<T>),
{
    loop {
        match fetch(subject.clone()).await {
            Ok(items) => on_update(items),
            Err(e) => {
                tracing::error!("Failed to fetch requests for {:?}: {}", subject, e);

                if config.stale_policy == StalePolicy::ClearOnError {
                    on_update(Vec::new());
                }
            }
        }

        sleep(config.interval).await;
    }
}
