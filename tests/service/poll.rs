//! Tests for Poller.
//!
//! This module verifies the polling lifecycle under a paused tokio clock: an immediate first
//! fetch, one fetch per interval, no fetches after stop or drop, restarts on subject change
//! and how failed fetches are reported.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use tireflow::{
    error::{api::ApiError, Error},
    service::poll::{PollConfig, Poller, StalePolicy},
};

const INTERVAL: Duration = Duration::from_millis(1000);

/// Records the subject of every fetch.
#[derive(Clone, Default)]
struct FetchLog {
    subjects: Arc<Mutex<Vec<i64>>>,
}

impl FetchLog {
    fn count(&self) -> usize {
        self.subjects.lock().unwrap().len()
    }

    fn subjects(&self) -> Vec<i64> {
        self.subjects.lock().unwrap().clone()
    }
}

/// Starts polling `subject` with a fetch that succeeds and echoes the subject back.
fn watch_ok(poller: &mut Poller<i64>, subject: Option<i64>, log: &FetchLog) -> bool {
    let log = log.clone();
    let task = poller.watch(
        subject,
        move |subject| {
            let log = log.clone();
            async move {
                log.subjects.lock().unwrap().push(subject);
                Ok::<_, Error>(vec![subject])
            }
        },
        |_items: Vec<i64>| {},
    );

    match task {
        Some(task) => {
            tokio::spawn(task);
            true
        }
        None => false,
    }
}

async fn advance(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Tests the fetch cadence.
///
/// Expected: one fetch immediately, then one per interval
#[tokio::test(start_paused = true)]
async fn fetches_immediately_then_every_interval() {
    let log = FetchLog::default();
    let mut poller = Poller::new(PollConfig::new(INTERVAL));

    assert!(watch_ok(&mut poller, Some(1), &log));

    advance(Duration::from_millis(10)).await;
    assert_eq!(log.count(), 1);

    advance(INTERVAL).await;
    assert_eq!(log.count(), 2);

    advance(INTERVAL).await;
    assert_eq!(log.count(), 3);
}

/// Tests stopping the poller.
///
/// Expected: no fetch after stop returns
#[tokio::test(start_paused = true)]
async fn stop_prevents_further_fetches() {
    let log = FetchLog::default();
    let mut poller = Poller::new(PollConfig::new(INTERVAL));

    watch_ok(&mut poller, Some(1), &log);
    advance(Duration::from_millis(10)).await;

    poller.stop();
    assert!(!poller.is_running());

    advance(INTERVAL * 5).await;
    assert_eq!(log.count(), 1);

    // Idempotent
    poller.stop();
}

/// Tests dropping the poller, as when the dashboard unmounts.
///
/// Expected: the spawned task stops fetching
#[tokio::test(start_paused = true)]
async fn drop_stops_polling() {
    let log = FetchLog::default();
    let mut poller = Poller::new(PollConfig::new(INTERVAL));

    watch_ok(&mut poller, Some(1), &log);
    advance(Duration::from_millis(10)).await;
    drop(poller);

    advance(INTERVAL * 5).await;
    assert_eq!(log.count(), 1);
}

/// Tests watching the subject that is already being polled.
///
/// Expected: no second task and no extra fetches
#[tokio::test(start_paused = true)]
async fn same_subject_is_noop() {
    let log = FetchLog::default();
    let mut poller = Poller::new(PollConfig::new(INTERVAL));

    assert!(watch_ok(&mut poller, Some(1), &log));
    assert!(!watch_ok(&mut poller, Some(1), &log));
    assert_eq!(poller.subject(), Some(&1));

    advance(Duration::from_millis(10)).await;
    assert_eq!(log.count(), 1);
}

/// Tests switching to another user.
///
/// Expected: the old task stops and the new subject is fetched immediately
#[tokio::test(start_paused = true)]
async fn subject_change_restarts() {
    let log = FetchLog::default();
    let mut poller = Poller::new(PollConfig::new(INTERVAL));

    watch_ok(&mut poller, Some(1), &log);
    advance(Duration::from_millis(10)).await;

    assert!(watch_ok(&mut poller, Some(2), &log));
    advance(Duration::from_millis(10)).await;
    assert_eq!(log.subjects(), vec![1, 2]);

    advance(INTERVAL).await;
    assert_eq!(log.subjects(), vec![1, 2, 2]);
}

/// Tests signing out while polling.
///
/// Expected: watching `None` stops the task
#[tokio::test(start_paused = true)]
async fn no_subject_stops() {
    let log = FetchLog::default();
    let mut poller = Poller::new(PollConfig::new(INTERVAL));

    watch_ok(&mut poller, Some(1), &log);
    advance(Duration::from_millis(10)).await;

    assert!(!watch_ok(&mut poller, None, &log));
    assert!(!poller.is_running());
    assert_eq!(poller.subject(), None);

    advance(INTERVAL * 3).await;
    assert_eq!(log.count(), 1);
}

/// Runs one failing fetch under `policy` and returns every update the view received.
async fn updates_after_failure(policy: StalePolicy) -> Vec<Vec<i64>> {
    let updates = Arc::new(Mutex::new(Vec::new()));
    let mut poller = Poller::new(PollConfig {
        interval: INTERVAL,
        stale_policy: policy,
    });

    let sink = updates.clone();
    let task = poller.watch(
        Some(1_i64),
        |_| async {
            Err::<Vec<i64>, _>(Error::from(ApiError::Status {
                status: 500,
                message: "database unavailable".to_string(),
            }))
        },
        move |items: Vec<i64>| sink.lock().unwrap().push(items),
    );
    if let Some(task) = task {
        tokio::spawn(task);
    }

    advance(Duration::from_millis(10)).await;
    poller.stop();

    let updates = updates.lock().unwrap().clone();
    updates
}

/// Tests a failed fetch under the default policy.
///
/// Expected: the view receives an empty list
#[tokio::test(start_paused = true)]
async fn failure_clears_list_by_default() {
    let updates = updates_after_failure(StalePolicy::default()).await;

    assert_eq!(updates, vec![Vec::<i64>::new()]);
}

/// Tests a failed fetch when the last result should be kept.
///
/// Expected: the view receives nothing
#[tokio::test(start_paused = true)]
async fn failure_keeps_last_when_configured() {
    let updates = updates_after_failure(StalePolicy::KeepLast).await;

    assert!(updates.is_empty());
}
