use super::*;

use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::task::{Context, Poll};

/// Never-ready future that records when it is dropped and how often polled.
struct Tracked {
    dropped: Arc<AtomicBool>,
    polls: Arc<AtomicUsize>,
}

impl Future for Tracked {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        Poll::Pending
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.dropped.store(true, Ordering::SeqCst);
    }
}

fn tracked() -> (Tracked, Arc<AtomicBool>, Arc<AtomicUsize>) {
    let dropped = Arc::new(AtomicBool::new(false));
    let polls = Arc::new(AtomicUsize::new(0));
    (Tracked { dropped: dropped.clone(), polls: polls.clone() }, dropped, polls)
}

#[tokio::test]
async fn work_before_deadline_completes() {
    let raced = first_of(async { 7 }, std::future::pending::<()>()).await;
    assert_eq!(raced, Raced::Completed(7));
    assert_eq!(raced.completed(), Some(7));
}

#[tokio::test]
async fn deadline_before_work_times_out() {
    let raced = first_of(std::future::pending::<u8>(), async {}).await;
    assert_eq!(raced, Raced::TimedOut);
    assert_eq!(raced.completed(), None);
}

#[tokio::test]
async fn losing_work_is_dropped_on_timeout() {
    let (work, dropped, polls) = tracked();
    let raced = first_of(work, async {}).await;
    assert_eq!(raced, Raced::TimedOut);
    assert!(dropped.load(Ordering::SeqCst));

    let polls_at_settle = polls.load(Ordering::SeqCst);
    tokio::task::yield_now().await;
    assert_eq!(polls.load(Ordering::SeqCst), polls_at_settle);
}

#[tokio::test]
async fn losing_deadline_is_dropped_on_completion() {
    let (deadline, dropped, _) = tracked();
    let raced = first_of(async { "done" }, deadline).await;
    assert_eq!(raced, Raced::Completed("done"));
    assert!(dropped.load(Ordering::SeqCst));
}

#[tokio::test]
async fn simultaneous_readiness_prefers_work() {
    let raced = first_of(async { 1 }, async {}).await;
    assert_eq!(raced, Raced::Completed(1));
}

#[tokio::test(start_paused = true)]
async fn real_timer_bounds_slow_work() {
    let slow = tokio::time::sleep(std::time::Duration::from_secs(10));
    let deadline = tokio::time::sleep(std::time::Duration::from_secs(3));
    let raced = first_of(slow, deadline).await;
    assert_eq!(raced, Raced::TimedOut);
}
