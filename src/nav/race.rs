//! First-of race between a unit of work and a deadline.

#[cfg(test)]
#[path = "race_test.rs"]
mod race_test;

use std::future::Future;

use futures::future::{Either, select};

/// Which side of a [`first_of`] race settled first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Raced<T> {
    Completed(T),
    TimedOut,
}

impl<T> Raced<T> {
    #[must_use]
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::TimedOut => None,
        }
    }
}

/// Run `work` against `deadline`; whichever settles first wins.
///
/// The loser is dropped before this returns, so it can never fire afterwards.
/// Dropping `work` cancels the wait, not necessarily whatever side effect it
/// already started (an in-flight browser request keeps running).
pub async fn first_of<W, D>(work: W, deadline: D) -> Raced<W::Output>
where
    W: Future,
    D: Future<Output = ()>,
{
    match select(Box::pin(work), Box::pin(deadline)).await {
        Either::Left((value, _deadline)) => Raced::Completed(value),
        Either::Right(((), _work)) => Raced::TimedOut,
    }
}
