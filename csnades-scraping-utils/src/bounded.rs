use std::future::Future;

use futures::stream::{self, StreamExt};

/// Runs every job with at most `limit` of them in flight at once.
///
/// Jobs are admitted in iteration order, and whenever one settles the next
/// pending job starts immediately. Outcomes are correlated back to the slot
/// they were submitted under, so the returned vector lines up with the input
/// order no matter which jobs finish first. A `limit` of zero is treated as
/// one. Job futures are polled within the calling task; nothing is spawned.
pub async fn run_bounded<I>(jobs: I, limit: usize) -> Vec<<I::Item as Future>::Output>
where
    I: IntoIterator,
    I::Item: Future,
{
    let slotted = jobs
        .into_iter()
        .enumerate()
        .map(|(slot, job)| async move { (slot, job.await) });
    let mut outcomes: Vec<_> = stream::iter(slotted)
        .buffer_unordered(limit.max(1))
        .collect()
        .await;
    outcomes.sort_unstable_by_key(|&(slot, _)| slot);
    outcomes.into_iter().map(|(_, output)| output).collect()
}
