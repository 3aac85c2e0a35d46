//! Fixed-interval driver of the simulated progress bar.

use gloo_timers::future::TimeoutFuture;

use crate::config::{PROGRESS_STEPS, PROGRESS_TICK_MS};
use crate::state::Event;

/// Emit one [`Event::ProgressTick`] every [`PROGRESS_TICK_MS`] for
/// `attempt`, at most [`PROGRESS_STEPS`] times.
///
/// `dispatch` returns whether the event was applied; the ticker stops as
/// soon as the attempt is no longer in flight.
pub async fn run_progress_ticker<D>(attempt: u64, dispatch: D)
where
    D: Fn(Event) -> bool,
{
    for _ in 0..PROGRESS_STEPS {
        TimeoutFuture::new(PROGRESS_TICK_MS).await;
        if !dispatch(Event::ProgressTick { attempt }) {
            return;
        }
    }
    log::debug!("Simulated progress reached its cap for attempt {}", attempt);
}
