use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use log::warn;
use tokio::sync::{Notify, Semaphore};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::background_tasks::BackgroundTasks;

impl BackgroundTasks {
    pub fn new(workers: usize, stats: Arc<StatsAtomics>) -> BackgroundTasks
    {
        BackgroundTasks {
            permits: Arc::new(Semaphore::new(workers.max(1))),
            in_flight: Arc::new(AtomicUsize::new(0)),
            idle: Arc::new(Notify::new()),
            stats,
        }
    }

    /// Spawns `task` and returns immediately. Must be called from inside a
    /// tokio runtime.
    pub fn dispatch<F>(&self, label: &'static str, task: F)
    where
        F: Future<Output = Result<(), TrackerError>> + Send + 'static,
    {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let permits = self.permits.clone();
        let in_flight = self.in_flight.clone();
        let idle = self.idle.clone();
        let stats = self.stats.clone();
        tokio::spawn(async move {
            let result = match permits.acquire_owned().await {
                Ok(_permit) => task.await,
                Err(_) => Ok(())
            };
            if let Err(error) = result {
                warn!("[BACKGROUND] {label} failed: {error:?}");
                stats.update(StatsEvent::BackgroundFailures, 1);
            }
            if in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
                idle.notify_waiters();
            }
        });
    }

    pub fn in_flight(&self) -> usize
    {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Resolves once every dispatched task has finished, including tasks
    /// dispatched while waiting.
    pub async fn drain(&self)
    {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.in_flight() == 0 {
                return;
            }
            notified.await;
        }
    }
}
