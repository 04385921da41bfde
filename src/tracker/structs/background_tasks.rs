use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::{Notify, Semaphore};
use crate::stats::structs::stats_atomics::StatsAtomics;

/// Runs persistence work off the request path.
///
/// At most `permits` tasks touch storage at once; the rest wait for a permit
/// inside their own spawned task, so dispatching never blocks the caller.
/// Tasks run at most once and failures are only logged and counted.
#[derive(Debug, Clone)]
pub struct BackgroundTasks {
    pub(crate) permits: Arc<Semaphore>,
    pub(crate) in_flight: Arc<AtomicUsize>,
    pub(crate) idle: Arc<Notify>,
    pub(crate) stats: Arc<StatsAtomics>,
}
