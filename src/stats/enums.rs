/// Every counter that can be updated.
pub mod stats_event;
