//! Real-time statistics tracking.
//!
//! Atomic counters for tracker activity, split per transport and address
//! family the way clients reach the tracker:
//!
//! - TCP (HTTP) IPv4/IPv6 connections, announces, scrapes, failures
//! - UDP IPv4/IPv6 connections, announces, scrapes, bad and rejected requests
//! - Files registered, peers reaped, failed background writes
//!
//! All statistics are stored as atomic integers, allowing safe concurrent
//! updates from every request task without locking.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::Udp4AnnouncesHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;
