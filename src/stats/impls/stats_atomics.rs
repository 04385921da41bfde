use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new(started: i64) -> StatsAtomics
    {
        let stats = StatsAtomics::default();
        stats.started.store(started, Ordering::SeqCst);
        stats
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Files => &self.files,
            StatsEvent::PeersReaped => &self.peers_reaped,
            StatsEvent::BackgroundFailures => &self.background_failures,
            StatsEvent::TimestampReaper => &self.timestamp_run_reaper,
            StatsEvent::TimestampConsole => &self.timestamp_run_console,
            StatsEvent::Tcp4ConnectionsHandled => &self.tcp4_connections_handled,
            StatsEvent::Tcp4AnnouncesHandled => &self.tcp4_announces_handled,
            StatsEvent::Tcp4ScrapesHandled => &self.tcp4_scrapes_handled,
            StatsEvent::Tcp4Failure => &self.tcp4_failure,
            StatsEvent::Tcp4NotFound => &self.tcp4_not_found,
            StatsEvent::Tcp6ConnectionsHandled => &self.tcp6_connections_handled,
            StatsEvent::Tcp6AnnouncesHandled => &self.tcp6_announces_handled,
            StatsEvent::Tcp6ScrapesHandled => &self.tcp6_scrapes_handled,
            StatsEvent::Tcp6Failure => &self.tcp6_failure,
            StatsEvent::Tcp6NotFound => &self.tcp6_not_found,
            StatsEvent::Udp4ConnectionsHandled => &self.udp4_connections_handled,
            StatsEvent::Udp4AnnouncesHandled => &self.udp4_announces_handled,
            StatsEvent::Udp4ScrapesHandled => &self.udp4_scrapes_handled,
            StatsEvent::Udp4BadRequest => &self.udp4_bad_request,
            StatsEvent::Udp4InvalidRequest => &self.udp4_invalid_request,
            StatsEvent::Udp6ConnectionsHandled => &self.udp6_connections_handled,
            StatsEvent::Udp6AnnouncesHandled => &self.udp6_announces_handled,
            StatsEvent::Udp6ScrapesHandled => &self.udp6_scrapes_handled,
            StatsEvent::Udp6BadRequest => &self.udp6_bad_request,
            StatsEvent::Udp6InvalidRequest => &self.udp6_invalid_request,
        }
    }

    pub fn update(&self, event: StatsEvent, value: i64)
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set(&self, event: StatsEvent, value: i64)
    {
        self.counter(event).store(value, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            timestamp_run_reaper: self.timestamp_run_reaper.load(Ordering::SeqCst),
            timestamp_run_console: self.timestamp_run_console.load(Ordering::SeqCst),
            files: self.files.load(Ordering::SeqCst),
            peers_reaped: self.peers_reaped.load(Ordering::SeqCst),
            background_failures: self.background_failures.load(Ordering::SeqCst),
            tcp4_connections_handled: self.tcp4_connections_handled.load(Ordering::SeqCst),
            tcp4_announces_handled: self.tcp4_announces_handled.load(Ordering::SeqCst),
            tcp4_scrapes_handled: self.tcp4_scrapes_handled.load(Ordering::SeqCst),
            tcp4_failure: self.tcp4_failure.load(Ordering::SeqCst),
            tcp4_not_found: self.tcp4_not_found.load(Ordering::SeqCst),
            tcp6_connections_handled: self.tcp6_connections_handled.load(Ordering::SeqCst),
            tcp6_announces_handled: self.tcp6_announces_handled.load(Ordering::SeqCst),
            tcp6_scrapes_handled: self.tcp6_scrapes_handled.load(Ordering::SeqCst),
            tcp6_failure: self.tcp6_failure.load(Ordering::SeqCst),
            tcp6_not_found: self.tcp6_not_found.load(Ordering::SeqCst),
            udp4_connections_handled: self.udp4_connections_handled.load(Ordering::SeqCst),
            udp4_announces_handled: self.udp4_announces_handled.load(Ordering::SeqCst),
            udp4_scrapes_handled: self.udp4_scrapes_handled.load(Ordering::SeqCst),
            udp4_bad_request: self.udp4_bad_request.load(Ordering::SeqCst),
            udp4_invalid_request: self.udp4_invalid_request.load(Ordering::SeqCst),
            udp6_connections_handled: self.udp6_connections_handled.load(Ordering::SeqCst),
            udp6_announces_handled: self.udp6_announces_handled.load(Ordering::SeqCst),
            udp6_scrapes_handled: self.udp6_scrapes_handled.load(Ordering::SeqCst),
            udp6_bad_request: self.udp6_bad_request.load(Ordering::SeqCst),
            udp6_invalid_request: self.udp6_invalid_request.load(Ordering::SeqCst),
        }
    }
}
