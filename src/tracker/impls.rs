//! Implementation blocks for tracker data structures.

/// AnnounceEvent implementation: conversion methods.
pub mod announce_event;

/// InfoHash implementation: Display, FromStr, Serialize, Deserialize.
pub mod info_hash;

/// BackgroundTasks implementation: dispatch and drain.
pub mod background_tasks;

/// TorrentTracker core implementation: construction and formatter selection.
pub mod torrent_tracker;

/// TorrentTracker announce/scrape request handlers.
pub mod torrent_tracker_handlers;

/// TorrentTracker peer reaper.
pub mod torrent_tracker_reaper;

/// TorrentTracker passkey and client whitelist checks.
pub mod torrent_tracker_users;
