use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use swarm_tracker::common::common::{current_time, setup_logging};
use swarm_tracker::config::enums::configuration_error::ConfigurationError;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::http::http::http_service;
use swarm_tracker::stats::enums::stats_event::StatsEvent;
use swarm_tracker::structs::Cli;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
use swarm_tracker::udp::udp::udp_service;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(ConfigurationError::Created(path)) => {
            println!("Default configuration written to {path}");
            exit(0)
        }
        Err(error) => {
            eprintln!("{error}");
            exit(101)
        }
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("Unable to set up logging: {error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = match TorrentTracker::new(config.clone(), args.create_database).await {
                Ok(tracker) => Arc::new(tracker),
                Err(error) => {
                    error!("[BOOT] Unable to open storage: {error}");
                    exit(1)
                }
            };

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to install the shutdown handler");
                    exit(1)
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in &config.http_server {
                if !http_server_object.enabled {
                    continue;
                }
                let address: SocketAddr = match http_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(_) => {
                        error!("[HTTP] Invalid bind address {}", http_server_object.bind_address);
                        exit(1)
                    }
                };
                let (handle, future) = http_service(address, tracker.clone(), Arc::new(http_server_object.clone())).await?;
                http_handles.push(handle);
                http_futures.push(future);
            }
            if !http_futures.is_empty() {
                tokio::spawn(async move {
                    if let Err(error) = try_join_all(http_futures).await {
                        error!("[HTTP] Server stopped with an error: {error}");
                    }
                });
            }

            let (udp_tx, udp_rx) = tokio::sync::watch::channel(false);
            let mut udp_futures = Vec::new();
            for udp_server_object in &config.udp_server {
                if !udp_server_object.enabled {
                    continue;
                }
                let address: SocketAddr = match udp_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(_) => {
                        error!("[UDP] Invalid bind address {}", udp_server_object.bind_address);
                        exit(1)
                    }
                };
                udp_futures.push(udp_service(address, udp_server_object.receive_buffer_size, tracker.clone(), udp_rx.clone()).await?);
            }

            let reaper_handler = tokio_shutdown.clone();
            let tracker_spawn_reaper = tracker.clone();
            let reaper_interval = tracker_spawn_reaper.announce_interval();
            info!("[BOOT] Starting thread for peer reaping with {reaper_interval} seconds delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(reaper_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            if let Err(error) = tracker_spawn_reaper.reap_all().await {
                                error!("[REAPER] Sweep failed: {error:?}");
                            }
                        }
                        _ = reaper_handler.handle() => {
                            info!("[BOOT] Shutting down thread for peer reaping...");
                            return;
                        }
                    }
                }
            });

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval.max(1)));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            tracker_spawn_stats.set_stats(StatsEvent::TimestampConsole, current_time());
                            info!("{}", tracker_spawn_stats.stats_console_line());
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            for handle in http_handles {
                handle.stop(true).await;
            }

            let _ = udp_tx.send(true);
            if let Err(error) = try_join_all(udp_futures).await {
                error!("Errors happened on shutting down UDP sockets: {error}");
            }

            info!("Waiting for {} background tasks...", tracker.background.in_flight());
            tracker.background.drain().await;
            info!("Server shutting down completed");
            Ok(())
        })
}
