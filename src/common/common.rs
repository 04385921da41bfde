use std::collections::HashMap;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::config::structs::configuration::Configuration;

/// Splits a raw query string into a multi-valued map of percent-decoded
/// values. Keys are lowercased; a key without `=` maps to an empty value.
pub fn parse_query(query: Option<String>) -> HashMap<String, Vec<Vec<u8>>>
{
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let raw = match query {
        None => { return queries; }
        Some(raw) => raw
    };
    for query_item in raw.split('&') {
        if query_item.is_empty() {
            continue;
        }
        let (key_name_raw, value_data_raw) = match query_item.split_once('=') {
            Some((key, value)) => (key, value),
            None => (query_item, "")
        };
        let key_name = percent_encoding::percent_decode_str(key_name_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let value_data = percent_encoding::percent_decode_str(value_data_raw).collect::<Vec<u8>>();
        queries.entry(key_name).or_default().push(value_data);
    }
    queries
}

pub fn log_level_filter(level: &str) -> Option<log::LevelFilter>
{
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), log::SetLoggerError>
{
    let level = log_level_filter(config.log_level.as_str()).unwrap_or(log::LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()?;
    info!("logging initialized.");
    Ok(())
}

/// Current unix time in seconds.
pub fn current_time() -> i64
{
    chrono::Utc::now().timestamp()
}
