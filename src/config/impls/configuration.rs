use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::config::structs::udp_trackers_config::UdpTrackersConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl Configuration {
    pub fn init() -> Configuration {
        let threads = available_parallelism().map(|n| n.get() as u64).unwrap_or(1);
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                announce_interval: 1800,
                max_numwant: 50,
                require_passkey: false,
                whitelist_enabled: false,
                background_workers: 64,
                connection_ttl: 120,
            },
            database: DatabaseConfig {
                engine: DatabaseDrivers::sqlite3,
                path: String::from("sqlite://data.db"),
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:6969"),
                    real_ip: String::from("X-Real-IP"),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    threads,
                }
            ),
            udp_server: vec!(
                UdpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:6969"),
                    receive_buffer_size: 1_048_576,
                }
            ),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    /// Loads and validates `path`. When the file is missing or unreadable and
    /// `create` is set, a default configuration is written there instead and
    /// `ConfigurationError::Created` is returned so the operator can edit it.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(ConfigurationError::NotFound(path.to_string()));
                }
                eprintln!("Creating config file..");
                let config_toml = toml::to_string(&Configuration::init())?;
                Configuration::save_file(path, config_toml)?;
                return Err(ConfigurationError::Created(path.to_string()));
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Self::validate_value("log_level", &self.log_level, r"^(off|trace|debug|info|warn|error)$")?;
        if self.database.engine != DatabaseDrivers::memory {
            Self::validate_value("database.path", &self.database.path, r"^(sqlite|mysql):\S+$")?;
        }

        let tracker_config = &self.tracker_config;
        if tracker_config.announce_interval == 0 {
            return Err(ConfigurationError::Invalid(String::from("tracker_config.announce_interval must be greater than 0")));
        }
        if tracker_config.max_numwant == 0 {
            return Err(ConfigurationError::Invalid(String::from("tracker_config.max_numwant must be greater than 0")));
        }
        if tracker_config.background_workers == 0 {
            return Err(ConfigurationError::Invalid(String::from("tracker_config.background_workers must be greater than 0")));
        }
        if tracker_config.connection_ttl == 0 {
            return Err(ConfigurationError::Invalid(String::from("tracker_config.connection_ttl must be greater than 0")));
        }

        let bind_addresses = self.http_server.iter().map(|server| &server.bind_address)
            .chain(self.udp_server.iter().map(|server| &server.bind_address));
        for bind_address in bind_addresses {
            if bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::Invalid(format!("bind_address \"{bind_address}\" is not a valid socket address")));
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|e| ConfigurationError::Invalid(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::Invalid(format!("Error checking {name} [:] Value: \"{value}\" [:] Regex: \"{regex_check}\"")));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}
