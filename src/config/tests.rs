#[cfg(test)]
mod config_tests {
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::structs::configuration::Configuration;
    use crate::database::enums::database_drivers::DatabaseDrivers;

    #[test]
    fn test_default_configuration_is_valid() {
        let config = Configuration::init();
        assert!(config.validate().is_ok(), "Default configuration should validate");
        assert_eq!(config.tracker_config.max_numwant, 50);
        assert_eq!(config.tracker_config.connection_ttl, 120);
    }

    #[test]
    fn test_configuration_toml_round_trip() {
        let config = Configuration::init();
        let serialized = toml::to_string(&config).unwrap();
        let loaded = Configuration::load(serialized.as_bytes()).unwrap();

        assert_eq!(loaded.log_level, config.log_level);
        assert_eq!(loaded.tracker_config.announce_interval, config.tracker_config.announce_interval);
        assert_eq!(loaded.database.engine, DatabaseDrivers::sqlite3);
        assert_eq!(loaded.http_server.len(), 1);
        assert_eq!(loaded.udp_server[0].bind_address, "0.0.0.0:6969");
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = Configuration::init();
        config.tracker_config.announce_interval = 0;
        assert!(matches!(config.validate(), Err(ConfigurationError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_bind_address() {
        let mut config = Configuration::init();
        config.udp_server[0].bind_address = String::from("localhost");
        assert!(matches!(config.validate(), Err(ConfigurationError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = Configuration::init();
        config.log_level = String::from("loud");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();

        assert!(matches!(Configuration::load_from_file(path, false), Err(ConfigurationError::NotFound(_))));
        assert!(matches!(Configuration::load_from_file(path, true), Err(ConfigurationError::Created(_))));

        let config = Configuration::load_from_file(path, false).unwrap();
        assert_eq!(config.tracker_config.announce_interval, 1800);
    }
}
