use database_helper::config::enums::configuration_error::ConfigurationError;
use database_helper::config::structs::configuration::Configuration;
use database_helper::config::structs::database_config::DatabaseConfig;
use database_helper::database::enums::database_drivers::DatabaseDrivers;
use database_helper::database::enums::sql_value::SqlValue;
use database_helper::database::structs::database_connector::DatabaseConnector;
use database_helper::database::traits::database_backend::DatabaseBackend;
use database_helper::logging::setup_logging;
use tempfile::TempDir;

#[test]
fn test_save_and_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let path = path.to_string_lossy();

    let mut config = Configuration::init();
    config.database = DatabaseConfig::mysql("db.internal", "app", "secret", "league")
        .with_port(3307)
        .with_option("ssl-mode", "disabled");
    config.save_to_file(&path).unwrap();

    let loaded = Configuration::load_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.database.engine, DatabaseDrivers::mysql);
}

#[test]
fn test_load_file_rejects_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "log_level = [").unwrap();

    let result = Configuration::load_file(&path.to_string_lossy());
    assert!(matches!(result, Err(ConfigurationError::ParseError(_))));
}

#[test]
fn test_loaded_file_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "log_level = \"info\"\n\n[database]\nengine = \"mysql\"\nusername = \"root\"\n").unwrap();

    let config = Configuration::load_file(&path.to_string_lossy()).unwrap();
    assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
}

#[tokio::test]
async fn test_connector_from_loaded_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    let database_path = dir.path().join("data.db");
    let data = format!(
        "log_level = \"debug\"\n\n[database]\nengine = \"sqlite3\"\npath = {:?}\n",
        database_path.to_string_lossy()
    );
    std::fs::write(&config_path, data).unwrap();

    let config = Configuration::load_file(&config_path.to_string_lossy()).unwrap();
    setup_logging(&config).unwrap();
    assert!(matches!(setup_logging(&config), Err(ConfigurationError::LoggingError(_))));

    let connector = DatabaseConnector::new(&config.database).await.unwrap();
    connector.execute_sql("CREATE TABLE t (id INTEGER PRIMARY KEY, v TEXT)", &[]).await.unwrap();
    let id = connector.insert("t", &[("v", SqlValue::from("logged"))]).await.unwrap();
    assert_eq!(id, Some(1));
    assert!(database_path.exists());
}
