//! Logger configuration from a `.env` file

use harbor_migrate::logging;
use log::LevelFilter;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_rust_log_from_env_file_applies() {
    let temp_dir = TempDir::new().unwrap();
    let env_file = temp_dir.path().join(".env");
    fs::write(&env_file, "RUST_LOG=trace\n").unwrap();

    std::env::remove_var("RUST_LOG");
    assert_eq!(logging::builder(false, false).build().filter(), LevelFilter::Info);

    dotenv::from_path(&env_file).unwrap();
    assert_eq!(logging::builder(false, false).build().filter(), LevelFilter::Trace);
}
