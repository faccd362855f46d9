//! Loading configuration files from disk.

use segment_router::config::{load_config, ConfigError, ValidationError};

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join("segment_router_config_test.toml");
    std::fs::write(
        &path,
        r#"
        [listener]
        bind_address = "127.0.0.1:9000"

        [routing]
        root_path = "/api"
        method_not_allowed = false

        [timeouts]
        request_secs = 5
        "#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
    assert_eq!(config.routing.root_path, "/api");
    assert!(!config.routing.method_not_allowed);
    assert_eq!(config.timeouts.request_secs, 5);
    assert_eq!(config.observability.log_level, "info");

    std::fs::remove_file(&path).unwrap_or_default();
}

#[test]
fn test_invalid_root_path_rejected() {
    let path = std::env::temp_dir().join("segment_router_bad_root_test.toml");
    std::fs::write(&path, "[routing]\nroot_path = \"api\"\n").unwrap();

    match load_config(&path) {
        Err(ConfigError::Validation(errors)) => {
            assert_eq!(errors, vec![ValidationError::RootPath("api".into())]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    std::fs::remove_file(&path).unwrap_or_default();
}
