use vr_extras::config::LoggingConfig;
use vr_extras::logger;

#[test]
fn test_init_disabled_installs_nothing() {
    let config = LoggingConfig::default();
    assert!(!config.enabled);
    assert!(logger::init(&config).is_ok());
}

#[test]
fn test_build_dispatch_rejects_unknown_level() {
    let config = LoggingConfig {
        enabled: true,
        level: "loud".to_string(),
        log_to_file: false,
    };
    assert!(logger::build_dispatch(&config).is_err());
}

#[test]
fn test_build_dispatch_for_stderr() {
    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
        log_to_file: false,
    };
    assert!(logger::build_dispatch(&config).is_ok());
}

#[test]
fn test_log_file_path() {
    if let Ok(path) = logger::get_log_file_path() {
        assert!(path.ends_with("vr-extras/vr-extras.log"));
    }
}
