//! Environment overrides live in their own test binary so they cannot race other config tests.

use transit_relay::config::AppConfig;

#[test]
fn environment_overrides_file_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("relay.toml");
    std::fs::write(
        &path,
        "[upstream]\napp_id = \"from-file\"\ntimeout_secs = 4\n",
    )
    .unwrap();

    std::env::set_var("RELAY_UPSTREAM__APP_ID", "from-env");
    std::env::set_var("RELAY_SERVER__PORT", "9200");
    std::env::set_var(
        "RELAY_CORS__ALLOWED_ORIGINS",
        "https://a.example,https://b.example",
    );

    let config = AppConfig::load_from(&path).expect("config should load");

    std::env::remove_var("RELAY_UPSTREAM__APP_ID");
    std::env::remove_var("RELAY_SERVER__PORT");
    std::env::remove_var("RELAY_CORS__ALLOWED_ORIGINS");

    assert_eq!(config.upstream.app_id, "from-env");
    assert_eq!(config.upstream.timeout_secs, 4);
    assert_eq!(config.server.port, 9200);
    assert_eq!(
        config.cors.allowed_origins,
        vec!["https://a.example", "https://b.example"]
    );
}
