use super::*;

#[test]
fn development_points_at_local_server() {
    let cfg = ApiConfig::for_environment(Environment::Development);
    assert_eq!(cfg.base_url, "http://localhost:3000");
}

#[test]
fn production_points_at_relative_api_path() {
    let cfg = ApiConfig::for_environment(Environment::Production);
    assert_eq!(cfg.base_url, "/api");
}

#[test]
fn resolve_parses_named_environment() {
    let cfg = ApiConfig::resolve(Some("production"), None).unwrap();
    assert_eq!(cfg, ApiConfig::for_environment(Environment::Production));

    let cfg = ApiConfig::resolve(Some("dev"), None).unwrap();
    assert_eq!(cfg.environment, Environment::Development);
}

#[test]
fn resolve_defaults_by_build_profile() {
    let cfg = ApiConfig::resolve(None, None).unwrap();
    let expected = if cfg!(debug_assertions) { Environment::Development } else { Environment::Production };
    assert_eq!(cfg.environment, expected);
}

#[test]
fn resolve_applies_url_override_and_trims_trailing_slash() {
    let cfg = ApiConfig::resolve(Some("production"), Some("https://example.test/users/")).unwrap();
    assert_eq!(cfg.environment, Environment::Production);
    assert_eq!(cfg.base_url, "https://example.test/users");
}

#[test]
fn resolve_ignores_blank_url_override() {
    let cfg = ApiConfig::resolve(Some("development"), Some("   ")).unwrap();
    assert_eq!(cfg.base_url, DEFAULT_DEVELOPMENT_API_URL);
}

#[test]
fn resolve_rejects_unknown_environment() {
    assert_eq!(
        ApiConfig::resolve(Some("staging"), None),
        Err(ConfigError::UnknownEnvironment("staging".to_owned()))
    );
}

#[test]
fn from_build_env_succeeds_without_overrides() {
    if option_env!("SESSION_GATE_ENV").is_none() {
        assert!(ApiConfig::from_build_env().is_ok());
    }
}
