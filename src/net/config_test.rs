use super::*;

#[test]
fn defaults_match_backend_contract() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.base_url, "http://127.0.0.1:5000/api");
    assert_eq!(cfg.timeout, Duration::from_millis(10_000));
    assert_eq!(cfg.content_type, "application/json");
}

#[test]
fn from_values_without_overrides_uses_defaults() {
    assert_eq!(ClientConfig::from_values(None, None), ClientConfig::default());
}

#[test]
fn from_values_trims_trailing_slash_on_base() {
    let cfg = ClientConfig::from_values(Some("https://tutor.example/api/"), None);
    assert_eq!(cfg.base_url, "https://tutor.example/api");
}

#[test]
fn from_values_ignores_blank_base() {
    let cfg = ClientConfig::from_values(Some("   "), None);
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_values_parses_timeout_override() {
    let cfg = ClientConfig::from_values(None, Some("2500"));
    assert_eq!(cfg.timeout, Duration::from_millis(2500));
}

#[test]
fn from_values_rejects_zero_and_garbage_timeouts() {
    assert_eq!(ClientConfig::from_values(None, Some("0")).timeout, Duration::from_millis(10_000));
    let config = ClientConfig::from_values(None, Some("soon"));
    assert_eq!(config.timeout, Duration::from_millis(10_000));
}

#[test]
fn url_for_joins_with_and_without_leading_slash() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.url_for("/course/42"), "http://127.0.0.1:5000/api/course/42");
    assert_eq!(cfg.url_for("users"), "http://127.0.0.1:5000/api/users");
}
