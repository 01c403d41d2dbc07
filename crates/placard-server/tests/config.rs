use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use placard_server::config::Config;

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<Config> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    assert!(config.chrome.executable.is_none());
    assert!(!config.chrome.no_sandbox);
    assert_eq!(config.chrome.timeout, Duration::from_secs(30));
    assert_eq!(config.chrome.settle, Duration::ZERO);
    assert_eq!(config.chrome.ready_poll, Duration::from_millis(50));
}

#[test]
fn reads_every_variable() {
    let config = config_from(&[
        ("PLACARD_BIND_ADDR", "127.0.0.1:9000"),
        ("CHROME_PATH", "/usr/bin/chromium"),
        ("PLACARD_NO_SANDBOX", "true"),
        ("PLACARD_EXPORT_TIMEOUT_SECS", "12"),
        ("PLACARD_SETTLE_MS", "2000"),
        ("PLACARD_READY_POLL_MS", "10"),
    ])
    .unwrap();

    assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    assert_eq!(config.chrome.executable, Some(PathBuf::from("/usr/bin/chromium")));
    assert!(config.chrome.no_sandbox);
    assert_eq!(config.chrome.timeout, Duration::from_secs(12));
    assert_eq!(config.chrome.settle, Duration::from_secs(2));
    assert_eq!(config.chrome.ready_poll, Duration::from_millis(10));
}

#[test]
fn empty_values_fall_back_to_defaults() {
    let config = config_from(&[("CHROME_PATH", ""), ("PLACARD_BIND_ADDR", "  ")]).unwrap();
    assert!(config.chrome.executable.is_none());
    assert_eq!(config.bind_addr.port(), 8080);
}

#[test]
fn invalid_values_name_the_variable() {
    let err = config_from(&[("PLACARD_EXPORT_TIMEOUT_SECS", "soon")]).unwrap_err();
    assert!(err.to_string().contains("PLACARD_EXPORT_TIMEOUT_SECS"));

    let err = config_from(&[("PLACARD_NO_SANDBOX", "maybe")]).unwrap_err();
    assert!(err.to_string().contains("PLACARD_NO_SANDBOX"));

    let err = config_from(&[("PLACARD_BIND_ADDR", "not-an-addr")]).unwrap_err();
    assert!(err.to_string().contains("PLACARD_BIND_ADDR"));
}

#[test]
fn zero_timeout_is_rejected() {
    assert!(config_from(&[("PLACARD_EXPORT_TIMEOUT_SECS", "0")]).is_err());
}

#[test]
fn zero_ready_poll_is_rejected() {
    let err = config_from(&[("PLACARD_READY_POLL_MS", "0")]).unwrap_err();
    assert!(err.to_string().contains("PLACARD_READY_POLL_MS"));
}
