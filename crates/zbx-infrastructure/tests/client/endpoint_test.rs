//! Endpoint URL resolution tests

use zbx_domain::Error;
use zbx_infrastructure::client::build_endpoint;

#[test]
fn test_host_and_api_file_are_joined() {
    let url = build_endpoint("http://example.com", "api_jsonrpc.php").expect("valid");
    assert_eq!(url.as_str(), "http://example.com/api_jsonrpc.php");
}

#[test]
fn test_duplicate_slashes_collapse() {
    let url = build_endpoint("http://example.com/", "/api_jsonrpc.php").expect("valid");
    assert_eq!(url.as_str(), "http://example.com/api_jsonrpc.php");
}

#[test]
fn test_host_with_path_prefix() {
    let url = build_endpoint("https://example.com/zabbix", "api_jsonrpc.php").expect("valid");
    assert_eq!(url.as_str(), "https://example.com/zabbix/api_jsonrpc.php");
}

#[test]
fn test_scheme_less_host_defaults_to_http() {
    let url = build_endpoint("localhost", "api_jsonrpc.php").expect("valid");
    assert_eq!(url.as_str(), "http://localhost/api_jsonrpc.php");

    let url = build_endpoint("zabbix.internal:8080", "api_jsonrpc.php").expect("valid");
    assert_eq!(url.as_str(), "http://zabbix.internal:8080/api_jsonrpc.php");
}

#[test]
fn test_empty_host_is_rejected() {
    let err = build_endpoint("   ", "api_jsonrpc.php").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_malformed_host_is_rejected() {
    let err = build_endpoint("http://exa mple.com", "api_jsonrpc.php").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("Invalid Zabbix endpoint URL"));
}
