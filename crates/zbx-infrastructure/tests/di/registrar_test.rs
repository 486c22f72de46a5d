//! Registrar tests

use std::sync::Arc;

use zbx_domain::Error;
use zbx_infrastructure::client::ZabbixClient;
use zbx_infrastructure::config::ZabbixConfig;
use zbx_infrastructure::di::ClientRegistrar;

#[test]
fn test_resolve_before_register_fails() {
    let registrar = ClientRegistrar::new();

    let err = registrar.resolve().unwrap_err();
    match err {
        Error::NotRegistered { name } => assert_eq!(name, "zabbix"),
        other => panic!("Expected NotRegistered, got {other:?}"),
    }
    assert!(!registrar.is_registered());
    assert!(registrar.resolve_api().is_err());
}

#[test]
fn test_resolve_returns_the_registered_instance() {
    let registrar = ClientRegistrar::new();
    let registered = registrar
        .register(ZabbixConfig::new("http://example.com"))
        .expect("register");

    let first = registrar.resolve().expect("resolve");
    let second = registrar.resolve().expect("resolve");
    assert!(Arc::ptr_eq(&registered, &first));
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(
        first.endpoint().as_str(),
        "http://example.com/api_jsonrpc.php"
    );
}

#[test]
fn test_second_register_keeps_first_instance() {
    let registrar = ClientRegistrar::new();
    let first = registrar
        .register(ZabbixConfig::new("http://first.example.com"))
        .expect("register");
    let second = registrar
        .register(ZabbixConfig::new("http://second.example.com"))
        .expect("re-register");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(
        registrar.resolve().expect("resolve").endpoint().host_str(),
        Some("first.example.com")
    );
}

#[test]
fn test_failed_register_propagates_and_stays_empty() {
    let registrar = ClientRegistrar::new();
    let err = registrar
        .register(ZabbixConfig::new("http://example.com").with_credentials("", ""))
        .unwrap_err();

    assert!(matches!(err, Error::Authentication { .. }));
    assert!(!registrar.is_registered());

    registrar
        .register(ZabbixConfig::new("http://example.com"))
        .expect("retry with valid config");
    assert!(registrar.is_registered());
}

#[test]
fn test_resolve_api_shares_the_client() {
    let registrar = ClientRegistrar::new();
    registrar
        .register(ZabbixConfig::new("http://example.com").with_auth_token("abc"))
        .expect("register");

    let api = registrar.resolve_api().expect("resolve api");
    assert!(api.auth_mode().is_token());
    assert_eq!(api.endpoint(), "http://example.com/api_jsonrpc.php");
}

#[test]
fn test_registered_name() {
    assert_eq!(ClientRegistrar::default().name(), "zabbix");
}

#[test]
fn test_handle_is_shareable_across_threads() {
    let registrar = Arc::new(ClientRegistrar::new());
    registrar
        .register(ZabbixConfig::new("http://example.com"))
        .expect("register");

    let expected: Arc<ZabbixClient> = registrar.resolve().expect("resolve");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registrar = Arc::clone(&registrar);
            std::thread::spawn(move || registrar.resolve().expect("resolve"))
        })
        .collect();

    for handle in handles {
        let client = handle.join().expect("thread");
        assert!(Arc::ptr_eq(&client, &expected));
    }
}
