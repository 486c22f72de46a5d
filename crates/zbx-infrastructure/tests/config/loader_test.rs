//! Layered loader tests
//!
//! Every test runs inside a `figment::Jail`, which serializes access to the
//! process environment and working directory and restores both afterwards.

use figment::Jail;
use zbx_domain::Error;
use zbx_infrastructure::config::{AppConfig, ConfigLoader, ZabbixConfig};

#[test]
fn test_defaults_when_nothing_is_set() {
    Jail::expect_with(|jail| {
        jail.clear_env();

        let config = ConfigLoader::new().load().expect("defaults should load");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.zabbix.host, "localhost");
        assert_eq!(config.zabbix.api_file, "api_jsonrpc.php");
        assert_eq!(config.zabbix.username, "admin");
        assert_eq!(config.zabbix.password, "zabbix");
        assert_eq!(config.zabbix.http_username, None);
        assert_eq!(config.zabbix.http_password, None);
        assert_eq!(config.zabbix.auth_token, None);
        assert_eq!(config.zabbix.ssl_context, None);
        assert!(config.zabbix.check_ssl);
        Ok(())
    });
}

#[test]
fn test_every_env_var_is_reflected() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("ZABBIX_HOST", "https://zabbix.example.com");
        jail.set_env("ZABBIX_API_FILE", "zabbix/api_jsonrpc.php");
        jail.set_env("ZABBIX_USERNAME", "monitor");
        jail.set_env("ZABBIX_PASSWORD", "s3cret");
        jail.set_env("ZABBIX_HTTP_USERNAME", "proxy");
        jail.set_env("ZABBIX_HTTP_PASSWORD", "proxy-pass");
        jail.set_env("ZABBIX_AUTH_TOKEN", "token-123");
        jail.set_env("ZABBIX_SSL_CONTEXT", "/etc/ssl/zabbix.pem");
        jail.set_env("ZABBIX_CHECK_SSL", "false");
        jail.set_env("ZABBIX_TIMEOUT_SECS", "5");

        let config = ConfigLoader::new().load().expect("env config should load");
        let expected = ZabbixConfig {
            host: "https://zabbix.example.com".to_string(),
            api_file: "zabbix/api_jsonrpc.php".to_string(),
            username: "monitor".to_string(),
            password: "s3cret".to_string(),
            http_username: Some("proxy".to_string()),
            http_password: Some("proxy-pass".to_string()),
            auth_token: Some("token-123".to_string()),
            ssl_context: Some("/etc/ssl/zabbix.pem".to_string()),
            check_ssl: false,
            timeout_secs: 5,
        };
        assert_eq!(config.zabbix, expected);
        Ok(())
    });
}

#[test]
fn test_omitted_vars_fall_back_to_defaults() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("ZABBIX_HOST", "http://example.com");
        jail.set_env("ZABBIX_HTTP_USERNAME", "proxy");

        let config = ConfigLoader::new().load().expect("partial env should load");
        assert_eq!(config.zabbix.host, "http://example.com");
        assert_eq!(config.zabbix.http_username.as_deref(), Some("proxy"));
        assert_eq!(config.zabbix.api_file, "api_jsonrpc.php");
        assert_eq!(config.zabbix.username, "admin");
        assert_eq!(config.zabbix.password, "zabbix");
        assert_eq!(config.zabbix.http_password, None);
        assert!(config.zabbix.check_ssl);
        Ok(())
    });
}

#[test]
fn test_check_ssl_spellings() {
    for (raw, expected) in [
        ("true", true),
        ("false", false),
        ("0", false),
        ("1", true),
        ("no", false),
        ("ON", true),
    ] {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("ZABBIX_CHECK_SSL", raw);

            let config = ConfigLoader::new().load().expect("bool should parse");
            assert_eq!(config.zabbix.check_ssl, expected, "ZABBIX_CHECK_SSL={raw}");
            Ok(())
        });
    }
}

#[test]
fn test_invalid_check_ssl_is_rejected() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("ZABBIX_CHECK_SSL", "maybe");

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}

#[test]
fn test_string_values_load_verbatim() {
    for raw in ["12345", "007", "1.10", "+42", "1e3", "true", " padded ", "[a, b]"] {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("ZABBIX_USERNAME", raw);
            jail.set_env("ZABBIX_PASSWORD", raw);
            jail.set_env("ZABBIX_AUTH_TOKEN", raw);
            jail.set_env("ZABBIX_HTTP_USERNAME", raw);
            jail.set_env("ZABBIX_HTTP_PASSWORD", raw);

            let config = ConfigLoader::new().load().expect("string values should load");
            assert_eq!(config.zabbix.username, raw, "ZABBIX_USERNAME={raw:?}");
            assert_eq!(config.zabbix.password, raw, "ZABBIX_PASSWORD={raw:?}");
            assert_eq!(config.zabbix.auth_token.as_deref(), Some(raw));
            assert_eq!(config.zabbix.http_username.as_deref(), Some(raw));
            assert_eq!(config.zabbix.http_password.as_deref(), Some(raw));
            Ok(())
        });
    }
}

#[test]
fn test_numeric_secrets_in_file_stay_strings() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "zbx.toml",
            r#"
            [zabbix]
            password = 12345
            auth_token = 98765
            "#,
        )?;

        let config = ConfigLoader::new().load().expect("numeric values should load");
        assert_eq!(config.zabbix.password, "12345");
        assert_eq!(config.zabbix.auth_token.as_deref(), Some("98765"));
        Ok(())
    });
}

#[test]
fn test_host_and_api_file_load_verbatim() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("ZABBIX_HOST", "10.0.0.1");
        jail.set_env("ZABBIX_API_FILE", "007");

        let config = ConfigLoader::new().load().expect("env config should load");
        assert_eq!(config.zabbix.host, "10.0.0.1");
        assert_eq!(config.zabbix.api_file, "007");
        Ok(())
    });
}

#[test]
fn test_empty_optional_values_are_absent() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("ZABBIX_AUTH_TOKEN", "");
        jail.set_env("ZABBIX_HTTP_USERNAME", "");

        let config = ConfigLoader::new().load().expect("empty values should load");
        assert_eq!(config.zabbix.auth_token, None);
        assert_eq!(config.zabbix.http_username, None);
        Ok(())
    });
}

#[test]
fn test_token_allows_empty_credentials() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "zbx.toml",
            r#"
            [zabbix]
            username = ""
            password = ""
            auth_token = "token-123"
            "#,
        )?;

        let config = ConfigLoader::new().load().expect("token config should load");
        assert!(config.zabbix.auth_mode().expect("auth mode").is_token());
        Ok(())
    });
}

#[test]
fn test_missing_credentials_without_token_fail() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "zbx.toml",
            r#"
            [zabbix]
            password = ""
            "#,
        )?;

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("Invalid Zabbix credentials"));
        Ok(())
    });
}

#[test]
fn test_file_then_env_then_override_precedence() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "zbx.toml",
            r#"
            [zabbix]
            host = "http://from-file"
            username = "file-user"
            api_file = "file/api_jsonrpc.php"

            [logging]
            level = "debug"
            "#,
        )?;
        jail.set_env("ZABBIX_HOST", "http://from-env");
        jail.set_env("ZABBIX_USERNAME", "env-user");

        let config = ConfigLoader::new()
            .with_override("zabbix.host", "http://from-override")
            .load()
            .expect("layered config should load");

        assert_eq!(config.zabbix.host, "http://from-override");
        assert_eq!(config.zabbix.username, "env-user");
        assert_eq!(config.zabbix.api_file, "file/api_jsonrpc.php");
        assert_eq!(config.zabbix.password, "zabbix");
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_explicit_config_path() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "custom.toml",
            r#"
            [zabbix]
            host = "http://custom"
            check_ssl = false
            "#,
        )?;

        let loader = ConfigLoader::new().with_config_path("custom.toml");
        let config = loader.load().expect("explicit file should load");
        assert_eq!(config.zabbix.host, "http://custom");
        assert!(!config.zabbix.check_ssl);
        assert!(loader.config_path().is_some());
        Ok(())
    });
}

#[test]
fn test_missing_explicit_config_path_uses_defaults() {
    Jail::expect_with(|jail| {
        jail.clear_env();

        let config = ConfigLoader::new()
            .with_config_path("does-not-exist.toml")
            .load()
            .expect("missing file should fall back to defaults");
        assert_eq!(config, AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("MONITORING_HOST", "http://monitoring");
        jail.set_env("ZABBIX_HOST", "http://ignored");

        let config = ConfigLoader::new()
            .with_env_prefix("MONITORING")
            .load()
            .expect("custom prefix should load");
        assert_eq!(config.zabbix.host, "http://monitoring");
        Ok(())
    });
}

#[test]
fn test_validation_rejects_bad_values() {
    for (key, value) in [
        ("ZABBIX_HOST", "  "),
        ("ZABBIX_API_FILE", " "),
        ("ZABBIX_TIMEOUT_SECS", "0"),
    ] {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env(key, value);

            let err = ConfigLoader::new().load().unwrap_err();
            assert!(
                matches!(err, Error::Configuration { .. }),
                "{key}={value:?} should be rejected, got {err:?}"
            );
            Ok(())
        });
    }
}

#[test]
fn test_invalid_log_level_is_rejected() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "zbx.toml",
            r#"
            [logging]
            level = "loud"
            "#,
        )?;

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
        Ok(())
    });
}

#[test]
fn test_debug_output_redacts_secrets() {
    let config = ZabbixConfig::new("http://example.com")
        .with_credentials("admin", "hunter2")
        .with_auth_token("token-xyz")
        .with_http_auth("proxy", "proxy-secret");

    let debug = format!("{config:?}");
    assert!(debug.contains("http://example.com"));
    assert!(!debug.contains("hunter2"));
    assert!(!debug.contains("token-xyz"));
    assert!(!debug.contains("proxy-secret"));
}
