use std::io::Write;

use activation_portal::config::{AppConfig, BackendSection, LogFormat};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn file_sections_override_defaults() {
    let file = write_config(
        r#"
[server]
port = 8081

[backend]
base_url = "https://api.example.com/v1/"

[logging]
format = "text"
"#,
    );

    let config = AppConfig::from_file(file.path()).expect("config should load");

    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert_eq!(config.logging.level, "info");
    assert_eq!(
        config.backend_url().unwrap(),
        "https://api.example.com/v1"
    );
}

#[test]
fn unparsable_backend_url_is_rejected() {
    let config = AppConfig {
        backend: BackendSection {
            base_url: "localhost:8080 /v1".into(),
        },
        ..Default::default()
    };

    assert!(
        config.backend_url().is_err(),
        "Expected malformed base URL to fail validation"
    );
}

#[test]
fn non_http_backend_url_is_rejected() {
    let config = AppConfig {
        backend: BackendSection {
            base_url: "ftp://files.example.com".into(),
        },
        ..Default::default()
    };

    assert!(config.backend_url().is_err());
}

#[test]
fn empty_backend_url_is_rejected() {
    let config = AppConfig {
        backend: BackendSection {
            base_url: "   ".into(),
        },
        ..Default::default()
    };

    assert!(config.backend_url().is_err());
}
