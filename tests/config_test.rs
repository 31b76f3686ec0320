// tests/config_test.rs
use std::io::Write;
use std::path::Path;

use tandem_release::config::{load_config, Config};
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.remote, "origin");
    assert_eq!(config.changelog, "CHANGELOG.md");
    assert_eq!(config.tagged.prefix, "server-go");
    assert_eq!(config.manifest.name, "client-js");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
remote = "upstream"

[tagged]
prefix = "modal-go"
module = "github.com/modal-labs/libmodal/modal-go"

[manifest]
name = "modal-js"
dir = "modal-js"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Path::new("."), Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.remote, "upstream");
    assert_eq!(config.tagged.prefix, "modal-go");
    assert_eq!(config.tagged.module, "github.com/modal-labs/libmodal/modal-go");
    assert_eq!(config.manifest.name, "modal-js");
    // Unset values keep their defaults
    assert_eq!(config.changelog, "CHANGELOG.md");
    assert_eq!(config.tagged.proxy, "proxy.golang.org");
}

#[test]
fn test_load_from_repository_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("release.toml"),
        "[tagged]\nprefix = \"lib-go\"\n",
    )
    .unwrap();

    let config = load_config(dir.path(), None).unwrap();
    assert_eq!(config.tagged.prefix, "lib-go");
}

#[test]
fn test_explicit_path_wins_over_root_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("release.toml"),
        "[tagged]\nprefix = \"from-root\"\n",
    )
    .unwrap();

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[tagged]\nprefix = \"from-flag\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(dir.path(), Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.tagged.prefix, "from-flag");
}

#[test]
fn test_missing_explicit_path_fails() {
    let result = load_config(Path::new("."), Some("/nonexistent/release.toml"));
    assert!(result.is_err());
}

#[test]
fn test_invalid_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"this is not toml [").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Path::new("."), Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}
