//! Integration tests for Settings config loading.
//!
//! Environment overrides live in `config_env_test.rs` so that setting
//! `BINTREE_*` variables cannot leak into these tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use bintree::config::{ConfigError, Settings};
use bintree::{BinaryTree, DomainError, Node};

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("bintree.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn given_no_config_file_when_load_then_uses_comma_and_hash() {
    let settings = Settings::load(None).expect("load settings");
    assert_eq!(settings.codec.delimiter, ",");
    assert_eq!(settings.codec.sentinel, "#");
}

#[test]
fn given_config_file_when_load_then_overrides_codec_tokens() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[codec]
delimiter = ";"
sentinel = "null"
"#,
    );

    let settings = Settings::load(Some(&path)).expect("load settings");
    let codec = settings.codec().expect("valid codec");

    let tree = BinaryTree::from(Node::new(1).with_right(Node::leaf(2)));
    assert_eq!(codec.serialize(&tree), "1;null;2;null;null");
}

#[test]
fn given_partial_config_file_when_load_then_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[codec]\nsentinel = \"~\"\n");

    let settings = Settings::load(Some(&path)).expect("load settings");
    assert_eq!(settings.codec.delimiter, ",");
    assert_eq!(settings.codec.sentinel, "~");
}

#[test]
fn given_missing_config_file_when_load_then_not_found() {
    let err = Settings::load(Some(Path::new("/nonexistent/bintree.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)), "{err}");
}

#[test]
fn given_malformed_config_file_when_load_then_load_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[codec\ndelimiter = ");

    let err = Settings::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)), "{err}");
}

#[test]
fn given_numeric_sentinel_when_building_codec_then_invalid_codec() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[codec]\nsentinel = \"0\"\n");

    let settings = Settings::load(Some(&path)).expect("load settings");
    let err = settings.codec().unwrap_err();
    assert!(
        matches!(err, ConfigError::Codec(DomainError::InvalidCodec(_))),
        "{err}"
    );
}
