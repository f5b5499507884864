//! Configuration loading tests

use std::env;
use std::io::Write;
use std::path::PathBuf;

use ilp_module_domain::Error;
use ilp_module_infrastructure::{ConfigLoader, FrameworkConfig};

fn write_config(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_defaults_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::new().with_search_dir(dir.path()).load().unwrap();
    assert_eq!(config, FrameworkConfig::default());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_explicit_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "custom.toml",
        r#"
module_root = "/srv/connector"

[logging]
level = "debug"
json_format = true
"#,
    );

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();
    assert_eq!(config.module_root, Some(PathBuf::from("/srv/connector")));
    assert!(config.framework_dir.is_none());
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
}

#[test]
fn test_default_file_is_found_in_search_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_config(&dir, "ilp-module.toml", "framework_dir = \"/opt/ilp\"\n");

    let config = ConfigLoader::new().with_search_dir(dir.path()).load().unwrap();
    assert_eq!(config.framework_dir, Some(PathBuf::from("/opt/ilp")));
}

#[test]
fn test_missing_explicit_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new().with_config_path(dir.path().join("absent.toml"));
    assert!(loader.config_path().is_some());
    assert_eq!(loader.load().unwrap(), FrameworkConfig::default());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "bad.toml", "[logging]\nlevel = \"loud\"\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect_err("level must parse");
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");
    let mut config = FrameworkConfig::default();
    config.module_root = Some(PathBuf::from("/srv/app"));
    config.logging.level = "warn".to_string();

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    assert_eq!(loader.load().unwrap(), config);
}

/// Run with: `cargo test -p ilp-module-infrastructure --test unit -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_prefixed_env_vars_override_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "env.toml", "[logging]\nlevel = \"debug\"\n");

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var("ILP_MODULE_CONFIG_TEST__LOGGING__LEVEL", "error");
    }
    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("ILP_MODULE_CONFIG_TEST")
        .load();
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var("ILP_MODULE_CONFIG_TEST__LOGGING__LEVEL");
    }

    assert_eq!(config.unwrap().logging.level, "error");
}
