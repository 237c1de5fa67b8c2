use super::*;

use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

fn write_config(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("trainer.toml");
    fs::write(&path, body).expect("write config");
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings =
        load_settings_with(&dir.path().join("absent.toml"), no_env).expect("settings");

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.tolerance, 0.1);
    assert_eq!(settings.plot_path, PathBuf::from("segment_plot.svg"));
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(
        &dir,
        "tolerance = 0.2\nseed = 42\nplot_path = \"out/plot.svg\"\nlog_filter = \"debug\"\n",
    );

    let settings = load_settings_with(&path, no_env).expect("settings");
    assert_eq!(settings.tolerance, 0.2);
    assert_eq!(settings.seed, Some(42));
    assert_eq!(settings.plot_path, PathBuf::from("out/plot.svg"));
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn environment_overrides_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "tolerance = 0.2\nseed = 42\n");
    let env = env_from(&[
        ("APP__TOLERANCE", "0.5"),
        ("APP__SEED", "7"),
        ("RUST_LOG", "warn"),
        ("APP__LOG", "trace"),
    ]);

    let settings = load_settings_with(&path, env).expect("settings");
    assert_eq!(settings.tolerance, 0.5);
    assert_eq!(settings.seed, Some(7));
    assert_eq!(settings.log_filter, "trace");
}

#[test]
fn string_values_in_file_are_parsed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "tolerance = \"0.3\"\n");

    let settings = load_settings_with(&path, no_env).expect("settings");
    assert_eq!(settings.tolerance, 0.3);
}

#[test]
fn unparsable_seed_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let err = load_settings_with(&path, env_from(&[("APP__SEED", "abc")]))
        .expect_err("should fail");

    let chain = format!("{err:#}");
    assert!(chain.contains("APP__SEED"), "{chain}");
    assert!(chain.contains("invalid seed"), "{chain}");
}

#[test]
fn negative_tolerance_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "tolerance = -1.0\n");

    assert!(load_settings_with(&path, no_env).is_err());
    assert!(validate_tolerance(f64::NAN).is_err());
    assert_eq!(validate_tolerance(0.0).expect("zero is allowed"), 0.0);
}

#[test]
fn malformed_toml_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "tolerance = = 1\n");

    let err = load_settings_with(&path, no_env).expect_err("should fail");
    assert!(format!("{err:#}").contains("failed to parse config file"));
}

#[test]
fn unknown_keys_are_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "theme = \"dark\"\n");

    assert_eq!(
        load_settings_with(&path, no_env).expect("settings"),
        Settings::default()
    );
}

#[test]
fn creates_parent_dir_for_nested_plot_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plot = dir.path().join("plots").join("nested").join("segments.svg");

    ensure_parent_dir_exists(&plot).expect("create parent");
    assert!(dir.path().join("plots").join("nested").is_dir());
    ensure_parent_dir_exists(Path::new("segments.svg")).expect("bare file name");
}
