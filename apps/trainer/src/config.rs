use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use kinematics::DEFAULT_TOLERANCE;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub tolerance: f64,
    pub seed: Option<u64>,
    pub plot_path: PathBuf,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            seed: None,
            plot_path: PathBuf::from("segment_plot.svg"),
            log_filter: "info".into(),
        }
    }
}

pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

/// Defaults, then the TOML file at `path` if present, then environment
/// variables looked up through `env`.
pub fn load_settings_with(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(&raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            for (key, value) in &file_cfg {
                let value = match value {
                    toml::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                apply(&mut settings, key, &value)
                    .with_context(|| format!("in config file '{}'", path.display()))?;
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    }

    for (var, key) in [
        ("APP__TOLERANCE", "tolerance"),
        ("APP__SEED", "seed"),
        ("APP__PLOT_PATH", "plot_path"),
        ("RUST_LOG", "log_filter"),
        ("APP__LOG", "log_filter"),
    ] {
        if let Some(value) = env(var) {
            apply(&mut settings, key, &value)
                .with_context(|| format!("in environment variable {var}"))?;
        }
    }

    Ok(settings)
}

fn apply(settings: &mut Settings, key: &str, value: &str) -> anyhow::Result<()> {
    let value = value.trim();
    match key {
        "tolerance" => {
            let parsed = value
                .parse::<f64>()
                .with_context(|| format!("invalid tolerance '{value}'"))?;
            settings.tolerance = validate_tolerance(parsed)?;
        }
        "seed" => {
            settings.seed = Some(
                value
                    .parse::<u64>()
                    .with_context(|| format!("invalid seed '{value}'"))?,
            );
        }
        "plot_path" => {
            if value.is_empty() {
                bail!("plot_path must not be empty");
            }
            settings.plot_path = PathBuf::from(value);
        }
        "log_filter" => {
            if !value.is_empty() {
                settings.log_filter = value.to_string();
            }
        }
        _ => tracing::debug!(key, "ignoring unknown config key"),
    }
    Ok(())
}

pub fn validate_tolerance(tolerance: f64) -> anyhow::Result<f64> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        bail!("tolerance must be a non-negative number, got {tolerance}");
    }
    Ok(tolerance)
}

/// Creates the parent directory of `path` when it has one.
pub fn ensure_parent_dir_exists(path: &Path) -> anyhow::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for plot '{}'",
            parent.display(),
            path.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
