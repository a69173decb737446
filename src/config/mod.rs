//! Configuration loading for siteinsight

mod schema;

pub use schema::{Config, RuleToggle};

use crate::messages::Locale;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".siteinsightrc.json";

/// Find and load config file with extends resolution. Searches current directory then parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let config = load_config_with_extends(&path, &mut HashSet::new())?;
            for rule in config.unknown_rules() {
                tracing::warn!(rule, "unknown rule id in config, ignoring");
            }
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

/// Load a config file and resolve extends chain
fn load_config_with_extends(config_path: &Path, visited: &mut HashSet<PathBuf>) -> Result<Config> {
    // Prevent circular extends
    let canonical = config_path
        .canonicalize()
        .unwrap_or_else(|_| config_path.to_path_buf());
    if !visited.insert(canonical) {
        anyhow::bail!(
            "Circular extends detected in config: {}",
            config_path.display()
        );
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let mut config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;

    if let Some(extends) = config.extends.take() {
        let base_config = resolve_extends(config_path, &extends, visited)?;
        config.merge_from(base_config);
    }

    Ok(config)
}

/// Resolve an extends reference (relative to the extending file) to a config
fn resolve_extends(
    config_path: &Path,
    extends: &str,
    visited: &mut HashSet<PathBuf>,
) -> Result<Config> {
    let config_dir = config_path.parent().unwrap_or(Path::new("."));

    let extends_path = if Path::new(extends).is_absolute() {
        PathBuf::from(extends)
    } else {
        config_dir.join(extends)
    };

    // Ensure it has .json extension
    let extends_path = if extends_path.extension().is_none() {
        extends_path.with_extension("json")
    } else {
        extends_path
    };

    if !extends_path.exists() {
        anyhow::bail!(
            "Extended config not found: {} (referenced from {})",
            extends_path.display(),
            config_path.display()
        );
    }

    load_config_with_extends(&extends_path, visited)
}

/// Search for .siteinsightrc.json in directory and its parents
fn find_config_in_parents(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.exists())
}

/// Write a starter config into `dir`. Fails if one already exists.
pub fn write_default_config(dir: &Path, locale: Locale) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILENAME);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    let config = Config {
        locale: Some(locale),
        date_range: Some(crate::DateRangePreset::default()),
        ..Config::default()
    };
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    fs::write(&path, json + "\n")
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DateRangePreset;
    use std::io::Write;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        let mut file = fs::File::create(path).unwrap();
        writeln!(file, "{}", content).unwrap();
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.locale(), Locale::En);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_config_found_in_parent() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join(CONFIG_FILENAME), r#"{ "locale": "he" }"#);
        let nested = dir.path().join("reports").join("2024");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(&nested, None).unwrap();
        assert_eq!(config.locale(), Locale::He);
    }

    #[test]
    fn test_config_extends() {
        let dir = TempDir::new().unwrap();

        write(
            &dir.path().join("base.json"),
            r#"{
                "dateRange": "90days",
                "rules": { "volume-leader": "off" },
                "htmlClass": "base-list"
            }"#,
        );
        write(
            &dir.path().join(CONFIG_FILENAME),
            r#"{
                "extends": "./base",
                "htmlClass": "child-list",
                "rules": { "high-ctr": "off" }
            }"#,
        );

        let config = load_config(dir.path(), None).unwrap();

        // Child value overrides base
        assert_eq!(config.html_class.as_deref(), Some("child-list"));
        // Base values are inherited
        assert_eq!(config.date_range(), DateRangePreset::Last90Days);
        assert_eq!(config.rule_toggle("volume-leader"), Some(RuleToggle::Off));
        assert_eq!(config.rule_toggle("high-ctr"), Some(RuleToggle::Off));
    }

    #[test]
    fn test_circular_extends_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("a.json"), r#"{ "extends": "./b.json" }"#);
        write(&dir.path().join("b.json"), r#"{ "extends": "./a.json" }"#);

        let err = load_config(dir.path(), Some(Path::new("a.json"))).unwrap_err();
        assert!(format!("{:#}", err).contains("Circular extends"));
    }

    #[test]
    fn test_custom_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let err = load_config(dir.path(), Some(Path::new("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_json_names_the_file() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join(CONFIG_FILENAME), "{ not json");
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON in config"));
    }

    #[test]
    fn test_write_default_config_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = write_default_config(dir.path(), Locale::He).unwrap();
        assert!(path.ends_with(CONFIG_FILENAME));

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.locale(), Locale::He);
        assert_eq!(config.date_range(), DateRangePreset::Last30Days);

        assert!(write_default_config(dir.path(), Locale::En).is_err());
    }
}
