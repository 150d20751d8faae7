use std::path::{Path, PathBuf};

use fooddash_core::{FoodDashConfig, FoodDashError, Result};

pub const CONFIG_FILE: &str = "fooddash.json";

// Environment overrides
pub mod env {
    pub const CONFIG: &str = "FOODDASH_CONFIG";
    pub const DATA_DIR: &str = "FOODDASH_DATA_DIR";
    pub const IMAGE_DIR: &str = "FOODDASH_IMAGE_DIR";
}

/// `<config dir>/fooddash/fooddash.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fooddash").join(CONFIG_FILE))
}

/// Config file to load: an explicit path wins, then `FOODDASH_CONFIG`
pub fn resolve_config_path(
    explicit: Option<PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<PathBuf> {
    explicit.or_else(|| {
        lookup(env::CONFIG)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Resolve configuration: defaults, then the config file, then environment.
///
/// An explicit `path` must exist; the default location is optional.
pub fn load_config(path: Option<&Path>) -> Result<FoodDashConfig> {
    if let Ok(dotenv) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {:?}", dotenv);
    }

    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => match default_config_path() {
            Some(path) if path.is_file() => read_config_file(&path)?,
            _ => FoodDashConfig::default(),
        },
    };

    apply_env(&mut config, |key| std::env::var(key).ok());
    validate(&config)?;
    Ok(config)
}

pub fn read_config_file(path: &Path) -> Result<FoodDashConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| FoodDashError::io(path, e))?;
    let config: FoodDashConfig = serde_json::from_str(&content)?;
    tracing::info!("Config loaded from {:?}", path);
    Ok(config)
}

pub fn apply_env(config: &mut FoodDashConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(dir) = lookup(env::DATA_DIR).filter(|v| !v.is_empty()) {
        tracing::debug!("Data dir overridden by {}: {}", env::DATA_DIR, dir);
        config.data.dir = PathBuf::from(dir);
    }
    if let Some(dir) = lookup(env::IMAGE_DIR).filter(|v| !v.is_empty()) {
        tracing::debug!("Image dir overridden by {}: {}", env::IMAGE_DIR, dir);
        config.data.image_dir = PathBuf::from(dir);
    }
}

pub fn validate(config: &FoodDashConfig) -> Result<()> {
    let charts = &config.charts;
    if charts.histogram_bins == 0 {
        return Err(FoodDashError::Config(
            "charts.histogram_bins must be at least 1".to_string(),
        ));
    }
    if charts.distplot_bin_sizes.iter().any(|size| *size <= 0.0) {
        return Err(FoodDashError::Config(
            "charts.distplot_bin_sizes must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "limits": { "weekly_rows": 250 }, "data": { "dir": "/srv/food" } }"#)
            .unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.limits.weekly_rows, 250);
        assert_eq!(config.limits.center_rows, 10_000);
        assert_eq!(config.data.sidebar_image, "flourish.png");
        assert_eq!(config.charts.histogram_rows, 200);
        assert_eq!(config.charts.area_rows, 40);
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.json").as_path())).unwrap_err();
        assert!(matches!(err, FoodDashError::Io { .. }));
    }

    #[test]
    fn test_env_overrides_dirs() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(env::DATA_DIR, "/tmp/data"), (env::IMAGE_DIR, "")]);
        let mut config = FoodDashConfig::default();

        apply_env(&mut config, |key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data.dir, PathBuf::from("/tmp/data"));
        assert_eq!(config.data.image_dir, PathBuf::from("static_images"));
    }

    #[test]
    fn test_config_path_from_env_unless_explicit() {
        let vars: HashMap<&str, &str> = HashMap::from([(env::CONFIG, "/etc/fooddash.json")]);
        let lookup = |key: &str| vars.get(key).map(|v| v.to_string());

        assert_eq!(
            resolve_config_path(None, lookup),
            Some(PathBuf::from("/etc/fooddash.json"))
        );
        assert_eq!(
            resolve_config_path(Some(PathBuf::from("local.json")), lookup),
            Some(PathBuf::from("local.json"))
        );
        assert_eq!(resolve_config_path(None, |_| Some(String::new())), None);
        assert_eq!(resolve_config_path(None, |_| None), None);
    }

    #[test]
    fn test_validate_rejects_bad_chart_settings() {
        let mut config = FoodDashConfig::default();
        assert!(validate(&config).is_ok());

        config.charts.histogram_bins = 0;
        assert!(matches!(validate(&config), Err(FoodDashError::Config(_))));

        config.charts.histogram_bins = 20;
        config.charts.distplot_bin_sizes = vec![10.0, 0.0];
        assert!(validate(&config).is_err());
    }
}
