use std::path::{Path, PathBuf};

use super::types::MenuConfig;
use crate::error::ConfigError;

/// Get the default data directory: ~/.dagmenu
pub fn get_dagmenu_data_dir() -> Result<PathBuf, ConfigError> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(home).join(".dagmenu"))
}

pub fn load_from_path(path: &Path) -> Result<MenuConfig, ConfigError> {
    let display = path.display().to_string();
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;
    toml::from_str::<MenuConfig>(&s).map_err(|source| ConfigError::Parse {
        path: display,
        source,
    })
}

pub fn load_default() -> Result<MenuConfig, ConfigError> {
    // Priority 1: ~/.dagmenu/config.toml
    let user_config = get_dagmenu_data_dir()?.join("config.toml");

    // Priority 2: ./config.toml
    let local_config = Path::new("config.toml");

    let mut cfg = if user_config.exists() {
        load_from_path(&user_config)?
    } else if local_config.exists() {
        load_from_path(local_config)?
    } else {
        MenuConfig::default()
    };

    // Environment variable overrides (Priority 0: highest)
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

fn apply_env_overrides<F>(cfg: &mut MenuConfig, var: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("DAGMENU_SCHEDULER_URL") {
        cfg.scheduler.base_url = v;
    }
    if let Some(v) = non_empty("DAGMENU_SCHEDULER_TOKEN") {
        cfg.scheduler.token = v;
    }
    if let Some(v) = non_empty("DAGMENU_PROJECT_CODE") {
        cfg.project_code = parse_code("DAGMENU_PROJECT_CODE", v)?;
    }
    if let Some(v) = non_empty("DAGMENU_WORKFLOW_CODE") {
        cfg.workflow_code = parse_code("DAGMENU_WORKFLOW_CODE", v)?;
    }
    Ok(())
}

fn parse_code(key: &'static str, value: String) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidEnv { key, value })
}
