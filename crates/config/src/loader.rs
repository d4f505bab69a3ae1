use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{env_subst::substitute_env, schema::DevdictConfig};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &["devdict.toml", "devdict.yaml", "devdict.yml", "devdict.json"];

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<DevdictConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let raw = substitute_env(&raw);
    parse_config(&raw, path)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./devdict.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/devdict/devdict.{toml,yaml,yml,json}` (user-global)
///
/// Returns `DevdictConfig::default()` if no config file is found.
pub fn discover_and_load() -> DevdictConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    DevdictConfig::default()
}

/// Find the first config file in standard locations.
fn find_config_file() -> Option<PathBuf> {
    // Project-local
    for name in CONFIG_FILENAMES {
        let p = PathBuf::from(name);
        if p.exists() {
            return Some(p);
        }
    }

    // User-global: ~/.config/devdict/
    if let Some(dir) = config_dir() {
        for name in CONFIG_FILENAMES {
            let p = dir.join(name);
            if p.exists() {
                return Some(p);
            }
        }
    }

    None
}

/// Returns the user-global config directory (`~/.config/devdict/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "devdict").map(|d| d.config_dir().to_path_buf())
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<DevdictConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use {std::io::Write as _, tempfile::NamedTempFile};

    use super::*;

    fn write_named(contents: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_toml_config() {
        let file = write_named(
            r#"
            [server]
            bind = "0.0.0.0"
            port = 9100

            [telex]
            api_base = "https://telex.example/v1/messages"
            "#,
            ".toml",
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.telex.api_base, "https://telex.example/v1/messages");
    }

    #[test]
    fn loads_json_config() {
        let file = write_named(r#"{"server": {"port": 9200}}"#, ".json");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.port, 9200);
    }

    #[test]
    fn unresolved_env_placeholders_stay_literal() {
        let file = write_named(
            r#"
            [server]
            bind = "${DEVDICT_NONEXISTENT_XYZ}"
            "#,
            ".toml",
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.bind, "${DEVDICT_NONEXISTENT_XYZ}");
    }

    #[test]
    fn unreadable_path_is_an_error() {
        assert!(load_config(Path::new("/definitely/not/a/real/devdict.toml")).is_err());
    }
}
