use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

fn default_privilege_command() -> Vec<String> {
    vec!["sudo".to_string()]
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// Directory holding the cloned package sources. Defaults to
    /// `aurum/packages` under the user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_dir: Option<String>,
    /// Command prefix used to gain the privileges pacman needs for
    /// package removal. An empty list runs pacman directly.
    #[serde(default = "default_privilege_command")]
    pub privilege_command: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            package_dir: None,
            privilege_command: default_privilege_command(),
        }
    }
}

fn config_file_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Unable to determine user config directory")?
        .join("aurum");
    fs::create_dir_all(&config_dir)
        .with_context(|| format!("creating config directory at {}", config_dir.display()))?;
    Ok(config_dir.join("config.toml"))
}

impl Config {
    /// Load the config from disk. If the config file does not exist,
    /// create a default config file and return the default.
    pub fn load() -> Result<Config> {
        let cfg_path = config_file_path()?;
        if !cfg_path.exists() {
            let default = Config::default();
            let toml = toml::to_string_pretty(&default).context("serializing default config")?;
            fs::write(&cfg_path, toml)
                .with_context(|| format!("writing default config to {}", cfg_path.display()))?;
            return Ok(default);
        }
        let s = fs::read_to_string(&cfg_path)
            .with_context(|| format!("reading config {}", cfg_path.display()))?;
        let c: Config = toml::from_str(&s).context("parsing config toml")?;
        Ok(c)
    }

    /// Resolve the managed package directory, honoring the config
    /// override. The directory itself is created by the store, not here.
    pub fn packages_root(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.package_dir {
            return Ok(PathBuf::from(shellexpand::tilde(dir).to_string()));
        }
        let data_dir = dirs::data_dir().context("Unable to determine user data directory")?;
        Ok(data_dir.join("aurum").join("packages"))
    }
}
