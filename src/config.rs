use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::scaffold::{ScaffoldOptions, Variant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub workspace_dir: String,
    pub variant: Variant,
    pub puzzles_dir: String,
    pub template: String,
    pub utils_path: String,
    pub utils_name: String,
    pub editor: Option<String>,
    pub strict: bool,
    pub fail_on_command_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        let options = ScaffoldOptions::default();
        Self {
            workspace_dir: ".".to_string(),
            variant: options.variant,
            puzzles_dir: options.puzzles_dir,
            template: options.template,
            utils_path: options.utils_path,
            utils_name: options.utils_name,
            editor: None,
            strict: options.strict,
            fail_on_command_error: options.fail_on_command_error,
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".new-day"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Option<Config>> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(config))
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config dir {}", dir.display()))?;
        }
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn expanded_workspace(&self) -> Result<PathBuf> {
        let dir = self.workspace_dir.as_str();
        if dir == "~" || dir.starts_with("~/") {
            let home = dirs::home_dir().context("Could not find home directory")?;
            Ok(home.join(dir.trim_start_matches('~').trim_start_matches('/')))
        } else {
            Ok(PathBuf::from(dir))
        }
    }

    pub fn scaffold_options(&self) -> ScaffoldOptions {
        ScaffoldOptions {
            variant: self.variant,
            puzzles_dir: self.puzzles_dir.clone(),
            template: self.template.clone(),
            utils_path: self.utils_path.clone(),
            utils_name: self.utils_name.clone(),
            strict: self.strict,
            fail_on_command_error: self.fail_on_command_error,
        }
    }
}
