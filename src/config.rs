use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keys: KeyConfig,
    pub display: DisplayConfig,
}

/// Command keys typed at the prompt. Anything else is appended to the
/// expression as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub calculate: String,
    pub clear: String,
    pub delete: String,
    pub percent: String,
    pub toggle_sign: String,
    pub reciprocal: String,
    pub square: String,
    pub quit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub prompt: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            calculate: "=".to_string(),
            clear: "c".to_string(),
            delete: "<".to_string(),
            percent: "%".to_string(),
            toggle_sign: "n".to_string(),
            reciprocal: "r".to_string(),
            square: "s".to_string(),
            quit: "q".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn all(&self) -> [(&'static str, &str); 8] {
        [
            ("calculate", &self.calculate),
            ("clear", &self.clear),
            ("delete", &self.delete),
            ("percent", &self.percent),
            ("toggle_sign", &self.toggle_sign),
            ("reciprocal", &self.reciprocal),
            ("square", &self.square),
            ("quit", &self.quit),
        ]
    }
}

/// Characters that always go into the expression and so cannot start a
/// command key.
pub fn is_expression_char(ch: char) -> bool {
    ch.is_ascii_digit() || "+-*/.()".contains(ch)
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("poppi_calc")
            .join("config.toml")
    }

    /// Loads the user config, writing the defaults out on first run.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            let default = Config::default();
            default.save_to(&path)?;
            return Ok(default);
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (name, key) in self.keys.all() {
            let Some(first) = key.chars().next() else {
                bail!("key for {} is empty", name);
            };
            if first.is_whitespace() || is_expression_char(first) {
                bail!("key {:?} for {} would be typed into the expression", key, name);
            }
            if !seen.insert(key) {
                bail!("key {:?} is bound more than once", key);
            }
        }
        Ok(())
    }
}
