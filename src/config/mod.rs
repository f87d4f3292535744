use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

const APP_DIR: &str = ".safesailing";
const CONFIG_FILE: &str = "safesailing.conf";
const DB_FILE: &str = "safesailing.sqlite";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8787
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Cross-posting settings. API keys are never stored here; they come
/// from `FACEBOOK_API_KEY` / `INSTAGRAM_API_KEY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialConfig {
    #[serde(default = "default_social_message")]
    pub message: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub facebook_page_id: Option<String>,
    #[serde(default)]
    pub instagram_account_id: Option<String>,
    #[serde(default)]
    pub facebook_enabled: bool,
    #[serde(default)]
    pub instagram_enabled: bool,
}

fn default_social_message() -> String {
    "Alert: tours on {date} ({time}) are suspended. Reason: {reason}".to_string()
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            message: default_social_message(),
            hashtags: vec!["SafeSailing".to_string(), "BoatTours".to_string()],
            facebook_page_id: None,
            instagram_account_id: None,
            facebook_enabled: false,
            instagram_enabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub operator_email: Option<String>,
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub social: SocialConfig,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_public_base_url() -> String {
    format!("http://{}:{}", default_host(), default_port())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            operator_email: None,
            public_base_url: default_public_base_url(),
            server: ServerConfig::default(),
            social: SocialConfig::default(),
        }
    }
}

impl Config {
    /// `~/.safesailing`, or `./.safesailing` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE)
    }

    /// Load the configuration file, or the defaults when there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Resolve a user-supplied database name: absolute paths are kept,
    /// bare names land in the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Create the configuration file and an empty database file.
    ///
    /// In test mode the configuration file is left untouched.
    /// Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        if !is_test {
            let mut cfg = Self::load().unwrap_or_default();
            cfg.database = db_path.to_string_lossy().to_string();
            cfg.save_to(&Self::config_file())?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        if let Some(dir) = db_path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.database.trim().is_empty() {
            return Err(AppError::Config("database path is empty".into()));
        }
        if !(self.public_base_url.starts_with("http://")
            || self.public_base_url.starts_with("https://"))
        {
            return Err(AppError::Config(format!(
                "public_base_url must start with http:// or https:// (got '{}')",
                self.public_base_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_gets_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\nserver:\n  port: 9000\n")
            .unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert!(cfg.social.message.contains("{date}"));
        assert!(!cfg.social.facebook_enabled);
    }

    #[test]
    fn base_url_must_be_http() {
        let cfg = Config {
            public_base_url: "alerts.example.com".into(),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
        Config::default().validate().unwrap();
    }
}
