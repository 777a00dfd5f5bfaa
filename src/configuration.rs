//! src/configuration.rs
use crate::navigation::HOME_PATH;
use crate::store::DEFAULT_TABLE;
use config::{Config, ConfigError, File};
use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub store: StoreSettings,
    #[serde(default)]
    pub prompt: PromptSettings,
}

impl Settings {
    pub fn set_store_url(&mut self, api_url: String) {
        self.store.api_url = api_url;
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StoreSettings {
    pub api_url: String,
    pub api_key: Secret<String>,
    #[serde(default = "default_table")]
    pub table: String,
    pub timeout_milliseconds: u64,
}

impl StoreSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

#[derive(Deserialize, Clone, Debug)]
pub struct PromptSettings {
    pub home_path: String,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            home_path: HOME_PATH.to_string(),
        }
    }
}

/// Store credentials that may come from the environment instead of the
/// configuration files, e.g. `STORE_API_KEY`.
#[derive(Deserialize, Debug, Default)]
struct StoreOverrides {
    api_url: Option<String>,
    api_key: Option<Secret<String>>,
    table: Option<String>,
}

impl StoreOverrides {
    fn apply(self, settings: &mut StoreSettings) {
        if let Some(api_url) = self.api_url {
            settings.api_url = api_url;
        }
        if let Some(api_key) = self.api_key {
            settings.api_key = api_key;
        }
        if let Some(table) = self.table {
            settings.table = table;
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(
            File::from(configuration_directory.join(environment.as_str())).required(true),
        )
        // E.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;

    if environment == Environment::Local {
        let store_file_path = configuration_directory.join("store.env");
        if let Err(e) = dotenvy::from_filename(store_file_path) {
            if !e.not_found() {
                return Err(ConfigError::Message(format!(
                    "Failed to read store settings file: {}",
                    e
                )));
            }
        }
    }

    envy::prefixed("STORE_")
        .from_env::<StoreOverrides>()
        .map_err(|e| ConfigError::Message(format!("Failed to parse store settings: {}", e)))?
        .apply(&mut settings.store);

    Ok(settings)
}
