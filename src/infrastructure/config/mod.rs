use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::Result;

/// Optional config file read from the working directory
const CONFIG_FILE: &str = "beanboard.toml";

/// Prefix for environment overrides, e.g. `BEANBOARD_PORT=9000`
const ENV_PREFIX: &str = "BEANBOARD_";

/// Runtime settings. Defaults reproduce the stock deployment; a toml file or
/// prefixed environment variables override individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub dataset_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dataset_path: PathBuf::from("coffee_exports.csv"),
        }
    }
}

impl Settings {
    /// Layer defaults, `beanboard.toml` and `BEANBOARD_*` variables, in
    /// ascending precedence.
    pub fn load() -> Result<Self> {
        let settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        Ok(settings)
    }
}
