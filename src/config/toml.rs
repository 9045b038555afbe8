use crate::utils::error::{Result, SampleError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub auth: Option<AuthSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub name: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSection {
    pub enabled: Option<bool>,
    pub tokens: Option<Vec<String>>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SampleError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SampleError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` references with environment variable values.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;

        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static regex");
        let mut result = String::with_capacity(content.len());
        let mut last_end = 0;

        for caps in re.captures_iter(content) {
            let whole = caps.get(0).expect("match 0 always present");
            let var_name = &caps[1];

            let value = std::env::var(var_name).map_err(|_| SampleError::MissingConfigError {
                field: format!("environment variable {}", var_name),
            })?;

            result.push_str(&content[last_end..whole.start()]);
            result.push_str(&value);
            last_end = whole.end();
        }
        result.push_str(&content[last_end..]);

        Ok(result)
    }
}
