pub mod toml;

use crate::rpc::auth::AuthConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_host, validate_port, validate_token_list, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SERVER_NAME: &str = "MyServer";
pub const DEFAULT_SERVER_VERSION: &str = "1.0";

#[derive(Debug, Clone, Parser)]
#[command(name = "samples-server")]
#[command(about = "Toy ping and ticketing services over JSON-RPC")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Bind host (overrides the config file)")]
    pub host: Option<String>,

    #[arg(long, help = "Bind port (overrides the config file)")]
    pub port: Option<u16>,

    #[arg(long, help = "Server name reported by GetServerInfo")]
    pub server_name: Option<String>,

    #[arg(long, help = "Server version reported by GetServerInfo")]
    pub server_version: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Accepted auth tokens")]
    pub tokens: Vec<String>,

    #[arg(long, help = "Disable the token check on the ping service")]
    pub disable_auth: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective server settings: CLI flags layered over the optional TOML file,
/// with built-in defaults underneath.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub server_name: String,
    pub server_version: String,
    pub auth_enabled: bool,
    pub tokens: Vec<String>,
}

impl ServerSettings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => Some(toml::TomlConfig::from_file(path)?),
            None => None,
        };

        let server = file.as_ref().and_then(|f| f.server.as_ref());
        let auth = file.as_ref().and_then(|f| f.auth.as_ref());

        let tokens = if !cli.tokens.is_empty() {
            cli.tokens.clone()
        } else {
            auth.and_then(|a| a.tokens.clone()).unwrap_or_else(|| {
                vec![
                    "super-secret".to_string(),
                    "even-more-secret".to_string(),
                ]
            })
        };

        let auth_enabled = if cli.disable_auth {
            false
        } else {
            auth.and_then(|a| a.enabled).unwrap_or(true)
        };

        Ok(Self {
            host: cli
                .host
                .clone()
                .or_else(|| server.and_then(|s| s.host.clone()))
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: cli
                .port
                .or_else(|| server.and_then(|s| s.port))
                .unwrap_or(DEFAULT_PORT),
            server_name: cli
                .server_name
                .clone()
                .or_else(|| server.and_then(|s| s.name.clone()))
                .unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string()),
            server_version: cli
                .server_version
                .clone()
                .or_else(|| server.and_then(|s| s.version.clone()))
                .unwrap_or_else(|| DEFAULT_SERVER_VERSION.to_string()),
            auth_enabled,
            tokens,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn auth_config(&self) -> AuthConfig {
        if self.auth_enabled {
            AuthConfig::new(self.tokens.iter().cloned())
        } else {
            AuthConfig::disabled()
        }
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        validate_host("host", &self.host)?;
        validate_port("port", self.port)?;
        if self.auth_enabled {
            validate_token_list("tokens", &self.tokens)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> CliConfig {
        CliConfig::parse_from(["samples-server"])
    }

    #[test]
    fn test_defaults_when_no_file() {
        let settings = ServerSettings::resolve(&bare_cli()).unwrap();
        assert_eq!(settings.bind_addr(), "127.0.0.1:8080");
        assert_eq!(settings.server_name, "MyServer");
        assert!(settings.auth_enabled);
        assert_eq!(settings.tokens.len(), 2);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = CliConfig::parse_from([
            "samples-server",
            "--port",
            "9000",
            "--tokens",
            "a,b",
            "--disable-auth",
        ]);
        let settings = ServerSettings::resolve(&cli).unwrap();
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.tokens, vec!["a", "b"]);
        assert!(!settings.auth_enabled);
    }

    #[test]
    fn test_disabled_auth_skips_token_validation() {
        let mut settings = ServerSettings::resolve(&bare_cli()).unwrap();
        settings.auth_enabled = false;
        settings.tokens.clear();
        assert!(settings.validate().is_ok());
    }
}
