use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chain::{Chain, SUPPORTED_CHAINS};
use crate::constants::APP_NAME;
use crate::error::ConfigError;

/// Environment variable holding the WalletConnect project id.
pub const PROJECT_ID_ENV: &str = "NEXT_PUBLIC_WALLETCONNECT_PROJECT_ID";

/// Used when [`PROJECT_ID_ENV`] is unset or empty.
pub const PLACEHOLDER_PROJECT_ID: &str = "YOUR_PROJECT_ID";

/// Key under which the selected theme is persisted.
pub const THEME_STORAGE_KEY: &str = "ahjoor-ui-theme";

/// Everything handed to the provider stack at startup.
#[derive(Debug, Clone, Serialize)]
pub struct ClientConfig {
    pub wallet: WalletConfig,
    pub theme: ThemeConfig,
}

/// Wallet-connection settings: app identity, chains and their transports.
#[derive(Debug, Clone, Serialize)]
pub struct WalletConfig {
    pub app_name: String,
    pub project_id: String,
    pub chains: Vec<Chain>,
    /// Chain id → HTTP RPC endpoint.
    pub transports: BTreeMap<u64, String>,
}

impl WalletConfig {
    pub fn transport(&self, chain_id: u64) -> Option<&str> {
        self.transports.get(&chain_id).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub default_theme: Theme,
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::Light,
            storage_key: THEME_STORAGE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            _ => Err(ConfigError::UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        };
        f.write_str(name)
    }
}

impl ClientConfig {
    /// Build the config from the process environment, loading `.env` first
    /// when one exists.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let project_id = resolve_project_id(std::env::var(PROJECT_ID_ENV).ok());
        Self::with_project_id(project_id)
    }

    /// Default chains and transports with an explicit project id.
    pub fn with_project_id(project_id: impl Into<String>) -> Self {
        let chains = SUPPORTED_CHAINS.to_vec();
        let transports = chains
            .iter()
            .map(|chain| (chain.id, chain.rpc_url.to_string()))
            .collect();

        Self {
            wallet: WalletConfig {
                app_name: APP_NAME.to_string(),
                project_id: project_id.into(),
                chains,
                transports,
            },
            theme: ThemeConfig::default(),
        }
    }

    /// Check that every chain has a transport and the project id is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wallet.project_id.trim().is_empty() {
            return Err(ConfigError::EmptyProjectId);
        }
        for chain in &self.wallet.chains {
            if self.wallet.transport(chain.id).is_none() {
                return Err(ConfigError::MissingTransport { chain_id: chain.id });
            }
        }
        Ok(())
    }

    pub fn uses_placeholder_project_id(&self) -> bool {
        self.wallet.project_id == PLACEHOLDER_PROJECT_ID
    }
}

/// Pick the configured project id, falling back to the placeholder only
/// when the value is unset or empty. Other values pass through untouched;
/// blank ids are left for [`ClientConfig::validate`] to reject.
pub fn resolve_project_id(value: Option<String>) -> String {
    match value {
        Some(id) if !id.is_empty() => id,
        _ => {
            log::warn!("{PROJECT_ID_ENV} is not set, using placeholder project id");
            PLACEHOLDER_PROJECT_ID.to_string()
        }
    }
}
