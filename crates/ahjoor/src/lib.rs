pub mod address;
pub mod amount;
pub mod chain;
pub mod config;
pub mod constants;
pub mod error;
pub mod provider;
pub mod token;

pub use error::Error;

// Re-exports for convenience
pub use amount::{format_token_amount, format_units, parse_units};
pub use chain::{chain_by_id, Chain};
pub use config::{ClientConfig, Theme, ThemeConfig, WalletConfig};
pub use token::{normalize_address, token_by_address, TokenDescriptor, TokenRegistry, TokenSource};
