use thiserror::Error;

/// Unified error type for the ahjoor client core.
#[derive(Debug, Error)]
pub enum Error {
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("address error: {0}")]
    Address(#[from] AddressError),

    #[error("amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Errors while building a token registry from caller data.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("token at index {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    #[error("duplicate token address {address} (entries {first} and {second})")]
    DuplicateAddress {
        address: String,
        first: usize,
        second: usize,
    },

    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("malformed address: {0:?}")]
    Malformed(String),
}

/// Errors while converting a display amount into raw units.
#[derive(Debug, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid character {found:?} in amount {input:?}")]
    InvalidDigit { input: String, found: char },

    #[error("amount {input:?} has more than {decimals} fractional digits")]
    TooManyDecimals { input: String, decimals: u8 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no transport configured for chain {chain_id}")]
    MissingTransport { chain_id: u64 },

    #[error("wallet connection project id is empty")]
    EmptyProjectId,

    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} provider failed to initialise: {reason}")]
    Init {
        provider: &'static str,
        reason: String,
    },
}
