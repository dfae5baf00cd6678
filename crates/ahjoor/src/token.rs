use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::constants::{ETH_TOKEN_ADDRESS, USDC_TOKEN_ADDRESS};
use crate::error::RegistryError;

/// Display metadata for a fungible token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    pub name: String,
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenDescriptor {
    pub fn new(name: &str, address: &str, symbol: &str, decimals: u8) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            symbol: symbol.to_string(),
            decimals,
        }
    }

    /// Fallback returned when an address is not in the registry.
    pub fn unknown() -> Self {
        Self::new("Unknown", "0x0", "Unknown", 18)
    }

    /// Whether this entry stands for the chain's native asset.
    pub fn is_native(&self) -> bool {
        normalize_address(&self.address) == normalize_address(ETH_TOKEN_ADDRESS)
    }
}

/// Lowercase an address and strip surrounding whitespace.
///
/// Whitespace follows the web platform's `String.prototype.trim` set, so the
/// byte-order mark U+FEFF is stripped and NEXT LINE U+0085 is kept.
/// Never fails; `normalize_address(normalize_address(s)) == normalize_address(s)`.
pub fn normalize_address(address: &str) -> String {
    address
        .to_lowercase()
        .trim_matches(is_trim_whitespace)
        .to_string()
}

fn is_trim_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Trait for token metadata providers.
pub trait TokenSource {
    /// Find the descriptor registered for `address`, if any.
    fn find(&self, address: &str) -> Option<TokenDescriptor>;

    /// Total lookup: unmatched addresses yield [`TokenDescriptor::unknown`].
    fn lookup(&self, address: &str) -> TokenDescriptor {
        self.find(address).unwrap_or_else(TokenDescriptor::unknown)
    }
}

/// A token source with no entries.
pub struct EmptyTokenSource;

impl TokenSource for EmptyTokenSource {
    fn find(&self, _address: &str) -> Option<TokenDescriptor> {
        None
    }
}

/// Ordered, immutable list of known tokens.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: Vec<TokenDescriptor>,
}

static BUILTIN: LazyLock<TokenRegistry> = LazyLock::new(|| TokenRegistry {
    tokens: vec![
        TokenDescriptor::new("ETH", ETH_TOKEN_ADDRESS, "ETH", 18),
        TokenDescriptor::new("USDC", USDC_TOKEN_ADDRESS, "USDC", 6),
    ],
});

impl TokenRegistry {
    /// Build a registry, rejecting blank labels and addresses that collide
    /// after normalization.
    pub fn new(tokens: Vec<TokenDescriptor>) -> Result<Self, RegistryError> {
        for (index, token) in tokens.iter().enumerate() {
            if token.name.trim().is_empty() {
                return Err(RegistryError::EmptyField { index, field: "name" });
            }
            if token.symbol.trim().is_empty() {
                return Err(RegistryError::EmptyField {
                    index,
                    field: "symbol",
                });
            }
            let normalized = normalize_address(&token.address);
            if let Some(first) = tokens[..index]
                .iter()
                .position(|t| normalize_address(&t.address) == normalized)
            {
                return Err(RegistryError::DuplicateAddress {
                    address: token.address.clone(),
                    first,
                    second: index,
                });
            }
        }
        Ok(Self { tokens })
    }

    /// Parse a registry from a JSON array of descriptors.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let tokens: Vec<TokenDescriptor> =
            serde_json::from_str(json).map_err(|e| RegistryError::Parse(e.to_string()))?;
        Self::new(tokens)
    }

    /// The process-wide registry of tokens supported on Base.
    pub fn builtin() -> &'static TokenRegistry {
        &BUILTIN
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenDescriptor> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First entry whose normalized address matches the normalized input.
    pub fn get(&self, address: &str) -> Option<&TokenDescriptor> {
        let normalized = normalize_address(address);
        self.tokens
            .iter()
            .find(|token| normalize_address(&token.address) == normalized)
    }
}

impl TokenSource for TokenRegistry {
    fn find(&self, address: &str) -> Option<TokenDescriptor> {
        self.get(address).cloned()
    }
}

/// Look up an address in the built-in registry.
pub fn token_by_address(address: &str) -> TokenDescriptor {
    TokenRegistry::builtin().lookup(address)
}
