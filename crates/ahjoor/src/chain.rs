use serde::Serialize;

/// A supported EVM chain and its default HTTP transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chain {
    pub id: u64,
    pub name: &'static str,
    pub network: &'static str,
    pub native_symbol: &'static str,
    pub rpc_url: &'static str,
    pub testnet: bool,
}

pub const BASE: Chain = Chain {
    id: 8453,
    name: "Base",
    network: "base",
    native_symbol: "ETH",
    rpc_url: "https://mainnet.base.org",
    testnet: false,
};

pub const BASE_SEPOLIA: Chain = Chain {
    id: 84532,
    name: "Base Sepolia",
    network: "base-sepolia",
    native_symbol: "ETH",
    rpc_url: "https://sepolia.base.org",
    testnet: true,
};

/// Chains the client connects to, mainnet first.
pub const SUPPORTED_CHAINS: &[Chain] = &[BASE, BASE_SEPOLIA];

pub fn chain_by_id(chain_id: u64) -> Option<&'static Chain> {
    SUPPORTED_CHAINS.iter().find(|chain| chain.id == chain_id)
}

/// Human-readable chain name, `Chain {id}` for unsupported ids.
pub fn chain_name(chain_id: u64) -> String {
    match chain_by_id(chain_id) {
        Some(chain) => chain.name.to_string(),
        None => format!("Chain {chain_id}"),
    }
}
