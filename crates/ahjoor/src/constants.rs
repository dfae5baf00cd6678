//! Deployment constants for AhjoorCircle on Base.

/// Savings-circle contract deployed on Base.
pub const CONTRACT_ADDRESS: &str = "0x1f79E558E2811F87377C202464763d5172027e2b";

/// Sentinel address standing in for the chain's native asset.
pub const ETH_TOKEN_ADDRESS: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

/// Circle's USDC on Base.
pub const USDC_TOKEN_ADDRESS: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";

pub const APP_NAME: &str = "AhjoorCircle";

pub const APP_TITLE: &str = "AhjoorCircle - Decentralized Savings Circles";

pub const APP_DESCRIPTION: &str =
    "Join trusted decentralized savings circles powered by blockchain.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::is_valid_address;

    #[test]
    fn test_deployment_addresses_are_well_formed() {
        // CONTRACT_ADDRESS is kept verbatim; this only reports its shape.
        assert!(is_valid_address(CONTRACT_ADDRESS));
        assert!(is_valid_address(ETH_TOKEN_ADDRESS));
        assert!(is_valid_address(USDC_TOKEN_ADDRESS));
    }
}
