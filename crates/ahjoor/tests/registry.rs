use ahjoor::constants::{ETH_TOKEN_ADDRESS, USDC_TOKEN_ADDRESS};
use ahjoor::error::ProviderError;
use ahjoor::provider::{bootstrap, QueryProvider, ThemeProvider, WalletProvider};
use ahjoor::{
    format_token_amount, parse_units, token_by_address, ClientConfig, ThemeConfig,
    TokenDescriptor, TokenRegistry, TokenSource, WalletConfig,
};

#[test]
fn lookup_scenarios() {
    let eth = token_by_address("0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");
    assert_eq!(
        eth,
        TokenDescriptor::new("ETH", ETH_TOKEN_ADDRESS, "ETH", 18)
    );

    let usdc = token_by_address("  0x833589fcd6edb6e08f4c7c32d4f71b54bda02913  ");
    assert_eq!(
        usdc,
        TokenDescriptor::new("USDC", USDC_TOKEN_ADDRESS, "USDC", 6)
    );

    assert_eq!(token_by_address("0xDEADBEEF"), TokenDescriptor::unknown());
    assert_eq!(token_by_address(""), TokenDescriptor::unknown());
}

#[test]
fn builtin_registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| token_by_address(USDC_TOKEN_ADDRESS).decimals))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 6);
    }
}

#[test]
fn json_registry_formats_amounts_and_ignores_builtin_tokens() {
    let registry = TokenRegistry::from_json(
        r#"[{ "name": "Degen", "address": "0x4ed4E862860beD51a9570b96d89aF5E1B0Efefed", "symbol": "DEGEN", "decimals": 18 }]"#,
    )
    .unwrap();

    let raw = parse_units("2.25", 18).unwrap();
    assert_eq!(
        format_token_amount(&registry, "0x4ED4E862860BED51A9570B96D89AF5E1B0EFEFED", &raw),
        "2.25 DEGEN"
    );
    assert_eq!(registry.lookup(USDC_TOKEN_ADDRESS), TokenDescriptor::unknown());
}

struct Noop;

impl ThemeProvider for Noop {
    fn configure(&mut self, _config: &ThemeConfig) -> Result<(), ProviderError> {
        Ok(())
    }
}

impl WalletProvider for Noop {
    fn configure(&mut self, config: &WalletConfig) -> Result<(), ProviderError> {
        if config.transport(8453).is_none() {
            return Err(ProviderError::Init {
                provider: "wallet",
                reason: "base transport missing".to_string(),
            });
        }
        Ok(())
    }
}

impl QueryProvider for Noop {
    fn start(&mut self) -> Result<(), ProviderError> {
        Ok(())
    }
}

#[test]
fn bootstrap_with_default_config() {
    let config = ClientConfig::with_project_id("project-1");
    let (mut theme, mut wallet, mut query) = (Noop, Noop, Noop);
    assert!(bootstrap(&config, &mut theme, &mut wallet, &mut query).is_ok());
}
