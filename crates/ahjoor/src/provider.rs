//! Startup wiring for the externally implemented provider stack.
//!
//! The wallet, query-cache and theme providers live outside this crate.
//! [`bootstrap`] only validates the configuration and hands each provider
//! its slice of it, outermost first.

use crate::config::{ClientConfig, ThemeConfig, WalletConfig};
use crate::error::{Error, ProviderError};

pub trait ThemeProvider {
    fn configure(&mut self, config: &ThemeConfig) -> Result<(), ProviderError>;
}

/// Wallet-connection provider (chains, transports, modal).
pub trait WalletProvider {
    fn configure(&mut self, config: &WalletConfig) -> Result<(), ProviderError>;
}

/// Request cache shared by the wallet stack.
pub trait QueryProvider {
    fn start(&mut self) -> Result<(), ProviderError>;
}

/// Initialise providers in nesting order: theme, wallet, then query.
/// Stops at the first failure.
pub fn bootstrap(
    config: &ClientConfig,
    theme: &mut dyn ThemeProvider,
    wallet: &mut dyn WalletProvider,
    query: &mut dyn QueryProvider,
) -> Result<(), Error> {
    config.validate()?;

    if config.uses_placeholder_project_id() {
        log::warn!("bootstrapping wallet provider with placeholder project id");
    }

    log::debug!(
        "configuring theme provider (default={}, key={})",
        config.theme.default_theme,
        config.theme.storage_key
    );
    theme.configure(&config.theme)?;

    log::debug!(
        "configuring wallet provider for {} chain(s)",
        config.wallet.chains.len()
    );
    wallet.configure(&config.wallet)?;

    query.start()?;

    log::info!("{} providers ready", config.wallet.app_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::config::Theme;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Recorder {
        name: &'static str,
        log: Log,
        fail: bool,
    }

    impl Recorder {
        fn new(name: &'static str, log: &Log) -> Self {
            Self {
                name,
                log: Rc::clone(log),
                fail: false,
            }
        }

        fn record(&self, detail: String) -> Result<(), ProviderError> {
            self.log.borrow_mut().push(format!("{}:{detail}", self.name));
            if self.fail {
                return Err(ProviderError::Init {
                    provider: self.name,
                    reason: "refused".to_string(),
                });
            }
            Ok(())
        }
    }

    impl ThemeProvider for Recorder {
        fn configure(&mut self, config: &ThemeConfig) -> Result<(), ProviderError> {
            self.record(config.default_theme.to_string())
        }
    }

    impl WalletProvider for Recorder {
        fn configure(&mut self, config: &WalletConfig) -> Result<(), ProviderError> {
            self.record(config.chains.len().to_string())
        }
    }

    impl QueryProvider for Recorder {
        fn start(&mut self) -> Result<(), ProviderError> {
            self.record("start".to_string())
        }
    }

    #[test]
    fn test_bootstrap_order() {
        let log = Log::default();
        let mut theme = Recorder::new("theme", &log);
        let mut wallet = Recorder::new("wallet", &log);
        let mut query = Recorder::new("query", &log);

        let mut config = ClientConfig::with_project_id("abc123");
        config.theme.default_theme = Theme::Dark;

        bootstrap(&config, &mut theme, &mut wallet, &mut query).unwrap();
        assert_eq!(*log.borrow(), vec!["theme:dark", "wallet:2", "query:start"]);
    }

    #[test]
    fn test_bootstrap_stops_at_first_failure() {
        let log = Log::default();
        let mut theme = Recorder::new("theme", &log);
        let mut wallet = Recorder::new("wallet", &log);
        wallet.fail = true;
        let mut query = Recorder::new("query", &log);

        let config = ClientConfig::with_project_id("abc123");
        let err = bootstrap(&config, &mut theme, &mut wallet, &mut query).unwrap_err();
        assert!(matches!(
            err,
            Error::Provider(ProviderError::Init { provider: "wallet", .. })
        ));
        assert_eq!(*log.borrow(), vec!["theme:light", "wallet:2"]);
    }

    #[test]
    fn test_bootstrap_rejects_invalid_config() {
        let log = Log::default();
        let mut theme = Recorder::new("theme", &log);
        let mut wallet = Recorder::new("wallet", &log);
        let mut query = Recorder::new("query", &log);

        let config = ClientConfig::with_project_id(" ");
        let err = bootstrap(&config, &mut theme, &mut wallet, &mut query).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(log.borrow().is_empty());
    }
}
