//! Inspect the AhjoorCircle token registry and client configuration.

use ahjoor::address::checksum_address;
use ahjoor::error::AmountError;
use ahjoor::{format_token_amount, parse_units, ClientConfig, TokenRegistry, TokenSource};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ahjoor")]
#[command(version)]
#[command(about = "AhjoorCircle token registry and client configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known tokens
    Tokens,

    /// Show the token registered for an address
    Lookup {
        /// Token contract address (any casing, surrounding spaces ignored)
        address: String,
    },

    /// Format a raw on-chain amount using the token's decimals
    Format {
        /// Token contract address
        address: String,

        /// Raw integer amount
        raw: String,
    },

    /// Print the resolved client configuration as JSON
    Config,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let registry = TokenRegistry::builtin();

    match cli.command {
        Commands::Tokens => {
            for line in token_table(registry) {
                println!("{line}");
            }
        }
        Commands::Lookup { address } => {
            println!(
                "{}",
                serde_json::to_string_pretty(&lookup_report(registry, &address))?
            );
        }
        Commands::Format { address, raw } => {
            println!("{}", format_raw_amount(registry, &address, &raw)?);
        }
        Commands::Config => {
            let config = ClientConfig::from_env();
            config.validate()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn token_table(registry: &TokenRegistry) -> Vec<String> {
    registry
        .iter()
        .map(|token| {
            format!(
                "{:<6} {:<6} {:>2}  {}",
                token.symbol, token.name, token.decimals, token.address
            )
        })
        .collect()
}

/// The resolved token plus the EIP-55 form of the input, `null` when the
/// input is not a well-formed address.
fn lookup_report(registry: &TokenRegistry, address: &str) -> serde_json::Value {
    serde_json::json!({
        "token": registry.lookup(address),
        "checksum": checksum_address(address).ok(),
    })
}

fn format_raw_amount(
    registry: &TokenRegistry,
    address: &str,
    raw: &str,
) -> Result<String, AmountError> {
    let amount = parse_units(raw, 0)?;
    Ok(format_token_amount(registry, address, &amount))
}
