use num_bigint::BigUint;

use crate::error::AmountError;
use crate::token::{TokenDescriptor, TokenSource};

/// Format a raw on-chain integer scaled down by `10^decimals`.
///
/// Trailing fractional zeros are dropped, so whole amounts (zero included)
/// render without a decimal point: `0`, `1`, `1.5`, `0.000123`.
pub fn format_units(amount: &BigUint, decimals: u8) -> String {
    let scale = BigUint::from(10u32).pow(u32::from(decimals));
    let whole = amount / &scale;
    let fraction = amount % &scale;

    if fraction.bits() == 0 {
        return whole.to_string();
    }

    let width = decimals as usize;
    let padded = format!("{:0>width$}", fraction.to_string());
    format!("{whole}.{}", padded.trim_end_matches('0'))
}

/// Parse a user-entered decimal amount into raw units.
pub fn parse_units(text: &str, decimals: u8) -> Result<BigUint, AmountError> {
    let input = text.trim();
    if input.is_empty() || input == "." {
        return Err(AmountError::Empty);
    }

    let (integer_part, fraction_part) = match input.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (input, ""),
    };

    if let Some(found) = integer_part
        .chars()
        .chain(fraction_part.chars())
        .find(|c| !c.is_ascii_digit())
    {
        return Err(AmountError::InvalidDigit {
            input: input.to_string(),
            found,
        });
    }

    let fraction_part = fraction_part.trim_end_matches('0');
    if fraction_part.len() > decimals as usize {
        return Err(AmountError::TooManyDecimals {
            input: input.to_string(),
            decimals,
        });
    }

    let mut digits = String::with_capacity(integer_part.len() + decimals as usize);
    digits.push_str(integer_part);
    digits.push_str(fraction_part);
    digits.extend(std::iter::repeat_n('0', decimals as usize - fraction_part.len()));

    // An empty digit string (".0" with zero decimals) is zero.
    Ok(BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default())
}

/// Render `amount` as `"<units> <SYMBOL>"` using the token registered for
/// `address`, or the unknown fallback.
pub fn format_token_amount(tokens: &dyn TokenSource, address: &str, amount: &BigUint) -> String {
    let token = tokens.find(address).unwrap_or_else(|| {
        log::debug!("no token metadata for {address:?}, using fallback descriptor");
        TokenDescriptor::unknown()
    });
    format!("{} {}", format_units(amount, token.decimals), token.symbol)
}
