use tiny_keccak::{Hasher, Keccak};

use crate::error::AddressError;

/// Returns true for a `0x`-prefixed, 40-digit hex address (surrounding
/// whitespace ignored, any casing).
pub fn is_valid_address(address: &str) -> bool {
    parse_hex_body(address).is_some()
}

/// EIP-55 mixed-case checksum encoding of an address.
pub fn checksum_address(address: &str) -> Result<String, AddressError> {
    let body = parse_hex_body(address)
        .ok_or_else(|| AddressError::Malformed(address.to_string()))?;
    let hex_addr = body.to_ascii_lowercase();

    let mut hasher = Keccak::v256();
    hasher.update(hex_addr.as_bytes());
    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);

    // Uppercase each letter whose keccak nibble is 8 or above.
    let mixed: String = hex_addr
        .char_indices()
        .map(|(i, c)| {
            let byte = hash[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect();
    Ok(format!("0x{mixed}"))
}

/// Strip the `0x` prefix and check the remaining 20 bytes decode as hex.
fn parse_hex_body(address: &str) -> Option<&str> {
    let trimmed = address.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))?;
    if body.len() != 40 {
        return None;
    }
    hex::decode(body).ok()?;
    Some(body)
}
