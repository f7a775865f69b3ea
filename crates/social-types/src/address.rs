//! Address and object-id normalization.
//!
//! Sui addresses and object ids are the same 32-byte values and show up in
//! several spellings:
//! - Short form: "0x2"
//! - Full form: "0x0000000000000000000000000000000000000000000000000000000000000002"
//! - Without prefix: "2"
//!
//! Everything that enters a [`CallDescription`](crate::CallDescription) is
//! stored in the full lowercase form so two spellings of one id compare equal.

use move_core_types::account_address::AccountAddress;

/// The zero address, used as the dev-inspect sender when no account is known.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Parse an address or object id in any of the accepted spellings.
///
/// Returns a human-readable reason on failure so callers can wrap it into
/// their own error type.
///
/// # Examples
///
/// ```
/// use nft_social_types::address::parse_address;
///
/// let addr = parse_address("0x2").unwrap();
/// assert_eq!(addr.to_hex_literal(), "0x2");
/// assert!(parse_address("0xnothex").is_err());
/// ```
pub fn parse_address(addr: &str) -> Result<AccountAddress, String> {
    let trimmed = addr.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if hex.is_empty() {
        return Err("empty address".to_string());
    }
    if hex.len() > AccountAddress::LENGTH * 2 {
        return Err(format!(
            "address longer than {} hex characters",
            AccountAddress::LENGTH * 2
        ));
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("address is not hex".to_string());
    }
    AccountAddress::from_hex_literal(&format!("0x{}", hex.to_lowercase()))
        .map_err(|e| e.to_string())
}

/// Convert an AccountAddress to its normalized full-form string.
///
/// # Examples
///
/// ```
/// use move_core_types::account_address::AccountAddress;
/// use nft_social_types::address::address_to_string;
///
/// let addr = AccountAddress::from_hex_literal("0x2").unwrap();
/// assert_eq!(
///     address_to_string(&addr),
///     "0x0000000000000000000000000000000000000000000000000000000000000002"
/// );
/// ```
pub fn address_to_string(addr: &AccountAddress) -> String {
    format!("0x{}", hex::encode(addr.as_ref()))
}

/// Normalize an address or object id, failing on anything that is not hex.
pub fn normalize_id(id: &str) -> Result<String, String> {
    parse_address(id).map(|a| address_to_string(&a))
}

/// Shorten a normalized id for display ("0x0000…abc" → "0xabc").
pub fn short_id(id: &str) -> String {
    let hex = id.strip_prefix("0x").unwrap_or(id);
    let trimmed = hex.trim_start_matches('0');
    if trimmed.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_spellings() {
        let full = "0x0000000000000000000000000000000000000000000000000000000000000abc";
        for spelling in ["0xabc", "0xABC", "0XABC", "abc", "  0xabc  ", full] {
            let addr = parse_address(spelling).unwrap();
            assert_eq!(address_to_string(&addr), full, "spelling {spelling:?}");
        }
    }

    #[test]
    fn test_parse_address_rejects() {
        assert!(parse_address("").is_err());
        assert!(parse_address("0x").is_err());
        assert!(parse_address("0xGGG").is_err());
        assert!(parse_address(&format!("0x{}", "1".repeat(65))).is_err());
    }

    #[test]
    fn test_normalize_id() {
        assert_eq!(
            normalize_id("0x2").unwrap(),
            "0x0000000000000000000000000000000000000000000000000000000000000002"
        );
        assert!(normalize_id("recipient").is_err());
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id(ZERO_ADDRESS), "0x0");
        assert_eq!(
            short_id("0x0000000000000000000000000000000000000000000000000000000000000abc"),
            "0xabc"
        );
        assert_eq!(short_id("0xabc"), "0xabc");
    }
}
