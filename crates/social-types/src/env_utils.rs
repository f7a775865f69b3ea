//! Environment variable helpers for client configuration.
//!
//! Replaces the repeated pattern
//!
//! ```ignore
//! std::env::var("VAR_NAME")
//!     .ok()
//!     .and_then(|v| v.parse::<u64>().ok())
//!     .unwrap_or(default_value)
//! ```

use std::str::FromStr;

/// Parse an environment variable into a type that implements `FromStr`.
///
/// Returns `None` if the variable is not set or cannot be parsed.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Parse an environment variable with a default value.
///
/// # Example
///
/// ```
/// use nft_social_types::env_utils::env_var_or;
///
/// let budget: u64 = env_var_or("NFT_SOCIAL_DOC_UNSET_BUDGET", 10_000_000);
/// assert_eq!(budget, 10_000_000);
/// ```
pub fn env_var_or<T: FromStr>(key: &str, default: T) -> T {
    env_var(key).unwrap_or(default)
}

/// Read a string variable, treating blank values as unset.
pub fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a string variable with a default; blank values fall back to the default.
pub fn env_string_or(key: &str, default: &str) -> String {
    env_nonempty(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_or() {
        std::env::set_var("NFT_SOCIAL_TEST_U64", " 42 ");
        let val: u64 = env_var_or("NFT_SOCIAL_TEST_U64", 7);
        assert_eq!(val, 42);

        std::env::set_var("NFT_SOCIAL_TEST_BAD_U64", "many");
        let val: u64 = env_var_or("NFT_SOCIAL_TEST_BAD_U64", 7);
        assert_eq!(val, 7);

        std::env::remove_var("NFT_SOCIAL_TEST_U64");
        std::env::remove_var("NFT_SOCIAL_TEST_BAD_U64");
    }

    #[test]
    fn test_env_string_or_blank_is_unset() {
        std::env::set_var("NFT_SOCIAL_TEST_BLANK", "   ");
        assert_eq!(env_string_or("NFT_SOCIAL_TEST_BLANK", "fallback"), "fallback");
        assert_eq!(env_nonempty("NFT_SOCIAL_TEST_BLANK"), None);

        std::env::set_var("NFT_SOCIAL_TEST_SET", "value");
        assert_eq!(env_string_or("NFT_SOCIAL_TEST_SET", "fallback"), "value");

        std::env::remove_var("NFT_SOCIAL_TEST_BLANK");
        std::env::remove_var("NFT_SOCIAL_TEST_SET");
    }
}
