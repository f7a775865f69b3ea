//! Fullnode endpoints and network-name inference.

pub const MAINNET_RPC: &str = "https://fullnode.mainnet.sui.io:443";
pub const TESTNET_RPC: &str = "https://fullnode.testnet.sui.io:443";
pub const DEVNET_RPC: &str = "https://fullnode.devnet.sui.io:443";
pub const LOCALNET_RPC: &str = "http://127.0.0.1:9000";

pub fn infer_network_from_url(url: &str) -> Option<&'static str> {
    let lower = url.to_lowercase();
    if lower.contains("testnet") {
        Some("testnet")
    } else if lower.contains("devnet") {
        Some("devnet")
    } else if lower.contains("mainnet") {
        Some("mainnet")
    } else if lower.contains("127.0.0.1") || lower.contains("localhost") {
        Some("localnet")
    } else {
        None
    }
}

/// Accept either a network name or a URL; names map to the public fullnodes.
pub fn resolve_rpc_url(name_or_url: &str) -> String {
    match name_or_url.trim().to_lowercase().as_str() {
        "mainnet" => MAINNET_RPC.to_string(),
        "testnet" => TESTNET_RPC.to_string(),
        "devnet" => DEVNET_RPC.to_string(),
        "localnet" | "local" => LOCALNET_RPC.to_string(),
        _ => name_or_url.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_network_from_url() {
        assert_eq!(infer_network_from_url(TESTNET_RPC), Some("testnet"));
        assert_eq!(infer_network_from_url("https://FULLNODE.MAINNET.sui.io"), Some("mainnet"));
        assert_eq!(infer_network_from_url(LOCALNET_RPC), Some("localnet"));
        assert_eq!(infer_network_from_url("https://rpc.example.com"), None);
    }

    #[test]
    fn test_resolve_rpc_url() {
        assert_eq!(resolve_rpc_url("testnet"), TESTNET_RPC);
        assert_eq!(resolve_rpc_url(" Mainnet "), MAINNET_RPC);
        assert_eq!(resolve_rpc_url("local"), LOCALNET_RPC);
        assert_eq!(resolve_rpc_url("https://rpc.example.com"), "https://rpc.example.com");
    }
}
