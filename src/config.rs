//! Client configuration: defaults, then environment, then CLI overrides.

use nft_social_transport::network::{resolve_rpc_url, TESTNET_RPC};
use nft_social_transport::RpcSettings;
use nft_social_types::env_utils::{env_nonempty, env_string_or, env_var_or};

/// Published `social_creator` package on testnet.
pub const DEFAULT_PACKAGE: &str =
    "0x0c0ebaa41608123300f948b392640b258ab9db1031d83341b8bf507e4c00a2a8";

pub const ENV_RPC_URL: &str = "NFT_SOCIAL_RPC_URL";
pub const ENV_PACKAGE: &str = "NFT_SOCIAL_PACKAGE";
pub const ENV_GAS_BUDGET: &str = "NFT_SOCIAL_GAS_BUDGET";
pub const ENV_PAGE_LIMIT: &str = "NFT_SOCIAL_PAGE_LIMIT";
pub const ENV_PRIVATE_KEY: &str = "NFT_SOCIAL_PRIVATE_KEY";

#[derive(Clone)]
pub struct SocialConfig {
    pub rpc_url: String,
    /// `None` only when explicitly cleared; actions then fail with a missing-input error.
    pub package: Option<String>,
    pub gas_budget: u64,
    pub page_size: usize,
    pub max_pages: usize,
    /// `suiprivkey…` key. Without it every state-changing action is simulated.
    pub private_key: Option<String>,
    /// Pause before re-listing after a submission, so the fullnode catches up.
    pub refresh_delay_ms: u64,
}

impl Default for SocialConfig {
    fn default() -> Self {
        let rpc = RpcSettings::default();
        Self {
            rpc_url: TESTNET_RPC.to_string(),
            package: Some(DEFAULT_PACKAGE.to_string()),
            gas_budget: rpc.gas_budget,
            page_size: rpc.page_size,
            max_pages: rpc.max_pages,
            private_key: None,
            refresh_delay_ms: 1500,
        }
    }
}

impl SocialConfig {
    /// Defaults overridden by `NFT_SOCIAL_*` variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            rpc_url: resolve_rpc_url(&env_string_or(ENV_RPC_URL, &defaults.rpc_url)),
            package: env_nonempty(ENV_PACKAGE).or(defaults.package),
            gas_budget: env_var_or(ENV_GAS_BUDGET, defaults.gas_budget),
            page_size: env_var_or(ENV_PAGE_LIMIT, defaults.page_size).max(1),
            max_pages: defaults.max_pages,
            private_key: env_nonempty(ENV_PRIVATE_KEY),
            refresh_delay_ms: defaults.refresh_delay_ms,
        }
    }

    /// Apply a `--package` flag. A blank value clears the package.
    pub fn with_package(mut self, package: Option<&str>) -> Self {
        if let Some(p) = package {
            let p = p.trim();
            self.package = (!p.is_empty()).then(|| p.to_string());
        }
        self
    }

    pub fn with_rpc_url(mut self, rpc_url: Option<&str>) -> Self {
        if let Some(url) = rpc_url {
            self.rpc_url = resolve_rpc_url(url);
        }
        self
    }

    pub fn rpc_settings(&self) -> RpcSettings {
        RpcSettings {
            gas_budget: self.gas_budget,
            page_size: self.page_size,
            max_pages: self.max_pages,
        }
    }
}

impl std::fmt::Debug for SocialConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocialConfig")
            .field("rpc_url", &self.rpc_url)
            .field("package", &self.package)
            .field("gas_budget", &self.gas_budget)
            .field("page_size", &self.page_size)
            .field("max_pages", &self.max_pages)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("refresh_delay_ms", &self.refresh_delay_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SocialConfig::default();
        assert_eq!(config.rpc_url, TESTNET_RPC);
        assert_eq!(config.package.as_deref(), Some(DEFAULT_PACKAGE));
        assert_eq!(config.gas_budget, 10_000_000);
        assert!(config.private_key.is_none());
    }

    #[test]
    fn test_flag_overrides() {
        let config = SocialConfig::default()
            .with_package(Some(" 0xabc "))
            .with_rpc_url(Some("devnet"));
        assert_eq!(config.package.as_deref(), Some("0xabc"));
        assert!(config.rpc_url.contains("devnet"));

        let cleared = config.with_package(Some("  "));
        assert_eq!(cleared.package, None);

        let untouched = SocialConfig::default().with_package(None).with_rpc_url(None);
        assert_eq!(untouched.package.as_deref(), Some(DEFAULT_PACKAGE));
        assert_eq!(untouched.rpc_url, TESTNET_RPC);
    }

    #[test]
    fn test_rpc_settings_follow_config() {
        let config = SocialConfig {
            gas_budget: 5,
            page_size: 7,
            ..SocialConfig::default()
        };
        let settings = config.rpc_settings();
        assert_eq!(settings.gas_budget, 5);
        assert_eq!(settings.page_size, 7);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = SocialConfig {
            private_key: Some("suiprivkey1secret".into()),
            ..SocialConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
