//! Normalized transport results.

use serde::Serialize;
use serde_json::Value;

/// Digest placeholder when a submission receipt carries no recognizable digest.
pub const DIGEST_NOT_AVAILABLE: &str = "n/a";

/// What a submit or simulate call produced, in a shape that does not depend
/// on the transport's payload layout.
///
/// Created per call and never persisted; a new result replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NormalizedResult {
    /// A signed transaction went out. `digest` may be [`DIGEST_NOT_AVAILABLE`].
    Submitted { digest: String, raw: Value },
    /// A dev-inspect report, kept opaque.
    Simulated { raw: Value },
    Empty,
}

impl NormalizedResult {
    pub fn digest(&self) -> Option<&str> {
        match self {
            NormalizedResult::Submitted { digest, .. } => Some(digest),
            _ => None,
        }
    }

    /// True for a submission whose digest was actually found.
    pub fn has_digest(&self) -> bool {
        self.digest().is_some_and(|d| d != DIGEST_NOT_AVAILABLE)
    }

    pub fn raw(&self) -> Option<&Value> {
        match self {
            NormalizedResult::Submitted { raw, .. } | NormalizedResult::Simulated { raw } => {
                Some(raw)
            }
            NormalizedResult::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_digest_accessors() {
        let sent = NormalizedResult::Submitted {
            digest: "9V3xKM".into(),
            raw: json!({}),
        };
        assert_eq!(sent.digest(), Some("9V3xKM"));
        assert!(sent.has_digest());

        let missing = NormalizedResult::Submitted {
            digest: DIGEST_NOT_AVAILABLE.into(),
            raw: json!({}),
        };
        assert!(!missing.has_digest());

        let sim = NormalizedResult::Simulated { raw: json!({"a": 1}) };
        assert_eq!(sim.digest(), None);
        assert_eq!(sim.raw(), Some(&json!({"a": 1})));
        assert_eq!(NormalizedResult::Empty.raw(), None);
    }

    #[test]
    fn test_json_tagging() {
        let v = serde_json::to_value(NormalizedResult::Empty).unwrap();
        assert_eq!(v, json!({"status": "empty"}));
        let v = serde_json::to_value(NormalizedResult::Simulated { raw: json!(1) }).unwrap();
        assert_eq!(v, json!({"status": "simulated", "raw": 1}));
    }
}
