//! Output formatting for the nft-social CLI
//!
//! Human-readable output uses ANSI colors; `--json` prints the serialized
//! records instead.

use serde::Serialize;
use serde_json::Value;

use nft_social::{CallDescription, NormalizedResult, OwnedObjectSummary, XpReport};
use nft_social_types::address::short_id;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a submit or simulate result for display
pub fn format_result(result: &NormalizedResult, verbose: bool) -> String {
    let mut out = String::new();
    match result {
        NormalizedResult::Submitted { digest, .. } => {
            out.push_str("\x1b[32m✓ Transaction submitted\x1b[0m\n");
            out.push_str(&format!("\x1b[1mDigest:\x1b[0m \x1b[36m{}\x1b[0m\n", digest));
        }
        NormalizedResult::Simulated { raw } => match simulation_error(raw) {
            None => out.push_str("\x1b[32m✓ Simulation complete (dev-inspect)\x1b[0m\n"),
            Some(error) => out.push_str(&format!(
                "\x1b[31m✗ Simulation failed: {}\x1b[0m\n",
                error
            )),
        },
        NormalizedResult::Empty => out.push_str("\x1b[33mNo result returned\x1b[0m\n"),
    }

    if verbose {
        if let Some(raw) = result.raw() {
            out.push_str("\n\x1b[1mRaw response:\x1b[0m\n");
            out.push_str(&serde_json::to_string_pretty(raw).unwrap_or_else(|_| "{}".to_string()));
            out.push('\n');
        }
    }
    out
}

/// Best-effort failure reason from a dev-inspect report.
fn simulation_error(raw: &Value) -> Option<String> {
    if let Some(error) = raw.get("error").and_then(Value::as_str) {
        return Some(error.to_string());
    }
    let status = raw.get("effects")?.get("status")?;
    match status.get("status").and_then(Value::as_str) {
        Some("failure") => Some(
            status
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string(),
        ),
        _ => None,
    }
}

pub fn format_nfts(nfts: &[OwnedObjectSummary]) -> String {
    if nfts.is_empty() {
        return "No NFTSOCIAL objects owned by this account\n".to_string();
    }
    let mut out = format!("\x1b[1mFound {} NFT(s):\x1b[0m\n", nfts.len());
    for nft in nfts {
        out.push_str(&format!("\n  \x1b[36m{}\x1b[0m\n", short_id(&nft.object_id)));
        for (name, value) in &nft.fields {
            out.push_str(&format!("    {:<16} {}\n", name, value));
        }
    }
    out
}

pub fn format_xp(report: &XpReport, verbose: bool) -> String {
    let mut out = match report.xp {
        Some(xp) => format!(
            "\x1b[1mXP of\x1b[0m \x1b[36m{}\x1b[0m: {}\n",
            short_id(&report.nft_id),
            xp
        ),
        None => format!(
            "\x1b[33mget_xp returned no u64 for {}\x1b[0m\n",
            short_id(&report.nft_id)
        ),
    };
    out.push_str(&format_result(&report.result, verbose));
    out
}

pub fn format_call(call: &CallDescription) -> String {
    let mut out = format!("\x1b[1mCall:\x1b[0m {}\n", call.target());
    if call.arguments().is_empty() {
        out.push_str("  (no arguments)\n");
    }
    for (i, arg) in call.arguments().iter().enumerate() {
        let rendered = serde_json::to_string(arg).unwrap_or_else(|_| "?".to_string());
        out.push_str(&format!("  [{}] {}\n", i, rendered));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_submitted() {
        let result = NormalizedResult::Submitted {
            digest: "9V3xKM".into(),
            raw: json!({}),
        };
        let out = format_result(&result, false);
        assert!(out.contains("Transaction submitted"));
        assert!(out.contains("9V3xKM"));
        assert!(!out.contains("Raw response"));
    }

    #[test]
    fn test_format_simulation_failure() {
        let raw = json!({"effects": {"status": {"status": "failure", "error": "MoveAbort(1)"}}});
        let out = format_result(&NormalizedResult::Simulated { raw }, true);
        assert!(out.contains("Simulation failed: MoveAbort(1)"));
        assert!(out.contains("Raw response"));
    }

    #[test]
    fn test_format_nfts_empty() {
        assert!(format_nfts(&[]).contains("No NFTSOCIAL"));
    }
}
