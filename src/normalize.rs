//! Response normalization: untyped transport payloads → stable records.
//!
//! Upstream payload shapes are not contractually fixed (wallet receipts,
//! JSON-RPC responses and older SDK shapes all nest things differently), so
//! every read goes through an ordered list of accessor paths and takes the
//! first one that is present. Nothing here fails on shape drift: missing
//! records are skipped and missing fields fall back to [`field_default`].

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use nft_social_types::{NormalizedResult, OwnedObjectSummary, Primitive, DIGEST_NOT_AVAILABLE};

/// A sequence of object keys; the empty path is the value itself.
type Path = &'static [&'static str];

const DIGEST_PATHS: &[Path] = &[
    &["digest"],
    &["effects", "transactionDigest"],
    &["certificate", "transactionDigest"],
    &["transaction", "digest"],
];

/// Tried after the bare-array shape.
const COLLECTION_PATHS: &[Path] = &[&["data"], &["result"]];

const OBJECT_ID_PATHS: &[Path] = &[
    &["objectId"],
    &["object", "objectId"],
    &["reference", "objectId"],
    &["data", "objectId"],
];

const OBJECT_TYPE_PATHS: &[Path] = &[
    &["objectType"],
    &["type"],
    &["object", "type"],
    &["object", "objectType"],
    &["data", "type"],
];

const FIELDS_PATHS: &[Path] = &[
    &["data", "content", "fields"],
    &["content", "fields"],
    &["details", "data", "content", "fields"],
];

/// Which kind of payload is being normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind<'a> {
    Submission,
    Simulation,
    /// An owned-object listing, optionally restricted to types containing the filter.
    ObjectQuery { type_filter: Option<&'a str> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Result(NormalizedResult),
    Objects(Vec<OwnedObjectSummary>),
}

/// How an expected object field is read and defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Strings, numbers, or `vector<u8>` rendered as a byte array.
    Text,
    /// `u64` rendered as a JSON number or a decimal string.
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Number,
        }
    }
}

/// The value used when a field is absent or unreadable.
pub fn field_default(kind: FieldKind) -> Primitive {
    match kind {
        FieldKind::Text => Primitive::Text(String::new()),
        FieldKind::Number => Primitive::U64(0),
    }
}

pub fn normalize(raw: &Value, kind: PayloadKind<'_>) -> Normalized {
    match kind {
        PayloadKind::Submission => Normalized::Result(normalize_submission(raw)),
        PayloadKind::Simulation => Normalized::Result(normalize_simulation(raw)),
        PayloadKind::ObjectQuery { type_filter } => {
            Normalized::Objects(normalize_owned(raw, type_filter))
        }
    }
}

/// Extract the transaction digest, or the "n/a" sentinel if there is none.
pub fn normalize_submission(raw: &Value) -> NormalizedResult {
    if raw.is_null() {
        return NormalizedResult::Empty;
    }
    let digest = first_str(raw, DIGEST_PATHS)
        .unwrap_or(DIGEST_NOT_AVAILABLE)
        .to_string();
    NormalizedResult::Submitted {
        digest,
        raw: raw.clone(),
    }
}

/// Simulation reports are kept opaque.
pub fn normalize_simulation(raw: &Value) -> NormalizedResult {
    if raw.is_null() {
        return NormalizedResult::Empty;
    }
    NormalizedResult::Simulated { raw: raw.clone() }
}

/// Owned objects with an id and a type, optionally filtered by a type fragment.
/// `fields` is left empty; see [`summarize_detail`].
pub fn normalize_owned(raw: &Value, type_filter: Option<&str>) -> Vec<OwnedObjectSummary> {
    let items = collection(raw);
    let mut out = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let (Some(object_id), Some(object_type)) = (
            first_str(item, OBJECT_ID_PATHS),
            first_str(item, OBJECT_TYPE_PATHS),
        ) else {
            debug!(index, "skipping owned object without id or type");
            continue;
        };
        if type_filter.is_some_and(|filter| !object_type.contains(filter)) {
            continue;
        }
        out.push(OwnedObjectSummary::new(object_id, object_type));
    }
    out
}

/// Read `schema` out of an object-detail payload, defaulting every field
/// that is missing.
pub fn extract_fields(detail: &Value, schema: &[FieldSpec]) -> BTreeMap<String, Primitive> {
    let empty = Map::new();
    let fields = first_present(detail, FIELDS_PATHS)
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    schema
        .iter()
        .map(|spec| {
            let value = fields
                .get(spec.name)
                .and_then(|v| read_field(v, spec.kind))
                .unwrap_or_else(|| field_default(spec.kind));
            (spec.name.to_string(), value)
        })
        .collect()
}

pub fn summarize_detail(
    object_id: &str,
    object_type: &str,
    detail: &Value,
    schema: &[FieldSpec],
) -> OwnedObjectSummary {
    OwnedObjectSummary::new(object_id, object_type).with_fields(extract_fields(detail, schema))
}

/// First return value of the first command of a dev-inspect report, read as
/// a little-endian `u64`.
pub fn simulated_return_u64(raw: &Value) -> Option<u64> {
    let (bytes, _type_tag) = first_return_value(raw)?;
    let bytes: [u8; 8] = bytes.try_into().ok()?;
    Some(u64::from_le_bytes(bytes))
}

/// `results[0].returnValues[0]` as `(bytes, type tag)`.
fn first_return_value(raw: &Value) -> Option<(Vec<u8>, Option<&str>)> {
    let entry = raw
        .get("results")?
        .get(0)?
        .get("returnValues")?
        .get(0)?;
    let bytes = byte_array(entry.get(0)?)?;
    Some((bytes, entry.get(1).and_then(Value::as_str)))
}

fn collection(raw: &Value) -> &[Value] {
    if let Value::Array(items) = raw {
        return items.as_slice();
    }
    match first_present(raw, COLLECTION_PATHS) {
        Some(Value::Array(items)) => items.as_slice(),
        Some(other) => {
            warn!(kind = json_kind(other), "object listing is not a sequence");
            &[]
        }
        None => &[],
    }
}

fn read_field(value: &Value, kind: FieldKind) -> Option<Primitive> {
    match kind {
        FieldKind::Text => read_text(value).map(Primitive::Text),
        FieldKind::Number => read_number(value).map(Primitive::U64),
    }
}

fn read_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) => byte_array(value).map(|b| String::from_utf8_lossy(&b).into_owned()),
        _ => None,
    }
}

fn read_number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn byte_array(value: &Value) -> Option<Vec<u8>> {
    value
        .as_array()?
        .iter()
        .map(|b| b.as_u64().and_then(|n| u8::try_from(n).ok()))
        .collect()
}

fn lookup<'v>(value: &'v Value, path: Path) -> Option<&'v Value> {
    path.iter()
        .try_fold(value, |v, key| v.get(*key))
        .filter(|v| !v.is_null())
}

fn first_present<'v>(value: &'v Value, paths: &[Path]) -> Option<&'v Value> {
    paths.iter().find_map(|path| lookup(value, *path))
}

/// Like [`first_present`], but only non-empty strings count as present.
fn first_str<'v>(value: &'v Value, paths: &[Path]) -> Option<&'v str> {
    paths
        .iter()
        .filter_map(|path| lookup(value, *path).and_then(Value::as_str))
        .find(|s| !s.is_empty())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: &[FieldSpec] = &[
        FieldSpec::text("creator_name"),
        FieldSpec::text("creator_handle"),
        FieldSpec::number("xp"),
        FieldSpec::number("level"),
    ];

    #[test]
    fn test_object_query_data_shape() {
        let raw = json!({"data": [{"objectId": "0x1", "objectType": "pkg::T"}]});
        let Normalized::Objects(objects) =
            normalize(&raw, PayloadKind::ObjectQuery { type_filter: None })
        else {
            panic!("expected objects");
        };
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].object_id, "0x1");
        assert_eq!(objects[0].object_type, "pkg::T");
        assert!(objects[0].fields.is_empty());
    }

    #[test]
    fn test_object_query_bare_empty_sequence() {
        let out = normalize(&json!([]), PayloadKind::ObjectQuery { type_filter: None });
        assert_eq!(out, Normalized::Objects(vec![]));
    }

    #[test]
    fn test_collection_shape_priority() {
        // `data` wins over `result` when both are present.
        let raw = json!({
            "data": [{"objectId": "0xd", "type": "a::b::C"}],
            "result": [{"objectId": "0xr", "type": "a::b::C"}],
        });
        let ids: Vec<_> = normalize_owned(&raw, None).into_iter().map(|o| o.object_id).collect();
        assert_eq!(ids, vec!["0xd"]);

        // A null accessor counts as absent.
        let raw = json!({"data": null, "result": [{"objectId": "0xr", "type": "a::b::C"}]});
        assert_eq!(normalize_owned(&raw, None)[0].object_id, "0xr");

        // Present but not a sequence: nothing, not an error.
        assert!(normalize_owned(&json!({"data": {"objectId": "0x1"}}), None).is_empty());
        assert!(normalize_owned(&json!("garbage"), None).is_empty());
        assert!(normalize_owned(&Value::Null, None).is_empty());
    }

    #[test]
    fn test_element_accessor_alternatives() {
        let raw = json!([
            {"objectId": "0x1", "objectType": "m::T"},
            {"object": {"objectId": "0x2", "type": "m::T"}},
            {"reference": {"objectId": "0x3"}, "object": {"objectType": "m::T"}},
            {"data": {"objectId": "0x4", "type": "m::T"}},
            {"objectId": "0x5"},
            {"type": "m::T"},
            {"objectId": "", "type": "m::T"},
            42,
        ]);
        let ids: Vec<_> = normalize_owned(&raw, None).into_iter().map(|o| o.object_id).collect();
        assert_eq!(ids, vec!["0x1", "0x2", "0x3", "0x4"]);
    }

    #[test]
    fn test_type_filter() {
        let raw = json!([
            {"objectId": "0x1", "type": "0xabc::social_creator::NFTSOCIAL"},
            {"objectId": "0x2", "type": "0xabc::social_creator::AdminCap"},
            {"objectId": "0x3", "type": "0x2::coin::Coin<0x2::sui::SUI>"},
        ]);
        let nfts = normalize_owned(&raw, Some("::social_creator::NFTSOCIAL"));
        assert_eq!(nfts.len(), 1);
        assert_eq!(nfts[0].object_id, "0x1");
    }

    #[test]
    fn test_submission_digest_locations() {
        for raw in [
            json!({"digest": "D1"}),
            json!({"effects": {"transactionDigest": "D1"}}),
            json!({"certificate": {"transactionDigest": "D1"}}),
            json!({"transaction": {"digest": "D1"}}),
            json!({"digest": null, "effects": {"transactionDigest": "D1"}}),
        ] {
            assert_eq!(normalize_submission(&raw).digest(), Some("D1"), "{raw}");
        }
    }

    #[test]
    fn test_submission_without_digest_uses_sentinel() {
        let raw = json!({"effects": {"status": {"status": "success"}}});
        let result = normalize_submission(&raw);
        assert_eq!(
            result,
            NormalizedResult::Submitted {
                digest: DIGEST_NOT_AVAILABLE.to_string(),
                raw: raw.clone(),
            }
        );
        assert_eq!(
            normalize_submission(&json!({"digest": ""})).digest(),
            Some(DIGEST_NOT_AVAILABLE)
        );
        assert_eq!(normalize_submission(&Value::Null), NormalizedResult::Empty);
    }

    #[test]
    fn test_simulation_is_opaque() {
        let raw = json!({"effects": {"status": {"status": "failure"}}, "error": "MoveAbort"});
        assert_eq!(
            normalize(&raw, PayloadKind::Simulation),
            Normalized::Result(NormalizedResult::Simulated { raw: raw.clone() })
        );
        assert_eq!(normalize_simulation(&Value::Null), NormalizedResult::Empty);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let payloads = [
            (json!({"digest": "abc", "effects": {}}), PayloadKind::Submission),
            (json!({"results": []}), PayloadKind::Simulation),
            (
                json!({"result": [{"objectId": "0x1", "type": "m::T"}]}),
                PayloadKind::ObjectQuery { type_filter: Some("::T") },
            ),
        ];
        for (raw, kind) in payloads {
            assert_eq!(normalize(&raw, kind), normalize(&raw, kind));
        }
    }

    #[test]
    fn test_field_defaults() {
        assert_eq!(field_default(FieldKind::Text), Primitive::Text(String::new()));
        assert_eq!(field_default(FieldKind::Number), Primitive::U64(0));

        let fields = extract_fields(&json!({}), SCHEMA);
        assert_eq!(fields.len(), SCHEMA.len());
        for spec in SCHEMA {
            assert_eq!(fields[spec.name], field_default(spec.kind), "{}", spec.name);
        }
    }

    #[test]
    fn test_extract_fields_nesting_paths() {
        let inner = json!({"creator_name": "Ana", "creator_handle": "ana", "xp": "250", "level": 3});
        for detail in [
            json!({"data": {"content": {"fields": inner.clone()}}}),
            json!({"content": {"fields": inner.clone()}}),
            json!({"details": {"data": {"content": {"fields": inner.clone()}}}}),
        ] {
            let fields = extract_fields(&detail, SCHEMA);
            assert_eq!(fields["creator_name"], Primitive::Text("Ana".into()));
            assert_eq!(fields["creator_handle"], Primitive::Text("ana".into()));
            assert_eq!(fields["xp"], Primitive::U64(250));
            assert_eq!(fields["level"], Primitive::U64(3));
        }
    }

    #[test]
    fn test_extract_fields_value_shapes() {
        let detail = json!({"data": {"content": {"fields": {
            "creator_name": [65, 110, 97],
            "creator_handle": {"unexpected": true},
            "xp": "not a number",
            "level": -4,
        }}}});
        let fields = extract_fields(&detail, SCHEMA);
        assert_eq!(fields["creator_name"], Primitive::Text("Ana".into()));
        assert_eq!(fields["creator_handle"], Primitive::Text(String::new()));
        assert_eq!(fields["xp"], Primitive::U64(0));
        assert_eq!(fields["level"], Primitive::U64(0));
    }

    #[test]
    fn test_summarize_detail() {
        let detail = json!({"data": {"content": {"fields": {"xp": 10}}}});
        let summary = summarize_detail("0x1", "m::NFTSOCIAL", &detail, SCHEMA);
        assert_eq!(summary.object_id, "0x1");
        assert_eq!(summary.field("xp"), Some(&Primitive::U64(10)));
        assert_eq!(summary.field("level"), Some(&Primitive::U64(0)));
    }

    #[test]
    fn test_simulated_return_u64() {
        let raw = json!({"results": [{"returnValues": [[[44, 1, 0, 0, 0, 0, 0, 0], "u64"]]}]});
        assert_eq!(simulated_return_u64(&raw), Some(300));

        assert_eq!(simulated_return_u64(&json!({"results": []})), None);
        assert_eq!(simulated_return_u64(&json!({"error": "abort"})), None);
        let short = json!({"results": [{"returnValues": [[[1, 2], "u16"]]}]});
        assert_eq!(simulated_return_u64(&short), None);
    }
}
