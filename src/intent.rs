//! Intent construction: raw caller input → [`CallDescription`].
//!
//! Building is pure. The only outside input is the owned-object list used to
//! find an authorization object, and it is only iterated when a lookup was
//! actually requested.

use nft_social_types::address::{normalize_id, parse_address};
use nft_social_types::{
    Argument, CallDescription, CallTarget, IntentError, OwnedObjectSummary, Primitive, RawArg,
};
use tracing::debug;

/// First owned object whose type contains `type_suffix`, in iteration order.
///
/// Ties are broken only by the order of `owned`; callers that need a specific
/// capability should pass it explicitly.
pub fn find_authorization<'a, I>(owned: I, type_suffix: &str) -> Option<&'a OwnedObjectSummary>
where
    I: IntoIterator<Item = &'a OwnedObjectSummary>,
{
    owned.into_iter().find(|o| o.type_contains(type_suffix))
}

/// Coerce a decimal amount. Surrounding whitespace is ignored; nothing else is.
pub fn coerce_amount(position: usize, input: &str) -> Result<u64, IntentError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IntentError::malformed(position, input, "empty amount"));
    }
    trimmed
        .parse::<u64>()
        .map_err(|e| IntentError::malformed(position, input, format!("not a u64 amount: {e}")))
}

/// Convert one raw argument into its typed form.
pub fn convert_arg(position: usize, raw: &RawArg) -> Result<Argument, IntentError> {
    match raw {
        RawArg::Text(text) => Ok(Argument::PureBytes(text.as_bytes().to_vec())),
        RawArg::Object(id) => normalize_id(id)
            .map(Argument::ObjectRef)
            .map_err(|reason| IntentError::malformed(position, id, reason)),
        RawArg::Amount(amount) => {
            coerce_amount(position, amount).map(|n| Argument::PureValue(Primitive::U64(n)))
        }
        RawArg::Address(addr) => parse_address(addr)
            .map(|a| Argument::PureValue(Primitive::Address(a)))
            .map_err(|reason| IntentError::malformed(position, addr, reason)),
    }
}

/// Assemble a call description.
///
/// With a non-empty `auth_type_suffix`, the first owned object whose type
/// contains it is prepended as an object argument. Finding none is not an
/// error: the remote call is left to fail if it needed one. `None` and
/// `Some("")` both skip the lookup without touching `owned_objects`.
pub fn build<'a, I>(
    target: CallTarget,
    owned_objects: I,
    raw_args: &[RawArg],
    auth_type_suffix: Option<&str>,
) -> Result<CallDescription, IntentError>
where
    I: IntoIterator<Item = &'a OwnedObjectSummary>,
{
    let mut arguments = Vec::with_capacity(raw_args.len() + 1);

    if let Some(suffix) = auth_type_suffix.filter(|s| !s.is_empty()) {
        match find_authorization(owned_objects, suffix) {
            Some(cap) => {
                debug!(object_id = %cap.object_id, suffix, "authorization object found");
                arguments.push(Argument::ObjectRef(cap.object_id.clone()));
            }
            None => debug!(suffix, "no authorization object owned"),
        }
    }

    for (position, raw) in raw_args.iter().enumerate() {
        arguments.push(convert_arg(position, raw)?);
    }

    debug!(%target, args = arguments.len(), "built call description");
    Ok(CallDescription::new(target, arguments))
}
