//! Move-call descriptions.
//!
//! A [`CallDescription`] is the intent to call one Move entry point with an
//! ordered argument list. It carries no gas, sender or object versions; the
//! transport resolves those when it lowers the description into a
//! programmable transaction.

use std::fmt;
use std::str::FromStr;

use move_core_types::account_address::AccountAddress;
use move_core_types::identifier::Identifier;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::address::{address_to_string, parse_address};
use crate::error::IntentError;

/// Identifies an on-chain entry point: `<package>::<module>::<function>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallTarget {
    package: AccountAddress,
    module: String,
    function: String,
}

impl CallTarget {
    /// Build a target from a module path (`0xPKG::module`) and a function name.
    pub fn new(module_path: &str, function_name: &str) -> Result<Self, IntentError> {
        let full = format!("{module_path}::{function_name}");
        if module_path.trim().is_empty() {
            return Err(IntentError::invalid_target(full, "module path is empty"));
        }
        let (package, module) = module_path
            .split_once("::")
            .ok_or_else(|| IntentError::invalid_target(&full, "expected 0xPACKAGE::module"))?;
        let package =
            parse_address(package).map_err(|reason| IntentError::invalid_target(&full, reason))?;
        for ident in [module, function_name] {
            if !Identifier::is_valid(ident) {
                return Err(IntentError::invalid_target(
                    &full,
                    format!("{ident:?} is not a Move identifier"),
                ));
            }
        }
        Ok(Self {
            package,
            module: module.to_string(),
            function: function_name.to_string(),
        })
    }

    /// Parse a full `0xPKG::module::function` path.
    pub fn parse(path: &str) -> Result<Self, IntentError> {
        let (module_path, function) = path
            .trim()
            .rsplit_once("::")
            .ok_or_else(|| IntentError::invalid_target(path, "expected 0xPACKAGE::module::function"))?;
        Self::new(module_path, function)
    }

    pub fn package(&self) -> &AccountAddress {
        &self.package
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    /// `0x<64 hex>::module`
    pub fn module_path(&self) -> String {
        format!("{}::{}", address_to_string(&self.package), self.module)
    }
}

impl fmt::Display for CallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module_path(), self.function)
    }
}

impl Serialize for CallTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CallTarget", 2)?;
        s.serialize_field("module_path", &self.module_path())?;
        s.serialize_field("function_name", &self.function)?;
        s.end()
    }
}

/// A scalar Move value. Used for pure call arguments and for fields read
/// back out of object content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    Bool(bool),
    U64(u64),
    Address(#[serde(serialize_with = "serialize_address")] AccountAddress),
    Text(String),
}

fn serialize_address<S: Serializer>(addr: &AccountAddress, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&address_to_string(addr))
}

impl Primitive {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Primitive::U64(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Primitive::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Bool(b) => write!(f, "{b}"),
            Primitive::U64(n) => write!(f, "{n}"),
            Primitive::Address(a) => write!(f, "{}", address_to_string(a)),
            Primitive::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One argument of a Move call, in declared parameter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Argument {
    /// An on-chain object, by normalized id.
    ObjectRef(String),
    /// Raw bytes passed as `vector<u8>`.
    PureBytes(Vec<u8>),
    PureValue(Primitive),
}

/// Caller input before conversion into an [`Argument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawArg {
    /// Free text, sent as UTF-8 bytes.
    Text(String),
    /// An object id, sent as an object reference.
    Object(String),
    /// A decimal amount, coerced to `u64`.
    Amount(String),
    /// An address passed by value (e.g. a transfer recipient).
    Address(String),
}

impl FromStr for RawArg {
    type Err = String;

    /// `text:<s>`, `object:<id>`, `amount:<n>` or `address:<addr>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <kind>:<value>, got {s:?}"))?;
        let value = value.to_string();
        match kind {
            "text" => Ok(RawArg::Text(value)),
            "object" => Ok(RawArg::Object(value)),
            "amount" | "u64" => Ok(RawArg::Amount(value)),
            "address" => Ok(RawArg::Address(value)),
            other => Err(format!(
                "unknown argument kind {other:?} (expected text, object, amount or address)"
            )),
        }
    }
}

/// A submittable call: target plus ordered arguments.
///
/// Immutable once built. Transports take it by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallDescription {
    target: CallTarget,
    arguments: Vec<Argument>,
}

impl CallDescription {
    pub fn new(target: CallTarget, arguments: Vec<Argument>) -> Self {
        Self { target, arguments }
    }

    pub fn target(&self) -> &CallTarget {
        &self.target
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn into_parts(self) -> (CallTarget, Vec<Argument>) {
        (self.target, self.arguments)
    }
}
