//! Lowering a [`CallDescription`] into a programmable transaction.
//!
//! Pure arguments are BCS-encoded locally. Object arguments need the
//! object's current version (or initial shared version), so they go through
//! an [`ObjectArgResolver`].

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use sui_types::base_types::ObjectID;
use sui_types::programmable_transaction_builder::ProgrammableTransactionBuilder;
use sui_types::transaction::{
    CallArg, Command, ObjectArg, ProgrammableMoveCall, ProgrammableTransaction,
};

use nft_social_types::{Argument, CallDescription, Primitive};

/// Turns an object id into a transaction input.
#[async_trait::async_trait]
pub trait ObjectArgResolver: Send + Sync {
    async fn object_arg(&self, id: ObjectID) -> Result<ObjectArg>;
}

/// BCS bytes of a pure argument.
pub fn encode_pure(arg: &Argument) -> Result<Vec<u8>> {
    match arg {
        Argument::PureBytes(bytes) => bcs::to_bytes(bytes).context("bcs vector<u8>"),
        Argument::PureValue(Primitive::U64(n)) => bcs::to_bytes(n).context("bcs u64"),
        Argument::PureValue(Primitive::Bool(b)) => bcs::to_bytes(b).context("bcs bool"),
        Argument::PureValue(Primitive::Address(a)) => bcs::to_bytes(a).context("bcs address"),
        Argument::PureValue(Primitive::Text(s)) => bcs::to_bytes(s).context("bcs string"),
        Argument::ObjectRef(id) => bail!("object argument {id} has no pure encoding"),
    }
}

/// Build a single-command programmable transaction for `call`.
pub async fn build_programmable(
    call: CallDescription,
    resolver: &dyn ObjectArgResolver,
) -> Result<ProgrammableTransaction> {
    let (target, arguments) = call.into_parts();
    let mut ptb = ProgrammableTransactionBuilder::new();
    let mut call_args = Vec::with_capacity(arguments.len());

    for (position, arg) in arguments.iter().enumerate() {
        let call_arg = match arg {
            Argument::ObjectRef(id) => {
                let id = ObjectID::from_str(id)
                    .with_context(|| format!("argument #{position}: parse object id {id}"))?;
                let object_arg = resolver
                    .object_arg(id)
                    .await
                    .with_context(|| format!("argument #{position}: resolve object {id}"))?;
                CallArg::Object(object_arg)
            }
            pure => CallArg::Pure(
                encode_pure(pure).with_context(|| format!("argument #{position}"))?,
            ),
        };
        call_args.push(ptb.input(call_arg).context("ptb.input")?);
    }

    ptb.command(Command::MoveCall(Box::new(ProgrammableMoveCall {
        package: ObjectID::from(*target.package()),
        module: target.module().to_string(),
        function: target.function().to_string(),
        type_arguments: vec![],
        arguments: call_args,
    })));
    Ok(ptb.finish())
}
