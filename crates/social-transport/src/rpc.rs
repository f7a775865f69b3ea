//! Sui JSON-RPC implementation of the query and transaction traits.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;
use sui_json_rpc_types::{
    SuiObjectDataOptions, SuiObjectResponseQuery, SuiTransactionBlockResponseOptions,
};
use sui_sdk::{SuiClient, SuiClientBuilder};
use sui_types::base_types::{ObjectID, SuiAddress};
use sui_types::object::Owner;
use sui_types::quorum_driver_types::ExecuteTransactionRequestType;
use sui_types::transaction::{ObjectArg, SharedObjectMutability, TransactionData, TransactionKind};
use tracing::{debug, info};

use nft_social_types::CallDescription;

use crate::ptb::{build_programmable, ObjectArgResolver};
use crate::signer::TransactionSigner;
use crate::{ObjectQueryService, TransactionTransport, TransportError};

/// Limits for [`SuiRpcTransport`].
#[derive(Debug, Clone, Copy)]
pub struct RpcSettings {
    /// Gas budget in MIST for submitted transactions.
    pub gas_budget: u64,
    /// Page size for `suix_getOwnedObjects`.
    pub page_size: usize,
    /// Stop listing after this many pages.
    pub max_pages: usize,
}

impl Default for RpcSettings {
    fn default() -> Self {
        Self {
            gas_budget: 10_000_000,
            page_size: 50,
            max_pages: 20,
        }
    }
}

/// Fullnode client plus an optional signer.
pub struct SuiRpcTransport {
    client: SuiClient,
    signer: Option<Box<dyn TransactionSigner>>,
    settings: RpcSettings,
}

impl SuiRpcTransport {
    pub async fn connect(rpc_url: &str, settings: RpcSettings) -> Result<Self> {
        let client = SuiClientBuilder::default()
            .build(rpc_url)
            .await
            .with_context(|| format!("connect rpc: {rpc_url}"))?;
        info!(rpc_url, "connected to fullnode");
        Ok(Self {
            client,
            signer: None,
            settings,
        })
    }

    pub fn with_signer(mut self, signer: Box<dyn TransactionSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn signer_address(&self) -> Option<SuiAddress> {
        self.signer.as_ref().map(|s| s.address())
    }

    pub fn client(&self) -> &SuiClient {
        &self.client
    }

    async fn list_owned_pages(&self, owner: SuiAddress) -> Result<Vec<Value>> {
        let query =
            SuiObjectResponseQuery::new_with_options(SuiObjectDataOptions::new().with_type());
        let mut items = Vec::new();
        let mut cursor: Option<ObjectID> = None;

        for page_no in 0..self.settings.max_pages {
            let page = self
                .client
                .read_api()
                .get_owned_objects(owner, Some(query.clone()), cursor, Some(self.settings.page_size))
                .await
                .with_context(|| format!("get_owned_objects {owner}"))?;
            debug!(page_no, count = page.data.len(), "owned objects page");
            for response in &page.data {
                items.push(serde_json::to_value(response).context("serialize object response")?);
            }
            if !page.has_next_page || page.next_cursor.is_none() {
                return Ok(items);
            }
            cursor = page.next_cursor;
        }
        debug!(max_pages = self.settings.max_pages, "owned object listing truncated");
        Ok(items)
    }

    async fn execute(&self, call: CallDescription) -> Result<Value> {
        let signer = self
            .signer
            .as_ref()
            .ok_or_else(|| anyhow!("no signer configured"))?;
        let sender = signer.address();
        let target = call.target().to_string();
        let pt = build_programmable(call, self).await?;

        let coins = self
            .client
            .coin_read_api()
            .get_coins(sender, None, None, Some(1))
            .await
            .context("get_coins")?;
        let Some(gas) = coins.data.into_iter().next() else {
            bail!("no Coin<SUI> gas coins found for sender: {sender}");
        };
        let gas_price = self
            .client
            .read_api()
            .get_reference_gas_price()
            .await
            .context("get_reference_gas_price")?;

        let tx_data = TransactionData::new_programmable(
            sender,
            vec![gas.object_ref()],
            pt,
            self.settings.gas_budget,
            gas_price,
        );
        let tx = signer.sign(tx_data)?;
        info!(%sender, call_target = %target, "executing transaction");
        let response = self
            .client
            .quorum_driver_api()
            .execute_transaction_block(
                tx,
                SuiTransactionBlockResponseOptions::full_content(),
                Some(ExecuteTransactionRequestType::WaitForLocalExecution),
            )
            .await
            .context("execute_transaction_block")?;
        serde_json::to_value(&response).context("serialize execution response")
    }

    async fn dev_inspect(&self, call: CallDescription, sender: &str) -> Result<Value> {
        let sender =
            SuiAddress::from_str(sender).with_context(|| format!("parse sender address: {sender}"))?;
        let target = call.target().to_string();
        let pt = build_programmable(call, self).await?;
        info!(%sender, call_target = %target, "dev-inspecting transaction");
        let res = self
            .client
            .read_api()
            .dev_inspect_transaction_block(
                sender,
                TransactionKind::ProgrammableTransaction(pt),
                None,
                None,
                None,
            )
            .await
            .context("dev_inspect_transaction_block")?;
        serde_json::to_value(&res).context("serialize devInspect JSON")
    }
}

#[async_trait::async_trait]
impl ObjectArgResolver for SuiRpcTransport {
    async fn object_arg(&self, id: ObjectID) -> Result<ObjectArg> {
        let resp = self
            .client
            .read_api()
            .get_object_with_options(id, SuiObjectDataOptions::new().with_owner())
            .await
            .with_context(|| format!("get_object {id}"))?;
        let Some(data) = resp.data else {
            bail!("object not found: {id}");
        };
        let owner = data
            .owner
            .clone()
            .ok_or_else(|| anyhow!("object missing owner: {id}"))?;
        match owner {
            Owner::Shared {
                initial_shared_version,
            } => Ok(ObjectArg::SharedObject {
                id,
                initial_shared_version,
                mutability: SharedObjectMutability::Mutable,
            }),
            _ => Ok(ObjectArg::ImmOrOwnedObject(data.object_ref())),
        }
    }
}

#[async_trait::async_trait]
impl ObjectQueryService for SuiRpcTransport {
    async fn list_owned(&self, owner: &str) -> Result<Value, TransportError> {
        let owner = SuiAddress::from_str(owner)
            .with_context(|| format!("parse owner address: {owner}"))?;
        let items = self.list_owned_pages(owner).await?;
        Ok(Value::Array(items))
    }

    async fn object_detail(&self, id: &str) -> Result<Value, TransportError> {
        let object_id =
            ObjectID::from_str(id).with_context(|| format!("parse object id: {id}"))?;
        let options = SuiObjectDataOptions::new()
            .with_type()
            .with_owner()
            .with_content();
        let resp = self
            .client
            .read_api()
            .get_object_with_options(object_id, options)
            .await
            .with_context(|| format!("fetch object {object_id}"))?;
        Ok(serde_json::to_value(&resp).context("serialize object response")?)
    }
}

#[async_trait::async_trait]
impl TransactionTransport for SuiRpcTransport {
    fn can_submit(&self) -> bool {
        self.signer.is_some()
    }

    async fn submit(&self, call: CallDescription) -> Result<Value, TransportError> {
        if self.signer.is_none() {
            return Err(TransportError::NoSigner);
        }
        Ok(self.execute(call).await?)
    }

    async fn simulate(&self, call: CallDescription, sender: &str) -> Result<Value, TransportError> {
        Ok(self.dev_inspect(call, sender).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = RpcSettings::default();
        assert_eq!(settings.gas_budget, 10_000_000);
        assert!(settings.page_size > 0);
        assert!(settings.max_pages > 0);
    }

    #[tokio::test]
    #[ignore = "requires network access to Sui testnet"]
    async fn test_list_owned_zero_address() {
        let transport = SuiRpcTransport::connect(crate::network::TESTNET_RPC, RpcSettings::default())
            .await
            .expect("connect testnet");
        let listing = transport
            .list_owned(nft_social_types::address::ZERO_ADDRESS)
            .await
            .expect("list owned");
        assert!(listing.is_array());
        assert!(!transport.can_submit());
    }
}
