//! Transaction signing capability.
//!
//! Submission needs something that owns a key. No wallet protocol is spoken
//! here: a signer either holds a key in memory or is supplied by the caller.

use anyhow::{anyhow, Result};
use shared_crypto::intent::{Intent, IntentMessage};
use sui_types::base_types::SuiAddress;
use sui_types::crypto::{Signature, SuiKeyPair};
use sui_types::transaction::{Transaction, TransactionData};

/// Signs transaction data on behalf of one address.
pub trait TransactionSigner: Send + Sync {
    fn address(&self) -> SuiAddress;

    fn sign(&self, data: TransactionData) -> Result<Transaction>;
}

/// Signs with a private key held in memory.
pub struct KeypairSigner {
    keypair: SuiKeyPair,
    address: SuiAddress,
}

impl KeypairSigner {
    pub fn new(keypair: SuiKeyPair) -> Self {
        let address = SuiAddress::from(&keypair.public());
        Self { keypair, address }
    }

    /// Load a `suiprivkey1…` key, as printed by `sui keytool export`.
    pub fn from_encoded(encoded: &str) -> Result<Self> {
        let keypair = SuiKeyPair::decode(encoded.trim())
            .map_err(|e| anyhow!("decode private key: {e}"))?;
        Ok(Self::new(keypair))
    }
}

impl TransactionSigner for KeypairSigner {
    fn address(&self) -> SuiAddress {
        self.address
    }

    fn sign(&self, data: TransactionData) -> Result<Transaction> {
        let message = IntentMessage::new(Intent::sui_transaction(), data.clone());
        let signature = Signature::new_secure(&message, &self.keypair);
        Ok(Transaction::from_data(data, vec![signature]))
    }
}

impl std::fmt::Debug for KeypairSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeypairSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
