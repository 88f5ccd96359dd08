/*
Copyright 2019 ETCDEV GmbH
Copyright 2020 EmeraldPay, Inc

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/
//! # Account transaction

use super::{
    json::EthereumTransactionJson,
    EthereumAddress,
    EthereumPrivateKey,
    EthereumPublicKey,
    EthereumSignature,
    Signer,
    hex::EthereumHex,
};
use crate::error::SignerError;
use num_bigint::BigUint;
use std::str::FromStr;

/// Transaction data
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "EthereumTransactionJson", try_from = "EthereumTransactionJson")]
pub struct EthereumTransaction {
    /// Nonce
    pub nonce: u64,

    /// Gas Price
    pub gas_price: BigUint,

    /// Gas Limit
    pub gas_limit: u64,

    /// Target address, or None to create contract
    pub to: Option<EthereumAddress>,

    /// Value transferred with transaction
    pub value: BigUint,

    /// Data transferred with transaction
    pub data: Vec<u8>,

    /// Signature, or None for an unsigned transaction.
    /// An all-zero `v`, `r` and `s` is encoded exactly as an unsigned transaction, so it
    /// decodes back as None.
    pub signature: Option<EthereumSignature>,
}

impl EthereumTransaction {
    /// New unsigned transaction to the address
    pub fn new(
        nonce: u64,
        gas_price: BigUint,
        gas_limit: u64,
        to: &str,
        value: BigUint,
        data: Vec<u8>,
    ) -> Result<Self, SignerError> {
        let to = EthereumAddress::from_str(to).map_err(|e| {
            debug!("Invalid recipient: {}", to);
            e
        })?;
        Ok(EthereumTransaction {
            nonce,
            gas_price,
            gas_limit,
            to: Some(to),
            value,
            data,
            signature: None,
        })
    }

    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// Same transaction without signature
    pub fn unsigned(&self) -> Self {
        EthereumTransaction {
            signature: None,
            ..self.clone()
        }
    }

    /// Signer inferred from `V` of the signature
    pub fn signer(&self) -> Result<Signer, SignerError> {
        let sig = self.signature.ok_or(SignerError::MalformedSignature)?;
        Signer::decode_v(sig.v).map(|(_, signer)| signer)
    }

    /// Sign transaction data with provided private key. An existing signature is replaced.
    pub fn sign(&self, signer: Signer, pk: &EthereumPrivateKey) -> Result<Self, SignerError> {
        let hash = signer.signing_digest(self);
        let (recovery_id, r, s) = pk.sign_hash(hash)?;
        let v = signer.encode_v(recovery_id)?;
        trace!("Signed transaction {} with {:?}, v={}", EthereumHex::encode(hash), signer, v);

        Ok(EthereumTransaction {
            signature: Some(EthereumSignature { v, r, s }),
            ..self.clone()
        })
    }

    /// Recover public key of the signer. The hash is calculated from the fields of the
    /// transaction with the signer inferred from `V`.
    pub fn recover_public_key(&self) -> Result<EthereumPublicKey, SignerError> {
        let sig = self.signature.ok_or(SignerError::MalformedSignature)?;
        let (recovery_id, signer) = Signer::decode_v(sig.v)?;
        let hash = signer.signing_digest(self);
        sig.recover_hash(hash, recovery_id)
    }

    /// Recover address of the signer
    pub fn recover_address(&self) -> Result<EthereumAddress, SignerError> {
        Ok(self.recover_public_key()?.to_address())
    }

    /// Check that the transaction is signed by the public key (hex of the uncompressed key,
    /// `0x` prefix is optional). Recovered key must match exactly, in lowercase hex.
    pub fn verify(&self, expected_public_key: &str) -> bool {
        match self.recover_public_key() {
            Ok(key) => {
                let verified = key.to_hex() == EthereumHex::strip_prefix(expected_public_key);
                if !verified {
                    debug!("Transaction signed by {}, expected {}", key, expected_public_key);
                }
                verified
            }
            Err(e) => {
                debug!("Failed to recover signer: {}", e);
                false
            }
        }
    }
}
