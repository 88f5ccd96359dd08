/*
Copyright 2023 EmeraldPay, Inc

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
//! # JSON representation of a transaction, same as returned by a node RPC

use super::{hex::EthereumHex, EthereumAddress, EthereumSignature, EthereumTransaction};
use crate::{
    error::SignerError,
    util::{to_u64, to_word},
};
use num_bigint::BigUint;
use std::{convert::TryFrom, str::FromStr};

/// Transaction JSON, all numbers are hex quantities (`0x0`, `0x5208`, etc)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EthereumTransactionJson {
    pub nonce: String,
    pub gas_price: String,
    pub gas: String,
    pub to: Option<String>,
    pub value: String,
    pub input: String,
    pub v: String,
    pub r: String,
    pub s: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl From<EthereumTransaction> for EthereumTransactionJson {
    fn from(tx: EthereumTransaction) -> Self {
        let sig = tx.signature.unwrap_or_default();
        EthereumTransactionJson {
            nonce: format!("{:#x}", tx.nonce),
            gas_price: EthereumHex::encode_quantity(tx.gas_price.to_bytes_be()),
            gas: format!("{:#x}", tx.gas_limit),
            to: tx.to.map(|a| a.to_string()),
            value: EthereumHex::encode_quantity(tx.value.to_bytes_be()),
            input: EthereumHex::encode(&tx.data),
            v: format!("{:#x}", sig.v),
            r: EthereumHex::encode_quantity(sig.r),
            s: EthereumHex::encode_quantity(sig.s),
            hash: Some(EthereumHex::encode(tx.hash())),
        }
    }
}

fn parse_u64(s: &str) -> Result<u64, SignerError> {
    to_u64(&EthereumHex::decode_quantity(s)?).ok_or(SignerError::MalformedEncoding)
}

fn parse_big(s: &str) -> Result<BigUint, SignerError> {
    Ok(BigUint::from_bytes_be(&EthereumHex::decode_quantity(s)?))
}

fn parse_word(s: &str) -> Result<[u8; 32], SignerError> {
    to_word(&EthereumHex::decode_quantity(s)?).ok_or(SignerError::MalformedEncoding)
}

impl TryFrom<EthereumTransactionJson> for EthereumTransaction {
    type Error = SignerError;

    /// Parse the JSON, `hash` is ignored
    fn try_from(json: EthereumTransactionJson) -> Result<Self, Self::Error> {
        let to = match json.to {
            Some(to) => Some(EthereumAddress::from_str(&to)?),
            None => None,
        };
        let v = parse_u64(&json.v)?;
        let r = parse_word(&json.r)?;
        let s = parse_word(&json.s)?;
        let signature = if v == 0 && r == [0u8; 32] && s == [0u8; 32] {
            None
        } else {
            Some(EthereumSignature { v, r, s })
        };

        Ok(EthereumTransaction {
            nonce: parse_u64(&json.nonce)?,
            gas_price: parse_big(&json.gas_price)?,
            gas_limit: parse_u64(&json.gas)?,
            to,
            value: parse_big(&json.value)?,
            data: EthereumHex::decode(&json.input)?,
            signature,
        })
    }
}

impl EthereumTransaction {
    /// Transaction as JSON
    pub fn to_json(&self) -> Result<String, SignerError> {
        serde_json::to_string(self).map_err(|e| {
            debug!("Failed to write JSON: {}", e);
            SignerError::MalformedEncoding
        })
    }

    /// Transaction from JSON
    pub fn from_json(json: &str) -> Result<Self, SignerError> {
        serde_json::from_str(json).map_err(|e| {
            debug!("Invalid transaction JSON: {}", e);
            SignerError::MalformedEncoding
        })
    }
}
