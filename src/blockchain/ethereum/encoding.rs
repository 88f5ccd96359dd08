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
//! # RLP encoding of a transaction
//!
//! A transaction is a list of 9 items `[nonce, gasPrice, gasLimit, to, value, data, v, r, s]`.
//! Integers are big-endian without leading zeros, so zero is an empty string. An unsigned
//! transaction has empty `v`, `r` and `s`.

use super::{hex::EthereumHex, EthereumAddress, EthereumSignature, EthereumTransaction};
use crate::{
    error::SignerError,
    util::{keccak256, to_u64, to_word, trim_bytes, KECCAK256_BYTES},
};
use num_bigint::BigUint;
use rlp::{Rlp, RlpStream};
use std::convert::TryFrom;

const TX_FIELDS: usize = 9;

impl EthereumTransaction {
    /// RLP packed transaction, including signature (or empty signature if not signed)
    pub fn to_rlp(&self) -> Vec<u8> {
        let mut rlp = self.to_rlp_raw();
        match &self.signature {
            Some(sig) => {
                rlp.append(&sig.v);
                rlp.append(&trim_bytes(&sig.r));
                rlp.append(&trim_bytes(&sig.s));
            }
            None => {
                rlp.append_empty_data();
                rlp.append_empty_data();
                rlp.append_empty_data();
            }
        }
        rlp.finalize_unbounded_list();
        rlp.out().to_vec()
    }

    /// RLP packed payload for signing, `[chainId, 0, 0]` is appended if `chain_id` is specified
    pub fn to_unsigned_rlp(&self, chain_id: Option<u64>) -> Vec<u8> {
        let mut rlp = self.to_rlp_raw();
        if let Some(id) = chain_id {
            rlp.append(&id);
            rlp.append_empty_data();
            rlp.append_empty_data();
        }
        rlp.finalize_unbounded_list();
        rlp.out().to_vec()
    }

    fn to_rlp_raw(&self) -> RlpStream {
        let mut data = RlpStream::new();
        data.begin_unbounded_list();

        data.append(&self.nonce);
        data.append(&trim_bytes(&self.gas_price.to_bytes_be()));
        data.append(&self.gas_limit);

        match self.to {
            Some(addr) => data.append(&addr.0.as_ref()),
            _ => data.append_empty_data(),
        };

        data.append(&trim_bytes(&self.value.to_bytes_be()));
        if self.data.is_empty() {
            data.append_empty_data();
        } else {
            data.append(&self.data);
        }

        data
    }

    /// RLP encoded transaction as `0x` prefixed lowercase hex
    pub fn encode(&self) -> String {
        EthereumHex::encode(self.to_rlp())
    }

    /// Transaction hash, i.e. Keccak-256 of the RLP encoded transaction
    pub fn hash(&self) -> [u8; KECCAK256_BYTES] {
        keccak256(&self.to_rlp())
    }

    /// Decode hex of the RLP encoded transaction, `0x` prefix is optional
    pub fn decode(raw: &str) -> Result<Self, SignerError> {
        let bytes = EthereumHex::decode(raw)?;
        EthereumTransaction::decode_rlp(&bytes)
    }

    /// Decode RLP encoded transaction. The input must be exactly one canonical list of 9 items.
    pub fn decode_rlp(raw: &[u8]) -> Result<Self, SignerError> {
        let rlp = Rlp::new(raw);
        if !rlp.is_list() {
            debug!("Transaction is not a list");
            return Err(SignerError::MalformedEncoding);
        }
        let info = rlp.payload_info()?;
        if info.header_len + info.value_len != raw.len() {
            debug!(
                "Transaction size {} doesn't match actual {}",
                info.header_len + info.value_len,
                raw.len()
            );
            return Err(SignerError::MalformedEncoding);
        }
        if info.header_len > 1 && info.value_len <= 55 {
            debug!("Long header for a short list");
            return Err(SignerError::MalformedEncoding);
        }
        let count = rlp.item_count()?;
        if count != TX_FIELDS {
            debug!("Transaction has {} fields", count);
            return Err(SignerError::MalformedEncoding);
        }
        let mut consumed = 0;
        for i in 0..TX_FIELDS {
            consumed += rlp.at(i)?.as_raw().len();
        }
        if consumed != info.value_len {
            debug!(
                "Transaction fields take {} bytes of {} in the list",
                consumed, info.value_len
            );
            return Err(SignerError::MalformedEncoding);
        }

        let nonce = read_u64(&rlp, 0)?;
        let gas_price = read_quantity(&rlp, 1)?;
        let gas_limit = read_u64(&rlp, 2)?;
        let to = read_address(&rlp, 3)?;
        let value = read_quantity(&rlp, 4)?;
        let data = read_bytes(&rlp, 5)?;
        let v = read_u64(&rlp, 6)?;
        let r = read_word(&rlp, 7)?;
        let s = read_word(&rlp, 8)?;

        let signature = if v == 0 && r == [0u8; 32] && s == [0u8; 32] {
            None
        } else {
            Some(EthereumSignature { v, r, s })
        };

        Ok(EthereumTransaction {
            nonce,
            gas_price,
            gas_limit,
            to,
            value,
            data,
            signature,
        })
    }
}

fn read_bytes(rlp: &Rlp, index: usize) -> Result<Vec<u8>, SignerError> {
    let item = rlp.at(index)?;
    if !item.is_data() {
        debug!("Field {} is not a string", index);
        return Err(SignerError::MalformedEncoding);
    }
    Ok(item.as_val::<Vec<u8>>()?)
}

// big-endian integer, leading zeros are not allowed
fn read_number(rlp: &Rlp, index: usize) -> Result<Vec<u8>, SignerError> {
    let bytes = read_bytes(rlp, index)?;
    if bytes.first() == Some(&0) {
        debug!("Field {} has leading zeros", index);
        return Err(SignerError::MalformedEncoding);
    }
    Ok(bytes)
}

fn read_u64(rlp: &Rlp, index: usize) -> Result<u64, SignerError> {
    let bytes = read_number(rlp, index)?;
    to_u64(&bytes).ok_or_else(|| {
        debug!("Field {} doesn't fit u64", index);
        SignerError::MalformedEncoding
    })
}

fn read_quantity(rlp: &Rlp, index: usize) -> Result<BigUint, SignerError> {
    Ok(BigUint::from_bytes_be(&read_number(rlp, index)?))
}

fn read_word(rlp: &Rlp, index: usize) -> Result<[u8; 32], SignerError> {
    let bytes = read_number(rlp, index)?;
    to_word(&bytes).ok_or_else(|| {
        debug!("Field {} is longer than 32 bytes", index);
        SignerError::MalformedEncoding
    })
}

fn read_address(rlp: &Rlp, index: usize) -> Result<Option<EthereumAddress>, SignerError> {
    let bytes = read_bytes(rlp, index)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    EthereumAddress::try_from(bytes.as_slice())
        .map(Some)
        .map_err(|_| SignerError::MalformedEncoding)
}
