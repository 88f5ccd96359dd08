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
//! # Uncompressed secp256k1 public key of an account

use super::{hex::EthereumHex, EthereumAddress};
use crate::{
    error::SignerError,
    util::{keccak256, to_arr},
};
use secp256k1::PublicKey;
use std::{convert::TryFrom, fmt, str::FromStr};

/// Uncompressed public key length in bytes, `0x04` prefix followed by X and Y coordinates
pub const PUBLIC_KEY_BYTES: usize = 65;

const UNCOMPRESSED_PREFIX: u8 = 0x04;

/// Public key, always a valid point on the curve
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EthereumPublicKey(PublicKey);

impl EthereumPublicKey {
    /// Serialized as `04 || X || Y`
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_BYTES] {
        self.0.serialize_uncompressed()
    }

    /// Lowercase hex of the serialized key, without prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Address of the key, i.e. last 20 bytes of Keccak-256 of the coordinates
    pub fn to_address(&self) -> EthereumAddress {
        let hash = keccak256(&self.to_bytes()[1..] /* cut '04' */);
        EthereumAddress(to_arr(&hash[12..]))
    }
}

impl From<PublicKey> for EthereumPublicKey {
    fn from(key: PublicKey) -> Self {
        EthereumPublicKey(key)
    }
}

impl From<EthereumPublicKey> for PublicKey {
    fn from(key: EthereumPublicKey) -> Self {
        key.0
    }
}

impl TryFrom<&[u8]> for EthereumPublicKey {
    type Error = SignerError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        if data.len() != PUBLIC_KEY_BYTES || data[0] != UNCOMPRESSED_PREFIX {
            return Err(SignerError::InvalidKeyFormat);
        }
        PublicKey::from_slice(data)
            .map(EthereumPublicKey)
            .map_err(|_| SignerError::InvalidKeyFormat)
    }
}

impl FromStr for EthereumPublicKey {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = EthereumHex::decode(s).map_err(|_| SignerError::InvalidKeyFormat)?;
        EthereumPublicKey::try_from(bytes.as_slice())
    }
}

impl From<&EthereumPublicKey> for EthereumAddress {
    fn from(key: &EthereumPublicKey) -> Self {
        key.to_address()
    }
}

impl fmt::Display for EthereumPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Debug for EthereumPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}
