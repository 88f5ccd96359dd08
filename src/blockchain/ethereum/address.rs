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
//! # Account address (20 bytes)

use super::hex::EthereumHex;
use crate::{error::SignerError, util::to_arr};
use regex::Regex;
use std::{convert::TryFrom, fmt, ops, str::FromStr};

/// Fixed bytes number to represent `Address`
pub const ETHEREUM_ADDRESS_BYTES: usize = 20;

lazy_static! {
    static ref ADDRESS_RE: Regex = Regex::new(r"^[0-9a-fA-F]{40}$").unwrap();
}

/// Check that the string is a 20 bytes hex address, with or without `0x` prefix
pub fn is_valid_address(s: &str) -> bool {
    ADDRESS_RE.is_match(EthereumHex::strip_prefix(s))
}

/// Account address (20 bytes)
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EthereumAddress(pub [u8; ETHEREUM_ADDRESS_BYTES]);

impl TryFrom<&[u8]> for EthereumAddress {
    type Error = SignerError;

    /// Try to convert a byte slice to `Address`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::convert::TryFrom;
    /// use emerald_signer::blockchain::{EthereumAddress, ETHEREUM_ADDRESS_BYTES};
    ///
    /// let addr = EthereumAddress::try_from(&[0u8; ETHEREUM_ADDRESS_BYTES][..]).unwrap();
    /// assert_eq!(addr.to_string(), "0x0000000000000000000000000000000000000000");
    /// ```
    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        if data.len() != ETHEREUM_ADDRESS_BYTES {
            return Err(SignerError::InvalidAddress);
        }

        Ok(EthereumAddress(to_arr(data)))
    }
}

impl ops::Deref for EthereumAddress {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[u8; ETHEREUM_ADDRESS_BYTES]> for EthereumAddress {
    fn from(bytes: [u8; ETHEREUM_ADDRESS_BYTES]) -> Self {
        EthereumAddress(bytes)
    }
}

impl AsRef<[u8]> for EthereumAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for EthereumAddress {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_address(s) {
            return Err(SignerError::InvalidAddress);
        }
        let bytes = EthereumHex::decode(s).map_err(|_| SignerError::InvalidAddress)?;
        EthereumAddress::try_from(bytes.as_slice())
    }
}

impl fmt::Display for EthereumAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for EthereumAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
