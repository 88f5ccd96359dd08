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
//! # Chain presets used for replay protected signatures

use std::{fmt, str::FromStr};

/// Ethereum Chain Id Reference
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EthereumChainId {
    /// Ethereum
    Ethereum,
    /// Ethereum Classic
    EthereumClassic,
    /// Kovan Testnet
    Kovan,
    /// Goerli Testnet
    Goerli,
    /// Polygon PoS
    Polygon,
    /// Any other chain, by its numeric id
    Custom(u64),
}

impl EthereumChainId {
    /// chain_id for current Chain
    pub fn as_chainid(&self) -> u64 {
        match self {
            EthereumChainId::Ethereum => 1,
            EthereumChainId::Goerli => 5,
            EthereumChainId::Kovan => 42,
            EthereumChainId::EthereumClassic => 61,
            EthereumChainId::Polygon => 137,
            EthereumChainId::Custom(v) => *v,
        }
    }
}

impl From<u64> for EthereumChainId {
    fn from(id: u64) -> Self {
        match id {
            1 => EthereumChainId::Ethereum,
            5 => EthereumChainId::Goerli,
            42 => EthereumChainId::Kovan,
            61 => EthereumChainId::EthereumClassic,
            137 => EthereumChainId::Polygon,
            v => EthereumChainId::Custom(v),
        }
    }
}

impl FromStr for EthereumChainId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean = s.trim().to_lowercase();
        match clean.as_str() {
            "eth" | "ethereum" | "eth-mainnet" => Ok(EthereumChainId::Ethereum),
            "kovan" => Ok(EthereumChainId::Kovan),
            "etc-mainnet" | "etc" | "ethereum-classic" | "ethereum classic" => {
                Ok(EthereumChainId::EthereumClassic)
            }
            "goerli" => Ok(EthereumChainId::Goerli),
            "polygon" | "matic" => Ok(EthereumChainId::Polygon),
            other => other
                .parse::<u64>()
                .map(EthereumChainId::from)
                .map_err(|_| ()),
        }
    }
}

impl fmt::Display for EthereumChainId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_chainid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!(EthereumChainId::from_str("eth"), Ok(EthereumChainId::Ethereum));
        assert_eq!(EthereumChainId::from_str("ETC"), Ok(EthereumChainId::EthereumClassic));
        assert_eq!(EthereumChainId::from_str("goerli"), Ok(EthereumChainId::Goerli));
        assert_eq!(EthereumChainId::from_str("Kovan"), Ok(EthereumChainId::Kovan));
        assert_eq!(EthereumChainId::from_str("polygon"), Ok(EthereumChainId::Polygon));
    }

    #[test]
    fn parse_numeric() {
        assert_eq!(EthereumChainId::from_str("1"), Ok(EthereumChainId::Ethereum));
        assert_eq!(EthereumChainId::from_str("137"), Ok(EthereumChainId::Polygon));
        assert_eq!(EthereumChainId::from_str("1337"), Ok(EthereumChainId::Custom(1337)));
    }

    #[test]
    fn fail_on_unknown() {
        assert!(EthereumChainId::from_str("moon").is_err());
        assert!(EthereumChainId::from_str("").is_err());
        assert!(EthereumChainId::from_str("-1").is_err());
    }

    #[test]
    fn numeric_ids() {
        assert_eq!(EthereumChainId::Ethereum.as_chainid(), 1);
        assert_eq!(EthereumChainId::EthereumClassic.as_chainid(), 61);
        assert_eq!(EthereumChainId::Custom(100).as_chainid(), 100);
        assert_eq!(EthereumChainId::Goerli.to_string(), "5");
    }
}
