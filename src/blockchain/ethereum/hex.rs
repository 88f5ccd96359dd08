/*
Copyright 2022 EmeraldPay, Inc

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

pub struct EthereumHex {}

///
/// Common utilities to encode and decode bytes in Ethereum-kind hex format (i.e., with 0x prefix)
impl EthereumHex {

    /// Value without the `0x` prefix, if it's present
    pub fn strip_prefix(s: &str) -> &str {
        s.strip_prefix("0x").unwrap_or(s)
    }

    /// Decode hex with an optional `0x` prefix, any case
    pub fn decode(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
        hex::decode(EthereumHex::strip_prefix(s))
    }

    pub fn encode<T: AsRef<[u8]>>(n: T) -> String {
        format!("0x{}", hex::encode(n))
    }

    /// Encode a big-endian number as a quantity, i.e. without leading zeroes (`0x0` for zero)
    pub fn encode_quantity<T: AsRef<[u8]>>(n: T) -> String {
        let value = hex::encode(n);
        let value = value.trim_start_matches('0');
        if value.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{}", value)
        }
    }

    /// Decode a quantity into its minimal big-endian bytes
    pub fn decode_quantity(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
        let value = EthereumHex::strip_prefix(s).trim_start_matches('0');
        let bytes = if value.len() % 2 == 1 {
            hex::decode(format!("0{}", value))?
        } else {
            hex::decode(value)?
        };
        Ok(bytes)
    }
}
