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
//! # Errors of key parsing, transaction encoding and signature recovery

use std::fmt::Display;

/// Signer errors
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SignerError {
    /// Private or public key has a wrong length, is not a hex, or is not a valid secp256k1 value
    InvalidKeyFormat,
    /// Recipient is not a 20 bytes hex address
    InvalidAddress,
    /// Input is not a canonical RLP encoded transaction
    MalformedEncoding,
    /// V/R/S can't be mapped to a signer, or the transaction is not signed
    MalformedSignature,
    /// Signature doesn't correspond to a curve point for the transaction hash
    RecoveryFailed,
}

impl std::error::Error for SignerError {}

impl From<rlp::DecoderError> for SignerError {
    fn from(err: rlp::DecoderError) -> Self {
        debug!("Invalid RLP: {:?}", err);
        SignerError::MalformedEncoding
    }
}

impl From<hex::FromHexError> for SignerError {
    fn from(err: hex::FromHexError) -> Self {
        debug!("Invalid hex: {:?}", err);
        SignerError::MalformedEncoding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_variant_name() {
        assert_eq!(SignerError::InvalidKeyFormat.to_string(), "InvalidKeyFormat");
        assert_eq!(SignerError::RecoveryFailed.to_string(), "RecoveryFailed");
    }

    #[test]
    fn decoder_error_is_malformed_encoding() {
        assert_eq!(
            SignerError::from(rlp::DecoderError::RlpIsTooShort),
            SignerError::MalformedEncoding
        );
    }

    #[test]
    fn hex_error_is_malformed_encoding() {
        assert_eq!(
            SignerError::from(hex::FromHexError::OddLength),
            SignerError::MalformedEncoding
        );
    }
}
