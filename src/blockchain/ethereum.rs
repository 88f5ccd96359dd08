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
//! # Ethereum legacy transactions: keys, signers, RLP encoding and signature recovery
//!
//! The functions of this module are the public entry points working with hex strings, the
//! same operations are available as methods of the underlying types.

pub mod address;
pub mod encoding;
pub mod hex;
pub mod json;
pub mod public_key;
pub mod signature;
pub mod signer;
pub mod transaction;

pub use self::address::{is_valid_address, EthereumAddress, ETHEREUM_ADDRESS_BYTES};
pub use self::public_key::{EthereumPublicKey, PUBLIC_KEY_BYTES};
pub use self::signature::{EthereumPrivateKey, EthereumSignature, PRIVATE_KEY_BYTES};
pub use self::signer::Signer;
pub use self::transaction::EthereumTransaction;

use crate::error::SignerError;
use num_bigint::BigUint;
use std::str::FromStr;

/// Public key (uncompressed, `0x04` prefixed point) of a hex encoded private key
pub fn derive_public_key(private_key: &str) -> Result<EthereumPublicKey, SignerError> {
    EthereumPrivateKey::from_str(private_key)?.to_public_key()
}

/// Address of a hex encoded uncompressed public key
pub fn derive_address(public_key: &str) -> Result<EthereumAddress, SignerError> {
    Ok(EthereumPublicKey::from_str(public_key)?.to_address())
}

/// Create a new unsigned transaction, fails with `InvalidAddress` if the recipient is not a valid address
pub fn build_transaction(
    nonce: u64,
    gas_price: BigUint,
    gas_limit: u64,
    to: &str,
    value: BigUint,
    data: Vec<u8>,
) -> Result<EthereumTransaction, SignerError> {
    EthereumTransaction::new(nonce, gas_price, gas_limit, to, value, data)
}

/// Sign a transaction with a hex encoded private key, returns the signed copy
pub fn sign(
    tx: &EthereumTransaction,
    signer: Signer,
    private_key: &str,
) -> Result<EthereumTransaction, SignerError> {
    let key = EthereumPrivateKey::from_str(private_key)?;
    tx.sign(signer, &key)
}

/// RLP encoded transaction as a `0x` prefixed hex
pub fn encode(tx: &EthereumTransaction) -> String {
    tx.encode()
}

/// Decode a hex RLP encoded transaction, the `0x` prefix is optional
pub fn decode(raw: &str) -> Result<EthereumTransaction, SignerError> {
    EthereumTransaction::decode(raw)
}

/// Public key of the transaction signer
pub fn recover_public_key(tx: &EthereumTransaction) -> Result<EthereumPublicKey, SignerError> {
    tx.recover_public_key()
}

/// Check that the transaction is signed by the expected public key. Never fails, any error
/// during recovery means the transaction is not verified.
pub fn verify(tx: &EthereumTransaction, expected_public_key: &str) -> bool {
    tx.verify(expected_public_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PK: &str = "0x4646464646464646464646464646464646464646464646464646464646464646";

    fn eip155_tx() -> EthereumTransaction {
        build_transaction(
            9,
            BigUint::from(20_000_000_000u64),
            21000,
            "0x3535353535353535353535353535353535353535",
            BigUint::from(1_000_000_000_000_000_000u64),
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn derive_address_of_private_key() {
        let pubkey = derive_public_key(PK).unwrap();
        let address = derive_address(&pubkey.to_string()).unwrap();
        assert_eq!(
            address.to_string(),
            "0x9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f"
        );
    }

    #[test]
    fn fail_to_derive_from_invalid_key() {
        assert_eq!(derive_public_key("0x1234"), Err(SignerError::InvalidKeyFormat));
        assert_eq!(derive_address("0x1234"), Err(SignerError::InvalidKeyFormat));
    }

    #[test]
    fn fail_to_build_with_invalid_address() {
        let tx = build_transaction(
            0,
            BigUint::from(1u8),
            21000,
            "0x35353535353535353535353535353535353535",
            BigUint::from(1u8),
            vec![],
        );
        assert_eq!(tx, Err(SignerError::InvalidAddress));
    }

    #[test]
    fn sign_encode_decode_verify() {
        let signed = sign(&eip155_tx(), Signer::ChainProtected(1), PK).unwrap();
        let raw = encode(&signed);
        assert_eq!(
            raw,
            "0xf86c\
             098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a7640000\
             80\
             25\
             a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276\
             a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83"
        );
        let decoded = decode(&raw).unwrap();
        assert_eq!(decoded, signed);

        let pubkey = derive_public_key(PK).unwrap();
        assert_eq!(recover_public_key(&decoded).unwrap(), pubkey);
        assert!(verify(&decoded, &pubkey.to_string()));
    }

    #[test]
    fn sign_fails_with_invalid_key() {
        assert_eq!(
            sign(&eip155_tx(), Signer::Legacy, "0xzz46464646464646464646464646464646464646464646464646464646464646"),
            Err(SignerError::InvalidKeyFormat)
        );
    }
}
