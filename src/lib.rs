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
//! # Signing and verification of legacy Ethereum transactions
//!
//! Builds unsigned transactions, signs them with a secp256k1 private key either without replay
//! protection (`Signer::Legacy`) or bound to a chain (`Signer::ChainProtected`, EIP-155),
//! encodes them into the canonical RLP form, decodes them back and recovers the signer.
//!
//! ```
//! use emerald_signer::{build_transaction, derive_public_key, sign, encode, decode, verify, Signer};
//!
//! let pk = "0xfad9c8855b740a0b7ed4c221dbad0f33a83a49cad6b3fe8d5817ac83d38b6a19";
//! let tx = build_transaction(
//!     0,
//!     1_000_000_000u64.into(),
//!     21000,
//!     "0x96216849c49358B10257cb55b28eA603c874b05E",
//!     1_000_000_000_000_000_000u64.into(),
//!     vec![],
//! ).unwrap();
//!
//! let signed = sign(&tx, Signer::ChainProtected(1), pk).unwrap();
//! let decoded = decode(&encode(&signed)).unwrap();
//! let pubkey = derive_public_key(pk).unwrap();
//! assert!(verify(&decoded, &pubkey.to_string()));
//! ```

#[macro_use]
extern crate log;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate enum_display_derive;

pub mod blockchain;
pub mod error;
mod util;

pub use self::{
    blockchain::{
        chains::EthereumChainId,
        ethereum::{
            build_transaction,
            decode,
            derive_address,
            derive_public_key,
            encode,
            is_valid_address,
            recover_public_key,
            sign,
            verify,
            EthereumAddress,
            EthereumPrivateKey,
            EthereumPublicKey,
            EthereumSignature,
            EthereumTransaction,
            Signer,
        },
    },
    error::SignerError,
    util::{keccak256, KECCAK256_BYTES},
};
