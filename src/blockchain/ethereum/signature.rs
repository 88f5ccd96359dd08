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
//! # Account ECDSA signatures using the SECG curve secp256k1

use super::{hex::EthereumHex, EthereumAddress, EthereumPublicKey};
use crate::{
    error::SignerError,
    util::{to_arr, KECCAK256_BYTES},
};
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    All,
    Message,
    PublicKey,
    Secp256k1,
    SecretKey,
};
use std::{convert::TryFrom, fmt, str};

/// Private key length in bytes
pub const PRIVATE_KEY_BYTES: usize = 32;

lazy_static! {
    static ref ECDSA: Secp256k1<All> = Secp256k1::new();
}

/// Transaction sign data (see Appendix F. "Signing Transactions" from Yellow Paper)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EthereumSignature {
    /// Recovery id with the signer specific offset, i.e. `27`/`28` or `35 + 2 * chain_id` and up
    pub v: u64,

    /// ECDSA signature first point (0 < r < secp256k1n)
    pub r: [u8; 32],

    /// ECDSA signature second point (0 < s < secp256k1n ÷ 2 + 1)
    pub s: [u8; 32],
}

impl EthereumSignature {
    /// Recover the public key that produced the signature for the hash.
    /// `recovery_id` is the raw value (`0` or `1`), i.e. `v` without the signer offset.
    pub fn recover_hash(
        &self,
        hash: [u8; KECCAK256_BYTES],
        recovery_id: u8,
    ) -> Result<EthereumPublicKey, SignerError> {
        let msg = Message::from_slice(&hash).map_err(|_| SignerError::RecoveryFailed)?;
        let rid = RecoveryId::from_i32(i32::from(recovery_id))
            .map_err(|_| SignerError::MalformedSignature)?;

        let mut compact = [0u8; 64];
        compact[0..32].copy_from_slice(&self.r);
        compact[32..64].copy_from_slice(&self.s);
        let sig = RecoverableSignature::from_compact(&compact, rid)
            .map_err(|_| SignerError::RecoveryFailed)?;

        ECDSA
            .recover_ecdsa(&msg, &sig)
            .map(EthereumPublicKey::from)
            .map_err(|_| SignerError::RecoveryFailed)
    }
}

/// Private key used as x in an ECDSA signature
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EthereumPrivateKey([u8; PRIVATE_KEY_BYTES]);

impl EthereumPrivateKey {
    fn to_secret(self) -> Result<SecretKey, SignerError> {
        SecretKey::from_slice(&self.0).map_err(|_| SignerError::InvalidKeyFormat)
    }

    /// Public key of the private key
    pub fn to_public_key(&self) -> Result<EthereumPublicKey, SignerError> {
        let key = PublicKey::from_secret_key(&ECDSA, &self.to_secret()?);
        Ok(EthereumPublicKey::from(key))
    }

    /// Extract `Address` from current private key.
    pub fn to_address(&self) -> Result<EthereumAddress, SignerError> {
        Ok(self.to_public_key()?.to_address())
    }

    /// Sign hash from message (Keccak-256), with a deterministic RFC6979 nonce.
    /// Returns raw recovery id (`0` or `1`), R and S
    pub fn sign_hash(
        &self,
        hash: [u8; KECCAK256_BYTES],
    ) -> Result<(u8, [u8; 32], [u8; 32]), SignerError> {
        let msg = Message::from_slice(&hash).map_err(|_| SignerError::MalformedSignature)?;
        let key = self.to_secret()?;

        let s = ECDSA.sign_ecdsa_recoverable(&msg, &key);
        let (rid, sig) = s.serialize_compact();

        Ok((rid.to_i32() as u8, to_arr(&sig[0..32]), to_arr(&sig[32..64])))
    }
}

impl TryFrom<&[u8]> for EthereumPrivateKey {
    type Error = SignerError;

    /// Try to convert a byte slice into `PrivateKey`, which must be a valid secp256k1 scalar
    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        if data.len() != PRIVATE_KEY_BYTES {
            return Err(SignerError::InvalidKeyFormat);
        }

        let key = EthereumPrivateKey(to_arr(data));
        key.to_secret()?;
        Ok(key)
    }
}

impl From<SecretKey> for EthereumPrivateKey {
    fn from(key: SecretKey) -> Self {
        EthereumPrivateKey(key.secret_bytes())
    }
}

impl str::FromStr for EthereumPrivateKey {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = EthereumHex::strip_prefix(s);
        if value.len() != PRIVATE_KEY_BYTES * 2 {
            debug!("Private key has invalid length: {}", value.len());
            return Err(SignerError::InvalidKeyFormat);
        }

        let bytes = hex::decode(value).map_err(|_| SignerError::InvalidKeyFormat)?;
        EthereumPrivateKey::try_from(bytes.as_slice())
    }
}

impl fmt::Debug for EthereumPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EthereumPrivateKey(***)")
    }
}
