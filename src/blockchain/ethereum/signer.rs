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
//! # Transaction signers
//!
//! A signer defines which payload is hashed for a signature and how the recovery id is stored
//! in `V`. `Legacy` signatures (Homestead) are valid on any chain, `ChainProtected` signatures
//! follow [EIP-155](https://eips.ethereum.org/EIPS/eip-155) and can't be replayed on another chain.

use super::EthereumTransaction;
use crate::{
    blockchain::chains::EthereumChainId,
    error::SignerError,
    util::{keccak256, KECCAK256_BYTES},
};

const LEGACY_V_OFFSET: u64 = 27;
const PROTECTED_V_OFFSET: u64 = 35;

/// Signer protocol
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signer {
    /// No replay protection, `v` is `27` or `28`
    Legacy,
    /// EIP-155 replay protection for the chain id, `v` is `35 + 2 * chain_id` or `36 + 2 * chain_id`
    ChainProtected(u64),
}

impl Signer {
    /// Chain the signature is bound to
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            Signer::Legacy => None,
            Signer::ChainProtected(id) => Some(*id),
        }
    }

    pub fn is_protected(&self) -> bool {
        self.chain_id().is_some()
    }

    /// Hash to sign. Legacy signer hashes `[nonce, gasPrice, gasLimit, to, value, data]`,
    /// chain protected appends `[chainId, 0, 0]` to it. Signature of the transaction is ignored.
    pub fn signing_digest(&self, tx: &EthereumTransaction) -> [u8; KECCAK256_BYTES] {
        trace!("Signing digest for {:?}", self);
        keccak256(&tx.to_unsigned_rlp(self.chain_id()))
    }

    /// `V` value for the raw recovery id (`0` or `1`)
    pub fn encode_v(&self, recovery_id: u8) -> Result<u64, SignerError> {
        if recovery_id > 1 {
            return Err(SignerError::MalformedSignature);
        }
        let recovery_id = u64::from(recovery_id);
        match self {
            Signer::Legacy => Ok(recovery_id + LEGACY_V_OFFSET),
            Signer::ChainProtected(id) => id
                .checked_mul(2)
                .and_then(|v| v.checked_add(PROTECTED_V_OFFSET + recovery_id))
                .ok_or(SignerError::MalformedSignature),
        }
    }

    /// Raw recovery id and the signer for a `V` value
    pub fn decode_v(v: u64) -> Result<(u8, Signer), SignerError> {
        if v == LEGACY_V_OFFSET || v == LEGACY_V_OFFSET + 1 {
            return Ok(((v - LEGACY_V_OFFSET) as u8, Signer::Legacy));
        }
        if v < PROTECTED_V_OFFSET {
            debug!("Invalid V: {}", v);
            return Err(SignerError::MalformedSignature);
        }
        let chain_id = (v - PROTECTED_V_OFFSET) / 2;
        let recovery_id = v - PROTECTED_V_OFFSET - 2 * chain_id;
        Ok((recovery_id as u8, Signer::ChainProtected(chain_id)))
    }
}

impl From<EthereumChainId> for Signer {
    fn from(chain: EthereumChainId) -> Self {
        Signer::ChainProtected(chain.as_chainid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{blockchain::ethereum::EthereumSignature, util::tests::*};
    use num_bigint::BigUint;

    fn eip155_tx() -> EthereumTransaction {
        EthereumTransaction::new(
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
    fn encode_legacy_v() {
        assert_eq!(Signer::Legacy.encode_v(0), Ok(27));
        assert_eq!(Signer::Legacy.encode_v(1), Ok(28));
    }

    #[test]
    fn encode_protected_v() {
        assert_eq!(Signer::ChainProtected(1).encode_v(0), Ok(37));
        assert_eq!(Signer::ChainProtected(1).encode_v(1), Ok(38));
        assert_eq!(Signer::ChainProtected(61).encode_v(1), Ok(158));
        assert_eq!(Signer::ChainProtected(0).encode_v(0), Ok(35));
    }

    #[test]
    fn fail_to_encode_invalid_v() {
        assert_eq!(Signer::Legacy.encode_v(2), Err(SignerError::MalformedSignature));
        assert_eq!(
            Signer::ChainProtected(u64::MAX / 2).encode_v(1),
            Err(SignerError::MalformedSignature)
        );
    }

    #[test]
    fn decode_v() {
        assert_eq!(Signer::decode_v(27), Ok((0, Signer::Legacy)));
        assert_eq!(Signer::decode_v(28), Ok((1, Signer::Legacy)));
        assert_eq!(Signer::decode_v(37), Ok((0, Signer::ChainProtected(1))));
        assert_eq!(Signer::decode_v(38), Ok((1, Signer::ChainProtected(1))));
        assert_eq!(Signer::decode_v(45), Ok((0, Signer::ChainProtected(5))));
        assert_eq!(Signer::decode_v(310), Ok((1, Signer::ChainProtected(137))));
        assert_eq!(Signer::decode_v(35), Ok((0, Signer::ChainProtected(0))));
    }

    #[test]
    fn fail_to_decode_invalid_v() {
        for v in [0u64, 1, 26, 29, 30, 34].iter() {
            assert_eq!(Signer::decode_v(*v), Err(SignerError::MalformedSignature), "{}", v);
        }
    }

    #[test]
    fn decode_encoded_v() {
        let signers = [
            Signer::Legacy,
            Signer::ChainProtected(1),
            Signer::ChainProtected(5),
            Signer::ChainProtected(137),
        ];
        for signer in signers.iter() {
            for rid in 0..=1u8 {
                let v = signer.encode_v(rid).unwrap();
                assert_eq!(Signer::decode_v(v), Ok((rid, *signer)));
            }
        }
    }

    #[test]
    fn legacy_digest() {
        let tx = eip155_tx();
        assert_eq!(
            Signer::Legacy.signing_digest(&tx),
            keccak256(&hex::decode(
                "e9098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a764000080"
            ).unwrap())
        );
    }

    #[test]
    fn eip155_digest() {
        // example from EIP-155
        let tx = eip155_tx();
        assert_eq!(
            Signer::ChainProtected(1).signing_digest(&tx),
            to_32bytes("daf5a779ae972f972197303d7b574746c7ef83eadac0f2791ad23db92e4c8e53")
        );
    }

    #[test]
    fn digest_ignores_signature() {
        let tx = eip155_tx();
        let mut signed = tx.clone();
        signed.signature = Some(EthereumSignature { v: 37, r: [1u8; 32], s: [2u8; 32] });
        assert_eq!(
            Signer::ChainProtected(1).signing_digest(&tx),
            Signer::ChainProtected(1).signing_digest(&signed)
        );
        assert_eq!(
            Signer::Legacy.signing_digest(&tx),
            Signer::Legacy.signing_digest(&signed)
        );
    }

    #[test]
    fn digest_depends_on_chain() {
        let tx = eip155_tx();
        assert_ne!(
            Signer::ChainProtected(1).signing_digest(&tx),
            Signer::ChainProtected(5).signing_digest(&tx)
        );
        assert_ne!(
            Signer::ChainProtected(1).signing_digest(&tx),
            Signer::Legacy.signing_digest(&tx)
        );
    }

    #[test]
    fn signer_for_chain() {
        assert_eq!(Signer::from(EthereumChainId::Ethereum), Signer::ChainProtected(1));
        assert_eq!(Signer::from(EthereumChainId::Polygon), Signer::ChainProtected(137));
        assert!(!Signer::Legacy.is_protected());
        assert_eq!(Signer::ChainProtected(61).chain_id(), Some(61));
    }
}
