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
//! # Util functions module

use sha3::{Digest, Keccak256};

/// Keccak-256 crypto hash length in bytes
pub const KECCAK256_BYTES: usize = 32;

/// Calculate Keccak-256 crypto hash
pub fn keccak256(data: &[u8]) -> [u8; KECCAK256_BYTES] {
    let mut hasher = Keccak256::new();
    hasher.update(data);

    let mut hash = [0u8; KECCAK256_BYTES];
    hash.copy_from_slice(&hasher.finalize());
    hash
}

/// Convert a slice into array
pub fn to_arr<A, T>(slice: &[T]) -> A
where
    A: AsMut<[T]> + Default,
    T: Clone,
{
    let mut arr = Default::default();
    <A as AsMut<[T]>>::as_mut(&mut arr).clone_from_slice(slice);
    arr
}

/// Trim all leading zeros, i.e. a big-endian number in its minimal form
pub fn trim_bytes(data: &[u8]) -> &[u8] {
    let start = data.iter().position(|b| *b != 0).unwrap_or(data.len());
    &data[start..]
}

/// Left-pad a big-endian number up to 32 bytes, or `None` if it doesn't fit
pub fn to_word(data: &[u8]) -> Option<[u8; 32]> {
    if data.len() > 32 {
        return None;
    }
    let mut word = [0u8; 32];
    word[32 - data.len()..].copy_from_slice(data);
    Some(word)
}

/// Big-endian number as `u64`, or `None` if it's longer than 8 bytes
pub fn to_u64(data: &[u8]) -> Option<u64> {
    if data.len() > 8 {
        return None;
    }
    Some(data.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
}
