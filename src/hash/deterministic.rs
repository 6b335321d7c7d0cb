use core::fmt;

use blake2::{Blake2s256, Digest};
use serde::{Deserialize, Serialize};

/// Deterministic 32-byte digest produced by the canonical helper.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hash {
    bytes: [u8; 32],
}

impl Hash {
    /// Constructs a hash value from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Returns the canonical byte representation of the digest.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Consumes the hash and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; 32] {
        self.bytes
    }

    /// Returns a helper that formats the digest as lowercase hexadecimal.
    pub fn to_hex(&self) -> HexOutput {
        HexOutput(self.bytes)
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Hash> for [u8; 32] {
    fn from(hash: Hash) -> Self {
        hash.into_bytes()
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash(0x{})", self.to_hex())
    }
}

/// Hexadecimal representation of a deterministic digest.
#[derive(Clone, Copy)]
pub struct HexOutput([u8; 32]);

impl fmt::Display for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Deterministic streaming hasher over Blake2s-256.
#[derive(Clone)]
pub struct Hasher {
    state: Blake2s256,
}

impl Hasher {
    /// Creates a new hasher instance.
    pub fn new() -> Self {
        Self {
            state: Blake2s256::new(),
        }
    }

    /// Absorbs additional bytes into the hasher state.
    pub fn update(&mut self, bytes: &[u8]) {
        Digest::update(&mut self.state, bytes);
    }

    /// Finalises the hasher and returns a 32-byte digest.
    pub fn finalize(self) -> Hash {
        Hash::from_bytes(self.state.finalize().into())
    }

    /// Finalises the hasher into an extendable output reader.
    pub fn finalize_xof(self) -> Blake2sXof {
        Blake2sXof::from_state(self.state.finalize().into())
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes a deterministic 32-byte hash of the provided payload.
pub fn hash(input: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(input);
    hasher.finalize()
}

/// Blake2s-based extendable output reader.
///
/// The stream is a counter chain: `block_i = Blake2s(state_i || i)` with the
/// state replaced by each emitted block, so two readers seeded from the same
/// 32-byte state always squeeze identical bytes.
#[derive(Debug, Clone)]
pub struct Blake2sXof {
    state: [u8; 32],
    counter: u64,
}

impl Blake2sXof {
    /// Creates a new XOF instance from an arbitrary seed.
    pub fn new(seed: &[u8]) -> Self {
        let mut hasher = Blake2s256::new();
        Digest::update(&mut hasher, seed);
        Digest::update(&mut hasher, b"/XOF");
        Self {
            state: hasher.finalize().into(),
            counter: 0,
        }
    }

    /// Creates a new XOF starting from an existing 32-byte hash state.
    pub fn from_state(state: [u8; 32]) -> Self {
        Self { state, counter: 0 }
    }

    /// Returns the next 64 bits from the deterministic stream.
    pub fn next_u64(&mut self) -> u64 {
        let block = self.squeeze_block();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&block[0..8]);
        u64::from_le_bytes(bytes)
    }

    /// Fills the provided buffer with bytes from the stream.
    pub fn squeeze(&mut self, output: &mut [u8]) {
        let mut remaining = output;
        while !remaining.is_empty() {
            let block = self.squeeze_block();
            let take = remaining.len().min(block.len());
            let (dst, rest) = remaining.split_at_mut(take);
            dst.copy_from_slice(&block[..take]);
            remaining = rest;
        }
    }

    fn squeeze_block(&mut self) -> [u8; 32] {
        let mut hasher = Blake2s256::new();
        Digest::update(&mut hasher, self.state);
        Digest::update(&mut hasher, self.counter.to_le_bytes());
        let block: [u8; 32] = hasher.finalize().into();
        self.state = block;
        self.counter = self.counter.wrapping_add(1);
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash(b"zklogin"), hash(b"zklogin"));
        assert_ne!(hash(b"zklogin"), hash(b"zklogout"));
    }

    #[test]
    fn xof_streams_match_for_same_state() {
        let seed = hash(b"seed").into_bytes();
        let mut a = Blake2sXof::from_state(seed);
        let mut b = Blake2sXof::from_state(seed);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn xof_squeeze_matches_word_stream() {
        let seed = hash(b"stream").into_bytes();
        let mut words = Blake2sXof::from_state(seed);
        let mut bytes = Blake2sXof::from_state(seed);
        let mut buffer = [0u8; 32];
        bytes.squeeze(&mut buffer);
        let first = words.next_u64();
        assert_eq!(&buffer[0..8], &first.to_le_bytes());
    }
}
