//! Deterministic Fiat–Shamir challenge derivation.
//!
//! Query indices are derived by expanding a Blake2s state seeded from the
//! parameter hash and the committed trace root.  No external randomness is
//! involved: re-running the prover over the same trace yields the same query
//! set, and anyone holding the same parameters and root can re-derive the
//! stream.  The final transition index is always forced into the sample so
//! the boundary constraint is opened by every proof, not left to chance.

use std::collections::BTreeSet;

use crate::hash::{Blake2sXof, Hash, Hasher};
use crate::params::AuthParams;

const TRANSCRIPT_DOMAIN: &[u8] = b"ZKL-TRANSCRIPT-V1";

/// Challenge transcript bound to one parameter set and one trace commitment.
#[derive(Debug, Clone)]
pub struct Transcript {
    state: [u8; 32],
}

impl Transcript {
    /// Seeds the transcript from the parameter hash and the trace root.
    pub fn new(params: &AuthParams, root: &Hash) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(TRANSCRIPT_DOMAIN);
        hasher.update(&params.params_hash());
        hasher.update(&params.protocol_tag().to_le_bytes());
        hasher.update(params.seed());
        hasher.update(root.as_bytes());
        Self {
            state: hasher.finalize().into_bytes(),
        }
    }

    /// Returns the digest of the current transcript state.
    pub fn state_digest(&self) -> [u8; 32] {
        self.state
    }

    /// Samples the trace step indices to open.
    ///
    /// Indices lie in `[0, steps)` so both `index` and `index + 1` address
    /// valid trace positions.  Sampling is without replacement while the
    /// range allows, the result is sorted ascending and always contains
    /// `steps - 1` (the mandatory boundary opening), even for a query budget
    /// of zero.
    pub fn sample_query_indices(&self, steps: u32, query_count: u16) -> Vec<u32> {
        if steps == 0 {
            return Vec::new();
        }
        let target = (query_count as usize).clamp(1, steps as usize);
        let mut chosen = BTreeSet::new();
        chosen.insert(steps - 1);

        let mut xof = Blake2sXof::from_state(self.state);
        while chosen.len() < target {
            let draw = (xof.next_u64() % steps as u64) as u32;
            chosen.insert(draw);
        }
        chosen.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::AuthParamsBuilder;

    fn transcript_for(root_byte: u8) -> Transcript {
        let params = AuthParamsBuilder::new().build().expect("params");
        Transcript::new(&params, &Hash::from_bytes([root_byte; 32]))
    }

    #[test]
    fn index_stream_is_deterministic() {
        let a = transcript_for(1).sample_query_indices(16, 6);
        let b = transcript_for(1).sample_query_indices(16, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_roots_diverge() {
        let a = transcript_for(1).sample_query_indices(64, 8);
        let b = transcript_for(2).sample_query_indices(64, 8);
        assert_ne!(a, b);
    }

    #[test]
    fn final_step_always_sampled() {
        for query_count in [0u16, 1, 4, 16] {
            let indices = transcript_for(7).sample_query_indices(15, query_count);
            assert!(indices.contains(&14), "budget {}", query_count);
        }
    }

    #[test]
    fn sampling_without_replacement() {
        let indices = transcript_for(9).sample_query_indices(8, 8);
        let mut deduped = indices.clone();
        deduped.dedup();
        assert_eq!(indices, deduped);
        assert_eq!(indices.len(), 8);
        assert_eq!(indices, (0..8).collect::<Vec<u32>>());
    }
}
