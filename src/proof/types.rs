use serde::{Deserialize, Serialize};

use crate::field::FieldElement;
use crate::hash::Hash;
use crate::merkle::MerklePath;

/// Version identifier carried by every proof.
pub const PROOF_VERSION: u16 = 1;

/// Public statement fixing what is being proven.
///
/// The modulus and round constant are not part of the statement; they are
/// shared out of band through [`crate::params::AuthParams`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Number of transitions the trace must witness.
    pub steps: u32,
    /// Registered public commitment the trace must reach at the final step.
    pub final_value: FieldElement,
}

impl Statement {
    /// Creates a statement from the public inputs.
    pub const fn new(steps: u32, final_value: FieldElement) -> Self {
        Self { steps, final_value }
    }
}

/// Evidence that `trace[index]` and `trace[index + 1]` carry the claimed
/// values under the committed root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opening {
    pub index: u32,
    pub current: FieldElement,
    pub next: FieldElement,
    pub path_current: MerklePath,
    pub path_next: MerklePath,
}

/// Non-interactive proof of correct trace execution.
///
/// Immutable once produced; transmitted in full to the verifier.  The
/// sampled indices travel inside the proof, so the verifier checks the
/// openings it is given rather than re-deriving the query stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub version: u16,
    pub root: Hash,
    pub indices: Vec<u32>,
    pub openings: Vec<Opening>,
}
