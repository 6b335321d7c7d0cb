//! Deterministic prover pipeline.
//!
//! A proof is produced in five stages:
//!
//! 1. Expand the secret into the execution trace.
//! 2. Check the boundary: the trace must actually reach the registered
//!    commitment, otherwise proving aborts before anything is emitted.
//! 3. Commit the trace column to a Merkle root.
//! 4. Derive the query indices from the root (Fiat–Shamir; the final
//!    transition is always included).
//! 5. Assemble one opening per sampled index and return the proof.

use std::fmt;

use crate::air::{build_trace, AirError, Transition};
use crate::field::{FieldElement, PrimeField};
use crate::merkle::{Leaf, MerkleError, MerkleTree};
use crate::params::AuthParams;
use crate::transcript::Transcript;

use super::types::{Opening, Proof, Statement, PROOF_VERSION};

/// Errors surfaced while building a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProverError {
    /// The statement cannot host a trace (zero steps).
    InvalidStatement(AirError),
    /// The secret does not reach the claimed boundary value; a proof built
    /// from this witness would be known false, so none is emitted.
    WitnessMismatch,
    /// The commitment layer rejected the trace column.
    Merkle(MerkleError),
    /// Internal pipeline inconsistency; indicates a logic bug.
    Internal(&'static str),
}

impl fmt::Display for ProverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProverError::InvalidStatement(err) => write!(f, "invalid statement: {}", err),
            ProverError::WitnessMismatch => {
                write!(f, "secret does not reach the registered commitment")
            }
            ProverError::Merkle(err) => write!(f, "merkle commitment failed: {}", err),
            ProverError::Internal(reason) => write!(f, "internal prover error: {}", reason),
        }
    }
}

impl std::error::Error for ProverError {}

impl From<AirError> for ProverError {
    fn from(err: AirError) -> Self {
        ProverError::InvalidStatement(err)
    }
}

impl From<MerkleError> for ProverError {
    fn from(err: MerkleError) -> Self {
        ProverError::Merkle(err)
    }
}

/// Builds a [`Proof`] that the secret reaches the statement's boundary value
/// under the supplied transition relation.
pub fn prove<T: Transition>(
    params: &AuthParams,
    statement: &Statement,
    secret: FieldElement,
    transition: &T,
) -> Result<Proof, ProverError> {
    let field = PrimeField::from_params(params);
    let trace = build_trace(&field, secret, transition, statement.steps as usize)?;

    if trace.final_value() != statement.final_value {
        return Err(ProverError::WitnessMismatch);
    }

    let leaves: Vec<Leaf> = trace
        .as_slice()
        .iter()
        .map(|value| Leaf::new(value.to_bytes().to_vec()))
        .collect();
    let tree = MerkleTree::commit(&leaves)?;
    let root = tree.root();

    let transcript = Transcript::new(params, &root);
    let indices = transcript.sample_query_indices(statement.steps, params.query_count());

    let mut openings = Vec::with_capacity(indices.len());
    for &index in &indices {
        let current = trace
            .get(index as usize)
            .ok_or(ProverError::Internal("sampled index escaped the trace"))?;
        let next = trace
            .get(index as usize + 1)
            .ok_or(ProverError::Internal("successor index escaped the trace"))?;
        let path_current = tree.open(index)?;
        let path_next = tree.open(index + 1)?;
        openings.push(Opening {
            index,
            current,
            next,
            path_current,
            path_next,
        });
    }

    Ok(Proof {
        version: PROOF_VERSION,
        root,
        indices,
        openings,
    })
}
