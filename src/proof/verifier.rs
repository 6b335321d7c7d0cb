//! Proof verification.
//!
//! The detailed checker distinguishes every rejection cause for diagnostics;
//! the external surface is [`verify`], which degrades all of them to a clean
//! boolean.  Malformed structure is an expected, attacker-reachable outcome
//! and is treated as rejection, never as a crash.

use std::fmt;

use crate::air::Transition;
use crate::field::PrimeField;
use crate::merkle::verify_path;
use crate::params::AuthParams;

use super::types::{Proof, Statement, PROOF_VERSION};

/// Causes a proof can be rejected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationFailure {
    /// The proof was produced under a different protocol version.
    VersionMismatch { expected: u16, got: u16 },
    /// Structural defect: lengths, ranges or mandatory openings are off.
    MalformedProof(&'static str),
    /// A Merkle inclusion path does not anchor to the committed root.
    InvalidMerkleProof { index: u32 },
    /// An opened pair violates the transition relation.
    ConstraintViolation { index: u32 },
    /// The final-step opening does not match the registered commitment.
    BoundaryMismatch,
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationFailure::VersionMismatch { expected, got } => {
                write!(f, "proof version mismatch: expected {}, got {}", expected, got)
            }
            VerificationFailure::MalformedProof(reason) => {
                write!(f, "malformed proof: {}", reason)
            }
            VerificationFailure::InvalidMerkleProof { index } => {
                write!(f, "merkle opening at index {} does not match root", index)
            }
            VerificationFailure::ConstraintViolation { index } => {
                write!(f, "transition relation violated at step {}", index)
            }
            VerificationFailure::BoundaryMismatch => {
                write!(f, "final step does not reach the registered commitment")
            }
        }
    }
}

impl std::error::Error for VerificationFailure {}

/// Checks a proof against a statement, reporting the first failure cause.
///
/// Operates only on the proof and the public statement; the secret is never
/// reconstructed.  The transition relation is injected so the same protocol
/// plumbing verifies alternative relations.
pub fn verify_detailed<T: Transition>(
    params: &AuthParams,
    statement: &Statement,
    proof: &Proof,
    transition: &T,
) -> Result<(), VerificationFailure> {
    if proof.version != PROOF_VERSION {
        return Err(VerificationFailure::VersionMismatch {
            expected: PROOF_VERSION,
            got: proof.version,
        });
    }
    if statement.steps == 0 {
        return Err(VerificationFailure::MalformedProof("statement has zero steps"));
    }
    let leaf_count = statement
        .steps
        .checked_add(1)
        .ok_or(VerificationFailure::MalformedProof("step count overflow"))?;
    if proof.indices.len() != proof.openings.len() {
        return Err(VerificationFailure::MalformedProof(
            "index and opening counts differ",
        ));
    }
    if proof.openings.is_empty() {
        return Err(VerificationFailure::MalformedProof("no openings supplied"));
    }
    // The boundary assertion is mandatory; a proof that never opens the
    // final transition is rejected outright instead of silently accepted.
    if !proof.indices.contains(&(statement.steps - 1)) {
        return Err(VerificationFailure::MalformedProof(
            "missing mandatory final-step opening",
        ));
    }

    let field = PrimeField::from_params(params);
    for (&index, opening) in proof.indices.iter().zip(proof.openings.iter()) {
        if opening.index != index {
            return Err(VerificationFailure::MalformedProof(
                "opening does not match its declared index",
            ));
        }
        if index >= statement.steps {
            return Err(VerificationFailure::MalformedProof(
                "query index out of range",
            ));
        }
        if opening.current.as_u64() >= field.modulus() || opening.next.as_u64() >= field.modulus()
        {
            return Err(VerificationFailure::MalformedProof(
                "opened value is not canonical",
            ));
        }

        if !verify_path(
            &opening.current.to_bytes(),
            index,
            leaf_count,
            &opening.path_current,
            &proof.root,
        ) {
            return Err(VerificationFailure::InvalidMerkleProof { index });
        }
        if !verify_path(
            &opening.next.to_bytes(),
            index + 1,
            leaf_count,
            &opening.path_next,
            &proof.root,
        ) {
            return Err(VerificationFailure::InvalidMerkleProof { index: index + 1 });
        }

        if transition.apply(&field, opening.current) != opening.next {
            return Err(VerificationFailure::ConstraintViolation { index });
        }

        if index + 1 == statement.steps && opening.next != statement.final_value {
            return Err(VerificationFailure::BoundaryMismatch);
        }
    }

    Ok(())
}

/// Boolean verification surface consumed by the surrounding application.
pub fn verify<T: Transition>(
    params: &AuthParams,
    statement: &Statement,
    proof: &Proof,
    transition: &T,
) -> bool {
    verify_detailed(params, statement, proof, transition).is_ok()
}
