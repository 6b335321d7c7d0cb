//! `zklogin-stark` — deterministic STARK-style proof engine for trace-based
//! login authentication.
//!
//! A user registers the public commitment `h` obtained by iterating the
//! cubic round `x -> x^3 + C` over their secret a fixed number of times.  At
//! login they produce a non-interactive proof that they know a secret whose
//! execution trace is committed under a Merkle root, satisfies the round
//! relation at every sampled step and reaches `h` at the final step.  The
//! transport, session and storage layers around this engine live elsewhere;
//! the crate has no knowledge of usernames or wallets.
//!
//! Soundness is statistical: only sampled steps are opened, so a cheating
//! prover who breaks the relation at a single unsampled step escapes with
//! probability `1 - query_count / steps` per independent sample.  The query
//! budget in [`params::AuthParams`] must be chosen against a target
//! soundness error; the boundary constraint itself is always opened.

pub mod air;
pub mod field;
pub mod hash;
pub mod merkle;
pub mod params;
pub mod proof;
pub mod transcript;

pub use air::{CubicRound, Transition};
pub use field::{FieldElement, PrimeField};
pub use params::{AuthParams, AuthParamsBuilder};
pub use proof::{Proof, ProverError, Statement, VerificationFailure};

/// Produces a login proof for the fixed cubic round relation.
///
/// Fails with [`ProverError::WitnessMismatch`] when the secret does not
/// reach the statement's registered commitment.
pub fn prove(
    params: &AuthParams,
    statement: &Statement,
    secret: FieldElement,
) -> Result<Proof, ProverError> {
    let field = PrimeField::from_params(params);
    let round = CubicRound::from_params(&field, params);
    proof::prover::prove(params, statement, secret, &round)
}

/// Checks a login proof against a statement.
///
/// All rejection causes, including malformed proof structure, reduce to
/// `false`; use [`proof::verify_detailed`] for diagnostics.
pub fn verify(params: &AuthParams, statement: &Statement, proof: &Proof) -> bool {
    let field = PrimeField::from_params(params);
    let round = CubicRound::from_params(&field, params);
    proof::verifier::verify(params, statement, proof, &round)
}

/// Derives the public commitment a secret reaches after `steps` rounds.
///
/// Registration-side helper: the returned value is what the application
/// stores as `h` and later places in the [`Statement`].
pub fn expected_commitment(params: &AuthParams, secret: FieldElement, steps: u32) -> FieldElement {
    let field = PrimeField::from_params(params);
    let round = CubicRound::from_params(&field, params);
    let mut value = secret;
    for _ in 0..steps {
        value = round.apply(&field, value);
    }
    value
}
