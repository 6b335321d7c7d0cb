//! Proof protocol: statement/opening/proof records, the deterministic
//! prover pipeline, the boolean-surfaced verifier and the canonical byte
//! codec.

pub mod prover;
pub mod ser;
pub mod types;
pub mod verifier;

pub use prover::{prove, ProverError};
pub use ser::{decode_proof, encode_proof, SerError};
pub use types::{Opening, Proof, Statement, PROOF_VERSION};
pub use verifier::{verify, verify_detailed, VerificationFailure};
