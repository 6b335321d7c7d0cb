//! Shared parameter set for the login proof engine.
//!
//! Both prover and verifier must agree on the field modulus, the round
//! constant of the transition relation and the Fiat–Shamir framing before any
//! proof can be exchanged.  The parameters are threaded explicitly through
//! every constructor instead of living in ambient global state so the engine
//! stays testable with alternate profiles (the test suite uses a modulus of
//! 17 in several places).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hash::Hasher;

/// Default login field modulus, `2^32 - 3*2^25 + 1` (prime).
pub const LOGIN_MODULUS: u64 = 4_194_304_001;

/// Default round constant `C` of the cubic transition `x^3 + C`.
pub const LOGIN_ROUND_CONSTANT: u64 = 7;

/// Upper bound on the per-proof query budget accepted by the builder.
pub const MAX_QUERY_COUNT: u16 = 4096;

/// Canonical parameter set shared by prover and verifier.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `params_version` | `u16` | Version of the parameter schema. |
/// | `modulus` | `u64` | Prime modulus of the trace field. |
/// | `round_constant` | `u64` | Additive constant of the cubic round, reduced. |
/// | `query_count` | `u16` | Number of trace steps opened per proof. |
/// | `protocol_tag` | `u64` | Domain tag separating unrelated deployments. |
/// | `seed` | `[u8; 32]` | Deterministic transcript seed. |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthParams {
    pub(crate) params_version: u16,
    pub(crate) modulus: u64,
    pub(crate) round_constant: u64,
    pub(crate) query_count: u16,
    pub(crate) protocol_tag: u64,
    pub(crate) seed: [u8; 32],
}

impl AuthParams {
    /// Returns the parameter schema version.
    pub const fn params_version(&self) -> u16 {
        self.params_version
    }

    /// Returns the prime modulus of the trace field.
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Returns the round constant of the transition relation.
    pub const fn round_constant(&self) -> u64 {
        self.round_constant
    }

    /// Returns the number of trace steps opened per proof.
    pub const fn query_count(&self) -> u16 {
        self.query_count
    }

    /// Returns the protocol domain tag.
    pub const fn protocol_tag(&self) -> u64 {
        self.protocol_tag
    }

    /// Returns the deterministic transcript seed.
    pub const fn seed(&self) -> &[u8; 32] {
        &self.seed
    }

    /// Computes the canonical parameter hash.
    ///
    /// The digest covers every field in a fixed little-endian layout and is
    /// absorbed into the Fiat–Shamir transcript, so provers bound to
    /// different parameter sets derive disjoint query streams.
    pub fn params_hash(&self) -> [u8; 32] {
        let mut hasher = Hasher::new();
        hasher.update(b"ZKL-PARAMS-V1");
        hasher.update(&self.params_version.to_le_bytes());
        hasher.update(&self.modulus.to_le_bytes());
        hasher.update(&self.round_constant.to_le_bytes());
        hasher.update(&self.query_count.to_le_bytes());
        hasher.update(&self.protocol_tag.to_le_bytes());
        hasher.update(&self.seed);
        hasher.finalize().into_bytes()
    }

    fn try_from_builder(builder: &AuthParamsBuilder) -> Result<Self, ParamsError> {
        if builder.modulus < 3 {
            return Err(ParamsError::ModulusTooSmall {
                modulus: builder.modulus,
            });
        }
        if builder.modulus % 2 == 0 {
            return Err(ParamsError::ModulusEven {
                modulus: builder.modulus,
            });
        }
        if builder.round_constant >= builder.modulus {
            return Err(ParamsError::RoundConstantOutOfRange {
                constant: builder.round_constant,
                modulus: builder.modulus,
            });
        }
        if builder.query_count > MAX_QUERY_COUNT {
            return Err(ParamsError::QueryBudgetTooLarge {
                queries: builder.query_count,
                max: MAX_QUERY_COUNT,
            });
        }
        Ok(Self {
            params_version: builder.params_version,
            modulus: builder.modulus,
            round_constant: builder.round_constant,
            query_count: builder.query_count,
            protocol_tag: builder.protocol_tag,
            seed: builder.seed,
        })
    }
}

/// Builder used to assemble [`AuthParams`] with validation.
///
/// Defaults describe the login deployment profile: the prime
/// `2^32 - 3*2^25 + 1`, cubic round constant `7` and a query budget of 10.
/// Primality of a caller-supplied modulus is a documented obligation of the
/// caller; the builder only checks cheap structural facts.
#[derive(Debug, Clone)]
pub struct AuthParamsBuilder {
    pub params_version: u16,
    pub modulus: u64,
    pub round_constant: u64,
    pub query_count: u16,
    pub protocol_tag: u64,
    pub seed: [u8; 32],
}

impl AuthParamsBuilder {
    /// Returns a builder initialised with the login profile defaults.
    pub fn new() -> Self {
        Self {
            params_version: 1,
            modulus: LOGIN_MODULUS,
            round_constant: LOGIN_ROUND_CONSTANT,
            query_count: 10,
            protocol_tag: 0x5a4b_4c5f_4c47_4e31,
            seed: *b"ZKL-STARK-LOGIN-PROFILE-V1_____0",
        }
    }

    /// Validates the builder fields and emits an [`AuthParams`] instance.
    pub fn build(&self) -> Result<AuthParams, ParamsError> {
        AuthParams::try_from_builder(self)
    }
}

impl Default for AuthParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors emitted while validating a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    /// The modulus cannot host a multiplicative group.
    ModulusTooSmall { modulus: u64 },
    /// An even modulus is never prime (beyond 2, which is too small anyway).
    ModulusEven { modulus: u64 },
    /// The round constant must already be reduced modulo the modulus.
    RoundConstantOutOfRange { constant: u64, modulus: u64 },
    /// The query budget exceeds the supported maximum.
    QueryBudgetTooLarge { queries: u16, max: u16 },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::ModulusTooSmall { modulus } => {
                write!(f, "modulus {} is too small", modulus)
            }
            ParamsError::ModulusEven { modulus } => {
                write!(f, "modulus {} is even and therefore not prime", modulus)
            }
            ParamsError::RoundConstantOutOfRange { constant, modulus } => {
                write!(
                    f,
                    "round constant {} is not reduced modulo {}",
                    constant, modulus
                )
            }
            ParamsError::QueryBudgetTooLarge { queries, max } => {
                write!(f, "query budget {} exceeds maximum {}", queries, max)
            }
        }
    }
}

impl std::error::Error for ParamsError {}
