//! Algebraic trace layer: the transition relation and witness expansion.
//!
//! The relation is deliberately a seam.  Both the trace builder and the
//! verifier's constraint check consume any [`Transition`] implementation, so
//! an alternative single-transition relation can be substituted without
//! touching the commitment or challenge plumbing.

pub mod trace;

use std::fmt;

use crate::field::{FieldElement, PrimeField};
use crate::params::AuthParams;

pub use trace::{build_trace, Trace};

/// Pure single-input single-output field map applied at every trace step.
pub trait Transition {
    /// Computes `trace[i + 1]` from `trace[i]`.
    fn apply(&self, field: &PrimeField, value: FieldElement) -> FieldElement;
}

/// The fixed login round: `next = current^3 + C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubicRound {
    constant: FieldElement,
}

impl CubicRound {
    /// Creates the round with an explicit constant, reduced into the field.
    pub fn new(field: &PrimeField, constant: u64) -> Self {
        Self {
            constant: field.element(constant),
        }
    }

    /// Creates the round described by a parameter set.
    pub fn from_params(field: &PrimeField, params: &AuthParams) -> Self {
        Self::new(field, params.round_constant())
    }

    /// Returns the reduced round constant.
    pub const fn constant(&self) -> FieldElement {
        self.constant
    }
}

impl Transition for CubicRound {
    fn apply(&self, field: &PrimeField, value: FieldElement) -> FieldElement {
        let square = field.mul(value, value);
        let cube = field.mul(square, value);
        field.add(cube, self.constant)
    }
}

/// Errors emitted while expanding or validating a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirError {
    /// A trace of zero transitions proves nothing.
    EmptyTrace,
    /// The expanded trace does not hold one value per step plus the seed.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for AirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirError::EmptyTrace => write!(f, "trace must contain at least one transition"),
            AirError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "trace length mismatch: expected {}, actual {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for AirError {}
