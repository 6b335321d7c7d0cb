//! Prime field arithmetic over a runtime-configured modulus.
//!
//! The modulus travels inside [`PrimeField`] rather than as an associated
//! constant so the engine can be exercised with alternate parameter sets
//! (the tests use a modulus of 17 alongside the login prime).  Elements are
//! always kept in canonical form: every operation reduces into
//! `[0, modulus)` and there is exactly one representative per residue class.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::params::AuthParams;

/// Field element in canonical form.
///
/// The wrapped integer must be within `[0, modulus)` of the field that
/// produced it.  Elements are immutable; arithmetic returns new instances.
/// Serialization uses little-endian byte order.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldElement(pub(crate) u64);

impl FieldElement {
    /// Additive identity in canonical form.
    pub const ZERO: FieldElement = FieldElement(0);
    /// Multiplicative identity in canonical form.
    pub const ONE: FieldElement = FieldElement(1);

    /// Returns the canonical integer representative.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns `true` for the additive identity.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Serializes the element into canonical little-endian bytes.
    pub const fn to_bytes(&self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldElement").field(&self.0).finish()
    }
}

/// Errors emitted by field arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Multiplicative inverse of the additive identity was requested.
    DivisionByZero,
    /// Deserialized bytes denote a value outside the canonical range.
    NonCanonical { value: u64, modulus: u64 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::DivisionByZero => write!(f, "division by zero in the prime field"),
            FieldError::NonCanonical { value, modulus } => {
                write!(f, "value {} is not canonical modulo {}", value, modulus)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Arithmetic context for a prime modulus.
///
/// All operations are total except [`PrimeField::inv`] and
/// [`PrimeField::div`] on the additive identity, which fail explicitly: a
/// silently wrong inverse could forge proofs downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Creates a field context for the provided modulus.
    ///
    /// The modulus is expected to come from a validated [`AuthParams`] set;
    /// primality is the caller's obligation.
    pub const fn new(modulus: u64) -> Self {
        Self { modulus }
    }

    /// Creates the field context described by a parameter set.
    pub const fn from_params(params: &AuthParams) -> Self {
        Self::new(params.modulus())
    }

    /// Returns the field modulus.
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Returns the additive identity.
    pub const fn zero(&self) -> FieldElement {
        FieldElement::ZERO
    }

    /// Returns the multiplicative identity.
    pub const fn one(&self) -> FieldElement {
        FieldElement::ONE
    }

    /// Reduces an arbitrary integer into a canonical field element.
    pub const fn element(&self, value: u64) -> FieldElement {
        FieldElement(value % self.modulus)
    }

    /// Adds two canonical field elements.
    pub fn add(&self, lhs: FieldElement, rhs: FieldElement) -> FieldElement {
        let sum = (lhs.0 as u128 + rhs.0 as u128) % self.modulus as u128;
        FieldElement(sum as u64)
    }

    /// Subtracts `rhs` from `lhs`; never goes through a negative value.
    pub fn sub(&self, lhs: FieldElement, rhs: FieldElement) -> FieldElement {
        if lhs.0 >= rhs.0 {
            FieldElement(lhs.0 - rhs.0)
        } else {
            FieldElement(self.modulus - (rhs.0 - lhs.0))
        }
    }

    /// Computes the additive inverse.
    pub fn neg(&self, value: FieldElement) -> FieldElement {
        self.sub(FieldElement::ZERO, value)
    }

    /// Multiplies two field elements with a 128-bit intermediate.
    pub fn mul(&self, lhs: FieldElement, rhs: FieldElement) -> FieldElement {
        let product = (lhs.0 as u128 * rhs.0 as u128) % self.modulus as u128;
        FieldElement(product as u64)
    }

    /// Computes the multiplicative inverse via Fermat (`a^(p-2) mod p`).
    ///
    /// Fails with [`FieldError::DivisionByZero`] for the additive identity
    /// instead of returning an arbitrary value.
    pub fn inv(&self, value: FieldElement) -> Result<FieldElement, FieldError> {
        if value.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.pow_unsigned(value, self.modulus - 2))
    }

    /// Divides `lhs` by `rhs`, failing on a zero divisor.
    pub fn div(&self, lhs: FieldElement, rhs: FieldElement) -> Result<FieldElement, FieldError> {
        let inverse = self.inv(rhs)?;
        Ok(self.mul(lhs, inverse))
    }

    /// Raises `base` to a signed exponent by square-and-multiply.
    ///
    /// Negative exponents invert the base first and therefore fail on zero.
    pub fn pow(&self, base: FieldElement, exponent: i64) -> Result<FieldElement, FieldError> {
        if exponent < 0 {
            let inverse = self.inv(base)?;
            return Ok(self.pow_unsigned(inverse, exponent.unsigned_abs()));
        }
        Ok(self.pow_unsigned(base, exponent as u64))
    }

    /// Attempts to deserialize a canonical little-endian element.
    pub fn element_from_bytes(&self, bytes: &[u8; 8]) -> Result<FieldElement, FieldError> {
        let value = u64::from_le_bytes(*bytes);
        if value >= self.modulus {
            return Err(FieldError::NonCanonical {
                value,
                modulus: self.modulus,
            });
        }
        Ok(FieldElement(value))
    }

    fn pow_unsigned(&self, base: FieldElement, mut exponent: u64) -> FieldElement {
        let mut result = FieldElement::ONE;
        let mut base = base;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exponent >>= 1;
        }
        result
    }
}
