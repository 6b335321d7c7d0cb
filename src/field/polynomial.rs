//! Polynomial utilities operating over the prime field.
//! The module provides deterministic dense arithmetic for trace and
//! constraint polynomials; no FFT is involved, the trace lengths handled by
//! the login engine keep the quadratic algorithms comfortably cheap.

use core::fmt;

use super::{FieldElement, FieldError, PrimeField};

/// Dense polynomial represented by coefficients in ascending order.
///
/// The zero polynomial is represented by a single zero coefficient.
/// Trailing zero coefficients beyond the true degree are tolerated
/// internally; [`Polynomial::degree`] always reports the highest non-zero
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<FieldElement>,
}

impl Polynomial {
    /// Constructs a polynomial from raw coefficients.
    ///
    /// An empty vector is normalised into the canonical zero polynomial.
    pub fn new(coefficients: Vec<FieldElement>) -> Self {
        if coefficients.is_empty() {
            return Self::zero();
        }
        Self { coefficients }
    }

    /// Returns the canonical zero polynomial.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![FieldElement::ZERO],
        }
    }

    /// Returns the coefficients starting from the constant term.
    pub fn coefficients(&self) -> &[FieldElement] {
        &self.coefficients
    }

    /// Evaluates the polynomial at the provided point using Horner's method.
    pub fn evaluate(&self, field: &PrimeField, point: FieldElement) -> FieldElement {
        let mut result = FieldElement::ZERO;
        for coeff in self.coefficients.iter().rev() {
            result = field.add(field.mul(result, point), *coeff);
        }
        result
    }

    /// Returns the degree of the polynomial.
    ///
    /// By convention the zero polynomial reports degree `0`; callers that
    /// need to distinguish it can use [`Polynomial::is_zero`].
    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .rposition(|coeff| !coeff.is_zero())
            .unwrap_or(0)
    }

    /// Returns `true` when every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(FieldElement::is_zero)
    }

    /// Adds two polynomials coefficient-wise.
    pub fn add(&self, field: &PrimeField, other: &Polynomial) -> Polynomial {
        let len = self.coefficients.len().max(other.coefficients.len());
        let mut coefficients = Vec::with_capacity(len);
        for index in 0..len {
            let lhs = self.coefficients.get(index).copied().unwrap_or_default();
            let rhs = other.coefficients.get(index).copied().unwrap_or_default();
            coefficients.push(field.add(lhs, rhs));
        }
        Polynomial::new(coefficients)
    }

    /// Multiplies two polynomials by dense coefficient convolution.
    ///
    /// The result length is the sum of the input lengths minus one.
    pub fn mul(&self, field: &PrimeField, other: &Polynomial) -> Polynomial {
        let len = self.coefficients.len() + other.coefficients.len() - 1;
        let mut coefficients = vec![FieldElement::ZERO; len];
        for (i, lhs) in self.coefficients.iter().enumerate() {
            if lhs.is_zero() {
                continue;
            }
            for (j, rhs) in other.coefficients.iter().enumerate() {
                let term = field.mul(*lhs, *rhs);
                coefficients[i + j] = field.add(coefficients[i + j], term);
            }
        }
        Polynomial::new(coefficients)
    }

    /// Multiplies every coefficient by a scalar.
    pub fn scale(&self, field: &PrimeField, scalar: FieldElement) -> Polynomial {
        let coefficients = self
            .coefficients
            .iter()
            .map(|coeff| field.mul(*coeff, scalar))
            .collect();
        Polynomial::new(coefficients)
    }

    /// Lagrange interpolation through a set of points with pairwise-distinct
    /// x-coordinates.
    ///
    /// The result evaluates to `y_i` exactly (field equality) at every input
    /// `x_i`.  An empty point set yields the zero polynomial.
    pub fn interpolate(
        field: &PrimeField,
        points: &[(FieldElement, FieldElement)],
    ) -> Result<Polynomial, PolynomialError> {
        for (i, (x_i, _)) in points.iter().enumerate() {
            for (x_j, _) in points.iter().skip(i + 1) {
                if x_i == x_j {
                    return Err(PolynomialError::DuplicateXCoordinate { x: x_i.as_u64() });
                }
            }
        }

        let mut result = Polynomial::zero();
        for (i, (x_i, y_i)) in points.iter().enumerate() {
            let mut numerator = Polynomial::new(vec![FieldElement::ONE]);
            let mut denominator = FieldElement::ONE;
            for (j, (x_j, _)) in points.iter().enumerate() {
                if i == j {
                    continue;
                }
                // (x - x_j)
                let factor = Polynomial::new(vec![field.neg(*x_j), FieldElement::ONE]);
                numerator = numerator.mul(field, &factor);
                denominator = field.mul(denominator, field.sub(*x_i, *x_j));
            }
            let weight = field
                .div(*y_i, denominator)
                .map_err(PolynomialError::Field)?;
            result = result.add(field, &numerator.scale(field, weight));
        }
        Ok(result)
    }
}

/// Errors emitted by polynomial routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolynomialError {
    /// Two interpolation points share an x-coordinate.
    DuplicateXCoordinate { x: u64 },
    /// Field arithmetic failed; indicates a logic bug in the caller.
    Field(FieldError),
}

impl fmt::Display for PolynomialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolynomialError::DuplicateXCoordinate { x } => {
                write!(f, "duplicate x-coordinate {} in interpolation input", x)
            }
            PolynomialError::Field(err) => write!(f, "field error: {}", err),
        }
    }
}

impl std::error::Error for PolynomialError {}

impl From<FieldError> for PolynomialError {
    fn from(err: FieldError) -> Self {
        PolynomialError::Field(err)
    }
}
