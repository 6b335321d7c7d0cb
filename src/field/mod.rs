//! Field arithmetic primitives for the `zklogin-stark` proof system.
//! Contains the runtime-configured prime field and polynomial utilities.

pub mod polynomial;
pub mod prime_field;

pub use polynomial::{Polynomial, PolynomialError};
pub use prime_field::{FieldElement, FieldError, PrimeField};
