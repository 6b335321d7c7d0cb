//! Deterministic hashing primitives for the `zklogin-stark` engine.
//! Every commitment and Fiat–Shamir stream is anchored to Blake2s-256.

pub mod deterministic;

pub use deterministic::{hash, Blake2sXof, Hash, Hasher};
