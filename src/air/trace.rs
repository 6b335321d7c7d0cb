//! Execution trace container and deterministic witness expansion.

use crate::field::{FieldElement, PrimeField};

use super::{AirError, Transition};

/// Immutable single-column execution trace.
///
/// Holds `steps + 1` values: the secret seed followed by one value per
/// transition.  Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    values: Vec<FieldElement>,
}

impl Trace {
    /// Returns the number of stored values (`transitions + 1`).
    pub fn length(&self) -> usize {
        self.values.len()
    }

    /// Returns the number of transitions the trace witnesses.
    pub fn transitions(&self) -> usize {
        self.values.len() - 1
    }

    /// Returns the value at one step, if in range.
    pub fn get(&self, step: usize) -> Option<FieldElement> {
        self.values.get(step).copied()
    }

    /// Returns the boundary value at the final step.
    pub fn final_value(&self) -> FieldElement {
        // build_trace guarantees a non-empty column.
        self.values.last().copied().unwrap_or_default()
    }

    /// Returns the full column.
    pub fn as_slice(&self) -> &[FieldElement] {
        &self.values
    }
}

/// Expands a secret into an execution trace by repeated application of the
/// transition relation.
///
/// `trace[0] = secret`, `trace[i + 1] = transition(trace[i])`.  The length
/// invariant `steps + 1` is checked before the trace is released to the
/// commitment layer.
pub fn build_trace<T: Transition>(
    field: &PrimeField,
    secret: FieldElement,
    transition: &T,
    steps: usize,
) -> Result<Trace, AirError> {
    if steps == 0 {
        return Err(AirError::EmptyTrace);
    }
    let mut values = Vec::with_capacity(steps + 1);
    values.push(secret);
    for index in 0..steps {
        let next = transition.apply(field, values[index]);
        values.push(next);
    }
    if values.len() != steps + 1 {
        return Err(AirError::LengthMismatch {
            expected: steps + 1,
            actual: values.len(),
        });
    }
    Ok(Trace { values })
}
