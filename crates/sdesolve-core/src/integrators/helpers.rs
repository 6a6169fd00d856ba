use crate::error::{Result, SolveError};
use crate::State;

/// Fails unless `v` has the same length as the state it was evaluated at.
pub fn ensure_dim(quantity: &'static str, v: &State, expected: usize, step: usize) -> Result<()> {
    if v.dim() == expected {
        Ok(())
    } else {
        Err(SolveError::DimensionMismatch {
            quantity,
            expected,
            found: v.dim(),
            step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dim() {
        assert!(ensure_dim("drift", &State::zeros(2), 2, 0).is_ok());
        match ensure_dim("diffusion", &State::zeros(1), 3, 4) {
            Err(SolveError::DimensionMismatch { quantity, expected, found, step }) => {
                assert_eq!((quantity, expected, found, step), ("diffusion", 3, 1, 4));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
