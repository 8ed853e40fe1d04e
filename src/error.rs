use thiserror::Error;

/// Errors returned by the change-making solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoinError {
    /// The denomination set contains a zero face value.
    #[error("invalid denomination: coin face values must be positive")]
    InvalidDenomination,

    /// No combination of the given denominations sums to the target.
    #[error("no combination of the given denominations sums to {0}")]
    Unrepresentable(usize),

    /// The greedy scan found no denomination that fits the remainder.
    #[error("greedy selection stalled with {0} remaining")]
    NoProgress(usize),
}

/// Result type for change-making operations.
pub type Result<T> = std::result::Result<T, CoinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoinError::Unrepresentable(3).to_string(),
            "no combination of the given denominations sums to 3"
        );
        assert_eq!(
            CoinError::NoProgress(1).to_string(),
            "greedy selection stalled with 1 remaining"
        );
        assert!(CoinError::InvalidDenomination
            .to_string()
            .contains("positive"));
    }
}
