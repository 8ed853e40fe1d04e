use crate::change::{validate_denominations, Composition};
use crate::error::{CoinError, Result};

/// Makes change for `amount` by always spending the largest usable coin.
///
/// The denominations are sorted largest-first internally, so the caller
/// may pass them in any order. The result is not guaranteed to use the
/// fewest coins: for non-canonical coin systems the largest-first rule
/// overshoots (see [`min_coin_change`](crate::min_coin_change) for the
/// exact solver).
///
/// # Examples
///
/// ```
/// use coinchange::greedy_change;
///
/// let change = greedy_change(&[50, 25, 10, 5, 2, 1], 113).unwrap();
/// assert_eq!(change.count(50), 2);
/// assert_eq!(change.total(), 113);
/// ```
///
/// # Errors
///
/// * `InvalidDenomination` if any face value is zero
/// * `NoProgress` if a positive remainder is smaller than every
///   denomination, which would otherwise loop forever
///
/// # Complexity
/// * Time: O(amount / smallest coin) picks, each scanning the coin list
/// * Space: O(1) beyond the returned composition
pub fn make_change(denominations: &[usize], amount: usize) -> Result<Composition> {
    validate_denominations(denominations)?;

    // Largest-first order is what makes the heuristic greedy; enforce it
    // here instead of trusting the caller. Duplicates add nothing.
    let mut coins = denominations.to_vec();
    coins.sort_unstable_by(|a, b| b.cmp(a));
    coins.dedup();

    let mut change = Composition::new();
    let mut remaining = amount;

    while remaining > 0 {
        // Rescan from the largest coin after every pick.
        match coins.iter().find(|&&coin| coin <= remaining) {
            Some(&coin) => {
                change.push(coin);
                remaining -= coin;
            }
            None => return Err(CoinError::NoProgress(remaining)),
        }
    }

    Ok(change)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_system() {
        let change = make_change(&[50, 25, 10, 5, 2, 1], 113).unwrap();
        let expected: Composition = [(50, 2), (10, 1), (2, 1), (1, 1)].into_iter().collect();
        assert_eq!(change, expected);
        assert_eq!(change.total(), 113);
    }

    #[test]
    fn test_suboptimal_on_non_canonical_system() {
        // 4 + 1 + 1 instead of the optimal 3 + 3.
        let change = make_change(&[4, 3, 1], 6).unwrap();
        let expected: Composition = [(4, 1), (1, 2)].into_iter().collect();
        assert_eq!(change, expected);
        assert_eq!(change.coin_count(), 3);
    }

    #[test]
    fn test_zero_amount() {
        let change = make_change(&[50, 25, 10], 0).unwrap();
        assert!(change.is_empty());
    }

    #[test]
    fn test_unsorted_input_is_sorted_internally() {
        let sorted = make_change(&[50, 25, 10, 5, 2, 1], 113).unwrap();
        let shuffled = make_change(&[2, 50, 1, 10, 25, 5], 113).unwrap();
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn test_stalls_instead_of_looping() {
        // Remainder 1 is below the only coin; the naive loop never ends.
        assert_eq!(make_change(&[2], 3), Err(CoinError::NoProgress(1)));
    }

    #[test]
    fn test_empty_denominations() {
        assert_eq!(make_change(&[], 5), Err(CoinError::NoProgress(5)));
        assert!(make_change(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn test_zero_denomination_rejected() {
        assert_eq!(make_change(&[0, 1], 5), Err(CoinError::InvalidDenomination));
    }

    #[test]
    fn test_idempotent() {
        let coins = [50, 25, 10, 5, 2, 1];
        assert_eq!(make_change(&coins, 999), make_change(&coins, 999));
    }
}
