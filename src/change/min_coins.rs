use crate::change::{validate_denominations, Composition};
use crate::error::{CoinError, Result};

/// Makes change for `amount` using the fewest possible coins.
///
/// This is the unbounded coin change problem: each denomination may be
/// used any number of times. The minimum count is computed bottom-up for
/// every amount from 1 to `amount`, recording which coin last improved
/// each entry, and one optimal breakdown is then read back by walking
/// those choices down to zero.
///
/// When several breakdowns share the minimal coin count, the returned
/// one favors denominations appearing earlier in the input: a later
/// denomination only displaces an earlier choice by strictly improving
/// on it.
///
/// # Examples
///
/// ```
/// use coinchange::min_coin_change;
///
/// // Greedy would spend 4 + 1 + 1 here; the true minimum is 3 + 3.
/// let change = min_coin_change(&[4, 3, 1], 6).unwrap();
/// assert_eq!(change.count(3), 2);
/// assert_eq!(change.coin_count(), 2);
/// ```
///
/// # Errors
///
/// * `InvalidDenomination` if any face value is zero
/// * `Unrepresentable` if no combination of the denominations sums to
///   `amount`
///
/// # Complexity
/// * Time: O(amount × number of denominations)
/// * Space: O(amount)
pub fn make_change(denominations: &[usize], amount: usize) -> Result<Composition> {
    validate_denominations(denominations)?;

    if amount == 0 {
        return Ok(Composition::new());
    }

    // cost[i]: fewest coins summing to i, None while unreachable.
    // choice[i]: the coin that last improved cost[i], for the walk back.
    let mut cost: Vec<Option<usize>> = vec![None; amount + 1];
    let mut choice: Vec<Option<usize>> = vec![None; amount + 1];
    cost[0] = Some(0);

    for i in 1..=amount {
        for &coin in denominations {
            if coin > i {
                continue;
            }
            if let Some(below) = cost[i - coin] {
                let candidate = below + 1;
                if cost[i].map_or(true, |best| candidate < best) {
                    cost[i] = Some(candidate);
                    choice[i] = Some(coin);
                }
            }
        }
    }

    if cost[amount].is_none() {
        return Err(CoinError::Unrepresentable(amount));
    }

    // cost[amount] is reachable, so every step of the chain below it
    // recorded a coin.
    let mut change = Composition::new();
    let mut remaining = amount;
    while remaining > 0 {
        let coin = choice[remaining].expect("reachable amount missing a recorded choice");
        change.push(coin);
        remaining -= coin;
    }

    Ok(change)
}
