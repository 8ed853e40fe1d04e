//! Change-making solvers and a timing harness for comparing them.
//!
//! Two solvers break a target amount into coins of a given denomination
//! set: a largest-first greedy heuristic and a dynamic programming
//! solver that is provably minimal in coin count. The [`bench`] module
//! times repeated solver invocations so the two can be compared.
//!
//! # Examples
//!
//! ```
//! use coinchange::{greedy_change, min_coin_change};
//!
//! // A non-canonical coin system where greedy overshoots.
//! let coins = [4, 3, 1];
//!
//! let greedy = greedy_change(&coins, 6).unwrap();
//! let optimal = min_coin_change(&coins, 6).unwrap();
//!
//! assert_eq!(greedy.coin_count(), 3); // 4 + 1 + 1
//! assert_eq!(optimal.coin_count(), 2); // 3 + 3
//! ```

pub mod bench;
pub mod change;
pub mod error;

pub use bench::{benchmark, DEFAULT_RUNS};
pub use change::{greedy_change, min_coin_change, Composition};
pub use error::{CoinError, Result};
