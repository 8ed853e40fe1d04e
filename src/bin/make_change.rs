use coinchange::{benchmark, greedy_change, min_coin_change, Result, DEFAULT_RUNS};

fn main() -> Result<()> {
    println!("Testing coin change algorithms where greedy gives optimal result:\n");

    let coins = [50, 25, 10, 5, 2, 1];
    println!("{}", greedy_change(&coins, 113)?);
    println!("{}", min_coin_change(&coins, 113)?);

    println!("\nTesting coin change algorithms where greedy fails:\n");

    let coins = [4, 3, 1];
    println!("{}", greedy_change(&coins, 6)?);
    println!("{}", min_coin_change(&coins, 6)?);

    println!("\nBenchmarking Greedy vs Dynamic Programming:\n");

    let coins = [50, 25, 10, 5, 2, 1];
    let amounts = [10, 50, 100, 500, 1_000, 5_000, 10_000];

    let greedy_times = benchmark(greedy_change, &amounts, &coins, DEFAULT_RUNS);
    let dp_times = benchmark(min_coin_change, &amounts, &coins, DEFAULT_RUNS);

    println!("Change | Greedy time (s) | DP time (s)");
    println!("{}", "-".repeat(40));

    for &amount in &amounts {
        println!(
            "{:6} | {:14.8} | {:10.8}",
            amount, greedy_times[&amount], dp_times[&amount]
        );
    }

    Ok(())
}
