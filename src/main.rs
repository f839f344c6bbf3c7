//! Command-line harness that times each sorting algorithm on the same random input.
//!
//! Takes an optional positional argument, the number of items to sort. Every algorithm sorts a
//! fresh copy of one shared unsorted snapshot, so all of them see the identical input.

use std::cmp::Ordering;
use std::env;
use std::process;
use std::time::Instant;

use sort_bench::{patterns, stable, unstable, Sort};

const DEFAULT_LEN: usize = 1000;

struct RustStdUnstable {}

impl Sort for RustStdUnstable {
    fn name() -> String {
        "rust_std_unstable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        arr.sort_unstable();
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        arr.sort_unstable_by(compare);
    }
}

fn parse_len_arg() -> usize {
    let args = env::args().collect::<Vec<_>>();

    match args.get(1) {
        None => DEFAULT_LEN,
        Some(raw) => match raw.parse::<usize>() {
            Ok(len) if len > 0 => len,
            _ => {
                eprintln!("Invalid number of items: {raw}");
                eprintln!("Usage: sort_bench [<number of items to sort>]");
                process::exit(1);
            }
        },
    }
}

fn run_sort<S: Sort>(unsorted: &[i32], timings: &mut Vec<(String, u128)>) {
    let name = S::name();

    println!("---- {name} ----");
    println!("Sorting {} items with {name}...", unsorted.len());

    let mut v = unsorted.to_vec();

    let start = Instant::now();
    S::sort(&mut v);
    let elapsed_ms = start.elapsed().as_millis();

    debug_assert!(v.windows(2).all(|w| w[0] <= w[1]));

    println!("Sorted");
    println!("Elapsed time: {elapsed_ms}ms");
    println!();

    timings.push((name, elapsed_ms));
}

fn main() {
    let len = parse_len_arg();

    // One snapshot per process, every algorithm run starts from its own copy of it.
    let unsorted = patterns::random_uniform(len, 0..10);

    let mut timings: Vec<(String, u128)> = Vec::new();

    run_sort::<stable::bubble::SortImpl>(&unsorted, &mut timings);
    run_sort::<unstable::quick::SortImpl>(&unsorted, &mut timings);
    run_sort::<unstable::selection::SortImpl>(&unsorted, &mut timings);
    run_sort::<stable::insertion::SortImpl>(&unsorted, &mut timings);
    run_sort::<stable::merge::SortImpl>(&unsorted, &mut timings);
    run_sort::<unstable::heap::SortImpl>(&unsorted, &mut timings);
    run_sort::<RustStdUnstable>(&unsorted, &mut timings);

    println!("Number of items to sort: {len}");
    for (name, elapsed_ms) in &timings {
        println!("Algorithm: {name}, Time: {elapsed_ms}ms");
    }
}
