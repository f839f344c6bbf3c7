//! Scenario tests that run all algorithms against the same inputs. The per-algorithm property
//! suites live in the other files of this directory.

use sort_bench::{patterns, stable, unstable};

const SORT_FNS: [(&str, fn(&mut [i32])); 6] = [
    ("bubble", stable::bubble::sort::<i32>),
    ("insertion", stable::insertion::sort::<i32>),
    ("merge", stable::merge::sort::<i32>),
    ("selection", unstable::selection::sort::<i32>),
    ("quick", unstable::quick::sort::<i32>),
    ("heap", unstable::heap::sort::<i32>),
];

fn assert_all_sorts_agree(input: &[i32]) {
    let mut expected = input.to_vec();
    expected.sort();

    for (name, sort_fn) in SORT_FNS {
        let mut v = input.to_vec();
        sort_fn(&mut v);
        assert_eq!(v, expected, "algorithm: {name}");
    }
}

#[test]
fn cross_algorithm_agreement() {
    assert_all_sorts_agree(&[]);
    assert_all_sorts_agree(&[1]);
    assert_all_sorts_agree(&patterns::random(1_000));
    assert_all_sorts_agree(&patterns::random_uniform(1_000, 0..10));
    assert_all_sorts_agree(&patterns::ascending(1_000));
    assert_all_sorts_agree(&patterns::descending(1_000));
    assert_all_sorts_agree(&patterns::pipe_organ(1_000));
}

#[test]
fn known_small_input() {
    for (name, sort_fn) in SORT_FNS {
        let mut v = [5, 3, 8, 3, 1];
        sort_fn(&mut v);
        assert_eq!(v, [1, 3, 3, 5, 8], "algorithm: {name}");
    }
}

#[test]
fn presorted_input_unchanged() {
    for (name, sort_fn) in SORT_FNS {
        let mut v = [1, 2, 3, 4, 5];
        sort_fn(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5], "algorithm: {name}");
    }
}

#[test]
fn reverse_sorted_input() {
    // Reverse order is the degenerate-partition case for last-element pivot quicksort, the
    // result must still be correct for every algorithm.
    for (name, sort_fn) in SORT_FNS {
        let mut v = [5, 4, 3, 2, 1];
        sort_fn(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5], "algorithm: {name}");
    }

    let reversed = patterns::descending(2_048);
    assert_all_sorts_agree(&reversed);
}

#[test]
fn stable_sorts_keep_tagged_duplicates_in_order() {
    macro_rules! check_stable {
        ($sort_module:path) => {{
            use $sort_module as the_sort;

            let mut v = vec![(5, 'a'), (5, 'b'), (3, 'a'), (5, 'c'), (3, 'b')];
            the_sort::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
            assert_eq!(v, [(3, 'a'), (3, 'b'), (5, 'a'), (5, 'b'), (5, 'c')]);
        }};
    }

    check_stable!(sort_bench::stable::bubble);
    check_stable!(sort_bench::stable::insertion);
    check_stable!(sort_bench::stable::merge);
}

#[test]
fn bubble_sort_has_no_early_exit() {
    // Pre-sorted input must still go through every pass, n * (n - 1) / 2 comparisons total.
    let mut comp_count = 0u64;

    let mut v = patterns::ascending(100);
    stable::bubble::sort_by(&mut v, |a, b| {
        comp_count += 1;
        a.cmp(b)
    });

    assert_eq!(comp_count, (100 * 99) / 2);
}

#[test]
fn quicksort_degenerates_on_presorted_input() {
    // With the last element as pivot every partition of a pre-sorted range is maximally
    // lopsided, n * (n - 1) / 2 comparisons total.
    let mut comp_count = 0u64;

    let mut v = patterns::ascending(100);
    unstable::quick::sort_by(&mut v, |a, b| {
        comp_count += 1;
        a.cmp(b)
    });

    assert_eq!(comp_count, (100 * 99) / 2);
}
