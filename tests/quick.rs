use sort_test_tools::instantiate_sort_tests;

use sort_bench::unstable::quick::SortImpl;

instantiate_sort_tests!(SortImpl);
