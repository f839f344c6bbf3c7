//! Basic heapsort. Treats the slice as an implicit binary max-heap, children of node i at
//! 2i + 1 and 2i + 2. Builds the heap bottom-up, then repeatedly moves the root behind the
//! shrinking heap boundary. Always O(n log n), O(1) auxiliary space.

use std::cmp::Ordering;

sort_impl!("rust_heap_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    heapsort(v, &mut is_less);
}

fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Build the max-heap bottom-up, starting at the last node that has a child.
    for i in (0..len / 2).rev() {
        sift_down(v, len, i, is_less);
    }

    // Swap the current maximum behind the live heap boundary and repair the rest.
    for i in (1..len).rev() {
        v.swap(0, i);
        sift_down(v, i, 0, is_less);
    }
}

/// Restores the max-heap property for the subtree rooted at `node`, considering only the first
/// `heap_len` elements of `v` as part of the heap.
fn sift_down<T, F>(v: &mut [T], heap_len: usize, node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let left = 2 * node + 1;
    let right = left + 1;

    // Left child is considered first, the right one only wins if it is strictly greater than
    // the current largest.
    let mut largest = node;
    if left < heap_len && is_less(&v[largest], &v[left]) {
        largest = left;
    }
    if right < heap_len && is_less(&v[largest], &v[right]) {
        largest = right;
    }

    if largest != node {
        v.swap(node, largest);
        sift_down(v, heap_len, largest, is_less);
    }
}
