//! Basic recursive merge sort. Splits the slice in halves, sorts them and merges them back
//! through a pair of auxiliary buffers scoped to the merge step. Always O(n log n) comparisons,
//! O(n) auxiliary space.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

sort_impl!("rust_merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    merge_sort(v, &mut is_less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut v[..mid], is_less);
    merge_sort(&mut v[mid..], is_less);
    merge(v, mid, is_less);
}

/// Merges the two sorted halves `v[..mid]` and `v[mid..]`.
///
/// Both halves are copied into auxiliary buffers and interleaved back into `v`, the left run
/// winning ties so that equal elements keep their input order. The buffers never own the
/// elements, `MergeState` tracks which of them only live in the buffers and copies them back
/// even if a comparison panics, so `v` always holds a permutation of its input.
fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let v_ptr = v.as_mut_ptr();

    let mut left_buf = Vec::with_capacity(mid);
    let mut right_buf = Vec::with_capacity(len - mid);

    // SAFETY: Both buffers were allocated with exactly the capacity their half of `v` needs and
    // their len stays zero, so they deallocate without dropping elements. All pointer reads and
    // writes stay inside `v` and the buffers, and `MergeState` restores the unconsumed rest of
    // both runs into the remaining gap of `v` on every exit path, unwinding included. `T` is
    // not zero-sized, callers check that.
    unsafe {
        ptr::copy_nonoverlapping(v_ptr, left_buf.as_mut_ptr(), mid);
        ptr::copy_nonoverlapping(v_ptr.add(mid), right_buf.as_mut_ptr(), len - mid);

        let mut state = MergeState {
            left: left_buf.as_mut_ptr(),
            left_end: left_buf.as_mut_ptr().add(mid),
            right: right_buf.as_mut_ptr(),
            right_end: right_buf.as_mut_ptr().add(len - mid),
            dest: v_ptr,
        };

        while state.left < state.left_end && state.right < state.right_end {
            // The left run wins ties, take from it unless right is strictly less.
            let consume = if !is_less(&*state.right, &*state.left) {
                &mut state.left
            } else {
                &mut state.right
            };

            ptr::copy_nonoverlapping(*consume, state.dest, 1);
            *consume = (*consume).add(1);
            state.dest = (state.dest).add(1);
        }

        // Dropping `state` copies the rest of whichever run is not yet exhausted.
    }
}

struct MergeState<T> {
    left: *mut T,
    left_end: *mut T,
    right: *mut T,
    right_end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeState<T> {
    fn drop(&mut self) {
        // SAFETY: `dest` has exactly as much room left as both runs together still hold.
        unsafe {
            let left_rest = self.left_end.offset_from(self.left) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, left_rest);

            let right_rest = self.right_end.offset_from(self.right) as usize;
            ptr::copy_nonoverlapping(self.right, self.dest.add(left_rest), right_rest);
        }
    }
}
