//! Textbook binary search over an inclusive `[lo, hi]` range.

use std::cmp::Ordering;

search_impl!("binary_search", binary_search, true);

/// Returns the index of an element equal to `target` in the ascending sorted `v`, or `None`.
///
/// If `v` is not sorted the result is unspecified, but the function still terminates and never
/// indexes out of bounds. With duplicates any matching index may be returned.
#[inline]
pub fn binary_search<T>(v: &[T], target: &T) -> Option<usize>
where
    T: Ord,
{
    if v.is_empty() {
        return None;
    }

    let mut lo = 0;
    let mut hi = v.len() - 1;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;

        match v[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => {
                // `hi = mid - 1` would underflow for targets below v[0].
                if mid == 0 {
                    return None;
                }
                hi = mid - 1;
            }
        }
    }

    None
}
