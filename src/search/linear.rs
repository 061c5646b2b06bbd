//! Plain front to back scan.

search_impl!("linear_search", linear_search, false);

/// Returns the index of the first element equal to `target`, or `None` if there is none.
#[inline]
pub fn linear_search<T>(v: &[T], target: &T) -> Option<usize>
where
    T: Ord,
{
    for (i, elem) in v.iter().enumerate() {
        if elem == target {
            return Some(i);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(linear_search(&[7, 3, 7, 3], &3), Some(1));
        assert_eq!(linear_search(&[7, 3, 7, 3], &7), Some(0));
    }

    #[test]
    fn empty() {
        assert_eq!(linear_search::<i32>(&[], &0), None);
    }
}
