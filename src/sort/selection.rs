//! Selection sort on a copy of the input.

sort_impl!("selection_sort", selection_sort);

/// Returns a sorted copy of `v`, `v` itself is not modified.
///
/// Not stable, swapping the minimum into place can move an equal element past its twin.
pub fn selection_sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut v = v.to_vec();
    let len = v.len();

    for i in 0..len {
        let mut min_idx = i;
        for j in (i + 1)..len {
            if v[j] < v[min_idx] {
                min_idx = j;
            }
        }

        v.swap(i, min_idx);
    }

    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_untouched() {
        let input = vec![3, 1, 2];
        let sorted = selection_sort(&input);

        assert_eq!(input, [3, 1, 2]);
        assert_eq!(sorted, [1, 2, 3]);
    }

    #[test]
    fn not_stable() {
        // (key, tag) pairs compared on the key only.
        #[derive(Clone, Debug)]
        struct Keyed(i32, char);

        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Keyed {}
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let sorted = selection_sort(&[Keyed(2, 'a'), Keyed(2, 'b'), Keyed(1, 'c')]);
        let tags = sorted.iter().map(|k| k.1).collect::<String>();

        assert_eq!(tags, "cba");
    }
}
