/// Implemented by every search algorithm that takes part in a comparison.
pub trait Search {
    fn name() -> String;

    /// Whether the input must be sorted ascending for the result to be meaningful.
    fn requires_sorted() -> bool;

    fn search<T>(v: &[T], target: &T) -> Option<usize>
    where
        T: Ord;
}

/// Implemented by every sort algorithm that takes part in a comparison.
///
/// Unlike `slice::sort` the input is left untouched and a new sorted vector is returned.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &[T]) -> Vec<T>
    where
        T: Ord + Clone;
}

macro_rules! search_impl {
    ($name:expr, $search_fn:ident, $requires_sorted:expr) => {
        pub struct SearchImpl;

        impl $crate::Search for SearchImpl {
            fn name() -> String {
                $name.into()
            }

            fn requires_sorted() -> bool {
                $requires_sorted
            }

            #[inline]
            fn search<T>(v: &[T], target: &T) -> Option<usize>
            where
                T: Ord,
            {
                $search_fn(v, target)
            }
        }
    };
}

macro_rules! sort_impl {
    ($name:expr, $sort_fn:ident) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &[T]) -> Vec<T>
            where
                T: Ord + Clone,
            {
                $sort_fn(v)
            }
        }
    };
}

pub mod compare;
pub mod error;
pub mod measure;
pub mod patterns;
pub mod render;
pub mod search;
pub mod self_check;
pub mod sort;

pub use error::Error;
