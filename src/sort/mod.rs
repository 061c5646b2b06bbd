// O(n^2) comparisons regardless of input.
pub mod selection;

// O(n log n) on average, crafted inputs can still force O(n^2).
pub mod quicksort;
