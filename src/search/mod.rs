// O(n), works on any input.
pub mod linear;

// O(log n), needs the input sorted ascending.
pub mod binary;
