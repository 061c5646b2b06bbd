//! Provides the random input sequences for the comparisons, and a set of shaped patterns useful
//! for testing the algorithms. Currently limited to i32 values.

use std::env;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::{Lazy, OnceCell};
use rand::distributions::Uniform;
use rand::prelude::*;

use crate::Error;

/// Set to a u64 to make every generated sequence reproducible.
pub const SEED_ENV_VAR: &str = "BENCH_SEED";

/// Upper bound of the generated values, if the caller has no reason to pick another one.
pub const DEFAULT_MAX_VALUE: i32 = 10_000;

// --- Public ---

/// `len` values drawn uniformly from `[0, max_value]`.
///
/// Successive calls are independent draws from one process wide generator, see
/// [`random_init_seed`] for how it is seeded.
pub fn generate_sequence(len: usize, max_value: i32) -> Result<Vec<i32>, Error> {
    let mut rng = SHARED_RNG.lock().unwrap_or_else(PoisonError::into_inner);

    generate_sequence_with(&mut *rng, len, max_value)
}

/// Same as [`generate_sequence`] but draws from `rng`, so tests can pin the seed without touching
/// the shared generator.
pub fn generate_sequence_with<R: Rng>(
    rng: &mut R,
    len: usize,
    max_value: i32,
) -> Result<Vec<i32>, Error> {
    if max_value < 0 {
        return Err(Error::InvalidRange { max_value });
    }

    let dist = Uniform::new_inclusive(0, max_value);

    Ok((0..len).map(|_| rng.sample(dist)).collect())
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    with_shared_rng(|rng| (0..len).map(|_| rng.gen::<i32>()).collect())
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    // Abstracting over ranges in Rust :(
    let dist: Uniform<i32> = range.into();

    with_shared_rng(|rng| (0..len).map(|_| rng.sample(dist)).collect())
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    with_shared_rng(|rng| {
        for chunk in vals.chunks_mut(chunk_len) {
            if rng.gen::<bool>() {
                chunk.sort_unstable();
            } else {
                chunk.sort_unstable_by(|a, b| b.cmp(a));
            }
        }
    });

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);
    let (first_half, second_half) = vals.split_at_mut(len / 2);

    first_half.sort_unstable();
    second_half.sort_unstable_by(|a, b| b.cmp(a));

    vals
}

/// The seed of the shared generator, fixed for the lifetime of the process.
///
/// Taken from [`SEED_ENV_VAR`] if it holds a valid u64, random otherwise. Either way it is logged
/// so a run can be repeated.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        let pinned = env::var(SEED_ENV_VAR)
            .ok()
            .and_then(|val| val.trim().parse::<u64>().ok());

        let seed = pinned.unwrap_or_else(|| thread_rng().gen());
        tracing::info!(seed, pinned = pinned.is_some(), "seeded input generator");

        seed
    })
}

/// A fresh generator seeded with [`random_init_seed`], independent of the shared one.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// --- Private ---

static SHARED_RNG: Lazy<Mutex<StdRng>> = Lazy::new(|| Mutex::new(seeded_rng()));

fn with_shared_rng<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    // A panic while holding the lock can't leave the generator in a broken state.
    let mut rng = SHARED_RNG.lock().unwrap_or_else(PoisonError::into_inner);

    f(&mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_within_range() {
        let v = generate_sequence(1_000, 7).unwrap();

        assert_eq!(v.len(), 1_000);
        assert!(v.iter().all(|x| (0..=7).contains(x)));
    }

    #[test]
    fn zero_upper_bound() {
        assert_eq!(generate_sequence(5, 0).unwrap(), [0; 5]);
    }

    #[test]
    fn negative_upper_bound() {
        assert!(matches!(
            generate_sequence(5, -1),
            Err(Error::InvalidRange { max_value: -1 })
        ));
    }

    #[test]
    fn injected_seed_is_reproducible() {
        let a = generate_sequence_with(&mut StdRng::seed_from_u64(7), 64, 100).unwrap();
        let b = generate_sequence_with(&mut StdRng::seed_from_u64(7), 64, 100).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn successive_draws_differ() {
        let a = generate_sequence(64, i32::MAX).unwrap();
        let b = generate_sequence(64, i32::MAX).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn pipe_organ_shape() {
        let v = pipe_organ(101);
        let (up, down) = v.split_at(50);

        assert!(up.windows(2).all(|w| w[0] <= w[1]));
        assert!(down.windows(2).all(|w| w[0] >= w[1]));
    }
}
