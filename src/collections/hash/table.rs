use std::cmp;
use std::hash::{BuildHasher, Hash};

/// The number of buckets allocated by the first insertion.
pub(crate) const MIN_BUCKETS: usize = 16;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 3;
const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// Hashes `item` with `hasher`, then folds the high bits into the low bits. Only the low bits
/// select a bucket, so this keeps hash functions with poor low bit entropy from piling every
/// element into a few buckets.
pub(crate) fn spread_hash<B: BuildHasher, Q: Hash + ?Sized>(hasher: &B, item: &Q) -> u64 {
    let hash = hasher.hash_one(item);
    let hash = hash ^ (hash >> 32);
    hash ^ (hash >> 16)
}

/// Masks a spread hash into `[0, buckets)`. `buckets` must be a power of two.
pub(crate) const fn bucket_index(hash: u64, buckets: usize) -> usize {
    (hash as usize) & (buckets - 1)
}

/// Returns true once `len` elements in `buckets` buckets have reached the load factor.
pub(crate) const fn should_grow(len: usize, buckets: usize) -> bool {
    len >= buckets / LOAD_FACTOR_DENOMINATOR * LOAD_FACTOR_NUMERATOR
}

/// The bucket count to move to when growing from `buckets`.
pub(crate) fn grown(buckets: usize) -> usize {
    cmp::max(buckets.saturating_mul(GROWTH_FACTOR), MIN_BUCKETS)
}

/// The smallest bucket count which can hold `cap` elements without reaching the load factor.
pub(crate) fn buckets_for(cap: usize) -> usize {
    let needed = cap.saturating_mul(LOAD_FACTOR_DENOMINATOR) / LOAD_FACTOR_NUMERATOR + 1;
    cmp::max(needed.next_power_of_two(), MIN_BUCKETS)
}
