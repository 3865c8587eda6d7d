#![cfg(test)]

use std::hash::{BuildHasher, Hash, Hasher};

/// A value which hashes to a hash chosen by the test, used to force collisions. Equality only
/// considers the wrapped value.
#[derive(Debug, Clone)]
pub struct Collide<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> Collide<T> {
    pub const fn new(hash: u64, value: T) -> Collide<T> {
        Collide { hash, value }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for Collide<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for Collide<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Collide<T> {}

/// A hasher that returns the last `u64` written to it, unchanged.
#[derive(Debug, Default)]
pub struct IdentityHasher {
    state: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.rotate_left(8) ^ u64::from(*byte);
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.state = value;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityHasherBuilder;

impl BuildHasher for IdentityHasherBuilder {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}
