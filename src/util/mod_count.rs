use super::error::ConcurrentStructuralChange;

/// A monotonically increasing counter of structural modifications. Cursors capture the count when
/// created and compare it before every step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ModCount(u64);

impl ModCount {
    pub const fn new() -> ModCount {
        ModCount(0)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Returns an error if the count has moved away from `expected`.
    pub const fn check(self, expected: u64) -> Result<(), ConcurrentStructuralChange> {
        if self.0 == expected {
            Ok(())
        } else {
            Err(ConcurrentStructuralChange {
                expected,
                found: self.0,
            })
        }
    }
}
