use super::Vector;
use crate::util::error::{CollectionError, ConcurrentStructuralChange, NOTHING_TO_REMOVE};

/// A fail-fast position within a [`Vector`], which can remove the element it last yielded.
///
/// A Cursor doesn't borrow its Vector, the Vector is passed to every call instead. If the Vector
/// is structurally modified by anything other than the Cursor, every following call returns
/// [`ConcurrentStructuralChange`].
///
/// # Examples
/// ```
/// # use scratch_collections::collections::contiguous::Vector;
/// let mut vec: Vector<u8> = (0..6).collect();
/// let mut cursor = vec.cursor();
/// while let Some(item) = cursor.next(&vec).unwrap() {
///     if item % 2 == 0 {
///         cursor.remove(&mut vec).unwrap();
///     }
/// }
/// assert_eq!(&*vec, &[1, 3, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    next: usize,
    last: Option<usize>,
    expected: u64,
}

impl Cursor {
    pub(crate) const fn new(expected: u64) -> Cursor {
        Cursor {
            next: 0,
            last: None,
            expected,
        }
    }

    /// Advances the cursor, returning the next element or [`None`] once the end is reached.
    pub fn next<'a, T>(
        &mut self,
        vec: &'a Vector<T>,
    ) -> Result<Option<&'a T>, ConcurrentStructuralChange> {
        vec.mods.check(self.expected)?;

        match vec.try_get(self.next) {
            Ok(item) => {
                self.last = Some(self.next);
                self.next += 1;
                Ok(Some(item))
            },
            Err(_) => Ok(None),
        }
    }

    /// Removes the element most recently returned by [`next`](Cursor::next).
    ///
    /// # Errors
    /// Returns [`ConcurrentStructuralChange`] if the Vector was modified elsewhere, or
    /// [`InvalidArgument`](crate::error::InvalidArgument) if there is no element to remove.
    pub fn remove<T>(&mut self, vec: &mut Vector<T>) -> Result<T, CollectionError> {
        vec.mods.check(self.expected)?;
        let index = self.last.take().ok_or(NOTHING_TO_REMOVE)?;

        let item = vec.try_remove(index)?;
        self.next = index;
        self.expected = vec.mods.get();
        Ok(item)
    }
}
