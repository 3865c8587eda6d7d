use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::collections::contiguous::Vector;
use crate::util::error::CapacityOverflow;
use crate::util::fmt::{DebugIter, write_list};
use crate::util::result::ResultExtension;

/// A fixed-size block of memory sized at runtime, similar to a [`Box<[T]>`](Box<T>). This is the
/// storage that every contiguous collection in this crate is built on.
///
/// An `Array<MaybeUninit<T>>` can be reallocated with [`realloc`](Array::realloc), which is how
/// the variable size collections grow.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* The global allocator may be able to grow the allocation in place.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0, without allocating.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);

        Array {
            ptr: Array::<MaybeUninit<T>>::make_ptr(layout),
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array with `size` elements, each produced by calling `f` with its index.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn from_fn<F: FnMut(usize) -> T>(size: usize, mut f: F) -> Array<T> {
        let mut arr = Array::new_uninit(size);

        for (index, slot) in arr.iter_mut().enumerate() {
            slot.write(f(index));
        }

        // SAFETY: Every slot has just been written. If f panics, the partially initialized Array
        // of MaybeUninit is dropped without dropping any T, which leaks but is sound.
        unsafe { arr.assume_init() }
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`, so that it can be reallocated. Values are
    /// not dropped by the returned Array.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = (self.ptr, self.size);
        mem::forget(self);

        Array {
            ptr: ptr.cast(),
            size,
            _phantom: PhantomData,
        }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: Zero-sized layouts have been guarded against.
            let raw_ptr = unsafe { alloc::alloc(layout) };
            NonNull::new(raw_ptr.cast()).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Array<T> {
        Array::from_fn(count, |_| T::default())
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = (self.ptr, self.size);
        mem::forget(self);

        Array {
            ptr: ptr.cast(),
            size,
            _phantom: PhantomData,
        }
    }

    /// Reallocate the Array to have size equal to `new_size`, with new locations uninitialized.
    /// Values beyond `new_size` are discarded without being dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_size: usize) {
        if new_size == self.size {
            return;
        }

        log::trace!(
            "reallocating array of {} from {} to {} elements",
            std::any::type_name::<T>(),
            self.size,
            new_size,
        );

        let new_layout = Self::make_layout(new_size);
        let old_layout = Self::make_layout(self.size);

        self.ptr = match (old_layout.size(), new_layout.size()) {
            // Zero-sized types and empty Arrays never own an allocation.
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: The pointer was allocated by the global allocator with old_layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) };
                NonNull::dangling()
            },
            (_, new_bytes) => {
                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // size is > 0 and has been checked not to overflow isize::MAX by make_layout.
                let raw_ptr = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_bytes)
                };
                NonNull::new(raw_ptr.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };
        self.size = new_size;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size values are initialized and the slice is entirely contained within the
        // allocation. They won't be accessed again.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size elements, all of which are initialized. The borrow checker prevents
        // mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the borrow checker prevents any other access for the lifetime
        // of the slice.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array::from(iter.into_iter().collect::<Vector<T>>())
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_fn(self.size, |index| self[index].clone())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &DebugIter(self.iter()))
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Display> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}
