use std::cmp::Ordering;

/// A total order over `T` which can be injected into ordered collections such as
/// [`BinaryHeap`](crate::collections::contiguous::BinaryHeap) and
/// [`SortedArraySet`](crate::collections::contiguous::SortedArraySet).
///
/// Any closure of the form `Fn(&T, &T) -> Ordering` is a Comparator.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders values by the reverse of their [`Ord`] implementation. A
/// [`BinaryHeap`](crate::collections::contiguous::BinaryHeap) using this order is a max-heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: Ord + ?Sized> Comparator<T> for ReverseOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Lifts a Comparator over `T` to one over `&T`, so that snapshots of references can be ordered
/// without cloning.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ByRef<'a, C>(pub &'a C);

impl<'a, 'b, T: ?Sized, C: Comparator<T>> Comparator<&'b T> for ByRef<'a, C> {
    fn compare(&self, a: &&'b T, b: &&'b T) -> Ordering {
        self.0.compare(a, b)
    }
}
