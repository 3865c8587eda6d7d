use std::fmt::{self, Debug, Display, Formatter};

/// Prints the contained string without quotes when used with `{:?}`.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Debug-formats the items of a cloneable iterator as a list, for use as a struct field.
pub struct DebugIter<I>(pub I);

impl<I> Debug for DebugIter<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Writes `items` as `[a, b, c]` using their [`Display`] implementations.
pub fn write_list<I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "[")?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

/// Writes `entries` as `{k=v, k=v}` using their [`Display`] implementations.
pub fn write_map<I, K, V>(f: &mut Formatter<'_>, entries: I) -> fmt::Result
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    write!(f, "{{")?;
    for (index, (key, value)) in entries.into_iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{key}={value}")?;
    }
    write!(f, "}}")
}
