use derive_more::IsVariant;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// The arena indices of the first and last node, if there are any.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum Ends {
    #[default]
    Empty,
    Full { head: usize, tail: usize },
}

impl Ends {
    /// Builds the ends of a chain from a possibly missing head and tail. A chain without either
    /// end is empty.
    pub const fn from_parts(head: Option<usize>, tail: Option<usize>) -> Ends {
        match (head, tail) {
            (Some(head), Some(tail)) => Ends::Full { head, tail },
            _ => Ends::Empty,
        }
    }

    pub const fn head(self) -> Option<usize> {
        match self {
            Ends::Empty => None,
            Ends::Full { head, .. } => Some(head),
        }
    }

    pub const fn tail(self) -> Option<usize> {
        match self {
            Ends::Empty => None,
            Ends::Full { tail, .. } => Some(tail),
        }
    }
}
