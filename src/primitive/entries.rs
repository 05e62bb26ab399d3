use std::iter::Enumerate;

use crate::chain::Chain;
use crate::protocol::{Entry, Sequence};

/// Sequence of `(index, value)` pairs. Created by [`entries`].
#[derive(Debug, Clone)]
pub struct Entries<S> {
    input: S,
}

impl<S: Sequence> Sequence for Entries<S> {
    type Item = Entry<S::Item>;
    type Cursor<'a>
        = Enumerate<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.input.cursor().enumerate()
    }
}

/// Pairs each value of `input` with its zero-based traversal index.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::primitive::entries;
///
/// let indexed = entries(vec!["a", "b"]).to_array();
/// assert_eq!(indexed, vec![(0, "a"), (1, "b")]);
///
/// assert!(entries(None::<Vec<i32>>).is_empty());
/// ```
pub const fn entries<S: Sequence>(input: S) -> Chain<Entries<S>> {
    Chain::new(Entries { input })
}
