use std::iter::FusedIterator;

use crate::chain::Chain;
use crate::protocol::Sequence;

/// Sequence produced by [`zip`].
#[derive(Debug, Clone)]
pub struct Zip<S> {
    inputs: Vec<S>,
}

impl<S: Sequence> Sequence for Zip<S> {
    type Item = Vec<S::Item>;
    type Cursor<'a>
        = ZipCursor<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ZipCursor {
            lanes: self.inputs.iter().map(Sequence::cursor).collect(),
            exhausted: self.inputs.is_empty(),
        }
    }
}

/// Cursor over a [`Zip`] sequence.
pub struct ZipCursor<C> {
    lanes: Vec<C>,
    exhausted: bool,
}

impl<C: Iterator> Iterator for ZipCursor<C> {
    type Item = Vec<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let width = self.lanes.len();
        let mut row = Vec::with_capacity(width);
        for lane in &mut self.lanes {
            let Some(value) = lane.next() else {
                trace_event!(
                    target: "lazy_iterable::zip",
                    width,
                    "input exhausted, zip finished"
                );
                self.exhausted = true;
                return None;
            };
            row.push(value);
        }
        Some(row)
    }
}

impl<C: Iterator> FusedIterator for ZipCursor<C> {}

/// Combines the inputs positionally, one value from each per row.
///
/// The sequence ends as soon as any input is exhausted. Absent inputs are
/// empty, so a single `None` makes the whole result empty.
///
/// Zipping no inputs at all yields no rows. There is no input to run out,
/// so the alternative would be an endless run of empty rows, which no
/// terminal operation could finish.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::zip;
///
/// let rows = zip([vec![1, 2, 3], vec![4, 5]]);
/// assert_eq!(rows.to_array(), vec![vec![1, 4], vec![2, 5]]);
///
/// let with_absent = zip([Some(vec![1, 2]), None]);
/// assert!(with_absent.to_array().is_empty());
///
/// assert!(zip(Vec::<Vec<i32>>::new()).is_empty());
/// ```
pub fn zip<I>(inputs: I) -> Chain<Zip<I::Item>>
where
    I: IntoIterator,
    I::Item: Sequence,
{
    Chain::new(Zip {
        inputs: inputs.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::repeat;
    use crate::protocol::Either;
    use rstest::rstest;

    #[rstest]
    fn empty_lane_yields_nothing() {
        let rows = zip([vec![1, 2], vec![], vec![3, 4]]);
        assert!(rows.to_array().is_empty());
    }

    #[rstest]
    fn no_inputs_yields_nothing() {
        assert!(zip(Vec::<Vec<i32>>::new()).to_array().is_empty());
    }

    #[rstest]
    fn infinite_lane_is_bounded_by_finite_one() {
        let rows = zip([Either::Left(repeat(2, None)), Either::Right(vec![1, 3])]);
        assert_eq!(rows.to_array(), vec![vec![2, 1], vec![2, 3]]);
    }
}
