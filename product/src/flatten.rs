//! Removal of one level of tuple nesting.

use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Composite item with exactly one level of nesting.
pub trait Nested<T> {
    /// Concatenates the parts in order.
    fn concat(self) -> Vec<T>;
}

impl<T> Nested<T> for (Vec<T>, Vec<T>) {
    fn concat(self) -> Vec<T> {
        let (mut head, tail) = self;
        head.extend(tail);
        head
    }
}

impl<T> Nested<T> for Vec<Vec<T>> {
    fn concat(self) -> Vec<T> {
        self.into_iter().flatten().collect()
    }
}

impl<T, const N: usize> Nested<T> for [Vec<T>; N] {
    fn concat(self) -> Vec<T> {
        self.into_iter().flatten().collect()
    }
}

/// Iterator returned by [`flatten`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Flatten<I, T> {
    iter: I,
    flat: PhantomData<fn() -> T>,
}

/// Lazily collapses each nested item into one flat tuple.
///
/// Deeper nesting is not touched; chain another `flatten` for it.
pub fn flatten<I, T>(iter: I) -> Flatten<I::IntoIter, T>
where
    I: IntoIterator,
    I::Item: Nested<T>,
{
    Flatten {
        iter: iter.into_iter(),
        flat: PhantomData,
    }
}

impl<I, T> Iterator for Flatten<I, T>
where
    I: Iterator,
    I::Item: Nested<T>,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Nested::<T>::concat)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, T> FusedIterator for Flatten<I, T>
where
    I: FusedIterator,
    I::Item: Nested<T>,
{
}
