//! Lazy cartesian products over iterators and repeatable factories.
//!
//! Combinations are produced one at a time, in lexicographic order with the
//! rightmost position varying fastest, and no input is materialized unless
//! it has to be replayed:
//!
//! - the first source is walked exactly once, so it can be any one-shot
//!   iterator, including an unbounded one;
//! - later sources are replayed once per combination of the positions before
//!   them. Pass a [`factory`] there to replay without buffering; a plain
//!   [`source()`] is drained into a buffer when the product is built.
//!
//! ```
//! use lazy_product::prelude::*;
//!
//! let rows = product(vec![source(0..), factory(|| [2, 3])], 1)?
//!     .take(4)
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(rows, vec![vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3]]);
//! # Ok::<(), LimitError>(())
//! ```
//!
//! At most [`MAX_GROUPED`] sources can be combined, and the repeat factor
//! is bounded the same way. Exceeding either returns a [`LimitError`]
//! before any source is touched.

use std::fmt;

pub mod arity;
pub mod builder;
pub mod error;
pub mod flatten;
pub mod grouped;
pub mod repeat;
pub mod source;

pub use arity::Rows;
pub use builder::ProductBuilder;
pub use builder::Reusable;
pub use error::LimitError;
pub use error::LimitKind;
pub use grouped::MAX_GROUPED;
pub use source::factory;
pub use source::source;
pub use source::Provider;
pub use source::Source;

pub mod prelude {
    pub use crate::product;
    pub use crate::IntoProduct;
    pub use crate::LimitError;
    pub use crate::ProductBuilder;
    pub use crate::Source;
    pub use crate::{factory, source};
}

/// Lazy sequence of flat tuples returned by [`product`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Product<'a, T> {
    rows: Rows<'a, T>,
}

impl<T> Iterator for Product<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next()
    }
}

impl<T> fmt::Debug for Product<'_, T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Product").finish_non_exhaustive()
    }
}

/// Cartesian product of `sources`, concatenated with themselves `repeat`
/// times.
///
/// Equivalent to the eager cartesian product of the same values, except
/// that sources may be factories and nothing is computed ahead of the
/// caller pulling it. Items of a source are passed through untouched, so a
/// source of `Result`s surfaces its errors in the tuples it contributes to.
pub fn product<'a, T: Clone + 'a>(sources: Vec<Source<'a, T>>, repeat: usize) -> error::Result<Product<'a, T>> {
    repeat::check(sources.len(), repeat)?;
    let providers = source::normalize(sources, repeat > 1);
    let rows = repeat::repeated(&providers, repeat)?;
    Ok(Product { rows })
}

/// Conversion into a [`Product`].
pub trait IntoProduct<'a> {
    type Item;
    fn into_product(self) -> error::Result<Product<'a, Self::Item>>;
}

impl<'a, T: Clone + 'a> IntoProduct<'a> for Vec<Vec<T>> {
    type Item = T;

    fn into_product(self) -> error::Result<Product<'a, T>> {
        product(self.into_iter().map(Source::from).collect(), 1)
    }
}

impl<'a, T: Clone + 'a, const N: usize> IntoProduct<'a> for [Vec<T>; N] {
    type Item = T;

    fn into_product(self) -> error::Result<Product<'a, T>> {
        product(self.into_iter().map(Source::from).collect(), 1)
    }
}

impl<'a, T: Clone + 'a> IntoProduct<'a> for ProductBuilder<'a, T> {
    type Item = T;

    fn into_product(self) -> error::Result<Product<'a, T>> {
        self.build()
    }
}
