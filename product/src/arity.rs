//! Fixed-arity products of up to four providers.
//!
//! [`pair`] is the only primitive that actually nests two loops. Three and
//! four providers are reduced right to left: the last two are paired, then
//! each preceding provider is paired with the running tail and the result
//! flattened, so every step stays one level deep.

use std::iter;

use crate::error::LimitError;
use crate::error::Result;
use crate::flatten::flatten;
use crate::source::BoxIter;
use crate::source::Provider;

/// Largest arity the direct dispatch composes.
pub const MAX_DIRECT: usize = 4;

/// Lazy sequence of flat tuples.
pub type Rows<'a, T> = BoxIter<'a, Vec<T>>;

pub fn single<'a, T: 'a>(provider: Provider<'a, T>) -> impl Iterator<Item = Vec<T>> + 'a {
    iter::once(provider)
        .flat_map(|provider| provider.call())
        .map(|value| vec![value])
}

/// `(x, y)` for every `x` of `outer` and every `y` of `inner`.
///
/// `outer` is invoked once, on the first pull. `inner` is invoked again for
/// each `x`, so it must be repeatable.
pub fn pair<'a, A, B>(outer: Provider<'a, A>, inner: Provider<'a, B>) -> impl Iterator<Item = (A, B)> + 'a
where
    A: Clone + 'a,
    B: 'a,
{
    iter::once(outer)
        .flat_map(|outer| outer.call())
        .flat_map(move |x| inner.call().map(move |y| (x.clone(), y)))
}

pub fn triple<'a, T: Clone + 'a>(providers: &[Provider<'a, T>]) -> Result<Rows<'a, T>> {
    let [a, b, c] = <&[_; 3]>::try_from(providers)
        .map_err(|_| LimitError::exactly(providers.len(), 3))?;
    Ok(reduce(&[a.clone()], [b.clone(), c.clone()]).call())
}

pub fn quad<'a, T: Clone + 'a>(providers: &[Provider<'a, T>]) -> Result<Rows<'a, T>> {
    let [a, b, c, d] = <&[_; 4]>::try_from(providers)
        .map_err(|_| LimitError::exactly(providers.len(), 4))?;
    Ok(reduce(&[a.clone(), b.clone()], [c.clone(), d.clone()]).call())
}

/// Routes up to [`MAX_DIRECT`] providers to the matching primitive.
///
/// No providers at all yield a single empty tuple.
pub fn dispatch<'a, T: Clone + 'a>(providers: &[Provider<'a, T>]) -> Result<Rows<'a, T>> {
    Ok(Arity::new(providers)?.into_provider().call())
}

pub(crate) fn join<'a, T: Clone + 'a>(left: Provider<'a, Vec<T>>, right: Provider<'a, Vec<T>>) -> Rows<'a, T> {
    Box::new(flatten(pair(left, right)))
}

/// Right-to-left reduction of `head` onto the pair `last`.
fn reduce<'a, T: Clone + 'a>(head: &[Provider<'a, T>], last: [Provider<'a, T>; 2]) -> Provider<'a, Vec<T>> {
    let [y, z] = last;
    let seed = Provider::new(move || pair(y.clone(), z.clone()).map(|(y, z)| vec![y, z]));

    head.iter().rev().fold(seed, |tail, first| {
        let first = lift(first.clone());
        Provider::new(move || join(first.clone(), tail.clone()))
    })
}

fn lift<'a, T: 'a>(provider: Provider<'a, T>) -> Provider<'a, Vec<T>> {
    Provider::new(move || single(provider.clone()))
}

/// Providers checked against [`MAX_DIRECT`], not yet composed.
pub(crate) enum Arity<'a, T> {
    Zero,
    One(Provider<'a, T>),
    Two([Provider<'a, T>; 2]),
    Three([Provider<'a, T>; 3]),
    Four([Provider<'a, T>; 4]),
}

impl<'a, T: Clone + 'a> Arity<'a, T> {
    pub(crate) fn new(providers: &[Provider<'a, T>]) -> Result<Self> {
        match providers {
            [] => Ok(Arity::Zero),
            [a] => Ok(Arity::One(a.clone())),
            [a, b] => Ok(Arity::Two([a.clone(), b.clone()])),
            [a, b, c] => Ok(Arity::Three([a.clone(), b.clone(), c.clone()])),
            [a, b, c, d] => Ok(Arity::Four([a.clone(), b.clone(), c.clone(), d.clone()])),
            _ => Err(LimitError::at_most(providers.len(), MAX_DIRECT)),
        }
    }

    /// Repeatable provider of this product's rows.
    pub(crate) fn into_provider(self) -> Provider<'a, Vec<T>> {
        match self {
            Arity::Zero => Provider::new(|| iter::once(Vec::new())),
            Arity::One(provider) => lift(provider),
            Arity::Two([a, b]) => reduce(&[], [a, b]),
            Arity::Three([a, b, c]) => reduce(&[a], [b, c]),
            Arity::Four([a, b, c, d]) => reduce(&[a, b], [c, d]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(values: &'static [u8]) -> Provider<'static, u8> {
        Provider::new(move || values.iter().copied())
    }

    #[test]
    fn pair_is_lazy() {
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = calls.clone();
        let outer = Provider::new(move || {
            counter.set(counter.get() + 1);
            vec![1, 2]
        });

        let mut iter = pair(outer, values(&[3]));
        assert_eq!(calls.get(), 0);
        assert_eq!(iter.next(), Some((1, 3)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn arity_rejects_five() {
        let providers = vec![values(&[0]); 5];
        assert_eq!(Arity::new(&providers).err(), Some(LimitError::at_most(5, 4)));
    }
}
