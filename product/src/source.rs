//! Caller inputs and their normalized, repeatable form.
//!
//! A [`Source`] is what the caller hands in: either a one-shot stream or a
//! factory that produces a fresh iterator on every call. Composition only
//! ever deals with [`Provider`]s, so every source is normalized first.
//!
//! Position 0 is the outer loop of the product and is walked exactly once,
//! which lets it wrap a stream without copying it. Every later position is
//! replayed once per combination of the positions before it, so a stream
//! there is drained into a buffer up front.

use std::cell::RefCell;
use std::fmt;
use std::iter;
use std::rc::Rc;

/// Boxed iterator produced by a [`Provider`].
pub type BoxIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// Zero-argument factory producing a fresh iterator on each call.
pub struct Provider<'a, T>(Rc<dyn Fn() -> BoxIter<'a, T> + 'a>);

impl<'a, T: 'a> Provider<'a, T> {
    pub fn new<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'a,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Provider(Rc::new(move || -> BoxIter<'a, T> {
            Box::new(factory().into_iter())
        }))
    }

    /// Wraps a one-shot stream without buffering it.
    ///
    /// Only the first call sees the stream; later calls yield nothing.
    pub fn once<I>(stream: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        let stream: BoxIter<'a, T> = Box::new(stream.into_iter());
        let cell = RefCell::new(Some(stream));
        Provider(Rc::new(move || -> BoxIter<'a, T> {
            cell.borrow_mut().take().unwrap_or_else(|| {
                tracing::warn!("one-shot provider invoked more than once");
                Box::new(iter::empty::<T>())
            })
        }))
    }

    /// Replays `items` on every call.
    pub fn buffered(items: Rc<[T]>) -> Self
    where
        T: Clone,
    {
        Provider(Rc::new(move || -> BoxIter<'a, T> {
            let items = Rc::clone(&items);
            Box::new((0..items.len()).map(move |index| items[index].clone()))
        }))
    }

    pub fn call(&self) -> BoxIter<'a, T> {
        (self.0)()
    }
}

impl<T> Clone for Provider<'_, T> {
    fn clone(&self) -> Self {
        Provider(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Provider<'_, T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("Provider(..)")
    }
}

pub enum Source<'a, T> {
    /// Iterable that may only be walked once.
    Stream(BoxIter<'a, T>),
    /// Repeatable factory, used as-is.
    Factory(Provider<'a, T>),
}

impl<T> fmt::Debug for Source<'_, T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stream(_) => fmt.write_str("Stream(..)"),
            Source::Factory(_) => fmt.write_str("Factory(..)"),
        }
    }
}

impl<'a, T: 'a> From<Vec<T>> for Source<'a, T> {
    fn from(values: Vec<T>) -> Self {
        Source::Stream(Box::new(values.into_iter()))
    }
}

impl<'a, T> From<Provider<'a, T>> for Source<'a, T> {
    fn from(provider: Provider<'a, T>) -> Self {
        Source::Factory(provider)
    }
}

pub fn source<'a, I>(stream: I) -> Source<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
{
    Source::Stream(Box::new(stream.into_iter()))
}

/// Source calling `factory` whenever its position restarts.
pub fn factory<'a, F, I>(factory: F) -> Source<'a, I::Item>
where
    F: Fn() -> I + 'a,
    I: IntoIterator,
    I::Item: 'a,
    I::IntoIter: 'a,
{
    Source::Factory(Provider::new(factory))
}

/// Converts `sources` into providers of equal length.
///
/// Streams past position 0 are drained into a buffer here. With
/// `replay_outer` set, position 0 is buffered too; the repeat path needs
/// this since every repetition walks the outer position again.
pub fn normalize<'a, T>(sources: Vec<Source<'a, T>>, replay_outer: bool) -> Vec<Provider<'a, T>>
where
    T: Clone + 'a,
{
    sources
        .into_iter()
        .enumerate()
        .map(|(position, source)| match source {
            Source::Factory(provider) => provider,
            Source::Stream(stream) if position == 0 && !replay_outer => Provider::once(stream),
            Source::Stream(stream) => {
                let items = stream.collect::<Rc<[T]>>();
                tracing::trace!(position, len = items.len(), "buffered stream source");
                Provider::buffered(items)
            }
        })
        .collect()
}
