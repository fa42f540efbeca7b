use crate::error::Result;
use crate::repeat;
use crate::source;
use crate::source::Provider;
use crate::source::Source;
use crate::Product;

/// Sources and repeat factor of a product, built up one call at a time.
///
/// ```
/// use lazy_product::ProductBuilder;
///
/// let rows = ProductBuilder::new()
///     .source(0..2)
///     .factory(|| 2..4)
///     .build()?
///     .collect::<Vec<_>>();
///
/// assert_eq!(rows, vec![vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3]]);
/// # Ok::<(), lazy_product::LimitError>(())
/// ```
#[derive(Debug)]
pub struct ProductBuilder<'a, T> {
    sources: Vec<Source<'a, T>>,
    repeat: usize,
}

impl<T> Default for ProductBuilder<'_, T> {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            repeat: 1,
        }
    }
}

impl<'a, T: Clone + 'a> ProductBuilder<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a one-shot iterable.
    pub fn source<I>(self, stream: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        self.push(source::source(stream))
    }

    /// Appends a factory, called each time its position restarts.
    pub fn factory<F, I>(self, factory: F) -> Self
    where
        F: Fn() -> I + 'a,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        self.push(source::factory(factory))
    }

    pub fn values(self, values: Vec<T>) -> Self {
        self.push(values)
    }

    pub fn push(mut self, source: impl Into<Source<'a, T>>) -> Self {
        self.sources.push(source.into());
        self
    }

    /// Number of times the sources are logically concatenated. Defaults to 1.
    pub fn repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn build(self) -> Result<Product<'a, T>> {
        crate::product(self.sources, self.repeat)
    }

    /// Product that can be walked any number of times.
    ///
    /// Every stream is buffered here, the first one included.
    pub fn reusable(self) -> Result<Reusable<'a, T>> {
        repeat::check(self.sources.len(), self.repeat)?;
        Ok(Reusable {
            providers: source::normalize(self.sources, true),
            repeat: self.repeat,
        })
    }
}

/// Product whose sources are all repeatable, built by
/// [`ProductBuilder::reusable`].
#[derive(Clone, Debug)]
pub struct Reusable<'a, T> {
    providers: Vec<Provider<'a, T>>,
    repeat: usize,
}

impl<'a, T: Clone + 'a> Reusable<'a, T> {
    /// Starts a fresh walk over every combination.
    pub fn iter(&self) -> Result<Product<'a, T>> {
        let rows = repeat::repeated(&self.providers, self.repeat)?;
        Ok(Product { rows })
    }
}
