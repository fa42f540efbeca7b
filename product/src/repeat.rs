//! Products repeated against themselves.
//!
//! Each repetition is its own grouped product over the same providers.
//! Those repetitions are then composed with the grouped fold once more, so
//! the repeat factor is bounded by the same ceiling as the provider count.

use crate::arity::Rows;
use crate::error::LimitError;
use crate::error::Result;
use crate::flatten::flatten;
use crate::grouped::grouped;
use crate::grouped::MAX_GROUPED;
use crate::source::Provider;

/// Rejects a composition of `count` providers repeated `repeat` times.
///
/// Cheap enough to run before sources are normalized, so a rejected
/// request never drains any of them.
pub fn check(count: usize, repeat: usize) -> Result<()> {
    if count > MAX_GROUPED {
        return Err(LimitError::at_most(count, MAX_GROUPED));
    }
    if repeat > MAX_GROUPED {
        return Err(LimitError::repeat(repeat, MAX_GROUPED));
    }
    Ok(())
}

/// Product of `providers` concatenated with itself `repeat` times.
///
/// A repeat of 0 yields one empty tuple.
pub fn repeated<'a, T: Clone + 'a>(providers: &[Provider<'a, T>], repeat: usize) -> Result<Rows<'a, T>> {
    check(providers.len(), repeat)?;

    tracing::debug!(count = providers.len(), repeat, "composing repeated product");

    let mut blocks = Vec::with_capacity(repeat);
    for _ in 0..repeat {
        blocks.push(grouped(providers)?);
    }

    let outer = grouped(&blocks)?;
    Ok(Box::new(flatten(outer.call())))
}
