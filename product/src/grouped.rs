//! Products of more than four providers.
//!
//! Providers are cut into groups of [`GROUP_SIZE`]. The full groups are
//! folded right to left, each step joining one group's product onto the
//! running tail; a shorter trailing group is joined last. Every step only
//! ever composes two row providers, so the fixed-arity primitives suffice.

use crate::arity::join;
use crate::arity::Arity;
use crate::arity::MAX_DIRECT;
use crate::error::LimitError;
use crate::error::Result;
use crate::source::Provider;

pub const GROUP_SIZE: usize = 4;

/// Largest number of providers the grouped fold composes.
pub const MAX_GROUPED: usize = 11;

/// Repeatable provider of the product of `providers`, in order.
///
/// Fails before anything is invoked when there are more than
/// [`MAX_GROUPED`] providers.
pub fn grouped<'a, T: Clone + 'a>(providers: &[Provider<'a, T>]) -> Result<Provider<'a, Vec<T>>> {
    if providers.len() > MAX_GROUPED {
        return Err(LimitError::at_most(providers.len(), MAX_GROUPED));
    }

    if providers.len() <= MAX_DIRECT {
        return Ok(Arity::new(providers)?.into_provider());
    }

    let groups = providers.chunks_exact(GROUP_SIZE);
    let leftover = groups.remainder();

    tracing::debug!(
        count = providers.len(),
        groups = groups.len(),
        leftover = leftover.len(),
        "composing grouped product"
    );

    let full = groups
        .map(|group| Arity::new(group).map(Arity::into_provider))
        .collect::<Result<Vec<_>>>()?;

    // Seeded with the last full group; each step captures its own group.
    let Some(tail) = full
        .into_iter()
        .rev()
        .reduce(|tail, group| Provider::new(move || join(group.clone(), tail.clone())))
    else {
        return Ok(Arity::new(leftover)?.into_provider());
    };

    if leftover.is_empty() {
        return Ok(tail);
    }

    let leftover = Arity::new(leftover)?.into_provider();
    Ok(Provider::new(move || join(tail.clone(), leftover.clone())))
}
