//! Arity ceilings of the composition engine.

use thiserror::Error;

/// How a ceiling constrains the number of composed providers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitKind {
    /// At most `max` providers can be composed.
    AtMost,
    /// Exactly `max` providers must be composed.
    Exactly,
    /// The repeat factor is above `max`.
    Repeat,
}

/// Requested arity (or repeat factor) exceeds what the engine composes.
///
/// Always returned while the composition is being built, before any
/// source has been invoked.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}", describe(.count, .max, .kind))]
pub struct LimitError {
    /// Number of providers that were requested.
    pub count: usize,
    /// Supported maximum (or exact arity for [`LimitKind::Exactly`]).
    pub max: usize,
    pub kind: LimitKind,
}

pub type Result<T> = std::result::Result<T, LimitError>;

impl LimitError {
    pub(crate) fn at_most(count: usize, max: usize) -> Self {
        Self {
            count,
            max,
            kind: LimitKind::AtMost,
        }
    }

    pub(crate) fn repeat(count: usize, max: usize) -> Self {
        Self {
            count,
            max,
            kind: LimitKind::Repeat,
        }
    }

    pub(crate) fn exactly(count: usize, max: usize) -> Self {
        Self {
            count,
            max,
            kind: LimitKind::Exactly,
        }
    }
}

fn describe(count: &usize, max: &usize, kind: &LimitKind) -> String {
    match kind {
        LimitKind::AtMost => format!("{count} sources not supported (maximum is {max})"),
        LimitKind::Exactly => format!("{max} sources expected, not {count}"),
        LimitKind::Repeat => format!("repeat of {count} not supported (maximum is {max})"),
    }
}
