mod common;

use std::cell::Cell;
use std::rc::Rc;

use lazy_product::prelude::*;
use lazy_product::source::normalize;
use pretty_assertions::assert_eq;

fn counter() -> (Rc<Cell<usize>>, impl Fn() + Clone) {
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    (count, move || handle.set(handle.get() + 1))
}

#[test]
fn outer_stream_is_walked_once() -> Result<(), LimitError> {
    common::init();
    let (pulls, bump) = counter();
    let outer = source((0..3).inspect(move |_| bump()));

    let mut sources = vec![outer];
    sources.extend((1..6).map(|index| source(vec![index * 10, index * 10 + 1])));

    let rows = product(sources, 1)?.collect::<Vec<_>>();
    assert_eq!(rows.len(), 3 * 2usize.pow(5));
    assert_eq!(pulls.get(), 3);
    Ok(())
}

#[test]
fn outer_stream_may_be_unbounded() -> Result<(), LimitError> {
    let rows = product(vec![source(0..), source(vec![0, 1])], 1)?
        .skip(6)
        .take(2)
        .collect::<Vec<_>>();
    assert_eq!(rows, vec![vec![3, 0], vec![3, 1]]);
    Ok(())
}

#[test]
fn outer_factory_is_invoked_once() -> Result<(), LimitError> {
    let (calls, bump) = counter();
    let outer = factory(move || {
        bump();
        vec![0, 1]
    });

    let mut sources = vec![outer];
    sources.extend((1..7).map(|index| source(vec![index])));

    assert_eq!(product(sources, 1)?.count(), 2);
    assert_eq!(calls.get(), 1);
    Ok(())
}

#[test]
fn inner_stream_is_buffered_once() -> Result<(), LimitError> {
    let (pulls, bump) = counter();
    let inner = source(vec![10, 11].into_iter().inspect(move |_| bump()));

    let rows = product(vec![source(0..3), inner], 1)?.collect::<Vec<_>>();
    assert_eq!(
        rows,
        vec![
            vec![0, 10],
            vec![0, 11],
            vec![1, 10],
            vec![1, 11],
            vec![2, 10],
            vec![2, 11],
        ],
    );
    assert_eq!(pulls.get(), 2);
    Ok(())
}

#[test]
fn inner_factory_is_invoked_per_outer_value() -> Result<(), LimitError> {
    let (calls, bump) = counter();
    let inner = factory(move || {
        bump();
        [7]
    });

    assert_eq!(product(vec![source(0..3), inner], 1)?.count(), 3);
    assert_eq!(calls.get(), 3);
    Ok(())
}

#[test]
fn normalize_keeps_positions() {
    let providers = normalize(
        vec![source(vec![1, 2]), source(vec![3]), factory(|| vec![4, 5])],
        false,
    );

    assert_eq!(providers.len(), 3);
    assert_eq!(providers[0].call().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(providers[0].call().count(), 0);
    assert_eq!(providers[1].call().collect::<Vec<_>>(), vec![3]);
    assert_eq!(providers[1].call().collect::<Vec<_>>(), vec![3]);
    assert_eq!(providers[2].call().collect::<Vec<_>>(), vec![4, 5]);
}

#[test]
fn normalize_replays_outer_on_request() {
    let providers = normalize(vec![source(vec![1, 2])], true);
    assert_eq!(providers[0].call().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(providers[0].call().collect::<Vec<_>>(), vec![1, 2]);
}
