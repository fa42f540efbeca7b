#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Eager product of `pools` concatenated `repeat` times.
pub fn naive<T: Clone>(pools: &[Vec<T>], repeat: usize) -> Vec<Vec<T>> {
    (0..repeat)
        .flat_map(move |_| pools.iter())
        .fold(vec![Vec::new()], |rows, pool| {
            rows.into_iter()
                .flat_map(move |row| {
                    pool.iter().map(move |value| {
                        let mut row = row.clone();
                        row.push(value.clone());
                        row
                    })
                })
                .collect()
        })
}

/// `count` pools of two consecutive numbers: `[0, 1], [2, 3], ...`.
pub fn pools(count: u32) -> Vec<Vec<u32>> {
    (0..count).map(|index| vec![2 * index, 2 * index + 1]).collect()
}
