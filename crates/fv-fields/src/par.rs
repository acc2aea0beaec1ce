//! Element-wise loops that switch to rayon on large meshes.

use rayon::prelude::*;

/// Below this many elements loops stay serial.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Collect `f(i)` for `i in 0..n`, in index order.
pub(crate) fn map_indexed<T, F>(n: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    if n >= PARALLEL_THRESHOLD {
        (0..n).into_par_iter().map(f).collect()
    } else {
        (0..n).map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_indexed_keeps_order() {
        for n in [0, 7, PARALLEL_THRESHOLD + 3] {
            let v = map_indexed(n, |i| i * 2);
            assert_eq!(v.len(), n);
            assert!(v.iter().enumerate().all(|(i, &x)| x == 2 * i));
        }
    }
}
