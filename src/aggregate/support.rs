//! Shared aggregation machinery
//!
//! Group-by accumulation, stable top-N ranking, quantiles and guarded
//! ratio helpers used by every tab pipeline. All divisions in the crate
//! go through `ratio`/`pct` so a zero denominator yields 0 instead of
//! NaN or infinity.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

/// Percentage of `numer` over `denom`, 0 when the denominator is not positive
#[must_use]
pub fn pct(numer: f64, denom: f64) -> f64 {
    if denom > 0.0 { numer / denom * 100.0 } else { 0.0 }
}

/// Ratio of `numer` over `denom`, 0 when the denominator is not positive
#[must_use]
pub fn ratio(numer: f64, denom: f64) -> f64 {
    if denom > 0.0 { numer / denom } else { 0.0 }
}

/// Linear-interpolation quantile of a value set
///
/// Matches the usual statistical definition: for sorted values v and
/// rank h = (n-1)·q, the result interpolates between v[floor(h)] and
/// v[ceil(h)]. Returns 0 for an empty input; `q` is clamped to [0, 1].
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let q = q.clamp(0.0, 1.0);
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Top `n` items by a metric, descending, ties keeping original order
#[must_use]
pub fn top_n_by<T: Clone, F: Fn(&T) -> f64>(items: &[T], n: usize, key: F) -> Vec<T> {
    let mut sorted: Vec<T> = items.to_vec();
    // Stable sort: equal keys preserve their input order
    sorted.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    sorted.truncate(n);
    sorted
}

/// Fold rows into per-key accumulators, returning groups sorted by key
///
/// The grouping key is produced per row by `key_of`; `fold` merges each
/// row into its group's accumulator, which starts from `A::default()`.
pub fn group_fold<R, A, K, F>(rows: &[R], key_of: K, mut fold: F) -> Vec<(String, A)>
where
    A: Default,
    K: Fn(&R) -> &str,
    F: FnMut(&mut A, &R),
{
    let mut groups: FxHashMap<String, A> = FxHashMap::default();
    for row in rows {
        fold(groups.entry(key_of(row).to_string()).or_default(), row);
    }
    let mut out: Vec<(String, A)> = groups.into_iter().collect();
    out.sort_by(|a, b| a.0.cmp(&b.0));
    out
}

/// Running sum and count for mean computation
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAcc {
    pub sum: f64,
    pub n: u64,
}

impl MeanAcc {
    /// Add one observation
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.n += 1;
    }

    /// The mean so far, 0 when no observations were pushed
    #[must_use]
    pub fn mean(self) -> f64 {
        ratio(self.sum, self.n as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_guards_zero_denominator() {
        assert!((pct(5.0, 0.0)).abs() < f64::EPSILON);
        assert!((pct(5.0, -1.0)).abs() < f64::EPSILON);
        assert!((pct(25.0, 50.0) - 50.0).abs() < 1e-12);
        assert!(pct(1.0, 0.0).is_finite());
    }

    #[test]
    fn ratio_guards_zero_denominator() {
        assert!((ratio(7.0, 0.0)).abs() < f64::EPSILON);
        assert!((ratio(6.0, 3.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn quantile_interpolates_linearly() {
        let values = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert!((quantile(&values, 0.7) - 38.0).abs() < 1e-9);
        assert!((quantile(&values, 0.0) - 10.0).abs() < 1e-9);
        assert!((quantile(&values, 1.0) - 50.0).abs() < 1e-9);
        assert!((quantile(&values, 0.5) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn quantile_of_empty_is_zero() {
        assert!((quantile(&[], 0.7)).abs() < f64::EPSILON);
    }

    #[test]
    fn top_n_is_stable_under_ties() {
        let items = [("a", 10.0), ("b", 30.0), ("c", 10.0), ("d", 30.0)];
        let top = top_n_by(&items, 3, |item| item.1);
        let labels: Vec<&str> = top.iter().map(|item| item.0).collect();
        // b precedes d (both 30), and a precedes c (both 10)
        assert_eq!(labels, vec!["b", "d", "a"]);
    }

    #[test]
    fn top_n_truncates_to_available_items() {
        let items = [("only", 1.0)];
        assert_eq!(top_n_by(&items, 10, |item| item.1).len(), 1);
    }

    #[test]
    fn group_fold_sums_per_key_sorted() {
        let rows = [("B", 2_i64), ("A", 1), ("B", 3), ("A", 4)];
        let groups = group_fold(&rows, |r| r.0, |acc: &mut i64, r| *acc += r.1);
        assert_eq!(groups, vec![("A".to_string(), 5), ("B".to_string(), 5)]);
    }

    #[test]
    fn mean_acc_handles_empty_and_nonempty() {
        let empty = MeanAcc::default();
        assert!((empty.mean()).abs() < f64::EPSILON);

        let mut acc = MeanAcc::default();
        acc.push(2.0);
        acc.push(4.0);
        assert!((acc.mean() - 3.0).abs() < 1e-12);
    }
}
