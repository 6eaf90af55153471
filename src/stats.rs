//! Descriptive statistics for threshold samples.
//!
//! All functions handle edge cases explicitly and use numerically stable
//! algorithms, so summaries of many near-equal thresholds do not lose
//! precision to cancellation.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier-compensated summation, O(ε) error independent of n.
//! - **Variance/StdDev**: Welford's online algorithm with Bessel's
//!   correction.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).
//! - **Confidence interval**: normal approximation, `x̄ ± z·s/√n`.

/// Two-sided 95% critical value of the standard normal distribution.
pub const Z_95: f64 = 1.96;

/// Computes the arithmetic mean using compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use u_percolation::stats::mean;
/// let v = [0.5, 0.6, 0.7];
/// assert!((mean(&v).unwrap() - 0.6).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the sample variance (denominator `n − 1`) with Welford's
/// algorithm.
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_percolation::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    data.iter()
        .copied()
        .collect::<WelfordAccumulator>()
        .sample_variance()
}

/// Computes the sample standard deviation, `sqrt(variance(data))`.
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Returns `(min, max)` of the slice in one pass.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_percolation::stats::min_max;
/// assert_eq!(min_max(&[3.0, 1.0, 4.0, 1.0, 5.0]), Some((1.0, 5.0)));
/// ```
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    if data.is_empty() {
        return None;
    }
    data.iter()
        .copied()
        .try_fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            if x.is_nan() {
                None
            } else {
                Some((lo.min(x), hi.max(x)))
            }
        })
}

/// Confidence interval `mean ± z·std_dev/√n` for the mean of `n` samples.
///
/// NaN inputs propagate: an undefined `std_dev` (a single sample) gives
/// NaN bounds.
///
/// # Examples
/// ```
/// use u_percolation::stats::{confidence_interval, Z_95};
/// let (lo, hi) = confidence_interval(0.6, 0.1, 100, Z_95);
/// assert!((lo - 0.5804).abs() < 1e-12);
/// assert!((hi - 0.6196).abs() < 1e-12);
/// ```
pub fn confidence_interval(mean: f64, std_dev: f64, n: usize, z: f64) -> (f64, f64) {
    let half_width = z * std_dev / (n as f64).sqrt();
    (mean - half_width, mean + half_width)
}

/// Compensated summation (Neumaier's variant of Kahan).
///
/// Also handles the case where the addend is larger in magnitude than
/// the running sum.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik und
/// Mechanik* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Running mean and sum of squared deviations, one sample at a time.
#[derive(Debug, Clone, Default)]
struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
}

impl WelfordAccumulator {
    fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean_acc;
        self.mean_acc += delta / self.count as f64;
        self.m2 += delta * (value - self.mean_acc);
    }

    /// Sample variance (n − 1 denominator), `None` below 2 samples.
    fn sample_variance(&self) -> Option<f64> {
        (self.count >= 2).then(|| self.m2 / (self.count - 1) as f64)
    }
}

impl FromIterator<f64> for WelfordAccumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::default();
        for x in iter {
            acc.update(x);
        }
        acc
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
    }

    #[test]
    fn test_mean_single_is_exact() {
        assert_eq!(mean(&[0.593]), Some(0.593));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_non_finite() {
        assert_eq!(mean(&[1.0, f64::NAN, 3.0]), None);
        assert_eq!(mean(&[1.0, f64::INFINITY, 3.0]), None);
    }

    // --- variance / std_dev ---

    #[test]
    fn test_variance_basic() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
    }

    #[test]
    fn test_variance_single_is_undefined() {
        assert_eq!(variance(&[1.0]), None);
        assert_eq!(std_dev(&[1.0]), None);
    }

    #[test]
    fn test_std_dev() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let expected = 4.571428571428571_f64.sqrt();
        assert!((std_dev(&v).unwrap() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_variance_large_offset() {
        let data: Vec<f64> = (1..=5).map(|i| 1e9 + i as f64).collect();
        let var = variance(&data).unwrap();
        assert!((var - 2.5).abs() < 1e-5, "expected ~2.5, got {var}");
    }

    // --- min_max ---

    #[test]
    fn test_min_max_edge_cases() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[1.0, f64::NAN]), None);
        assert_eq!(min_max(&[0.25]), Some((0.25, 0.25)));
    }

    // --- confidence_interval ---

    #[test]
    fn test_confidence_interval_symmetric() {
        let (lo, hi) = confidence_interval(0.59, 0.02, 16, Z_95);
        assert!((hi - lo - 2.0 * 1.96 * 0.02 / 4.0).abs() < 1e-15);
        assert!(((lo + hi) / 2.0 - 0.59).abs() < 1e-15);
    }

    #[test]
    fn test_confidence_interval_nan_std_dev() {
        let (lo, hi) = confidence_interval(0.5, f64::NAN, 1, Z_95);
        assert!(lo.is_nan() && hi.is_nan());
    }

    // --- kahan_sum ---

    #[test]
    fn test_kahan_sum_precision() {
        let v = [1e16, 1.0, -1e16];
        let result = kahan_sum(&v);
        assert!((result - 1.0).abs() < 1e-10, "lost the 1.0: got {result}");
    }

    // --- WelfordAccumulator ---

    #[test]
    fn test_welford_below_two_samples() {
        let empty: WelfordAccumulator = std::iter::empty().collect();
        assert_eq!(empty.sample_variance(), None);
        let single: WelfordAccumulator = [5.0].into_iter().collect();
        assert_eq!(single.sample_variance(), None);
    }

    #[test]
    fn test_welford_two_samples() {
        let acc: WelfordAccumulator = [1.0, 3.0].into_iter().collect();
        assert_eq!(acc.sample_variance(), Some(2.0));
    }
}
