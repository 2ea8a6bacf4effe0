// File: crates/vizkit-core/src/stats.rs
// Summary: Descriptive statistics needed to draw box plots and histograms.

const WHISKER_IQR: f64 = 1.5;
const NOTCH_FACTOR: f64 = 1.57;

fn finite_sorted(values: &[f64]) -> Vec<f64> {
    let mut v: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    v.sort_by(|a, b| a.total_cmp(b));
    v
}

/// Quantile `q` in `[0, 1]` of sorted data, interpolating linearly between ranks.
/// Contract: `sorted` is non-empty and ascending.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_lo: f64,
    pub whisker_hi: f64,
    pub notch_lo: f64,
    pub notch_hi: f64,
    pub fliers: Vec<f64>,
    /// Finite values the stats were computed from.
    pub count: usize,
}

impl BoxStats {
    /// `None` when `values` has no finite entry.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let sorted = finite_sorted(values);
        if sorted.is_empty() {
            return None;
        }
        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;

        let lo_fence = q1 - WHISKER_IQR * iqr;
        let hi_fence = q3 + WHISKER_IQR * iqr;
        // Whiskers reach the furthest datum inside the fences, never past the box.
        let whisker_lo = sorted.iter().copied().find(|&v| v >= lo_fence).unwrap_or(q1).min(q1);
        let whisker_hi = sorted.iter().rev().copied().find(|&v| v <= hi_fence).unwrap_or(q3).max(q3);
        let fliers = sorted.iter().copied().filter(|&v| v < whisker_lo || v > whisker_hi).collect();

        let half_notch = NOTCH_FACTOR * iqr / (sorted.len() as f64).sqrt();
        Some(Self {
            q1,
            median,
            q3,
            whisker_lo,
            whisker_hi,
            notch_lo: median - half_notch,
            notch_hi: median + half_notch,
            fliers,
            count: sorted.len(),
        })
    }

    /// Lowest and highest value the box glyph reaches, fliers included.
    /// The notch only counts when it is drawn.
    pub fn extent(&self, notch: bool) -> (f64, f64) {
        let (lo, hi) = if notch {
            (self.whisker_lo.min(self.notch_lo), self.whisker_hi.max(self.notch_hi))
        } else {
            (self.whisker_lo, self.whisker_hi)
        };
        let lo = self.fliers.iter().copied().fold(lo, f64::min);
        let hi = self.fliers.iter().copied().fold(hi, f64::max);
        (lo, hi)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` ascending edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Equal-width bins over the finite range of `values`. Every bin is
    /// half-open except the last, which also takes its right edge. A single
    /// distinct value spans `value ± 0.5`. `None` when nothing is finite.
    pub fn compute(values: &[f64], bins: usize) -> Option<Self> {
        let sorted = finite_sorted(values);
        let (&first, &last) = (sorted.first()?, sorted.last()?);
        let bins = bins.max(1);
        let (lo, hi) = if first == last { (first - 0.5, last + 0.5) } else { (first, last) };
        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        for v in sorted {
            let i = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[i] += 1;
        }
        Some(Self { edges, counts })
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn quartiles_interpolate() {
        let stats = BoxStats::compute(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(stats.q1, 1.75);
        assert_relative_eq!(stats.median, 2.5);
        assert_relative_eq!(stats.q3, 3.25);
        assert!(stats.fliers.is_empty());
    }

    #[test]
    fn outliers_become_fliers() {
        let stats = BoxStats::compute(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert_eq!(stats.fliers, vec![100.0]);
        assert_eq!(stats.whisker_hi, 5.0);
        assert_eq!(stats.whisker_lo, 1.0);
        assert_eq!(stats.extent(false).1, 100.0);
    }

    #[test]
    fn notch_widens_extent_only_when_drawn() {
        let stats = BoxStats::compute(&[0.0, 0.0, 10.0, 10.0]).unwrap();
        assert_eq!(stats.extent(false), (0.0, 10.0));
        let (lo, hi) = stats.extent(true);
        assert!(lo < 0.0 && hi > 10.0);
        assert_relative_eq!(hi - stats.median, stats.median - lo);
    }

    #[test]
    fn box_stats_ignore_nan() {
        assert!(BoxStats::compute(&[f64::NAN]).is_none());
        assert_eq!(BoxStats::compute(&[f64::NAN, 2.0]).unwrap().count, 1);
    }

    #[test]
    fn last_bin_is_closed() {
        let h = Histogram::compute(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(h.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(h.counts, vec![1, 1, 1, 2]);
        assert_eq!(h.total(), 5);
    }

    #[test]
    fn single_value_spans_unit_range() {
        let h = Histogram::compute(&[3.0, 3.0], 2).unwrap();
        assert_eq!(h.edges, vec![2.5, 3.0, 3.5]);
        assert_eq!(h.counts, vec![0, 2]);
        assert!(Histogram::compute(&[], 5).is_none());
    }
}
