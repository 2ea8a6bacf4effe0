// File: crates/vizkit-core/src/scale.rs
// Summary: Linear data-to-point transforms for the X and Y axes, plus autoscaled limits.

/// Maps a data interval onto a pixel (point) interval. `px_start` may be
/// greater than `px_end`, which is how the Y axis grows upwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px_start: f32, px_end: f32) -> Self {
        let mut s = Self { vmin, vmax, px_start, px_end };
        if (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.px_start + ((v - self.vmin) / span) as f32 * (self.px_end - self.px_start)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let frac = ((px - self.px_start) / (self.px_end - self.px_start)) as f64;
        self.vmin + frac * (self.vmax - self.vmin)
    }

    pub fn contains(&self, v: f64) -> bool {
        let (lo, hi) = if self.vmin <= self.vmax { (self.vmin, self.vmax) } else { (self.vmax, self.vmin) };
        v >= lo - 1e-9 && v <= hi + 1e-9
    }
}

/// Data limits for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Finite min/max of `values`, or `None` when nothing is finite.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_finite() && max.is_finite() { Some(Self { min, max }) } else { None }
    }

    pub fn union(self, other: Self) -> Self {
        Self { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// Expand by `fraction` of the span on both sides; a zero span widens to ±0.5.
    pub fn with_margin(self, fraction: f64) -> Self {
        let span = self.max - self.min;
        if span.abs() < 1e-12 {
            return Self { min: self.min - 0.5, max: self.max + 0.5 };
        }
        Self { min: self.min - span * fraction, max: self.max + span * fraction }
    }

    /// Like [`Limits::with_margin`] but keeps `min` pinned (bar charts from zero).
    pub fn with_top_margin(self, fraction: f64) -> Self {
        let span = (self.max - self.min).max(1e-12);
        Self { min: self.min, max: self.max + span * fraction }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_scale_is_inverted() {
        let s = LinearScale::new(0.0, 10.0, 100.0, 0.0);
        assert_eq!(s.to_px(0.0), 100.0);
        assert_eq!(s.to_px(10.0), 0.0);
        assert!((s.from_px(50.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn limits_skip_non_finite() {
        let l = Limits::of([1.0, f64::NAN, 3.0, f64::INFINITY]).unwrap();
        assert_eq!(l, Limits::new(1.0, 3.0));
        assert!(Limits::of([f64::NAN]).is_none());
        assert_eq!(Limits::new(2.0, 2.0).with_margin(0.05), Limits::new(1.5, 2.5));
    }
}
