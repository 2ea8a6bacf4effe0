// File: crates/vizkit-core/src/ticks.rs
// Summary: Tick layout helpers and numeric label formatting.

use crate::error::{VizError, VizResult};

/// Round tick positions (1, 2, 2.5, 5 × 10^k steps) inside `[min, max]`,
/// aiming for about `target` ticks. Returns the ticks and the step.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> (Vec<f64>, f64) {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = (hi - lo).max(1e-12);
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    let ticks = (first..=last)
        .map(|k| k as f64 * step)
        // snap -0.0 and float dust to clean values
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
        .collect();
    (ticks, step)
}

/// Label for a tick at `value`, with as many decimals as `step` needs.
pub fn tick_label(value: f64, step: f64) -> String {
    let decimals = (0..=10)
        .find(|&d| {
            let scaled = step.abs() * 10f64.powi(d);
            (scaled - scaled.round()).abs() < 1e-6 * scaled.max(1.0)
        })
        .unwrap_or(10) as usize;
    format!("{:.*}", decimals, value)
}

/// Numeric cell format for heatmap annotations (`.3f`, `.2e`, `.1%`, `d`, `g`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberFormat {
    Fixed(usize),
    Exponent(usize),
    Percent(usize),
    Integer,
    General,
}

impl NumberFormat {
    pub fn parse(spec: &str) -> VizResult<Self> {
        let invalid = || VizError::InvalidNumberFormat(spec.to_owned());
        let s = spec.trim();
        match s {
            "d" => return Ok(Self::Integer),
            "g" | "" => return Ok(Self::General),
            _ => {}
        }
        let body = s.strip_prefix('.').ok_or_else(invalid)?;
        let (digits, kind) = body.split_at(body.len().saturating_sub(1));
        let precision: usize = digits.parse().map_err(|_| invalid())?;
        match kind {
            "f" => Ok(Self::Fixed(precision)),
            "e" => Ok(Self::Exponent(precision)),
            "%" => Ok(Self::Percent(precision)),
            "g" => Ok(Self::General),
            _ => Err(invalid()),
        }
    }

    pub fn format(&self, value: f64) -> String {
        match *self {
            Self::Fixed(p) => format!("{value:.p$}"),
            Self::Exponent(p) => {
                // Rust prints `1.5e2`; pad the exponent the conventional way.
                let raw = format!("{value:.p$e}");
                match raw.split_once('e') {
                    Some((mantissa, exp)) => {
                        let (sign, digits) = match exp.strip_prefix('-') {
                            Some(d) => ('-', d),
                            None => ('+', exp),
                        };
                        format!("{mantissa}e{sign}{digits:0>2}")
                    }
                    None => raw,
                }
            }
            Self::Percent(p) => format!("{:.p$}%", value * 100.0),
            Self::Integer => format!("{}", value.round() as i64),
            Self::General => {
                let s = format!("{value:.6}");
                let s = s.trim_end_matches('0').trim_end_matches('.');
                if s.is_empty() || s == "-" { "0".to_owned() } else { s.to_owned() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_ticks_cover_range() {
        let (ticks, step) = nice_ticks(0.0, 10.0, 6);
        assert_eq!(step, 2.0);
        assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

        let (ticks, step) = nice_ticks(-0.3, 0.3, 6);
        assert!((step - 0.1).abs() < 1e-12);
        assert!(ticks.contains(&0.0));
        assert_eq!(tick_label(-0.2, step), "-0.2");
    }

    #[test]
    fn quarter_steps_get_two_decimals() {
        assert_eq!(tick_label(0.25, 0.25), "0.25");
        assert_eq!(tick_label(7.5, 2.5), "7.5");
        assert_eq!(tick_label(4.0, 2.0), "4");
    }

    #[test]
    fn number_formats() {
        assert_eq!(NumberFormat::parse(".3f").unwrap().format(0.12345), "0.123");
        assert_eq!(NumberFormat::parse(".1e").unwrap().format(1234.0), "1.2e+03");
        assert_eq!(NumberFormat::parse(".0%").unwrap().format(0.5), "50%");
        assert_eq!(NumberFormat::parse("d").unwrap().format(2.6), "3");
        assert_eq!(NumberFormat::parse("g").unwrap().format(2.50), "2.5");
        assert!(NumberFormat::parse("x").is_err());
    }
}
