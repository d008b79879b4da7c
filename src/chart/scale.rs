//! Data-to-pixel mappings.

use crate::foundation::core::Rgb8;

/// Continuous linear mapping from a data domain onto a pixel range.
///
/// A zero-width (or non-finite width) domain maps every input to the middle
/// of the range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Scale mapping `domain` onto `range`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// `[0, max]`, with an absent maximum treated as zero.
    pub fn from_zero(max: Option<f64>, range: (f64, f64)) -> Self {
        Self::new((0.0, max.unwrap_or(0.0)), range)
    }

    /// Domain endpoints.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Range endpoints.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value into the range (no clamping).
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span != 0.0 && span.is_finite() {
            (v - d0) / span
        } else {
            0.5
        };
        r0 + (r1 - r0) * t
    }

    /// Round tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Spacing between consecutive ticks for `count`.
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count)
    }
}

/// Ordinal scale dividing a range into equal bands, one per key.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BandScale {
    keys: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Bands for `keys` across `range`, with equal inner and outer `padding`
    /// (fraction of a step) and centered alignment.
    pub fn new(keys: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = keys.len() as f64;
        let padding = padding.clamp(0.0, 1.0);
        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self {
            keys,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// Keys in band order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Width of one band.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Start of the band for `key`.
    pub fn position(&self, key: &str) -> Option<f64> {
        let i = self.keys.iter().position(|k| k == key)?;
        Some(self.start + self.step * i as f64)
    }

    /// Center of the band for `key`.
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth / 2.0)
    }
}

/// Linear interpolation between two colors over a numeric domain.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ColorScale {
    t: LinearScale,
    low: Rgb8,
    high: Rgb8,
}

impl ColorScale {
    /// `domain.0 -> low`, `domain.1 -> high`.
    pub fn new(domain: (f64, f64), low: Rgb8, high: Rgb8) -> Self {
        Self {
            t: LinearScale::new(domain, (0.0, 1.0)),
            low,
            high,
        }
    }

    /// Color for `v`.
    pub fn apply(&self, v: f64) -> Rgb8 {
        self.low.lerp(self.high, self.t.apply(v))
    }
}

// Thresholds between the 1/2/5/10 step factors.
const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// `(i1, i2, inc)` such that ticks are `i * inc` (inc > 0) or `i / -inc` (inc < 0).
fn tick_increment(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = (start / step).round();
        i2 = (stop / step).round();
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        inc = step;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_increment(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Approximately `count` round values (multiples of 1, 2 or 5 × 10ⁿ) inside `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_increment(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Signed distance between consecutive [`ticks`].
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return 0.0;
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_increment(lo, hi, count as f64);
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/scale.rs"]
mod tests;
