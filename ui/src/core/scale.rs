//! Positional scales: a categorical band scale and a continuous linear scale.
//!
//! Both are pure functions of (domain, range, padding); they are rebuilt
//! whenever the aggregated data changes and never mutate what they measure.
//! The band math mirrors d3's `scaleBand` (equal inner and outer padding,
//! centered alignment); the linear scale "nices" its upper bound with the
//! 1-2-5 scheme so axis ticks land on round numbers.

/// Maps an ordered finite domain to equal-width slots across a pixel range.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// `padding` is the fractional gap between slots, in `[0, 1)`.
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let (r0, r1) = range;
        let span = r1 - r0;
        let step = span / (n + padding).max(1.0);
        let start = r0 + (span - step * (n - padding)) * 0.5;
        Self {
            domain,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// Left edge of the slot for `key`, if the key is in the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|known| known == key)
            .map(|index| self.start + self.step * index as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Maps a numeric domain onto a (possibly inverted) pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    /// Like [`LinearScale::new`], with the domain bounds rounded out to
    /// multiples of a 1-2-5 step.
    pub fn nice(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, d1) = nice_domain(domain.0, domain.1);
        Self::new((d0, d1), range)
    }

    pub fn map(&self, value: f64) -> f64 {
        let domain_span = self.d1 - self.d0;
        if domain_span == 0.0 {
            return self.r0;
        }
        self.r0 + (value - self.d0) / domain_span * (self.r1 - self.r0)
    }

    pub fn invert(&self, position: f64) -> f64 {
        let range_span = self.r1 - self.r0;
        if range_span == 0.0 {
            return self.d0;
        }
        self.d0 + (position - self.r0) / range_span * (self.d1 - self.d0)
    }

    pub fn domain_max(&self) -> f64 {
        self.d1
    }

    /// Round tick values covering the domain, roughly `target` of them.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        let (lo, hi) = (self.d0.min(self.d1), self.d0.max(self.d1));
        if !lo.is_finite() || !hi.is_finite() || target < 2 {
            return Vec::new();
        }
        let span = hi - lo;
        if span <= 0.0 {
            return vec![lo];
        }
        let step = nice_step(span / target as f64);
        let first = (lo / step).ceil() * step;
        let last = (hi / step).floor() * step;

        let mut ticks = Vec::new();
        let mut value = first;
        // guard against float drift producing an endless walk
        for _ in 0..(target * 4) {
            if value > last + step * 0.5 {
                break;
            }
            ticks.push(value);
            value += step;
        }
        ticks
    }
}

fn nice_domain(d0: f64, d1: f64) -> (f64, f64) {
    let span = (d1 - d0).abs();
    if span == 0.0 || !span.is_finite() {
        return (d0, d1);
    }
    let step = nice_step(span / 10.0);
    ((d0 / step).floor() * step, (d1 / step).ceil() * step)
}

/// 1-2-5 scheme scaled by a power of ten.
fn nice_step(raw: f64) -> f64 {
    let power = raw.abs().log10().floor();
    let base = 10f64.powf(power);
    let normalized = raw / base;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * base
}
