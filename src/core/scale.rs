use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Base-10 logarithmic mapping from a positive value range onto a pixel span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScale {
    domain_start: f64,
    domain_end: f64,
}

impl LogScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || domain_start <= 0.0
            || domain_end <= domain_start
        {
            return Err(ChartError::InvalidData(
                "log scale domain must be finite, > 0 and increasing".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.domain_start && value <= self.domain_end
    }

    /// Maps `value` to an offset in `[0, span_px]`.
    ///
    /// Values outside the domain (including zero) clamp to the nearest edge.
    pub fn value_to_pixel(self, value: f64, span_px: f64) -> ChartResult<f64> {
        if !span_px.is_finite() || span_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "pixel span must be finite and > 0".to_owned(),
            ));
        }
        if value.is_nan() {
            return Err(ChartError::InvalidData("value must not be NaN".to_owned()));
        }

        let clamped = value.clamp(self.domain_start, self.domain_end);
        let log_start = self.domain_start.log10();
        let normalized = (clamped.log10() - log_start) / (self.domain_end.log10() - log_start);
        Ok(normalized * span_px)
    }

    /// Decade positions (powers of ten) inside the domain, ascending.
    #[must_use]
    pub fn decade_ticks(self) -> Vec<f64> {
        let min_exp = self.domain_start.log10().floor() as i32;
        let max_exp = self.domain_end.log10().ceil() as i32;

        (min_exp..=max_exp)
            .map(|exp| 10_f64.powi(exp))
            .filter(|value| self.contains_approx(*value))
            .collect()
    }

    fn contains_approx(self, value: f64) -> bool {
        approx_ge(value, self.domain_start) && approx_ge(self.domain_end, value)
    }
}

pub(crate) fn approx_equal(lhs: f64, rhs: f64) -> bool {
    let scale = lhs.abs().max(rhs.abs()).max(1.0);
    (lhs - rhs).abs() <= scale * 1e-12
}

fn approx_ge(lhs: f64, rhs: f64) -> bool {
    lhs >= rhs || approx_equal(lhs, rhs)
}
