use std::sync::Arc;

use crate::core::LogScale;
use crate::core::scale::approx_equal;

/// Callback rendering a tick value as label text.
pub type TickLabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Formats a price axis value as US dollars.
///
/// Values `>= 1` are truncated to an integer and grouped by thousands
/// (`$1,234`); smaller values keep two decimals (`$0.37`).
#[must_use]
pub fn dollar_formatter(value: f64) -> String {
    if value >= 1.0 {
        format!("${}", group_thousands(value.trunc() as u64))
    } else {
        format!("${value:.2}")
    }
}

/// Plain `$`-prefixed label used for the explicit minor ticks.
#[must_use]
pub fn minor_tick_label(value: f64) -> String {
    format!("${value}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Major,
    Minor,
}

/// One labeled position on the price axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
    pub kind: TickKind,
}

/// Resolves the price-axis ticks for `scale`.
///
/// Majors sit on every in-range decade and are labeled by `formatter`.
/// Minors come from `minor_positions`; out-of-range values and positions
/// already covered by a major tick are skipped. Output is ascending by value.
#[must_use]
pub fn resolve_axis_ticks(
    scale: LogScale,
    minor_positions: &[f64],
    formatter: &dyn Fn(f64) -> String,
) -> Vec<AxisTick> {
    let majors = scale.decade_ticks();
    let mut ticks: Vec<AxisTick> = majors
        .iter()
        .map(|&value| AxisTick {
            value,
            label: formatter(value),
            kind: TickKind::Major,
        })
        .collect();

    for &value in minor_positions {
        if !value.is_finite() || !scale.contains(value) {
            continue;
        }
        if majors.iter().any(|major| approx_equal(*major, value)) {
            continue;
        }
        if ticks
            .iter()
            .any(|tick| tick.kind == TickKind::Minor && approx_equal(tick.value, value))
        {
            continue;
        }
        ticks.push(AxisTick {
            value,
            label: minor_tick_label(value),
            kind: TickKind::Minor,
        });
    }

    ticks.sort_by(|lhs, rhs| lhs.value.total_cmp(&rhs.value));
    ticks
}

#[cfg(test)]
mod tests {
    use super::{dollar_formatter, group_thousands, minor_tick_label};

    #[test]
    fn thousands_grouping_handles_group_boundaries() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(123_456), "123,456");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn dollar_formatter_truncates_instead_of_rounding() {
        assert_eq!(dollar_formatter(19.99), "$19");
        assert_eq!(dollar_formatter(1.0), "$1");
        assert_eq!(dollar_formatter(0.999), "$1.00");
    }

    #[test]
    fn minor_label_prints_integers_without_fraction() {
        assert_eq!(minor_tick_label(300.0), "$300");
        assert_eq!(minor_tick_label(2.5), "$2.5");
    }
}
