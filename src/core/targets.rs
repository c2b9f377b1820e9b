//! Target-range math: percent computation + nested-region layout.
//!
//! This is the data half of the bar pipeline.  `layout` maps a measured
//! value plus optional min/max targets to a [`BarLayout`]; the encoders in
//! `render` turn that into HTML or ANSI without redoing any arithmetic.

use crate::core::scalar::Scalar;

/// Styling band of one nested region.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Band {
    /// Value is under the minimum target.
    Under,
    /// Value is over the minimum target.
    Warn,
    /// Value is over the maximum target.
    Over,
}

/// One nested box.  `width` is a whole CSS percent of the enclosing
/// region; `None` means natural full width.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Region {
    pub band: Band,
    pub width: Option<i64>,
}

/// Layout of one target-range bar, outermost region first.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub value: f64,
    pub min_percent: Option<i64>,
    pub max_percent: Option<i64>,
    pub regions: Vec<Region>,
}

impl BarLayout {
    /// Percents as used for label composition.  A computed percent of
    /// exactly 0 counts as absent here (it still sizes a 0-width region).
    #[must_use]
    pub fn label_percents(&self) -> (Option<i64>, Option<i64>) {
        (
            self.min_percent.filter(|p| *p != 0),
            self.max_percent.filter(|p| *p != 0),
        )
    }
}

/// Value as a floored whole percent of `target`, plus the numeric
/// stand-in used for region thresholds.
///
/// A target that is absent, unparseable, zero, or otherwise unusable
/// yields no percent and a 0 stand-in.
fn percent_of(value: f64, target: &Scalar) -> (f64, Option<i64>) {
    match target.as_finite() {
        Some(t) if t != 0.0 => (t, Some(floor_percent(value, t))),
        Some(_) | None => (0.0, None),
    }
}

#[inline]
fn floor_percent(value: f64, target: f64) -> i64 {
    (100.0 * value / target).floor() as i64
}

/// Compute the nested-region layout for `value` against an optional
/// target range.  Returns `None` when the value itself is unusable.
///
/// Thresholds come from the targets with 0 standing in for an absent
/// bound, swapped so the high bound is never below the low one; the
/// label percents keep their unswapped min/max assignment.
#[must_use]
pub fn layout(value: &Scalar, min_target: &Scalar, max_target: &Scalar) -> Option<BarLayout> {
    let val = value.as_finite()?;

    let (min_t, min_percent) = percent_of(val, min_target);
    let (max_t, max_percent) = percent_of(val, max_target);

    let (lo, hi) = if min_t > max_t {
        (max_t, min_t)
    } else {
        (min_t, max_t)
    };

    let regions = if val >= hi {
        vec![Region {
            band: Band::Over,
            width: None,
        }]
    } else if val >= lo {
        vec![
            Region {
                band: Band::Warn,
                width: None,
            },
            Region {
                band: Band::Over,
                width: Some(max_percent.unwrap_or(0)),
            },
        ]
    } else {
        vec![
            Region {
                band: Band::Under,
                width: None,
            },
            Region {
                band: Band::Warn,
                width: Some(min_percent.unwrap_or(0)),
            },
            Region {
                band: Band::Over,
                width: Some(max_percent.unwrap_or(0)),
            },
        ]
    };

    Some(BarLayout {
        value: val,
        min_percent,
        max_percent,
        regions,
    })
}

/// Fill width for the plain progress bar: floored percent of
/// `max_value`, capped at 100.  An absent, unparseable, or zero
/// `max_value` falls back to 100.
#[must_use]
pub fn progress_width(value: f64, max_value: &Scalar) -> i64 {
    let max = max_value.as_finite().filter(|m| *m != 0.0).unwrap_or(100.0);
    if value < max {
        floor_percent(value, max).max(0)
    } else {
        100
    }
}
