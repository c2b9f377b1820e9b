//! The display filters: target-range bar, plain progress bar, division.
//!
//! Each takes positional arguments the way a template would hand them
//! over and answers with a string; bad input narrows the visual instead
//! of failing.  Layout math lives in `core::targets` — this module only
//! turns layouts into markup.

use std::fmt::Write;

use crate::core::{
    scalar::{Scalar, fmt_num},
    scheme::Scheme,
    targets::{self, BarLayout},
};
use crate::render::markup::{Markup, escape};

/// Nested-box bar showing how far `value` is from a min/max target
/// range, labelled `value (min%-max%)`.
///
/// Unparseable `value` yields empty markup; each bound degrades
/// independently (absent, unparseable, or zero bounds drop out of the
/// label and stand in as 0 for region sizing).
#[must_use]
pub fn target_range_bar(
    value: &Scalar,
    min_target: &Scalar,
    max_target: &Scalar,
    scheme: &Scheme,
) -> Markup {
    let Some(layout) = targets::layout(value, min_target, max_target) else {
        return Markup::empty();
    };
    Markup::from_trusted(encode_target(&layout, scheme))
}

/// Cell text: the value, with the percent suffix on its own small line.
fn label(layout: &BarLayout) -> String {
    let value = fmt_num(layout.value);
    match layout.label_percents() {
        (Some(lo), Some(hi)) => format!("{value}<small><br>({lo}%-{hi}%)</small>"),
        (Some(p), None) | (None, Some(p)) => format!("{value}<small><br>({p}%)</small>"),
        (None, None) => value,
    }
}

fn encode_target(layout: &BarLayout, scheme: &Scheme) -> String {
    let contents = label(layout);
    let mut out = String::with_capacity(64 + contents.len());

    for region in &layout.regions {
        let class = scheme.class(region.band);
        match region.width {
            None => {
                let _ = write!(out, "<div class=\"{class}\">");
            }
            Some(w) => {
                let _ = write!(out, "<div class=\"{class}\" style=\"width:{w}%\">");
            }
        }
    }
    out.push_str(&contents);
    for _ in &layout.regions {
        out.push_str("</div>");
    }
    out
}

/// Two-layer progress bar with width `value/max_value` percent, capped
/// at 100.  A non-numeric `value` passes through as escaped text.
#[must_use]
pub fn progress_bar(value: &Scalar, max_value: &Scalar, scheme: &Scheme) -> Markup {
    let Some(val) = value.as_finite() else {
        return Markup::from_plain(&value.raw_text());
    };
    let width = targets::progress_width(val, max_value);
    Markup::from_trusted(format!(
        "<div class=\"{bg}\"><div class=\"{fg}\" style=\"width:{width}%\">{label}</div></div>",
        bg = scheme.bg,
        fg = scheme.fg,
        label = escape(&value.raw_text()),
    ))
}

/// Quotient of two template numbers, `"NaN"` when the denominator is
/// zero.  `None` when either side fails to parse at all.
#[must_use]
pub fn divide(num: &Scalar, den: &Scalar) -> Option<String> {
    let n = num.as_finite()?;
    let d = den.as_finite()?;
    if d == 0.0 {
        Some("NaN".into())
    } else {
        Some(fmt_num(n / d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(v: &str, lo: &str, hi: &str) -> String {
        target_range_bar(
            &Scalar::from(v),
            &Scalar::from(lo),
            &Scalar::from(hi),
            &Scheme::w3(),
        )
        .into_string()
    }

    #[test]
    fn non_numeric_value_renders_nothing() {
        assert_eq!(bar("soup", "100", "200"), "");
    }

    #[test]
    fn over_maximum_is_one_region() {
        assert_eq!(
            bar("250", "100", "200"),
            "<div class=\"w3-red\">250<small><br>(250%-125%)</small></div>"
        );
    }

    #[test]
    fn inside_range_is_two_regions() {
        assert_eq!(
            bar("150", "100", "200"),
            "<div class=\"w3-orange\">\
             <div class=\"w3-red\" style=\"width:75%\">\
             150<small><br>(150%-75%)</small>\
             </div></div>"
        );
    }

    #[test]
    fn under_minimum_is_three_regions() {
        assert_eq!(
            bar("50", "100", "200"),
            "<div class=\"w3-green\">\
             <div class=\"w3-orange\" style=\"width:50%\">\
             <div class=\"w3-red\" style=\"width:25%\">\
             50<small><br>(50%-25%)</small>\
             </div></div></div>"
        );
    }

    #[test]
    fn single_bound_shows_one_percent() {
        assert_eq!(
            bar("150", "100", ""),
            "<div class=\"w3-red\">150<small><br>(150%)</small></div>"
        );
    }

    #[test]
    fn no_bounds_shows_bare_value() {
        let m = target_range_bar(
            &Scalar::from(7.5),
            &Scalar::Absent,
            &Scalar::Absent,
            &Scheme::w3(),
        );
        assert_eq!(m.as_str(), "<div class=\"w3-red\">7.5</div>");
    }

    #[test]
    fn zero_percents_drop_out_of_the_label() {
        // value 0 against real targets: percents compute to 0 and the
        // label shows the bare value over three 0-width regions.
        assert_eq!(
            bar("0", "100", "200"),
            "<div class=\"w3-green\">\
             <div class=\"w3-orange\" style=\"width:0%\">\
             <div class=\"w3-red\" style=\"width:0%\">\
             0\
             </div></div></div>"
        );
    }

    #[test]
    fn progress_bar_scales_and_caps() {
        let s = Scheme::w3();
        assert_eq!(
            progress_bar(&Scalar::from(50.0), &Scalar::from(200.0), &s).as_str(),
            "<div class=\"w3-black\"><div class=\"w3-deep-purple\" style=\"width:25%\">50</div></div>"
        );
        assert_eq!(
            progress_bar(&Scalar::from(250.0), &Scalar::from(200.0), &s).as_str(),
            "<div class=\"w3-black\"><div class=\"w3-deep-purple\" style=\"width:100%\">250</div></div>"
        );
    }

    #[test]
    fn progress_bar_passes_text_through_escaped() {
        let s = Scheme::w3();
        assert_eq!(
            progress_bar(&Scalar::from("<n/a>"), &Scalar::from(100.0), &s).as_str(),
            "&lt;n/a&gt;"
        );
    }

    #[test]
    fn divide_handles_the_zero_denominator() {
        assert_eq!(
            divide(&Scalar::from(10.0), &Scalar::from(0.0)),
            Some("NaN".into())
        );
        assert_eq!(
            divide(&Scalar::from(10.0), &Scalar::from(4.0)),
            Some("2.5".into())
        );
        assert_eq!(divide(&Scalar::from("x"), &Scalar::from(4.0)), None);
    }
}
