//! Terminal approximation of the HTML bars, for the preview CLI.
//!
//! Nested CSS widths are relative to their parent, so a region's
//! on-screen span multiplies down the nesting chain.

use std::fmt::Write as _;

use terminal_size::{Width, terminal_size};

use crate::core::{
    color::{band_color, colorize},
    constants::{FALLBACK_TERM_COLS, MIN_BAR_COLS, NUTRIENT_COLUMNS},
    data::{DiaryRow, TargetTable, totals},
    scalar::{Scalar, fmt_num},
    targets::{self, Band, BarLayout},
};
use crate::render::bars::divide;

/// Current terminal width in columns (80 fallback).
#[inline]
#[must_use]
pub fn preview_cols() -> usize {
    terminal_size().map_or(FALLBACK_TERM_COLS, |(Width(w), _)| w as usize)
}

/// Absolute cell count of each region, outermost first.
fn absolute_spans(layout: &BarLayout, cols: usize) -> Vec<(Band, usize)> {
    let mut spans = Vec::with_capacity(layout.regions.len());
    let mut span = cols as f64;
    for region in &layout.regions {
        if let Some(w) = region.width {
            let frac = w.max(0) as f64 / 100.0;
            span = (span * frac).min(cols as f64);
        }
        spans.push((region.band, (span.round() as usize).min(cols)));
    }
    spans
}

/// One bar as a row of coloured block glyphs.
#[must_use]
pub fn encode_ansi(layout: &BarLayout, cols: usize) -> String {
    let cols = cols.max(1);
    let mut cells = vec![layout.regions[0].band; cols];
    for (band, fill) in absolute_spans(layout, cols) {
        for cell in &mut cells[..fill] {
            *cell = band;
        }
    }

    // emit as runs so each colour sequence appears once
    let mut out = String::with_capacity(cols * 4);
    let mut i = 0;
    while i < cols {
        let band = cells[i];
        let mut j = i;
        while j < cols && cells[j] == band {
            j += 1;
        }
        out.push_str(&colorize(band_color(band), &"█".repeat(j - i)));
        i = j;
    }
    out
}

/// Plain-text version of the cell label: `50 (50%-25%)`.
#[must_use]
pub fn label_text(layout: &BarLayout) -> String {
    let value = fmt_num(layout.value);
    match layout.label_percents() {
        (Some(lo), Some(hi)) => format!("{value} ({lo}%-{hi}%)"),
        (Some(p), None) | (None, Some(p)) => format!("{value} ({p}%)"),
        (None, None) => value,
    }
}

/// The whole diary report as terminal lines: one bar per nutrient plus
/// the cost footer.
#[must_use]
pub fn report_lines(rows: &[DiaryRow], targets_table: &TargetTable, term_cols: usize) -> String {
    let sums = totals(rows);
    let name_w = NUTRIENT_COLUMNS
        .iter()
        .map(|c| c.len())
        .max()
        .unwrap_or(0);
    // room for the name column, two gutters, and a label
    let bar_cols = term_cols
        .saturating_sub(name_w + 2 + 24)
        .max(MIN_BAR_COLS);

    let mut out = String::new();
    for (i, column) in NUTRIENT_COLUMNS.iter().enumerate() {
        let range = targets_table.ranges[i];
        let layout = targets::layout(
            &Scalar::from(sums.nutrients[i]),
            &Scalar::from(range.min),
            &Scalar::from(range.max),
        );
        match layout {
            Some(layout) => {
                let _ = writeln!(
                    out,
                    "{column:<name_w$}  {}  {}",
                    encode_ansi(&layout, bar_cols),
                    label_text(&layout),
                );
            }
            None => {
                let _ = writeln!(out, "{column:<name_w$}");
            }
        }
    }

    let per_kg = divide(
        &Scalar::from(sums.cost),
        &Scalar::from(sums.weight / 1000.0),
    )
    .unwrap_or_else(|| "NaN".into());
    let _ = writeln!(
        out,
        "{} entries, {}g, ${} (${}/kg)",
        sums.entries,
        fmt_num(sums.weight),
        fmt_num(sums.cost),
        per_kg,
    );
    out
}
