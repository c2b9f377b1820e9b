//! Self-contained HTML report for a day's diary.
//!
//! One table row per nutrient: the summed amount rendered as a
//! target-range bar against that nutrient's range.  A footer line gives
//! entry count, weight, cost, and cost per kilogram.

use std::fmt::Write;

use crate::core::{
    constants::NUTRIENT_COLUMNS,
    data::{DiaryRow, TargetTable, totals},
    scalar::{Scalar, fmt_num},
    scheme::Scheme,
};
use crate::render::{
    bars::{divide, target_range_bar},
    markup::{Markup, escape},
};

/// w3css served from the usual place so a written-out report opens
/// styled in a browser.
const STYLESHEET: &str = "https://www.w3schools.com/w3css/4/w3.css";

/// Render the full report document.
#[must_use]
pub fn render_report(
    rows: &[DiaryRow],
    targets: &TargetTable,
    scheme: &Scheme,
    title: &str,
) -> Markup {
    let sums = totals(rows);
    let mut out = String::with_capacity(4096);

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{}</title>", escape(title));
    let _ = writeln!(out, "<link rel=\"stylesheet\" href=\"{STYLESHEET}\">");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body class=\"w3-container\">");
    let _ = writeln!(out, "<h2>{}</h2>", escape(title));

    let _ = writeln!(out, "<table class=\"w3-table w3-bordered\">");
    let _ = writeln!(
        out,
        "  <tr><th>Nutrient</th><th>Total vs target</th></tr>"
    );
    for (i, column) in NUTRIENT_COLUMNS.iter().enumerate() {
        let range = targets.ranges[i];
        let bar = target_range_bar(
            &Scalar::from(sums.nutrients[i]),
            &Scalar::from(range.min),
            &Scalar::from(range.max),
            scheme,
        );
        let _ = writeln!(out, "  <tr><td>{}</td><td>{bar}</td></tr>", escape(column));
    }
    let _ = writeln!(out, "</table>");

    // Cost footer.  Weight is grams; cost per kg divides by kg so a
    // zero-weight day degrades to the NaN sentinel.
    let per_kg = divide(
        &Scalar::from(sums.cost),
        &Scalar::from(sums.weight / 1000.0),
    )
    .unwrap_or_else(|| "NaN".into());
    let _ = writeln!(
        out,
        "<p>{} entries &middot; {}g &middot; ${} (${}/kg)</p>",
        sums.entries,
        fmt_num(sums.weight),
        fmt_num(sums.cost),
        per_kg,
    );

    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    Markup::from_trusted(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::NUTRIENT_COUNT;

    fn row(name: &str, weight: f64, cost: f64, kilojoules: f64) -> DiaryRow {
        let mut nutrients = [0.0; NUTRIENT_COUNT];
        nutrients[0] = kilojoules;
        DiaryRow {
            name: name.into(),
            weight,
            cost,
            nutrients,
        }
    }

    #[test]
    fn one_bar_per_nutrient() {
        let rows = vec![row("porridge", 350.0, 0.25, 1100.0)];
        let html = render_report(&rows, &TargetTable::reference(), &Scheme::w3(), "Day")
            .into_string();
        for column in NUTRIENT_COLUMNS {
            assert!(html.contains(&format!("<td>{column}</td>")));
        }
        // 1100 kJ against 8000–9500: under minimum, three nested regions
        assert!(html.contains("<div class=\"w3-green\">"));
    }

    #[test]
    fn footer_reports_cost_per_kg() {
        let rows = vec![
            row("porridge", 350.0, 0.25, 1100.0),
            row("coffee", 250.0, 0.5, 310.0),
        ];
        let html = render_report(&rows, &TargetTable::reference(), &Scheme::w3(), "Day")
            .into_string();
        assert!(html.contains("2 entries"));
        assert!(html.contains("600g"));
        assert!(html.contains("$1.25/kg"));
    }

    #[test]
    fn empty_diary_degrades_to_nan_cost() {
        let html =
            render_report(&[], &TargetTable::reference(), &Scheme::w3(), "Day").into_string();
        assert!(html.contains("$NaN/kg"));
        // bars still render: every total is 0 and sits under its minimum
        assert!(html.contains("w3-green"));
    }

    #[test]
    fn titles_are_escaped() {
        let html = render_report(
            &[],
            &TargetTable::reference(),
            &Scheme::w3(),
            "<script>alert(1)</script>",
        )
        .into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
