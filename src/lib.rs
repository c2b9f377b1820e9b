//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    catalog::{CatalogError, Price, Product, Supplier},
    data::{DiaryRow, DiaryTotals, TargetRange, TargetTable},
    error::ReportError,
    scalar::Scalar,
    scheme::{Scheme, SchemeBuilder, SchemeError},
    slug::slugify,
    targets::{Band, BarLayout},
};

pub use crate::render::{
    Markup, divide, escape, progress_bar, render_report, report_lines, target_range_bar,
};

/// Convenience function: render the full HTML report for a diary CSV in
/// one call, with the built-in reference targets.
pub fn report_from_csv(path: &str, title: &str, scheme: &str) -> Result<Markup, ReportError> {
    let rows = crate::core::data::read_diary_from_path(path)?;
    let scheme = Scheme::from_name(scheme)?;
    Ok(render_report(
        &rows,
        &TargetTable::reference(),
        &scheme,
        title,
    ))
}
