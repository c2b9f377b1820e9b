use std::time::Instant;

use crate::{
    core::{
        catalog::Price,
        data::{TargetTable, read_diary_from_path, read_targets_from_path},
        error::ReportError,
        scalar::Scalar,
        scheme::Scheme,
        targets,
    },
    render::{
        ansi::{encode_ansi, label_text, preview_cols, report_lines},
        bars::target_range_bar,
        report::render_report,
    },
};

use super::parse::{BarArgs, PerKgArgs, ReportArgs};

pub fn report(a: &ReportArgs) -> Result<(), ReportError> {
    let t_ingest = Instant::now();
    let rows = read_diary_from_path(&a.file)?;
    let targets_table = match &a.targets {
        Some(path) => read_targets_from_path(path)?,
        None => TargetTable::reference(),
    };
    let dur_ingest = t_ingest.elapsed().as_micros();

    let t_render = Instant::now();
    let output = if a.ansi {
        report_lines(&rows, &targets_table, preview_cols())
    } else {
        let scheme = Scheme::from_name(&a.scheme)?;
        render_report(&rows, &targets_table, &scheme, &a.title).into_string()
    };
    let dur_render = t_render.elapsed().as_micros();

    if a.debug {
        eprintln!(
            "diary ingest: {dur_ingest} µs   ({} rows)   render: {dur_render} µs",
            rows.len()
        );
    }

    match &a.out {
        Some(path) => std::fs::write(path, output)?,
        None => print!("{output}"),
    }
    Ok(())
}

pub fn bar(a: &BarArgs) -> Result<(), ReportError> {
    let value = Scalar::from(a.value.as_str());
    let min = Scalar::from(&a.min);
    let max = Scalar::from(&a.max);

    if a.ansi {
        match targets::layout(&value, &min, &max) {
            Some(layout) => println!(
                "{}  {}",
                encode_ansi(&layout, preview_cols().saturating_sub(24).max(10)),
                label_text(&layout),
            ),
            None => println!(),
        }
    } else {
        let scheme = Scheme::from_name(&a.scheme)?;
        println!("{}", target_range_bar(&value, &min, &max, &scheme));
    }
    Ok(())
}

pub fn per_kg(a: &PerKgArgs) -> Result<(), ReportError> {
    let price = Price::new(a.price, a.weight)?;
    match price.per_kg() {
        Some(pk) => println!("{pk:.2}"),
        None => println!("NaN"),
    }
    Ok(())
}

/// Pretty-print the class schemes and the tokens they emit.
pub fn schemes() {
    use crate::core::color::{AnsiCode, colorize};

    println!("\nAvailable schemes:");
    for name in Scheme::preset_names() {
        let s = Scheme::from_name(name).unwrap_or_default();
        println!(
            "  {name:<10} {} {} {}  (fg {}, bg {})",
            colorize(AnsiCode::green(), &s.under),
            colorize(AnsiCode::orange(), &s.warn),
            colorize(AnsiCode::red(), &s.over),
            colorize(AnsiCode::magenta(), &s.fg),
            colorize(AnsiCode::dim(), &s.bg),
        );
    }
    println!();
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "nutribar"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• Daily report       : {bin} report diary.csv --out report.html
• Report from stdin  : cat diary.csv | {bin} report
• Custom targets     : {bin} report diary.csv --targets targets.csv
• Terminal preview   : {bin} report diary.csv --ansi
• One bar            : {bin} bar 150 100 200
• One bar, terminal  : {bin} bar 150 100 200 --ansi
• Bootstrap classes  : {bin} bar 150 100 200 --scheme bootstrap
• Price per kg       : {bin} per-kg 5.50 0.750
• Debug mode         : {bin} report diary.csv --debug
"
    );
}
