//! Diary rows, target tables, and their CSV ingest.
//!
//! The diary format is one consumed food per line:
//!
//! ```text
//! name,weight,cost,kilojoules,protein,fat,saturatedfat,carbohydrate,sugar,fibre,sodium
//! porridge,350,0.40,1100,10.5,5.2,1.1,40,1.2,9,4
//! ```
//!
//! Simple CSV only: no quoting, `#` comments and blank lines skipped, an
//! optional header row detected by its non-numeric second column.  Blank
//! numeric fields read as 0 (missing diary data is normal and must not
//! kill the report).

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

use crate::core::{
    constants::{NUTRIENT_COLUMNS, NUTRIENT_COUNT, REFERENCE_TARGETS},
    scalar::normalize_unicode_minus,
};

/// Column count of the diary format: name, weight, cost + nutrients.
const DIARY_COLUMNS: usize = 3 + NUTRIENT_COUNT;

// --- Public Row Structs ---

/// One consumed food.  `weight` is grams, `cost` is dollars, nutrient
/// amounts are absolute for the entry (not per 100 g).
#[derive(Clone, Debug, PartialEq)]
pub struct DiaryRow {
    pub name: String,
    pub weight: f64,
    pub cost: f64,
    pub nutrients: [f64; NUTRIENT_COUNT],
}

/// Column-wise sums over a set of diary rows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DiaryTotals {
    pub entries: usize,
    pub weight: f64,
    pub cost: f64,
    pub nutrients: [f64; NUTRIENT_COUNT],
}

#[must_use]
pub fn totals(rows: &[DiaryRow]) -> DiaryTotals {
    let mut t = DiaryTotals::default();
    for row in rows {
        t.entries += 1;
        t.weight += row.weight;
        t.cost += row.cost;
        for (sum, amount) in t.nutrients.iter_mut().zip(row.nutrients) {
            *sum += amount;
        }
    }
    t
}

/// Optional `[min, max]` pair one nutrient is compared against.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TargetRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Target ranges in [`NUTRIENT_COLUMNS`] order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetTable {
    pub ranges: [TargetRange; NUTRIENT_COUNT],
}

impl TargetTable {
    /// Built-in daily-intake reference ranges.
    #[must_use]
    pub fn reference() -> Self {
        let mut ranges = [TargetRange::default(); NUTRIENT_COUNT];
        for (r, (min, max)) in ranges.iter_mut().zip(REFERENCE_TARGETS) {
            r.min = (min != 0.0).then_some(min);
            r.max = (max != 0.0).then_some(max);
        }
        Self { ranges }
    }
}

// --- Error Handling ---

#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadColumnCount { want: usize, got: usize },
    BadFloat { field: &'static str, text: String },
    UnknownNutrient(String),
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadColumnCount { want, got } => {
                write!(f, "line {}: expected {} columns, got {}", self.line, want, got)
            }
            ParseErrorKind::BadFloat { field, text } => {
                write!(f, "line {}: invalid {} value '{}'", self.line, field, text)
            }
            ParseErrorKind::UnknownNutrient(name) => {
                write!(f, "line {}: unknown nutrient '{}'", self.line, name)
            }
        }
    }
}
impl Error for ParseCsvError {}

// --- Helpers ---

#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, field: &'static str) -> Result<f64, ParseCsvError> {
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat {
            field,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseCsvError {
            line,
            kind: ParseErrorKind::BadFloat {
                field,
                text: "NaN".into(),
            },
        })
    }
}

/// Blank numeric fields read as 0.
#[inline]
fn parse_f64_or_zero(
    bytes: &[u8],
    line: usize,
    field: &'static str,
) -> Result<f64, ParseCsvError> {
    if bytes.is_empty() {
        Ok(0.0)
    } else {
        parse_f64(bytes, line, field)
    }
}

/// Split one pre-trimmed line into at most `max` comma fields.
fn split_fields<'a>(
    buf: &'a [u8],
    fields: &mut Vec<&'a [u8]>,
    max: usize,
    line: usize,
) -> Result<(), ParseCsvError> {
    fields.clear();
    let mut start = 0;
    loop {
        let end = buf[start..]
            .iter()
            .position(|&b| b == b',')
            .map_or(buf.len(), |p| start + p);
        if fields.len() == max {
            return Err(ParseCsvError {
                line,
                kind: ParseErrorKind::BadColumnCount {
                    want: max,
                    got: max + 1,
                },
            });
        }
        fields.push(trim(&buf[start..end]));
        if end == buf.len() {
            return Ok(());
        }
        start = end + 1;
    }
}

// --- Fast CSV ingest ---

const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Line-reader skeleton shared by the diary and target ingests: strips
/// EOL, normalizes unicode minus, skips blanks and `#` comments.
fn for_each_line<R: Read>(
    src: R,
    mut visit: impl FnMut(&[u8], usize) -> Result<(), ParseCsvError>,
) -> Result<(), ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            return Ok(());
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if trim(&buf).is_empty() || buf[0] == b'#' {
            continue;
        }
        visit(&buf, line_no)?;
    }
}

/// Read diary rows.  The first non-comment line is treated as a header
/// and skipped when its second column is not numeric.
pub fn read_diary<R: Read>(src: R) -> Result<Vec<DiaryRow>, ParseCsvError> {
    let mut rows = Vec::<DiaryRow>::new();
    let mut saw_first = false;

    for_each_line(src, |buf, line_no| {
        let mut cols = Vec::with_capacity(DIARY_COLUMNS);
        split_fields(buf, &mut cols, DIARY_COLUMNS, line_no)?;

        if !saw_first {
            saw_first = true;
            let header = cols
                .get(1)
                .is_none_or(|c| lexical_core::parse::<f64>(c).is_err());
            if header {
                return Ok(());
            }
        }

        if cols.len() != DIARY_COLUMNS {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount {
                    want: DIARY_COLUMNS,
                    got: cols.len(),
                },
            });
        }

        let name = String::from_utf8_lossy(cols[0]).into_owned();
        let weight = parse_f64_or_zero(cols[1], line_no, "weight")?;
        let cost = parse_f64_or_zero(cols[2], line_no, "cost")?;
        let mut nutrients = [0.0; NUTRIENT_COUNT];
        for (i, slot) in nutrients.iter_mut().enumerate() {
            *slot = parse_f64_or_zero(cols[3 + i], line_no, NUTRIENT_COLUMNS[i])?;
        }

        rows.push(DiaryRow {
            name,
            weight,
            cost,
            nutrients,
        });
        Ok(())
    })?;

    Ok(rows)
}

/// Read a target table: `nutrient,min,max` lines overriding the built-in
/// reference ranges.  Blank bounds clear that bound.
pub fn read_targets<R: Read>(src: R) -> Result<TargetTable, ParseCsvError> {
    let mut table = TargetTable::reference();
    let mut saw_first = false;

    for_each_line(src, |buf, line_no| {
        let mut cols = Vec::new();
        split_fields(buf, &mut cols, 3, line_no)?;

        if !saw_first {
            saw_first = true;
            let named = cols
                .first()
                .is_some_and(|c| NUTRIENT_COLUMNS.iter().any(|n| n.as_bytes() == *c));
            if !named {
                return Ok(()); // header
            }
        }

        if cols.len() != 3 {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount {
                    want: 3,
                    got: cols.len(),
                },
            });
        }

        let name = String::from_utf8_lossy(cols[0]).into_owned();
        let Some(slot) = NUTRIENT_COLUMNS.iter().position(|c| *c == name) else {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::UnknownNutrient(name),
            });
        };

        let min = if cols[1].is_empty() {
            None
        } else {
            Some(parse_f64(cols[1], line_no, "min")?)
        };
        let max = if cols[2].is_empty() {
            None
        } else {
            Some(parse_f64(cols[2], line_no, "max")?)
        };
        table.ranges[slot] = TargetRange { min, max };
        Ok(())
    })?;

    Ok(table)
}

pub fn read_diary_from_path(path: &str) -> Result<Vec<DiaryRow>, ParseCsvError> {
    if path == "-" {
        read_diary(std::io::stdin())
    } else {
        use std::fs::File;
        read_diary(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

pub fn read_targets_from_path(path: &str) -> Result<TargetTable, ParseCsvError> {
    use std::fs::File;
    read_targets(File::open(path).map_err(|e| ParseCsvError {
        line: 0,
        kind: ParseErrorKind::Io(e),
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
name,weight,cost,kilojoules,protein,fat,saturatedfat,carbohydrate,sugar,fibre,sodium
# breakfast
porridge,350,0.25,1100,10.5,5.2,1.1,40,1.2,9,4

coffee,250,0.5,310,8,4,2.5,6,6,,30
";

    #[test]
    fn header_comments_and_blanks_are_skipped() {
        let rows = read_diary(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "porridge");
        assert_eq!(rows[0].weight, 350.0);
        assert_eq!(rows[0].nutrients[0], 1100.0);
        // blank fibre field on the coffee line reads as 0
        assert_eq!(rows[1].nutrients[6], 0.0);
    }

    #[test]
    fn totals_sum_every_column() {
        let rows = read_diary(SAMPLE.as_bytes()).unwrap();
        let t = totals(&rows);
        assert_eq!(t.entries, 2);
        assert_eq!(t.weight, 600.0);
        assert_eq!(t.cost, 0.75);
        assert_eq!(t.nutrients[0], 1410.0);
        assert_eq!(t.nutrients[1], 18.5);
    }

    #[test]
    fn bad_floats_are_positioned() {
        let bad = "porridge,350,0.40,lots,10.5,5.2,1.1,40,1.2,9,4\n";
        let err = read_diary(bad.as_bytes()).unwrap_err();
        assert_eq!(err.line, 1);
        assert!(matches!(
            err.kind,
            ParseErrorKind::BadFloat {
                field: "kilojoules",
                ..
            }
        ));
    }

    #[test]
    fn column_count_is_enforced() {
        let short = "name,weight,cost,kilojoules,protein,fat,saturatedfat,carbohydrate,sugar,fibre,sodium\nporridge,350,0.40\n";
        let err = read_diary(short.as_bytes()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(
            err.kind,
            ParseErrorKind::BadColumnCount { want: 11, got: 3 }
        ));
    }

    #[test]
    fn unicode_minus_normalizes() {
        // A negative adjustment entry; parsing is sign-agnostic.
        let line = "correction,0,\u{2212}0.40,\u{2212}310,0,0,0,0,0,0,0\n";
        let rows = read_diary(line.as_bytes()).unwrap();
        assert_eq!(rows[0].cost, -0.4);
        assert_eq!(rows[0].nutrients[0], -310.0);
    }

    #[test]
    fn target_overrides_replace_reference_ranges() {
        let csv = "nutrient,min,max\nprotein,80,120\nsodium,,1500\n";
        let table = read_targets(csv.as_bytes()).unwrap();
        assert_eq!(table.ranges[1].min, Some(80.0));
        assert_eq!(table.ranges[1].max, Some(120.0));
        assert_eq!(table.ranges[7].min, None);
        assert_eq!(table.ranges[7].max, Some(1500.0));
        // untouched rows keep the reference values
        assert_eq!(table.ranges[0].min, Some(8000.0));
    }

    #[test]
    fn unknown_nutrients_are_rejected() {
        let csv = "protein,80,120\ncaffeine,1,2\n";
        let err = read_targets(csv.as_bytes()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ParseErrorKind::UnknownNutrient(_)));
    }

    #[test]
    fn reference_table_drops_zero_bounds() {
        let t = TargetTable::reference();
        // fat has no minimum in the reference table
        assert_eq!(t.ranges[2].min, None);
        assert_eq!(t.ranges[2].max, Some(70.0));
    }
}
