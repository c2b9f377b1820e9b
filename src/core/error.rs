//! Centralised error types used across the crate.
//!
//! The filter functions themselves never fail — bad display input
//! degrades the output instead.  These types cover the surrounding
//! plumbing: file ingest, scheme lookup, record validation, I/O.

use std::{error::Error, fmt, io};

use crate::core::{catalog::CatalogError, data::ParseCsvError, scheme::SchemeError};

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum ReportError {
    Io(io::Error),
    Csv(ParseCsvError),
    Scheme(SchemeError),
    Catalog(CatalogError),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io(e) => write!(f, "{e}"),
            ReportError::Csv(e) => write!(f, "{e}"),
            ReportError::Scheme(e) => write!(f, "{e}"),
            ReportError::Catalog(e) => write!(f, "{e}"),
        }
    }
}
impl Error for ReportError {}

// automatic conversions
impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseCsvError> for ReportError {
    fn from(e: ParseCsvError) -> Self {
        Self::Csv(e)
    }
}
impl From<SchemeError> for ReportError {
    fn from(e: SchemeError) -> Self {
        Self::Scheme(e)
    }
}
impl From<CatalogError> for ReportError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}
