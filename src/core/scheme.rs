//! CSS class schemes + fluent builder.
//!
//! The markup encoders only ever emit class-name tokens; the stylesheet
//! that defines them lives with the embedding site.

use std::{error::Error, fmt};

use crate::core::targets::Band;

/// Class-name tokens handed to the markup encoders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheme {
    /// Value under the minimum target.
    pub under: String,
    /// Value over the minimum target.
    pub warn: String,
    /// Value over the maximum target.
    pub over: String,
    /// Plain progress-bar fill.
    pub fg: String,
    /// Plain progress-bar background.
    pub bg: String,
}

impl Scheme {
    /// w3css tokens, the historical default.
    #[must_use]
    pub fn w3() -> Self {
        Self {
            under: "w3-green".into(),
            warn: "w3-orange".into(),
            over: "w3-red".into(),
            fg: "w3-deep-purple".into(),
            bg: "w3-black".into(),
        }
    }

    /// Bootstrap-style background utility tokens.
    #[must_use]
    pub fn bootstrap() -> Self {
        Self {
            under: "bg-success".into(),
            warn: "bg-warning".into(),
            over: "bg-danger".into(),
            fg: "bg-primary".into(),
            bg: "bg-dark".into(),
        }
    }

    /// Framework-neutral semantic tokens for a custom stylesheet.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            under: "bar-under".into(),
            warn: "bar-warn".into(),
            over: "bar-over".into(),
            fg: "bar-fg".into(),
            bg: "bar-bg".into(),
        }
    }

    /// Look a preset up by name.
    pub fn from_name(name: &str) -> Result<Self, SchemeError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "w3" | "w3css" => Ok(Self::w3()),
            "bootstrap" => Ok(Self::bootstrap()),
            "plain" => Ok(Self::plain()),
            _ => Err(SchemeError::UnknownScheme(name.to_owned())),
        }
    }

    /// Names accepted by [`Scheme::from_name`].
    #[must_use]
    pub fn preset_names() -> &'static [&'static str] {
        &["w3", "bootstrap", "plain"]
    }

    #[inline]
    #[must_use]
    pub fn builder() -> SchemeBuilder {
        SchemeBuilder::new()
    }

    /// Class token for one band.
    #[must_use]
    pub fn class(&self, band: Band) -> &str {
        match band {
            Band::Under => &self.under,
            Band::Warn => &self.warn,
            Band::Over => &self.over,
        }
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Self::w3()
    }
}

/// Fluent per-token override on top of the default scheme.
#[derive(Debug, Default)]
pub struct SchemeBuilder {
    under: Option<String>,
    warn: Option<String>,
    over: Option<String>,
    fg: Option<String>,
    bg: Option<String>,
}

impl SchemeBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn under(mut self, class: impl Into<String>) -> Self {
        self.under = Some(class.into());
        self
    }
    #[inline]
    pub fn warn(mut self, class: impl Into<String>) -> Self {
        self.warn = Some(class.into());
        self
    }
    #[inline]
    pub fn over(mut self, class: impl Into<String>) -> Self {
        self.over = Some(class.into());
        self
    }
    #[inline]
    pub fn fg(mut self, class: impl Into<String>) -> Self {
        self.fg = Some(class.into());
        self
    }
    #[inline]
    pub fn bg(mut self, class: impl Into<String>) -> Self {
        self.bg = Some(class.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Scheme {
        let base = Scheme::w3();
        Scheme {
            under: self.under.unwrap_or(base.under),
            warn: self.warn.unwrap_or(base.warn),
            over: self.over.unwrap_or(base.over),
            fg: self.fg.unwrap_or(base.fg),
            bg: self.bg.unwrap_or(base.bg),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SchemeError {
    UnknownScheme(String),
}

impl fmt::Display for SchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemeError::UnknownScheme(name) => {
                write!(f, "unknown scheme `{name}` (try one of: w3, bootstrap, plain)")
            }
        }
    }
}
impl Error for SchemeError {}
