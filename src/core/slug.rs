//! URL-slug derivation for catalog records.

use crate::core::constants::SLUG_LENGTH;

/// Lowercase ASCII slug: alphanumerics and underscores survive, runs of
/// whitespace/hyphens collapse to a single hyphen, everything else is
/// dropped.  Leading/trailing hyphens and underscores are stripped and
/// the result is capped at [`SLUG_LENGTH`].
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len().min(SLUG_LENGTH));
    let mut dash_run = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if dash_run && !out.is_empty() {
                out.push('-');
            }
            dash_run = false;
            out.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            dash_run = true;
        }
        // anything else (punctuation, non-ASCII) is dropped
    }

    let trimmed = out.trim_matches(|c| c == '-' || c == '_');
    let mut slug = trimmed.to_owned();
    slug.truncate(SLUG_LENGTH);
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_single_hyphens() {
        assert_eq!(slugify("Rolled  Oats"), "rolled-oats");
    }

    #[test]
    fn underscores_survive() {
        assert_eq!(slugify("BrandCo_Rolled Oats"), "brandco_rolled-oats");
    }

    #[test]
    fn punctuation_and_accents_are_dropped() {
        assert_eq!(slugify("Crème brûlée (50% off!)"), "crme-brle-50-off");
    }

    #[test]
    fn edges_are_trimmed() {
        assert_eq!(slugify("  --salt--  "), "salt");
        assert_eq!(slugify("___"), "");
    }

    #[test]
    fn result_is_length_capped() {
        let long = "a".repeat(3 * SLUG_LENGTH);
        assert_eq!(slugify(&long).len(), SLUG_LENGTH);
    }
}
