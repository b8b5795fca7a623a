//! Number formatting for display.
//!
//! Populations are rendered with locale-appropriate digit grouping. Only the
//! grouping separator varies between the supported locales; populations are
//! whole numbers so no decimal separator is involved.

use serde::{Deserialize, Serialize};

/// Locale used for grouping digits in formatted numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberLocale {
    /// `1,234,567`
    #[default]
    EnUs,
    /// `1.234.567`
    De,
    /// `1 234 567` with a narrow no-break space.
    Fr,
    /// `1'234'567`
    Ch,
}

impl NumberLocale {
    /// Returns the digit grouping separator for this locale.
    #[must_use]
    pub const fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::De => '.',
            Self::Fr => '\u{202f}',
            Self::Ch => '\'',
        }
    }

    /// Parses a locale tag such as `en-US`, `de`, or `fr_FR`.
    ///
    /// Only the language part is significant, except that `de-CH` maps to
    /// [`NumberLocale::Ch`]. Unknown tags return `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace('_', "-").to_lowercase();
        let mut parts = normalized.split('-');
        let language = parts.next()?;
        let region = parts.next();

        match (language, region) {
            (_, Some("ch")) => Some(Self::Ch),
            ("en", _) => Some(Self::EnUs),
            ("de", _) => Some(Self::De),
            ("fr", _) => Some(Self::Fr),
            _ => None,
        }
    }
}

/// Formats a number with thousands separators for the given locale.
///
/// # Examples
///
/// ```
/// use country_explorer::domain::format::{format_grouped, NumberLocale};
///
/// assert_eq!(format_grouped(1_234_567, NumberLocale::De), "1.234.567");
/// assert_eq!(format_grouped(999, NumberLocale::De), "999");
/// ```
#[must_use]
pub fn format_grouped(n: u64, locale: NumberLocale) -> String {
    let digits = n.to_string();
    let separator = locale.group_separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len_utf8());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }

    out
}

/// Formats a population count under the default US-style locale.
///
/// # Examples
///
/// ```
/// use country_explorer::format_population;
///
/// assert_eq!(format_population(1_234_567), "1,234,567");
/// ```
#[must_use]
pub fn format_population(n: u64) -> String {
    format_grouped(n, NumberLocale::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_thousands() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(12), "12");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(1_234_567), "1,234,567");
        assert_eq!(format_population(100_000_000), "100,000,000");
    }

    #[test]
    fn locale_separators() {
        assert_eq!(format_grouped(67_391_582, NumberLocale::Ch), "67'391'582");
        assert_eq!(format_grouped(67_391_582, NumberLocale::Fr), "67\u{202f}391\u{202f}582");
    }

    #[test]
    fn parses_locale_tags() {
        assert_eq!(NumberLocale::from_tag("en-US"), Some(NumberLocale::EnUs));
        assert_eq!(NumberLocale::from_tag("de_DE"), Some(NumberLocale::De));
        assert_eq!(NumberLocale::from_tag("de-CH"), Some(NumberLocale::Ch));
        assert_eq!(NumberLocale::from_tag("fr"), Some(NumberLocale::Fr));
        assert_eq!(NumberLocale::from_tag("ja-JP"), None);
    }
}
