//! Display formatting for the dashboard panels.
//!
//! All formatting flows through [`Formatters`], a service object owning a
//! cache of per-`(currency, tier)` patterns. Every operation is total: bad
//! input produces the `"-"` placeholder, never a panic or a partial string.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::collections::HashMap;

/// Rendered in place of an absent or non-finite numeric value.
pub const PLACEHOLDER: &str = "-";

/// Rendered in place of an absent or unparsable timestamp. Distinct from
/// [`PLACEHOLDER`]: a missing instant is not the same as a bad number.
pub const NO_TIMESTAMP: &str = "—";

/// Magnitude bucket selecting the fraction precision of a currency value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Non-default currency, |value| >= 1.
    Unit,
    /// Non-default currency, |value| < 1.
    Fraction,
    /// Default currency, |value| >= 100_000.
    Large,
    /// Default currency, 1 <= |value| < 100_000.
    Default,
    /// Default currency, |value| < 1.
    Small,
}

impl Tier {
    /// Derive the tier from the currency kind and the value magnitude.
    /// Boundaries are exact: 100_000 is Large, 1.0 is Default.
    pub fn derive(is_default_currency: bool, magnitude: f64) -> Self {
        if is_default_currency {
            if magnitude >= LARGE_THRESHOLD {
                Tier::Large
            } else if magnitude >= 1.0 {
                Tier::Default
            } else {
                Tier::Small
            }
        } else if magnitude >= 1.0 {
            Tier::Unit
        } else {
            Tier::Fraction
        }
    }

    pub fn fraction_digits(&self) -> usize {
        match self {
            Tier::Unit => 2,
            Tier::Fraction | Tier::Small => 4,
            Tier::Large | Tier::Default => 0,
        }
    }
}

const LARGE_THRESHOLD: f64 = 100_000.0;

/// How one `(currency, tier)` pair renders. Built once, then cached.
#[derive(Debug, Clone)]
struct CurrencyPattern {
    /// Symbol placed before the digits, e.g. "₩".
    prefix: Option<&'static str>,
    /// Currency-code suffix for codes without a known symbol, e.g. " XYZ".
    suffix: Option<String>,
    fraction_digits: usize,
}

impl CurrencyPattern {
    /// Look up the symbol for `code`. Unknown codes fall back to a plain
    /// grouped number with the raw code as a suffix, so construction itself
    /// cannot fail.
    fn build(code: &str, tier: Tier) -> Self {
        let symbol = match code {
            "KRW" => Some("₩"),
            "USD" => Some("$"),
            "EUR" => Some("€"),
            "JPY" => Some("¥"),
            "GBP" => Some("£"),
            "BTC" => Some("₿"),
            "USDT" => Some("₮"),
            _ => None,
        };
        let suffix = if symbol.is_none() {
            Some(format!(" {code}"))
        } else {
            None
        };
        Self {
            prefix: symbol,
            suffix,
            fraction_digits: tier.fraction_digits(),
        }
    }

    fn apply(&self, value: f64) -> String {
        let digits = grouped_fixed(value, self.fraction_digits, false);
        match (&self.prefix, &self.suffix) {
            (Some(symbol), _) => {
                // Sign reads before the symbol: -₩1,234 not ₩-1,234.
                if let Some(rest) = digits.strip_prefix('-') {
                    format!("-{symbol}{rest}")
                } else {
                    format!("{symbol}{digits}")
                }
            }
            (None, Some(code)) => format!("{digits}{code}"),
            (None, None) => digits,
        }
    }
}

/// Formatting policy service shared by all panel renderers.
///
/// Owns the pattern cache (one entry per `(currency, tier)` pair actually
/// seen); callers hold it for the life of the dashboard rather than touching
/// any module-level state.
#[derive(Debug)]
pub struct Formatters {
    default_currency: String,
    cache: HashMap<(String, Tier), CurrencyPattern>,
}

impl Formatters {
    pub fn new(default_currency: impl Into<String>) -> Self {
        Self {
            default_currency: default_currency.into(),
            cache: HashMap::new(),
        }
    }

    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    /// Format a monetary value in `code` (or the default currency when
    /// absent), selecting precision by tier.
    pub fn currency(&mut self, value: Option<f64>, code: Option<&str>) -> String {
        let Some(value) = finite(value) else {
            return PLACEHOLDER.to_string();
        };
        let code = code
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .unwrap_or(&self.default_currency)
            .to_string();
        let tier = Tier::derive(code == self.default_currency, value.abs());
        self.cache
            .entry((code.clone(), tier))
            .or_insert_with(|| CurrencyPattern::build(&code, tier))
            .apply(value)
    }

    /// Format percentage points with an explicit sign: `percent(5)` is
    /// "+5.00%", `percent(-5)` is "-5.00%".
    pub fn percent(&self, value: Option<f64>) -> String {
        match finite(value) {
            Some(value) => format!("{value:+.2}%"),
            None => PLACEHOLDER.to_string(),
        }
    }

    /// Format an asset quantity: up to 6 fraction digits, trailing zeros
    /// trimmed, no currency symbol.
    pub fn quantity(&self, value: Option<f64>) -> String {
        match finite(value) {
            Some(value) => grouped_fixed(value, 6, true),
            None => PLACEHOLDER.to_string(),
        }
    }

    /// Format a plain count or score: grouped, up to 3 fraction digits.
    pub fn number(&self, value: Option<f64>) -> String {
        match finite(value) {
            Some(value) => grouped_fixed(value, 3, true),
            None => PLACEHOLDER.to_string(),
        }
    }

    /// Parse an RFC 3339 instant (offset or naive-UTC) and render it as
    /// `YYYY-MM-DD HH:MM` in UTC. `None` means "no timestamp available",
    /// which renderers display as [`NO_TIMESTAMP`].
    pub fn timestamp(&self, raw: Option<&str>) -> Option<String> {
        let raw = raw.map(str::trim).filter(|raw| !raw.is_empty())?;
        let instant = DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .map(|naive| naive.and_utc())
            })
            .ok()?;
        Some(instant.format("%Y-%m-%d %H:%M").to_string())
    }

    /// Timestamp with the missing-instant indicator already substituted.
    pub fn timestamp_or_dash(&self, raw: Option<&str>) -> String {
        self.timestamp(raw)
            .unwrap_or_else(|| NO_TIMESTAMP.to_string())
    }

    #[cfg(test)]
    fn cached_patterns(&self) -> usize {
        self.cache.len()
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite())
}

/// Fixed-point rendering with `,` thousands grouping. With `trim`, trailing
/// fraction zeros (and a bare point) are dropped.
fn grouped_fixed(value: f64, fraction_digits: usize, trim: bool) -> String {
    let rendered = format!("{value:.fraction_digits$}");
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let frac_part = match frac_part {
        Some(frac_part) if trim => {
            let trimmed = frac_part.trim_end_matches('0');
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(frac_part) => Some(frac_part.to_string()),
        None => None,
    };

    match frac_part {
        Some(frac_part) => format!("{sign}{grouped}.{frac_part}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatters() -> Formatters {
        Formatters::new("KRW")
    }

    #[test]
    fn test_tier_boundaries_are_exact() {
        struct TestCase {
            is_default: bool,
            magnitude: f64,
            expected: Tier,
        }

        let tests = vec![
            TestCase {
                // TC0: default currency at exactly the large threshold
                is_default: true,
                magnitude: 100_000.0,
                expected: Tier::Large,
            },
            TestCase {
                // TC1: just below the large threshold
                is_default: true,
                magnitude: 99_999.999,
                expected: Tier::Default,
            },
            TestCase {
                // TC2: exactly one stays in the default tier
                is_default: true,
                magnitude: 1.0,
                expected: Tier::Default,
            },
            TestCase {
                // TC3: below one drops to the small tier
                is_default: true,
                magnitude: 0.999999,
                expected: Tier::Small,
            },
            TestCase {
                // TC4: foreign currency above one
                is_default: false,
                magnitude: 1.0,
                expected: Tier::Unit,
            },
            TestCase {
                // TC5: foreign currency below one
                is_default: false,
                magnitude: 0.5,
                expected: Tier::Fraction,
            },
        ];

        for (index, test) in tests.into_iter().enumerate() {
            let actual = Tier::derive(test.is_default, test.magnitude);
            assert_eq!(actual, test.expected, "TC{index} failed");
        }
    }

    #[test]
    fn test_large_tier_krw_has_no_fraction_digits() {
        let mut fmt = formatters();
        assert_eq!(fmt.currency(Some(150_000.0), Some("KRW")), "₩150,000");
    }

    #[test]
    fn test_default_tier_rounds_to_whole_won() {
        let mut fmt = formatters();
        assert_eq!(fmt.currency(Some(99_999.999), None), "₩100,000");
        assert_eq!(fmt.currency(Some(1_234.4), Some("KRW")), "₩1,234");
    }

    #[test]
    fn test_small_tier_keeps_four_digits() {
        let mut fmt = formatters();
        assert_eq!(fmt.currency(Some(0.999999), Some("KRW")), "₩1.0000");
        assert_eq!(fmt.currency(Some(0.1234), Some("KRW")), "₩0.1234");
    }

    #[test]
    fn test_foreign_fraction_tier_keeps_four_digits() {
        let mut fmt = formatters();
        assert_eq!(fmt.currency(Some(0.5), Some("USD")), "$0.5000");
    }

    #[test]
    fn test_foreign_unit_tier_keeps_two_digits() {
        let mut fmt = formatters();
        assert_eq!(fmt.currency(Some(42_000.5), Some("USD")), "$42,000.50");
    }

    #[test]
    fn test_negative_sign_reads_before_symbol() {
        let mut fmt = formatters();
        assert_eq!(fmt.currency(Some(-1_234.0), Some("KRW")), "-₩1,234");
    }

    #[test]
    fn test_unknown_currency_falls_back_to_code_suffix() {
        let mut fmt = formatters();
        assert_eq!(fmt.currency(Some(12.5), Some("XYZ")), "12.50 XYZ");
    }

    #[test]
    fn test_non_finite_inputs_render_placeholder() {
        let mut fmt = formatters();
        for bad in [None, Some(f64::NAN), Some(f64::INFINITY), Some(f64::NEG_INFINITY)] {
            assert_eq!(fmt.currency(bad, Some("KRW")), PLACEHOLDER);
            assert_eq!(fmt.percent(bad), PLACEHOLDER);
            assert_eq!(fmt.quantity(bad), PLACEHOLDER);
            assert_eq!(fmt.number(bad), PLACEHOLDER);
        }
    }

    #[test]
    fn test_percent_always_shows_sign() {
        let fmt = formatters();
        assert_eq!(fmt.percent(Some(5.0)), "+5.00%");
        assert_eq!(fmt.percent(Some(-5.0)), "-5.00%");
        assert_eq!(fmt.percent(Some(0.0)), "+0.00%");
    }

    #[test]
    fn test_quantity_trims_trailing_zeros() {
        let fmt = formatters();
        assert_eq!(fmt.quantity(Some(0.5)), "0.5");
        assert_eq!(fmt.quantity(Some(0.123456)), "0.123456");
        assert_eq!(fmt.quantity(Some(3.0)), "3");
        assert_eq!(fmt.quantity(Some(1_234.5)), "1,234.5");
    }

    #[test]
    fn test_number_groups_counts() {
        let fmt = formatters();
        assert_eq!(fmt.number(Some(1_000_000.0)), "1,000,000");
        assert_eq!(fmt.number(Some(0.25)), "0.25");
    }

    #[test]
    fn test_pattern_cache_is_bounded_by_pairs_seen() {
        let mut fmt = formatters();
        fmt.currency(Some(150_000.0), Some("KRW"));
        fmt.currency(Some(200_000.0), Some("KRW"));
        fmt.currency(Some(500.0), Some("KRW"));
        fmt.currency(Some(0.5), Some("USD"));
        fmt.currency(Some(0.7), Some("USD"));
        // (KRW, Large), (KRW, Default), (USD, Fraction)
        assert_eq!(fmt.cached_patterns(), 3);
    }

    #[test]
    fn test_timestamp_parses_offset_and_naive() {
        let fmt = formatters();
        assert_eq!(
            fmt.timestamp(Some("2025-06-01T09:30:00+09:00")),
            Some("2025-06-01 00:30".to_string())
        );
        assert_eq!(
            fmt.timestamp(Some("2025-06-01T09:30:00.123456")),
            Some("2025-06-01 09:30".to_string())
        );
    }

    #[test]
    fn test_timestamp_unparsable_is_none_not_dash() {
        let fmt = formatters();
        assert_eq!(fmt.timestamp(Some("yesterday")), None);
        assert_eq!(fmt.timestamp(None), None);
        assert_eq!(fmt.timestamp_or_dash(None), NO_TIMESTAMP);
        assert_ne!(NO_TIMESTAMP, PLACEHOLDER);
    }
}
