//! Embedded Exchange Rate Snapshots
//!
//! Rate tables frozen at build time for the three base currencies the
//! offline provider understands. Each table is declared once through the
//! `define_snapshots!` macro, which generates the `BaseCurrency` enum, its
//! metadata accessors and case-insensitive parsing.
//!
//! # Adding a New Base
//! Add an entry to the `define_snapshots!` invocation:
//! ```ignore
//! define_snapshots! {
//!     // ... existing bases ...
//!     GBP => ("GBP", "2016-10-31", { "USD": 1.2155, "EUR": 1.1105 }),
//! }
//! ```
//!
//! # Example
//! ```
//! use exchange_rates::BaseCurrency;
//!
//! let base: BaseCurrency = "pln".parse().unwrap();
//! let rates = base.rate_map();
//! assert_eq!(rates.get("USD"), Some(&0.25292));
//! ```

use std::collections::HashMap;

/// Returned when a code does not name one of the embedded snapshots.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No embedded snapshot for base currency: {0}")]
pub struct UnsupportedBase(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines all snapshots and the BaseCurrency enum
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define base currencies together with their frozen rate tables.
///
/// # Syntax
/// ```ignore
/// define_snapshots! {
///     Name => ("CODE", "YYYY-MM-DD", { "TARGET": rate, ... }),
/// }
/// ```
#[macro_export]
macro_rules! define_snapshots {
    (
        $(
            $name:ident => ($code:literal, $date:literal, { $($target:literal : $rate:expr),* $(,)? })
        ),* $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum BaseCurrency {
            $($name),*
        }

        impl BaseCurrency {
            pub fn code(&self) -> &'static str {
                match self {
                    $(BaseCurrency::$name => $code),*
                }
            }

            /// Day on which the snapshot was taken.
            pub fn date(&self) -> &'static str {
                match self {
                    $(BaseCurrency::$name => $date),*
                }
            }

            /// Raw snapshot entries as `(target, rate)` pairs.
            pub fn rates(&self) -> &'static [(&'static str, f64)] {
                match self {
                    $(BaseCurrency::$name => &[$(($target, $rate)),*]),*
                }
            }

            pub fn all() -> &'static [BaseCurrency] {
                &[$(BaseCurrency::$name),*]
            }
        }

        impl std::fmt::Display for BaseCurrency {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for BaseCurrency {
            type Err = UnsupportedBase;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_uppercase().as_str() {
                    $($code => Ok(BaseCurrency::$name),)*
                    _ => Err(UnsupportedBase(s.to_string())),
                }
            }
        }
    };
}

impl BaseCurrency {
    /// Builds a fresh, owned copy of the snapshot keyed by target code.
    ///
    /// Every call allocates a new map so callers may mutate it freely.
    pub fn rate_map(&self) -> HashMap<String, f64> {
        self.rates()
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SNAPSHOT DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_snapshots! {
    PLN => ("PLN", "2016-10-31", {
        "AUD": 0.33266, "BGN": 0.45192, "BRL": 0.80494, "CAD": 0.33886, "CHF": 0.25001,
        "CNY": 1.7135, "CZK": 6.2443, "DKK": 1.719, "GBP": 0.20807, "HKD": 1.9614,
        "HRK": 1.7351, "HUF": 71.269, "IDR": 3298.2, "ILS": 0.97366, "INR": 16.889,
        "JPY": 26.565, "KRW": 289.96, "MXN": 4.7865, "MYR": 1.0622, "NOK": 2.0876,
        "NZD": 0.35383, "PHP": 12.261, "RON": 1.0412, "RUB": 16.001, "SEK": 2.2794,
        "SGD": 0.3524, "THB": 8.856, "TRY": 0.78481, "USD": 0.25292, "ZAR": 3.4309,
        "EUR": 0.23106,
    }),
    USD => ("USD", "2016-10-31", {
        "AUD": 1.3153, "BGN": 1.7868, "BRL": 3.1825, "CAD": 1.3398, "CHF": 0.98849,
        "CNY": 6.7747, "CZK": 24.688, "DKK": 6.7964, "GBP": 0.82267, "HKD": 7.7551,
        "HRK": 6.8603, "HUF": 281.78, "IDR": 13040.0, "ILS": 3.8496, "INR": 66.777,
        "JPY": 105.03, "KRW": 1146.4, "MXN": 18.925, "MYR": 4.1997, "NOK": 8.2537,
        "NZD": 1.399, "PHP": 48.477, "PLN": 3.9538, "RON": 4.1166, "RUB": 63.265,
        "SEK": 9.0124, "SGD": 1.3933, "THB": 35.015, "TRY": 3.103, "ZAR": 13.565,
        "EUR": 0.91358,
    }),
    EUR => ("EUR", "2016-10-31", {
        "AUD": 1.4397, "BGN": 1.9558, "BRL": 3.4836, "CAD": 1.4665, "CHF": 1.082,
        "CNY": 7.4156, "CZK": 27.024, "DKK": 7.4393, "GBP": 0.9005, "HKD": 8.4887,
        "HRK": 7.5093, "HUF": 308.44, "IDR": 14273.82, "ILS": 4.2138, "INR": 73.094,
        "JPY": 114.97, "KRW": 1254.89, "MXN": 20.715, "MYR": 4.597, "NOK": 9.0345,
        "NZD": 1.5313, "PHP": 53.063, "PLN": 4.3278, "RON": 4.506, "RUB": 69.2498,
        "SEK": 9.865, "SGD": 1.5251, "THB": 38.327, "TRY": 3.3965, "USD": 1.0946,
        "ZAR": 14.8482,
    }),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
