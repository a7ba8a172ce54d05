//! Rate maps before and after conversion.

use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::math::round;

/// Decimal places kept for every converted amount.
pub const CONVERTED_PLACES: i32 = 2;

/// Raw exchange rates relative to a base currency, keyed by target code.
///
/// Keys are taken as supplied and never checked against a currency list.
pub type RateMap = HashMap<String, f64>;

/// Rates multiplied by the requested amount and rounded.
///
/// Serializes as a plain `code -> amount` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ConvertedRates(HashMap<String, f64>);

impl ConvertedRates {
    pub fn get(&self, code: &str) -> Option<f64> {
        self.0.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, f64> {
        self.0.iter()
    }

    pub fn into_inner(self) -> HashMap<String, f64> {
        self.0
    }
}

impl FromIterator<(String, f64)> for ConvertedRates {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ConvertedRates {
    type Item = (&'a String, &'a f64);
    type IntoIter = hash_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Multiplies every rate by `amount` and rounds to [`CONVERTED_PLACES`].
///
/// Takes the map by value: it is rewritten in place and never observable
/// half-scaled.
pub fn scale_rates(mut rates: RateMap, amount: f64) -> ConvertedRates {
    for rate in rates.values_mut() {
        *rate = round(*rate * amount, CONVERTED_PLACES);
    }

    ConvertedRates(rates)
}
