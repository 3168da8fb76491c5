//! Sort engine for the product panel.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::models::{Product, SortOption};

/// Return a newly ordered copy of `products`. The input is untouched.
///
/// The sort is stable: products with equal keys keep their input order.
pub fn sort_products(products: &[Product], option: SortOption) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match option {
        SortOption::Alphabet => sorted.sort_by(|a, b| locale_compare(&a.title, &b.title)),
        SortOption::PriceLowToHigh => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOption::PriceHighToLow => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    sorted
}

/// Collation-style string comparison, in three levels.
///
/// 1. Base letters, ignoring accents and case (`é`, `E` and `e` tie).
/// 2. Accents: an unaccented letter sorts before its accented forms.
/// 3. Case: lowercase before uppercase.
///
/// Strings are compared in canonical decomposition (NFD), so precomposed
/// and combining-mark spellings of the same text compare equal.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_tiebreak(a, b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (x, y) in a.nfd().zip(b.nfd()) {
        if x != y {
            // lowercase sorts before uppercase
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }
    a.nfd().count().cmp(&b.nfd().count())
}
