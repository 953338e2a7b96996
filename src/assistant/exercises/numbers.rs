use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+[.,]?[0-9]*$").expect("number pattern is a valid regex"));

/// Lazily yields every whitespace-delimited token of `text` that is a plain
/// number (`1000`, `27.45`, `3,5`), parsed as `f64`.
///
/// Numbers glued to other characters (`$10`, `324.00.`) are skipped.
pub fn generator_numbers(text: &str) -> impl Iterator<Item = f64> + '_ {
    text.split_whitespace()
        .filter(|token| NUMBER_TOKEN.is_match(token))
        .filter_map(|token| token.replace(',', ".").parse().ok())
}

/// Sums whatever `producer` extracts from `text`.
pub fn sum_profit<'a, F, I>(text: &'a str, producer: F) -> f64
where
    F: FnOnce(&'a str) -> I,
    I: IntoIterator<Item = f64>,
{
    producer(text).into_iter().sum()
}
