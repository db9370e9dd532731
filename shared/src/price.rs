use serde::{Deserialize, Serialize};

/// Label shown in place of a price for free titles
pub const FREE_LABEL: &str = "無料";

/// Reads a display price such as `"¥ 1,980"` as a number.
///
/// Only ASCII digits are kept, so currency symbols and separators drop out.
/// Missing, blank or digit-free prices read as 0. Digit runs too long for a
/// `u64` saturate.
pub fn parse_price(price: Option<&str>) -> u64 {
    let Some(price) = price else {
        return 0;
    };
    price
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        })
}

/// Display price, or [`FREE_LABEL`] when there is none
pub fn format_price(price: Option<&str>) -> String {
    match price {
        Some(p) if !p.trim().is_empty() => p.to_string(),
        _ => FREE_LABEL.to_string(),
    }
}

/// Parses a price bound typed into a filter input. Blank or unparsable text is no bound.
///
/// The value is kept as typed, so `12.7` excludes a ¥12 game and a negative
/// maximum excludes everything.
pub fn parse_price_bound(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A min/max price input: the text as the user typed it plus its parsed value.
/// Serializes as the text alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PriceBound {
    text: String,
    value: Option<f64>,
}

impl PriceBound {
    pub fn new(input: impl Into<String>) -> Self {
        let text = input.into();
        let value = parse_price_bound(&text);
        Self { text, value }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// True when anything but whitespace was typed
    pub fn has_input(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// `price` is at or above this bound, or the bound is unset
    pub fn admits_above(&self, price: u64) -> bool {
        self.value.map_or(true, |min| price as f64 >= min)
    }

    /// `price` is at or below this bound, or the bound is unset
    pub fn admits_below(&self, price: u64) -> bool {
        self.value.map_or(true, |max| price as f64 <= max)
    }
}

impl From<String> for PriceBound {
    fn from(text: String) -> Self {
        PriceBound::new(text)
    }
}

impl From<PriceBound> for String {
    fn from(bound: PriceBound) -> Self {
        bound.text
    }
}
