// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display-price parsing.
//!
//! The remote search endpoint returns prices as display-formatted strings
//! (`"₹12,345"`). Conversion to a numeric [`Money`] happens exactly once
//! here, when an offer is ingested; the quotation core only ever sees
//! numeric amounts.

use freight_quote_domain::Money;
use thiserror::Error;

/// Errors that can occur when parsing a display-formatted amount.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriceParseError {
    /// The string contains no digits.
    #[error("Amount string contains no digits")]
    Empty,

    /// A character other than a digit, separator, or currency marker.
    #[error("Amount '{raw}' contains unexpected character '{character}'")]
    UnexpectedCharacter {
        /// The original input.
        raw: String,
        /// The offending character.
        character: char,
    },

    /// The digits exceed the representable rupee range.
    #[error("Amount '{raw}' is too large")]
    Overflow {
        /// The original input.
        raw: String,
    },
}

/// Currency markers stripped from the front of a display amount.
const CURRENCY_PREFIXES: &[&str] = &["₹", "Rs.", "Rs", "INR"];

/// Parses a display-formatted rupee amount.
///
/// Accepts an optional currency marker, thousands separators, and
/// interior whitespace: `"₹12,345"`, `"Rs 12,345"`, and `"12345"` all
/// parse to the same amount.
///
/// # Errors
///
/// Returns an error if the string contains no digits, contains a
/// character that is not a digit/separator/currency marker, or exceeds
/// the representable range.
pub fn parse_display_amount(raw: &str) -> Result<Money, PriceParseError> {
    let mut rest: &str = raw.trim();
    for prefix in CURRENCY_PREFIXES {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            rest = stripped.trim_start();
            break;
        }
    }

    let mut value: i64 = 0;
    let mut digit_count: u32 = 0;
    for character in rest.chars() {
        match character {
            '0'..='9' => {
                let digit: i64 = i64::from(character.to_digit(10).unwrap_or(0));
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit))
                    .ok_or_else(|| PriceParseError::Overflow {
                        raw: raw.to_string(),
                    })?;
                digit_count += 1;
            }
            ',' => {}
            c if c.is_whitespace() => {}
            c => {
                return Err(PriceParseError::UnexpectedCharacter {
                    raw: raw.to_string(),
                    character: c,
                });
            }
        }
    }

    if digit_count == 0 {
        return Err(PriceParseError::Empty);
    }
    Ok(Money::new(value))
}
