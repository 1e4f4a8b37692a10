// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A monetary amount in whole rupees.
///
/// Offers carry integral rupee totals; there is no fractional component.
/// Arithmetic is saturating so that totals computed inside the quotation
/// store are total functions and never panic or overflow.
///
/// Display formatting lives here; parsing of display-formatted strings
/// (`"₹12,345"`) is a boundary conversion performed once when an offer is
/// ingested, never inside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates a new amount from a whole-rupee value.
    #[must_use]
    pub const fn new(rupees: i64) -> Self {
        Self(rupees)
    }

    /// Returns the whole-rupee value.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Saturating addition of two amounts.
    #[must_use]
    pub const fn add(&self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating multiplication by a quantity.
    #[must_use]
    pub fn scale(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Renders the amount in display form with the currency symbol and
    /// Indian digit grouping: `1234567` becomes `₹12,34,567`.
    #[must_use]
    pub fn formatted(&self) -> String {
        let negative: bool = self.0 < 0;
        let digits: String = self.0.unsigned_abs().to_string();
        let grouped: String = group_indian(&digits);
        if negative {
            format!("-₹{grouped}")
        } else {
            format!("₹{grouped}")
        }
    }
}

/// Groups a digit string in the Indian numbering style: the last three
/// digits form one group, every preceding pair forms another.
fn group_indian(digits: &str) -> String {
    let len: usize = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(len - 3);
    let mut groups: Vec<&str> = Vec::new();
    let head_bytes: &[u8] = head.as_bytes();
    let mut start: usize = 0;
    // Leading group may be a single digit when the head has odd length.
    if head_bytes.len() % 2 == 1 {
        groups.push(&head[..1]);
        start = 1;
    }
    while start < head.len() {
        groups.push(&head[start..start + 2]);
        start += 2;
    }
    groups.push(tail);
    groups.join(",")
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
