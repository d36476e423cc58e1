//! Won amounts
//!
//! Expenses are whole won, never negative. Stored as `u64` and rendered with
//! `,` thousands separators and a trailing `원`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Suffix written after every amount
pub const WON_SUFFIX: &str = "원";

/// A non-negative amount of won
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Won(u64);

impl Won {
    /// Create an amount from a whole number of won
    ///
    /// # Examples
    /// ```
    /// use daybook::models::Won;
    /// assert_eq!(Won::new(4500).to_string(), "4,500원");
    /// ```
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add without wrapping; totals pin at `u64::MAX`
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtract, stopping at zero
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Parse an amount from user or ledger text
    ///
    /// Accepts "4500", "4,500", " 4,500원 ". Rejects signs, decimals and
    /// anything else that is not a digit or a comma.
    pub fn parse(s: &str) -> Result<Self, WonParseError> {
        let s = s.trim();
        let s = s.strip_suffix(WON_SUFFIX).unwrap_or(s).trim_end();

        let digits: String = s.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() {
            return Err(WonParseError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(WonParseError::InvalidFormat(s.to_string()));
        }

        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| WonParseError::Overflow(s.to_string()))
    }

    /// Digits with `,` separators and no suffix, e.g. "12,500"
    pub fn grouped(&self) -> String {
        let digits = self.0.to_string();
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Won {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.grouped(), WON_SUFFIX)
    }
}

impl Add for Won {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Won {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl Sum for Won {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl From<u64> for Won {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WonParseError {
    #[error("amount is empty")]
    Empty,
    #[error("invalid amount: {0}")]
    InvalidFormat(String),
    #[error("amount too large: {0}")]
    Overflow(String),
}
