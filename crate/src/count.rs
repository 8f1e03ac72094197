//! Counts for [Pluralizer::pluralize](crate::Pluralizer::pluralize).

use crate::error::Error;
use std::{fmt, str::FromStr};

/// A numeric count. Exactly one selects the singular form and anything else
/// selects the plural.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Count {
    Integer(i64),
    Float(f64),
}

impl Count {
    /// Returns true if this count is exactly one.
    pub fn is_one(&self) -> bool {
        match *self {
            Count::Integer(n) => n == 1,
            Count::Float(n) => n == 1.0,
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Integer(n) => write!(f, "{}", n),
            Count::Float(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for Count {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Ok(Count::Integer(n));
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Count::Float(n)),
            _ => Err(Error::InvalidCount(s.to_string())),
        }
    }
}

/// Conversion into a [Count]. This is implemented for the primitive integer
/// and float types and for strings, which are parsed. It fails with
/// [Error::InvalidCount] for text that is not a number, for NaN and the
/// infinities, and for integers that don't fit in an `i64`.
pub trait IntoCount {
    fn into_count(self) -> Result<Count, Error>;
}

impl IntoCount for Count {
    fn into_count(self) -> Result<Count, Error> {
        Ok(self)
    }
}

macro_rules! into_count_for_int {
    ($($t:ty),+) => {
        $(
            impl IntoCount for $t {
                fn into_count(self) -> Result<Count, Error> {
                    i64::try_from(self)
                        .map(Count::Integer)
                        .map_err(|_| Error::InvalidCount(self.to_string()))
                }
            }
        )+
    };
}

into_count_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntoCount for f64 {
    fn into_count(self) -> Result<Count, Error> {
        if self.is_finite() {
            Ok(Count::Float(self))
        } else {
            Err(Error::InvalidCount(self.to_string()))
        }
    }
}

impl IntoCount for f32 {
    fn into_count(self) -> Result<Count, Error> {
        f64::from(self).into_count()
    }
}

impl IntoCount for &str {
    fn into_count(self) -> Result<Count, Error> {
        self.parse()
    }
}

impl IntoCount for String {
    fn into_count(self) -> Result<Count, Error> {
        self.parse()
    }
}

impl IntoCount for &String {
    fn into_count(self) -> Result<Count, Error> {
        self.parse()
    }
}
