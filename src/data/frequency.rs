//! Resampling frequencies
//! Maps pandas-style offset aliases ("D", "15min", "W") onto polars durations.
//!
//! Every alias is start-anchored: buckets are labeled by their first instant.
//! The end-anchored spellings ("ME", "QE", "YE", "A") are accepted as synonyms
//! of their start-anchored forms, so a month is labeled by its first day rather
//! than its last, and weeks start on Monday.

use polars::prelude::*;
use std::fmt;
use std::str::FromStr;

/// A bucket width: a positive multiplier of a calendar or fixed unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frequency {
    pub multiplier: u32,
    /// Unit suffix in polars duration syntax
    unit: &'static str,
}

impl Frequency {
    /// Polars duration string, e.g. `"1d"` or `"15m"`.
    pub fn duration_string(&self) -> String {
        format!("{}{}", self.multiplier, self.unit)
    }

    pub fn to_duration(&self) -> Duration {
        Duration::parse(&self.duration_string())
    }

    fn unit_for_alias(alias: &str) -> Option<&'static str> {
        let unit = match alias {
            "N" | "ns" => "ns",
            "U" | "us" => "us",
            "L" | "ms" => "ms",
            "S" | "s" => "s",
            "T" | "min" => "m",
            "H" | "h" => "h",
            "D" | "d" => "d",
            "W" | "w" => "w",
            "M" | "MS" | "ME" => "mo",
            "Q" | "QS" | "QE" => "q",
            "Y" | "YS" | "YE" | "A" | "AS" => "y",
            _ => return None,
        };
        Some(unit)
    }
}

impl FromStr for Frequency {
    type Err = PolarsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || PolarsError::ComputeError(format!("invalid frequency '{}'", s).into());

        let split = s.find(|c: char| !c.is_ascii_digit()).ok_or_else(invalid)?;
        let (digits, alias) = s.split_at(split);
        let multiplier = if digits.is_empty() {
            1
        } else {
            digits.parse::<u32>().map_err(|_| invalid())?
        };
        if multiplier == 0 {
            return Err(invalid());
        }

        let unit = Self::unit_for_alias(alias).ok_or_else(invalid)?;
        Ok(Frequency { multiplier, unit })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.duration_string())
    }
}
