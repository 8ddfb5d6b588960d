//! Time-related types for fantasy seasons and weeks.

use crate::error::{Result, YahooError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years (the year a season starts in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse()
            .map(Self)
            .map_err(|_| YahooError::InvalidValue(format!("season '{}'", s)))
    }
}

/// Type-safe wrapper for Week numbers.
///
/// Week 0 stands for the whole season wherever a week is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn is_season(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse()
            .map(Self)
            .map_err(|_| YahooError::InvalidValue(format!("week '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse_and_display() {
        let season: Season = "2024".parse().unwrap();
        assert_eq!(season.as_u16(), 2024);
        assert_eq!(season.to_string(), "2024");
        assert!("twenty".parse::<Season>().is_err());
    }

    #[test]
    fn test_week_defaults_to_season() {
        let week = Week::default();
        assert!(week.is_season());
        assert!(!Week::new(3).is_season());
    }

    #[test]
    fn test_week_parse() {
        assert_eq!("12".parse::<Week>().unwrap(), Week::new(12));
        assert!("-1".parse::<Week>().is_err());
    }
}
