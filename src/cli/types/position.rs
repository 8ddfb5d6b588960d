//! Fantasy basketball position types.

use crate::error::YahooError;
use std::fmt;
use std::str::FromStr;

/// Fantasy basketball positions.
///
/// The five primary positions drive positional scarcity and roster needs.
/// `G`, `F` and `Util` are Yahoo's flexible lineup slots; `BN` and `IL` are
/// bench and injured-list slots.
///
/// # Examples
///
/// ```rust
/// use yahoo_fantasy::Position;
///
/// let center: Position = "c".parse().unwrap();
/// assert_eq!(center, Position::C);
/// assert_eq!(center.to_string(), "C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
    G,
    F,
    Util,
    BN,
    IL,
}

impl Position {
    /// The primary positions, in lineup order.
    pub const PRIMARY: [Position; 5] = [
        Position::PG,
        Position::SG,
        Position::SF,
        Position::PF,
        Position::C,
    ];

    /// Value multiplier reflecting how scarce productive players are at this position.
    ///
    /// Flexible and bench slots carry no premium.
    pub fn scarcity_multiplier(&self) -> f64 {
        match self {
            Position::PG | Position::SG => 1.0,
            Position::SF | Position::PF => 1.1,
            Position::C => 1.3,
            _ => 1.0,
        }
    }

    /// Whether a player selected into this slot counts as a starter.
    pub fn is_starting_slot(&self) -> bool {
        !matches!(self, Position::BN | Position::IL)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
            Position::G => "G",
            Position::F => "F",
            Position::Util => "Util",
            Position::BN => "BN",
            Position::IL => "IL",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PG" => Ok(Position::PG),
            "SG" => Ok(Position::SG),
            "SF" => Ok(Position::SF),
            "PF" => Ok(Position::PF),
            "C" => Ok(Position::C),
            "G" => Ok(Position::G),
            "F" => Ok(Position::F),
            "UTIL" => Ok(Position::Util),
            "BN" | "BENCH" => Ok(Position::BN),
            "IL" | "IL+" | "IR" => Ok(Position::IL),
            _ => Err(YahooError::InvalidValue(format!("position '{}'", s))),
        }
    }
}
