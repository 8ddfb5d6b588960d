//! Key types for Yahoo Fantasy resources.

use crate::error::{Result, YahooError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Yahoo league keys (`{game_key}.l.{league_id}`).
///
/// # Examples
///
/// ```rust
/// use yahoo_fantasy::LeagueKey;
///
/// let key = LeagueKey::new("454", "12345");
/// assert_eq!(key.as_str(), "454.l.12345");
/// assert_eq!(key.game_key(), "454");
/// assert_eq!(key.league_id(), "12345");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueKey(String);

impl LeagueKey {
    /// Build a league key from a game key and a league id.
    pub fn new(game_key: &str, league_id: &str) -> Self {
        Self(format!("{}.l.{}", game_key, league_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn game_key(&self) -> &str {
        self.0.split(".l.").next().unwrap_or_default()
    }

    pub fn league_id(&self) -> &str {
        self.0.split(".l.").nth(1).unwrap_or_default()
    }

    /// Team key for a team id within this league.
    pub fn team_key(&self, team_id: &str) -> TeamKey {
        TeamKey(format!("{}.t.{}", self.0, team_id))
    }
}

impl fmt::Display for LeagueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueKey {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(".l.") {
            Some((game, league)) if !game.is_empty() && !league.is_empty() => {
                Ok(Self(s.to_string()))
            }
            _ => Err(YahooError::InvalidValue(format!("league key '{}'", s))),
        }
    }
}

/// Type-safe wrapper for Yahoo team keys (`{league_key}.t.{team_id}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamKey(String);

impl TeamKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The league this team belongs to.
    pub fn league_key(&self) -> LeagueKey {
        let league = self.0.rsplit_once(".t.").map(|(l, _)| l).unwrap_or(&self.0);
        LeagueKey(league.to_string())
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamKey {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self> {
        match s.rsplit_once(".t.") {
            Some((league, team)) if league.contains(".l.") && !team.is_empty() => {
                Ok(Self(s.to_string()))
            }
            _ => Err(YahooError::InvalidValue(format!("team key '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_key_parts() {
        let key: LeagueKey = "454.l.98765".parse().unwrap();
        assert_eq!(key.game_key(), "454");
        assert_eq!(key.league_id(), "98765");
        assert_eq!(key.to_string(), "454.l.98765");
    }

    #[test]
    fn test_league_key_rejects_malformed() {
        assert!("454".parse::<LeagueKey>().is_err());
        assert!(".l.123".parse::<LeagueKey>().is_err());
        assert!("454.l.".parse::<LeagueKey>().is_err());
    }

    #[test]
    fn test_team_key_from_league() {
        let league = LeagueKey::new("454", "98765");
        let team = league.team_key("3");
        assert_eq!(team.as_str(), "454.l.98765.t.3");
        assert_eq!(team.league_key(), league);
    }

    #[test]
    fn test_team_key_parse() {
        let team: TeamKey = "nba.l.111.t.12".parse().unwrap();
        assert_eq!(team.league_key().as_str(), "nba.l.111");
        assert!("nba.l.111".parse::<TeamKey>().is_err());
        assert!("454.t.1".parse::<TeamKey>().is_err());
    }
}
