//! Yahoo game ids per sport and season.
//!
//! Every Yahoo resource key starts with a game key: the numeric id Yahoo
//! assigned to one sport's season (e.g. `454` is the 2024-25 NBA season).

use crate::cli::types::{GameCode, LeagueKey};
use crate::error::{Result, YahooError};

/// `(code, season, game_id)` rows, seasons keyed by their starting year.
const GAME_IDS: &[(&str, u16, u32)] = &[
    ("mlb", 2019, 388),
    ("mlb", 2020, 398),
    ("mlb", 2021, 404),
    ("mlb", 2022, 412),
    ("mlb", 2023, 422),
    ("mlb", 2024, 431),
    ("mlb", 2025, 458),
    ("nfl", 2019, 390),
    ("nfl", 2020, 399),
    ("nfl", 2021, 406),
    ("nfl", 2022, 414),
    ("nfl", 2023, 423),
    ("nfl", 2024, 449),
    ("nfl", 2025, 461),
    ("nba", 2019, 395),
    ("nba", 2020, 402),
    ("nba", 2021, 410),
    ("nba", 2022, 418),
    ("nba", 2023, 428),
    ("nba", 2024, 454),
    ("nba", 2025, 466),
    ("nhl", 2019, 396),
    ("nhl", 2020, 403),
    ("nhl", 2021, 411),
    ("nhl", 2022, 419),
    ("nhl", 2023, 427),
    ("nhl", 2024, 453),
    ("nhl", 2025, 465),
];

/// Look up the numeric game id for a sport code (`mlb`, `nfl`, `nba`, `nhl`) and season.
pub fn get_game_id(code: &str, season: u16) -> Result<u32> {
    let code = code.to_lowercase();
    GAME_IDS
        .iter()
        .find(|(c, s, _)| *c == code && *s == season)
        .map(|(_, _, id)| *id)
        .ok_or(YahooError::UnknownGame { code, season })
}

/// Game key string used in resource keys.
pub fn get_game_key(code: &str, season: u16) -> Result<String> {
    get_game_id(code, season).map(|id| id.to_string())
}

/// Typed variant of [`get_game_key`] for CLI callers.
pub fn game_key_for(code: GameCode, season: u16) -> Result<String> {
    get_game_key(code.as_str(), season)
}

/// League key for a league id within a game.
pub fn league_key(game_key: &str, league_id: &str) -> LeagueKey {
    LeagueKey::new(game_key, league_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_game_id_known_seasons() {
        let cases = [
            ("mlb", 2024, 431),
            ("nfl", 2024, 449),
            ("nba", 2024, 454),
            ("nhl", 2024, 453),
            ("nfl", 2023, 423),
        ];
        for (code, season, want) in cases {
            assert_eq!(get_game_id(code, season).unwrap(), want, "{} {}", code, season);
        }
    }

    #[test]
    fn test_get_game_id_is_case_insensitive() {
        assert_eq!(get_game_id("NBA", 2024).unwrap(), 454);
    }

    #[test]
    fn test_get_game_id_unknown() {
        match get_game_id("soccer", 2024) {
            Err(YahooError::UnknownGame { code, season }) => {
                assert_eq!(code, "soccer");
                assert_eq!(season, 2024);
            }
            other => panic!("expected UnknownGame, got {:?}", other),
        }
        assert!(get_game_id("nfl", 1999).is_err());
    }

    #[test]
    fn test_get_game_key() {
        assert_eq!(get_game_key("mlb", 2024).unwrap(), "431");
        assert_eq!(get_game_key("nfl", 2023).unwrap(), "423");
        assert!(get_game_key("invalid", 2024).is_err());
        assert_eq!(game_key_for(GameCode::Nba, 2024).unwrap(), "454");
    }

    #[test]
    fn test_league_key() {
        assert_eq!(league_key("454", "777").as_str(), "454.l.777");
    }
}
