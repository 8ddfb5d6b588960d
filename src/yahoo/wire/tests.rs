use super::*;
use serde_json::json;

#[test]
fn test_lenient_string_accepts_numbers_and_null() {
    let data: LeagueData = serde_json::from_value(json!({
        "league_key": "454.l.12345",
        "league_id": 12345,
        "name": "Test League",
        "season": "2024",
        "num_teams": 12,
        "current_week": null
    }))
    .unwrap();

    assert_eq!(data.league_id, "12345");
    assert_eq!(data.season, "2024");
    assert_eq!(data.num_teams, "12");
    assert_eq!(data.current_week, "");
    assert_eq!(data.scoring_type, "");
}

#[test]
fn test_players_accepts_single_object() {
    let resp: PlayersResponse = serde_json::from_value(json!({
        "fantasy_content": {
            "league": {
                "players": { "player": { "player_key": "454.p.5583" } }
            }
        }
    }))
    .unwrap();

    let players = resp.fantasy_content.league.players.into_vec();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].player.player_key, "454.p.5583");
}

#[test]
fn test_players_accepts_array() {
    let resp: PlayersResponse = serde_json::from_value(json!({
        "fantasy_content": {
            "league": {
                "players": [
                    { "player": { "player_key": "454.p.1" } },
                    { "player": { "player_key": "454.p.2" } }
                ]
            }
        }
    }))
    .unwrap();

    assert_eq!(resp.fantasy_content.league.players.into_vec().len(), 2);
}

#[test]
fn test_missing_collections_default_to_empty() {
    let resp: TeamsResponse = serde_json::from_value(json!({ "fantasy_content": {} })).unwrap();
    assert!(resp.fantasy_content.league.teams.is_empty());

    let resp: PlayersResponse = serde_json::from_value(json!({ "fantasy_content": {} })).unwrap();
    assert!(resp.fantasy_content.league.players.into_vec().is_empty());
}

#[test]
fn test_renamed_type_fields() {
    let streak: StreakData = serde_json::from_value(json!({ "type": "win", "value": 3 })).unwrap();
    assert_eq!(streak.kind, "win");
    assert_eq!(streak.value, "3");

    let record: TransactionRecord =
        serde_json::from_value(json!({ "type": "add/drop", "faab_bid": 25 })).unwrap();
    assert_eq!(record.kind, "add/drop");
    assert_eq!(record.faab_bid, "25");
}
