use super::*;
use serde_json::json;

fn from_json<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_player_from_wire() {
    let data: wire::PlayerData = from_json(json!({
        "player_key": "423.p.12345",
        "player_id": "12345",
        "name": { "full": "Patrick Mahomes", "first": "Patrick", "last": "Mahomes" },
        "editorial_team_key": "nfl.team.1",
        "editorial_team_full_name": "Kansas City Chiefs",
        "editorial_team_abbr": "KC",
        "display_position": "QB",
        "eligible_positions": [{ "position": "QB" }],
        "player_stats": {
            "coverage_type": "week",
            "week": "3",
            "stats": { "stat": [{ "stat_id": "4", "value": "312" }] }
        },
        "player_points": { "coverage_type": "week", "week": "3", "total": "24.5" }
    }));

    let player = player_from_wire(data);
    assert_eq!(player.player_key, "423.p.12345");
    assert_eq!(player.name.full, "Patrick Mahomes");
    assert_eq!(player.display_position, "QB");
    assert_eq!(player.eligible_positions, vec!["QB".to_string()]);
    assert!(player.selected_position.is_none());

    let stats = player.player_stats.unwrap();
    assert_eq!(stats.week, 3);
    assert_eq!(stats.stats[0].stat_id, 4);
    assert_eq!(stats.stats[0].value, "312");

    let points = player.player_points.unwrap();
    assert!((points.total - 24.5).abs() < 1e-9);
}

#[test]
fn test_standings_team_from_wire() {
    let data: wire::TeamData = from_json(json!({
        "team_key": "423.l.12345.t.1",
        "team_id": "1",
        "name": "Test Team",
        "managers": [
            { "manager": { "manager_id": "1", "nickname": "Alex", "is_commissioner": "1", "is_current_login": "0" } },
            { "manager": { "manager_id": "2", "nickname": "Sam" } }
        ],
        "team_standings": {
            "rank": "1",
            "outcome_totals": { "wins": "10", "losses": "3", "ties": "0", "percentage": "0.769" },
            "points_for": "1250.50",
            "points_against": "1100.25",
            "streak": { "type": "win", "value": "4" }
        }
    }));

    let team = standings_team_from_wire(data);
    assert_eq!(team.standings.rank, 1);
    assert_eq!(team.standings.playoff_seed, 0);
    assert_eq!(team.standings.outcome_totals.wins, 10);
    assert_eq!(team.standings.outcome_totals.losses, 3);
    assert!((team.standings.points_for - 1250.50).abs() < 1e-9);
    assert_eq!(team.manager_nickname, "Alex");
    assert!(team.managers[0].is_commissioner);
    assert!(!team.managers[0].is_current_login);
    assert!(!team.managers[1].is_commissioner);
    assert_eq!(team.standings.streak.unwrap().value, 4);
}

#[test]
fn test_team_from_wire_without_managers() {
    let data: wire::TeamData = from_json(json!({
        "team_key": "454.l.1.t.2",
        "team_id": 2,
        "name": "No Manager",
        "team_standings": { "rank": "garbage" }
    }));

    let team = team_from_wire(data);
    assert_eq!(team.yahoo_team_id, "2");
    assert_eq!(team.manager_name, "");
    assert_eq!(team.rank, 0);
    assert_eq!(team.wins, 0);
}

#[test]
fn test_roster_slot_starting_flag() {
    let bench: wire::PlayerData = from_json(json!({
        "player_key": "454.p.1",
        "player_id": "1",
        "eligible_positions": [{ "position": "PG" }, { "position": "G" }],
        "selected_position": { "position": "BN" }
    }));
    let slot = roster_slot_from_wire(bench);
    assert_eq!(slot.position, "PG");
    assert_eq!(slot.selected_position, "BN");
    assert!(!slot.is_starting);

    let starter: wire::PlayerData = from_json(json!({
        "player_key": "454.p.2",
        "selected_position": { "position": "C" }
    }));
    let slot = roster_slot_from_wire(starter);
    assert_eq!(slot.position, "");
    assert!(slot.is_starting);
}

#[test]
fn test_draft_result_from_wire() {
    let data: wire::DraftResultData = from_json(json!({
        "pick": "1",
        "round": "1",
        "team_key": "423.l.12345.t.1",
        "players": { "player": { "player_key": "423.p.12345", "player_id": "12345", "name": { "full": "Christian McCaffrey" } } }
    }));

    let result = draft_result_from_wire(data);
    assert_eq!(result.pick, 1);
    assert_eq!(result.round, 1);
    assert_eq!(result.player_key, "423.p.12345");
    assert_eq!(result.player.unwrap().name.full, "Christian McCaffrey");
}

#[test]
fn test_transaction_from_wire() {
    let data: wire::TransactionRecord = from_json(json!({
        "transaction_key": "423.l.12345.tr.1",
        "transaction_id": "1",
        "type": "add/drop",
        "status": "successful",
        "timestamp": "1609459200",
        "faab_bid": "25",
        "players": [{
            "player": {
                "player_key": "423.p.1",
                "name": { "full": "Some Guy" },
                "transaction_data": { "type": "add", "source_type": "freeagents", "destination_team_key": "423.l.12345.t.1" }
            }
        }]
    }));

    let trans = transaction_from_wire(data);
    assert_eq!(trans.kind, "add/drop");
    assert_eq!(trans.status, "successful");
    assert_eq!(trans.faab_bid, 25);
    assert_eq!(trans.timestamp, 1609459200);
    assert_eq!(trans.players[0].data.kind, "add");
    assert_eq!(trans.players[0].data.destination_team_key, "423.l.12345.t.1");
}

#[test]
fn test_matchup_from_wire() {
    let data: wire::MatchupData = from_json(json!({
        "week": "1",
        "week_start": "2024-09-05",
        "week_end": "2024-09-11",
        "status": "postevent",
        "is_playoffs": "0",
        "is_consolation": "0",
        "is_tied": "0",
        "winner_team_key": "423.l.12345.t.1",
        "teams": { "team": [
            { "team_key": "423.l.12345.t.1", "team_points": { "total": "110.5" } },
            { "team_key": "423.l.12345.t.2", "team_points": { "total": "99" }, "team_projected_points": { "total": "101.2" } }
        ] }
    }));

    let matchup = matchup_from_wire(data);
    assert_eq!(matchup.week, 1);
    assert_eq!(matchup.status, "postevent");
    assert!(!matchup.is_playoffs);
    assert_eq!(matchup.winner_team_key, "423.l.12345.t.1");
    assert!(matchup.teams[0].is_winner);
    assert!(!matchup.teams[1].is_winner);
    assert!((matchup.teams[1].projected_points - 101.2).abs() < 1e-9);
}

#[test]
fn test_leagues_from_response_flattens() {
    let resp: wire::LeaguesResponse = from_json(json!({
        "fantasy_content": { "users": [{ "user": [{ "games": [{ "game": [{ "leagues": [
            { "league": { "league_key": "454.l.1", "league_id": "1", "name": "One", "season": "2024", "num_teams": "10", "current_week": "5", "scoring_type": "head" } },
            { "league": { "league_key": "454.l.2", "league_id": "2", "name": "Two", "season": "2024" } }
        ] }] }] }] }] }
    }));

    let leagues = leagues_from_response(resp, "454");
    assert_eq!(leagues.len(), 2);
    assert_eq!(leagues[0].yahoo_game_key, "454");
    assert_eq!(leagues[0].season_year, 2024);
    assert_eq!(leagues[0].num_teams, 10);
    assert_eq!(leagues[0].current_week, 5);
    assert_eq!(leagues[1].num_teams, 0);
}
