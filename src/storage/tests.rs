//! Unit tests for the storage layer

use super::*;

fn create_test_db() -> FantasyDatabase {
    FantasyDatabase::new_in_memory().unwrap()
}

fn sample_league(yahoo_id: &str) -> FantasyLeague {
    FantasyLeague {
        id: 0,
        yahoo_league_id: yahoo_id.to_string(),
        yahoo_game_key: "428".to_string(),
        league_name: "Test League".to_string(),
        season_year: 2024,
        scoring_type: "head".to_string(),
        scoring_settings: "{}".to_string(),
        num_teams: 12,
        current_week: 5,
        last_synced_at: None,
        created_at: 0,
        updated_at: 0,
    }
}

fn sample_team(league_id: i64, n: u32, is_user_team: bool) -> FantasyTeam {
    FantasyTeam {
        id: 0,
        league_id,
        yahoo_team_id: n.to_string(),
        yahoo_team_key: format!("428.l.12345.t.{}", n),
        team_name: format!("Team {}", n),
        manager_name: format!("Manager {}", n),
        is_user_team,
        wins: 0,
        losses: 0,
        ties: 0,
        rank: n,
        points_for: 0.0,
        points_against: 0.0,
    }
}

fn line(pts: f64, reb: f64, to: f64, fg_pct: f64) -> CategoryLine {
    CategoryLine {
        pts,
        reb,
        to,
        fg_pct,
        ..Default::default()
    }
}

fn projection(player_id: i64, league_id: i64, fpg: f64, line: CategoryLine) -> PlayerProjection {
    PlayerProjection {
        player_id,
        league_id,
        fpg,
        line,
        z_score: 0.0,
        overall_rank: 1,
        position_rank: 1,
        scarcity_multiplier: 1.0,
        position: String::new(),
    }
}

fn add_to_roster(db: &mut FantasyDatabase, team_id: i64, player_id: i64, starting: bool) {
    db.create_roster_entry(&RosterEntry {
        id: 0,
        team_id,
        player_id,
        roster_position: "PG".to_string(),
        selected_position: if starting { "PG" } else { "BN" }.to_string(),
        is_starting: starting,
    })
    .unwrap();
}

#[test]
fn test_database_creation() {
    let db = create_test_db();
    assert!(db.get_all_leagues().unwrap().is_empty());
}

#[test]
fn test_create_and_get_league() {
    let mut db = create_test_db();
    let id = db.create_league(&sample_league("12345")).unwrap();

    let league = db.get_league(id).unwrap().unwrap();
    assert_eq!(league.yahoo_league_id, "12345");
    assert_eq!(league.season_year, 2024);
    assert_eq!(league.last_synced_at, None);

    let by_yahoo = db.get_league_by_yahoo_id("12345").unwrap().unwrap();
    assert_eq!(by_yahoo.id, id);
    assert!(db.get_league_by_yahoo_id("99999").unwrap().is_none());
}

#[test]
fn test_duplicate_yahoo_league_rejected() {
    let mut db = create_test_db();
    db.create_league(&sample_league("12345")).unwrap();
    assert!(db.create_league(&sample_league("12345")).is_err());
}

#[test]
fn test_league_sync_time_and_settings() {
    let mut db = create_test_db();
    let id = db.create_league(&sample_league("1")).unwrap();

    db.update_league_sync_time(id).unwrap();
    db.update_scoring_settings(id, r#"{"PTS":1.0}"#).unwrap();

    let league = db.get_league(id).unwrap().unwrap();
    assert!(league.last_synced_at.is_some());
    assert_eq!(league.scoring_settings, r#"{"PTS":1.0}"#);
}

#[test]
fn test_delete_league_cascades_to_teams() {
    let mut db = create_test_db();
    let league_id = db.create_league(&sample_league("1")).unwrap();
    db.create_team(&sample_team(league_id, 1, true)).unwrap();

    db.delete_league(league_id).unwrap();
    assert!(db.get_league(league_id).unwrap().is_none());
    assert!(db.get_teams_by_league(league_id).unwrap().is_empty());
}

#[test]
fn test_upsert_team_keeps_row_id() {
    let mut db = create_test_db();
    let league_id = db.create_league(&sample_league("1")).unwrap();

    let mut team = sample_team(league_id, 1, false);
    let first = db.upsert_team(&team).unwrap();
    team.wins = 7;
    team.team_name = "Renamed".to_string();
    let second = db.upsert_team(&team).unwrap();

    assert_eq!(first, second);
    let stored = db.get_team(first).unwrap().unwrap();
    assert_eq!(stored.wins, 7);
    assert_eq!(stored.team_name, "Renamed");
    assert_eq!(db.get_teams_by_league(league_id).unwrap().len(), 1);
}

#[test]
fn test_user_team_and_other_teams() {
    let mut db = create_test_db();
    let league_id = db.create_league(&sample_league("1")).unwrap();
    let mine = db.create_team(&sample_team(league_id, 1, true)).unwrap();
    db.create_team(&sample_team(league_id, 2, false)).unwrap();
    db.create_team(&sample_team(league_id, 3, false)).unwrap();

    let user_team = db.get_user_team(league_id).unwrap().unwrap();
    assert_eq!(user_team.id, mine);

    let others = db.get_other_teams(league_id, mine).unwrap();
    assert_eq!(others.len(), 2);
    assert!(others.iter().all(|t| t.id != mine));
}

#[test]
fn test_upsert_player_updates_existing() {
    let mut db = create_test_db();
    let id = db.upsert_player("428.p.1", "Player One", Some("PG"), true).unwrap();
    let again = db.upsert_player("428.p.1", "Player One Jr", None, true).unwrap();

    assert_eq!(id, again);
    let player = db.get_player(id).unwrap().unwrap();
    assert_eq!(player.full_name, "Player One Jr");
    assert_eq!(player.primary_position, None);
    assert_eq!(db.get_player_position(id).unwrap(), "F");
    assert_eq!(db.get_player_id_by_yahoo_key("428.p.1").unwrap(), Some(id));
    assert_eq!(db.get_player_id_by_yahoo_key("428.p.2").unwrap(), None);
}

#[test]
fn test_active_players_with_stats_defaults_missing_rows() {
    let mut db = create_test_db();
    let with_stats = db.upsert_player("428.p.1", "Scorer", Some("SG"), true).unwrap();
    let without = db.upsert_player("428.p.2", "Rookie", None, true).unwrap();
    db.upsert_player("428.p.3", "Retired", Some("C"), false).unwrap();

    db.upsert_season_stats(&SeasonStats {
        player_id: with_stats,
        season: "2024-25".to_string(),
        games_played: 40,
        points_per_game: 25.0,
        rebounds_per_game: 5.0,
        ..Default::default()
    })
    .unwrap();

    let lines = db.get_active_players_with_stats("2024-25").unwrap();
    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0].player_id, with_stats);
    assert_eq!(lines[0].primary_position, "SG");
    assert_eq!(lines[0].line.pts, 25.0);

    assert_eq!(lines[1].player_id, without);
    assert_eq!(lines[1].primary_position, "F");
    assert_eq!(lines[1].line, CategoryLine::default());
}

#[test]
fn test_roster_entries_starters_first() {
    let mut db = create_test_db();
    let league_id = db.create_league(&sample_league("1")).unwrap();
    let team_id = db.create_team(&sample_team(league_id, 1, true)).unwrap();
    let bench = db.upsert_player("428.p.1", "Bench", Some("PG"), true).unwrap();
    let starter = db.upsert_player("428.p.2", "Starter", Some("PG"), true).unwrap();

    add_to_roster(&mut db, team_id, bench, false);
    add_to_roster(&mut db, team_id, starter, true);

    let roster = db.get_roster_by_team(team_id).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].player_id, starter);
    assert!(roster[0].is_starting);

    assert_eq!(db.delete_roster_by_team(team_id).unwrap(), 2);
    assert!(db.get_roster_by_team(team_id).unwrap().is_empty());
}

fn roster_entry(team_id: i64, player_id: i64) -> RosterEntry {
    RosterEntry {
        id: 0,
        team_id,
        player_id,
        roster_position: "C".to_string(),
        selected_position: "C".to_string(),
        is_starting: true,
    }
}

#[test]
fn test_replace_roster_swaps_entries() {
    let mut db = create_test_db();
    let league_id = db.create_league(&sample_league("1")).unwrap();
    let team_id = db.create_team(&sample_team(league_id, 1, true)).unwrap();
    let old = db.upsert_player("428.p.1", "Old", Some("PG"), true).unwrap();
    let new = db.upsert_player("428.p.2", "New", Some("C"), true).unwrap();
    add_to_roster(&mut db, team_id, old, true);

    assert_eq!(db.replace_roster(team_id, &[roster_entry(team_id, new)]).unwrap(), 1);

    let roster = db.get_roster_by_team(team_id).unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].player_id, new);
    assert_eq!(roster[0].roster_position, "C");
}

#[test]
fn test_replace_roster_failure_keeps_previous_roster() {
    let mut db = create_test_db();
    let league_id = db.create_league(&sample_league("1")).unwrap();
    let team_id = db.create_team(&sample_team(league_id, 1, true)).unwrap();
    let kept = db.upsert_player("428.p.1", "Kept", Some("PG"), true).unwrap();
    let valid = db.upsert_player("428.p.2", "Valid", Some("C"), true).unwrap();
    add_to_roster(&mut db, team_id, kept, true);

    // The second entry points at a player row that does not exist.
    let entries = [roster_entry(team_id, valid), roster_entry(team_id, 9_999)];
    assert!(db.replace_roster(team_id, &entries).is_err());

    let roster = db.get_roster_by_team(team_id).unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].player_id, kept);
}

#[test]
fn test_replace_projections_is_per_league() {
    let mut db = create_test_db();
    let league_a = db.create_league(&sample_league("1")).unwrap();
    let league_b = db.create_league(&sample_league("2")).unwrap();
    let p1 = db.upsert_player("428.p.1", "One", Some("C"), true).unwrap();
    let p2 = db.upsert_player("428.p.2", "Two", None, true).unwrap();

    db.replace_projections(league_a, &[projection(p1, league_a, 30.0, line(20.0, 10.0, 2.0, 0.5))])
        .unwrap();
    db.replace_projections(league_b, &[projection(p1, league_b, 10.0, CategoryLine::default())])
        .unwrap();
    db.replace_projections(
        league_a,
        &[
            projection(p1, league_a, 35.0, line(22.0, 10.0, 2.0, 0.5)),
            projection(p2, league_a, 12.0, CategoryLine::default()),
        ],
    )
    .unwrap();

    let a = db.get_projections(league_a, &[p1, p2]).unwrap();
    assert_eq!(a.len(), 2);
    assert_eq!(a[0].fpg, 35.0);
    assert_eq!(a[0].position, "C");
    assert_eq!(a[1].position, "F");

    let b = db.get_projections(league_b, &[p1, p2]).unwrap();
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].fpg, 10.0);

    assert!(db.get_projections(league_a, &[]).unwrap().is_empty());
}

#[test]
fn test_team_category_totals_counts_starters_only() {
    let mut db = create_test_db();
    let league_id = db.create_league(&sample_league("1")).unwrap();
    let team_id = db.create_team(&sample_team(league_id, 1, true)).unwrap();
    let p1 = db.upsert_player("428.p.1", "One", Some("PG"), true).unwrap();
    let p2 = db.upsert_player("428.p.2", "Two", Some("C"), true).unwrap();
    let p3 = db.upsert_player("428.p.3", "Three", Some("C"), true).unwrap();

    db.replace_projections(
        league_id,
        &[
            projection(p1, league_id, 30.0, line(20.0, 4.0, 3.0, 0.40)),
            projection(p2, league_id, 25.0, line(10.0, 12.0, 1.0, 0.60)),
            projection(p3, league_id, 50.0, line(40.0, 20.0, 5.0, 0.90)),
        ],
    )
    .unwrap();
    add_to_roster(&mut db, team_id, p1, true);
    add_to_roster(&mut db, team_id, p2, true);
    add_to_roster(&mut db, team_id, p3, false);

    let totals = db.team_category_totals(league_id, team_id).unwrap();
    assert_eq!(totals.pts, 30.0);
    assert_eq!(totals.reb, 16.0);
    assert_eq!(totals.to, 4.0);
    assert!((totals.fg_pct - 0.50).abs() < 1e-9);

    let roster = db.get_roster_with_projections(league_id, team_id).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].player_id, p1);
    assert_eq!(roster[1].position, "C");

    let counts = db.starting_position_counts(team_id).unwrap();
    assert_eq!(counts.get("PG"), Some(&1));
    assert_eq!(counts.get("C"), Some(&1));
}

#[test]
fn test_team_category_totals_empty_team() {
    let mut db = create_test_db();
    let league_id = db.create_league(&sample_league("1")).unwrap();
    let team_id = db.create_team(&sample_team(league_id, 1, true)).unwrap();

    assert_eq!(db.team_category_totals(league_id, team_id).unwrap(), CategoryLine::default());
}

#[test]
fn test_team_analysis_round_trip() {
    let mut db = create_test_db();
    let league_id = db.create_league(&sample_league("1")).unwrap();
    let team_id = db.create_team(&sample_team(league_id, 1, true)).unwrap();

    let analysis = TeamAnalysisRecord {
        team_id,
        scores: line(1.5, -0.5, 0.2, -1.0),
        weakest: vec![Category::FgPct, Category::Reb, Category::Ast],
        strongest: vec![Category::Pts, Category::To, Category::Stl],
        position_needs: vec!["PG".to_string(), "C".to_string()],
    };
    db.save_team_analysis(&analysis).unwrap();
    assert_eq!(db.get_team_analysis(team_id).unwrap(), Some(analysis.clone()));

    let mut updated = analysis;
    updated.position_needs.clear();
    db.save_team_analysis(&updated).unwrap();
    assert!(db.get_team_analysis(team_id).unwrap().unwrap().position_needs.is_empty());
}

#[test]
fn test_trade_proposals_filter_rejected() {
    let mut db = create_test_db();
    let league_id = db.create_league(&sample_league("1")).unwrap();
    let a = db.create_team(&sample_team(league_id, 1, true)).unwrap();
    let b = db.create_team(&sample_team(league_id, 2, false)).unwrap();

    let proposal = TradeProposalRecord {
        id: 0,
        league_id,
        team_a_id: a,
        team_b_id: b,
        team_a_gives: vec![10, 11],
        team_b_gives: vec![20],
        fairness_score: 88.5,
        team_a_value_change: 1.5,
        team_b_value_change: -1.5,
        team_a_benefits: "Improves: REB (+2.0)".to_string(),
        team_b_benefits: "No significant benefit".to_string(),
        source: "manual".to_string(),
        status: "pending".to_string(),
        suggested_at: 0,
    };
    let first = db.save_trade_proposal(&proposal).unwrap();
    let second = db.save_trade_proposal(&proposal).unwrap();

    let stored = db.get_proposals_by_team(b).unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, second);
    assert_eq!(stored[0].team_a_gives, vec![10, 11]);
    assert_eq!(stored[0].team_b_gives, vec![20]);

    assert!(db.update_proposal_status(first, "rejected").unwrap());
    assert!(!db.update_proposal_status(9999, "accepted").unwrap());
    let remaining = db.get_proposals_by_team(a).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second);
}

#[test]
fn test_record_sync() {
    let mut db = create_test_db();
    let league_id = db.create_league(&sample_league("1")).unwrap();

    db.record_sync(league_id, "full", "success", 26, None).unwrap();
    db.record_sync(league_id, "full", "failed", 0, Some("timeout")).unwrap();
    assert_eq!(db.sync_count(league_id).unwrap(), 2);
}

#[test]
fn test_category_parsing() {
    assert_eq!("fg%".parse::<Category>().unwrap(), Category::FgPct);
    assert_eq!("3PM".parse::<Category>().unwrap(), Category::Tpm);
    assert!("XYZ".parse::<Category>().is_err());
    assert!(Category::To.is_inverted());
    assert_eq!(Category::COUNTING.len(), 7);
}
