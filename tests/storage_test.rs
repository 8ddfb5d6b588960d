//! On-disk tests for the local database and response cache

use tempfile::TempDir;
use yahoo_fantasy::{
    core::cache::{ApiCache, CacheKey},
    storage::{FantasyLeague, SeasonStats},
    FantasyDatabase,
};

fn league(yahoo_id: &str) -> FantasyLeague {
    FantasyLeague {
        id: 0,
        yahoo_league_id: yahoo_id.to_string(),
        yahoo_game_key: "454".to_string(),
        league_name: "Disk League".to_string(),
        season_year: 2024,
        scoring_type: "head".to_string(),
        scoring_settings: "{}".to_string(),
        num_teams: 10,
        current_week: 1,
        last_synced_at: None,
        created_at: 0,
        updated_at: 0,
    }
}

#[test]
fn test_open_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("fantasy.db");

    let _db = FantasyDatabase::open(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fantasy.db");

    let league_id = {
        let mut db = FantasyDatabase::open(&path).unwrap();
        let league_id = db.create_league(&league("777")).unwrap();
        let player_id = db.upsert_player("454.p.1", "Disk Player", Some("C"), true).unwrap();
        db.upsert_season_stats(&SeasonStats {
            player_id,
            season: "2024-25".to_string(),
            games_played: 60,
            points_per_game: 20.0,
            ..SeasonStats::default()
        })
        .unwrap();
        league_id
    };

    let db = FantasyDatabase::open(&path).unwrap();
    let stored = db.get_league_by_yahoo_id("777").unwrap().unwrap();
    assert_eq!(stored.id, league_id);
    assert_eq!(stored.league_name, "Disk League");

    let lines = db.get_active_players_with_stats("2024-25").unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].primary_position, "C");
    assert_eq!(lines[0].line.pts, 20.0);
}

#[test]
fn test_cache_shares_database_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fantasy.db");

    let _db = FantasyDatabase::open(&path).unwrap();
    let key = CacheKey::UserLeagues {
        game_key: "454".to_string(),
    };

    {
        let cache = ApiCache::open(&path).unwrap();
        cache.set_keyed(&key, &vec!["a", "b"]).unwrap();
    }

    let cache = ApiCache::open(&path).unwrap();
    let hit: Option<Vec<String>> = cache.get_json(&key.as_key()).unwrap();
    assert_eq!(hit, Some(vec!["a".to_string(), "b".to_string()]));
}

#[test]
fn test_expired_rows_are_cleaned_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.db");

    let cache = ApiCache::open(&path).unwrap();
    cache.set("stale", &1, -10).unwrap();
    cache.set("fresh", &2, 3600).unwrap();
    assert_eq!(cache.clean_expired().unwrap(), 1);

    let reopened = ApiCache::open(&path).unwrap();
    assert_eq!(reopened.get("stale").unwrap(), None);
    assert_eq!(reopened.get("fresh").unwrap().as_deref(), Some("2"));
}
