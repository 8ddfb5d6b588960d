use super::*;
use serde::Deserialize;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Payload {
    name: String,
    count: u32,
}

fn row_count(cache: &ApiCache) -> i64 {
    cache
        .conn()
        .unwrap()
        .query_row("SELECT COUNT(*) FROM yahoo_api_cache", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn test_cache_key_strings_and_ttls() {
    let leagues = CacheKey::UserLeagues {
        game_key: "454".to_string(),
    };
    let teams = CacheKey::LeagueTeams {
        league_key: "454.l.1".to_string(),
    };
    let roster = CacheKey::TeamRoster {
        team_key: "454.l.1.t.2".to_string(),
    };

    assert_eq!(leagues.as_key(), "user:leagues:454");
    assert_eq!(teams.as_key(), "league:454.l.1:teams");
    assert_eq!(roster.as_key(), "team:454.l.1.t.2:roster");
    assert_eq!(leagues.ttl(), Duration::from_secs(86_400));
    assert_eq!(teams.ttl(), Duration::from_secs(21_600));
    assert_eq!(roster.ttl(), Duration::from_secs(3_600));
}

#[test]
fn test_set_and_get_round_trip() {
    let cache = ApiCache::new_in_memory().unwrap();
    let payload = Payload {
        name: "league".to_string(),
        count: 12,
    };

    cache.set("k", &payload, 60).unwrap();
    let got: Option<Payload> = cache.get_json("k").unwrap();
    assert_eq!(got, Some(payload));
}

#[test]
fn test_get_missing_key() {
    let cache = ApiCache::new_in_memory().unwrap();
    assert_eq!(cache.get("absent").unwrap(), None);
}

#[test]
fn test_set_replaces_existing_value() {
    let cache = ApiCache::new_in_memory().unwrap();
    cache.set("k", "first", 60).unwrap();
    cache.set("k", "second", 60).unwrap();

    assert_eq!(cache.get("k").unwrap().as_deref(), Some("\"second\""));
    assert_eq!(row_count(&cache), 1);
}

#[test]
fn test_expired_entry_is_deleted_on_read() {
    let cache = ApiCache::new_in_memory().unwrap();
    cache.set("old", "value", 0).unwrap();
    assert_eq!(row_count(&cache), 1);

    assert_eq!(cache.get("old").unwrap(), None);
    assert_eq!(row_count(&cache), 0);
}

#[test]
fn test_sqlite_tier_serves_after_memory_eviction() {
    let cache = ApiCache::new_in_memory().unwrap();
    cache.set("k", &42, 60).unwrap();
    cache.memory().unwrap().clear();

    assert_eq!(cache.get("k").unwrap().as_deref(), Some("42"));
    assert_eq!(cache.memory_stats().0, 1);
}

#[test]
fn test_delete() {
    let cache = ApiCache::new_in_memory().unwrap();
    cache.set("k", "v", 60).unwrap();
    cache.delete("k").unwrap();

    assert_eq!(cache.get("k").unwrap(), None);
    assert_eq!(row_count(&cache), 0);
}

#[test]
fn test_clean_expired_counts_rows() {
    let cache = ApiCache::new_in_memory().unwrap();
    cache.set("a", "v", -10).unwrap();
    cache.set("b", "v", 0).unwrap();
    cache.set("c", "v", 3600).unwrap();

    assert_eq!(cache.clean_expired().unwrap(), 2);
    assert_eq!(row_count(&cache), 1);
    assert_eq!(cache.memory_stats().0, 1);
    assert_eq!(cache.clean_expired().unwrap(), 0);
}

#[test]
fn test_set_keyed_uses_key_string() {
    let cache = ApiCache::new_in_memory().unwrap();
    let key = CacheKey::TeamRoster {
        team_key: "454.l.1.t.1".to_string(),
    };
    cache.set_keyed(&key, &vec![1, 2, 3]).unwrap();

    let got: Option<Vec<u32>> = cache.get_json("team:454.l.1.t.1:roster").unwrap();
    assert_eq!(got, Some(vec![1, 2, 3]));
}

#[test]
fn test_open_file_backed_cache() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("cache.db");

    {
        let cache = ApiCache::open(&path).unwrap();
        cache.set("persist", "yes", 60).unwrap();
    }

    let reopened = ApiCache::open(&path).unwrap();
    assert_eq!(reopened.get("persist").unwrap().as_deref(), Some("\"yes\""));
}
