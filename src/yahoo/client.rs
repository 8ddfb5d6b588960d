//! HTTP client for the Yahoo Fantasy API v2.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::auth::TokenManager;
use super::config::ClientConfig;
use super::convert;
use super::types::*;
use super::wire;
use crate::cli::types::{LeagueKey, PlayerStatus, TeamKey, Week};
use crate::core::cache::{ApiCache, CacheKey};
use crate::error::{Result, YahooError};

pub struct YahooClient {
    http: Client,
    base_url: String,
    tokens: TokenManager,
    cache: Option<ApiCache>,
}

impl YahooClient {
    /// Build a client without a response cache.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            tokens: TokenManager::new(http.clone(), &config),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            cache: None,
        })
    }

    /// Attach a response cache. Ignored unless the config enabled caching.
    pub fn with_cache(config: ClientConfig, cache: ApiCache) -> Result<Self> {
        let enabled = config.cache_enabled;
        let mut client = Self::new(config)?;
        if enabled {
            client.cache = Some(cache);
        }
        Ok(client)
    }

    pub fn cache(&self) -> Option<&ApiCache> {
        self.cache.as_ref()
    }

    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    fn headers(token: &str) -> Result<HeaderMap> {
        let mut h = HeaderMap::new();
        h.insert(ACCEPT, HeaderValue::from_static("application/json"));
        h.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token))?);
        Ok(h)
    }

    async fn current_token(&self) -> Result<String> {
        match self.tokens.access_token().await {
            Some(token) => Ok(token),
            None if self.tokens.has_refresh_token().await => self.tokens.refresh(None).await,
            None => Err(YahooError::MissingAccessToken),
        }
    }

    async fn send(&self, url: &str, token: &str) -> Result<reqwest::Response> {
        Ok(self
            .http
            .get(url)
            .headers(Self::headers(token)?)
            .query(&[("format", "json")])
            .send()
            .await?)
    }

    /// GET `{base}/{endpoint}?format=json` and decode the body.
    ///
    /// A 401 triggers one token refresh and one retry.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let token = self.current_token().await?;
        debug!(%url, "GET");

        let mut response = self.send(&url, &token).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            debug!("Received 401, refreshing token and retrying");
            let fresh = self.tokens.refresh(Some(&token)).await?;
            response = self.send(&url, &fresh).await?;
        }

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(YahooError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn cached<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let cache = self.cache.as_ref()?;
        match cache.get_json(&key.as_key()) {
            Ok(hit) => hit,
            Err(err) => {
                debug!(key = %key.as_key(), error = %err, "cache read failed, treating as miss");
                None
            }
        }
    }

    fn store<T: Serialize + ?Sized>(&self, key: &CacheKey, value: &T) {
        if let Some(cache) = &self.cache {
            if let Err(err) = cache.set_keyed(key, value) {
                warn!(key = %key.as_key(), error = %err, "failed to write cache entry");
            }
        }
    }

    /// Leagues the logged-in user belongs to for one game.
    pub async fn get_user_leagues(&self, game_key: &str) -> Result<Vec<League>> {
        let key = CacheKey::UserLeagues {
            game_key: game_key.to_string(),
        };
        if let Some(leagues) = self.cached(&key) {
            return Ok(leagues);
        }

        let endpoint = format!("users;use_login=1/games;game_keys={}/leagues", game_key);
        let resp: wire::LeaguesResponse = self.get(&endpoint).await?;
        let leagues = convert::leagues_from_response(resp, game_key);
        self.store(&key, &leagues);
        Ok(leagues)
    }

    pub async fn get_league_teams(&self, league_key: &LeagueKey) -> Result<Vec<Team>> {
        let key = CacheKey::LeagueTeams {
            league_key: league_key.to_string(),
        };
        if let Some(teams) = self.cached(&key) {
            return Ok(teams);
        }

        let resp: wire::TeamsResponse = self.get(&format!("league/{}/teams", league_key)).await?;
        let teams: Vec<Team> = resp
            .fantasy_content
            .league
            .teams
            .into_iter()
            .map(|t| convert::team_from_wire(t.team))
            .collect();
        self.store(&key, &teams);
        Ok(teams)
    }

    pub async fn get_team_roster(&self, team_key: &TeamKey) -> Result<Vec<RosterSlot>> {
        let key = CacheKey::TeamRoster {
            team_key: team_key.to_string(),
        };
        if let Some(roster) = self.cached(&key) {
            return Ok(roster);
        }

        let resp: wire::RosterResponse = self.get(&format!("team/{}/roster", team_key)).await?;
        let roster: Vec<RosterSlot> = resp
            .fantasy_content
            .team
            .roster
            .players
            .into_iter()
            .map(|p| convert::roster_slot_from_wire(p.player))
            .collect();
        self.store(&key, &roster);
        Ok(roster)
    }

    pub async fn get_league_standings(&self, league_key: &LeagueKey) -> Result<Standings> {
        let resp: wire::StandingsResponse =
            self.get(&format!("league/{}/standings", league_key)).await?;
        Ok(Standings {
            teams: resp
                .fantasy_content
                .league
                .standings
                .teams
                .into_iter()
                .map(|t| convert::standings_team_from_wire(t.team))
                .collect(),
        })
    }

    pub async fn get_league_matchups(&self, league_key: &LeagueKey, week: Week) -> Result<Vec<Matchup>> {
        let endpoint = format!("league/{}/scoreboard;week={}", league_key, week);
        let resp: wire::ScoreboardResponse = self.get(&endpoint).await?;
        Ok(resp
            .fantasy_content
            .league
            .scoreboard
            .matchups
            .into_iter()
            .map(|m| convert::matchup_from_wire(m.matchup))
            .collect())
    }

    pub async fn get_league_players(
        &self,
        league_key: &LeagueKey,
        status: PlayerStatus,
        start: u32,
        count: u32,
    ) -> Result<Vec<Player>> {
        let endpoint = format!(
            "league/{}/players;status={};start={};count={}",
            league_key,
            status.code(),
            start,
            count
        );
        let resp: wire::PlayersResponse = self.get(&endpoint).await?;
        Ok(resp
            .fantasy_content
            .league
            .players
            .into_vec()
            .into_iter()
            .map(|p| convert::player_from_wire(p.player))
            .collect())
    }

    /// Season stats for one player, or one week's when `week` is non-zero.
    pub async fn get_player_stats(
        &self,
        league_key: &LeagueKey,
        player_key: &str,
        week: Week,
    ) -> Result<Player> {
        let mut endpoint = format!("league/{}/players;player_keys={}/stats", league_key, player_key);
        if !week.is_season() {
            endpoint.push_str(&format!(";type=week;week={}", week));
        }
        let resp: wire::PlayersResponse = self.get(&endpoint).await?;
        let player = resp
            .fantasy_content
            .league
            .players
            .into_vec()
            .into_iter()
            .next()
            .map(|p| convert::player_from_wire(p.player))
            .ok_or_else(|| YahooError::InvalidValue(format!("no stats returned for {}", player_key)))?;
        Ok(player)
    }

    pub async fn get_league_draft_results(&self, league_key: &LeagueKey) -> Result<Vec<DraftResult>> {
        let resp: wire::LeagueDraftResponse =
            self.get(&format!("league/{}/draftresults", league_key)).await?;
        Ok(resp
            .fantasy_content
            .league
            .draft_results
            .into_iter()
            .map(|d| convert::draft_result_from_wire(d.draft_result))
            .collect())
    }

    pub async fn get_team_draft_results(&self, team_key: &TeamKey) -> Result<Vec<DraftResult>> {
        let resp: wire::TeamDraftResponse =
            self.get(&format!("team/{}/draftresults", team_key)).await?;
        Ok(resp
            .fantasy_content
            .team
            .draft_results
            .into_iter()
            .map(|d| convert::draft_result_from_wire(d.draft_result))
            .collect())
    }

    pub async fn get_league_transactions(&self, league_key: &LeagueKey) -> Result<Vec<Transaction>> {
        let resp: wire::TransactionsResponse =
            self.get(&format!("league/{}/transactions", league_key)).await?;
        Ok(resp
            .fantasy_content
            .league
            .transactions
            .into_iter()
            .map(|t| convert::transaction_from_wire(t.transaction))
            .collect())
    }
}
