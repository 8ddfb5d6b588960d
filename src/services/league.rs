//! League import and sync from Yahoo into the local mirror.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::valuation::ScoringSettings;
use crate::cli::types::{LeagueKey, TeamKey};
use crate::error::YahooError;
use crate::storage::{FantasyDatabase, FantasyLeague, FantasyTeam, RosterEntry};
use crate::yahoo::YahooClient;

pub struct LeagueService<'a> {
    client: &'a YahooClient,
    db: &'a mut FantasyDatabase,
}

impl<'a> LeagueService<'a> {
    pub fn new(client: &'a YahooClient, db: &'a mut FantasyDatabase) -> Self {
        Self { client, db }
    }

    /// Import one of the logged-in user's leagues and sync its teams and rosters.
    ///
    /// `user_team_id` is the Yahoo team id (e.g. `"3"`) flagged as the user's team.
    /// Returns the local league id.
    pub async fn import_league(
        &mut self,
        game_key: &str,
        yahoo_league_id: &str,
        user_team_id: &str,
    ) -> Result<i64> {
        if self
            .db
            .get_league_by_yahoo_id(yahoo_league_id)
            .context("failed to check existing league")?
            .is_some()
        {
            return Err(YahooError::LeagueAlreadyImported {
                league_id: yahoo_league_id.to_string(),
            }
            .into());
        }

        let leagues = self
            .client
            .get_user_leagues(game_key)
            .await
            .context("failed to fetch leagues from Yahoo")?;
        let target = leagues
            .into_iter()
            .find(|l| l.yahoo_league_id == yahoo_league_id)
            .ok_or_else(|| YahooError::LeagueNotFound {
                league_id: yahoo_league_id.to_string(),
            })?;

        let scoring = serde_json::to_string(&ScoringSettings::league_default())?;
        let league_id = self
            .db
            .create_league(&FantasyLeague {
                id: 0,
                yahoo_league_id: target.yahoo_league_id.clone(),
                yahoo_game_key: target.yahoo_game_key.clone(),
                league_name: target.league_name.clone(),
                season_year: target.season_year,
                scoring_type: target.scoring_type.clone(),
                scoring_settings: scoring,
                num_teams: target.num_teams,
                current_week: target.current_week,
                last_synced_at: None,
                created_at: 0,
                updated_at: 0,
            })
            .context("failed to save league")?;
        info!(league_id, name = %target.league_name, "League imported");

        let league_key = LeagueKey::new(&target.yahoo_game_key, &target.yahoo_league_id);
        self.sync_teams_and_rosters(league_id, &league_key, user_team_id)
            .await
            .context("failed to sync teams and rosters")?;
        Ok(league_id)
    }

    /// Refresh every team and roster of a stored league. Returns the number of teams synced.
    pub async fn sync_teams_and_rosters(
        &mut self,
        league_id: i64,
        league_key: &LeagueKey,
        user_team_id: &str,
    ) -> Result<usize> {
        match self.sync_inner(league_id, league_key, user_team_id).await {
            Ok(teams) => {
                self.record(league_id, "success", teams, None);
                info!(league_id, teams, "League sync complete");
                Ok(teams)
            }
            Err(err) => {
                self.record(league_id, "failed", 0, Some(&format!("{:#}", err)));
                Err(err)
            }
        }
    }

    async fn sync_inner(&mut self, league_id: i64, league_key: &LeagueKey, user_team_id: &str) -> Result<usize> {
        let teams = self
            .client
            .get_league_teams(league_key)
            .await
            .context("failed to fetch teams")?;

        for yahoo_team in &teams {
            let team_id = self
                .db
                .upsert_team(&FantasyTeam {
                    id: 0,
                    league_id,
                    yahoo_team_id: yahoo_team.yahoo_team_id.clone(),
                    yahoo_team_key: yahoo_team.yahoo_team_key.clone(),
                    team_name: yahoo_team.team_name.clone(),
                    manager_name: yahoo_team.manager_name.clone(),
                    is_user_team: yahoo_team.yahoo_team_id == user_team_id,
                    wins: yahoo_team.wins,
                    losses: yahoo_team.losses,
                    ties: yahoo_team.ties,
                    rank: yahoo_team.rank,
                    points_for: 0.0,
                    points_against: 0.0,
                })
                .with_context(|| format!("failed to save team {}", yahoo_team.team_name))?;

            let team_key: TeamKey = yahoo_team.yahoo_team_key.parse()?;
            let roster = self
                .client
                .get_team_roster(&team_key)
                .await
                .with_context(|| format!("failed to fetch roster for team {}", yahoo_team.team_name))?;

            let mut entries = Vec::with_capacity(roster.len());
            for slot in &roster {
                let Some(player_id) = self.db.get_player_id_by_yahoo_key(&slot.player_key)? else {
                    debug!(player_key = %slot.player_key, "player not in local table, skipping");
                    continue;
                };
                entries.push(RosterEntry {
                    id: 0,
                    team_id,
                    player_id,
                    roster_position: slot.position.clone(),
                    selected_position: slot.selected_position.clone(),
                    is_starting: slot.is_starting,
                });
            }
            self.db
                .replace_roster(team_id, &entries)
                .with_context(|| format!("failed to save roster for team {}", yahoo_team.team_name))?;
        }

        self.db
            .update_league_sync_time(league_id)
            .context("failed to update sync time")?;
        Ok(teams.len())
    }

    fn record(&mut self, league_id: i64, status: &str, items: usize, error: Option<&str>) {
        if let Err(err) = self.db.record_sync(league_id, "full", status, items, error) {
            warn!(league_id, error = %err, "failed to record sync history");
        }
    }
}
