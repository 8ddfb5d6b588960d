//! Raw response shapes returned by the Yahoo Fantasy API (`?format=json`).
//!
//! Yahoo is loose about scalar types: the same field may arrive as `"12"`,
//! `12` or be missing altogether. Every scalar here is therefore captured as
//! a `String` through [`de_lenient_string`] and parsed by `yahoo::convert`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Accept a JSON string, number, bool or null and keep its textual form.
pub(crate) fn de_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => if b { "1" } else { "0" }.to_string(),
        Some(other) => other.to_string(),
    })
}

/// A collection Yahoo sometimes renders as an array and sometimes, when it
/// holds a single element, as a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

macro_rules! lenient {
    ($(#[$meta:meta])* pub struct $name:ident { $($field:ident $(: $rename:literal)?),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Default, Deserialize)]
        pub struct $name {
            $(
                #[serde(default, deserialize_with = "de_lenient_string" $(, rename = $rename)?)]
                pub $field: String,
            )*
        }
    };
}

// ---------------------------------------------------------------------------
// users;use_login=1/games;game_keys=…/leagues

#[derive(Debug, Deserialize)]
pub struct LeaguesResponse {
    pub fantasy_content: LeaguesContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct LeaguesContent {
    #[serde(default)]
    pub users: Vec<UsersEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UsersEntry {
    #[serde(default)]
    pub user: Vec<UserEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserEntry {
    #[serde(default)]
    pub games: Vec<GamesEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GamesEntry {
    #[serde(default)]
    pub game: Vec<GameEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameEntry {
    #[serde(default)]
    pub leagues: Vec<LeagueEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LeagueEntry {
    #[serde(default)]
    pub league: LeagueData,
}

lenient! {
    pub struct LeagueData {
        league_key,
        league_id,
        name,
        season,
        scoring_type,
        num_teams,
        current_week,
    }
}

// ---------------------------------------------------------------------------
// league/{key}/teams

#[derive(Debug, Deserialize)]
pub struct TeamsResponse {
    pub fantasy_content: TeamsContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamsContent {
    #[serde(default)]
    pub league: TeamsLeague,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamsLeague {
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamEntry {
    #[serde(default)]
    pub team: TeamData,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamData {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub team_key: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub team_id: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub name: String,
    #[serde(default)]
    pub managers: Vec<ManagerEntry>,
    #[serde(default)]
    pub team_standings: StandingsData,
}

#[derive(Debug, Default, Deserialize)]
pub struct ManagerEntry {
    #[serde(default)]
    pub manager: ManagerData,
}

lenient! {
    pub struct ManagerData {
        manager_id,
        nickname,
        guid,
        is_commissioner,
        is_current_login,
    }
}

// ---------------------------------------------------------------------------
// team/{key}/roster

#[derive(Debug, Deserialize)]
pub struct RosterResponse {
    pub fantasy_content: RosterContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct RosterContent {
    #[serde(default)]
    pub team: RosterTeam,
}

#[derive(Debug, Default, Deserialize)]
pub struct RosterTeam {
    #[serde(default)]
    pub roster: RosterData,
}

#[derive(Debug, Default, Deserialize)]
pub struct RosterData {
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
}

// ---------------------------------------------------------------------------
// players

#[derive(Debug, Deserialize)]
pub struct PlayersResponse {
    pub fantasy_content: PlayersContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayersContent {
    #[serde(default)]
    pub league: PlayersLeague,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayersLeague {
    #[serde(default)]
    pub players: OneOrMany<PlayerEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerEntry {
    #[serde(default)]
    pub player: PlayerData,
}

lenient! {
    pub struct NameData {
        full,
        first,
        last,
        ascii_first,
        ascii_last,
    }
}

lenient! {
    pub struct PositionData {
        position,
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerData {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub player_key: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub player_id: String,
    #[serde(default)]
    pub name: NameData,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub editorial_team_key: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub editorial_team_full_name: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub editorial_team_abbr: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub display_position: String,
    #[serde(default)]
    pub eligible_positions: Vec<PositionData>,
    #[serde(default)]
    pub selected_position: Option<PositionData>,
    #[serde(default)]
    pub player_stats: Option<StatsBlock>,
    #[serde(default)]
    pub player_points: Option<PointsData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatsBlock {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub coverage_type: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub week: String,
    #[serde(default)]
    pub stats: StatList,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatList {
    #[serde(default)]
    pub stat: Vec<StatData>,
}

lenient! {
    pub struct StatData {
        stat_id,
        value,
    }
}

lenient! {
    pub struct PointsData {
        coverage_type,
        week,
        total,
    }
}

// ---------------------------------------------------------------------------
// league/{key}/standings

#[derive(Debug, Deserialize)]
pub struct StandingsResponse {
    pub fantasy_content: StandingsContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct StandingsContent {
    #[serde(default)]
    pub league: StandingsLeague,
}

#[derive(Debug, Default, Deserialize)]
pub struct StandingsLeague {
    #[serde(default)]
    pub standings: StandingsTeams,
}

#[derive(Debug, Default, Deserialize)]
pub struct StandingsTeams {
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StandingsData {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub rank: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub playoff_seed: String,
    #[serde(default)]
    pub outcome_totals: OutcomeData,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub points_for: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub points_against: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub games_back: String,
    #[serde(default)]
    pub streak: Option<StreakData>,
}

lenient! {
    pub struct OutcomeData {
        wins,
        losses,
        ties,
        percentage,
    }
}

lenient! {
    pub struct StreakData {
        kind: "type",
        value,
    }
}

// ---------------------------------------------------------------------------
// league/{key}/scoreboard

#[derive(Debug, Deserialize)]
pub struct ScoreboardResponse {
    pub fantasy_content: ScoreboardContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScoreboardContent {
    #[serde(default)]
    pub league: ScoreboardLeague,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScoreboardLeague {
    #[serde(default)]
    pub scoreboard: ScoreboardData,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScoreboardData {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub week: String,
    #[serde(default)]
    pub matchups: Vec<MatchupEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MatchupEntry {
    #[serde(default)]
    pub matchup: MatchupData,
}

#[derive(Debug, Default, Deserialize)]
pub struct MatchupData {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub week: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub week_start: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub week_end: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub is_playoffs: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub is_consolation: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub is_tied: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub winner_team_key: String,
    #[serde(default)]
    pub teams: MatchupTeams,
}

#[derive(Debug, Default, Deserialize)]
pub struct MatchupTeams {
    #[serde(default)]
    pub team: Vec<MatchupTeamData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MatchupTeamData {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub team_key: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub team_id: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub win_probability: String,
    #[serde(default)]
    pub team_points: PointsData,
    #[serde(default)]
    pub team_projected_points: PointsData,
    #[serde(default)]
    pub team_stats: Option<StatsBlock>,
}

// ---------------------------------------------------------------------------
// league/{key}/draftresults, team/{key}/draftresults

#[derive(Debug, Deserialize)]
pub struct LeagueDraftResponse {
    pub fantasy_content: LeagueDraftContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct LeagueDraftContent {
    #[serde(default)]
    pub league: DraftResults,
}

#[derive(Debug, Deserialize)]
pub struct TeamDraftResponse {
    pub fantasy_content: TeamDraftContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamDraftContent {
    #[serde(default)]
    pub team: DraftResults,
}

#[derive(Debug, Default, Deserialize)]
pub struct DraftResults {
    #[serde(default)]
    pub draft_results: Vec<DraftResultEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DraftResultEntry {
    #[serde(default)]
    pub draft_result: DraftResultData,
}

#[derive(Debug, Default, Deserialize)]
pub struct DraftResultData {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub pick: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub round: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub team_key: String,
    #[serde(default)]
    pub players: Option<PlayerEntry>,
}

// ---------------------------------------------------------------------------
// league/{key}/transactions

#[derive(Debug, Deserialize)]
pub struct TransactionsResponse {
    pub fantasy_content: TransactionsContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransactionsContent {
    #[serde(default)]
    pub league: TransactionsLeague,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransactionsLeague {
    #[serde(default)]
    pub transactions: Vec<TransactionEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransactionEntry {
    #[serde(default)]
    pub transaction: TransactionRecord,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransactionRecord {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub transaction_key: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub transaction_id: String,
    #[serde(default, deserialize_with = "de_lenient_string", rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub faab_bid: String,
    #[serde(default)]
    pub players: Vec<TransactionPlayerEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransactionPlayerEntry {
    #[serde(default)]
    pub player: TransactionPlayerData,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransactionPlayerData {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub player_key: String,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub player_id: String,
    #[serde(default)]
    pub name: NameData,
    #[serde(default)]
    pub transaction_data: TransactionDetail,
}

lenient! {
    pub struct TransactionDetail {
        kind: "type",
        source_type,
        source_team_key,
        source_team_name,
        destination_type,
        destination_team_key,
        destination_team_name,
    }
}
