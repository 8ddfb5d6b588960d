//! Wire → domain converters.
//!
//! Numeric text that fails to parse becomes zero; Yahoo's `"1"` flags become
//! `true`.

use super::types::*;
use super::wire;
use std::str::FromStr;

#[cfg(test)]
mod tests;

fn parse_or_default<T: FromStr + Default>(raw: &str) -> T {
    raw.trim().parse().unwrap_or_default()
}

fn flag(raw: &str) -> bool {
    raw == "1"
}

fn stats_from_wire(stats: &[wire::StatData]) -> Vec<Stat> {
    stats
        .iter()
        .map(|s| Stat {
            stat_id: parse_or_default(&s.stat_id),
            value: s.value.clone(),
        })
        .collect()
}

fn name_from_wire(name: wire::NameData) -> PlayerName {
    PlayerName {
        full: name.full,
        first: name.first,
        last: name.last,
        ascii_first: name.ascii_first,
        ascii_last: name.ascii_last,
    }
}

pub fn league_from_wire(data: wire::LeagueData, game_key: &str) -> League {
    League {
        yahoo_league_id: data.league_id,
        yahoo_game_key: game_key.to_string(),
        league_name: data.name,
        season_year: parse_or_default(&data.season),
        scoring_type: data.scoring_type,
        num_teams: parse_or_default(&data.num_teams),
        current_week: parse_or_default(&data.current_week),
    }
}

/// Flatten the users → games → leagues nesting into one list.
pub fn leagues_from_response(resp: wire::LeaguesResponse, game_key: &str) -> Vec<League> {
    resp.fantasy_content
        .users
        .into_iter()
        .flat_map(|u| u.user)
        .flat_map(|u| u.games)
        .flat_map(|g| g.game)
        .flat_map(|g| g.leagues)
        .map(|l| league_from_wire(l.league, game_key))
        .collect()
}

pub fn team_from_wire(data: wire::TeamData) -> Team {
    let manager_name = data
        .managers
        .into_iter()
        .next()
        .map(|m| m.manager.nickname)
        .unwrap_or_default();
    let totals = &data.team_standings.outcome_totals;
    Team {
        yahoo_team_id: data.team_id,
        yahoo_team_key: data.team_key,
        team_name: data.name,
        manager_name,
        wins: parse_or_default(&totals.wins),
        losses: parse_or_default(&totals.losses),
        ties: parse_or_default(&totals.ties),
        rank: parse_or_default(&data.team_standings.rank),
    }
}

pub fn roster_slot_from_wire(data: wire::PlayerData) -> RosterSlot {
    let position = data
        .eligible_positions
        .into_iter()
        .next()
        .map(|p| p.position)
        .unwrap_or_default();
    let selected_position = data
        .selected_position
        .map(|p| p.position)
        .unwrap_or_default();
    RosterSlot {
        player_id: data.player_id,
        player_key: data.player_key,
        position,
        is_starting: selected_position != "BN",
        selected_position,
    }
}

pub fn player_from_wire(data: wire::PlayerData) -> Player {
    Player {
        player_key: data.player_key,
        player_id: data.player_id,
        name: name_from_wire(data.name),
        editorial_team_key: data.editorial_team_key,
        editorial_team_full_name: data.editorial_team_full_name,
        editorial_team_abbr: data.editorial_team_abbr,
        display_position: data.display_position,
        eligible_positions: data
            .eligible_positions
            .into_iter()
            .map(|p| p.position)
            .collect(),
        selected_position: data.selected_position.map(|p| p.position),
        player_stats: data.player_stats.map(|s| PlayerStats {
            coverage_type: s.coverage_type,
            week: parse_or_default(&s.week),
            stats: stats_from_wire(&s.stats.stat),
        }),
        player_points: data.player_points.map(|p| PlayerPoints {
            coverage_type: p.coverage_type,
            week: parse_or_default(&p.week),
            total: parse_or_default(&p.total),
        }),
    }
}

pub fn standings_team_from_wire(data: wire::TeamData) -> StandingsTeam {
    let managers: Vec<Manager> = data
        .managers
        .into_iter()
        .map(|m| Manager {
            manager_id: m.manager.manager_id,
            nickname: m.manager.nickname,
            guid: m.manager.guid,
            is_commissioner: flag(&m.manager.is_commissioner),
            is_current_login: flag(&m.manager.is_current_login),
        })
        .collect();
    let manager_nickname = managers
        .first()
        .map(|m| m.nickname.clone())
        .unwrap_or_default();

    let s = data.team_standings;
    StandingsTeam {
        team_key: data.team_key,
        team_id: data.team_id,
        name: data.name,
        manager_nickname,
        managers,
        standings: TeamStandings {
            rank: parse_or_default(&s.rank),
            playoff_seed: parse_or_default(&s.playoff_seed),
            outcome_totals: OutcomeTotals {
                wins: parse_or_default(&s.outcome_totals.wins),
                losses: parse_or_default(&s.outcome_totals.losses),
                ties: parse_or_default(&s.outcome_totals.ties),
                percentage: parse_or_default(&s.outcome_totals.percentage),
            },
            points_for: parse_or_default(&s.points_for),
            points_against: parse_or_default(&s.points_against),
            games_back: parse_or_default(&s.games_back),
            streak: s.streak.map(|st| Streak {
                kind: st.kind,
                value: parse_or_default(&st.value),
            }),
        },
    }
}

pub fn matchup_from_wire(data: wire::MatchupData) -> Matchup {
    let winner = data.winner_team_key;
    let teams = data
        .teams
        .team
        .into_iter()
        .map(|t| MatchupTeam {
            is_winner: !winner.is_empty() && t.team_key == winner,
            team_key: t.team_key,
            team_id: t.team_id,
            name: t.name,
            points: parse_or_default(&t.team_points.total),
            projected_points: parse_or_default(&t.team_projected_points.total),
            stats: t
                .team_stats
                .map(|s| stats_from_wire(&s.stats.stat))
                .unwrap_or_default(),
        })
        .collect();

    Matchup {
        week: parse_or_default(&data.week),
        week_start: data.week_start,
        week_end: data.week_end,
        status: data.status,
        is_playoffs: flag(&data.is_playoffs),
        is_consolation: flag(&data.is_consolation),
        is_tied: flag(&data.is_tied),
        winner_team_key: winner,
        teams,
    }
}

pub fn draft_result_from_wire(data: wire::DraftResultData) -> DraftResult {
    let player = data.players.map(|p| player_from_wire(p.player));
    DraftResult {
        pick: parse_or_default(&data.pick),
        round: parse_or_default(&data.round),
        team_key: data.team_key,
        player_key: player
            .as_ref()
            .map(|p| p.player_key.clone())
            .unwrap_or_default(),
        player,
    }
}

pub fn transaction_from_wire(data: wire::TransactionRecord) -> Transaction {
    Transaction {
        transaction_key: data.transaction_key,
        transaction_id: data.transaction_id,
        kind: data.kind,
        status: data.status,
        timestamp: parse_or_default(&data.timestamp),
        faab_bid: parse_or_default(&data.faab_bid),
        players: data
            .players
            .into_iter()
            .map(|p| {
                let d = p.player.transaction_data;
                TransactionPlayer {
                    player_key: p.player.player_key,
                    player_id: p.player.player_id,
                    name: name_from_wire(p.player.name),
                    data: TransactionData {
                        kind: d.kind,
                        source_type: d.source_type,
                        source_team_key: d.source_team_key,
                        source_team_name: d.source_team_name,
                        destination_type: d.destination_type,
                        destination_team_key: d.destination_team_key,
                        destination_team_name: d.destination_team_name,
                    },
                }
            })
            .collect(),
    }
}
