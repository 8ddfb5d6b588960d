//! `get` subcommands: read-through views of the Yahoo API.

use anyhow::Result;

use super::common::{join_or_dash, open_client, print_json};
use crate::cli::GetCmd;
use crate::yahoo::stats::NbaStats;
use crate::yahoo::types::{DraftResult, League, Matchup, Player, RosterSlot, StandingsTeam, Team, Transaction};

pub fn format_league(l: &League) -> String {
    format!(
        "{}.l.{}\t{}\t{}\t{} teams\tweek {}",
        l.yahoo_game_key, l.yahoo_league_id, l.league_name, l.season_year, l.num_teams, l.current_week
    )
}

pub fn format_team(t: &Team) -> String {
    format!(
        "{}\t{}\t{}\t{}-{}-{}\trank {}",
        t.yahoo_team_key, t.team_name, t.manager_name, t.wins, t.losses, t.ties, t.rank
    )
}

pub fn format_roster_slot(s: &RosterSlot) -> String {
    let marker = if s.is_starting { "*" } else { " " };
    format!("{} {:<5}{:<5}{}", marker, s.selected_position, s.position, s.player_key)
}

pub fn format_standing(t: &StandingsTeam) -> String {
    let s = &t.standings;
    format!(
        "{:>2}. {}\t{}-{}-{}\tPF {:.2}\tPA {:.2}\tGB {}",
        s.rank,
        t.name,
        s.outcome_totals.wins,
        s.outcome_totals.losses,
        s.outcome_totals.ties,
        s.points_for,
        s.points_against,
        s.games_back
    )
}

pub fn format_matchup(m: &Matchup) -> String {
    let sides: Vec<String> = m
        .teams
        .iter()
        .map(|t| {
            let mark = if t.is_winner { " (W)" } else { "" };
            format!("{} {:.2}{}", t.name, t.points, mark)
        })
        .collect();
    format!("week {} [{}] {}", m.week, m.status, sides.join(" vs "))
}

pub fn format_player(p: &Player) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        p.player_key,
        p.name.full,
        p.editorial_team_abbr,
        join_or_dash(&p.eligible_positions)
    )
}

pub fn format_draft_pick(d: &DraftResult) -> String {
    format!("round {:>2} pick {:>3}\t{}\t{}", d.round, d.pick, d.team_key, d.player_key)
}

pub fn format_transaction(t: &Transaction) -> String {
    let moves: Vec<String> = t
        .players
        .iter()
        .map(|p| {
            let to = if p.data.destination_team_name.is_empty() {
                p.data.destination_type.as_str()
            } else {
                p.data.destination_team_name.as_str()
            };
            format!("{} {} -> {}", p.data.kind, p.name.full, to)
        })
        .collect();
    format!("{}\t{}\t{}\t{}", t.timestamp, t.kind, t.status, moves.join("; "))
}

fn print_lines<T>(items: &[T], empty: &str, format: impl Fn(&T) -> String) {
    if items.is_empty() {
        println!("{}", empty);
    }
    for item in items {
        println!("{}", format(item));
    }
}

/// Handle a `get` subcommand.
pub async fn handle_get(cmd: GetCmd) -> Result<()> {
    let client = open_client()?;

    match cmd {
        GetCmd::Leagues { game, json } => {
            let leagues = client.get_user_leagues(&game.resolve()?).await?;
            if json {
                return print_json(&leagues);
            }
            print_lines(&leagues, "No leagues found", format_league);
        }

        GetCmd::Teams { league, json } => {
            let teams = client.get_league_teams(&league).await?;
            if json {
                return print_json(&teams);
            }
            print_lines(&teams, "No teams found", format_team);
        }

        GetCmd::Roster { team, json } => {
            let roster = client.get_team_roster(&team).await?;
            if json {
                return print_json(&roster);
            }
            print_lines(&roster, "Roster is empty", format_roster_slot);
        }

        GetCmd::Standings { league, json } => {
            let standings = client.get_league_standings(&league).await?;
            if json {
                return print_json(&standings);
            }
            print_lines(&standings.teams, "No standings available", format_standing);
        }

        GetCmd::Matchups { league, week, json } => {
            let matchups = client.get_league_matchups(&league, week).await?;
            if json {
                return print_json(&matchups);
            }
            print_lines(&matchups, "No matchups found", format_matchup);
        }

        GetCmd::Players {
            league,
            status,
            start,
            count,
            json,
        } => {
            let players = client.get_league_players(&league, status, start, count).await?;
            if json {
                return print_json(&players);
            }
            print_lines(&players, "No players found", format_player);
        }

        GetCmd::PlayerStats {
            league,
            player,
            week,
            json,
        } => {
            let player = client.get_player_stats(&league, &player, week).await?;
            if json {
                return print_json(&player);
            }
            println!("{}", format_player(&player));
            if let Some(stats) = &player.player_stats {
                let line = NbaStats::parse(&stats.stats);
                println!(
                    "GP {}  PTS {}  REB {}  AST {}  STL {}  BLK {}  TO {}  3PM {}",
                    line.games_played,
                    line.points,
                    line.rebounds,
                    line.assists,
                    line.steals,
                    line.blocks,
                    line.turnovers,
                    line.three_pm
                );
                println!(
                    "FG {}/{} ({:.3})  FT {}/{} ({:.3})  TS% {:.3}  eFG% {:.3}",
                    line.fgm,
                    line.fga,
                    line.fg_pct,
                    line.ftm,
                    line.fta,
                    line.ft_pct,
                    line.true_shooting_pct(),
                    line.effective_fg_pct()
                );
            }
        }

        GetCmd::DraftResults { league, team, json } => {
            let picks = match (team, league) {
                (Some(team), _) => client.get_team_draft_results(&team).await?,
                (None, Some(league)) => client.get_league_draft_results(&league).await?,
                (None, None) => anyhow::bail!("either --league or --team is required"),
            };
            if json {
                return print_json(&picks);
            }
            print_lines(&picks, "No draft results", format_draft_pick);
        }

        GetCmd::Transactions { league, json } => {
            let transactions = client.get_league_transactions(&league).await?;
            if json {
                return print_json(&transactions);
            }
            print_lines(&transactions, "No transactions", format_transaction);
        }
    }

    Ok(())
}
