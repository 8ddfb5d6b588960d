//! Commands that build and score the local league mirror.

use anyhow::Result;

use super::common::{join_or_dash, open_client, open_database, print_json};
use crate::cli::GameArgs;
use crate::services::{AnalysisService, LeagueService, ValuationService};
use crate::storage::{PlayerProjection, TeamAnalysisRecord};

/// Import a Yahoo league and sync its teams and rosters.
pub async fn handle_import_league(game: GameArgs, league_id: String, team_id: String) -> Result<()> {
    let game_key = game.resolve()?;
    let client = open_client()?;
    let mut db = open_database()?;

    println!("Importing league {} (game {})...", league_id, game_key);
    let local_id = LeagueService::new(&client, &mut db)
        .import_league(&game_key, &league_id, &team_id)
        .await?;

    let teams = db.get_teams_by_league(local_id)?;
    println!("✓ League imported as local id {} with {} teams", local_id, teams.len());
    for team in &teams {
        let marker = if team.is_user_team { "*" } else { " " };
        println!("{} {:>4}  {}", marker, team.id, team.team_name);
    }
    Ok(())
}

/// Top `top` projections ordered by overall rank.
pub fn top_projections(mut values: Vec<PlayerProjection>, top: usize) -> Vec<PlayerProjection> {
    values.sort_by(|a, b| {
        a.overall_rank
            .cmp(&b.overall_rank)
            .then(a.player_id.cmp(&b.player_id))
    });
    values.truncate(top);
    values
}

pub fn handle_value_players(
    league_id: i64,
    stats_season: Option<String>,
    top: usize,
    json: bool,
) -> Result<()> {
    let mut db = open_database()?;
    let mut service = ValuationService::new(&mut db);
    if let Some(season) = stats_season {
        service = service.with_season(season);
    }
    let values = top_projections(service.calculate_all_player_values(league_id)?, top);

    if json {
        return print_json(&values);
    }
    if values.is_empty() {
        println!("No active players to value");
    }
    for v in &values {
        let name = db
            .get_player(v.player_id)?
            .map(|p| p.full_name)
            .unwrap_or_else(|| format!("player {}", v.player_id));
        println!(
            "{:>4}. {:<28}{:<4}FPG {:>6.2}  z {:>5.2}  pos rank {}",
            v.overall_rank, name, v.position, v.fpg, v.z_score, v.position_rank
        );
    }
    Ok(())
}

pub fn format_analysis(team_name: &str, a: &TeamAnalysisRecord) -> String {
    format!(
        "{}\n  strong: {}\n  weak:   {}\n  needs:  {}",
        team_name,
        join_or_dash(&a.strongest),
        join_or_dash(&a.weakest),
        join_or_dash(&a.position_needs)
    )
}

pub fn handle_analyze_teams(league_id: i64, json: bool) -> Result<()> {
    let mut db = open_database()?;
    let analyses = AnalysisService::new(&mut db).analyze_all_teams(league_id)?;

    if json {
        return print_json(&analyses);
    }
    if analyses.is_empty() {
        println!("No teams in league {}", league_id);
    }
    for a in &analyses {
        let name = db
            .get_team(a.team_id)?
            .map(|t| t.team_name)
            .unwrap_or_else(|| format!("team {}", a.team_id));
        println!("{}", format_analysis(&name, a));
    }
    Ok(())
}
